use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// Fixed classification of periodicals, each with a numeric code and a display label.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PeriodicalCategory {
    Science,
    Sports,
    Entertainment,
    History,
    Philosophy,
}

impl PeriodicalCategory {
    pub const ALL: [PeriodicalCategory; 5] = [
        PeriodicalCategory::Science,
        PeriodicalCategory::Sports,
        PeriodicalCategory::Entertainment,
        PeriodicalCategory::History,
        PeriodicalCategory::Philosophy,
    ];

    pub fn code(&self) -> i32 {
        match self {
            PeriodicalCategory::Science => 4454,
            PeriodicalCategory::Sports => 7889,
            PeriodicalCategory::Entertainment => 48216,
            PeriodicalCategory::History => 78434,
            PeriodicalCategory::Philosophy => 7456,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodicalCategory::Science => "science",
            PeriodicalCategory::Sports => "sports",
            PeriodicalCategory::Entertainment => "entertainment",
            PeriodicalCategory::History => "history",
            PeriodicalCategory::Philosophy => "philosophy",
        }
    }

    pub fn from_code(code: i32) -> Option<PeriodicalCategory> {
        PeriodicalCategory::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl Display for PeriodicalCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
