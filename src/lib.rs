pub mod catalog {
    pub mod command {
        pub mod get_resource_cmd;
        pub mod loan_resource_cmd;
        pub mod register_resource_cmd;
        pub mod return_resource_cmd;
        pub mod search_by_title_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod factory;
    pub mod server;
}

pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
}

pub mod gateway;

pub mod resources {
    pub mod domain;
    pub mod dto;
}

pub mod utils {
    pub mod date;
    pub mod logs;
}
