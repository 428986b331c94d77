use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in memory; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.lock().await;
        events.push(event.clone());
        tracing::debug!(event_id = event.event_id.as_str(), event_name = event.name.as_str(),
            buffered = events.len(), "buffered domain event");
        Ok(())
    }
}
