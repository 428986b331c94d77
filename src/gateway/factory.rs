use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub(crate) fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new())
        }
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new())
        }
    }
}
