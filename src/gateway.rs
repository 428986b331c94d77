pub mod events;
pub mod factory;
pub mod logs {
    pub mod publisher;
}
pub mod memory {
    pub mod publisher;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum GatewayPublisherVia {
    Logs,
    Memory,
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_create_publisher_via() {
        assert_ne!(GatewayPublisherVia::Logs, GatewayPublisherVia::Memory);
    }
}
