//! Gateway configuration

/// Configuration for the websocket gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// TCP port to listen on (default: 8080)
    pub port: u16,
    /// Outbound broadcast queue length; a client that falls further behind
    /// than this many frames is dropped
    pub broadcast_capacity: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            broadcast_capacity: 1024,
        }
    }
}

impl GatewayConfig {
    /// Build from the environment, falling back to defaults
    ///
    /// Recognizes `GATEWAY_PORT` and `GATEWAY_BROADCAST_CAPACITY`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var("GATEWAY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.port = port;
        }
        if let Some(capacity) = std::env::var("GATEWAY_BROADCAST_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.broadcast_capacity = capacity;
        }
        config
    }
}
