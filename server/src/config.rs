use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

/// Where the server listens. The binary always runs with the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}
