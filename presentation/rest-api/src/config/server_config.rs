use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::env::var_or;

const DEFAULT_IP: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8080;

/// Address the HTTP listener binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub ip: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `SERVICE_IP` and `SERVICE_PORT`. Unparseable values fall back to
    /// the defaults with a warning rather than aborting startup.
    pub fn from_env() -> Self {
        Self {
            ip: var_or("SERVICE_IP", DEFAULT_IP),
            port: var_or("SERVICE_PORT", DEFAULT_PORT),
        }
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}
