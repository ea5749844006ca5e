use std::net::{AddrParseError, SocketAddrV4};
use std::str::FromStr;

/// Listens on every interface, like a bare `:8080`.
pub(crate) const DEFAULT_HOST_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
}

impl ServerConfig {
    /// `host` is the raw `HOST` value, unset falls back to [`DEFAULT_HOST_ADDR`].
    pub fn from_host(host: Option<&str>) -> Result<Self, AddrParseError> {
        let addr = SocketAddrV4::from_str(host.unwrap_or(DEFAULT_HOST_ADDR))?;
        Ok(Self { addr })
    }
}
