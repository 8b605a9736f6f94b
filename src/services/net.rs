use std::net::Ipv4Addr;

use nix::ifaddrs::getifaddrs;
use thiserror::Error;

/// Network interface lookup error.
#[derive(Debug, Error)]
pub enum NetError {
    /// Interface missing, or present without an IPv4 address.
    #[error("no IPv4 address on interface '{0}'")]
    NoAddress(String),

    /// Interface enumeration failed.
    #[error("cannot enumerate network interfaces: {0}")]
    Sys(#[from] nix::Error),
}

/// IPv4 address of the named network interface.
///
/// Used by tester hosts to report their own address back to the
/// course machine.
pub fn interface_ip(ifname: &str) -> Result<Ipv4Addr, NetError> {
    for ifaddr in getifaddrs()? {
        if ifaddr.interface_name != ifname {
            continue;
        }
        if let Some(address) = ifaddr.address
            && let Some(sin) = address.as_sockaddr_in()
        {
            return Ok(Ipv4Addr::from(sin.ip()));
        }
    }
    Err(NetError::NoAddress(ifname.to_string()))
}
