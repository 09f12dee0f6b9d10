use super::fields::{lenient_number, split_prefix};
use std::convert::TryFrom;

/// A `Host` header value broken into hostname and optional port.
#[derive(Debug, Eq, PartialEq)]
pub struct HostAddress {
    pub hostname: String,
    pub port: Option<u16>,
}

/// Split a `Host` header value on the first `":"`.
///
/// A value without a colon, or with nothing after it, leaves the port
/// unset.  Non-numeric text after the colon yields port 0 rather than
/// failing; the hostname is still usable for routing.
#[must_use]
pub fn parse_host_field(value: &str) -> HostAddress {
    match split_prefix(value, ":") {
        None => HostAddress{
            hostname: value.into(),
            port: None,
        },
        Some((hostname, "")) => HostAddress{
            hostname,
            port: None,
        },
        Some((hostname, at_port)) => HostAddress{
            hostname,
            port: Some(
                u16::try_from(lenient_number(at_port)).unwrap_or(0)
            ),
        },
    }
}
