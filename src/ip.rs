//! IP address validation.
//!
//! IPv4 is parsed by hand so the dotted-quad rules are pinned down here
//! (four octets, no leading zeros, nothing above 255). IPv6 goes through
//! [`std::net::Ipv6Addr`], which already rejects zone identifiers, groups
//! wider than four hex digits and repeated `::` compressions.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which address families an [`ip`] check accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpFamily {
    #[default]
    Any,
    V4,
    V6,
}

/// Family selection plus the optional range exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IpFlags {
    pub family: IpFamily,
    pub no_private_range: bool,
    pub no_reserved_range: bool,
}

impl IpFlags {
    pub fn new(family: IpFamily) -> Self {
        Self { family, ..Self::default() }
    }
    pub fn no_private_range(mut self) -> Self {
        self.no_private_range = true;
        self
    }
    pub fn no_reserved_range(mut self) -> Self {
        self.no_reserved_range = true;
        self
    }
}

impl From<IpFamily> for IpFlags {
    fn from(family: IpFamily) -> Self {
        Self::new(family)
    }
}

/// True iff `value` is an address of the allowed family.
pub fn ip(value: &str, family: IpFamily) -> bool {
    ip_with(value, &IpFlags::new(family))
}

/// Like [`ip`], additionally applying the private/reserved range flags.
pub fn ip_with(value: &str, flags: &IpFlags) -> bool {
    let accepted = match flags.family {
        IpFamily::Any => match parse_ipv4(value) {
            Some(v4) => Some(check_v4(v4, flags)),
            None => parse_ipv6(value).map(|v6| check_v6(v6, flags)),
        },
        IpFamily::V4 => parse_ipv4(value).map(|v4| check_v4(v4, flags)),
        IpFamily::V6 => parse_ipv6(value).map(|v6| check_v6(v6, flags)),
    };
    match accepted {
        Some(ok) => ok,
        None => {
            trace!(value, family = ?flags.family, "not an ip address");
            false
        }
    }
}

/// Strict dotted-quad parse.
pub fn parse_ipv4(value: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut count = 0;
    for part in value.split('.') {
        if count >= 4 {
            return None;
        }
        octets[count] = parse_octet(part)?;
        count += 1;
    }
    if count != 4 {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

fn parse_octet(part: &str) -> Option<u8> {
    let bytes = part.as_bytes();
    if bytes.is_empty() || bytes.len() > 3 {
        return None;
    }
    // "0" is fine, "01" is not
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    let mut octet: u16 = 0;
    for byte in bytes {
        if !byte.is_ascii_digit() {
            return None;
        }
        octet = octet * 10 + (byte - b'0') as u16;
    }
    u8::try_from(octet).ok()
}

/// Colon-hex parse. An embedded IPv4 tail must also pass [`parse_ipv4`].
pub fn parse_ipv6(value: &str) -> Option<Ipv6Addr> {
    if !value.contains(':') {
        return None;
    }
    if let Some(dot) = value.rfind(':').filter(|_| value.contains('.')) {
        parse_ipv4(&value[dot + 1..])?;
    }
    Ipv6Addr::from_str(value).ok()
}

fn check_v4(addr: Ipv4Addr, flags: &IpFlags) -> bool {
    if flags.no_private_range && addr.is_private() {
        trace!(%addr, "private ipv4 range");
        return false;
    }
    if flags.no_reserved_range && is_reserved_v4(addr) {
        trace!(%addr, "reserved ipv4 range");
        return false;
    }
    true
}

fn check_v6(addr: Ipv6Addr, flags: &IpFlags) -> bool {
    if flags.no_private_range && (addr.segments()[0] & 0xfe00) == 0xfc00 {
        trace!(%addr, "private ipv6 range");
        return false;
    }
    if flags.no_reserved_range && is_reserved_v6(addr) {
        trace!(%addr, "reserved ipv6 range");
        return false;
    }
    true
}

// 0/8, 127/8, 169.254/16 and 240/4
fn is_reserved_v4(addr: Ipv4Addr) -> bool {
    let [a, b, _, _] = addr.octets();
    a == 0 || a == 127 || (a == 169 && b == 254) || a >= 240
}

// ::/128, ::1/128, ::ffff:0:0/96 and fe80::/10
fn is_reserved_v6(addr: Ipv6Addr) -> bool {
    let s = addr.segments();
    addr.is_unspecified()
        || addr.is_loopback()
        || (s[..5] == [0, 0, 0, 0, 0] && s[5] == 0xffff)
        || (s[0] & 0xffc0) == 0xfe80
}
