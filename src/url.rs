//! URL validation.
//!
//! The value is first held against the URL character set, then split into
//! its generic components with the RFC 3986 reference expression. Host
//! syntax is only enforced for `http` and `https`; every scheme except
//! `mailto`, `news` and `file` needs some host.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::ip::parse_ipv6;

const HOSTLESS_SCHEMES: [&str; 3] = ["mailto", "news", "file"];
const MAX_HOST_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

lazy_static! {
    static ref COMPONENTS: Regex =
        Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(\?[^#]*)?(#.*)?$").unwrap();
    static ref SCHEME: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").unwrap();
    static ref USERINFO: Regex =
        Regex::new(r"^(?:[A-Za-z0-9\-._~!$&'()*+,;=:]|%[0-9A-Fa-f]{2})*$").unwrap();
}

/// Structural requirements on top of a well-formed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlFlags {
    pub require_path: bool,
    pub require_query: bool,
}

impl UrlFlags {
    pub fn require_path(mut self) -> Self {
        self.require_path = true;
        self
    }
    pub fn require_query(mut self) -> Self {
        self.require_query = true;
        self
    }
}

/// The pieces of a URL that passed the character and scheme checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: &'a str,
    pub userinfo: Option<&'a str>,
    pub host: Option<&'a str>,
    pub port: Option<u16>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// True iff `value` is a URL with a scheme that meets `flags`.
pub fn url(value: &str, flags: UrlFlags) -> bool {
    let Some(parts) = split(value) else {
        trace!(value, "unparseable url");
        return false;
    };
    let http = parts.scheme.eq_ignore_ascii_case("http") || parts.scheme.eq_ignore_ascii_case("https");
    match parts.host {
        Some(host) if http && !valid_host(host) => {
            trace!(host, "bad url host");
            return false;
        }
        None if !HOSTLESS_SCHEMES.iter().any(|s| parts.scheme.eq_ignore_ascii_case(s)) => {
            trace!(scheme = parts.scheme, "url without host");
            return false;
        }
        _ => (),
    }
    if flags.require_path && parts.path.is_empty() {
        trace!(value, "url path required");
        return false;
    }
    if flags.require_query && parts.query.is_none() {
        trace!(value, "url query required");
        return false;
    }
    parts.userinfo.is_none_or(|userinfo| USERINFO.is_match(userinfo))
}

/// Split `value` into components, or `None` if it is not a URL at all.
///
/// An authority that is present but empty (`file:///tmp`) yields no host.
pub fn split(value: &str) -> Option<UrlParts<'_>> {
    if value.is_empty() || !value.bytes().all(url_char) {
        return None;
    }
    let captures = COMPONENTS.captures(value)?;
    let scheme = captures.get(1)?.as_str();
    if !SCHEME.is_match(scheme) {
        return None;
    }
    let (userinfo, host, port) = match captures.get(2).map(|m| m.as_str()) {
        Some(authority) => split_authority(authority)?,
        None => (None, None, None),
    };
    Some(UrlParts {
        scheme,
        userinfo,
        host,
        port,
        path: captures.get(3).map_or("", |m| m.as_str()),
        query: captures.get(4).map(|m| &m.as_str()[1..]),
        fragment: captures.get(5).map(|m| &m.as_str()[1..]),
    })
}

type Authority<'a> = (Option<&'a str>, Option<&'a str>, Option<u16>);

fn split_authority(authority: &str) -> Option<Authority<'_>> {
    let (userinfo, hostport) = match authority.rsplit_once('@') {
        Some((userinfo, hostport)) => (Some(userinfo), hostport),
        None => (None, authority),
    };
    // the port colon comes after any bracketed literal
    let port_colon = match hostport.rfind(']') {
        Some(close) => hostport[close..].find(':').map(|i| close + i),
        None => hostport.rfind(':'),
    };
    let (host, port) = match port_colon {
        Some(i) => (&hostport[..i], parse_port(&hostport[i + 1..])?),
        None => (hostport, None),
    };
    let host = if host.is_empty() { None } else { Some(host) };
    Some((userinfo, host, port))
}

// an empty port ("host:") is tolerated and means no port
fn parse_port(digits: &str) -> Option<Option<u16>> {
    if digits.is_empty() {
        return Some(None);
    }
    if digits.len() > 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u16>().ok().map(Some)
}

fn valid_host(host: &str) -> bool {
    if let Some(literal) = host.strip_prefix('[') {
        return literal.strip_suffix(']').and_then(parse_ipv6).is_some();
    }
    let host = host.strip_suffix('.').unwrap_or(host);
    !host.is_empty()
        && host.len() <= MAX_HOST_LEN
        && host.split('.').all(|label| {
            let bytes = label.as_bytes();
            !bytes.is_empty()
                && bytes.len() <= MAX_LABEL_LEN
                && bytes[0].is_ascii_alphanumeric()
                && bytes[bytes.len() - 1].is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        })
}

fn url_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=".contains(&b)
}
