//! Syntactic addr-spec email validation.
//!
//! The address is split on its last `@`. The local part is a dot-separated
//! sequence of atoms and quoted strings; the domain is a DNS hostname or a
//! bracketed IP-literal. Nothing is looked up.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::ip::{parse_ipv4, parse_ipv6};

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;
const MAX_LABELS: usize = 127;

lazy_static! {
    // atom = printable ASCII minus specials; quoted string may escape anything
    static ref LOCAL_PART: Regex = Regex::new(concat!(
        r#"^(?:[\x21\x23-\x27\x2A\x2B\x2D\x2F-\x39\x3D\x3F\x41-\x5A\x5E-\x7E]+"#,
        r#"|\x22(?:[\x01-\x08\x0B\x0C\x0E-\x1F\x21\x23-\x5B\x5D-\x7F]|\x5C[\x00-\x7F])*\x22)"#,
        r#"(?:\.(?:[\x21\x23-\x27\x2A\x2B\x2D\x2F-\x39\x3D\x3F\x41-\x5A\x5E-\x7E]+"#,
        r#"|\x22(?:[\x01-\x08\x0B\x0C\x0E-\x1F\x21\x23-\x5B\x5D-\x7F]|\x5C[\x00-\x7F])*\x22))*$"#,
    )).unwrap();
    static ref HOSTNAME: Regex = Regex::new(concat!(
        r"(?i-u)^(?:(?:xn--)?[a-z0-9]+(?:-+[a-z0-9]+)*\.)+",
        r"(?:[a-z][a-z0-9]*|xn--[a-z0-9]+)(?:-+[a-z0-9]+)*$",
    )).unwrap();
}

/// True iff `value` is a syntactically valid email address.
pub fn email(value: &str) -> bool {
    if value.len() > MAX_ADDRESS_LEN {
        trace!(len = value.len(), "email too long");
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        trace!(value, "email without @");
        return false;
    };
    if local.is_empty() || local.len() > MAX_LOCAL_LEN || !LOCAL_PART.is_match(local) {
        trace!(local, "bad email local part");
        return false;
    }
    let accepted = match domain.strip_prefix('[') {
        Some(literal) => literal.strip_suffix(']').is_some_and(ip_literal),
        None => hostname(domain),
    };
    if !accepted {
        trace!(domain, "bad email domain");
    }
    accepted
}

fn hostname(domain: &str) -> bool {
    let labels = domain.split('.').count();
    labels <= MAX_LABELS
        && domain.split('.').all(|label| label.len() <= MAX_LABEL_LEN)
        && HOSTNAME.is_match(domain)
}

fn ip_literal(inner: &str) -> bool {
    match inner.get(..5) {
        Some(tag) if tag.eq_ignore_ascii_case("ipv6:") => ipv6_literal(&inner[5..]),
        _ => parse_ipv4(inner).is_some(),
    }
}

// A compressed literal leaves room for at least two elided groups, and an
// IPv4 tail takes up two groups itself.
fn ipv6_literal(address: &str) -> bool {
    if parse_ipv6(address).is_none() {
        return false;
    }
    if !address.contains("::") {
        return true;
    }
    let groups = address
        .split(':')
        .filter(|group| !group.is_empty() && !group.contains('.'))
        .count();
    let limit = if address.contains('.') { 4 } else { 6 };
    groups <= limit
}
