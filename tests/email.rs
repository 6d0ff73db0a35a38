use semval::email;

#[test]
fn plain_addresses() {
    assert!(email("hi@example.com"));
    assert!(email("first.last+tag@sub.example.co.uk"));
    assert!(email("UPPER@EXAMPLE.COM"));
    assert!(email("o'brien@example.ie"));
    assert!(email("user@xn--bcher-kva.example"));
}

#[test]
fn missing_parts() {
    assert!(!email(""));
    assert!(!email("bad@"));
    assert!(!email("@example.com"));
    assert!(!email("no-at-sign.example.com"));
    // a single-label domain is not enough
    assert!(!email("user@localhost"));
}

#[test]
fn local_part_rules() {
    assert!(!email("a..b@example.com"), "empty atom between dots");
    assert!(!email(".a@example.com"));
    assert!(!email("a.@example.com"));
    assert!(!email("john doe@example.com"));
    assert!(email("\"john..doe\"@example.com"), "dots are fine inside quotes");
    assert!(email("\"a@b\"@example.com"), "split happens on the last @");
    assert!(email("\"esc\\\"aped\"@example.com"));
    assert!(!email("\"john doe\"@example.com"), "unescaped space inside quotes");
    assert!(!email("\"unterminated@example.com"));
}

#[test]
fn domain_rules() {
    assert!(!email("user@-example.com"));
    assert!(!email("user@example-.com"));
    assert!(!email("user@example..com"));
    assert!(!email("user@example.123"), "top-level label must start with a letter");
    assert!(!email("user@exa_mple.com"));
    let long_label = format!("user@{}.com", "a".repeat(64));
    assert!(!email(&long_label));
    let max_label = format!("user@{}.com", "a".repeat(63));
    assert!(email(&max_label));
}

#[test]
fn hostnames_are_ascii_only() {
    // KELVIN SIGN and LONG S fold to 'k' and 's' under Unicode case folding
    assert!(!email("hi@\u{212A}ite.com"));
    assert!(!email("hi@example.\u{17F}e"));
    assert!(!email("hi@m\u{fc}nchen.de"));
    assert!(email("hi@KITE.COM"));
    assert!(email("hi@XN--mnchen-3ya.de"));
}

#[test]
fn ip_literals() {
    assert!(email("user@[127.0.0.1]"));
    assert!(email("user@[IPv6:2001:db8::1]"));
    assert!(email("user@[ipv6:2001:db8::1]"));
    assert!(email("user@[IPv6:1:2:3:4:5:6:7:8]"));
    assert!(!email("user@[999.1.1.1]"));
    assert!(!email("user@[01.1.1.1]"));
    assert!(!email("user@[2001:db8::1]"), "IPv6 literal needs its tag");
    assert!(!email("user@[IPv6:1:2:3:4:5:6:7::]"), "too many groups for a compressed literal");
    assert!(!email("user@[127.0.0.1"));
}

#[test]
fn length_limits() {
    let local = "a".repeat(64);
    assert!(email(&format!("{local}@example.com")));
    let local = "a".repeat(65);
    assert!(!email(&format!("{local}@example.com")));
    let domain = format!("{}.com", vec!["abcdefghij"; 22].join("."));
    let address = format!("user@{domain}");
    assert!(address.len() <= 254);
    assert!(email(&address));
    let domain = format!("{}.com", vec!["abcdefghij"; 23].join("."));
    assert!(!email(&format!("user@{domain}")));
}

#[test]
fn accepted_addresses_split_on_last_at() {
    let accepted = ["hi@example.com", "\"a@b\"@example.com", "user@[127.0.0.1]", "x@y.io"];
    for address in accepted {
        assert!(email(address), "{address} should be accepted");
        let (local, domain) = address.rsplit_once('@').unwrap();
        assert!(!local.is_empty());
        // the domain stands on its own behind any local part
        assert!(email(&format!("a@{domain}")), "domain of {address}");
    }
}
