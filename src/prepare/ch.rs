use super::Lines;

pub const CH: &super::Dialect = &super::Dialect {
    name: "ch",
    prepare,
};

/// Line prefixes opening a field, with the label they are emitted under
///
/// Longer prefixes come first so that they win over their own prefixes.
const TOKENS: &[(&str, &str)] = &[
    ("Domain name", "Domain name"),
    ("Holder of domain name", "Holder"),
    ("Holder", "Holder"),
    ("Technical contact", "Technical contact"),
    ("Registrar", "Registrar"),
    ("DNSSEC", "DNSSEC"),
    ("Name servers", "Name servers"),
    ("First registration date", "First registration date"),
];

/// Fields packing several comma separated values
const COMPOUND: &[(&str, &[&str])] = &[
    (
        "Holder",
        &[
            "Registrant organization",
            "Registrant name",
            "Registrant street",
        ],
    ),
    (
        "Technical contact",
        &[
            "Technical organization",
            "Technical name",
            "Technical street",
        ],
    ),
];

#[derive(Debug)]
enum Entry {
    /// Labeled line found before the first field
    Preamble(String),
    Field { label: &'static str, value: String },
}

/// Matches `line` against the field tokens, case-insensitively
///
/// The token must be followed by whitespace, a colon or the end of the line.
fn match_token(line: &str) -> Option<(&'static str, &str)> {
    TOKENS.iter().find_map(|(token, label)| {
        let head = line.get(..token.len())?;
        if !head.eq_ignore_ascii_case(token) {
            return None;
        }
        let rest = &line[token.len()..];
        if !(rest.is_empty() || rest.starts_with(':') || rest.starts_with(char::is_whitespace)) {
            return None;
        }
        let rest = rest.trim_start();
        Some((*label, rest.strip_prefix(':').unwrap_or(rest).trim()))
    })
}

fn prepare(text: &str) -> String {
    let mut entries: Vec<Entry> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if let Some((label, value)) = match_token(line) {
            entries.push(Entry::Field {
                label,
                value: value.to_string(),
            });
            continue;
        }
        match entries.last_mut() {
            Some(Entry::Field { value, .. }) if value.is_empty() => value.push_str(line),
            Some(Entry::Field { value, .. }) => {
                value.push_str(", ");
                value.push_str(line);
            }
            _ if line.contains(':') => entries.push(Entry::Preamble(line.to_string())),
            _ => {}
        }
    }

    let mut out = Lines::default();
    for entry in entries {
        match entry {
            Entry::Preamble(line) => out.push(line),
            Entry::Field { label, value } => match super::lookup(COMPOUND, label) {
                Some(parts) => {
                    // The last part takes whatever is left over
                    for (part, v) in parts.iter().zip(value.splitn(parts.len(), ", ")) {
                        out.field(part, v);
                    }
                }
                None => out.field(label, &value),
            },
        }
    }
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found() {
        const RESP: &str = "\
whois: This information is subject to an Acceptable Use Policy.\r
See https://www.nic.ch/terms/aup/\r
\r
\r
Domain name\r
google.ch\r
\r
Holder of domain name\r
Google LLC\r
Domain Administrator\r
1600 Amphitheatre Parkway\r
US-CA94043 Mountain View, CA\r
United States\r
\r
Technical contact\r
Google Inc.\r
DNS Admin\r
\r
Registrar\r
MarkMonitor Inc.\r
\r
DNSSEC:N\r
\r
Name servers\r
ns1.google.com\r
ns2.google.com\r
\r
First registration date\r
2000-01-12\r
";
        let prepared = CH.apply(RESP);
        assert_eq!(
            prepared,
            "\
whois: This information is subject to an Acceptable Use Policy.
See https://www.nic.ch/terms/aup/
Domain name: google.ch
Registrant organization: Google LLC
Registrant name: Domain Administrator
Registrant street: 1600 Amphitheatre Parkway, US-CA94043 Mountain View, CA, United States
Technical organization: Google Inc.
Technical name: DNS Admin
Registrar: MarkMonitor Inc.
DNSSEC: N
Name servers: ns1.google.com, ns2.google.com
First registration date: 2000-01-12"
        );
    }

    #[test]
    fn holder_split() {
        let prepared = CH.apply("Holder\nAcme AG, Jane Doe, Main Street 1\n");
        assert_eq!(
            prepared,
            "Registrant organization: Acme AG\nRegistrant name: Jane Doe\nRegistrant street: Main Street 1"
        );
    }

    #[test]
    fn empty_fields() {
        let prepared = CH.apply("Domain name example.ch\nRegistrar\nHolder\n");
        assert_eq!(
            prepared,
            "Domain name: example.ch\nRegistrar:\nRegistrant organization:"
        );
    }

    #[test]
    fn unlabeled_preamble_dropped() {
        let prepared = CH.apply("Swiss registry\nTerms: see website\nDomain name\nexample.ch\n");
        assert_eq!(prepared, "Terms: see website\nDomain name: example.ch");
    }

    #[test]
    fn token_boundaries() {
        assert_eq!(match_token("HOLDER"), Some(("Holder", "")));
        assert_eq!(match_token("holder of domain name:"), Some(("Holder", "")));
        assert_eq!(match_token("DNSSEC : Y"), Some(("DNSSEC", "Y")));
        assert_eq!(match_token("Registrars"), None);
        assert_eq!(match_token("Reg"), None);
    }
}
