mod ch;
mod edu;
mod fr;
mod hk;
mod int;
mod it;
mod jp;
mod kr;
mod mo;
mod ru;
mod tw;
mod uk;

use crate::PreparedWhois;
use std::borrow::Cow;
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, trace, warn};

static SEARCH_DOMAIN: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
    regex::Regex::new(
        r"(?i)\[?Domain(?:\s+name)?\]?\s*:?\s*[a-z0-9\-]+(?:\.[a-z0-9\-]+)*\.([a-z]{2,})",
    )
    .unwrap()
});

/// The layout convention of one registry's WHOIS server
#[derive(Debug)]
pub struct Dialect {
    name: &'static str,
    prepare: fn(text: &str) -> String,
}

impl Dialect {
    /// The dialect name (the primary TLD it was written for)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Normalizes a raw response written in this dialect
    pub fn apply(&self, text: &str) -> String {
        (self.prepare)(&normalize_whitespace(text))
    }
}

const KNOWN_TLDS: &[(&str, &Dialect)] = &[
    ("edu", edu::EDU),
    ("int", int::INT),
    ("mo", mo::MO),
    ("hk", hk::HK),
    ("tw", tw::TW),
    ("ch", ch::CH),
    ("it", it::IT),
    ("fr", fr::FR),
    ("re", fr::FR),
    ("tf", fr::FR),
    ("yt", fr::FR),
    ("pm", fr::FR),
    ("wf", fr::FR),
    ("ru", ru::RU),
    ("su", ru::RU),
    ("jp", jp::JP),
    ("uk", uk::UK),
    ("kr", kr::KR),
];

/// Strips carriage returns and turns tabs into spaces
pub fn normalize_whitespace(text: &str) -> String {
    text.replace('\r', "").replace('\t', " ")
}

/// Extracts the lower-cased TLD of the first domain name announced in `text`
pub fn detect_tld(text: &str) -> Option<String> {
    SEARCH_DOMAIN
        .captures(text)
        .map(|cap| cap[1].to_ascii_lowercase())
}

/// Looks up the dialect registered for `tld` (case-insensitive)
pub fn dialect_for(tld: &str) -> Option<&'static Dialect> {
    let tld = tld.to_ascii_lowercase();
    KNOWN_TLDS
        .iter()
        .find_map(|(t, d)| if *t == tld { Some(*d) } else { None })
}

/// Every TLD label with a registered dialect
pub fn supported_tlds() -> impl Iterator<Item = &'static str> {
    KNOWN_TLDS.iter().map(|(t, _)| *t)
}

/// Normalizes a raw WHOIS response into canonical `Label: Value` lines
///
/// Responses from unsupported registries come back with only carriage
/// returns stripped and tabs expanded.
pub fn prepare(text: &str) -> String {
    prepare_traced(text).text
}

/// Like [`prepare`], but also reports the detected TLD and the dialect used
pub fn prepare_traced(text: &str) -> PreparedWhois {
    let text = normalize_whitespace(text);
    let tld = detect_tld(&text);
    match tld.as_deref() {
        Some(tld) => debug!("TLD for response is {}", tld),
        None => debug!("No domain name found in response"),
    }
    run(tld, &text)
}

/// Normalizes a response whose TLD is already known, skipping detection
pub fn prepare_for_tld(tld: &str, text: &str) -> String {
    prepare_traced_for_tld(tld, text).text
}

/// Like [`prepare_for_tld`], but also reports the dialect used
pub fn prepare_traced_for_tld(tld: &str, text: &str) -> PreparedWhois {
    let text = normalize_whitespace(text);
    run(Some(tld.to_ascii_lowercase()), &text)
}

fn run(tld: Option<String>, text: &str) -> PreparedWhois {
    let dialect = tld.as_deref().and_then(|t| {
        let dialect = dialect_for(t);
        match dialect {
            Some(d) => debug!("Dialect for {} is {}", t, d.name),
            None => debug!("No dialect for {}, passing through", t),
        }
        dialect
    });
    let text = match dialect {
        Some(d) => (d.prepare)(text),
        None => text.to_string(),
    };
    trace!("Prepared response:\n{}", text);
    PreparedWhois {
        tld,
        dialect: dialect.map(Dialect::name),
        text,
    }
}

/// Output accumulator shared by the dialects
///
/// Keeps the canonical lines in input order and lets a dialect glue
/// unlabeled physical lines onto the previous logical field.
#[derive(Debug, Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push<S: Into<String>>(&mut self, line: S) {
        self.0.push(line.into());
    }

    /// Emits `label: value`, or a bare `label:` when the value is empty
    fn field(&mut self, label: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.0.push(format!("{label}:"));
        } else {
            self.0.push(format!("{label}: {value}"));
        }
    }

    /// Appends `fragment` to the previous line, separated by `sep`
    fn join_last(&mut self, sep: &str, fragment: &str) {
        match self.0.last_mut() {
            Some(last) => {
                last.push_str(sep);
                last.push_str(fragment);
            }
            None => self.0.push(fragment.to_string()),
        }
    }

    fn finish(self) -> String {
        self.0.join("\n")
    }
}

/// Finds `key` in a table of literal pairs
fn lookup<V: Copy>(table: &[(&str, V)], key: &str) -> Option<V> {
    table
        .iter()
        .find_map(|(k, v)| if *k == key { Some(*v) } else { None })
}

/// Splits on the first colon into a trimmed key and value
fn split_field(line: &str) -> Option<(&str, &str)> {
    line.split_once(':').map(|(k, v)| (k.trim(), v.trim()))
}

/// Emits `line` with its key renamed when it appears in `table`
fn rename_key(out: &mut Lines, table: &[(&str, &str)], line: &str) {
    match split_field(line).and_then(|(k, v)| lookup(table, k).map(|label| (label, v))) {
        Some((label, value)) => out.field(label, value),
        None => out.push(line),
    }
}

/// Inserts a colon after the first of `prefixes` that starts `line`
fn colon_after_prefix<'a>(line: &'a str, prefixes: &[&str]) -> Cow<'a, str> {
    match prefixes.iter().find(|p| line.starts_with(**p)) {
        Some(p) => Cow::Owned(format!("{}:{}", p, &line[p.len()..])),
        None => Cow::Borrowed(line),
    }
}

/// Field layout of one section of a block-structured response
#[derive(Debug)]
struct BlockSchema {
    /// The line opening the section
    header: &'static str,
    /// Prefix for the emitted labels
    label: &'static str,
    /// Expected field names, one per physical line
    fields: &'static [&'static str],
}

/// The section being consumed and the position within its schema
#[derive(Debug)]
struct BlockCursor {
    schema: &'static BlockSchema,
    index: usize,
}

impl BlockCursor {
    /// Opens a cursor when `line` is one of the section headers
    fn enter(schemas: &'static [BlockSchema], line: &str) -> Option<Self> {
        schemas
            .iter()
            .find(|s| s.header == line)
            .map(|schema| Self { schema, index: 0 })
    }

    fn label(&self) -> &'static str {
        self.schema.label
    }

    /// Returns the field name for the next line
    ///
    /// Once the schema is exhausted the last field name is repeated.
    fn advance(&mut self) -> &'static str {
        let fields = self.schema.fields;
        let field = fields
            .get(self.index)
            .or(fields.last())
            .copied()
            .unwrap_or_default();
        self.index = (self.index + 1).min(fields.len());
        field
    }
}
