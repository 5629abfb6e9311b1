use super::Lines;

pub const KR: &super::Dialect = &super::Dialect {
    name: "kr",
    prepare,
};

/// Responses carry a Korean copy of the record first
const ENGLISH: &str = "# ENGLISH";

const KEYS: &[(&str, &str)] = &[
    ("Administrative Contact(AC)", "Administrative Contact Name"),
    ("AC E-Mail", "Administrative Contact E-Mail"),
    ("AC Phone Number", "Administrative Contact Phone Number"),
];

fn prepare(text: &str) -> String {
    let text = match text.find(ENGLISH) {
        Some(pos) => &text[pos + ENGLISH.len()..],
        None => text,
    };
    let mut out = Lines::default();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with(['\'', '-']) {
            continue;
        }
        super::rename_key(&mut out, KEYS, line);
    }
    out.finish()
}
