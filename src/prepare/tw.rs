use super::{BlockCursor, BlockSchema, Lines};

pub const TW: &super::Dialect = &super::Dialect {
    name: "tw",
    prepare,
};

const RECORD_DATES: &[&str] = &["Record created on", "Record expires on"];

const SCHEMAS: &[BlockSchema] = &[
    BlockSchema {
        header: "Registrant:",
        label: "Registrant",
        fields: &[
            "Organization",
            "Name,Email",
            "Phone",
            "Fax",
            "Address",
            "Address",
            "Address",
        ],
    },
    BlockSchema {
        header: "Administrative Contact:",
        label: "Administrative Contact",
        fields: &["Name,Email", "Phone", "Fax"],
    },
    BlockSchema {
        header: "Technical Contact:",
        label: "Technical Contact",
        fields: &["Name,Email", "Phone", "Fax"],
    },
    BlockSchema {
        header: "Contact:",
        label: "Registrant Contact",
        fields: &["Name", "Email"],
    },
];

static NAME_EMAIL: std::sync::LazyLock<regex::Regex> =
    std::sync::LazyLock::new(|| regex::Regex::new(r"(.*)\s+([^\s]+@[^\s]+)").unwrap());

fn prepare(text: &str) -> String {
    let mut out = Lines::default();
    let mut section: Option<BlockCursor> = None;
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            section = None;
            continue;
        }
        let line = super::colon_after_prefix(line, RECORD_DATES);
        if let Some(cursor) = BlockCursor::enter(SCHEMAS, &line) {
            section = Some(cursor);
            continue;
        }
        if line.contains(':') {
            section = None;
        }
        let Some(cursor) = section.as_mut() else {
            out.push(line);
            continue;
        };
        let field = cursor.advance();
        let label = cursor.label();
        // A compound field holds a name and an e-mail address on one line
        match field.split_once(',') {
            Some((name, email)) => match NAME_EMAIL.captures(&line) {
                Some(cap) => {
                    out.field(&format!("{label} {name}"), &cap[1]);
                    out.field(&format!("{label} {email}"), &cap[2]);
                }
                None => out.field(&format!("{label} {name}"), &line),
            },
            None => out.field(&format!("{label} {field}"), &line),
        }
    }
    out.finish()
}
