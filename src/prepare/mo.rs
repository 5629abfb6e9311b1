use super::Lines;

pub const MO: &super::Dialect = &super::Dialect {
    name: "mo",
    prepare,
};

const SECTIONS: &[(&str, &str)] = &[
    ("Registrant:", "Registrant"),
    ("Admin Contact(s):", "Admin"),
    ("Billing Contact(s):", "Billing"),
    ("Technical Contact(s):", "Technical"),
];

const RECORD_DATES: &[&str] = &["Record created on", "Record expires on"];

fn prepare(text: &str) -> String {
    let mut out = Lines::default();
    let mut section: Option<&str> = None;
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            section = None;
            continue;
        }
        // Rulers
        if line.starts_with('-') {
            continue;
        }
        let line = super::colon_after_prefix(line, RECORD_DATES);
        if let Some(name) = super::lookup(SECTIONS, &line) {
            section = Some(name);
            continue;
        }
        match section {
            Some(name) => out.push(format!("{name} {line}")),
            None => out.push(line),
        }
    }
    out.finish()
}
