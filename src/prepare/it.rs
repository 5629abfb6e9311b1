use super::Lines;

pub const IT: &super::Dialect = &super::Dialect {
    name: "it",
    prepare,
};

const SECTIONS: &[&str] = &[
    "Registrant",
    "Admin Contact",
    "Technical Contacts",
    "Registrar",
    "Nameservers",
];

fn prepare(text: &str) -> String {
    let mut out = Lines::default();
    // The section title and whether a labeled field is open below it
    let mut section: Option<&str> = None;
    let mut in_field = false;
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if let Some(title) = SECTIONS.iter().copied().find(|s| *s == line) {
            section = Some(title);
            in_field = false;
            continue;
        }
        let labeled = line.contains(':');
        if labeled && !line.starts_with('*') {
            in_field = true;
        } else if in_field {
            out.join_last(", ", line);
            continue;
        }
        match section {
            Some(title) if !labeled => out.field(title, line),
            Some(title) => out.push(format!("{title} {line}")),
            None => out.push(line),
        }
    }
    out.finish()
}
