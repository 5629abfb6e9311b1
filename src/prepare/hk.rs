use super::Lines;

pub const HK: &super::Dialect = &super::Dialect {
    name: "hk",
    prepare,
};

const SECTIONS: &[(&str, &str)] = &[
    ("Registrant Contact Information:", "Registrant"),
    ("Administrative Contact Information:", "Admin"),
    ("Technical Contact Information:", "Technical"),
    ("Name Servers Information:", "Name Servers:"),
];

/// Fields which keep their label inside a contact section
const DATE_FIELDS: &[&str] = &["Domain Name Commencement Date", "Expiry Date"];

static REGISTRAR_CONTACT: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
    regex::Regex::new(r"Email:\s+([^\s]+)(?:\s+Hotline:(.*))?").unwrap()
});

/// Where the dialect stands while scanning
#[derive(Debug, Default)]
struct State {
    /// Label prefix of the contact section in scope
    section: Option<&'static str>,
    /// Unlabeled lines continue the last `Address` field
    address: bool,
}

impl State {
    fn emit(&self, out: &mut Lines, key: &str, line: &str) {
        match self.section {
            Some(section) if !DATE_FIELDS.contains(&key) => out.push(format!("{section} {line}")),
            _ => out.push(line),
        }
    }
}

fn prepare(text: &str) -> String {
    let text = text.replace("\n\n", "\n");
    let mut out = Lines::default();
    let mut state = State::default();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            state = State::default();
            continue;
        }
        if let Some(section) = super::lookup(SECTIONS, line) {
            state = State {
                section: Some(section),
                address: false,
            };
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            if state.address {
                out.join_last(", ", line);
            } else {
                state.emit(&mut out, "", line);
            }
            continue;
        };
        let value = value.trim();
        // "Field (explanation): value"
        let (key, qualified) = match key.split_once('(') {
            Some((key, _)) => (key.trim(), true),
            None => (key.trim(), false),
        };
        state.address = key == "Address";
        match key {
            "Family name" => {
                if !value.is_empty() && value != "." {
                    out.join_last(" ", value);
                }
            }
            "Registrar Contact Information" => match REGISTRAR_CONTACT.captures(value) {
                Some(cap) => {
                    state.emit(
                        &mut out,
                        key,
                        &format!("Registrar Contact Email: {}", &cap[1]),
                    );
                    if let Some(phone) = cap.get(2).map(|m| m.as_str().trim()) {
                        if !phone.is_empty() {
                            state.emit(&mut out, key, &format!("Registrar Contact Phone: {phone}"));
                        }
                    }
                }
                None => state.emit(&mut out, key, line),
            },
            _ if qualified => state.emit(&mut out, key, &format!("{key}: {value}")),
            _ => state.emit(&mut out, key, line),
        }
    }
    out.finish()
}
