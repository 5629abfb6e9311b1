use super::Lines;
use std::borrow::Cow;

pub const FR: &super::Dialect = &super::Dialect {
    name: "fr",
    prepare,
};

/// Contact roles a domain record points at by handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Holder,
    Admin,
    Tech,
}

impl Role {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "holder-c" => Some(Self::Holder),
            "admin-c" => Some(Self::Admin),
            "tech-c" => Some(Self::Tech),
            _ => None,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Holder => "holder ",
            Self::Admin => "admin ",
            Self::Tech => "tech ",
        }
    }
}

/// Handles declared by the domain record and not yet matched to a contact block
#[derive(Debug, Default)]
struct Handles(Vec<(Role, String)>);

impl Handles {
    fn record(&mut self, role: Role, handle: &str) {
        match self.0.iter_mut().find(|(r, _)| *r == role) {
            Some((_, h)) => *h = handle.to_string(),
            None => self.0.push((role, handle.to_string())),
        }
    }

    /// Removes and returns the first role that declared `handle`
    fn take(&mut self, handle: &str) -> Option<Role> {
        let pos = self.0.iter().position(|(_, h)| h == handle)?;
        Some(self.0.remove(pos).0)
    }
}

fn prepare(text: &str) -> String {
    let mut out = Lines::default();
    let mut handles = Handles::default();
    // Sticks until replaced by a registrar block or a matched handle
    let mut prefix = "";
    let mut new_block = false;
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            new_block = true;
            continue;
        }
        let (key, value) = super::split_field(line).unwrap_or((line, ""));
        let mut line = Cow::Borrowed(line);
        if new_block && key == "registrar" {
            prefix = "registrar ";
            line = Cow::Owned(format!("name: {value}"));
        }
        new_block = false;
        if let Some(role) = Role::from_key(key) {
            if !value.is_empty() {
                handles.record(role, value);
            }
        }
        if key == "nic-hdl" {
            if let Some(role) = handles.take(value) {
                prefix = role.prefix();
            }
        }
        out.push(format!("{prefix}{line}"));
        if key == "dsl-id" && !value.is_empty() {
            out.push("DNSSEC: signed");
        }
    }
    out.finish()
}
