use super::Lines;

pub const UK: &super::Dialect = &super::Dialect {
    name: "uk",
    prepare,
};

const KEYS: &[(&str, &str)] = &[("URL", "Registrar URL")];

fn prepare(text: &str) -> String {
    let mut out = Lines::default();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        super::rename_key(&mut out, KEYS, line);
    }
    out.finish()
}
