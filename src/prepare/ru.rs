use super::Lines;

pub const RU: &super::Dialect = &super::Dialect {
    name: "ru",
    prepare,
};

const KEYS: &[(&str, &str)] = &[
    ("person", "Registrant Name"),
    ("e-mail", "Registrant Email"),
    ("org", "Registrant Organization"),
];

fn prepare(text: &str) -> String {
    let mut out = Lines::default();
    for line in text.lines().map(str::trim) {
        if !line.contains(':') {
            continue;
        }
        super::rename_key(&mut out, KEYS, line);
    }
    out.finish()
}
