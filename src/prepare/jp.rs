use super::Lines;

pub const JP: &super::Dialect = &super::Dialect {
    name: "jp",
    prepare,
};

// "[Label]   Value" markers; the registry banner opens with "[ " and is left alone
static BRACKETED: std::sync::LazyLock<regex::Regex> =
    std::sync::LazyLock::new(|| regex::Regex::new(r"(?m)^\[([^\s\]][^\]\n]*)\] *").unwrap());

const ADMIN_BLOCK: &str = "Contact Information";
const ADDRESS: &str = "Postal Address";

fn prepare(text: &str) -> String {
    let text = BRACKETED.replace_all(text, "${1}: ");
    let mut out = Lines::default();
    let mut prefix = "";
    // Key of the last labeled line
    let mut key: Option<&str> = None;
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            prefix = "";
            key = None;
            continue;
        }
        match super::split_field(line) {
            Some((k, _)) => {
                if k == ADMIN_BLOCK {
                    prefix = "admin ";
                }
                key = Some(k);
            }
            None if key == Some(ADDRESS) => {
                out.join_last(", ", line);
                continue;
            }
            None => {}
        }
        out.push(format!("{prefix}{line}"));
    }
    out.finish()
}
