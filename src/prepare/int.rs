use super::Lines;

pub const INT: &super::Dialect = &super::Dialect {
    name: "int",
    prepare,
};

fn prepare(text: &str) -> String {
    let mut out = Lines::default();
    // Role of the contact block in scope
    let mut role: Option<&str> = None;
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            role = None;
            continue;
        }
        let Some((key, value)) = super::split_field(line) else {
            out.push(line);
            continue;
        };
        match key {
            "contact" => {
                role = Some(value);
                out.push(line);
                continue;
            }
            // The holder block carries no contact line of its own
            "organisation" if role.is_none() => role = Some("registrant"),
            _ => {}
        }
        match role {
            Some(role) => out.push(format!("{role} {line}")),
            None => out.push(line),
        }
    }
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found() {
        const RESP: &str = "\
% IANA WHOIS server\r
% for more information on IANA, visit http://www.iana.org\r
% This query returned 1 object\r
\r
domain:       WHO.INT\r
\r
organisation: World Health Organization (WHO)\r
address:      20, Avenue Appia\r
address:      Geneva 27\r
address:      Geneva CH-1211\r
address:      Switzerland\r
\r
contact:      administrative\r
name:         Domain Administrator\r
organisation: World Health Organization (WHO)\r
address:      20, Avenue Appia\r
phone:        +41 22 791 2411\r
e-mail:       ionadmin@who.int\r
\r
contact:      technical\r
name:         Domain Administrator\r
e-mail:       ionadmin@who.int\r
\r
nserver:      EXT-DNS-2.CERN.CH 192.91.245.85\r
nserver:      NS1.WHO.INT 158.232.12.5\r
\r
created:      1998-06-05\r
changed:      2024-06-17\r
source:       IANA\r
";
        let prepared = INT.apply(RESP);
        assert_eq!(
            prepared,
            "\
% IANA WHOIS server
% for more information on IANA, visit http://www.iana.org
% This query returned 1 object
domain:       WHO.INT
registrant organisation: World Health Organization (WHO)
registrant address:      20, Avenue Appia
registrant address:      Geneva 27
registrant address:      Geneva CH-1211
registrant address:      Switzerland
contact:      administrative
administrative name:         Domain Administrator
administrative organisation: World Health Organization (WHO)
administrative address:      20, Avenue Appia
administrative phone:        +41 22 791 2411
administrative e-mail:       ionadmin@who.int
contact:      technical
technical name:         Domain Administrator
technical e-mail:       ionadmin@who.int
nserver:      EXT-DNS-2.CERN.CH 192.91.245.85
nserver:      NS1.WHO.INT 158.232.12.5
created:      1998-06-05
changed:      2024-06-17
source:       IANA"
        );
    }

    #[test]
    fn unlabeled_lines_keep_no_prefix() {
        let prepared = INT.apply("contact: technical\nsee registry website\nname: Jane\n");
        assert_eq!(
            prepared,
            "contact: technical\nsee registry website\ntechnical name: Jane"
        );
    }
}
