use super::{BlockCursor, BlockSchema, Lines};

pub const EDU: &super::Dialect = &super::Dialect {
    name: "edu",
    prepare,
};

const CONTACT: &[&str] = &[
    "Name",
    "Organization",
    "Address",
    "Address",
    "Address",
    "Phone",
    "Email",
];

const SCHEMAS: &[BlockSchema] = &[
    BlockSchema {
        header: "Registrant:",
        label: "Registrant",
        fields: &["Organization", "Address", "Address", "Address"],
    },
    BlockSchema {
        header: "Administrative Contact:",
        label: "Administrative Contact",
        fields: CONTACT,
    },
    BlockSchema {
        header: "Technical Contact:",
        label: "Technical Contact",
        fields: CONTACT,
    },
];

fn prepare(text: &str) -> String {
    let mut out = Lines::default();
    let mut section: Option<BlockCursor> = None;
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            section = None;
            continue;
        }
        if let Some(cursor) = BlockCursor::enter(SCHEMAS, line) {
            section = Some(cursor);
            continue;
        }
        if line.ends_with(':') {
            section = None;
        }
        match section.as_mut() {
            Some(cursor) => {
                let field = cursor.advance();
                out.field(&format!("{} {}", cursor.label(), field), line);
            }
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
This Registry database contains ONLY .EDU domains.\r
The data in the EDUCAUSE Whois database is provided\r
by EDUCAUSE for information purposes in order to\r
assist in the process of obtaining information about\r
or related to .edu domain registration records.\r
\r
-------------------------------------------------------------\r
\r
Domain Name: UC.EDU\r
\r
Registrant:\r
	University of Cincinnati\r
	UC Information Tecnologies (UCit)\r
	51 Goodman Drive, Suite 400\r
	Cincinnati, OH 45221-0658\r
	USA\r
\r
Administrative Contact:\r
	Domain Admin\r
	University of Cincinnati\r
	UC Information Tecnologies (UCit)\r
	51 Goodman Drive, Suite 400\r
	Cincinnati, OH 45221-0658\r
	USA\r
	+1.5135569898\r
	barb.renner@uc.edu\r
\r
Technical Contact:\r
	Brian Ruehl\r
	University of Cincinnati\r
\r
Name Servers:\r
	UCDNSA.UC.EDU\r
	UCDNSB.UC.EDU\r
\r
Domain record activated:    16-Nov-1987\r
Domain record last updated: 03-Jun-2024\r
Domain expires:             31-Jul-2027\r
\r
";
        let prepared = EDU.apply(RESP);
        let lines: Vec<&str> = prepared.lines().collect();
        assert_eq!(lines[0], "This Registry database contains ONLY .EDU domains.");
        assert!(lines.contains(&"Domain Name: UC.EDU"));
        assert!(lines.contains(&"Registrant Organization: University of Cincinnati"));
        assert!(lines.contains(&"Registrant Address: UC Information Tecnologies (UCit)"));
        assert!(lines.contains(&"Registrant Address: Cincinnati, OH 45221-0658"));
        // Overflows the registrant schema
        assert!(lines.contains(&"Registrant Address: USA"));
        assert!(lines.contains(&"Administrative Contact Name: Domain Admin"));
        assert!(
            lines.contains(&"Administrative Contact Organization: University of Cincinnati")
        );
        assert!(lines.contains(&"Administrative Contact Email: barb.renner@uc.edu"));
        assert!(lines.contains(&"Technical Contact Name: Brian Ruehl"));
        assert!(lines.contains(&"Technical Contact Organization: University of Cincinnati"));
        assert!(lines.contains(&"Name Servers:"));
        assert!(lines.contains(&"UCDNSA.UC.EDU"));
        assert!(lines.contains(&"UCDNSB.UC.EDU"));
        assert!(lines.contains(&"Domain record activated:    16-Nov-1987"));
        assert!(lines.contains(&"Domain expires:             31-Jul-2027"));
        assert!(!lines.iter().any(|l| l.is_empty()));
        assert!(!lines.contains(&"Registrant:"));
    }

    #[test]
    fn minimal_registrant() {
        let prepared = EDU.apply("Registrant:\nExample University\n123 Main St\n");
        assert_eq!(
            prepared,
            "Registrant Organization: Example University\nRegistrant Address: 123 Main St"
        );
    }

    #[test]
    fn colon_header_ends_block() {
        let prepared = EDU.apply("Registrant:\nExample University\nName Servers:\nNS1.EXAMPLE.EDU\n");
        assert_eq!(
            prepared,
            "Registrant Organization: Example University\nName Servers:\nNS1.EXAMPLE.EDU"
        );
    }

    #[test]
    fn not_found() {
        const RESP: &str = "\
NO MATCH: ?????.edu\r
\r
";
        assert_eq!(EDU.apply(RESP), "NO MATCH: ?????.edu");
    }
}
