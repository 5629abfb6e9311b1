use std::fs::File;
use std::io::{self, Read, Write};
use tracing::{debug, warn};
use tracing_subscriber::prelude::*;
use whois_prep::{WhoisPrepError, config::Config};


fn usage(me: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("{} <response> [<output>]", me);
    eprintln!("  Normalizes the WHOIS <response> and writes it to <output> (default stdout)");
    eprintln!("  Either path can be \"-\" for the standard streams");
    std::process::exit(1);
}

/// Decodes ISO-8859-1 bytes, which map one to one onto the first 256 code points
fn from_latin1(data: &[u8]) -> String {
    data.iter().map(|&b| char::from(b)).collect()
}

/// Reads at most `limit` bytes of a captured response from `path` (or stdin)
fn read_response(path: &str, limit: u64) -> Result<String, WhoisPrepError> {
    let reader: Box<dyn Read> = match path {
        "-" => Box::new(io::stdin()),
        _ => Box::new(File::open(path)?),
    };
    let mut data = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut data)?;
    if data.len() as u64 > limit {
        return Err(WhoisPrepError::InputTooLarge { limit });
    }
    Ok(match String::from_utf8(data) {
        Ok(text) => text,
        Err(e) => {
            warn!("Response is not valid UTF-8, decoding as Latin-1");
            from_latin1(e.as_bytes())
        }
    })
}

/// Prepares `raw` according to `config` and renders the result
fn process(raw: &str, config: &Config) -> Result<String, WhoisPrepError> {
    let prepared = match config.tld.as_deref() {
        Some(tld) => {
            debug!("Forcing dialect for TLD {}", tld);
            whois_prep::prepare_traced_for_tld(tld, raw)
        }
        None => whois_prep::prepare_traced(raw),
    };
    if config.json_output {
        Ok(serde_json::to_string_pretty(&prepared)?)
    } else {
        Ok(prepared.text)
    }
}

fn main() -> Result<(), WhoisPrepError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if !(2..=3).contains(&args.len()) {
        usage(&args[0]);
    }

    let config = Config::new()?;
    let raw = read_response(&args[1], config.max_processed_size).map_err(|e| {
        eprintln!("Failed to read {}: {}", &args[1], e);
        e
    })?;
    let output = process(&raw, &config)?;

    let mut writer: Box<dyn Write> = match args.get(2).map(String::as_str) {
        None | Some("-") => Box::new(io::stdout()),
        Some(to) => Box::new(File::create(to)?),
    };
    writeln!(writer, "{output}")?;
    writer.flush()?;
    Ok(())
}
