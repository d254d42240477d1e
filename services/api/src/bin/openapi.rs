//! services/api/src/bin/openapi.rs
//!
//! Dumps the flashcard API's OpenAPI document.
//!
//! Usage: `openapi [PATH]`. Writes `openapi.json` by default; `-` prints the
//! document to stdout instead.

use api_lib::web::rest::ApiDoc;
use std::io::Write;
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "openapi.json";

enum Output {
    Stdout,
    File(String),
}

impl Output {
    fn from_arg(arg: Option<String>) -> Self {
        match arg.as_deref() {
            Some("-") => Output::Stdout,
            Some(path) => Output::File(path.to_string()),
            None => Output::File(DEFAULT_OUTPUT.to_string()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let document = ApiDoc::openapi().to_pretty_json()?;
    match Output::from_arg(std::env::args().nth(1)) {
        Output::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
        Output::File(path) => {
            std::fs::write(&path, document)?;
            eprintln!("Wrote flashcard API document to {}", path);
        }
    }
    Ok(())
}
