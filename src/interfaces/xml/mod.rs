//! XML decoding for merchant web-service answers.
//!
//! Bodies are checked for well-formedness with a streaming pass before they
//! are deserialized into the typed schemas in [`responses`], so a truncated
//! document is reported as malformed instead of half-decoded.

pub mod responses;

use crate::error::{GatewayError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;

/// Verifies that `body` is a single, properly nested XML document.
pub fn validate(body: &str) -> Result<()> {
    let mut reader = Reader::from_str(body);
    reader.check_end_names(true);

    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::End(end) => {
                if depth == 0 {
                    return Err(GatewayError::Decode(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    )));
                }
                depth -= 1;
            }
            Event::Empty(_) if depth == 0 => roots += 1,
            Event::Text(text) if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) => {
                return Err(GatewayError::Decode(
                    "text outside of the root element".to_owned(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(GatewayError::Decode("document ends inside an element".to_owned()));
    }
    if roots != 1 {
        return Err(GatewayError::Decode(format!(
            "expected exactly one root element, found {roots}"
        )));
    }
    Ok(())
}

/// Validates `body` and deserializes it into `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let body = body.trim_start();
    validate(body)?;
    Ok(quick_xml::de::from_str(body)?)
}
