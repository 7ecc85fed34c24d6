//! JSON dump of the parsed parts
//!
//! Mostly useful for inspecting what the Markdown parser produced. The
//! output is the serde representation of [`Document::parts`].

use crate::error::FormatError;
use crate::format::Format;
use crate::parts::Document;
use std::collections::HashMap;

/// Format implementation for JSON output
pub struct JsonFormat;

impl JsonFormat {
    pub fn to_json(doc: &Document, pretty: bool) -> Result<String, FormatError> {
        let result = if pretty {
            serde_json::to_string_pretty(&doc.parts)
        } else {
            serde_json::to_string(&doc.parts)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON dump of document parts"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        JsonFormat::to_json(doc, true)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        match options.get("pretty").map(String::as_str) {
            None | Some("true") => JsonFormat::to_json(doc, true),
            Some("false") => JsonFormat::to_json(doc, false),
            Some(other) => Err(FormatError::NotSupported(format!(
                "Invalid value '{other}' for json option 'pretty'"
            ))),
        }
    }
}
