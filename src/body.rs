use serde::de::DeserializeOwned;

use crate::RequestError;

/// Decodes a drained response body into text with `\n` line endings.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. A terminator at the very end
/// does not produce a trailing empty line. Returns `None` for an empty
/// payload.
pub(crate) fn drain_to_text(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let text = String::from_utf8_lossy(bytes);
    Some(join_lines(&text))
}

pub(crate) fn join_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut pending_break = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if pending_break {
                    out.push('\n');
                }
                pending_break = true;
            }
            '\n' => {
                if pending_break {
                    out.push('\n');
                }
                pending_break = true;
            }
            other => {
                if pending_break {
                    out.push('\n');
                    pending_break = false;
                }
                out.push(other);
            }
        }
    }

    out
}

pub(crate) fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    serde_json::from_str(body).map_err(|err| {
        RequestError::Decode(format!("invalid response JSON: {err}; body: {body}"))
    })
}
