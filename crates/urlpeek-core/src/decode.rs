//! Recursive percent-decoding.
//!
//! Tracking links are routinely encoded two or three times over. `decode`
//! peels layers until the string stops changing, bounded so that hostile
//! input cannot keep it spinning.

use percent_encoding::percent_decode_str;

/// Upper bound on decode passes for a single value.
pub const MAX_DECODE_ITERATIONS: usize = 10;

/// Repeatedly percent-decodes `raw` until a fixed point or `MAX_DECODE_ITERATIONS`.
///
/// A pass that hits a malformed escape (`%` not followed by two hex digits) or
/// produces invalid UTF-8 stops the loop; the last good value is returned.
/// `+` is left alone.
pub fn decode(raw: &str) -> String {
    let mut current = raw.to_string();
    for _ in 0..MAX_DECODE_ITERATIONS {
        let next = match decode_once(&current) {
            Some(next) => next,
            None => {
                tracing::trace!(value = %current, "percent-decoding stopped at malformed input");
                break;
            }
        };
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Strict single pass. `None` when the input has a broken escape or decodes to invalid UTF-8.
pub(crate) fn decode_once(input: &str) -> Option<String> {
    if !escapes_well_formed(input) {
        return None;
    }
    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

fn escapes_well_formed(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .map(|pair| pair.iter().all(u8::is_ascii_hexdigit))
                .unwrap_or(false);
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
