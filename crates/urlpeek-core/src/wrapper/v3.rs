//! v3 wrapper: `urldefense.com/v3/__<payload>__;<signature>!!...`.

use regex::Regex;
use std::sync::LazyLock;

/// Payload runs from `/v3/__` to the first `__;`, signature up to the next `!`.
static V3_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"urldefense\.com/v3/__(.+?)__;([^!]*)").expect("v3 wrapper pattern is valid")
});

pub(super) fn extract(url: &str) -> Option<String> {
    let caps = V3_PATTERN.captures(url)?;
    let payload = caps.get(1)?.as_str();
    let signature = caps
        .get(2)
        .filter(|sig| url[sig.end()..].starts_with("!!"))
        .map(|sig| sig.as_str())
        .unwrap_or("");

    let recovered = reverse_signature(payload, signature);
    if recovered.is_empty() {
        Some(payload.to_string())
    } else {
        Some(recovered)
    }
}

/// Replaces each `*` in `payload` with the next unused character of `signature`.
///
/// Consumption is strictly left to right. Once the signature runs out, any
/// remaining `*` are dropped.
pub fn reverse_signature(payload: &str, signature: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut replacements = signature.chars();
    for c in payload.chars() {
        if c == '*' {
            if let Some(r) = replacements.next() {
                out.push(r);
            }
        } else {
            out.push(c);
        }
    }
    out
}
