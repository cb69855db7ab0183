use std::sync::OnceLock;

use regex::Regex;

/// Standard alphabet, padded to a multiple of four characters.
const CANONICAL_PATTERN: &str = r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$";

fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CANONICAL_PATTERN).expect("base64 pattern compiles"))
}

/// Structural check only; the payload is never decoded.
pub(crate) fn is_canonical(value: &str) -> bool {
    pattern().is_match(value)
}
