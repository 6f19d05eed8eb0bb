//! MQTT-style topic matching.
//!
//! `+` matches exactly one level, `#` matches all remaining levels and must
//! be the last segment. Levels are separated by `/`.

/// Check whether `topic` matches `pattern`.
pub fn matches(pattern: &str, topic: &str) -> bool {
    let mut pat = pattern.split('/');
    let mut top = topic.split('/');

    loop {
        match (pat.next(), top.next()) {
            (Some("#"), _) => return true,
            (Some("+"), Some(_)) => continue,
            (Some(p), Some(t)) if p == t => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Check whether a pattern is well-formed (`#` only as the final segment).
pub fn is_valid(pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let segments: Vec<&str> = pattern.split('/').collect();
    segments
        .iter()
        .enumerate()
        .all(|(i, s)| *s != "#" || i == segments.len() - 1)
}
