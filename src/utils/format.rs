//! Formatting utilities for display values.

/// "1 object", "3 objects", "0 objects".
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// "bucket/object" for headers and loading messages.
pub fn object_path(bucket: &str, object: &str) -> String {
    format!("{}/{}", bucket, object)
}

/// ARIA state attributes take the literal strings, not HTML boolean presence.
pub fn aria_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
