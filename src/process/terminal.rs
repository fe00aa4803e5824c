//! Terminal-safe rendering of untrusted text.

/// Replace control characters so `value` can be printed to a terminal safely.
///
/// Every Unicode control character other than newline and tab is replaced by
/// U+FFFD, which stops remote output from injecting escape sequences.
pub fn neutralize_control_characters(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_control() && c != '\n' && c != '\t' {
                char::REPLACEMENT_CHARACTER
            } else {
                c
            }
        })
        .collect()
}
