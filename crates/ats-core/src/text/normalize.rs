/// Reduces text to its lowercase alphabetic skeleton: every character
/// outside `a-z` and whitespace (digits and punctuation included) becomes a
/// space, whitespace runs collapse to a single space, and the ends are
/// trimmed. Pure, deterministic, and idempotent; no locale sensitivity.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let alphabetic: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    alphabetic.split_whitespace().collect::<Vec<_>>().join(" ")
}
