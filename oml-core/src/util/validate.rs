pub fn is_valid_email(email: &str) -> bool {
    fast_chemail::is_valid_email(email)
}

/// Required free-text fields must contain at least one
/// non-whitespace character.
pub fn is_nonempty_text(text: &str) -> bool {
    !text.trim().is_empty()
}
