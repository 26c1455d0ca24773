/// Render an 11-digit phone number as `+D (DDD) DDD-DD-DD`.
///
/// Every non-digit character is dropped first. Input that does not hold exactly 11 digits is
/// returned unchanged.
///
/// ```rust
/// # use calfmt::formatting::format_phone;
/// assert_eq!(format_phone("8 (999) 123-45-67"), "+8 (999) 123-45-67");
/// assert_eq!(format_phone("123"), "123");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 11 {
        return raw.to_string();
    }
    format!(
        "+{} ({}) {}-{}-{}",
        &digits[0..1],
        &digits[1..4],
        &digits[4..7],
        &digits[7..9],
        &digits[9..11]
    )
}
