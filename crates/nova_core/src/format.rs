//! Keystroke formatters for the payment fields.

/// Character limit of the card number input, spaces included.
pub const CARD_NUMBER_MAX_LEN: usize = 19;
/// Character limit of the `MM/YY` expiry input.
pub const EXPIRY_MAX_LEN: usize = 5;
/// Character limit of the CVC input.
pub const CVC_MAX_LEN: usize = 3;

/// Groups card digits in blocks of four: `"4111111111111111"` becomes
/// `"4111 1111 1111 1111"`.
///
/// Whitespace is dropped first. A space follows every fourth digit of an
/// unbroken digit run; any other character restarts the count.
pub fn format_card_number(raw: &str) -> String {
    let mut formatted = String::with_capacity(CARD_NUMBER_MAX_LEN + 1);
    let mut run = 0;
    for c in raw.chars().filter(|c| !c.is_whitespace()) {
        formatted.push(c);
        if c.is_ascii_digit() {
            run += 1;
            if run == 4 {
                formatted.push(' ');
                run = 0;
            }
        } else {
            run = 0;
        }
    }
    let limited: String = formatted.trim().chars().take(CARD_NUMBER_MAX_LEN).collect();
    limited.trim_end().to_owned()
}

/// Keeps digits only and inserts `/` after the month once a third digit exists.
pub fn format_expiry(raw: &str) -> String {
    let digits = digits_only(raw);
    let formatted = if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    };
    formatted.chars().take(EXPIRY_MAX_LEN).collect()
}

pub fn format_cvc(raw: &str) -> String {
    digits_only(raw).chars().take(CVC_MAX_LEN).collect()
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
