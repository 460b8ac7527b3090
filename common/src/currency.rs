/// Display currency used when a record carries none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Format an amount with exactly two fraction digits and `,` thousands grouping.
///
/// `1234567.89` → `"1,234,567.89"`, `-500.0` → `"-500.00"`. Values that round to
/// zero are shown without a sign.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let cents = round_to_cents(amount.abs());
    let (int_part, frac_part) = cents.split_at(cents.len() - 2);
    let negative = amount < 0.0 && cents.bytes().any(|b| b != b'0');

    let mut out = String::with_capacity(cents.len() + cents.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    out.push('.');
    out.push_str(frac_part);
    out
}

/// Digits of `value` rounded to two decimals, without the point: `"12345"` for 123.45.
///
/// Rounds half away from zero on the shortest decimal form of `value`, so
/// `0.125` and `1.005` go up to `0.13` and `1.01`.
fn round_to_cents(value: f64) -> String {
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }
    digits.into_iter().map(char::from).collect()
}

/// `"{currency} {amount}"`, e.g. `"USD 120,500.00"`.
pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{currency} {}", format_amount(amount))
}

/// Parse a display amount produced by [`format_amount`] back into a number.
pub fn parse_amount(display: &str) -> Option<f64> {
    let cleaned: String = display.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
