use url::form_urlencoded;

const DEFAULT_INQUIRY: &str =
    "Hi, I saw your property listing on LetScout and I'm interested.";

/// Monthly rent for display, e.g. "€1,800/mo"
pub fn format_rent(rent: f64) -> String {
    format!("€{}/mo", group_thousands(rent.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// WhatsApp deep link with a prefilled inquiry message
pub fn whatsapp_link(phone: &str, message: Option<&str>) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let message = message.unwrap_or(DEFAULT_INQUIRY);
    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("https://wa.me/{digits}?text={encoded}")
}

/// Dialer link
pub fn call_link(phone: &str) -> String {
    format!("tel:{phone}")
}
