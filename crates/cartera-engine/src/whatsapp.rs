//! WhatsApp deep-link construction.
//!
//! The links this tool emits have always used one fixed shape and a
//! deliberately narrow message encoding; consumers of the roster rely on
//! both byte-for-byte, so nothing here delegates to a general URL
//! library.

/// Greeting used when the caller supplies no message.
pub const DEFAULT_GREETING: &str = "Hola, gracias por su interés";

/// Country calling code forced onto bare national numbers.
const COUNTRY_PREFIX: &str = "57";

/// Build the `wa.me` link for a raw roster phone cell, or `None` when no
/// phone is on file.
///
/// No digit-count or format validation happens beyond the normalization
/// below; a malformed number still yields a (possibly useless) link.
pub fn whatsapp_link(phone: &str, message: &str) -> Option<String> {
    let digits = normalize_number(phone)?;
    Some(format!(
        "https://wa.me/{}?text={}",
        digits,
        encode_message(message)
    ))
}

/// Strip formatting and force the country prefix: trim, delete every
/// space, hyphen and plus sign, then prepend "57" unless the result
/// already starts with it.
fn normalize_number(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let bare: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '+'))
        .collect();

    if bare.starts_with(COUNTRY_PREFIX) {
        Some(bare)
    } else {
        Some(format!("{COUNTRY_PREFIX}{bare}"))
    }
}

/// Spaces become `%20`; every other byte passes through untouched. This
/// is intentionally NOT percent-encoding.
fn encode_message(message: &str) -> String {
    message.replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_a_national_number() {
        assert_eq!(
            whatsapp_link("300 123 4567", DEFAULT_GREETING).as_deref(),
            Some("https://wa.me/573001234567?text=Hola,%20gracias%20por%20su%20interés"),
        );
    }

    #[test]
    fn already_prefixed_numbers_are_not_doubled() {
        assert_eq!(
            whatsapp_link("+57 300-123-4567", "hola").as_deref(),
            Some("https://wa.me/573001234567?text=hola"),
        );
    }

    #[test]
    fn absent_phone_produces_no_link() {
        assert_eq!(whatsapp_link("", DEFAULT_GREETING), None);
        assert_eq!(whatsapp_link("   ", DEFAULT_GREETING), None);
    }

    #[test]
    fn encoding_touches_spaces_only() {
        // Accents, commas and question marks pass through raw.
        assert_eq!(
            whatsapp_link("3001234567", "¿Cómo está? bien, gracias").as_deref(),
            Some("https://wa.me/573001234567?text=¿Cómo%20está?%20bien,%20gracias"),
        );
    }

    #[test]
    fn malformed_numbers_still_produce_a_link() {
        assert_eq!(
            whatsapp_link("ext. 12", "hola").as_deref(),
            Some("https://wa.me/57ext.12?text=hola"),
        );
    }
}
