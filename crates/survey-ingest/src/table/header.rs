//! Header normalization and delimiter sniffing.

/// Normalizes a header value: trimmed, first letter upper case, rest lower case.
///
/// `" LOTE "`, `"lote"` and `"Lote"` all become `"Lote"`.
pub fn normalize_header(value: &str) -> String {
    let trimmed = value.trim().trim_start_matches('\u{feff}').trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Picks the field delimiter from the header line.
///
/// Tab wins when it appears more often than comma outside quoted text;
/// otherwise comma.
pub fn detect_delimiter(header_line: &str) -> u8 {
    let mut in_quotes = false;
    let mut commas = 0usize;
    let mut tabs = 0usize;
    for c in header_line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => commas += 1,
            '\t' if !in_quotes => tabs += 1,
            _ => {}
        }
    }
    if tabs > commas { b'\t' } else { b',' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_capitalizes() {
        assert_eq!(normalize_header("  LOTE  "), "Lote");
        assert_eq!(normalize_header("linea"), "Linea");
        assert_eq!(normalize_header("Palma"), "Palma");
        assert_eq!(normalize_header("lONGITUD"), "Longitud");
        assert_eq!(normalize_header("\u{feff}Lote"), "Lote");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn test_normalize_header_keeps_accents() {
        assert_eq!(normalize_header("LÍNEA"), "Línea");
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("Lote,Linea,Palma,Longitud,Latitud"), b',');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("Lote\tLinea\tPalma\tLongitud\tLatitud"), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted_commas() {
        assert_eq!(detect_delimiter("\"Lote, finca\"\tLinea\tPalma"), b'\t');
    }

    #[test]
    fn test_detect_delimiter_defaults_to_comma() {
        assert_eq!(detect_delimiter("Lote"), b',');
    }
}
