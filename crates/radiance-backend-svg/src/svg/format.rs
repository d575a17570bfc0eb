//! Attribute formatting helpers.

/// Decimal places kept by [`num`].
const NUM_PRECISION: usize = 4;

/// Formats a number for an SVG attribute.
///
/// Rounds to four decimals and trims trailing zeros, so whole values print
/// without a fraction (`2.0` -> `"2"`, `1.25` -> `"1.25"`).
pub fn num(value: f64) -> String {
    let mut out = format!("{:.*}", NUM_PRECISION, value);
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}

/// Formats a pixel coordinate with exactly two decimals.
pub fn coord(value: f64) -> String {
    format!("{:.2}", value)
}

/// Escapes text for use in XML content and double-quoted attributes.
///
/// Characters XML 1.0 cannot carry at all (C0 controls other than tab, line
/// feed and carriage return, plus U+FFFE and U+FFFF) are dropped.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {}
            _ => out.push(c),
        }
    }
    out
}
