//! Text encodings for the board value
//!
//! Output is fixed-width for hex and binary so the value lines up under the
//! board. Input is lenient: the base is picked from a `0x`/`0b` prefix, and
//! parsing keeps the longest run of valid digits instead of rejecting the
//! whole string. Callers decide what an input with no digits means.

use std::fmt;

/// Base used to show and export the board value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputBase {
    #[default]
    Hex,
    Binary,
    Decimal,
}

impl OutputBase {
    /// Next base in the Hex → Binary → Decimal cycle
    pub fn next(self) -> Self {
        match self {
            OutputBase::Hex => OutputBase::Binary,
            OutputBase::Binary => OutputBase::Decimal,
            OutputBase::Decimal => OutputBase::Hex,
        }
    }

    /// Parse a base name from config or the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "hex" | "hexadecimal" | "16" => Some(OutputBase::Hex),
            "bin" | "binary" | "2" => Some(OutputBase::Binary),
            "dec" | "decimal" | "10" => Some(OutputBase::Decimal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputBase::Hex => "hex",
            OutputBase::Binary => "binary",
            OutputBase::Decimal => "decimal",
        }
    }
}

impl fmt::Display for OutputBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format `bits` for display or export in the given base
pub fn format(bits: u64, base: OutputBase) -> String {
    match base {
        OutputBase::Hex => format!("0x{:016x}", bits),
        OutputBase::Binary => format!("0b{}", format_binary64(bits)),
        OutputBase::Decimal => bits.to_string(),
    }
}

/// All 64 bits, most significant first, without a prefix
pub fn format_binary64(bits: u64) -> String {
    format!("{:064b}", bits)
}

/// Parse free-form text, picking the base from its prefix
///
/// `0x`/`0X` selects hex, `0b`/`0B` binary, anything else decimal (a leading
/// zero does not mean octal). Returns `None` only when no digit was found.
pub fn parse(text: &str) -> Option<u64> {
    let (negative, body) = split_sign(text.trim_start());
    let bytes = body.as_bytes();

    let (radix, digits) = match bytes {
        [b'0', b'x' | b'X', ..] => (16, &body[2..]),
        [b'0', b'b' | b'B', ..] => (2, &body[2..]),
        _ => (10, body),
    };

    let value = match accumulate(digits, radix) {
        Some(value) => value,
        // "0x" with no hex digit after it still read a zero
        None if radix != 10 => 0,
        None => return None,
    };

    Some(apply_sign(negative, value))
}

/// Parse with a fixed radix and no prefix detection
pub fn parse_radix(text: &str, radix: u32) -> Option<u64> {
    let (negative, body) = split_sign(text.trim_start());
    accumulate(body, radix).map(|value| apply_sign(negative, value))
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn apply_sign(negative: bool, value: u64) -> u64 {
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Fold the leading valid digits into a value, saturating on overflow
fn accumulate(digits: &str, radix: u32) -> Option<u64> {
    let mut value: u64 = 0;
    let mut seen = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        value = value
            .checked_mul(radix as u64)
            .and_then(|v| v.checked_add(digit as u64))
            .unwrap_or(u64::MAX);
    }
    seen.then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_width_formats() {
        assert_eq!(format(0, OutputBase::Hex), "0x0000000000000000");
        assert_eq!(format(u64::MAX, OutputBase::Hex), "0xffffffffffffffff");
        assert_eq!(format(0, OutputBase::Binary), format!("0b{}", "0".repeat(64)));
        assert_eq!(
            format(u64::MAX, OutputBase::Binary),
            format!("0b{}", "1".repeat(64))
        );
        assert_eq!(format(0, OutputBase::Decimal), "0");
        assert_eq!(format(u64::MAX, OutputBase::Decimal), "18446744073709551615");
    }

    #[test]
    fn test_binary64_is_msb_first() {
        let s = format_binary64(1);
        assert_eq!(s.len(), 64);
        assert!(s.ends_with('1'));
        assert!(format_binary64(1 << 63).starts_with('1'));
    }

    #[test]
    fn test_base_cycle_returns_to_start() {
        let start = OutputBase::Hex;
        assert_eq!(start.next(), OutputBase::Binary);
        assert_eq!(start.next().next(), OutputBase::Decimal);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_prefix_detection() {
        assert_eq!(parse("0xff"), Some(255));
        assert_eq!(parse("0XFF"), Some(255));
        assert_eq!(parse("0b101"), Some(5));
        assert_eq!(parse("0B11"), Some(3));
        assert_eq!(parse("42"), Some(42));
    }

    #[test]
    fn test_leading_zero_is_decimal() {
        assert_eq!(parse("010"), Some(10));
        assert_eq!(parse("0777"), Some(777));
    }

    #[test]
    fn test_stops_at_first_invalid_character() {
        assert_eq!(parse("123abc"), Some(123));
        assert_eq!(parse("0x1g"), Some(1));
        assert_eq!(parse("0b1021"), Some(2));
        assert_eq!(parse("  77\n"), Some(77));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("hello"), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("0x"), Some(0));
        assert_eq!(parse("0bz"), Some(0));
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(parse("18446744073709551616"), Some(u64::MAX));
        assert_eq!(parse("0x1ffffffffffffffff"), Some(u64::MAX));
    }

    #[test]
    fn test_sign_handling() {
        assert_eq!(parse("+5"), Some(5));
        assert_eq!(parse("-1"), Some(u64::MAX));
        assert_eq!(parse("-"), None);
    }

    #[test]
    fn test_parse_radix_has_no_prefix_detection() {
        assert_eq!(parse_radix("1011", 2), Some(11));
        assert_eq!(parse_radix("0b11", 2), Some(0));
        assert_eq!(parse_radix("2", 2), None);
    }

    #[test]
    fn test_base_names() {
        assert_eq!(OutputBase::from_name("HEX"), Some(OutputBase::Hex));
        assert_eq!(OutputBase::from_name("bin"), Some(OutputBase::Binary));
        assert_eq!(OutputBase::from_name("decimal"), Some(OutputBase::Decimal));
        assert_eq!(OutputBase::from_name("octal"), None);
    }

    proptest! {
        #[test]
        fn prop_format_parse_round_trip(bits in any::<u64>()) {
            for base in [OutputBase::Hex, OutputBase::Binary, OutputBase::Decimal] {
                prop_assert_eq!(parse(&format(bits, base)), Some(bits));
            }
        }
    }
}
