//! The hex formatter turns a comma-separated list of decimal integers
//! into one `<hex> // <decimal>` line per integer.
//! 
//! ```text
//! 10, 255, -1
//! ```
//! 
//! formats, under the default `Variant::Normalize`, as
//! 
//! ```text
//! a // 10
//! ff // 255
//! ffffffff // -1
//! ```
use std::fmt;
use super::error::{Error, Result};
use super::tokens::split_tokens;

/// 2^32, the modulus used to reinterpret negative values as
/// unsigned 32-bit words.
pub const WORD_MODULUS: i64 = 1 << 32;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Variant {
    /// Negative values are mapped into `[0, 2^32)` before formatting.
    Normalize,
    /// Negative values are printed as a `-` followed by their magnitude.
    Raw,
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Normalize
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Variant::Normalize => write!(f, "normalize"),
            Variant::Raw => write!(f, "raw"),
        }
    }
}

/// A parsed input number and the variant it should be rendered with.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct HexLine {
    pub value: i64,
    pub variant: Variant,
}

impl HexLine {
    /// The hex field, lowercase with no `0x` prefix.
    pub fn hex(&self) -> String {
        match self.variant {
            Variant::Normalize => format!("{:x}", normalize(self.value)),
            Variant::Raw if self.value < 0 => format!("-{:x}", self.value.unsigned_abs()),
            Variant::Raw => format!("{:x}", self.value),
        }
    }
}

impl fmt::Display for HexLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} // {}", self.hex(), self.value)
    }
}

/// Maps a negative value to its two's-complement 32-bit word.
/// Non-negative values pass through unchanged.
pub fn normalize(value: i64) -> i64 {
    if value < 0 {
        value.rem_euclid(WORD_MODULUS)
    } else {
        value
    }
}

fn parse_number(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|source| Error::Parse {
        token: token.to_owned(),
        source,
    })
}

/// Parses every token of `text` and returns one line per token, in order.
/// The first token that is not a base-10 integer aborts the run.
pub fn format_list(text: &str, variant: Variant) -> Result<Vec<HexLine>> {
    let tokens = split_tokens(text);
    debug!("Formatting {} token(s) with the {} variant", tokens.len(), variant);

    let mut lines = Vec::with_capacity(tokens.len());
    for token in tokens.iter() {
        let value = parse_number(token)?;
        lines.push(HexLine { value, variant });
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, variant: Variant) -> Vec<String> {
        format_list(text, variant)
            .unwrap()
            .iter()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_non_negative() {
        for n in [0i64, 1, 9, 10, 15, 16, 255, 4096, 0xdead_beef, i64::MAX].iter() {
            for variant in [Variant::Normalize, Variant::Raw].iter() {
                let line = HexLine { value: *n, variant: *variant };
                assert_eq!(line.hex(), format!("{:x}", n));
                assert_eq!(line.to_string(), format!("{:x} // {}", n, n));
            }
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(-1), 0xffff_ffff);
        assert_eq!(normalize(-2), 0xffff_fffe);
        assert_eq!(normalize(-(WORD_MODULUS - 1)), 1);
        assert_eq!(normalize(-WORD_MODULUS), 0);
        assert_eq!(normalize(0), 0);
        assert_eq!(normalize(WORD_MODULUS), WORD_MODULUS);

        let line = HexLine { value: -1, variant: Variant::Normalize };
        assert_eq!(line.to_string(), "ffffffff // -1");

        let line = HexLine { value: -256, variant: Variant::Normalize };
        assert_eq!(line.to_string(), "ffffff00 // -256");
    }

    #[test]
    fn test_normalized_hex_parses_back() {
        for n in [-1i64, -2, -255, -65536, -123_456_789, -(WORD_MODULUS - 1)].iter() {
            let line = HexLine { value: *n, variant: Variant::Normalize };
            assert_eq!(i64::from_str_radix(&line.hex(), 16), Ok(WORD_MODULUS + n));
        }
    }

    #[test]
    fn test_raw() {
        let line = HexLine { value: -1, variant: Variant::Raw };
        assert_eq!(line.to_string(), "-1 // -1");

        let line = HexLine { value: -255, variant: Variant::Raw };
        assert_eq!(line.to_string(), "-ff // -255");

        let line = HexLine { value: i64::MIN, variant: Variant::Raw };
        assert_eq!(line.hex(), "-8000000000000000");
        assert_eq!(i64::from_str_radix(&line.hex(), 16), Ok(i64::MIN));
    }

    #[test]
    fn test_format_list() {
        assert_eq!(
            render("10, 255,\n-1", Variant::Normalize),
            vec!["a // 10", "ff // 255", "ffffffff // -1"]
        );
        assert_eq!(
            render("10, 255,\n-1", Variant::Raw),
            vec!["a // 10", "ff // 255", "-1 // -1"]
        );
        assert_eq!(render("+7, 07", Variant::default()), vec!["7 // 7", "7 // 7"]);
    }

    #[test]
    fn test_format_list_errors() {
        assert!(matches!(
            format_list("1, two, 3", Variant::Normalize),
            Err(Error::Parse { ref token, .. }) if token == "two"
        ));
        assert!(matches!(
            format_list("0x10", Variant::Normalize),
            Err(Error::Parse { ref token, .. }) if token == "0x10"
        ));
        // Trailing commas and empty input leave an empty token behind.
        assert!(matches!(
            format_list("1, 2,", Variant::Normalize),
            Err(Error::Parse { ref token, .. }) if token.is_empty()
        ));
        assert!(format_list("", Variant::Raw).is_err());
        assert!(format_list("99999999999999999999", Variant::Raw).is_err());
    }
}
