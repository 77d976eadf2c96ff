//! Unit conversion between the chain's smallest denomination and the
//! human-readable display denomination, plus address format validation.

use std::str::FromStr;

use ethers::types::{Address, U256};
use ethers::utils::{parse_units, ParseUnits};

use crate::core::errors::SessionError;

/// Formats a raw smallest-unit value into the display denomination with a
/// fixed number of fractional digits, rounding half-up (the last digit is
/// rounded, not truncated).
pub fn format_display(raw: U256, decimals: u8, digits: u32) -> String {
    // u64 holds any fractional part up to 18 digits.
    let digits = digits.min(18);
    let decimals = decimals as u32;

    // Rescale `raw` so its unit is 10^-digits of the display denomination.
    let scaled = if decimals > digits {
        let divisor = U256::from(10u64).pow(U256::from(decimals - digits));
        let half = divisor / U256::from(2u64);
        raw.checked_add(half).map(|v| v / divisor).unwrap_or_else(|| raw / divisor)
    } else {
        let factor = U256::from(10u64).pow(U256::from(digits - decimals));
        raw.checked_mul(factor).unwrap_or(U256::MAX)
    };

    if digits == 0 {
        return scaled.to_string();
    }

    let base = U256::from(10u64).pow(U256::from(digits));
    let int = scaled / base;
    let frac = (scaled % base).as_u64();
    format!("{}.{:0width$}", int, frac, width = digits as usize)
}

/// Converts a display-denomination decimal string into the smallest unit.
/// Non-numeric or negative input is an [`SessionError::InvalidAmount`].
pub fn parse_amount(display: &str, decimals: u8) -> Result<U256, SessionError> {
    let trimmed = display.trim();
    if trimmed.is_empty() {
        return Err(SessionError::InvalidAmount("empty amount".to_string()));
    }
    match parse_units(trimmed, decimals as u32) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(_)) => {
            Err(SessionError::InvalidAmount(format!("negative amount '{}'", display)))
        }
        Err(e) => Err(SessionError::InvalidAmount(format!("'{}': {}", display, e))),
    }
}

/// Validates that a string is a well-formed chain address.
pub fn validate_address(address: &str) -> bool {
    Address::from_str(address).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn eth(raw: u128) -> U256 {
        U256::from(raw)
    }

    #[test]
    fn test_format_display_whole_and_fraction() {
        // 1.5 ETH in wei
        assert_eq!(format_display(eth(1_500_000_000_000_000_000), 18, 4), "1.5000");
        assert_eq!(format_display(eth(0), 18, 4), "0.0000");
        assert_eq!(format_display(eth(2_000_000_000_000_000_000), 18, 4), "2.0000");
    }

    #[test]
    fn test_format_display_rounds_half_up() {
        // 0.00005 ETH rounds up to the 4th digit
        assert_eq!(format_display(eth(50_000_000_000_000), 18, 4), "0.0001");
        // 0.00004999... rounds down
        assert_eq!(format_display(eth(49_999_999_999_999), 18, 4), "0.0000");
        // 1 wei is invisible at 4 digits
        assert_eq!(format_display(eth(1), 18, 4), "0.0000");
    }

    #[test]
    fn test_format_display_small_decimals() {
        // A 6-decimal currency shown at 4 digits
        assert_eq!(format_display(eth(1_234_567), 6, 4), "1.2346");
        // A 2-decimal currency shown at 4 digits pads with zeros
        assert_eq!(format_display(eth(150), 2, 4), "1.5000");
    }

    #[test]
    fn test_format_display_zero_digits() {
        assert_eq!(format_display(eth(1_900_000_000_000_000_000), 18, 0), "2");
    }

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("1.5", 18).unwrap(), eth(1_500_000_000_000_000_000));
        assert_eq!(parse_amount("0.0001", 18).unwrap(), eth(100_000_000_000_000));
        assert_eq!(parse_amount("2", 6).unwrap(), eth(2_000_000));
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("abc" ; "non numeric")]
    #[test_case("1.2.3" ; "double dot")]
    #[test_case("-1" ; "negative integer")]
    #[test_case("-0.5" ; "negative fraction")]
    fn test_parse_amount_invalid(input: &str) {
        match parse_amount(input, 18) {
            Err(SessionError::InvalidAmount(_)) => {}
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[test_case("0x742d35Cc6634C0532925a3b844Bc454e4438f44e", true ; "checksummed")]
    #[test_case("0x742d35cc6634c0532925a3b844bc454e4438f44e", true ; "lowercase")]
    #[test_case("0x0000000000000000000000000000000000000000", true ; "all zeros")]
    #[test_case("not-an-address", false ; "garbage")]
    #[test_case("0x12345", false ; "too short")]
    #[test_case("", false ; "empty")]
    #[test_case("0x742d35Cc6634C0532925a3b844Bc454e4438f44e!", false ; "trailing junk")]
    fn test_validate_address(input: &str, expected: bool) {
        assert_eq!(validate_address(input), expected);
    }
}
