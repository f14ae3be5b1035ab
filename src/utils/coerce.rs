use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/* Turn whatever landed in a numeric cell into a Decimal magnitude.

The logs are filled by chat-receipt parsers and hand edits, so cells carry
thousands separators, blanks, or outright debris. The rule: strip commas,
then accept the residue only if it is all digits once its decimal point is
removed. Anything else (including negative literals, amounts are magnitudes
with sign assigned by event kind) coerces to zero. */
pub fn coerce_decimal(cell: &str) -> Decimal {
    let cleaned: String = cell.trim().chars().filter(|c| *c != ',').collect();
    let digits_only: String = cleaned.chars().filter(|c| *c != '.').collect();
    if digits_only.is_empty() || !digits_only.chars().all(|c| c.is_ascii_digit()) {
        return dec!(0);
    }
    // A residue like "12.34.56" passes the digit check but is not a number
    return Decimal::from_str(&cleaned).unwrap_or(dec!(0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_decimal() {
        assert_eq!(coerce_decimal("1450"), dec!(1450));
        assert_eq!(coerce_decimal("50.25"), dec!(50.25));
        assert_eq!(coerce_decimal(" 7.5 "), dec!(7.5));
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(coerce_decimal("1,450,000"), dec!(1450000));
        assert_eq!(coerce_decimal("1,234.56"), dec!(1234.56));
    }

    #[test]
    fn test_debris_coerces_to_zero() {
        assert_eq!(coerce_decimal(""), dec!(0));
        assert_eq!(coerce_decimal("   "), dec!(0));
        assert_eq!(coerce_decimal("n/a"), dec!(0));
        assert_eq!(coerce_decimal("₩1450"), dec!(0));
        assert_eq!(coerce_decimal("12.34.56"), dec!(0));
    }

    #[test]
    fn test_negative_is_not_special_cased() {
        // Amounts are magnitudes, a sign means the cell is malformed
        assert_eq!(coerce_decimal("-5"), dec!(0));
        assert_eq!(coerce_decimal("-1,000.50"), dec!(0));
    }
}
