//! Field validation run before any write.

use serde_json::Value;

pub const NAME_MAX_CHARS: usize = 50;
pub const PRICE_MIN: i64 = 1;
pub const PRICE_MAX: i64 = 30;

pub const MISSING_NAME: &str = "Restaurant must have a name";
pub const NAME_TOO_LONG: &str = "Restaurant name must be less than 50 characters";
pub const INVALID_PRICE: &str = "Price must be an integer between 1 and 30";

/// Restaurant names must be non-empty and at most 50 characters.
pub fn validate_restaurant_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err(MISSING_NAME.into());
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(NAME_TOO_LONG.into());
    }
    Ok(())
}

/// Type and range check for a price taken straight from a request body.
/// Only JSON integers are accepted; `15.0`, `"15"` and `true` are rejected.
pub fn validate_price(value: &Value) -> Result<i64, String> {
    match value.as_i64() {
        Some(price) if (PRICE_MIN..=PRICE_MAX).contains(&price) => Ok(price),
        _ => Err(INVALID_PRICE.into()),
    }
}

/// Id fields are positive JSON integers; anything else cannot name a row.
pub fn parse_id(value: &Value) -> Option<i64> {
    value.as_i64().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_rules() {
        assert_eq!(validate_restaurant_name(""), Err(MISSING_NAME.to_string()));
        assert_eq!(
            validate_restaurant_name(&"x".repeat(51)),
            Err(NAME_TOO_LONG.to_string())
        );
        assert!(validate_restaurant_name(&"x".repeat(50)).is_ok());
        assert!(validate_restaurant_name("Karen's Pizza Shack").is_ok());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(validate_restaurant_name(&"é".repeat(50)).is_ok());
        assert!(validate_restaurant_name(&"é".repeat(51)).is_err());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        assert_eq!(validate_price(&json!(1)), Ok(1));
        assert_eq!(validate_price(&json!(15)), Ok(15));
        assert_eq!(validate_price(&json!(30)), Ok(30));
        assert!(validate_price(&json!(0)).is_err());
        assert!(validate_price(&json!(31)).is_err());
        assert!(validate_price(&json!(-5)).is_err());
    }

    #[test]
    fn price_must_be_an_integer() {
        for value in [json!(15.5), json!(15.0), json!("15"), json!(true), json!(null)] {
            assert_eq!(validate_price(&value), Err(INVALID_PRICE.to_string()), "{value}");
        }
    }

    #[test]
    fn ids_are_positive_integers() {
        assert_eq!(parse_id(&json!(3)), Some(3));
        assert_eq!(parse_id(&json!(0)), None);
        assert_eq!(parse_id(&json!("3")), None);
        assert_eq!(parse_id(&json!(null)), None);
    }
}
