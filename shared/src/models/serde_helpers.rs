//! Lenient serde helpers for catalog payloads
//!
//! The catalog backend is not strict about number formatting: prices arrive
//! as numbers or as numeric strings, counts may be null, and older cart
//! snapshots stored ids as numbers.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Deserialize an optional price from a number, a numeric string or null.
///
/// Zero, empty, negative and unparsable values mean "price on request" and
/// decode to `None`.
pub fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PriceVisitor;

    impl<'de> Visitor<'de> for PriceVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a price as number, numeric string or null")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(normalize_price(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(normalize_price(value as f64))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(normalize_price(value as f64))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            // "1 250,50" style input from the price lists
            let cleaned: String = value
                .trim()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            Ok(cleaned.parse::<f64>().ok().and_then(normalize_price))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(PriceVisitor)
}

fn normalize_price(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Deserialize a count that treats null as zero
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer).map(|opt| opt.unwrap_or(0))
}

/// Deserialize an identifier that may be stored as a number or a string
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an id as string or integer")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Priced {
        #[serde(default, deserialize_with = "lenient_price")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "count_or_zero")]
        count: u32,
    }

    fn price_of(json: &str) -> Option<f64> {
        serde_json::from_str::<Priced>(json).unwrap().price
    }

    #[test]
    fn test_lenient_price_formats() {
        assert_eq!(price_of(r#"{"price": 2350}"#), Some(2350.0));
        assert_eq!(price_of(r#"{"price": 2120.5}"#), Some(2120.5));
        assert_eq!(price_of(r#"{"price": "2350"}"#), Some(2350.0));
        assert_eq!(price_of(r#"{"price": "1 250,50"}"#), Some(1250.5));
    }

    #[test]
    fn test_price_on_request_values() {
        assert_eq!(price_of(r#"{"price": null}"#), None);
        assert_eq!(price_of(r#"{"price": ""}"#), None);
        assert_eq!(price_of(r#"{"price": 0}"#), None);
        assert_eq!(price_of(r#"{"price": "по запросу"}"#), None);
        assert_eq!(price_of(r#"{}"#), None);
    }

    #[test]
    fn test_count_null_is_zero() {
        let p: Priced = serde_json::from_str(r#"{"count": null}"#).unwrap();
        assert_eq!(p.count, 0);
        let p: Priced = serde_json::from_str(r#"{"count": 14}"#).unwrap();
        assert_eq!(p.count, 14);
    }
}
