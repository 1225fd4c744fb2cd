//! Default-valued accessors over schema-less documents.
//!
//! The store enforces no schema, so every field read goes through one of
//! these helpers: wrong-typed or missing values collapse to a default
//! instead of failing the surrounding record.

use serde_json::Value;

use crate::store::Document;

/// String field, present only if the document holds a string under `field`.
pub fn str_field(doc: &Document, field: &str) -> Option<String> {
    doc.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Boolean field defaulting to `false` for anything that is not `true`.
pub fn bool_field(doc: &Document, field: &str) -> bool {
    doc.get(field).and_then(Value::as_bool).unwrap_or(false)
}

/// Numeric field accepting either a JSON number or a numeric string.
pub fn numeric_field(doc: &Document, field: &str) -> Option<f64> {
    doc.get(field).and_then(as_number)
}

/// Monetary value: number or numeric string, anything else is zero.
pub fn money(value: &Value) -> f64 {
    as_number(value).unwrap_or(0.0)
}

/// First monetary field present in `doc` following the `fields` precedence
/// order. Present-but-unparsable values count as zero rather than falling
/// through to the next name.
pub fn first_money(doc: &Document, fields: &[&str]) -> f64 {
    fields
        .iter()
        .find_map(|field| doc.get(*field))
        .map(money)
        .unwrap_or(0.0)
}

/// `"{first} {last}"` with absent parts collapsing to the empty string and
/// surrounding whitespace trimmed. The listing pages render this directly;
/// placeholder text for missing drivers lives at the enrichment call sites.
pub fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or(""), last.unwrap_or(""))
        .trim()
        .to_string()
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{bool_field, first_money, full_name, money, numeric_field, str_field};
    use crate::store::Document;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().expect("object").clone()
    }

    #[test]
    fn money_coerces_strings_and_defaults_unparsable_to_zero() {
        assert_eq!(money(&json!(30)), 30.0);
        assert_eq!(money(&json!("50")), 50.0);
        assert_eq!(money(&json!(" 12.5 ")), 12.5);
        assert_eq!(money(&json!("not a number")), 0.0);
        assert_eq!(money(&json!(null)), 0.0);
        assert_eq!(money(&json!({"nested": true})), 0.0);
    }

    #[test]
    fn first_money_follows_precedence_order() {
        let d = doc(json!({ "fare": "25", "price": 99 }));
        assert_eq!(first_money(&d, &["amount", "fare", "totalAmount", "price"]), 25.0);

        let empty = doc(json!({}));
        assert_eq!(first_money(&empty, &["amount", "fare"]), 0.0);
    }

    #[test]
    fn first_money_does_not_fall_past_an_unparsable_value() {
        let d = doc(json!({ "amount": "n/a", "fare": 40 }));
        assert_eq!(first_money(&d, &["amount", "fare"]), 0.0);
    }

    #[test]
    fn typed_getters_tolerate_wrong_types() {
        let d = doc(json!({ "name": 7, "flag": "yes", "score": "4.5" }));
        assert_eq!(str_field(&d, "name"), None);
        assert!(!bool_field(&d, "flag"));
        assert_eq!(numeric_field(&d, "score"), Some(4.5));
        assert_eq!(numeric_field(&d, "missing"), None);
    }

    #[test]
    fn full_name_collapses_missing_parts() {
        assert_eq!(full_name(Some("Ada"), Some("Okafor")), "Ada Okafor");
        assert_eq!(full_name(Some("Ada"), None), "Ada");
        assert_eq!(full_name(None, Some("Okafor")), "Okafor");
        assert_eq!(full_name(None, None), "");
    }
}
