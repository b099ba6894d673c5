//! Coercion of loosely-typed JSON values into the scalar shapes the domain
//! types hold.
//!
//! Persisted records may come from older versions, hand-edited import files,
//! or partial writes, so every field is read as an arbitrary [`Value`].

use serde_json::Value;

/// Coerce a value to text.
///
/// Strings pass through; non-zero numbers use their decimal form; `true`
/// becomes `"true"`. Missing values, `null`, `false`, zero, arrays and
/// objects all become the empty string.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_owned(),
        _ => String::new(),
    }
}

/// Coerce a value to a finite, non-negative amount. Anything else is `0.0`.
pub fn amount(value: Option<&Value>) -> f64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };

    if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
}

/// Coerce a value to a whole number, truncating fractions.
///
/// Non-numeric input becomes `0`.
#[allow(clippy::cast_possible_truncation)]
pub fn integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
                .unwrap_or(0)
        }
        Value::Bool(true) => 1,
        _ => 0,
    }
}

/// Coerce an array value to a list of non-empty strings.
///
/// Returns `None` when the value is not an array at all.
pub fn text_list(value: Option<&Value>) -> Option<Vec<String>> {
    match value {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| text(Some(item)))
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_scalars() {
        assert_eq!(text(Some(&json!("Seiko"))), "Seiko");
        assert_eq!(text(Some(&json!(42))), "42");
        assert_eq!(text(Some(&json!(true))), "true");
    }

    #[test]
    fn test_text_falsy_values_are_empty() {
        assert_eq!(text(None), "");
        assert_eq!(text(Some(&Value::Null)), "");
        assert_eq!(text(Some(&json!(false))), "");
        assert_eq!(text(Some(&json!(0))), "");
        assert_eq!(text(Some(&json!(["a"]))), "");
        assert_eq!(text(Some(&json!({"a": 1}))), "");
    }

    #[test]
    fn test_amount_parses_numeric_strings() {
        assert!((amount(Some(&json!("129.5"))) - 129.5).abs() < f64::EPSILON);
        assert!((amount(Some(&json!(" 80 "))) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_amount_invalid_input_is_zero() {
        assert!(amount(Some(&json!("abc"))).abs() < f64::EPSILON);
        assert!(amount(Some(&json!(""))).abs() < f64::EPSILON);
        assert!(amount(Some(&json!("NaN"))).abs() < f64::EPSILON);
        assert!(amount(Some(&json!(-5))).abs() < f64::EPSILON);
        assert!(amount(None).abs() < f64::EPSILON);
    }

    #[test]
    fn test_integer_truncates() {
        assert_eq!(integer(&json!(3)), 3);
        assert_eq!(integer(&json!(2.9)), 2);
        assert_eq!(integer(&json!("4")), 4);
        assert_eq!(integer(&json!("x")), 0);
        assert_eq!(integer(&json!(-2)), -2);
    }

    #[test]
    fn test_text_list_drops_empty_entries() {
        assert_eq!(
            text_list(Some(&json!(["Sapphire crystal", "", 0, "100m"]))),
            Some(vec!["Sapphire crystal".to_owned(), "100m".to_owned()])
        );
        assert_eq!(text_list(Some(&json!("not a list"))), None);
    }
}
