use serde_json::{json, Number, Value};

use crate::metadata::Datatype;

/// Convert a raw cell value according to the column's declared datatype.
///
/// Recognized base datatypes produce `{"@value": ..., "@type": "xsd:..."}`
/// objects; anything else (or no datatype) passes the string through
/// unchanged. Parsing is permissive: a non-numeric cell under a numeric
/// datatype yields a `null` `@value` rather than an error, so one bad cell
/// never aborts a row.
pub(crate) fn convert_value(value: &str, datatype: Option<&Datatype>) -> Value {
    let Some(datatype) = datatype else {
        return Value::String(value.to_string());
    };

    match datatype.base() {
        "integer" => {
            let parsed = value
                .trim()
                .parse::<i64>()
                .map(Number::from)
                .map_or(Value::Null, Value::Number);
            json!({ "@value": parsed, "@type": "xsd:integer" })
        }
        "decimal" => {
            let parsed = value
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map_or(Value::Null, Value::Number);
            json!({ "@value": parsed, "@type": "xsd:decimal" })
        }
        // Date strings are carried through unparsed.
        "date" => json!({ "@value": value, "@type": "xsd:date" }),
        _ => Value::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integer() -> Datatype {
        Datatype::Base("integer".to_string())
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(
            convert_value("42", Some(&integer())),
            json!({ "@value": 42, "@type": "xsd:integer" })
        );
    }

    #[test]
    fn test_invalid_integer_becomes_null_sentinel() {
        assert_eq!(
            convert_value("abc", Some(&integer())),
            json!({ "@value": null, "@type": "xsd:integer" })
        );
    }

    #[test]
    fn test_decimal_conversion() {
        assert_eq!(
            convert_value("3.5", Some(&Datatype::Base("decimal".into()))),
            json!({ "@value": 3.5, "@type": "xsd:decimal" })
        );
    }

    #[test]
    fn test_invalid_decimal_becomes_null_sentinel() {
        assert_eq!(
            convert_value("tall", Some(&Datatype::Base("decimal".into()))),
            json!({ "@value": null, "@type": "xsd:decimal" })
        );
    }

    #[test]
    fn test_date_passes_through_unparsed() {
        assert_eq!(
            convert_value("1999-12-31", Some(&Datatype::Described { base: "date".into() })),
            json!({ "@value": "1999-12-31", "@type": "xsd:date" })
        );
    }

    #[test]
    fn test_unknown_datatype_is_a_plain_string() {
        assert_eq!(
            convert_value("hello", Some(&Datatype::Base("string".into()))),
            Value::String("hello".into())
        );
    }

    #[test]
    fn test_no_datatype_is_a_plain_string() {
        assert_eq!(convert_value("hello", None), Value::String("hello".into()));
    }
}
