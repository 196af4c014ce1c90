//! Field type coercion

use crate::errors::CoercionError;
use flatfile_record::Value;
use flatfile_schema::ColumnType;

/// Convert one fixed-width slice to a typed value.
///
/// - `str`: surrounding whitespace is trimmed, never fails
/// - `bool`: exactly `"1"` or `"0"`, no trimming
/// - `int`: base-10 `i64`, optional sign, surrounding whitespace allowed
pub fn coerce(raw: &str, column_type: ColumnType) -> Result<Value, CoercionError> {
    match column_type {
        ColumnType::Str => Ok(Value::Str(raw.trim().to_string())),
        ColumnType::Bool => match raw {
            "1" => Ok(Value::Bool(true)),
            "0" => Ok(Value::Bool(false)),
            _ => Err(CoercionError::InvalidBool {
                raw: raw.to_string(),
            }),
        },
        ColumnType::Int => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| CoercionError::InvalidInt {
                raw: raw.to_string(),
                reason: e.to_string(),
            }),
    }
}

/// Coerce against a type given as its descriptor token
pub fn coerce_token(raw: &str, type_token: &str) -> Result<Value, CoercionError> {
    let column_type = type_token
        .parse::<ColumnType>()
        .map_err(|_| CoercionError::UnsupportedType(type_token.to_string()))?;
    coerce(raw, column_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_is_trimmed() {
        assert_eq!(
            coerce("Foonyor   ", ColumnType::Str).unwrap(),
            Value::from("Foonyor")
        );
        assert_eq!(coerce("  a b  ", ColumnType::Str).unwrap(), Value::from("a b"));
        assert_eq!(coerce("", ColumnType::Str).unwrap(), Value::from(""));
    }

    #[test]
    fn test_bool_is_exact() {
        assert_eq!(coerce("1", ColumnType::Bool).unwrap(), Value::Bool(true));
        assert_eq!(coerce("0", ColumnType::Bool).unwrap(), Value::Bool(false));

        for raw in ["", " ", "2", "Y", "true", " 1", "10"] {
            assert_eq!(
                coerce(raw, ColumnType::Bool),
                Err(CoercionError::InvalidBool {
                    raw: raw.to_string()
                }),
                "{raw:?} should not be a bool"
            );
        }
    }

    #[test]
    fn test_int_parsing() {
        assert_eq!(coerce("-12", ColumnType::Int).unwrap(), Value::Int(-12));
        assert_eq!(coerce("103", ColumnType::Int).unwrap(), Value::Int(103));
        assert_eq!(coerce("+7", ColumnType::Int).unwrap(), Value::Int(7));
        assert_eq!(coerce("  1", ColumnType::Int).unwrap(), Value::Int(1));
        assert_eq!(coerce("001", ColumnType::Int).unwrap(), Value::Int(1));
    }

    #[test]
    fn test_int_rejects_non_numeric() {
        for raw in ["", "   ", "1.5", "abc", "1 2", "--1", "99999999999999999999"] {
            let err = coerce(raw, ColumnType::Int).unwrap_err();
            assert!(
                matches!(&err, CoercionError::InvalidInt { raw: r, .. } if r == raw),
                "{raw:?} should not be an int"
            );
        }
    }

    #[test]
    fn test_coerce_token() {
        assert_eq!(coerce_token("1", "bool").unwrap(), Value::Bool(true));
        assert_eq!(
            coerce_token("1.5", "float"),
            Err(CoercionError::UnsupportedType("float".to_string()))
        );
    }
}
