//! Cell values and record field access.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The raw value a record exposes for a single field.
///
/// This is the display-independent value the sort stage compares and the
/// filter stage coerces to text. Column `render` closures receive it before
/// any formatting is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Missing or explicitly null field. Renders empty and never matches a
    /// non-empty query.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl CellValue {
    /// Numeric view used by the sort comparator. Strings are not parsed;
    /// only genuinely numeric values compare numerically.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Str(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Str(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => CellValue::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => CellValue::Str(s.clone()),
            // Nested structures coerce to their compact JSON text.
            other => CellValue::Str(other.to_string()),
        }
    }
}

/// Field access by key over an opaque record shape.
///
/// The engine makes no assumption about `T` beyond this trait: columns and
/// search keys name fields, and the record answers with a [`CellValue`].
/// Unknown keys must answer [`CellValue::Null`], never panic.
pub trait Record {
    fn field(&self, key: &str) -> CellValue;
}

/// JSON objects are records out of the box; non-object values expose no
/// fields. This is what the `gridkit` binary runs on.
impl Record for Value {
    fn field(&self, key: &str) -> CellValue {
        match self.get(key) {
            Some(value) => CellValue::from(value),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_field_access_coerces_scalars() {
        let row = json!({"name": "Velvet Matte", "price": 19.5, "stock": 12, "active": true});
        assert_eq!(row.field("name"), CellValue::Str("Velvet Matte".into()));
        assert_eq!(row.field("price"), CellValue::Float(19.5));
        assert_eq!(row.field("stock"), CellValue::Int(12));
        assert_eq!(row.field("active"), CellValue::Bool(true));
    }

    #[test]
    fn missing_and_null_fields_are_null() {
        let row = json!({"note": null});
        assert!(row.field("note").is_null());
        assert!(row.field("absent").is_null());
        assert_eq!(row.field("absent").to_string(), "");
    }

    #[test]
    fn nested_values_coerce_to_json_text() {
        let row = json!({"tags": ["a", "b"]});
        assert_eq!(row.field("tags"), CellValue::Str("[\"a\",\"b\"]".into()));
    }

    #[test]
    fn numeric_view_ignores_numeric_strings() {
        assert_eq!(CellValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Str("3".into()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }
}
