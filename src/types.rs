//! Core data model types.
//!
//! A [`DataSet`] is a row-major, in-memory table described by a [`Schema`] (a list of typed
//! [`Field`]s). The field types are the table's own type metadata: the glimpse reporter prints
//! them as-is and never re-derives a type from the values.

use std::fmt;

use chrono::NaiveDate;

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
    /// Calendar date without time zone.
    Date,
    /// Mixed column; cells may hold any [`Value`] variant.
    Object,
}

impl DataType {
    /// Short type tag shown in glimpse output (e.g. `int64`, `object`).
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::Utf8 => "str",
            Self::Date => "date",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered list of fields describing the shape of a [`DataSet`].
///
/// Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Calendar date.
    Date(NaiveDate),
}

impl Value {
    /// Returns `true` for [`Value::Null`] and for a NaN float; both preview as `None`.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Float64(v) => v.is_nan(),
            _ => false,
        }
    }
}

/// Display form used by previews. Missing values render as `None`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("None"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float64(v) => write_float(f, *v),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Utf8(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

// Integral floats keep a trailing `.0` so they read as floats next to int64 columns.
// Magnitudes from 1e16 up, or below 1e-4, switch to exponent form (`1e+16`, `2.5e-05`).
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        f.write_str("nan")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "inf" } else { "-inf" })
    } else if v != 0.0 && (v.abs() >= 1e16 || v.abs() < 1e-4) {
        write_exponent(f, v)
    } else if v.fract() == 0.0 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

// `{:e}` gives the shortest mantissa (`1e16`, `1e-5`); the exponent gets a sign and two digits.
fn write_exponent(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let text = format!("{v:e}");
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Returns the cell at (`row`, `column`), or `None` if the row is missing or too short.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DataSet, DataType, Field, Schema, Value};

    #[test]
    fn schema_keeps_duplicate_names_in_order() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("name", DataType::Utf8),
            Field::new("id", DataType::Float64),
        ]);
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["id", "name", "id"]);
    }

    #[test]
    fn value_display_forms() {
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Value::Int64(-3).to_string(), "-3");
        assert_eq!(Value::Float64(10.0).to_string(), "10.0");
        assert_eq!(Value::Float64(98.5).to_string(), "98.5");
        assert_eq!(Value::Float64(f64::NAN).to_string(), "nan");
        assert_eq!(Value::Float64(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Utf8("Ada".to_string()).to_string(), "Ada");
        let d = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(Value::Date(d).to_string(), "2025-01-07");
    }

    #[test]
    fn float_display_switches_to_exponent_at_the_edges() {
        let shown = |v: f64| Value::Float64(v).to_string();
        assert_eq!(shown(9999999999999998.0), "9999999999999998.0");
        assert_eq!(shown(1e16), "1e+16");
        assert_eq!(shown(1e300), "1e+300");
        assert_eq!(shown(-2.5e20), "-2.5e+20");
        assert_eq!(shown(0.0001), "0.0001");
        assert_eq!(shown(0.00001), "1e-05");
        assert_eq!(shown(1.5e-7), "1.5e-07");
        assert_eq!(shown(0.0), "0.0");
        assert_eq!(shown(-0.0), "-0.0");
    }

    #[test]
    fn missing_covers_null_and_nan() {
        assert!(Value::Null.is_missing());
        assert!(Value::Float64(f64::NAN).is_missing());
        assert!(!Value::Float64(0.0).is_missing());
        assert!(!Value::Utf8(String::new()).is_missing());
    }

    #[test]
    fn type_tags() {
        assert_eq!(DataType::Int64.to_string(), "int64");
        assert_eq!(DataType::Object.type_tag(), "object");
        assert_eq!(DataType::Utf8.type_tag(), "str");
    }

    #[test]
    fn cell_handles_ragged_rows() {
        let schema = Schema::new(vec![
            Field::new("a", DataType::Int64),
            Field::new("b", DataType::Int64),
        ]);
        let ds = DataSet::new(schema, vec![vec![Value::Int64(1)]]);
        assert_eq!(ds.schema.fields.len(), 2);
        assert_eq!(ds.cell(0, 0), Some(&Value::Int64(1)));
        assert_eq!(ds.cell(0, 1), None);
        assert_eq!(ds.cell(1, 0), None);
    }
}
