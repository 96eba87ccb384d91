use serde::{Deserialize, Serialize};

/// Typed literal stored in an assertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Numeric literal
    Double(f64),
    /// Quoted text literal
    Quoted(String),
}

impl Literal {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Double(v) => Some(*v),
            Literal::Quoted(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Double(_) => None,
            Literal::Quoted(s) => Some(s),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Double(v) => write!(f, "{}", v),
            Literal::Quoted(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Value handed in by the editor for a property edit
///
/// Only `Double` becomes a numeric literal. Every other variant is stored as a
/// quoted literal of its display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditValue {
    Double(f64),
    Integer(i64),
    Boolean(bool),
    Text(String),
}

impl EditValue {
    /// Map the empty string to "no value"
    pub fn normalize(self) -> Option<EditValue> {
        match self {
            EditValue::Text(s) if s.is_empty() => None,
            other => Some(other),
        }
    }
}

impl std::fmt::Display for EditValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditValue::Double(v) => write!(f, "{}", v),
            EditValue::Integer(v) => write!(f, "{}", v),
            EditValue::Boolean(v) => write!(f, "{}", v),
            EditValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<EditValue> for Literal {
    fn from(value: EditValue) -> Self {
        match value {
            EditValue::Double(v) => Literal::Double(v),
            EditValue::Text(s) => Literal::Quoted(s),
            other => Literal::Quoted(other.to_string()),
        }
    }
}

impl From<f64> for EditValue {
    fn from(v: f64) -> Self {
        EditValue::Double(v)
    }
}

impl From<i64> for EditValue {
    fn from(v: i64) -> Self {
        EditValue::Integer(v)
    }
}

impl From<bool> for EditValue {
    fn from(v: bool) -> Self {
        EditValue::Boolean(v)
    }
}

impl From<&str> for EditValue {
    fn from(v: &str) -> Self {
        EditValue::Text(v.to_string())
    }
}

impl From<String> for EditValue {
    fn from(v: String) -> Self {
        EditValue::Text(v)
    }
}
