//! # Query Predicates
//!
//! A query is a conjunction of comparisons over top-level document fields.
//! There is no index: every predicate is evaluated against every document in
//! the collection.
//!
//! Comparison rules:
//! - numbers compare numerically, strings lexicographically, booleans `false < true`
//! - ordering comparisons across different JSON types never match
//! - a missing field only matches `!=`

use serde_json::{Map, Value};
use shared_types::errors::TypeError;
use std::cmp::Ordering;
use std::str::FromStr;

/// Comparison operator of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl FromStr for CompareOp {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::Ne),
            ">" => Ok(CompareOp::Gt),
            "<" => Ok(CompareOp::Lt),
            ">=" => Ok(CompareOp::Ge),
            "<=" => Ok(CompareOp::Le),
            other => Err(TypeError::UnknownVariant {
                kind: "comparison operator",
                value: other.to_string(),
            }),
        }
    }
}

/// `field <op> value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl Predicate {
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Eq, value)
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Ne, value)
    }

    /// Evaluate against a stored document.
    pub fn matches(&self, document: &Map<String, Value>) -> bool {
        let Some(actual) = document.get(&self.field) else {
            return self.op == CompareOp::Ne;
        };

        match self.op {
            CompareOp::Eq => values_equal(actual, &self.value),
            CompareOp::Ne => !values_equal(actual, &self.value),
            CompareOp::Gt => compare(actual, &self.value) == Some(Ordering::Greater),
            CompareOp::Lt => compare(actual, &self.value) == Some(Ordering::Less),
            CompareOp::Ge => matches!(
                compare(actual, &self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            CompareOp::Le => matches!(
                compare(actual, &self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
        }
    }
}

/// True when every predicate matches.
pub fn matches_all(predicates: &[Predicate], document: &Map<String, Value>) -> bool {
    predicates.iter().all(|p| p.matches(document))
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        // 3 and 3.0 are the same number.
        (Value::Number(_), Value::Number(_)) => compare(a, b) == Some(Ordering::Equal),
        _ => a == b,
    }
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                return Some(x.cmp(&y));
            }
            if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                return Some(x.cmp(&y));
            }
            x.as_f64()?.partial_cmp(&y.as_f64()?)
        }
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}
