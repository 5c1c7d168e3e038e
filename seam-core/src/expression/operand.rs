use crate::Value;
use std::fmt::{self, Display, Formatter};

/// A leaf of a predicate: a column reference, a literal or SQL NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(String),
    Literal(Value),
    Null,
}

impl Operand {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(name) => f.write_str(name),
            Self::Literal(value) => write!(f, "{value:?}"),
            Self::Null => f.write_str("NULL"),
        }
    }
}
