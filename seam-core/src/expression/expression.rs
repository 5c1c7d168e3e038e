use crate::{BinaryOpType, Operand, Value};
use std::ops::{BitAnd, BitOr, Not};

/// An owned predicate tree, built by the constructors below and handed to a
/// driver for rendering. Construction never renders anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Operand(Operand),
    Binary {
        op: BinaryOpType,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    In {
        column: String,
        list: Vec<Operand>,
        negated: bool,
    },
    IsNull {
        operand: Box<Expr>,
        negated: bool,
    },
    Not(Box<Expr>),
}

impl Expr {
    pub fn col(name: impl Into<String>) -> Self {
        Self::Operand(Operand::column(name))
    }

    pub fn lit(value: impl Into<Value>) -> Self {
        Self::Operand(Operand::Literal(value.into()))
    }

    fn binary(op: BinaryOpType, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::binary(BinaryOpType::Equal, Self::col(column), Self::lit(value))
    }

    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::binary(BinaryOpType::NotEqual, Self::col(column), Self::lit(value))
    }

    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::binary(BinaryOpType::Less, Self::col(column), Self::lit(value))
    }

    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::binary(BinaryOpType::Greater, Self::col(column), Self::lit(value))
    }

    pub fn le(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::binary(BinaryOpType::LessEqual, Self::col(column), Self::lit(value))
    }

    pub fn ge(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::binary(
            BinaryOpType::GreaterEqual,
            Self::col(column),
            Self::lit(value),
        )
    }

    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::binary(
            BinaryOpType::Like,
            Self::col(column),
            Self::lit(pattern.into()),
        )
    }

    pub fn not_like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Not(Box::new(Self::like(column, pattern)))
    }

    /// Equality between two columns, as used in join conditions.
    pub fn columns_equal(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::binary(BinaryOpType::Equal, Self::col(left), Self::col(right))
    }

    pub fn in_list(
        column: impl Into<String>,
        list: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self::In {
            column: column.into(),
            list: list.into_iter().map(|v| Operand::Literal(v.into())).collect(),
            negated: false,
        }
    }

    pub fn not_in(
        column: impl Into<String>,
        list: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self::In {
            column: column.into(),
            list: list.into_iter().map(|v| Operand::Literal(v.into())).collect(),
            negated: true,
        }
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Self::IsNull {
            operand: Box::new(Self::col(column)),
            negated: false,
        }
    }

    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self::IsNull {
            operand: Box::new(Self::col(column)),
            negated: true,
        }
    }

    /// Inclusive range, lowered to a conjunction of `>=` and `<=`.
    pub fn between(
        column: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        let column = column.into();
        Self::ge(column.clone(), low).and(Self::le(column, high))
    }

    /// Range with both bounds strict, lowered to `>` and `<`.
    pub fn between_exclusive(
        column: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        let column = column.into();
        Self::gt(column.clone(), low).and(Self::lt(column, high))
    }

    pub fn and(self, other: Expr) -> Self {
        Self::binary(BinaryOpType::And, self, other)
    }

    pub fn or(self, other: Expr) -> Self {
        Self::binary(BinaryOpType::Or, self, other)
    }

    /// Left associative conjunction of every predicate in the sequence.
    /// Returns `None` on an empty sequence.
    pub fn and_all(predicates: impl IntoIterator<Item = Expr>) -> Option<Self> {
        predicates.into_iter().reduce(Self::and)
    }
}

impl BitAnd for Expr {
    type Output = Expr;
    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;
    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for Expr {
    type Output = Expr;
    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}
