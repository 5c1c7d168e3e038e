use crate::{Error, Result};
use std::fmt::{self, Display, Formatter};

/// The database column type classification, independent of the host
/// representation of the bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Bit,
    Binary,
    VarBinary,
    Image,
    Money,
    SmallMoney,
    Decimal,
    Float,
    Int,
    TinyInt,
    BigInt,
    NVarChar,
    VarChar,
    Char,
    NChar,
    Text,
    NText,
    DateTime,
    DateTime2,
    DateTimeOffset,
    SmallDateTime,
    Date,
    Time,
    Timestamp,
    UniqueIdentifier,
    Xml,
}

impl SqlType {
    /// Maximum number of characters a value of this type may hold, when the
    /// limit is enforced at construction time rather than by the database.
    pub fn max_length(&self) -> Option<usize> {
        match self {
            SqlType::Text => Some((1 << 31) - 1),
            SqlType::NText => Some((1 << 30) - 1),
            _ => None,
        }
    }

    /// Reject a text value too long for this type. Types without a
    /// construction-time limit accept any length.
    pub fn validate_length(&self, length: usize) -> Result<()> {
        match self.max_length() {
            Some(max) if length > max => Err(Error::ValueTooLarge {
                sql_type: *self,
                length,
                max,
            }),
            _ => Ok(()),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            SqlType::NVarChar
                | SqlType::VarChar
                | SqlType::Char
                | SqlType::NChar
                | SqlType::Text
                | SqlType::NText
                | SqlType::Xml
        )
    }
}

impl Display for SqlType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SqlType::Bit => "BIT",
            SqlType::Binary => "BINARY",
            SqlType::VarBinary => "VARBINARY",
            SqlType::Image => "IMAGE",
            SqlType::Money => "MONEY",
            SqlType::SmallMoney => "SMALLMONEY",
            SqlType::Decimal => "DECIMAL",
            SqlType::Float => "FLOAT",
            SqlType::Int => "INT",
            SqlType::TinyInt => "TINYINT",
            SqlType::BigInt => "BIGINT",
            SqlType::NVarChar => "NVARCHAR",
            SqlType::VarChar => "VARCHAR",
            SqlType::Char => "CHAR",
            SqlType::NChar => "NCHAR",
            SqlType::Text => "TEXT",
            SqlType::NText => "NTEXT",
            SqlType::DateTime => "DATETIME",
            SqlType::DateTime2 => "DATETIME2",
            SqlType::DateTimeOffset => "DATETIMEOFFSET",
            SqlType::SmallDateTime => "SMALLDATETIME",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::UniqueIdentifier => "UNIQUEIDENTIFIER",
            SqlType::Xml => "XML",
        })
    }
}

/// Declared size of a sized type. `Max` is the unbounded `(MAX)` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Fixed(u32),
    Max,
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Size::Fixed(n) => write!(f, "{n}"),
            Size::Max => f.write_str("MAX"),
        }
    }
}
