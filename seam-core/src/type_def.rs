use crate::{Error, Result, Size, SqlType, Value};
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// An immutable scalar type descriptor: a wire type tag plus the optional
/// name, host value and size metadata needed to bind or declare one column.
///
/// Constructed by the factory catalog below or by [`TypeDef::infer`], then
/// owned by exactly one [`Parameter`](crate::Parameter) or comparison
/// expression; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    pub name: Option<String>,
    pub value: Option<Value>,
    pub sql_type: SqlType,
    pub size: Option<Size>,
    pub precision: Option<u8>,
    pub scale: Option<u8>,
    pub not_null: Option<bool>,
    /// Suppress padding or truncation of fixed width text by the renderer.
    pub exact_value: bool,
}

impl TypeDef {
    /// A pure type declaration: no name, no value.
    pub fn of(sql_type: SqlType) -> Self {
        Self {
            name: None,
            value: None,
            sql_type,
            size: None,
            precision: None,
            scale: None,
            not_null: None,
            exact_value: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_not_null(mut self, not_null: bool) -> Self {
        self.not_null = Some(not_null);
        self
    }

    /// Attach a host value, enforcing the construction-time length limits
    /// of Text and NText.
    pub fn with_value(mut self, value: Value) -> Result<Self> {
        if let Value::Varchar(Some(text)) = &value {
            self.sql_type.validate_length(text.chars().count())?;
        }
        self.value = Some(value);
        Ok(self)
    }

    /// Default wire type mapping for a host value, named form.
    pub fn infer(name: impl Into<String>, value: Value) -> Result<Self> {
        Ok(Self::infer_anonymous(value)?.named(name))
    }

    /// Default wire type mapping for a host value.
    ///
    /// The mapping is closed world: boolean, naive timestamp, decimal,
    /// 32 bit integer, uuid, text, byte and byte sequence. A `None` payload
    /// goes through the same switch and produces a pure declaration.
    /// Callers needing any other wire type supply a descriptor explicitly.
    pub fn infer_anonymous(value: Value) -> Result<Self> {
        let sql_type = match &value {
            Value::Boolean(..) => SqlType::Bit,
            Value::Timestamp(..) => SqlType::DateTime,
            Value::Decimal(..) => SqlType::Decimal,
            Value::Int32(..) => SqlType::Int,
            Value::Uuid(..) => SqlType::UniqueIdentifier,
            Value::Varchar(..) => SqlType::NVarChar,
            Value::UInt8(..) => SqlType::TinyInt,
            Value::Blob(..) => SqlType::Binary,
            other => return Err(Error::UnsupportedType { kind: other.kind() }),
        };
        let mut def = TypeDef::of(sql_type);
        if sql_type == SqlType::NVarChar {
            def.size = Some(Size::Max);
        }
        if !value.is_null() {
            def.value = Some(value);
        }
        Ok(def)
    }
}

macro_rules! factory {
    ($fn_name:ident, $type_fn:ident, $sql_type:expr, $host:ty, $variant:path) => {
        pub fn $fn_name(value: $host) -> TypeDef {
            TypeDef {
                value: Some($variant(Some(value.into()))),
                ..TypeDef::of($sql_type)
            }
        }
        pub fn $type_fn() -> TypeDef {
            TypeDef::of($sql_type)
        }
    };
}

/// The per wire type constructor catalog. The named form of each is the
/// [`TypeDef::named`] builder.
impl TypeDef {
    factory!(bit, bit_type, SqlType::Bit, bool, Value::Boolean);
    factory!(tiny_int, tiny_int_type, SqlType::TinyInt, u8, Value::UInt8);
    factory!(int, int_type, SqlType::Int, i32, Value::Int32);
    factory!(big_int, big_int_type, SqlType::BigInt, i64, Value::Int64);
    factory!(float, float_type, SqlType::Float, f64, Value::Float64);
    factory!(money, money_type, SqlType::Money, Decimal, Value::Decimal);
    factory!(
        small_money,
        small_money_type,
        SqlType::SmallMoney,
        Decimal,
        Value::Decimal
    );
    factory!(binary, binary_type, SqlType::Binary, Vec<u8>, Value::Blob);
    factory!(
        var_binary,
        var_binary_type,
        SqlType::VarBinary,
        Vec<u8>,
        Value::Blob
    );
    factory!(image, image_type, SqlType::Image, Vec<u8>, Value::Blob);
    factory!(
        date_time,
        date_time_type,
        SqlType::DateTime,
        PrimitiveDateTime,
        Value::Timestamp
    );
    factory!(
        date_time2,
        date_time2_type,
        SqlType::DateTime2,
        PrimitiveDateTime,
        Value::Timestamp
    );
    factory!(
        small_date_time,
        small_date_time_type,
        SqlType::SmallDateTime,
        PrimitiveDateTime,
        Value::Timestamp
    );
    factory!(
        date_time_offset,
        date_time_offset_type,
        SqlType::DateTimeOffset,
        OffsetDateTime,
        Value::TimestampWithTimezone
    );
    factory!(date, date_type, SqlType::Date, Date, Value::Date);
    factory!(time, time_type, SqlType::Time, Time, Value::Time);
    // Rowversion column, carried as an opaque byte sequence.
    factory!(timestamp, timestamp_type, SqlType::Timestamp, Vec<u8>, Value::Blob);
    factory!(
        unique_identifier,
        unique_identifier_type,
        SqlType::UniqueIdentifier,
        Uuid,
        Value::Uuid
    );
    factory!(xml, xml_type, SqlType::Xml, String, Value::Varchar);

    pub fn decimal(value: Decimal, precision: Option<u8>, scale: Option<u8>) -> TypeDef {
        TypeDef {
            value: Some(Value::Decimal(Some(value))),
            precision,
            scale,
            ..TypeDef::of(SqlType::Decimal)
        }
    }

    pub fn decimal_type(precision: Option<u8>, scale: Option<u8>) -> TypeDef {
        TypeDef {
            precision,
            scale,
            ..TypeDef::of(SqlType::Decimal)
        }
    }

    pub fn nvarchar(value: impl Into<String>, size: Size) -> TypeDef {
        TypeDef {
            value: Some(Value::Varchar(Some(value.into()))),
            size: Some(size),
            ..TypeDef::of(SqlType::NVarChar)
        }
    }

    /// NVarChar whose value must be passed through exactly as supplied.
    pub fn nvarchar_with_exact_value(value: impl Into<String>, size: Size) -> TypeDef {
        TypeDef {
            exact_value: true,
            ..Self::nvarchar(value, size)
        }
    }

    pub fn nvarchar_max(value: impl Into<String>) -> TypeDef {
        Self::nvarchar(value, Size::Max)
    }

    pub fn nvarchar_type(size: Size) -> TypeDef {
        TypeDef::of(SqlType::NVarChar).with_size(size)
    }

    pub fn varchar(value: impl Into<String>, size: Size) -> TypeDef {
        TypeDef {
            value: Some(Value::Varchar(Some(value.into()))),
            size: Some(size),
            ..TypeDef::of(SqlType::VarChar)
        }
    }

    pub fn varchar_max(value: impl Into<String>) -> TypeDef {
        Self::varchar(value, Size::Max)
    }

    pub fn varchar_type(size: Size) -> TypeDef {
        TypeDef::of(SqlType::VarChar).with_size(size)
    }

    pub fn char_(value: impl Into<String>, size: Size) -> TypeDef {
        TypeDef {
            value: Some(Value::Varchar(Some(value.into()))),
            size: Some(size),
            ..TypeDef::of(SqlType::Char)
        }
    }

    pub fn char_type(size: Size) -> TypeDef {
        TypeDef::of(SqlType::Char).with_size(size)
    }

    pub fn nchar(value: impl Into<String>, size: Size) -> TypeDef {
        TypeDef {
            value: Some(Value::Varchar(Some(value.into()))),
            size: Some(size),
            ..TypeDef::of(SqlType::NChar)
        }
    }

    pub fn nchar_type(size: Size) -> TypeDef {
        TypeDef::of(SqlType::NChar).with_size(size)
    }

    /// Text value, rejected at construction when longer than 2^31 - 1
    /// characters.
    pub fn text(value: impl Into<String>) -> Result<TypeDef> {
        TypeDef::of(SqlType::Text).with_value(Value::Varchar(Some(value.into())))
    }

    pub fn text_type() -> TypeDef {
        TypeDef::of(SqlType::Text)
    }

    /// NText value, rejected at construction when longer than 2^30 - 1
    /// characters.
    pub fn ntext(value: impl Into<String>) -> Result<TypeDef> {
        TypeDef::of(SqlType::NText).with_value(Value::Varchar(Some(value.into())))
    }

    pub fn ntext_type() -> TypeDef {
        TypeDef::of(SqlType::NText)
    }
}
