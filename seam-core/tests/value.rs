#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use seam_core::{AsValue, Value};
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    #[test]
    fn value_null() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Int32(Some(1)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Varchar(None).is_null());
        assert!(!Value::Varchar(Some("".into())).is_null());
    }

    #[test]
    fn value_bool() {
        let var = true;
        let val: Value = var.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Boolean(None));
        assert_ne!(val, Value::Varchar(Some("true".into())));
        let var: bool = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, true);
        assert_eq!(bool::try_from_value(Value::UInt8(Some(1))).unwrap(), true);
        assert_eq!(bool::try_from_value(Value::Int32(Some(0))).unwrap(), false);
        assert_eq!(bool::try_from_value(Value::Int64(Some(9))).unwrap(), true);
        assert!(bool::try_from_value(Value::Float64(Some(0.5))).is_err());
    }

    #[test]
    fn value_u8() {
        let val: Value = 255u8.into();
        assert_eq!(val, Value::UInt8(Some(255)));
        let var: u8 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 255);
        assert_eq!(u8::try_from_value(Value::Int32(Some(99))).unwrap(), 99);
        assert!(u8::try_from_value(Value::Int32(Some(300))).is_err());
    }

    #[test]
    fn value_i32() {
        let val: Value = (-2147483648).into();
        assert_eq!(val, Value::Int32(Some(-2147483648)));
        assert_ne!(val, Value::Null);
        let var: i32 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, -2147483648);
        assert_eq!(i32::try_from_value(Value::UInt8(Some(77))).unwrap(), 77);
        assert_eq!(i32::try_from_value(Value::Int64(Some(1001))).unwrap(), 1001);
        assert!(i32::try_from_value(Value::Int64(Some(1 << 40))).is_err());
    }

    #[test]
    fn value_i64() {
        let val: Value = 9223372036854775807i64.into();
        let var: i64 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 9223372036854775807);
        assert_eq!(i64::try_from_value(Value::Int32(Some(-1))).unwrap(), -1);
        assert_eq!(i64::try_from_value(Value::UInt8(Some(77))).unwrap(), 77);
    }

    #[test]
    fn value_f64() {
        let val: Value = 1.25f64.into();
        assert_eq!(val, Value::Float64(Some(1.25)));
        let var: f64 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 1.25);
        let var: f64 = f64::try_from_value(Value::Decimal(Some(Decimal::new(25, 1)))).unwrap();
        assert_eq!(var, 2.5);
    }

    #[test]
    fn value_decimal() {
        let var = Decimal::new(123456, 2);
        let val: Value = var.into();
        assert_eq!(val, Value::Decimal(Some(Decimal::new(123456, 2))));
        let var: Decimal = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, Decimal::new(123456, 2));
        assert_eq!(
            Decimal::try_from_value(Value::Int32(Some(42))).unwrap(),
            Decimal::from(42)
        );
        assert!(Decimal::try_from_value(Value::Varchar(Some("1.2".into()))).is_err());
    }

    #[test]
    fn value_string() {
        let val: Value = "hello".into();
        assert_eq!(val, Value::Varchar(Some("hello".into())));
        let var: String = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, "hello");
        let val: Value = String::from("owned").into();
        assert_eq!(val, Value::Varchar(Some("owned".into())));
    }

    #[test]
    fn value_temporal() {
        let val: Value = date!(2024 - 02 - 29).into();
        assert_eq!(val, Value::Date(Some(date!(2024 - 02 - 29))));
        let val: Value = time!(23:59:59).into();
        assert_eq!(val, Value::Time(Some(time!(23:59:59))));
        let val: Value = datetime!(2024-02-29 12:30).into();
        let var: time::PrimitiveDateTime = AsValue::try_from_value(val.clone()).unwrap();
        assert_eq!(var, datetime!(2024-02-29 12:30));
        // A naive timestamp widens to an offset one by assuming UTC.
        let var: time::OffsetDateTime = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, datetime!(2024-02-29 12:30 UTC));
    }

    #[test]
    fn value_uuid() {
        let id = Uuid::new_v4();
        let val: Value = id.into();
        assert_eq!(val, Value::Uuid(Some(id)));
        let var: Uuid = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, id);
        let var: Uuid =
            Uuid::try_from_value(Value::Varchar(Some(id.hyphenated().to_string()))).unwrap();
        assert_eq!(var, id);
        assert!(Uuid::try_from_value(Value::Varchar(Some("not a uuid".into()))).is_err());
    }

    #[test]
    fn value_option() {
        let var: Option<i32> = None;
        let val: Value = var.into();
        assert_eq!(val, Value::Int32(None));
        assert!(val.is_null());
        let var: Option<i32> = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, None);
        let var: Option<i32> = AsValue::try_from_value(Value::Int32(Some(7))).unwrap();
        assert_eq!(var, Some(7));
    }

    #[test]
    fn value_same_type() {
        assert!(Value::Int32(None).same_type(&Value::Int32(Some(1))));
        assert!(!Value::Int32(None).same_type(&Value::Int64(None)));
        // Two type tokens of the same variant compare equal.
        assert_eq!(Value::Varchar(None), Value::Varchar(None));
    }
}
