use crate::{RowLabeled, Value};

/// How a declared field participates in row decoding. Composite fields are
/// carried in the descriptor table for completeness but never assigned from
/// a flat row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Simple,
    Composite,
}

/// One decodable field of a record type: its column label, its kind and the
/// setter that writes a dynamic value into the record.
///
/// The setter returns whether it accepted the value, so a label collision
/// with an incompatible value does not count as a populated record.
pub struct FieldDef<T> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub assign: fn(&mut T, &Value) -> bool,
}

/// A record type decodable from a labeled row through a static field
/// descriptor table.
pub trait FromRow: Default {
    fn fields() -> &'static [FieldDef<Self>]
    where
        Self: Sized;
}

/// Decode a row into a record by exact column label match.
///
/// Fields whose label is absent from the row, or whose column is NULL, keep
/// their default. When no field at all is assigned the `fallback` record is
/// returned instead, so callers can distinguish "row carried none of my
/// columns" from a legitimately all-default record.
pub fn from_row<T: FromRow + 'static>(row: &RowLabeled, fallback: Option<&dyn Fn() -> T>) -> T {
    let mut record = T::default();
    let mut any_assigned = false;
    for field in T::fields() {
        if field.kind != FieldKind::Simple {
            continue;
        }
        if let Some(value) = row.get_column(field.name) {
            if !value.is_null() && (field.assign)(&mut record, value) {
                any_assigned = true;
            }
        }
    }
    if any_assigned {
        record
    } else {
        fallback.map(|f| f()).unwrap_or_default()
    }
}

/// Build one [`FieldDef`] entry for a field whose type implements
/// [`AsValue`](crate::AsValue).
///
/// ```
/// use seam_core::{row_field, FieldDef, FromRow};
///
/// #[derive(Default)]
/// struct Account {
///     id: i32,
///     name: String,
/// }
///
/// impl FromRow for Account {
///     fn fields() -> &'static [FieldDef<Self>] {
///         const FIELDS: &[FieldDef<Account>] =
///             &[row_field!(Account, id), row_field!(Account, name)];
///         FIELDS
///     }
/// }
/// ```
#[macro_export]
macro_rules! row_field {
    (composite $record:ty, $field:ident) => {
        $crate::FieldDef::<$record> {
            name: stringify!($field),
            kind: $crate::FieldKind::Composite,
            assign: |_, _| false,
        }
    };
    ($record:ty, $field:ident) => {
        $crate::FieldDef::<$record> {
            name: stringify!($field),
            kind: $crate::FieldKind::Simple,
            assign: |record, value| {
                match $crate::AsValue::try_from_value(value.clone()) {
                    Ok(v) => {
                        record.$field = v;
                        true
                    }
                    Err(_) => false,
                }
            },
        }
    };
}
