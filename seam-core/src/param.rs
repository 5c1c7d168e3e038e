use crate::{Error, Result, TypeDef, Value};

/// A named bind parameter ready to hand to the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeDef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeDef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Bind a host value under the default wire type for its kind.
    pub fn inferred(name: impl Into<String>, value: Value) -> Result<Self> {
        let name = name.into();
        let ty = TypeDef::infer(name.clone(), value)?;
        Ok(Self { name, ty })
    }
}

/// One cell of a multi-row literal: either a leaf scalar or a nested tuple
/// whose members are typed by the remaining column declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    Scalar(Value),
    Composite(Vec<RowValue>),
}

pub type ValueRow = Vec<RowValue>;

/// Flatten multi-row tuple input into one [`Parameter`] per leaf scalar.
///
/// Parameter names are formed from the alphabetic characters of the column
/// declaration's name followed by the 1-based row counter, so the same
/// column in successive rows binds under distinct names. A nested
/// [`RowValue::Composite`] is typed by the declaration suffix starting at
/// its own position and shares the row counter of the enclosing row.
///
/// An empty `types` slice yields no parameters regardless of input. A leaf
/// scalar with no matching declaration is an [`Error::ArityMismatch`].
pub fn flatten_rows(rows: &[ValueRow], types: &[TypeDef]) -> Result<Vec<Parameter>> {
    let mut out = Vec::new();
    if types.is_empty() {
        return Ok(out);
    }
    for (row, count) in rows.iter().zip(1..) {
        flatten_row(row, types, count, &mut out)?;
    }
    Ok(out)
}

fn flatten_row(
    columns: &[RowValue],
    types: &[TypeDef],
    count: usize,
    out: &mut Vec<Parameter>,
) -> Result<()> {
    for (i, column) in columns.iter().enumerate() {
        match column {
            RowValue::Composite(inner) => {
                flatten_row(inner, types.get(i..).unwrap_or(&[]), count, out)?;
            }
            RowValue::Scalar(value) => {
                let Some(ty) = types.get(i) else {
                    return Err(Error::ArityMismatch {
                        row: count,
                        column: i,
                        declared: types.len(),
                    });
                };
                let base: String = ty
                    .name
                    .as_deref()
                    .unwrap_or("")
                    .chars()
                    .filter(|c| c.is_alphabetic())
                    .collect();
                let name = format!("{base}{count}");
                let descriptor = TypeDef {
                    exact_value: false,
                    ..ty.clone()
                }
                .with_value(value.clone())?
                .named(name.clone());
                out.push(Parameter::new(name, descriptor));
            }
        }
    }
    Ok(())
}
