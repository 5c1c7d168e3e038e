use crate::SqlType;
use thiserror::Error;

/// Failures produced by the composition and materialization layer.
///
/// Construction and validation failures are synchronous and never retried
/// here. `EmptySequence` and `NotSingle` surface only once a cursor has
/// actually been consumed; callers wanting an optional result use the
/// `*_or_default` reader variants instead of matching on them.
#[derive(Debug, Error)]
pub enum Error {
    /// Type inference was given a host value outside its closed mapping.
    #[error("no default SQL type mapping for host value of kind {kind}")]
    UnsupportedType { kind: &'static str },

    /// A text value exceeds the declared maximum of its wire type.
    #[error("value of {length} characters exceeds the {max} allowed by {sql_type}")]
    ValueTooLarge {
        sql_type: SqlType,
        length: usize,
        max: usize,
    },

    /// The tuple flattener ran out of type declarations before the row did.
    #[error(
        "row {row} has a leaf column at position {column} but only {declared} type declarations were supplied"
    )]
    ArityMismatch {
        row: usize,
        column: usize,
        declared: usize,
    },

    /// A value could not be coerced to the requested host type.
    #[error("cannot convert {value} to {target}")]
    Conversion {
        value: String,
        target: &'static str,
    },

    /// `first` or `single` found no row.
    #[error("there was no element in sequence")]
    EmptySequence,

    /// `single` found a second row.
    #[error("there was more than one element in sequence")]
    NotSingle,

    /// A convenience entry point was invoked without a filter it requires.
    #[error("missing required filter: {0}")]
    MissingRequiredFilter(&'static str),

    /// Driver-level failure, propagated unchanged.
    #[error(transparent)]
    Driver(#[from] anyhow::Error),
}
