mod as_value;
mod compose;
mod cursor;
mod error;
mod expression;
mod exts;
mod filter;
mod from_row;
mod param;
mod reader;
mod row;
mod selector;
mod sql_type;
mod type_def;
mod value;

pub use as_value::*;
pub use compose::*;
pub use cursor::*;
pub use error::*;
pub use expression::*;
pub use exts::*;
pub use filter::*;
pub use from_row::*;
pub use param::*;
pub use reader::*;
pub use row::*;
pub use selector::*;
pub use sql_type::*;
pub use type_def::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = std::result::Result<T, Error>;
