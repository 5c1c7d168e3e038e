mod binary_op;
mod expression;
mod operand;

pub use binary_op::*;
pub use expression::*;
pub use operand::*;
