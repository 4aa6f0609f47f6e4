use crate::{
    ast::expressions::BinaryOperator,
    errors::errors::{Error, ErrorImpl},
};

/// Combines two evaluated operands.
///
/// Division truncates toward zero. Results that do not fit in an `i64`
/// are reported rather than wrapped.
pub fn apply_binary(op: BinaryOperator, left: i64, right: i64) -> Result<i64, Error> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Subtract => left.checked_sub(right),
        BinaryOperator::Multiply => left.checked_mul(right),
        BinaryOperator::Divide => {
            if right == 0 {
                return Err(Error::runtime(ErrorImpl::DivisionByZero));
            }
            left.checked_div(right)
        }
    };

    result.ok_or_else(|| {
        Error::runtime(ErrorImpl::IntegerOverflow {
            operation: op.name().to_string(),
        })
    })
}
