/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;

/// Which index of a matrix an out-of-range error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis { Row, Column }

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Fieldless mirror of `LinalgError`, for matching without caring about details.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DimensionMismatch,
    UndefinedOperation,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum LinalgError {
    /// Operand shapes disagree, or a zero-sized shape was requested.
    #[fail(display = "{}", message)]
    DimensionMismatch { message: String },

    /// The operation has no meaning for operands of this shape.
    #[fail(display = "{}", message)]
    UndefinedOperation { message: String },

    #[fail(display = "{} index {} is out of range (must be less than {})", axis, index, bound)]
    OutOfRange { axis: Axis, index: usize, bound: usize },
}

impl LinalgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinalgError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            LinalgError::UndefinedOperation { .. } => ErrorKind::UndefinedOperation,
            LinalgError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    pub(crate) fn dimension_mismatch(message: impl Into<String>) -> Self
    { LinalgError::DimensionMismatch { message: message.into() } }

    pub(crate) fn undefined(message: impl Into<String>) -> Self
    { LinalgError::UndefinedOperation { message: message.into() } }

    /// Check `index < bound`.
    pub(crate) fn check_index(axis: Axis, index: usize, bound: usize) -> Result<(), Self> {
        match index < bound {
            true => Ok(()),
            false => Err(LinalgError::OutOfRange { axis, index, bound }),
        }
    }
}
