//! Script-facing errors.
//!
//! [DOM § 2.8 Exceptions](https://webidl.spec.whatwg.org/#idl-DOMException-error-names)

use thiserror::Error;

use crate::values::UnitKind;

/// An error surfaced to script through the CSSOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StyleError {
    /// "The object can not be modified."
    ///
    /// Computed style declarations are read-only.
    #[error("NoModificationAllowedError: computed style declarations are read-only")]
    NoModificationAllowed,

    /// "The object does not support the operation or argument."
    ///
    /// A primitive value was read in a unit it cannot be converted to.
    #[error("InvalidAccessError: cannot read a {from:?} value as {to:?}")]
    InvalidAccess {
        /// The unit the value holds.
        from: UnitKind,
        /// The unit that was requested.
        to: UnitKind,
    },
}

impl StyleError {
    /// The legacy `DOMException` code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::NoModificationAllowed => 7,
            Self::InvalidAccess { .. } => 15,
        }
    }
}
