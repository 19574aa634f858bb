//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a parser Error at a position

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates an Error for an `ErrorImpl` variant.
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(ErrorImpl::AssignmentNotAllowed, operator.position));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error_impl:expr, $position:expr) => {
        $crate::errors::errors::Error::new($error_impl, $position)
    };
}
