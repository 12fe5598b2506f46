//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Keeps the dispatch arms of the scanner on one line each.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$position` - Byte offset of the token's first character
/// * `$text` - The consumed source text
/// * `$value` - Optional decoded value, defaults to `None`
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberToken, 0, "42", Some(42));
/// let plus = MK_TOKEN!(TokenKind::PlusToken, 3, "+");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $position:expr, $text:expr) => {
        $crate::MK_TOKEN!($kind, $position, $text, None)
    };
    ($kind:expr, $position:expr, $text:expr, $value:expr) => {
        $crate::lexer::tokens::Token::new($kind, $position, String::from($text), $value)
    };
}
