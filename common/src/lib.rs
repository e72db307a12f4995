mod error;

use core::fmt::Debug;
use core::hash::Hash;

pub use error::HuffError;

pub type Result<T> = std::result::Result<T, HuffError>;

/// bit appended to a code when descending to the left child
pub const ZERO_BIT: char = '0';
/// bit appended to a code when descending to the right child
pub const ONE_BIT: char = '1';

/// A tree consisting of a single leaf has no path to describe, the symbol gets this code instead.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// An atomic unit of the input alphabet.
///
/// Implemented for everything that can be copied, compared and hashed, e.g. `char` or `u8`.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}

/// returns true if `code` is non-empty and consists only of `ZERO_BIT` and `ONE_BIT`
#[inline]
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c == ZERO_BIT || c == ONE_BIT)
}

#[test]
fn test_is_valid_code() {
    assert!(is_valid_code("0"));
    assert!(is_valid_code("1011"));
    assert!(!is_valid_code(""));
    assert!(!is_valid_code("012"));
    assert!(!is_valid_code("1 0"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        HuffError::CorruptEncoding { position: 3 }.to_string(),
        "bits starting at position 3 do not match any code"
    );
    assert_eq!(
        HuffError::UnknownSymbol(format!("{:?}", 'x')).to_string(),
        "symbol 'x' has no code in the code table"
    );
}
