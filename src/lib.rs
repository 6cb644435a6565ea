//! Crock32: a Crockford-style Base32 codec for carrying binary secrets in
//! URI query parameters.
//!
//! The alphabet drops the four letters `I`, `L`, `O`, `U` that humans
//! routinely mistranscribe; [`c32dec`] accepts them anyway and folds each one
//! onto the symbol it is usually confused with. Output carries no `=` padding
//! and no separators, so encoded strings survive a query value unescaped.
//!
//! ```
//! let encoded = crock32::c32enc(b"top secret");
//! assert_eq!(crock32::c32dec(&encoded).unwrap(), b"top secret");
//! ```

pub(crate) const CROCK32_CHARS: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

mod dec;
mod enc;
mod error;

pub use crate::dec::c32dec;
pub use crate::enc::c32enc;
pub use crate::error::DecodeError;
