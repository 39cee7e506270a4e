// SPDX-License-Identifier: MIT

//! Cryptographically secure random strings and passwords.
//!
//! Characters are picked from an alphabet with rejection sampling, so
//! every character is equally likely no matter how large the
//! alphabet is. Passwords built from character classes (lowercase,
//! uppercase, digits, special) are guaranteed to contain at least one
//! character of every enabled class, and the guaranteed characters
//! are shuffled into random positions. Scratch buffers that held
//! secret characters are zeroed before they are released.
//!
//! # Quick Example
//!
//! The free functions draw entropy from the operating system.
//!
//! ```
//! # fn main() -> Result<(), secpass::Error> {
//! // 24 characters, every class, ambiguous characters allowed
//! let password = secpass::password(24, true, true, true, true, false)?;
//! assert_eq!(password.len(), 24);
//!
//! // letters and digits only
//! let token = secpass::uri_safe_password(20, false)?;
//! assert!(token.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
//!
//! // any alphabet, no class guarantees
//! let code = secpass::secure_characters(8, "ACDEFHJKMNPRTUVWXY")?;
//! assert_eq!(code.len(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! A [`Generator`] can be built over any [`Entropy`](entropy::Entropy)
//! source, and settings are captured with a
//! [`PolicyBuilder`](policy::PolicyBuilder). Callers that want to own
//! the output buffer can use
//! [`Generator::password_into`] and [`Generator::fill_characters`].
//!
//! Nothing is logged beyond lengths, class counts and error kinds.
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

pub mod ambiguous;
pub mod charset;
pub mod entropy;
pub mod erase;
pub mod error;
pub mod generate;
pub mod policy;
pub mod sampler;
pub mod secret;
pub mod shuffle;

pub use charset::{CharClass, ClassSet};
pub use error::{Error, Result};
pub use generate::{password, secure_characters, uri_safe_password, Generator};
pub use policy::{PasswordPolicy, PolicyBuilder, DEFAULT_LENGTH, MAX_LENGTH};
pub use secret::Secret;
