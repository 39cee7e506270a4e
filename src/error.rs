// SPDX-License-Identifier: MIT

//! Errors returned by generation operations.
use crate::{charset::CharClass, entropy};

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Every way a generation request can fail.
///
/// Each variant is raised at the point the precondition is violated
/// and none of them are retried internally. When a variant is
/// returned, no partial output is handed back and any scratch
/// buffer has already been wiped.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested length is zero where a non-empty result is
    /// required, or exceeds the configured maximum.
    #[error("invalid length {length} (maximum is {max})")]
    InvalidLength { length: usize, max: usize },

    /// A password was requested with every character class disabled.
    #[error("no character class selected")]
    NoClassSelected,

    /// The length is too short to hold one character of every
    /// enabled class.
    #[error("length {length} is too short to include {classes} character classes")]
    InsufficientLength { length: usize, classes: usize },

    /// A caller-supplied alphabet has no characters.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// An enabled class lost all of its characters to the ambiguity
    /// filter.
    #[error("the {0} class has no characters left after excluding ambiguous ones")]
    EmptyClass(CharClass),

    /// The entropy source could not supply bytes.
    #[error(transparent)]
    Entropy(#[from] entropy::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::charset::CharClass;
    use alloc::string::ToString;

    #[test]
    fn messages_are_distinct() {
        let msgs = [
            Error::InvalidLength { length: 0, max: 10 }.to_string(),
            Error::NoClassSelected.to_string(),
            Error::InsufficientLength {
                length: 2,
                classes: 3,
            }
            .to_string(),
            Error::EmptyAlphabet.to_string(),
            Error::EmptyClass(CharClass::Digit).to_string(),
        ];
        for (i, a) in msgs.iter().enumerate() {
            for b in &msgs[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(msgs[0], "invalid length 0 (maximum is 10)");
        assert_eq!(
            msgs[2],
            "length 2 is too short to include 3 character classes"
        );
        assert_eq!(
            msgs[4],
            "the digit class has no characters left after excluding ambiguous ones"
        );
    }

    #[test]
    fn entropy_error_is_transparent() {
        let err: Error = crate::entropy::Error::new("boom").into();
        assert_eq!(err.to_string(), "entropy error: boom");
    }
}
