// SPDX-License-Identifier: MIT

//! Password composition settings.
//!
//! A [`PasswordPolicy`] is assembled with [`PolicyBuilder`] and
//! validated once, at build time.
//!
//! ```
//! use secpass::policy::PolicyBuilder;
//!
//! # fn main() -> Result<(), secpass::Error> {
//! let policy = PolicyBuilder::new()
//!     .length(16)
//!     .special(false)
//!     .exclude_ambiguous(true)
//!     .build()?;
//! assert_eq!(policy.length(), 16);
//! # Ok(())
//! # }
//! ```
use crate::{
    charset::{CharClass, ClassSet},
    error::{Error, Result},
};

/// Length used when none is given.
pub const DEFAULT_LENGTH: usize = 24;

/// Upper bound on any requested length unless a generator is
/// configured otherwise.
pub const MAX_LENGTH: usize = 1_000_000;

/// What a password must look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordPolicy {
    length: usize,
    classes: ClassSet,
    exclude_ambiguous: bool,
}

impl Default for PasswordPolicy {
    /// 24 characters, every class, ambiguous characters allowed.
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::all(),
            exclude_ambiguous: false,
        }
    }
}

impl PasswordPolicy {
    /// Letters and digits only, so the result needs no escaping in a
    /// URI component.
    pub fn uri_safe(length: usize, exclude_ambiguous: bool) -> Result<Self> {
        PolicyBuilder::new()
            .length(length)
            .special(false)
            .exclude_ambiguous(exclude_ambiguous)
            .build()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn exclude_ambiguous(&self) -> bool {
        self.exclude_ambiguous
    }
}

/// Builder for [`PasswordPolicy`].
#[derive(Clone, Debug)]
pub struct PolicyBuilder {
    length: usize,
    max_length: usize,
    classes: ClassSet,
    exclude_ambiguous: bool,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        let policy = PasswordPolicy::default();
        Self {
            length: policy.length,
            max_length: MAX_LENGTH,
            classes: policy.classes,
            exclude_ambiguous: policy.exclude_ambiguous,
        }
    }

    /// Number of characters to generate.
    ///
    /// By default, this value is [`DEFAULT_LENGTH`].
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Longest length `build` accepts.
    ///
    /// By default, this value is [`MAX_LENGTH`].
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Include lowercase letters. Enabled by default.
    pub fn lower(self, enabled: bool) -> Self {
        self.class(CharClass::Lower, enabled)
    }

    /// Include uppercase letters. Enabled by default.
    pub fn upper(self, enabled: bool) -> Self {
        self.class(CharClass::Upper, enabled)
    }

    /// Include digits. Enabled by default.
    pub fn digits(self, enabled: bool) -> Self {
        self.class(CharClass::Digit, enabled)
    }

    /// Include special characters. Enabled by default.
    pub fn special(self, enabled: bool) -> Self {
        self.class(CharClass::Special, enabled)
    }

    pub fn class(mut self, class: CharClass, enabled: bool) -> Self {
        self.classes.set(class, enabled);
        self
    }

    /// Replace the enabled classes wholesale.
    pub fn classes(mut self, classes: ClassSet) -> Self {
        self.classes = classes;
        self
    }

    /// Leave out characters that are easily confused with one
    /// another, such as `O` and `0`. Special characters are never
    /// affected.
    ///
    /// By default, this is disabled.
    pub fn exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    /// Validate the settings and return the policy.
    ///
    /// # Error
    ///
    /// Checked in order: [`Error::InvalidLength`] for a zero length
    /// or one above the maximum, [`Error::NoClassSelected`], then
    /// [`Error::InsufficientLength`] when the length cannot hold one
    /// character per class.
    pub fn build(self) -> Result<PasswordPolicy> {
        if self.length == 0 || self.length > self.max_length {
            return Err(Error::InvalidLength {
                length: self.length,
                max: self.max_length,
            });
        }
        if self.classes.is_empty() {
            return Err(Error::NoClassSelected);
        }
        if self.length < self.classes.len() {
            return Err(Error::InsufficientLength {
                length: self.length,
                classes: self.classes.len(),
            });
        }
        Ok(PasswordPolicy {
            length: self.length,
            classes: self.classes,
            exclude_ambiguous: self.exclude_ambiguous,
        })
    }
}
