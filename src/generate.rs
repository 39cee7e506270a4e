// SPDX-License-Identifier: MIT

//! Random strings and passwords.
//!
//! [`Generator`] ties an [`Entropy`] source to the sampling,
//! composition and shuffling steps. The free functions at the bottom
//! of this module build a throwaway generator over [`OsEntropy`] for
//! each call.
use crate::{
    charset::{Alphabets, ClassSet},
    entropy::{Entropy, OsEntropy},
    erase::wipe_on_err,
    error::{Error, Result},
    policy::{PasswordPolicy, PolicyBuilder, MAX_LENGTH},
    sampler::Sampler,
    secret::Secret,
    shuffle,
};
use alloc::{vec, vec::Vec};
use log::{debug, trace};
use zeroize::Zeroizing;

/// Generates secrets from an entropy source.
///
/// The generator holds no state between calls apart from the
/// entropy source itself. Every call allocates its own scratch space
/// and wipes it before returning.
///
/// # Example
///
/// ```
/// use secpass::{entropy::OsEntropy, policy::PolicyBuilder, Generator};
///
/// # fn main() -> Result<(), secpass::Error> {
/// let mut generator = Generator::new(OsEntropy::default());
/// let policy = PolicyBuilder::new().length(32).build()?;
/// let password = generator.password(&policy)?;
/// assert_eq!(password.len(), 32);
///
/// let pin = generator.secure_characters(6, "0123456789")?;
/// assert!(pin.as_str().chars().all(|c| c.is_ascii_digit()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Generator<E> {
    entropy: E,
    max_length: usize,
}

impl Default for Generator<OsEntropy> {
    fn default() -> Self {
        Self::new(OsEntropy::default())
    }
}

impl<E> Generator<E>
where
    E: Entropy,
{
    /// Create a generator limited to [`MAX_LENGTH`] characters per
    /// request.
    pub fn new(entropy: E) -> Self {
        Self::with_max_length(entropy, MAX_LENGTH)
    }

    /// Create a generator that refuses requests longer than
    /// `max_length`.
    pub fn with_max_length(entropy: E, max_length: usize) -> Self {
        Self {
            entropy,
            max_length,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn into_inner(self) -> E {
        self.entropy
    }

    /// Return `length` characters drawn independently and uniformly
    /// from `alphabet`.
    ///
    /// There is no per-class guarantee and no shuffle. Repeated
    /// characters in `alphabet` are allowed and weigh accordingly.
    /// A zero `length` yields an empty secret.
    ///
    /// # Error
    ///
    /// Returns [`Error::EmptyAlphabet`] for an empty alphabet,
    /// [`Error::InvalidLength`] above the maximum length, or
    /// [`Error::Entropy`].
    pub fn secure_characters(&mut self, length: usize, alphabet: &str) -> Result<Secret> {
        trace!("secure_characters: length={length}");
        if length > self.max_length {
            return Err(self.too_long(length));
        }
        let alphabet: Zeroizing<Vec<char>> = Zeroizing::new(alphabet.chars().collect());
        let mut buf = Zeroizing::new(vec!['\0'; length]);
        self.fill_characters(&alphabet, &mut buf)?;
        Ok(Secret::from_chars(&buf))
    }

    /// Fill the caller's buffer with characters drawn independently
    /// and uniformly from `alphabet`.
    ///
    /// On error, `out` is zeroed before returning.
    pub fn fill_characters(&mut self, alphabet: &[char], out: &mut [char]) -> Result<()> {
        let max = self.max_length;
        let entropy = &mut self.entropy;
        wipe_on_err(out, |out| {
            if alphabet.is_empty() {
                return Err(Error::EmptyAlphabet);
            }
            if out.len() > max {
                return Err(Error::InvalidLength {
                    length: out.len(),
                    max,
                });
            }
            trace!(
                "filling {} characters from an alphabet of {}",
                out.len(),
                alphabet.len()
            );
            Sampler::new(entropy).fill(alphabet, out)
        })
        .inspect_err(|e| debug!("character generation failed: {e}"))
    }

    /// Generate a password that satisfies `policy`.
    ///
    /// # Error
    ///
    /// See [`Generator::password_into`].
    pub fn password(&mut self, policy: &PasswordPolicy) -> Result<Secret> {
        if policy.length() > self.max_length {
            return Err(self.too_long(policy.length()));
        }
        let mut buf = Zeroizing::new(vec!['\0'; policy.length()]);
        self.password_into(policy.classes(), policy.exclude_ambiguous(), &mut buf)?;
        Ok(Secret::from_chars(&buf))
    }

    /// Alphanumeric password of `length` characters with at least one
    /// lowercase letter, one uppercase letter and one digit.
    pub fn uri_safe_password(&mut self, length: usize, exclude_ambiguous: bool) -> Result<Secret> {
        let policy = PasswordPolicy::uri_safe(length, exclude_ambiguous)?;
        self.password(&policy)
    }

    /// Compose a password into the caller's buffer. The password
    /// length is `out.len()`.
    ///
    /// One character of every class in `classes` is drawn first, the
    /// rest come from the union of the class alphabets, and the whole
    /// buffer is then shuffled so the guaranteed characters land in
    /// random positions.
    ///
    /// On error, `out` is zeroed before returning.
    ///
    /// # Error
    ///
    /// - [`Error::InvalidLength`] if `out` is empty or longer than the
    ///   maximum length.
    /// - [`Error::NoClassSelected`] if `classes` is empty.
    /// - [`Error::InsufficientLength`] if `out` is shorter than the
    ///   number of classes.
    /// - [`Error::EmptyClass`] if ambiguity filtering emptied a class.
    /// - [`Error::Entropy`] if the entropy source fails.
    pub fn password_into(
        &mut self,
        classes: ClassSet,
        exclude_ambiguous: bool,
        out: &mut [char],
    ) -> Result<()> {
        let max = self.max_length;
        let entropy = &mut self.entropy;
        wipe_on_err(out, |out| {
            let length = out.len();
            PolicyBuilder::new()
                .length(length)
                .max_length(max)
                .classes(classes)
                .build()?;
            trace!(
                "composing password: length={length} classes={} exclude_ambiguous={exclude_ambiguous}",
                classes.len()
            );

            let alphabets = Alphabets::build(classes, exclude_ambiguous)?;
            let mut sampler = Sampler::new(entropy);
            let mut reserved = 0;
            for (_, alphabet) in alphabets.classes() {
                out[reserved] = sampler.choose(alphabet)?;
                reserved += 1;
            }
            sampler.fill(alphabets.combined(), &mut out[reserved..])?;
            shuffle::shuffle(&mut sampler, out)
        })
        .inspect_err(|e| debug!("password generation failed: {e}"))
    }

    /// Shuffle `items` in place with this generator's entropy.
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        shuffle::shuffle(&mut Sampler::new(&mut self.entropy), items)
    }

    /// Uniform index in `[0, n)`.
    pub fn index(&mut self, n: usize) -> Result<usize> {
        Sampler::new(&mut self.entropy).index(n)
    }

    fn too_long(&self, length: usize) -> Error {
        debug!("rejecting request for {length} characters");
        Error::InvalidLength {
            length,
            max: self.max_length,
        }
    }
}

/// Return `length` characters drawn uniformly from `alphabet` using
/// the operating system's entropy.
///
/// ```
/// # fn main() -> Result<(), secpass::Error> {
/// let id = secpass::secure_characters(16, "abcdef0123456789")?;
/// assert_eq!(id.len(), 16);
/// # Ok(())
/// # }
/// ```
pub fn secure_characters(length: usize, alphabet: &str) -> Result<Secret> {
    Generator::default().secure_characters(length, alphabet)
}

/// Generate a password containing at least one character of each
/// enabled class.
///
/// ```
/// # fn main() -> Result<(), secpass::Error> {
/// let pw = secpass::password(24, true, true, true, true, false)?;
/// assert_eq!(pw.len(), 24);
/// # Ok(())
/// # }
/// ```
pub fn password(
    length: usize,
    include_lower: bool,
    include_upper: bool,
    include_number: bool,
    include_special: bool,
    exclude_ambiguous: bool,
) -> Result<Secret> {
    let policy = PolicyBuilder::new()
        .length(length)
        .lower(include_lower)
        .upper(include_upper)
        .digits(include_number)
        .special(include_special)
        .exclude_ambiguous(exclude_ambiguous)
        .build()?;
    Generator::default().password(&policy)
}

/// Generate an alphanumeric password.
pub fn uri_safe_password(length: usize, exclude_ambiguous: bool) -> Result<Secret> {
    password(length, true, true, true, false, exclude_ambiguous)
}
