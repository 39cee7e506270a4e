//
// Copyright (c) 2023 Daniel Ottavio
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE
//
//! Traits and types for plugging in a secure random byte source.
//!
//! Every character this crate produces is derived from bytes read
//! through the [`Entropy`] trait. The default source is
//! [`OsEntropy`], which reads from the operating system. There is
//! deliberately no non-cryptographic fallback: a failing source is
//! reported as an [`Error`] and generation stops.
use alloc::string::{String, ToString};
use core::{
    fmt,
    fmt::{Debug, Display, Formatter},
};

/// Error type for entropy source failures.
#[derive(Debug)]
pub struct Error {
    inner: String,
}

/// Represents a source of cryptographically secure random data.
///
/// Implementations must either fill the whole slice with uniformly
/// distributed bytes or return an error. Partial fills are not
/// allowed.
pub trait Entropy {
    /// Fill `bytes` with random data from the entropy source.
    ///
    /// # Error
    ///
    /// Returns an error if there is a problem with the underlying
    /// entropy source.
    fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Error>;
}

impl<E> Entropy for &mut E
where
    E: Entropy + ?Sized,
{
    fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Error> {
        (**self).fill_bytes(bytes)
    }
}

impl Error {
    /// Create a new error by wrapping an underlying entropy source
    /// error.
    ///
    /// # Example
    /// ```
    /// use secpass::entropy::Error;
    ///
    /// fn fill_bytes(bytes: &mut [u8]) -> Result<(), Error> {
    ///    getrandom::getrandom(bytes).map_err(Error::new)
    /// }
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Display + Debug,
    {
        Self {
            inner: error.to_string(),
        }
    }
}

impl core::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "entropy error: {}", self.inner)
    }
}

/// An entropy source that draws random data from the host operating
/// system.
///
/// ```
/// use secpass::entropy::{OsEntropy, Entropy};
///
/// # use secpass::entropy::Error;
/// #
/// # fn main() -> Result<(),Error> {
/// #
/// let mut entropy = OsEntropy::default();
/// let mut random_data = [0u8; 32];
/// entropy.fill_bytes(&mut random_data)?;
/// #
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy {}

impl OsEntropy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entropy for OsEntropy {
    /// Fill `bytes` with random data from the operating system using
    /// [`getrandom`](getrandom::getrandom).
    ///
    /// # Error
    ///
    /// Returns any error from `getrandom`.
    fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Error> {
        getrandom::getrandom(bytes).map_err(Error::new)
    }
}

/// Adapts any [`rand_core`] generator marked as
/// [`CryptoRng`](rand_core::CryptoRng) into an entropy source.
///
/// Failures reported through
/// [`try_fill_bytes`](rand_core::RngCore::try_fill_bytes) are
/// surfaced as [`Error`].
#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
#[derive(Debug)]
pub struct RngEntropy<R> {
    rng: R,
}

#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl<R> RngEntropy<R>
where
    R: rand_core::RngCore + rand_core::CryptoRng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl<R> Entropy for RngEntropy<R>
where
    R: rand_core::RngCore + rand_core::CryptoRng,
{
    fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(bytes).map_err(Error::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::entropy::{Entropy, Error, OsEntropy};
    use alloc::string::ToString;

    struct Broken;

    impl Entropy for Broken {
        fn fill_bytes(&mut self, _bytes: &mut [u8]) -> Result<(), Error> {
            Err(Error::new("device unavailable"))
        }
    }

    fn fill_through<E: Entropy>(mut entropy: E, bytes: &mut [u8]) -> Result<(), Error> {
        entropy.fill_bytes(bytes)
    }

    #[test]
    fn os_entropy_fills() -> Result<(), Error> {
        let mut entropy = OsEntropy::new();
        let mut buf = [0u8; 32];
        entropy.fill_bytes(&mut buf)?;
        assert_ne!([0u8; 32], buf);
        Ok(())
    }

    #[test]
    fn mut_ref_forwards() -> Result<(), Error> {
        let mut entropy = OsEntropy::new();
        let mut buf = [0u8; 16];
        fill_through(&mut entropy, &mut buf)?;
        assert_ne!([0u8; 16], buf);
        Ok(())
    }

    #[test]
    fn error_display() {
        let mut buf = [0u8; 4];
        let err = Broken.fill_bytes(&mut buf).unwrap_err();
        assert_eq!(err.to_string(), "entropy error: device unavailable");
    }
}

#[cfg(all(test, feature = "rand_core"))]
mod rand_core_tests {
    use crate::entropy::{Entropy, Error, RngEntropy};
    use core::num::NonZeroU32;
    use rand_core::{CryptoRng, RngCore};

    struct Sevens;

    impl RngCore for Sevens {
        fn next_u32(&mut self) -> u32 {
            0x0707_0707
        }

        fn next_u64(&mut self) -> u64 {
            0x0707_0707_0707_0707
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(7);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            dest.fill(7);
            Ok(())
        }
    }

    impl CryptoRng for Sevens {}

    struct Failing;

    impl RngCore for Failing {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            let code = NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
            Err(rand_core::Error::from(code))
        }
    }

    impl CryptoRng for Failing {}

    #[test]
    fn forwards_bytes() -> Result<(), Error> {
        let mut entropy = RngEntropy::new(Sevens);
        let mut buf = [0u8; 13];
        entropy.fill_bytes(&mut buf)?;
        assert_eq!(buf, [7u8; 13]);
        Ok(())
    }

    #[test]
    fn drives_generator() -> crate::Result<()> {
        let mut generator = crate::Generator::new(RngEntropy::new(Sevens));
        // 7 % 2 selects the second character every time.
        let s = generator.secure_characters(5, "ab")?;
        assert_eq!(s.as_str(), "bbbbb");
        let _rng: Sevens = generator.into_inner().into_inner();
        Ok(())
    }

    #[test]
    fn failure_surfaces_as_entropy_error() {
        let mut buf = [0u8; 4];
        assert!(RngEntropy::new(Failing).fill_bytes(&mut buf).is_err());

        let mut generator = crate::Generator::new(RngEntropy::new(Failing));
        let res = generator.password(&crate::PasswordPolicy::default());
        assert!(matches!(res, Err(crate::Error::Entropy(_))));
    }
}
