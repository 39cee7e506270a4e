// SPDX-License-Identifier: MIT

//! Uniform index sampling by rejection.
//!
//! Reducing a random byte modulo `n` favours the low indices whenever
//! 256 is not a multiple of `n`. The [`Sampler`] avoids that by
//! discarding the values that fall in the incomplete tail of the
//! range and drawing again. Alphabets of up to 256 characters consume
//! one byte per attempt; larger ones consume a 64-bit word.
//!
//! Bytes are read from the [`Entropy`] source in chunks and kept in a
//! pool that is wiped when the sampler is dropped. Rejected bytes are
//! discarded, never reused.
use crate::{
    entropy::Entropy,
    error::{Error, Result},
};
use zeroize::{Zeroize, Zeroizing};

const POOL_LEN: usize = 64;

/// Draws uniformly distributed indices from an entropy source.
///
/// A sampler is meant to live for a single generation call.
///
/// # Example
///
/// ```
/// use secpass::{entropy::OsEntropy, sampler::Sampler};
///
/// # fn main() -> Result<(), secpass::Error> {
/// let mut sampler = Sampler::new(OsEntropy::default());
/// let i = sampler.index(62)?;
/// assert!(i < 62);
/// # Ok(())
/// # }
/// ```
pub struct Sampler<E> {
    entropy: E,
    pool: Zeroizing<[u8; POOL_LEN]>,
    pos: usize,
}

impl<E> Sampler<E>
where
    E: Entropy,
{
    pub fn new(entropy: E) -> Self {
        Self {
            entropy,
            pool: Zeroizing::new([0u8; POOL_LEN]),
            pos: POOL_LEN,
        }
    }

    /// Return an index uniformly distributed over `[0, n)`.
    ///
    /// `n == 1` always yields 0 and reads no entropy.
    ///
    /// # Error
    ///
    /// Returns [`Error::EmptyAlphabet`] when `n` is zero and
    /// [`Error::Entropy`] when the source fails.
    pub fn index(&mut self, n: usize) -> Result<usize> {
        match n {
            0 => Err(Error::EmptyAlphabet),
            1 => Ok(0),
            2..=256 => self.index_byte(n),
            _ => self.index_wide(n as u64),
        }
    }

    /// Fill `out` with characters drawn independently and uniformly
    /// from `alphabet`.
    ///
    /// On error `out` may be partially written; callers wipe it.
    pub fn fill(&mut self, alphabet: &[char], out: &mut [char]) -> Result<()> {
        if alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        for slot in out.iter_mut() {
            *slot = alphabet[self.index(alphabet.len())?];
        }
        Ok(())
    }

    /// Pick one character of `alphabet`.
    pub fn choose(&mut self, alphabet: &[char]) -> Result<char> {
        let i = self.index(alphabet.len())?;
        Ok(alphabet[i])
    }

    fn index_byte(&mut self, n: usize) -> Result<usize> {
        let limit = (256 / n) * n;
        loop {
            let b = self.byte()? as usize;
            if b < limit {
                return Ok(b % n);
            }
        }
    }

    fn index_wide(&mut self, n: u64) -> Result<usize> {
        // 2^64 mod n; values above u64::MAX - tail are the biased ones.
        let tail = (u64::MAX % n + 1) % n;
        loop {
            let mut word = [0u8; 8];
            for b in word.iter_mut() {
                *b = self.byte()?;
            }
            let v = u64::from_le_bytes(word);
            word.zeroize();
            if v <= u64::MAX - tail {
                return Ok((v % n) as usize);
            }
        }
    }

    fn byte(&mut self) -> Result<u8> {
        if self.pos == POOL_LEN {
            self.entropy.fill_bytes(&mut self.pool[..]).map_err(|e| {
                log::warn!("entropy source failed: {e}");
                e
            })?;
            self.pos = 0;
        }
        let b = self.pool[self.pos];
        self.pool[self.pos] = 0;
        self.pos += 1;
        Ok(b)
    }
}
