// SPDX-License-Identifier: MIT

//! The generated value handed to the caller.
use alloc::string::String;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A generated password or random string.
///
/// The contents are wiped when the value is dropped, and `Debug`
/// never prints them. The crate keeps no other copy once a `Secret`
/// has been returned.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    /// Build a secret from `chars` in a single allocation, so no
    /// reallocation leaves a stale copy behind.
    pub(crate) fn from_chars(chars: &[char]) -> Self {
        let len = chars.iter().map(|c| c.len_utf8()).sum();
        let mut s = String::with_capacity(len);
        s.extend(chars.iter());
        debug_assert_eq!(s.len(), len);
        Secret(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Secret {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn debug_hides_contents() {
        let s = Secret::from_chars(&['h', 'u', 'n', 't', 'e', 'r', '2']);
        let dbg = format!("{s:?}");
        assert!(!dbg.contains("hunter2"));
        assert_eq!(s.as_str(), "hunter2");
    }

    #[test]
    fn counts_chars() {
        let s = Secret::from_chars(&['é', 'a', '→']);
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_bytes().len(), 6);
        assert!(Secret::from_chars(&[]).is_empty());
    }
}
