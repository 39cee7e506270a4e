// SPDX-License-Identifier: MIT

//! Visually ambiguous characters.
//!
//! Characters such as `O` and `0` are easy to confuse when a password
//! is read off a screen or paper. Membership is answered from a table
//! computed at compile time and never modified afterwards.
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// The characters treated as ambiguous.
pub const AMBIGUOUS: &str = "Il1O0S5Z2B8G6gqC";

static TABLE: [bool; 128] = table();

const fn table() -> [bool; 128] {
    let mut table = [false; 128];
    let chars = AMBIGUOUS.as_bytes();
    let mut i = 0;
    while i < chars.len() {
        table[chars[i] as usize] = true;
        i += 1;
    }
    table
}

/// Returns `true` if `c` is in the ambiguity set.
#[inline]
pub fn is_ambiguous(c: char) -> bool {
    c.is_ascii() && TABLE[c as usize]
}

/// Copy the unambiguous characters of `alphabet` into `scratch`,
/// preserving order, and return the filled prefix.
///
/// A `scratch` as long as `alphabet` always has room. With a shorter
/// one, copying stops once `scratch` is full.
pub fn filter_into<'a>(alphabet: &[char], scratch: &'a mut [char]) -> &'a [char] {
    let mut len = 0;
    for &c in alphabet.iter().filter(|c| !is_ambiguous(**c)) {
        match scratch.get_mut(len) {
            Some(slot) => *slot = c,
            None => break,
        }
        len += 1;
    }
    &scratch[..len]
}

/// Return the unambiguous characters of `alphabet` in their original
/// order.
pub fn filter(alphabet: &str) -> Zeroizing<Vec<char>> {
    let mut out = Zeroizing::new(Vec::with_capacity(alphabet.len()));
    out.extend(alphabet.chars().filter(|c| !is_ambiguous(*c)));
    out
}
