// SPDX-License-Identifier: MIT

//! Character classes and the alphabets built from them.
use crate::{
    ambiguous,
    error::{Error, Result},
};
use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroizing;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT: &str = "0123456789";
// Safe to embed in a JSON string: no `"` or `\`.
const SPECIAL: &str = "!@#$%^*()[]{},.:~_-=";

/// One of the four character classes a password can draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharClass {
    /// All classes, in the order alphabets are composed.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// The full, unfiltered alphabet of this class.
    pub const fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lower => LOWER,
            CharClass::Upper => UPPER,
            CharClass::Digit => DIGIT,
            CharClass::Special => SPECIAL,
        }
    }

    /// Returns `true` if `c` belongs to the unfiltered alphabet of
    /// this class.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    // Special characters never collide with the ambiguity set.
    fn filtered(self) -> bool {
        !matches!(self, CharClass::Special)
    }

    const fn bit(self) -> u8 {
        match self {
            CharClass::Lower => 1,
            CharClass::Upper => 1 << 1,
            CharClass::Digit => 1 << 2,
            CharClass::Special => 1 << 3,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CharClass::Lower => "lowercase",
            CharClass::Upper => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Special => "special",
        })
    }
}

/// A set of enabled character classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    /// No classes enabled.
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    /// Every class enabled.
    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    /// Letters and digits only.
    pub const fn alphanumeric() -> Self {
        Self::empty()
            .with(CharClass::Lower)
            .with(CharClass::Upper)
            .with(CharClass::Digit)
    }

    pub const fn with(self, class: CharClass) -> Self {
        ClassSet(self.0 | class.bit())
    }

    pub const fn without(self, class: CharClass) -> Self {
        ClassSet(self.0 & !class.bit())
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        *self = if enabled {
            self.with(class)
        } else {
            self.without(class)
        };
    }

    pub const fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in composition order.
    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        iter.into_iter().fold(ClassSet::empty(), ClassSet::with)
    }
}

/// Per-class alphabets plus their concatenation.
///
/// Both are wiped when dropped.
pub struct Alphabets {
    classes: Vec<(CharClass, Zeroizing<Vec<char>>)>,
    combined: Zeroizing<Vec<char>>,
}

impl Alphabets {
    /// Build the alphabet of every class in `classes`, dropping
    /// ambiguous characters from the letter and digit classes when
    /// `exclude_ambiguous` is set.
    ///
    /// # Error
    ///
    /// Returns [`Error::NoClassSelected`] if `classes` is empty, or
    /// [`Error::EmptyClass`] if filtering left a class with nothing.
    pub fn build(classes: ClassSet, exclude_ambiguous: bool) -> Result<Self> {
        if classes.is_empty() {
            return Err(Error::NoClassSelected);
        }

        let mut per_class = Vec::with_capacity(classes.len());
        let mut total = 0;
        for class in classes.iter() {
            let alphabet = if exclude_ambiguous && class.filtered() {
                ambiguous::filter(class.alphabet())
            } else {
                Zeroizing::new(class.alphabet().chars().collect())
            };
            if alphabet.is_empty() {
                return Err(Error::EmptyClass(class));
            }
            total += alphabet.len();
            per_class.push((class, alphabet));
        }

        let mut combined = Zeroizing::new(Vec::with_capacity(total));
        for (_, alphabet) in &per_class {
            combined.extend_from_slice(alphabet);
        }
        debug_assert_eq!(combined.len(), total);

        Ok(Self {
            classes: per_class,
            combined,
        })
    }

    /// Class alphabets in composition order.
    pub fn classes(&self) -> impl Iterator<Item = (CharClass, &[char])> {
        self.classes.iter().map(|(c, a)| (*c, a.as_slice()))
    }

    /// The alphabet for `class`, if it is enabled.
    pub fn class(&self, class: CharClass) -> Option<&[char]> {
        self.classes
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, a)| a.as_slice())
    }

    /// Concatenation of every enabled class alphabet.
    pub fn combined(&self) -> &[char] {
        &self.combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambiguous::is_ambiguous;

    #[test]
    fn class_sizes() {
        assert_eq!(CharClass::Lower.alphabet().len(), 26);
        assert_eq!(CharClass::Upper.alphabet().len(), 26);
        assert_eq!(CharClass::Digit.alphabet().len(), 10);
        assert_eq!(CharClass::Special.alphabet().len(), 20);
        assert!(!CharClass::Special.contains('"'));
        assert!(!CharClass::Special.contains('\\'));
    }

    #[test]
    fn class_set_ops() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        set.set(CharClass::Digit, true);
        set.set(CharClass::Lower, true);
        assert_eq!(set.len(), 2);
        let order: Vec<CharClass> = set.iter().collect();
        assert_eq!(order, [CharClass::Lower, CharClass::Digit]);
        set.set(CharClass::Lower, false);
        assert!(!set.contains(CharClass::Lower));
        assert_eq!(ClassSet::all().len(), 4);
        assert!(!ClassSet::alphanumeric().contains(CharClass::Special));
        assert_eq!(CharClass::ALL.into_iter().collect::<ClassSet>(), ClassSet::all());
    }

    #[test]
    fn combined_is_concatenation() -> Result<()> {
        let alphabets = Alphabets::build(ClassSet::all(), false)?;
        let expected: Vec<char> = [LOWER, UPPER, DIGIT, SPECIAL]
            .iter()
            .flat_map(|s| s.chars())
            .collect();
        assert_eq!(alphabets.combined(), expected.as_slice());
        let sum: usize = alphabets.classes().map(|(_, a)| a.len()).sum();
        assert_eq!(sum, alphabets.combined().len());
        Ok(())
    }

    #[test]
    fn filtered_alphabets() -> Result<()> {
        let alphabets = Alphabets::build(ClassSet::all(), true)?;
        assert_eq!(alphabets.class(CharClass::Lower).map(<[char]>::len), Some(23));
        assert_eq!(alphabets.class(CharClass::Upper).map(<[char]>::len), Some(19));
        assert_eq!(
            alphabets.class(CharClass::Digit),
            Some(['3', '4', '7', '9'].as_slice())
        );
        assert_eq!(alphabets.class(CharClass::Special).map(<[char]>::len), Some(20));
        for (class, alphabet) in alphabets.classes() {
            for c in alphabet {
                assert!(class.contains(*c));
                assert!(!is_ambiguous(*c));
            }
        }
        Ok(())
    }

    #[test]
    fn subset_keeps_order() -> Result<()> {
        let set = ClassSet::empty()
            .with(CharClass::Special)
            .with(CharClass::Upper);
        let alphabets = Alphabets::build(set, false)?;
        let order: Vec<CharClass> = alphabets.classes().map(|(c, _)| c).collect();
        assert_eq!(order, [CharClass::Upper, CharClass::Special]);
        assert_eq!(alphabets.combined().first(), Some(&'A'));
        assert_eq!(alphabets.combined().last(), Some(&'='));
        assert!(alphabets.class(CharClass::Lower).is_none());
        Ok(())
    }

    #[test]
    fn no_classes() {
        assert!(matches!(
            Alphabets::build(ClassSet::empty(), true),
            Err(Error::NoClassSelected)
        ));
    }
}
