use std::fmt;

use rand::Rng;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Number of letters in the alphabet and therefore of game targets.
pub const ALPHABET_LEN: usize = 26;

/// A single uppercase letter `'A'..='Z'`.
///
/// Construction always validates, so any `Letter` held by the game or the
/// backend is known to be in range. Parsing normalizes lowercase input the
/// same way the lookup service normalizes its path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterParseError {
    input: String,
}

impl fmt::Display for LetterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a letter A-Z: {:?}", self.input)
    }
}

impl std::error::Error for LetterParseError {}

impl Letter {
    /// Parses a one-character string, accepting either case.
    pub fn parse(input: &str) -> Result<Self, LetterParseError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self(c.to_ascii_uppercase())),
            _ => Err(LetterParseError {
                input: input.to_string(),
            }),
        }
    }

    /// The letter at a 0-based target index, `0 == 'A'`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self((b'A' + index as u8) as char))
        } else {
            None
        }
    }

    /// 0-based position in the alphabet.
    pub fn index(self) -> usize {
        (self.0 as u8 - b'A') as usize
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Uniform selection with replacement. Back-to-back repeats are allowed
    /// on purpose; the practice mode has always behaved this way.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self((b'A' + rng.gen_range(0..ALPHABET_LEN as u8)) as char)
    }

    /// All 26 letters in order.
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(|c| Self(c as char))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Letter::parse(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn parse_normalizes_case() {
        assert_eq!(Letter::parse("a").unwrap().as_char(), 'A');
        assert_eq!(Letter::parse("Z").unwrap().as_char(), 'Z');
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Letter::parse("").is_err());
        assert!(Letter::parse("AB").is_err());
        assert!(Letter::parse("1").is_err());
        assert!(Letter::parse("é").is_err());
    }

    #[test]
    fn index_roundtrip() {
        for (i, letter) in Letter::alphabet().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), Some(letter));
        }
        assert_eq!(Letter::from_index(26), None);
    }

    #[test]
    fn random_is_in_range_and_repeats_are_possible() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen_repeat = false;
        let mut prev = Letter::random(&mut rng);
        for _ in 0..500 {
            let next = Letter::random(&mut rng);
            assert!(('A'..='Z').contains(&next.as_char()));
            if next == prev {
                seen_repeat = true;
            }
            prev = next;
        }
        assert!(seen_repeat, "uniform selection with replacement should repeat");
    }

    #[test]
    fn serde_uses_single_char_string() {
        let letter = Letter::parse("Q").unwrap();
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"Q\"");
        let back: Letter = serde_json::from_str("\"q\"").unwrap();
        assert_eq!(back, letter);
    }
}
