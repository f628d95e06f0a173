use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// The 256-bit seed a field is generated from.
///
/// Seeds print as 64 lowercase hex digits and parse back from the same form
/// (upper case accepted).
///
/// # Examples
///
/// ```
/// use minefield_generator::FieldSeed;
///
/// let seed = FieldSeed::from_phrase("hello");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<FieldSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSeed([u8; 32]);

/// Error returned when parsing a [`FieldSeed`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Character offset in the text.
        offset: usize,
    },
}

impl FieldSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Draws a seed from `rng`.
    pub fn from_rng<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut bytes = [0; 32];
        rng.fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from the SHA-256 digest of `phrase`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

/// A reproducible stream of field seeds.
///
/// A game session draws one seed per generated field from a single master
/// seed, so the whole session replays from that master seed.
///
/// # Examples
///
/// ```
/// use minefield_generator::{FieldSeed, SeedSequence};
///
/// let master = FieldSeed::from_phrase("session");
/// let mut a = SeedSequence::new(master);
/// let mut b = SeedSequence::new(master);
/// assert_eq!(a.next_seed(), b.next_seed());
/// assert_ne!(a.next_seed(), a.next_seed());
/// ```
#[derive(Debug, Clone)]
pub struct SeedSequence {
    master: FieldSeed,
    rng: Pcg64,
}

impl SeedSequence {
    /// Creates a sequence starting from `master`.
    #[must_use]
    pub fn new(master: FieldSeed) -> Self {
        Self {
            master,
            rng: master.rng(),
        }
    }

    /// Returns the master seed this sequence started from.
    #[must_use]
    pub const fn master(&self) -> FieldSeed {
        self.master
    }

    /// Returns the next seed.
    pub fn next_seed(&mut self) -> FieldSeed {
        FieldSeed::from_rng(&mut self.rng)
    }
}

impl fmt::Display for FieldSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: chars.len() });
        }

        let mut bytes = [0; 32];
        for (byte, (offset, pair)) in bytes.iter_mut().zip(chars.chunks(2).enumerate()) {
            let mut value = 0;
            for (i, &ch) in pair.iter().enumerate() {
                let digit = ch.to_digit(16).ok_or(ParseSeedError::InvalidDigit {
                    ch,
                    offset: offset * 2 + i,
                })?;
                value = value * 16 + digit;
            }
            *byte = u8::try_from(value).unwrap_or(u8::MAX);
        }
        Ok(Self(bytes))
    }
}
