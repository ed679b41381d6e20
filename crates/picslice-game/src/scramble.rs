use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// Number of bytes in a [`ScrambleSeed`].
pub const SEED_BYTES: usize = 16;

/// A 128-bit seed identifying one scramble.
///
/// The seed renders as 32 lowercase hex digits and parses back from the same
/// form, so an arrangement can be reported, shared, and reproduced.
///
/// # Example
///
/// ```
/// use picslice_game::ScrambleSeed;
///
/// let seed: ScrambleSeed = "00112233445566778899aabbccddeeff".parse().unwrap();
/// assert_eq!(seed.to_string(), "00112233445566778899aabbccddeeff");
///
/// // Phrase-derived seeds are deterministic.
/// assert_eq!(
///     ScrambleSeed::from_phrase("kittens"),
///     ScrambleSeed::from_phrase("kittens"),
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrambleSeed([u8; SEED_BYTES]);

impl ScrambleSeed {
    /// Creates a fresh random seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; SEED_BYTES];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase (SHA-256, truncated).
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; SEED_BYTES];
        bytes.copy_from_slice(&digest[..SEED_BYTES]);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; SEED_BYTES] {
        self.0
    }

    /// Builds the deterministic generator this seed stands for.
    #[must_use]
    pub fn rng(self) -> Pcg64Mcg {
        Pcg64Mcg::from_seed(self.0)
    }
}

impl fmt::Display for ScrambleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ScrambleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScrambleSeed({self})")
    }
}

/// Errors from parsing a [`ScrambleSeed`] from its hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input was not exactly 32 hex digits long.
    #[display("seed must be {} hex digits, got {_0}", SEED_BYTES * 2)]
    InvalidLength(#[error(not(source))] usize),
    /// The input contained a non-hex character.
    #[display("invalid hex digit {_0:?} in seed")]
    InvalidDigit(#[error(not(source))] char),
}

impl FromStr for ScrambleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != SEED_BYTES * 2 {
            return Err(ParseSeedError::InvalidLength(s.chars().count()));
        }
        let mut bytes = [0; SEED_BYTES];
        let digits: Vec<char> = s.chars().collect();
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            let hi = pair[0]
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidDigit(pair[0]))?;
            let lo = pair[1]
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidDigit(pair[1]))?;
            #[expect(clippy::cast_possible_truncation)]
            {
                *byte = (hi * 16 + lo) as u8;
            }
        }
        Ok(Self(bytes))
    }
}
