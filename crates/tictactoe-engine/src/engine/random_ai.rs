use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{GameState, NoLegalMove};

/// Seed for the AI's random number generator.
///
/// 128 bits, written as a 32-character hex string. Two [`RandomAi`]s built
/// from the same seed pick the same cells when shown the same positions,
/// which makes games reproducible.
///
/// # Example
///
/// ```
/// use tictactoe_engine::AiSeed;
///
/// let seed: AiSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// assert_eq!(seed.to_string(), "0123456789abcdef0123456789abcdef");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed: {input:?} ({message})")]
pub struct ParseAiSeedError {
    input: String,
    message: String,
}

impl FromStr for AiSeed {
    type Err = ParseAiSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = |message: String| ParseAiSeedError {
            input: s.to_owned(),
            message,
        };
        if s.len() != 32 {
            return Err(error(format!("expected 32 characters, got {}", s.len())));
        }
        let num = u128::from_str_radix(s, 16).map_err(|e| error(e.to_string()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl fmt::Display for AiSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for AiSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AiSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `AiSeed` values with `rng.random()`.
impl Distribution<AiSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AiSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        AiSeed(seed)
    }
}

/// The computer opponent.
///
/// Plays a uniformly random empty cell. There is no strategy and no
/// difficulty setting; the only state is the random number generator.
#[derive(Debug, Clone)]
pub struct RandomAi {
    seed: AiSeed,
    rng: Pcg32,
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAi {
    /// Creates an AI seeded from the thread-local generator.
    ///
    /// For reproducible games, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: AiSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Returns the seed this AI was created with.
    #[must_use]
    pub const fn seed(&self) -> AiSeed {
        self.seed
    }

    /// Chooses the AI's next cell.
    ///
    /// See [`GameState::choose_ai_move`].
    pub fn choose_move(&mut self, state: &GameState) -> Result<usize, NoLegalMove> {
        let index = state.choose_ai_move(&mut self.rng)?;
        tracing::debug!(index, "AI chose cell");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    fn play_out(ai: &mut RandomAi) -> GameState {
        let mut state = GameState::new();
        while !state.is_over() {
            let index = ai.choose_move(&state).unwrap();
            state.apply_move(index, state.current_turn()).unwrap();
        }
        state
    }

    #[test]
    fn test_seed_parse_and_display() {
        let seed: AiSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(
            seed.0,
            [
                0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
                0x32, 0x10
            ]
        );
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_seed_parse_errors() {
        for input in [
            "",
            "0123456789abcdef0123456789abcde",
            "0123456789abcdef0123456789abcdef0",
            "ghijklmnopqrstuvwxyzghijklmnopqr",
        ] {
            let err = input.parse::<AiSeed>().unwrap_err();
            assert!(err.to_string().contains("invalid hex seed"), "{err}");
        }
    }

    #[test]
    fn test_seed_serde_format() {
        let seed = AiSeed([0xFF; 16]);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, "\"ffffffffffffffffffffffffffffffff\"");
        let restored: AiSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, seed);

        let result: Result<AiSeed, _> = serde_json::from_str("\"1234\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_same_seed_same_game() {
        let seed: AiSeed = rand::rng().random();
        let mut ai1 = RandomAi::with_seed(seed);
        let mut ai2 = RandomAi::with_seed(seed);
        for _ in 0..20 {
            assert_eq!(play_out(&mut ai1), play_out(&mut ai2));
        }
        assert_eq!(ai1.seed(), seed);
    }

    #[test]
    fn test_choose_move_is_legal() {
        let mut ai = RandomAi::new();
        let mut state = GameState::new();
        state.apply_move(4, Side::Player).unwrap();
        for _ in 0..100 {
            let index = ai.choose_move(&state).unwrap();
            assert_ne!(index, 4);
            assert!(state.cells()[index].is_empty());
        }
    }
}
