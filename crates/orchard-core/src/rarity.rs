// Rust guideline compliant 2026-10-18

//! Weighted rarity draw for new fruits.
//!
//! The draw walks a fixed, ordered weight table. Longer prompts add a bias of
//! up to `MAX_BIAS` to the uniform roll, which pushes the walk toward the rarer
//! end of the table. The biased roll can exceed the table's cumulative total,
//! in which case the draw falls back to `Rarity::Wilted`.

use crate::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum bias added to the roll for long prompts.
pub const MAX_BIAS: f64 = 0.15;

/// Word count at which the bias saturates.
pub const BIAS_SATURATION_WORDS: f64 = 50.0;

/// Rarity tier of a fruit, from most common to rarest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Wilted,
    Sprout,
    Juicy,
    Ripe,
    Vibrant,
    Mystic,
    Blazing,
    Celestial,
    Enchanted,
    #[serde(rename = "Divine Bloom")]
    DivineBloom,
}

/// Ordered draw table of tiers and their unnormalized weights.
pub const RARITY_TABLE: [(Rarity, f64); 10] = [
    (Rarity::Wilted, 0.30),
    (Rarity::Sprout, 0.25),
    (Rarity::Juicy, 0.15),
    (Rarity::Ripe, 0.10),
    (Rarity::Vibrant, 0.07),
    (Rarity::Mystic, 0.05),
    (Rarity::Blazing, 0.035),
    (Rarity::Celestial, 0.024),
    (Rarity::Enchanted, 0.01),
    (Rarity::DivineBloom, 0.001),
];

impl Rarity {
    /// Every tier, in table order.
    pub const ALL: [Rarity; 10] = [
        Rarity::Wilted,
        Rarity::Sprout,
        Rarity::Juicy,
        Rarity::Ripe,
        Rarity::Vibrant,
        Rarity::Mystic,
        Rarity::Blazing,
        Rarity::Celestial,
        Rarity::Enchanted,
        Rarity::DivineBloom,
    ];

    /// Returns the display label of the tier.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Wilted => "Wilted",
            Rarity::Sprout => "Sprout",
            Rarity::Juicy => "Juicy",
            Rarity::Ripe => "Ripe",
            Rarity::Vibrant => "Vibrant",
            Rarity::Mystic => "Mystic",
            Rarity::Blazing => "Blazing",
            Rarity::Celestial => "Celestial",
            Rarity::Enchanted => "Enchanted",
            Rarity::DivineBloom => "Divine Bloom",
        }
    }

    /// Returns the unnormalized table weight of the tier.
    #[must_use]
    pub fn weight(&self) -> f64 {
        RARITY_TABLE
            .iter()
            .find(|(tier, _)| tier == self)
            .map_or(0.0, |(_, weight)| *weight)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rarity::ALL
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown rarity tier: {s}")))
    }
}

/// Returns the roll bias for a prompt.
///
/// The bias grows linearly with the number of whitespace-delimited words and
/// saturates at `MAX_BIAS` once the prompt reaches `BIAS_SATURATION_WORDS`.
#[must_use]
pub fn prompt_bias(prompt: &str) -> f64 {
    let word_count = prompt.split_whitespace().count() as f64;
    (word_count / BIAS_SATURATION_WORDS).min(1.0) * MAX_BIAS
}

/// Resolves a rarity from a prompt and a uniform draw in `[0, 1)`.
///
/// # Arguments
///
/// * `prompt` - Prompt text used to bias the draw
/// * `unit` - Uniform random value before biasing
///
/// # Returns
///
/// The first tier whose cumulative normalized weight covers the biased roll,
/// or `Rarity::Wilted` when the roll overshoots the whole table.
#[must_use]
pub fn rarity_for_roll(prompt: &str, unit: f64) -> Rarity {
    let roll = unit + prompt_bias(prompt);
    let total: f64 = RARITY_TABLE.iter().map(|(_, weight)| weight).sum();

    let mut cumulative = 0.0;
    for (tier, weight) in RARITY_TABLE {
        cumulative += weight / total;
        if roll <= cumulative {
            return tier;
        }
    }

    // Bias pushed the roll past the table total.
    Rarity::Wilted
}

/// Draws a rarity tier for a prompt.
///
/// # Arguments
///
/// * `prompt` - Prompt text used to bias the draw
/// * `rng` - Random source for the uniform roll
///
/// # Returns
///
/// A tier from `RARITY_TABLE`. This never fails.
pub fn assign_rarity<R: Rng + ?Sized>(prompt: &str, rng: &mut R) -> Rarity {
    rarity_for_roll(prompt, rng.gen::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_roll_one_word_is_wilted() {
        assert_eq!(rarity_for_roll("apple", 0.0), Rarity::Wilted);
    }

    #[test]
    fn test_overshoot_falls_back_to_wilted() {
        assert_eq!(rarity_for_roll("", 1.5), Rarity::Wilted);
        let long_prompt = vec!["word"; 80].join(" ");
        assert_eq!(rarity_for_roll(&long_prompt, 0.999), Rarity::Wilted);
    }

    #[test]
    fn test_top_of_table_is_divine_bloom() {
        assert_eq!(rarity_for_roll("", 0.9995), Rarity::DivineBloom);
    }

    #[test]
    fn test_bias_saturates() {
        let fifty = vec!["w"; 50].join(" ");
        let hundred = vec!["w"; 100].join("\t");
        assert!((prompt_bias(&fifty) - MAX_BIAS).abs() < f64::EPSILON);
        assert!((prompt_bias(&hundred) - MAX_BIAS).abs() < f64::EPSILON);
        assert_eq!(prompt_bias("   "), 0.0);
    }

    #[test]
    fn test_long_prompt_shifts_tier() {
        let long_prompt = vec!["shiny"; 50].join(" ");
        assert_eq!(rarity_for_roll("shiny", 0.2), Rarity::Wilted);
        assert_eq!(rarity_for_roll(&long_prompt, 0.2), Rarity::Sprout);
    }

    #[test]
    fn test_label_round_trip() {
        for tier in Rarity::ALL {
            assert_eq!(tier.label().parse::<Rarity>().unwrap(), tier);
        }
        assert!("Golden".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_divine_bloom_serializes_with_space() {
        let json = serde_json::to_string(&Rarity::DivineBloom).unwrap();
        assert_eq!(json, "\"Divine Bloom\"");
    }
}
