// Rust guideline compliant 2026-10-18

//! Implementation of the `orchard rarity` command.
//!
//! Samples the rarity draw for a prompt and reports how often each tier came
//! up, which makes the effect of prompt length on the draw visible.

use anyhow::Result;
use orchard_core::rarity::prompt_bias;
use orchard_core::{assign_rarity, Rarity};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Number of draws for one tier.
#[derive(Debug, Serialize)]
pub struct TierCount {
    /// Rarity tier.
    pub tier: Rarity,
    /// How many draws landed on the tier.
    pub count: usize,
}

/// Sampled rarity distribution for a prompt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RarityReport {
    /// Prompt that was sampled.
    pub prompt: String,
    /// Length bias applied to every roll.
    pub bias: f64,
    /// Number of draws.
    pub samples: usize,
    /// Per-tier counts in tier order.
    pub tiers: Vec<TierCount>,
}

/// Samples the rarity draw for a prompt.
///
/// # Arguments
///
/// * `prompt` - Prompt to draw for
/// * `samples` - Number of draws
/// * `seed` - Optional seed for a reproducible report
///
/// # Errors
///
/// Returns an error if `samples` is zero.
pub fn execute(prompt: &str, samples: usize, seed: Option<u64>) -> Result<RarityReport> {
    if samples == 0 {
        anyhow::bail!("samples must be greater than 0");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut counts = [0usize; Rarity::ALL.len()];
    for _ in 0..samples {
        let tier = assign_rarity(prompt, &mut rng);
        counts[tier as usize] += 1;
    }

    let tiers = Rarity::ALL
        .into_iter()
        .zip(counts)
        .map(|(tier, count)| TierCount { tier, count })
        .collect();

    Ok(RarityReport {
        prompt: prompt.to_string(),
        bias: prompt_bias(prompt),
        samples,
        tiers,
    })
}
