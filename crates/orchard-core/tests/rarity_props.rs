// Rust guideline compliant 2026-10-18

//! Property-based tests for the rarity draw.

use orchard_core::rarity::{prompt_bias, MAX_BIAS};
use orchard_core::{assign_rarity, rarity_for_roll, Rarity, RARITY_TABLE};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generates prompts of zero to eighty words.
fn arb_prompt() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 0..80).prop_map(|words| words.join(" "))
}

proptest! {
    /// Any prompt and any unit roll, even past 1.0, resolves to a table tier.
    #[test]
    fn prop_rarity_always_in_table(prompt in arb_prompt(), unit in 0.0f64..2.0) {
        let tier = rarity_for_roll(&prompt, unit);
        prop_assert!(RARITY_TABLE.iter().any(|(t, _)| *t == tier));
    }

    /// Seeded draws are deterministic and valid.
    #[test]
    fn prop_seeded_draw_is_deterministic(prompt in arb_prompt(), seed in any::<u64>()) {
        let first = assign_rarity(&prompt, &mut StdRng::seed_from_u64(seed));
        let second = assign_rarity(&prompt, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
        prop_assert!(Rarity::ALL.contains(&first));
    }

    /// Bias stays within [0, MAX_BIAS].
    #[test]
    fn prop_bias_bounded(prompt in arb_prompt()) {
        let bias = prompt_bias(&prompt);
        prop_assert!((0.0..=MAX_BIAS).contains(&bias));
    }

    /// Adding words never lowers the tier, as long as the roll stays in range.
    #[test]
    fn prop_longer_prompt_never_lowers_tier(
        prompt in arb_prompt(),
        extra in prop::collection::vec("[a-z]{1,8}", 1..10),
        unit in 0.0f64..0.8,
    ) {
        let longer = format!("{} {}", prompt, extra.join(" "));
        let short_tier = rarity_for_roll(&prompt, unit);
        let long_tier = rarity_for_roll(&longer, unit);
        prop_assert!(long_tier >= short_tier);
    }
}

#[test]
fn test_empty_prompt_is_valid() {
    for unit in [0.0, 0.25, 0.5, 0.75, 0.999_999, 1.0, 1.2] {
        let tier = rarity_for_roll("", unit);
        assert!(Rarity::ALL.contains(&tier));
    }
}

#[test]
fn test_zero_roll_single_word_is_wilted() {
    assert_eq!(rarity_for_roll("orange", 0.0), Rarity::Wilted);
}

#[test]
fn test_table_order_and_weights() {
    let tiers: Vec<Rarity> = RARITY_TABLE.iter().map(|(tier, _)| *tier).collect();
    assert_eq!(tiers, Rarity::ALL.to_vec());
    assert!((Rarity::Wilted.weight() - 0.30).abs() < f64::EPSILON);
    assert!((Rarity::DivineBloom.weight() - 0.001).abs() < f64::EPSILON);
}

#[test]
fn test_draw_distribution_favors_common_tiers() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut wilted = 0;
    let mut divine = 0;
    for _ in 0..10_000 {
        match assign_rarity("apple", &mut rng) {
            Rarity::Wilted => wilted += 1,
            Rarity::DivineBloom => divine += 1,
            _ => {}
        }
    }
    assert!(wilted > 2_500, "expected roughly 30% wilted, got {wilted}");
    assert!(divine < 100, "divine bloom should be rare, got {divine}");
}
