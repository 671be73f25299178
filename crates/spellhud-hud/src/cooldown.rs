//! Cooldown bar progress.

/// Fraction of a spell's cooldown removed by each wand upgrade.
pub const COOLDOWN_REDUCTION_PER_LEVEL: f32 = 0.15;

/// Factor applied to a spell's base cooldown.
///
/// Upgrades shorten it linearly; the mana-boosting effect then divides it by
/// `2 + amplifier`, so both stack.
pub fn cooldown_multiplier(upgrade_level: u32, mana_boost_amplifier: Option<u32>) -> f32 {
    let mut multiplier = 1.0 - upgrade_level as f32 * COOLDOWN_REDUCTION_PER_LEVEL;
    if let Some(amplifier) = mana_boost_amplifier {
        multiplier /= 2.0 + amplifier as f32;
    }
    multiplier
}

/// Filled fraction of the cooldown bar, clamped to `[0, 1]`.
///
/// `partial_ticks` is how far the current tick has advanced, which keeps the
/// bar moving smoothly between ticks. A spell whose effective cooldown is
/// zero is always full.
pub fn cooldown_progress(
    base_cooldown: u32,
    remaining: u32,
    multiplier: f32,
    partial_ticks: f32,
) -> f32 {
    let effective = base_cooldown as f32 * multiplier;
    if effective <= 0.0 {
        return 1.0;
    }
    ((effective - remaining as f32 + partial_ticks) / effective).clamp(0.0, 1.0)
}
