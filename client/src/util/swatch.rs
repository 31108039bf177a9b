//! Background swatches for the interactive section's "Change Color" button.

#[cfg(test)]
#[path = "swatch_test.rs"]
mod swatch_test;

use rand::Rng;

/// Background tokens the preview widget can switch between.
pub const SWATCHES: [&str; 4] = ["bg-purple-100", "bg-green-100", "bg-blue-100", "bg-yellow-100"];

/// Map a roll in `[0, 1)` onto a swatch. Out-of-range rolls are clamped.
pub fn pick_swatch(roll: f64) -> &'static str {
    let roll = if roll.is_nan() { 0.0 } else { roll.clamp(0.0, 1.0) };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let idx = (roll * SWATCHES.len() as f64) as usize;
    SWATCHES[idx.min(SWATCHES.len() - 1)]
}

/// Pick a swatch uniformly at random.
pub fn random_swatch() -> &'static str {
    pick_swatch(rand::rng().random::<f64>())
}
