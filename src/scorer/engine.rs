use super::types::{ScoreDetails, ScoreInput};
use tracing::debug;

/// Cleanliness marks are out of ten.
pub const CLEANLINESS_SCALE: f64 = 10.0;

/// Multiplier for the n-th occurrence (1-based) of the same element.
/// `decay[0]` applies to the 2nd occurrence; anything past the table is 0.
#[inline(always)]
pub fn repetition_factor(occurrence: u32, decay: &[f64]) -> f64 {
    match occurrence {
        0 | 1 => 1.0,
        n => decay.get((n - 2) as usize).copied().unwrap_or(0.0),
    }
}

/// Score one element.
///
/// Order matters: position, difficulty and cleanliness multiply the base,
/// extras are added unscaled, then repetition decay applies to the sum.
/// Statics never decay.
pub fn compute(
    input: &ScoreInput,
    occurrence: u32,
    difficulty_multiplier: f64,
    decay: &[f64],
) -> ScoreDetails {
    let base_points = input.base.base();
    let position_factor = input.base.position_factor();
    let cleanliness_factor = f64::from(input.cleanliness) / CLEANLINESS_SCALE;
    let extra_points = input.extra.points();

    let mut score = base_points * position_factor;
    score *= difficulty_multiplier;
    score *= cleanliness_factor;
    score += extra_points;

    let repetition_factor = if input.category.decays_on_repeat() {
        repetition_factor(occurrence, decay)
    } else {
        1.0
    };
    score *= repetition_factor;

    let score = score.max(0.0);
    debug!(
        "{} #{}: {:.3} x{} x{} x{:.1} +{} x{} = {:.4}",
        input.category,
        occurrence,
        base_points,
        position_factor,
        difficulty_multiplier,
        cleanliness_factor,
        extra_points,
        repetition_factor,
        score
    );

    ScoreDetails {
        base_points,
        position_factor,
        difficulty_factor: difficulty_multiplier,
        cleanliness_factor,
        extra_points,
        occurrence,
        repetition_factor,
        score,
    }
}
