use super::domain::{Component, PerComponent};
use super::normalizers::{finite_or_zero, MAX_SCORE};
use super::weights::ComponentWeights;

/// Weighted mean of the component scores, rounded to a whole number.
///
/// Weights are normalized by their own total, so an unvalidated set still
/// yields a score in range. Component scores outside `[0, 100]` are clamped
/// and non-finite ones count as zero. A zero total weight scores zero.
pub fn aggregate(scores: &PerComponent<f64>, weights: &ComponentWeights) -> u8 {
    let usable_weight = |component: Component| {
        let weight = weights.get(component);
        if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            0.0
        }
    };

    let total_weight: f64 = Component::ALL.into_iter().map(usable_weight).sum();
    if total_weight <= 0.0 {
        return 0;
    }

    let weighted: f64 = scores
        .iter()
        .map(|(component, score)| {
            let score = finite_or_zero(*score).clamp(0.0, MAX_SCORE);
            score * usable_weight(component) / total_weight
        })
        .sum();

    weighted.round().clamp(0.0, MAX_SCORE) as u8
}
