mod aggregate;
mod closure;
pub mod views;

pub use aggregate::{analyze_city_performance, CityPerformance};
pub use closure::{recommend_closure, ClosureRecommendation};

/// Ratio with a guarded denominator: a non-positive denominator has no
/// meaningful ratio and yields 0.0.
pub(crate) fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Normalization denominators are floored to 1.0 when non-positive so a
/// degenerate maximum cannot flip the sign of a composite score.
pub(crate) fn normalization_floor(value: f64) -> f64 {
    if value <= 0.0 {
        1.0
    } else {
        value
    }
}
