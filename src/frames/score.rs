use super::types::StabilityCategory;

/// Nominal full-scale value of each environmental index.
pub const INDEX_SCALE: f64 = 100.0;
/// Scores at or below this are `stable`.
pub const STABLE_MAX_SCORE: f64 = 0.5;
/// Scores above the stable band and at or below this are `alert`.
pub const ALERT_MAX_SCORE: f64 = 0.75;

/// Combined-deviation score of one sample: the Euclidean norm of the four
/// indices, each normalized against [`INDEX_SCALE`].
///
/// This is not a probability. With indices in their expected [0,100] range
/// the score stays at or below 2.0, but out-of-range feed values are passed
/// through rather than clamped.
#[must_use]
pub fn stability_score(gaqi: f64, gei: f64, tci: f64, sri: f64) -> f64 {
    let norm = |value: f64| value / INDEX_SCALE;
    (norm(gaqi).powi(2) + norm(gei).powi(2) + norm(tci).powi(2) + norm(sri).powi(2)).sqrt()
}

/// Maps a score to its stability band. Band upper bounds are inclusive, so
/// boundary scores belong to the lower band.
#[must_use]
pub fn classify(score: f64) -> StabilityCategory {
    if score <= STABLE_MAX_SCORE {
        StabilityCategory::Stable
    } else if score <= ALERT_MAX_SCORE {
        StabilityCategory::Alert
    } else {
        StabilityCategory::Unstable
    }
}
