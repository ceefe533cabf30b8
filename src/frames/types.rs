use std::fmt;

/// Stability classification of one historical sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilityCategory {
    Stable,
    Alert,
    Unstable,
}

impl StabilityCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StabilityCategory::Stable => "stable",
            StabilityCategory::Alert => "alert",
            StabilityCategory::Unstable => "unstable",
        }
    }
}

impl fmt::Display for StabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified sample. The scatter plane maps `gaqi` to x and `gei` to y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityPoint {
    pub gaqi: f64,
    pub gei: f64,
    pub tci: f64,
    pub sri: f64,
    pub score: f64,
    pub status: StabilityCategory,
}

/// Points sharing one historical timestamp slot.
///
/// The builder currently emits exactly one point per non-dropped snapshot,
/// but the model allows many.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Unix timestamp in seconds, when the feed supplied one.
    pub timestamp: Option<i64>,
    pub points: Vec<StabilityPoint>,
}

/// Inclusive TCI/SRI ranges applied before rendering a frame.
///
/// Inverted ranges (`min > max`) are valid and simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterBounds {
    pub tci_min: f64,
    pub tci_max: f64,
    pub sri_min: f64,
    pub sri_max: f64,
}

impl FilterBounds {
    /// Full nominal index range; filtering with it keeps every point whose
    /// indices sit in [0,100].
    pub const FULL: Self = Self {
        tci_min: 0.0,
        tci_max: 100.0,
        sri_min: 0.0,
        sri_max: 100.0,
    };

    #[must_use]
    pub fn contains(&self, point: &StabilityPoint) -> bool {
        point.tci >= self.tci_min
            && point.tci <= self.tci_max
            && point.sri >= self.sri_min
            && point.sri <= self.sri_max
    }
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self::FULL
    }
}
