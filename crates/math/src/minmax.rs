//! Cohort min-max scaling.

use ndarray::Array1;

/// Scaled value every observation receives when a cohort's range is
/// degenerate (all values identical, or cohort size ≤ 1).
///
/// The midpoint of the output range: a constant factor carries no
/// discriminating signal, so every record gets the same neutral value and
/// the factor cannot reorder the ranking. A naive `(x - min) / (max - min)`
/// would put NaN into every downstream score instead.
pub const DEGENERATE_FALLBACK: f64 = 0.5;

/// Observed [min, max] of one factor over a cohort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorRange {
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
}

impl FactorRange {
    /// Compute the range of a set of values.
    ///
    /// Returns `None` for empty input.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    /// Width of the range.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the range carries no discriminating signal.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0
    }
}

/// Min-max scaler mapping a cohort onto [0, 1].
///
/// The cohort minimum maps to 0 and the maximum to 1; a degenerate range
/// maps every value to the configured fallback constant.
#[derive(Debug, Clone, Copy)]
pub struct MinMaxScaler {
    /// Value substituted when the range is degenerate.
    pub fallback: f64,
}

impl MinMaxScaler {
    /// Create a scaler with an explicit degenerate fallback.
    #[must_use]
    pub const fn new(fallback: f64) -> Self {
        Self { fallback }
    }

    /// Scale one value against a precomputed cohort range.
    #[must_use]
    pub fn scale(&self, range: FactorRange, value: f64) -> f64 {
        if range.is_degenerate() {
            self.fallback
        } else {
            (value - range.min) / range.width()
        }
    }

    /// Scale an entire array against its own range.
    #[must_use]
    pub fn apply(&self, data: &Array1<f64>) -> Array1<f64> {
        match FactorRange::from_values(data.iter().copied()) {
            Some(range) => data.mapv(|v| self.scale(range, v)),
            None => data.clone(),
        }
    }
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new(DEGENERATE_FALLBACK)
    }
}
