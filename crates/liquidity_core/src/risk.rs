//! Airline risk matrix.
//!
//! Process-wide static configuration mapping airline code to a settlement
//! risk weight in [0, 1], lower meaning more reliable. Unknown codes resolve
//! to a configured default weight. The matrix is injected into the evaluator
//! so tests can substitute alternates without process-wide mutation.

use std::collections::HashMap;
use std::fmt;

use crate::snapshot::PnrSample;

/// Default weight applied to airline codes absent from the matrix.
pub const DEFAULT_UNKNOWN_AIRLINE_WEIGHT: f64 = 0.9;

/// A weight outside [0, 1] (or non-finite) was supplied at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskWeightError {
    pub airline_code: String,
    pub weight: f64,
}

impl fmt::Display for RiskWeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "risk weight {} for '{}' is outside [0, 1]",
            self.weight, self.airline_code
        )
    }
}

impl std::error::Error for RiskWeightError {}

/// Fixed mapping from airline code to risk weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskMatrix {
    weights: HashMap<String, f64>,
    default_weight: f64,
}

fn weight_valid(weight: f64) -> bool {
    weight.is_finite() && (0.0..=1.0).contains(&weight)
}

impl RiskMatrix {
    /// Build a matrix from explicit weights, fail-closed on any weight
    /// outside [0, 1].
    pub fn new(
        weights: impl IntoIterator<Item = (String, f64)>,
        default_weight: f64,
    ) -> Result<Self, RiskWeightError> {
        if !weight_valid(default_weight) {
            return Err(RiskWeightError {
                airline_code: "<default>".to_string(),
                weight: default_weight,
            });
        }
        let mut map = HashMap::new();
        for (code, weight) in weights {
            if !weight_valid(weight) {
                return Err(RiskWeightError {
                    airline_code: code,
                    weight,
                });
            }
            map.insert(code, weight);
        }
        Ok(Self {
            weights: map,
            default_weight,
        })
    }

    /// The shipped tier-1 carrier matrix.
    pub fn tier1_default() -> Self {
        let weights = [
            ("LA", 0.1), // LATAM
            ("AA", 0.1), // American
            ("IB", 0.2), // Iberia
            ("AF", 0.2), // Air France
            ("XX", 0.9), // Low cost / charter
        ]
        .into_iter()
        .map(|(code, weight)| (code.to_string(), weight));
        Self::new(weights, DEFAULT_UNKNOWN_AIRLINE_WEIGHT)
            .unwrap_or_else(|_| unreachable!("builtin weights are in range"))
    }

    /// Weight for an airline code; unknown codes get the default weight.
    pub fn lookup(&self, airline_code: &str) -> f64 {
        self.weights
            .get(airline_code)
            .copied()
            .unwrap_or(self.default_weight)
    }

    /// Default weight applied to unmapped codes.
    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }
}

/// Arithmetic mean of the matrix weights over a booking sample, in sample
/// order. Returns `None` for an empty sample; the caller owns that policy.
pub fn average_sample_risk(matrix: &RiskMatrix, sample: &[PnrSample]) -> Option<f64> {
    if sample.is_empty() {
        return None;
    }
    let total: f64 = sample
        .iter()
        .map(|pnr| matrix.lookup(&pnr.airline_code))
        .sum();
    Some(total / sample.len() as f64)
}
