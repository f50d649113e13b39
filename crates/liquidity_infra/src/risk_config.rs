//! Risk matrix configuration loading.
//!
//! The airline risk matrix is loaded once at process start (or injected for
//! tests) from a JSON document:
//!
//! ```json
//! { "default_weight": 0.9, "weights": { "LA": 0.1, "IB": 0.2 } }
//! ```
//!
//! Weight validation is owned by the core [`RiskMatrix`] constructor; this
//! module only maps the wire shape and propagates that check.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use liquidity_core::risk::{DEFAULT_UNKNOWN_AIRLINE_WEIGHT, RiskMatrix, RiskWeightError};

fn default_unknown_weight() -> f64 {
    DEFAULT_UNKNOWN_AIRLINE_WEIGHT
}

/// Wire shape of the risk matrix config document.
#[derive(Debug, Clone, Deserialize)]
pub struct WireRiskMatrix {
    /// Weight for codes absent from `weights`. Defaults to 0.9 when omitted.
    #[serde(default = "default_unknown_weight")]
    pub default_weight: f64,
    /// Airline code to weight in [0, 1].
    pub weights: BTreeMap<String, f64>,
}

/// The matrix document was unparseable or carried an out-of-range weight.
#[derive(Debug)]
pub enum RiskConfigError {
    Decode { detail: String },
    Weight(RiskWeightError),
}

impl fmt::Display for RiskConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskConfigError::Decode { detail } => {
                write!(f, "risk matrix decode failed: {detail}")
            }
            RiskConfigError::Weight(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RiskConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RiskConfigError::Weight(err) => Some(err),
            RiskConfigError::Decode { .. } => None,
        }
    }
}

/// Decode a risk matrix config document, fail-closed on bad weights.
pub fn decode_risk_matrix(payload: &str) -> Result<RiskMatrix, RiskConfigError> {
    let wire: WireRiskMatrix =
        serde_json::from_str(payload).map_err(|err| RiskConfigError::Decode {
            detail: err.to_string(),
        })?;
    RiskMatrix::new(wire.weights, wire.default_weight).map_err(RiskConfigError::Weight)
}
