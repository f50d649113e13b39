//! Decision threshold configuration defaults.
//!
//! Each threshold has a builtin default that applies when the parameter is
//! missing at runtime. Explicit values always win, but non-finite or
//! negative explicit values fail closed rather than silently degrading the
//! gate.

use std::fmt;

/// Configuration parameters of the liquidity gap gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigParam {
    /// Minimum receivables coverage of the gap (inclusive floor).
    MinCollateralRatio,
    /// Maximum tolerated average sample risk (exclusive ceiling).
    MaxAcceptableRisk,
    /// Weight applied to airline codes absent from the risk matrix.
    DefaultAirlineRiskWeight,
}

/// Error when a parameter cannot be resolved to a usable value.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingConfigError {
    pub param_name: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for MissingConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config fail-closed: '{}' {}",
            self.param_name, self.reason
        )
    }
}

impl std::error::Error for MissingConfigError {}

/// Builtin default for a parameter, or `None` if it must be supplied.
pub fn builtin_default(param: ConfigParam) -> Option<f64> {
    match param {
        ConfigParam::MinCollateralRatio => Some(1.20),
        ConfigParam::MaxAcceptableRisk => Some(0.5),
        ConfigParam::DefaultAirlineRiskWeight => Some(0.9),
    }
}

/// Snake_case name for a parameter (matches config file keys).
pub fn param_name(param: ConfigParam) -> &'static str {
    match param {
        ConfigParam::MinCollateralRatio => "min_collateral_ratio",
        ConfigParam::MaxAcceptableRisk => "max_acceptable_risk",
        ConfigParam::DefaultAirlineRiskWeight => "default_airline_risk_weight",
    }
}

/// Expected number of ConfigParam variants. Update when adding new variants.
pub const EXPECTED_PARAM_COUNT: usize = 3;

/// All known `ConfigParam` variants (for exhaustive iteration in tests).
pub const ALL_PARAMS: &[ConfigParam] = &[
    ConfigParam::MinCollateralRatio,
    ConfigParam::MaxAcceptableRisk,
    ConfigParam::DefaultAirlineRiskWeight,
];

/// Resolve a configuration value with fail-closed semantics.
///
/// - `Some(v)` takes precedence, but non-finite or negative values fail.
/// - `None` falls back to the builtin default, or fails if there is none.
pub fn resolve_config_value(
    param: ConfigParam,
    value: Option<f64>,
) -> Result<f64, MissingConfigError> {
    if let Some(v) = value {
        if !v.is_finite() {
            return Err(MissingConfigError {
                param_name: param_name(param),
                reason: "is non-finite (NaN or Infinity); fail-closed",
            });
        }
        if v < 0.0 {
            return Err(MissingConfigError {
                param_name: param_name(param),
                reason: "is negative; thresholds must be non-negative",
            });
        }
        return Ok(v);
    }
    builtin_default(param).ok_or_else(|| MissingConfigError {
        param_name: param_name(param),
        reason: "is missing and has no builtin default",
    })
}
