//! Liquidity gap gate.
//!
//! Turns one agency snapshot into a funding decision via a risk-weighted
//! collateral test:
//! 1. `gap = bsp_total_debt_usd - current_cash_balance_usd`; `gap <= 0`
//!    means no crunch and is the only early exit.
//! 2. `collateral_ratio = total_receivables_usd / gap` (gap > 0 here).
//! 3. `avg_risk` = mean matrix weight over the PNR sample, in sample order.
//! 4. Fund iff `collateral_ratio >= min_collateral_ratio` (inclusive floor)
//!    and `avg_risk < max_acceptable_risk` (exclusive ceiling).
//!
//! The funding call is the only side effect, happens on at most one path,
//! at most once per call. No state is retained across calls.

use std::fmt;

use crate::funding::{
    FundingError, FundingProvider, LOAN_ASSET_SYMBOL, LoanRequest, TransactionReference,
};
use crate::risk::{RiskMatrix, average_sample_risk};
use crate::snapshot::{AgencySnapshot, SnapshotError, validate_snapshot};

/// Decision thresholds. Configuration, never derived from the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorConfig {
    /// Minimum receivables coverage of the gap; inclusive (`>=`).
    pub min_collateral_ratio: f64,
    /// Maximum tolerated average sample risk; exclusive (`<`).
    pub max_acceptable_risk: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            min_collateral_ratio: 1.20,
            max_acceptable_risk: 0.5,
        }
    }
}

fn config_valid(config: &EvaluatorConfig) -> bool {
    config.min_collateral_ratio.is_finite()
        && config.min_collateral_ratio > 0.0
        && config.max_acceptable_risk.is_finite()
        && config.max_acceptable_risk > 0.0
        && config.max_acceptable_risk <= 1.0
}

/// Computed intermediates, carried on every decision for observability.
///
/// `collateral_ratio` and `avg_risk` are `None` on the healthy path, where
/// they are never computed.
#[derive(Debug, Clone, PartialEq)]
pub struct GapDiagnostics {
    pub gap_usd: f64,
    pub collateral_ratio: Option<f64>,
    pub avg_risk: Option<f64>,
}

/// Contract token for business rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReasonCode {
    HighRiskOrLowCollateral,
}

impl RejectReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReasonCode::HighRiskOrLowCollateral => "high_risk_or_low_collateral",
        }
    }
}

/// Outcome of one evaluation. Constructed fresh per call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// No liquidity gap detected; nothing to do.
    Healthy { diagnostics: GapDiagnostics },
    /// Gap detected but the collateral/risk test failed.
    Rejected {
        reason: RejectReasonCode,
        diagnostics: GapDiagnostics,
    },
    /// Gap detected, test passed, loan submitted.
    LoanRequested {
        /// Requested principal; equals the gap.
        amount_usd: f64,
        tx_reference: TransactionReference,
        diagnostics: GapDiagnostics,
    },
}

/// Typed evaluation failures. None of these is ever folded into a
/// `Healthy` or `Rejected` decision.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluateError {
    /// A required snapshot field is missing its domain.
    InvalidSnapshot(SnapshotError),
    /// A threshold is non-finite or out of range.
    InvalidConfig { reason: &'static str },
    /// Positive gap but zero sampled bookings: no evidence to price risk on.
    EmptyBookingSample,
    /// The decision was to fund, but the provider call failed.
    FundingFailed(FundingError),
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluateError::InvalidSnapshot(err) => write!(f, "{err}"),
            EvaluateError::InvalidConfig { reason } => {
                write!(f, "invalid evaluator config: {reason}")
            }
            EvaluateError::EmptyBookingSample => {
                write!(f, "booking sample is empty; cannot price portfolio risk")
            }
            EvaluateError::FundingFailed(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EvaluateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluateError::InvalidSnapshot(err) => Some(err),
            EvaluateError::FundingFailed(err) => Some(err),
            _ => None,
        }
    }
}

/// Outcome counters for the evaluator.
#[derive(Debug, Default)]
pub struct EvaluatorMetrics {
    healthy_total: u64,
    rejected_total: u64,
    loan_requested_total: u64,
    funding_failed_total: u64,
    invalid_snapshot_total: u64,
}

impl EvaluatorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn healthy_total(&self) -> u64 {
        self.healthy_total
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected_total
    }

    pub fn loan_requested_total(&self) -> u64 {
        self.loan_requested_total
    }

    pub fn funding_failed_total(&self) -> u64 {
        self.funding_failed_total
    }

    pub fn invalid_snapshot_total(&self) -> u64 {
        self.invalid_snapshot_total
    }

    fn record_healthy(&mut self) {
        self.healthy_total += 1;
    }

    fn record_rejected(&mut self) {
        self.rejected_total += 1;
    }

    fn record_loan_requested(&mut self) {
        self.loan_requested_total += 1;
    }

    fn record_funding_failed(&mut self) {
        self.funding_failed_total += 1;
    }

    fn record_invalid_snapshot(&mut self) {
        self.invalid_snapshot_total += 1;
    }
}

/// Evaluate one agency snapshot against the liquidity gap gate.
///
/// Deterministic, stateless, no I/O except the single funding call on the
/// passing path. Validation failures return before any computation; a
/// funding failure surfaces as [`EvaluateError::FundingFailed`] rather than
/// being downgraded to `Rejected` (the business decision *was* to fund).
pub fn evaluate(
    snapshot: &AgencySnapshot,
    matrix: &RiskMatrix,
    config: &EvaluatorConfig,
    provider: &dyn FundingProvider,
    metrics: &mut EvaluatorMetrics,
) -> Result<Decision, EvaluateError> {
    if !config_valid(config) {
        return Err(EvaluateError::InvalidConfig {
            reason: "thresholds must be finite, ratio floor > 0, risk ceiling in (0, 1]",
        });
    }

    if let Err(err) = validate_snapshot(snapshot) {
        metrics.record_invalid_snapshot();
        return Err(EvaluateError::InvalidSnapshot(err));
    }

    let fin = &snapshot.financial_position;
    let gap_usd = fin.bsp_total_debt_usd - fin.current_cash_balance_usd;

    tracing::debug!(
        "LiquidityPosition agency={} debt_usd={} cash_usd={} gap_usd={}",
        snapshot.profile.agency_id,
        fin.bsp_total_debt_usd,
        fin.current_cash_balance_usd,
        gap_usd
    );

    if gap_usd <= 0.0 {
        metrics.record_healthy();
        return Ok(Decision::Healthy {
            diagnostics: GapDiagnostics {
                gap_usd,
                collateral_ratio: None,
                avg_risk: None,
            },
        });
    }

    // gap_usd > 0 here, so the division is well-defined.
    let collateral_ratio = snapshot.receivables.total_receivables_usd / gap_usd;

    let avg_risk = match average_sample_risk(matrix, &snapshot.booking_sample) {
        Some(v) => v,
        None => return Err(EvaluateError::EmptyBookingSample),
    };

    let diagnostics = GapDiagnostics {
        gap_usd,
        collateral_ratio: Some(collateral_ratio),
        avg_risk: Some(avg_risk),
    };

    tracing::debug!(
        "CollateralTest agency={} collateral_ratio={} avg_risk={} min_ratio={} max_risk={}",
        snapshot.profile.agency_id,
        collateral_ratio,
        avg_risk,
        config.min_collateral_ratio,
        config.max_acceptable_risk
    );

    // Inclusive on the collateral floor, exclusive on the risk ceiling:
    // avg_risk exactly at the ceiling is rejected.
    if collateral_ratio >= config.min_collateral_ratio && avg_risk < config.max_acceptable_risk {
        let request = LoanRequest {
            amount_usd: gap_usd,
            asset_symbol: LOAN_ASSET_SYMBOL,
            collateral_proof: snapshot.profile.agency_id.clone(),
        };
        match provider.request_loan(&request) {
            Ok(tx_reference) => {
                metrics.record_loan_requested();
                Ok(Decision::LoanRequested {
                    amount_usd: gap_usd,
                    tx_reference,
                    diagnostics,
                })
            }
            Err(err) => {
                metrics.record_funding_failed();
                Err(EvaluateError::FundingFailed(err))
            }
        }
    } else {
        metrics.record_rejected();
        Ok(Decision::Rejected {
            reason: RejectReasonCode::HighRiskOrLowCollateral,
            diagnostics,
        })
    }
}
