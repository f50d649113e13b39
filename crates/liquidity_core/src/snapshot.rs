//! Agency snapshot input types and fail-fast validation.
//!
//! The snapshot is a pre-fetched, read-only view of one agency's finances
//! and a sample of its confirmed future bookings. The evaluator borrows it
//! and never mutates it; how it was obtained is the snapshot source's
//! concern, not this crate's.

use std::fmt;

/// Short-term financial position against the BSP clearing house.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialPosition {
    /// Outstanding BSP settlement debt in USD. Must be finite and non-negative.
    pub bsp_total_debt_usd: f64,
    /// Current cash balance in USD. Must be finite; may be negative.
    pub current_cash_balance_usd: f64,
}

/// Aggregate value of confirmed future bookings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivablesSummary {
    /// Total confirmed receivables in USD. Must be finite and non-negative.
    pub total_receivables_usd: f64,
}

/// One sampled PNR: the operating airline of a confirmed future booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PnrSample {
    /// Two-letter airline designator (e.g. "LA", "IB").
    pub airline_code: String,
}

/// Agency identity, carried through as collateral proof only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencyProfile {
    /// Opaque agency identifier; never interpreted by the evaluator.
    pub agency_id: String,
}

/// Immutable input record for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct AgencySnapshot {
    pub profile: AgencyProfile,
    pub financial_position: FinancialPosition,
    pub receivables: ReceivablesSummary,
    /// Ordered sample of confirmed future bookings. May be empty; the
    /// evaluator decides what an empty sample means.
    pub booking_sample: Vec<PnrSample>,
}

/// A required snapshot field is missing its domain (non-finite or negative
/// where non-negative is required).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid snapshot: '{}' {}", self.field, self.reason)
    }
}

impl std::error::Error for SnapshotError {}

fn require_finite(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    if !value.is_finite() {
        return Err(SnapshotError {
            field,
            reason: "is non-finite (NaN or Infinity)",
        });
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    if value < 0.0 {
        return Err(SnapshotError {
            field,
            reason: "is negative",
        });
    }
    Ok(())
}

/// Validate the numeric fields of a snapshot before any computation.
///
/// Fails fast on the first bad field; no partial decision is ever derived
/// from a snapshot that does not pass this check. A negative cash balance
/// is valid (an overdrawn agency is exactly the interesting case).
pub fn validate_snapshot(snapshot: &AgencySnapshot) -> Result<(), SnapshotError> {
    let fin = &snapshot.financial_position;
    require_finite("bsp_total_debt_usd", fin.bsp_total_debt_usd)?;
    require_non_negative("bsp_total_debt_usd", fin.bsp_total_debt_usd)?;
    require_finite("current_cash_balance_usd", fin.current_cash_balance_usd)?;
    require_finite(
        "total_receivables_usd",
        snapshot.receivables.total_receivables_usd,
    )?;
    require_non_negative(
        "total_receivables_usd",
        snapshot.receivables.total_receivables_usd,
    )?;
    Ok(())
}
