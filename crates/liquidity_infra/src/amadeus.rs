//! Amadeus agency feed response structs.
//!
//! These structs model the agency liquidity feed as the upstream system
//! returns it. They are the raw wire representation; downstream code
//! converts them into the core [`AgencySnapshot`] before evaluation. Numeric
//! domain checks live in the core validator, not here — decoding accepts
//! whatever the wire carries.

use std::fmt;

use serde::Deserialize;

use liquidity_core::snapshot::{
    AgencyProfile, AgencySnapshot, FinancialPosition, PnrSample, ReceivablesSummary,
};

/// `financial_snapshot` object of the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct WireFinancialSnapshot {
    /// Outstanding BSP settlement debt in USD.
    pub bsp_total_debt_usd: f64,
    /// Current cash balance in USD.
    pub current_cash_balance_usd: f64,
}

/// `confirmed_future_bookings.summary` object.
#[derive(Debug, Clone, Deserialize)]
pub struct WireBookingSummary {
    /// Aggregate value of confirmed future bookings in USD.
    pub total_receivables_usd: f64,
}

/// One entry of `confirmed_future_bookings.pnr_samples`.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePnrSample {
    /// Operating airline designator for the sampled PNR.
    pub airline: String,
}

/// `confirmed_future_bookings` object of the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct WireConfirmedBookings {
    pub summary: WireBookingSummary,
    /// Ordered sample of confirmed PNRs. May be empty.
    #[serde(default)]
    pub pnr_samples: Vec<WirePnrSample>,
}

/// `agency_profile` object of the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct WireAgencyProfile {
    /// Opaque agency identifier, passed downstream as collateral proof.
    pub agency_id: String,
}

/// Top-level agency feed record.
#[derive(Debug, Clone, Deserialize)]
pub struct WireAgencyRecord {
    pub agency_profile: WireAgencyProfile,
    pub financial_snapshot: WireFinancialSnapshot,
    pub confirmed_future_bookings: WireConfirmedBookings,
}

impl WireAgencyRecord {
    /// Convert the wire record into the core snapshot type.
    pub fn into_snapshot(self) -> AgencySnapshot {
        AgencySnapshot {
            profile: AgencyProfile {
                agency_id: self.agency_profile.agency_id,
            },
            financial_position: FinancialPosition {
                bsp_total_debt_usd: self.financial_snapshot.bsp_total_debt_usd,
                current_cash_balance_usd: self.financial_snapshot.current_cash_balance_usd,
            },
            receivables: ReceivablesSummary {
                total_receivables_usd: self
                    .confirmed_future_bookings
                    .summary
                    .total_receivables_usd,
            },
            booking_sample: self
                .confirmed_future_bookings
                .pnr_samples
                .into_iter()
                .map(|pnr| PnrSample {
                    airline_code: pnr.airline,
                })
                .collect(),
        }
    }
}

/// The feed payload could not be parsed into an agency record.
#[derive(Debug)]
pub struct SnapshotDecodeError {
    pub detail: String,
}

impl fmt::Display for SnapshotDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agency feed decode failed: {}", self.detail)
    }
}

impl std::error::Error for SnapshotDecodeError {}

/// Decode one agency feed payload into a core snapshot.
pub fn decode_agency_snapshot(payload: &str) -> Result<AgencySnapshot, SnapshotDecodeError> {
    let record: WireAgencyRecord =
        serde_json::from_str(payload).map_err(|err| SnapshotDecodeError {
            detail: err.to_string(),
        })?;
    Ok(record.into_snapshot())
}
