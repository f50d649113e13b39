use std::cell::RefCell;

use liquidity_core::funding::{
    FundingError, FundingProvider, LoanRequest, TransactionReference,
};
use liquidity_core::snapshot::{
    AgencyProfile, AgencySnapshot, FinancialPosition, PnrSample, ReceivablesSummary,
};

/// Test helper: funding provider that records every request and answers
/// from a canned script.
///
/// Default construction succeeds with a fixed transaction reference; use
/// [`RecordingProvider::failing`] for the failure path.
pub struct RecordingProvider {
    pub calls: RefCell<Vec<LoanRequest>>,
    outcome: Result<TransactionReference, FundingError>,
}

impl RecordingProvider {
    pub fn succeeding(tx_reference: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            outcome: Ok(TransactionReference(tx_reference.to_string())),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            outcome: Err(FundingError {
                provider: "test_provider",
                reason: reason.to_string(),
            }),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl FundingProvider for RecordingProvider {
    fn request_loan(&self, request: &LoanRequest) -> Result<TransactionReference, FundingError> {
        self.calls.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}

/// Test helper: snapshot with the given financials and airline codes.
pub fn snapshot_with(
    debt_usd: f64,
    cash_usd: f64,
    receivables_usd: f64,
    airline_codes: &[&str],
) -> AgencySnapshot {
    AgencySnapshot {
        profile: AgencyProfile {
            agency_id: "AGY-001".to_string(),
        },
        financial_position: FinancialPosition {
            bsp_total_debt_usd: debt_usd,
            current_cash_balance_usd: cash_usd,
        },
        receivables: ReceivablesSummary {
            total_receivables_usd: receivables_usd,
        },
        booking_sample: airline_codes
            .iter()
            .map(|code| PnrSample {
                airline_code: (*code).to_string(),
            })
            .collect(),
    }
}
