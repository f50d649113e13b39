//! Funding provider seam.
//!
//! The loan executor is an opaque external capability: the evaluator hands
//! it an amount, a settlement asset, and a collateral proof, and echoes the
//! returned transaction reference without interpreting it.

use std::fmt;

/// Settlement asset for all loan requests.
pub const LOAN_ASSET_SYMBOL: &str = "USDC";

/// One short-term loan request, as handed to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRequest {
    /// Requested principal in USD.
    pub amount_usd: f64,
    /// Settlement asset symbol (always [`LOAN_ASSET_SYMBOL`] today).
    pub asset_symbol: &'static str,
    /// Opaque collateral proof (the agency identifier).
    pub collateral_proof: String,
}

/// Opaque reference to the submitted funding transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReference(pub String);

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The provider declined or failed to execute the loan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingError {
    /// Provider identifier for diagnostics (e.g. "aave_v3").
    pub provider: &'static str,
    pub reason: String,
}

impl fmt::Display for FundingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "funding provider '{}' failed: {}", self.provider, self.reason)
    }
}

impl std::error::Error for FundingError {}

/// External loan executor. Called at most once per evaluation, and only on
/// the funding path; the call is synchronous from the evaluator's side.
pub trait FundingProvider {
    fn request_loan(&self, request: &LoanRequest) -> Result<TransactionReference, FundingError>;
}
