//! Funding dispatch tests.
//!
//! The provider call is the single side effect: it happens on exactly one
//! path, at most once per evaluation, carries the gap as principal, and its
//! failure surfaces as a typed error rather than a business rejection.

mod common;

use common::{RecordingProvider, snapshot_with};
use liquidity_core::evaluator::{
    Decision, EvaluateError, EvaluatorConfig, EvaluatorMetrics, evaluate,
};
use liquidity_core::funding::LOAN_ASSET_SYMBOL;
use liquidity_core::risk::RiskMatrix;

#[test]
fn test_funding_request_carries_gap_usdc_and_collateral_proof() {
    let matrix = RiskMatrix::tier1_default();
    let provider = RecordingProvider::succeeding("0xbeef");
    let mut metrics = EvaluatorMetrics::new();

    let snapshot = snapshot_with(10_000.0, 2_000.0, 10_000.0, &["LA", "AA", "IB"]);
    let out = evaluate(
        &snapshot,
        &matrix,
        &EvaluatorConfig::default(),
        &provider,
        &mut metrics,
    );
    assert!(matches!(out, Ok(Decision::LoanRequested { .. })));

    let calls = provider.calls.borrow();
    assert_eq!(calls.len(), 1, "provider must be called exactly once");
    let request = &calls[0];
    assert_eq!(request.amount_usd, 8_000.0);
    assert_eq!(request.asset_symbol, LOAN_ASSET_SYMBOL);
    assert_eq!(request.collateral_proof, "AGY-001");
}

#[test]
fn test_funding_failure_surfaces_distinct_from_rejected() {
    let matrix = RiskMatrix::tier1_default();
    let provider = RecordingProvider::failing("pool liquidity exhausted");
    let mut metrics = EvaluatorMetrics::new();

    let snapshot = snapshot_with(10_000.0, 2_000.0, 10_000.0, &["LA", "AA", "IB"]);
    let out = evaluate(
        &snapshot,
        &matrix,
        &EvaluatorConfig::default(),
        &provider,
        &mut metrics,
    );
    match out {
        Err(EvaluateError::FundingFailed(err)) => {
            assert_eq!(err.reason, "pool liquidity exhausted");
        }
        other => panic!("expected FundingFailed, got {other:?}"),
    }

    // One attempt, no retry, and the failure is not a business rejection.
    assert_eq!(provider.call_count(), 1);
    assert_eq!(metrics.funding_failed_total(), 1);
    assert_eq!(metrics.rejected_total(), 0);
    assert_eq!(metrics.loan_requested_total(), 0);
}

#[test]
fn test_identical_snapshots_yield_identical_decisions() {
    let matrix = RiskMatrix::tier1_default();
    let config = EvaluatorConfig::default();
    let snapshot = snapshot_with(10_000.0, 2_000.0, 10_000.0, &["LA", "AA", "IB"]);

    let provider = RecordingProvider::succeeding("0xbeef");
    let mut metrics = EvaluatorMetrics::new();
    let first = evaluate(&snapshot, &matrix, &config, &provider, &mut metrics).unwrap();
    let second = evaluate(&snapshot, &matrix, &config, &provider, &mut metrics).unwrap();
    assert_eq!(first, second);
    // Each evaluation re-runs the funding call; only the decision is
    // idempotent, the side effect is per-call.
    assert_eq!(provider.call_count(), 2);

    // Non-funding paths are side-effect free on repeat as well.
    let provider = RecordingProvider::succeeding("0xbeef");
    let mut metrics = EvaluatorMetrics::new();
    let rejected = snapshot_with(10_000.0, 2_000.0, 10_000.0, &["XX", "XX"]);
    let first = evaluate(&rejected, &matrix, &config, &provider, &mut metrics).unwrap();
    let second = evaluate(&rejected, &matrix, &config, &provider, &mut metrics).unwrap();
    assert_eq!(first, second);
    assert_eq!(provider.call_count(), 0);
}

#[test]
fn test_snapshot_is_not_mutated_by_evaluation() {
    let matrix = RiskMatrix::tier1_default();
    let provider = RecordingProvider::succeeding("0xbeef");
    let mut metrics = EvaluatorMetrics::new();

    let snapshot = snapshot_with(10_000.0, 2_000.0, 10_000.0, &["LA", "AA", "IB"]);
    let before = snapshot.clone();
    let _ = evaluate(
        &snapshot,
        &matrix,
        &EvaluatorConfig::default(),
        &provider,
        &mut metrics,
    );
    assert_eq!(snapshot, before);
}
