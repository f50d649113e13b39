#![forbid(unsafe_code)]

pub mod amadeus;
pub mod config;
pub mod health;
pub mod risk_config;

pub fn infra_bootstrapped() -> bool {
    liquidity_core::crate_bootstrapped()
}
