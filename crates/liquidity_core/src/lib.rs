#![forbid(unsafe_code)]

pub mod evaluator;
pub mod funding;
pub mod risk;
pub mod snapshot;

pub fn crate_bootstrapped() -> bool {
    true
}
