//! # torque-distribution — Reward distribution-function evaluation.
//!
//! All amounts are base-10 decimals ([`rust_decimal::Decimal`]) for
//! deterministic money arithmetic.
//!
//! A reward distributor describes how its payout grows over time (or over
//! some other input variable) as a declarative curve:
//! - **Constant**: fixed payout.
//! - **Linear**: payout grows (or shrinks) by a fixed slope.
//! - **Step**: tiered payout thresholds.
//! - **Exponential**: payout decays along `(1 + x/width)^(-depth)`.
//!
//! [`evaluate`] computes the payout at a point on the curve, with the
//! floor/round post-processing the payout pipeline expects.

pub mod error;
pub mod eval;
pub mod spec;

pub use error::EvalError;
pub use eval::evaluate;
pub use spec::{DistributionSpec, FunctionType, Tier, Trend};
