//! The distribution-function evaluator.
//!
//! [`evaluate`] is a pure function: no I/O, no logging, no shared state.
//! It is called on hot paths (one call per reward card per render), so the
//! work is a handful of decimal operations per invocation.
//!
//! Rounding policy: points/asymmetric mode floors toward negative infinity;
//! otherwise an explicit `decimals` count rounds half-away-from-zero, the
//! same midpoint rule the payout backend applies when persisting amounts.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::error::EvalError;
use crate::spec::{DistributionSpec, FunctionType};

/// Evaluate `spec` at `x` and post-process the raw amount.
///
/// - `asymmetric_or_points` — the caller pays in whole units (points or an
///   asymmetric distribution): the raw amount is floored to an integer and
///   `decimals` is ignored.
/// - `decimals` — the token's display precision. `Some(dp)` rounds the raw
///   amount to `dp` fractional digits half-away-from-zero; `None` returns
///   it unrounded. `Some(0)` rounds to a whole number.
///
/// Errors are deterministic input-validation failures; see [`EvalError`].
pub fn evaluate(
    spec: &DistributionSpec,
    x: Decimal,
    asymmetric_or_points: bool,
    decimals: Option<u32>,
) -> Result<Decimal, EvalError> {
    let raw = raw_output(spec, x)?;

    let amount = if asymmetric_or_points {
        raw.floor()
    } else if let Some(dp) = decimals {
        raw.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    } else {
        raw
    };

    Ok(amount)
}

/// The curve value before any rounding.
fn raw_output(spec: &DistributionSpec, x: Decimal) -> Result<Decimal, EvalError> {
    match spec.kind {
        FunctionType::Constant => spec
            .y_intercept
            .ok_or(EvalError::MissingParameter("yIntercept")),

        FunctionType::Linear => {
            let y_intercept = spec
                .y_intercept
                .ok_or(EvalError::MissingParameter("yIntercept"))?;
            let slope = spec.slope.ok_or(EvalError::MissingParameter("slope"))?;
            let sign = spec.trend.unwrap_or_default().sign();

            slope
                .checked_mul(x)
                .and_then(|growth| growth.checked_mul(sign))
                .and_then(|growth| y_intercept.checked_add(growth))
                .ok_or(EvalError::Overflow)
        }

        FunctionType::Step => {
            if spec.tiers.is_empty() {
                return Err(EvalError::EmptyTierList);
            }

            // Tiers arrive sorted ascending by input; the last tier at or
            // below x wins, and scanning stops at the first tier above x.
            // On an equal input the later tier overwrites the earlier one.
            let mut output = Decimal::ZERO;
            for tier in &spec.tiers {
                if x >= tier.input {
                    output = tier.output;
                } else {
                    break;
                }
            }
            Ok(output)
        }

        FunctionType::Exponential => {
            let y_intercept = spec
                .y_intercept
                .ok_or(EvalError::MissingParameter("yIntercept"))?;
            let curve_depth = spec
                .curve_depth
                .ok_or(EvalError::MissingParameter("curveDepth"))?;
            let curve_width = spec
                .curve_width
                .ok_or(EvalError::MissingParameter("curveWidth"))?;

            if curve_width.is_zero() {
                return Err(EvalError::DivisionByZero);
            }

            let base = x
                .checked_div(curve_width)
                .and_then(|quotient| Decimal::ONE.checked_add(quotient))
                .ok_or(EvalError::Overflow)?;

            // x beyond -curveWidth leaves the real domain: a negative base
            // has no real fractional power, and a zero base under a
            // negative exponent divides by zero.
            if base.is_zero() {
                if curve_depth > Decimal::ZERO {
                    return Err(EvalError::DivisionByZero);
                }
            } else if base.is_sign_negative() && !curve_depth.fract().is_zero() {
                return Err(EvalError::Overflow);
            }

            let factor = base.checked_powd(-curve_depth).ok_or(EvalError::Overflow)?;
            y_intercept.checked_mul(factor).ok_or(EvalError::Overflow)
        }

        FunctionType::Unknown => Err(EvalError::UnsupportedFunctionType),
    }
}
