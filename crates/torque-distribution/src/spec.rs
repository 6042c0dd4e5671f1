//! Declarative curve descriptions for reward distributors.
//!
//! A [`DistributionSpec`] is the wire contract between the offer backend
//! (which persists distributor configuration) and anything that needs a
//! payout amount: a camelCase tagged record that external services can
//! produce or consume unchanged. Fields are optional at the data level —
//! each curve kind validates its own requirements at evaluation time, so a
//! malformed record is still representable and fails with a typed error
//! rather than being rejected by the decoder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The shape of a distribution curve.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionType {
    Constant,
    Linear,
    Step,
    Exponential,
    /// Catch-all for kinds this library does not know. Kept at the data
    /// level so the evaluator, not the decoder, reports
    /// [`UnsupportedFunctionType`](crate::EvalError::UnsupportedFunctionType).
    #[serde(other)]
    Unknown,
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FunctionType::Constant => "CONSTANT",
            FunctionType::Linear => "LINEAR",
            FunctionType::Step => "STEP",
            FunctionType::Exponential => "EXPONENTIAL",
            FunctionType::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Direction of growth for a linear curve.
///
/// An absent trend reads as `Positive`: the backend only ever marks curves
/// that shrink.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    #[default]
    Positive,
    Negative,
}

impl Trend {
    /// The multiplier applied to the linear growth term.
    pub fn sign(self) -> Decimal {
        match self {
            Trend::Positive => Decimal::ONE,
            Trend::Negative => -Decimal::ONE,
        }
    }
}

/// A (threshold, payout) pair for the step curve.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier {
    /// Threshold on the independent variable at which this tier activates.
    pub input: Decimal,
    /// Payout once the threshold is reached.
    pub output: Decimal,
}

impl Tier {
    pub fn new(input: Decimal, output: Decimal) -> Self {
        Self { input, output }
    }
}

/// One distribution curve, as persisted by the offer backend.
///
/// Construct via the per-kind helpers ([`constant`](Self::constant),
/// [`linear`](Self::linear), [`step`](Self::step),
/// [`exponential`](Self::exponential)) or deserialize from the wire form.
///
/// `tiers` must arrive in ascending `input` order; the evaluator does not
/// sort them. Ties on `input` resolve to the later tier in sequence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSpec {
    /// Curve kind discriminant.
    #[serde(rename = "type")]
    pub kind: FunctionType,
    /// Value of the curve at `x = 0` (Constant, Linear, Exponential).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_intercept: Option<Decimal>,
    /// Growth per unit of `x` (Linear). An explicit zero is valid and means
    /// "no growth"; absence is an error at evaluation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope: Option<Decimal>,
    /// Growth direction (Linear).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    /// Payout thresholds in ascending `input` order (Step).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<Tier>,
    /// Decay exponent, applied negated (Exponential).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_depth: Option<Decimal>,
    /// Horizontal stretch; must be non-zero (Exponential).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_width: Option<Decimal>,
}

impl DistributionSpec {
    fn bare(kind: FunctionType) -> Self {
        Self {
            kind,
            y_intercept: None,
            slope: None,
            trend: None,
            tiers: Vec::new(),
            curve_depth: None,
            curve_width: None,
        }
    }

    /// A curve that pays `y_intercept` regardless of `x`.
    pub fn constant(y_intercept: Decimal) -> Self {
        Self {
            y_intercept: Some(y_intercept),
            ..Self::bare(FunctionType::Constant)
        }
    }

    /// A curve that pays `y_intercept + slope * x`, negated when the trend
    /// is [`Trend::Negative`].
    pub fn linear(y_intercept: Decimal, slope: Decimal, trend: Trend) -> Self {
        Self {
            y_intercept: Some(y_intercept),
            slope: Some(slope),
            trend: Some(trend),
            ..Self::bare(FunctionType::Linear)
        }
    }

    /// A tiered curve. `tiers` must be in ascending `input` order.
    pub fn step(tiers: Vec<Tier>) -> Self {
        Self {
            tiers,
            ..Self::bare(FunctionType::Step)
        }
    }

    /// A curve that pays `y_intercept * (1 + x/curve_width)^(-curve_depth)`.
    pub fn exponential(y_intercept: Decimal, curve_depth: Decimal, curve_width: Decimal) -> Self {
        Self {
            y_intercept: Some(y_intercept),
            curve_depth: Some(curve_depth),
            curve_width: Some(curve_width),
            ..Self::bare(FunctionType::Exponential)
        }
    }
}
