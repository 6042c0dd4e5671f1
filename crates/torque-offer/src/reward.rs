//! Per-distributor reward estimation for offer rendering.
//!
//! The rendering layer shows one reward card per distributor. Symmetric
//! token distributors evaluate their distribution function at `x = 0` for
//! the current payout estimate; asymmetric and points distributors pay out
//! of the total fund. A distributor that cannot be evaluated yields `None`
//! and the card is hidden — misconfiguration is the backend's problem, not
//! a render failure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use torque_distribution::{DistributionSpec, evaluate};

use crate::token::TokenDetails;

/// Mint address of wrapped SOL, used for SOL-denominated rewards.
pub const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Placeholder "address" for points rewards, which have no mint.
pub const POINTS_LABEL: &str = "Points";

/// What a distributor emits.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmissionType {
    Tokens,
    Sol,
    Points,
}

/// How the payout is split among claimants.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistributorKind {
    #[default]
    Symmetric,
    Asymmetric,
}

/// One reward distributor attached to an offer, in the backend's shape.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Distributor {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: DistributorKind,
    pub emission_type: EmissionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_fund_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_decimals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_function: Option<DistributionSpec>,
}

impl Distributor {
    /// Whether payouts are whole units only (points, or an asymmetric
    /// split of the fund).
    pub fn is_asymmetric_or_points(&self) -> bool {
        self.kind == DistributorKind::Asymmetric || self.emission_type == EmissionType::Points
    }
}

/// Current payout estimate for one distributor.
///
/// Asymmetric and points distributors report their total fund amount;
/// symmetric distributors evaluate the curve at the origin, rounded to the
/// token's decimals. Returns `None` (with a warning) when the distributor
/// has no distribution function or the function is malformed.
pub fn current_reward(distributor: &Distributor) -> Option<Decimal> {
    if distributor.is_asymmetric_or_points() {
        return distributor.total_fund_amount;
    }

    let spec = match &distributor.distribution_function {
        Some(spec) => spec,
        None => {
            warn!(distributor = %distributor.id, "distributor has no distribution function");
            return None;
        }
    };

    match evaluate(spec, Decimal::ZERO, false, distributor.token_decimals) {
        Ok(amount) => Some(amount),
        Err(err) => {
            warn!(
                distributor = %distributor.id,
                kind = %spec.kind,
                %err,
                "distribution function rejected"
            );
            None
        }
    }
}

/// The address (or placeholder) identifying what this distributor pays in.
pub fn reward_token_address(distributor: &Distributor) -> Option<&str> {
    match distributor.emission_type {
        EmissionType::Tokens => distributor.token_address.as_deref(),
        EmissionType::Sol => Some(WRAPPED_SOL_MINT),
        EmissionType::Points => Some(POINTS_LABEL),
    }
}

/// Approximate fiat value of a reward amount.
pub fn fiat_value(amount: Decimal, token: &TokenDetails) -> Decimal {
    amount * token.usdc_per_token
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use torque_distribution::Trend;

    fn symmetric_tokens(spec: Option<DistributionSpec>) -> Distributor {
        Distributor {
            id: "distro-1".into(),
            kind: DistributorKind::Symmetric,
            emission_type: EmissionType::Tokens,
            total_fund_amount: Some(dec!(100000)),
            token_decimals: Some(6),
            token_address: Some("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".into()),
            distribution_function: spec,
        }
    }

    // ------------------------------------------------------------------
    // current_reward
    // ------------------------------------------------------------------

    #[test]
    fn symmetric_evaluates_curve_at_origin() {
        let distro = symmetric_tokens(Some(DistributionSpec::linear(
            dec!(12.5),
            dec!(3),
            Trend::Positive,
        )));
        assert_eq!(current_reward(&distro), Some(dec!(12.5)));
    }

    #[test]
    fn symmetric_rounds_to_token_decimals() {
        let mut distro = symmetric_tokens(Some(DistributionSpec::constant(dec!(1.23456789))));
        distro.token_decimals = Some(4);
        assert_eq!(current_reward(&distro), Some(dec!(1.2346)));
    }

    #[test]
    fn asymmetric_reports_total_fund() {
        let mut distro = symmetric_tokens(None);
        distro.kind = DistributorKind::Asymmetric;
        assert_eq!(current_reward(&distro), Some(dec!(100000)));
    }

    #[test]
    fn points_reports_total_fund() {
        let mut distro = symmetric_tokens(Some(DistributionSpec::constant(dec!(5))));
        distro.emission_type = EmissionType::Points;
        assert_eq!(current_reward(&distro), Some(dec!(100000)));
    }

    #[test]
    fn missing_function_hides_reward() {
        assert_eq!(current_reward(&symmetric_tokens(None)), None);
    }

    #[test]
    fn malformed_function_hides_reward() {
        let mut spec = DistributionSpec::linear(dec!(1), dec!(1), Trend::Positive);
        spec.slope = None;
        assert_eq!(current_reward(&symmetric_tokens(Some(spec))), None);
    }

    // ------------------------------------------------------------------
    // reward_token_address
    // ------------------------------------------------------------------

    #[test]
    fn tokens_use_configured_address() {
        let distro = symmetric_tokens(None);
        assert_eq!(
            reward_token_address(&distro),
            Some("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")
        );
    }

    #[test]
    fn sol_uses_wrapped_mint() {
        let mut distro = symmetric_tokens(None);
        distro.emission_type = EmissionType::Sol;
        distro.token_address = None;
        assert_eq!(reward_token_address(&distro), Some(WRAPPED_SOL_MINT));
    }

    #[test]
    fn points_use_label() {
        let mut distro = symmetric_tokens(None);
        distro.emission_type = EmissionType::Points;
        assert_eq!(reward_token_address(&distro), Some(POINTS_LABEL));
    }

    // ------------------------------------------------------------------
    // fiat_value
    // ------------------------------------------------------------------

    #[test]
    fn fiat_value_multiplies_by_price() {
        let token = TokenDetails {
            name: "Wrapped SOL".into(),
            symbol: Some("SOL".into()),
            image: None,
            decimals: 9,
            usdc_per_token: dec!(142.35),
        };
        assert_eq!(fiat_value(dec!(2), &token), dec!(284.70));
    }

    // ------------------------------------------------------------------
    // Wire format
    // ------------------------------------------------------------------

    #[test]
    fn parses_backend_distributor_record() {
        let distro: Distributor = serde_json::from_str(
            r#"{
                "id": "4f2c",
                "type": "SYMMETRIC",
                "emissionType": "TOKENS",
                "totalFundAmount": "50000",
                "tokenDecimals": 6,
                "tokenAddress": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                "distributionFunction": { "type": "CONSTANT", "yIntercept": "25" }
            }"#,
        )
        .unwrap();
        assert_eq!(distro.kind, DistributorKind::Symmetric);
        assert_eq!(distro.emission_type, EmissionType::Tokens);
        assert_eq!(current_reward(&distro), Some(dec!(25)));
    }

    #[test]
    fn kind_defaults_to_symmetric() {
        let distro: Distributor =
            serde_json::from_str(r#"{ "id": "x", "emissionType": "SOL" }"#).unwrap();
        assert_eq!(distro.kind, DistributorKind::Symmetric);
    }
}
