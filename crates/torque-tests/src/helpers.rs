//! Test fixtures shaped like the offer backend's records.

use rust_decimal::Decimal;
use torque_distribution::DistributionSpec;
use torque_offer::{Distributor, DistributorKind, EmissionType, TokenDetails};

/// A symmetric TOKENS distributor with the given curve and 6-decimal token.
pub fn tokens_distributor(id: &str, spec: DistributionSpec) -> Distributor {
    Distributor {
        id: id.to_string(),
        kind: DistributorKind::Symmetric,
        emission_type: EmissionType::Tokens,
        total_fund_amount: Some(Decimal::from(1_000_000)),
        token_decimals: Some(6),
        token_address: Some("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string()),
        distribution_function: Some(spec),
    }
}

/// A POINTS distributor paying out of a fixed fund.
pub fn points_distributor(id: &str, fund: Decimal) -> Distributor {
    Distributor {
        id: id.to_string(),
        kind: DistributorKind::Symmetric,
        emission_type: EmissionType::Points,
        total_fund_amount: Some(fund),
        token_decimals: None,
        token_address: None,
        distribution_function: None,
    }
}

/// USDC-like token metadata (price pinned at 1).
pub fn usdc_details() -> TokenDetails {
    TokenDetails {
        name: "USD Coin".to_string(),
        symbol: Some("USDC".to_string()),
        image: None,
        decimals: 6,
        usdc_per_token: Decimal::ONE,
    }
}
