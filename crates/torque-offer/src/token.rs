//! Token metadata, as returned by the asset-metadata service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata for a reward token.
///
/// Mirrors the metadata service's response shape. `usdc_per_token` defaults
/// to 1 when the source quotes a currency other than USDC.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub decimals: u32,
    /// Price of one whole token in USDC.
    #[serde(default = "default_price")]
    pub usdc_per_token: Decimal,
}

fn default_price() -> Decimal {
    Decimal::ONE
}

impl TokenDetails {
    /// Display label: the symbol when known, otherwise a shortened address.
    pub fn label(&self, address: &str) -> String {
        self.symbol
            .clone()
            .unwrap_or_else(|| short_address(address))
    }
}

/// Shorten a token address to an `abcde....vwxyz` label.
///
/// Addresses of ten characters or fewer are returned whole.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..5].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{head}....{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usdc() -> TokenDetails {
        TokenDetails {
            name: "USD Coin".into(),
            symbol: Some("USDC".into()),
            image: None,
            decimals: 6,
            usdc_per_token: dec!(1),
        }
    }

    #[test]
    fn label_prefers_symbol() {
        assert_eq!(usdc().label("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"), "USDC");
    }

    #[test]
    fn label_falls_back_to_short_address() {
        let mut token = usdc();
        token.symbol = None;
        assert_eq!(
            token.label("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
            "EPjFW....TDt1v"
        );
    }

    #[test]
    fn short_address_keeps_short_strings_whole() {
        assert_eq!(short_address("Points"), "Points");
        assert_eq!(short_address("0123456789"), "0123456789");
    }

    #[test]
    fn parses_metadata_service_response() {
        let token: TokenDetails = serde_json::from_str(
            r#"{
                "name": "Wrapped SOL",
                "symbol": "SOL",
                "image": "https://example.com/sol.png",
                "decimals": 9,
                "usdcPerToken": "142.35"
            }"#,
        )
        .unwrap();
        assert_eq!(token.symbol.as_deref(), Some("SOL"));
        assert_eq!(token.decimals, 9);
        assert_eq!(token.usdc_per_token, dec!(142.35));
    }

    #[test]
    fn missing_price_defaults_to_one() {
        let token: TokenDetails =
            serde_json::from_str(r#"{ "name": "Mystery", "decimals": 0 }"#).unwrap();
        assert_eq!(token.usdc_per_token, dec!(1));
    }
}
