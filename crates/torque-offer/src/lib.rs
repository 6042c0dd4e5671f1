//! # torque-offer — Display-side helpers for offer rendering.
//!
//! Everything here is pure computation over data the rendering layer
//! already holds; fetching offers, token metadata, or prices stays with
//! the caller.
//!
//! - [`reward`]: per-distributor payout estimates and fiat values.
//! - [`token`]: the token-metadata record and label fallbacks.
//! - [`format`]: significant-digit amount and USD formatting.
//! - [`window`]: offer countdown and progress.

pub mod format;
pub mod reward;
pub mod token;
pub mod window;

pub use format::{format_token_amount, format_usd};
pub use reward::{
    Distributor, DistributorKind, EmissionType, current_reward, fiat_value, reward_token_address,
};
pub use token::{TokenDetails, short_address};
pub use window::{OfferWindow, TimeLeft};
