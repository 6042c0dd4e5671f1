//! Shared helpers for the Torque integration tests.

pub mod helpers;
