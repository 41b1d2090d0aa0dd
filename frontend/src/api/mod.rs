mod auth;
pub mod client;
mod dashboard;
mod payouts;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
