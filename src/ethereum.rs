//! The browser-injected wallet provider.
//!
//! A wallet extension that is installed and enabled injects an EIP-1193
//! provider object at `window.ethereum`. This module wraps that object:
//! detection, the account request, and the add-chain proposal. Nothing here
//! knows about components or actions; the app drives it.

pub mod chain;
pub mod provider;

pub use provider::Provider;
