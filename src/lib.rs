//! # Nftui - NFT Gallery with Wallet Connect
//!
//! A browser front end for an NFT preview gallery, built with Rust and
//! wasm-bindgen. The page shows a fixed set of preview cards and a connect
//! button that talks to the wallet extension injected at `window.ethereum`.
//! This library implements an Elm-like architecture for predictable state
//! management.
//!
//! ## Architecture Overview
//!
//! This crate is organized around an action loop:
//!
//! - **Action** (`action`): Events that move the wallet flow forward
//! - **App** (`app`): Dispatches actions and drives the connect round trip
//! - **Components** (`components`): Page pieces that own their DOM nodes
//! - **Ethereum** (`ethereum`): The injected EIP-1193 provider
//! - **Config** (`config`): The embedded gallery and chain data
//!
//! ## Example Usage
//!
//! Components can be driven without a browser:
//!
//! ```rust
//! use nftui::action::Action;
//! use nftui::components::{Component, StatusBar};
//!
//! let mut status_bar = StatusBar::new();
//! status_bar.update(Action::WalletDetected)?;
//! status_bar.update(Action::AccountConnected("0xabc".into()))?;
//!
//! assert_eq!(
//!     "Metamask is installed and enabled.\nConnected to account: 0xabc.\n",
//!     status_bar.text()
//! );
//! # Ok::<(), nftui::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`action`] - Action types for the update cycle
//! - [`app`] - Application wiring and the connect flow
//! - [`components`] - Gallery, status bar and connect button
//! - [`config`] - Embedded gallery records and chain descriptor
//! - [`dom`] - Checked access to window and document
//! - [`ethereum`] - Injected wallet provider
//! - [`errors`] - Error type shared across the crate

#![deny(warnings)]

pub mod action;
pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod errors;
pub mod ethereum;
pub mod utils;

// Re-exports for convenience
pub use action::Action;
pub use app::App;
pub use config::Config;
pub use errors::{Error, Result};

use wasm_bindgen::prelude::*;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entry point, called by the page loader once the module is instantiated.
/// Wires the whole page up; a missing element or broken embedded config
/// rejects here and ends up in the console.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    utils::initialize_panic_handler();
    utils::initialize_logging();
    log::info!("nftui {VERSION} booting");

    let document = dom::document().map_err(boot_error)?;
    App::new().map_err(boot_error)?.run(&document).map_err(boot_error)?;

    Ok(())
}

fn boot_error(err: Error) -> JsValue {
    log::error!("boot failed: {err}");
    err.into()
}
