//! Page components
//!
//! Each component owns one piece of the page: the gallery renders the
//! preview cards, the status bar accumulates wallet messages, the connect
//! button turns clicks into actions. Actions flow in through `update`,
//! optional follow-up actions flow back out. The DOM is retained, so there
//! is no per-frame draw call; a component writes its own nodes whenever
//! `mount` or `update` changes what should be on screen.

pub mod connect;
pub mod gallery;
pub mod status_bar;

pub use connect::ConnectButton;
pub use gallery::Gallery;
pub use status_bar::StatusBar;

use futures::channel::mpsc::UnboundedSender;
use web_sys::Document;

use crate::action::Action;
use crate::errors::Result;

pub trait Component {
    /// Hands the component a sender for emitting actions outside the
    /// update cycle, e.g. from DOM event callbacks.
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        let _ = tx;
        Ok(())
    }

    /// Binds the component to its elements in the page and performs the
    /// initial render. Called once, before any action is processed.
    fn mount(&mut self, document: &Document) -> Result<()>;

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }
}
