use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::action::Action;
use crate::components::status_bar::MISSING_MESSAGE;
use crate::components::Component;
use crate::dom;
use crate::errors::{Error, Result};

/// Id of the connect button element.
pub const CONNECT_ID: &str = "connect-wallet";

/// The connect button. Every click emits [`Action::ConnectWallet`]; there is
/// no debouncing, a second click simply starts a fresh connect round.
pub struct ConnectButton {
    action_tx: Option<UnboundedSender<Action>>,
}

impl ConnectButton {
    pub fn new() -> Self {
        Self { action_tx: None }
    }
}

impl Default for ConnectButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ConnectButton {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn mount(&mut self, document: &Document) -> Result<()> {
        let tx = self
            .action_tx
            .clone()
            .ok_or_else(|| Error::Dom(String::from("connect button has no action sender")))?;

        let element = dom::element_by_id(document, CONNECT_ID)?;
        let on_click = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = tx.unbounded_send(Action::ConnectWallet) {
                log::error!("action channel closed: {e}");
            }
        });
        element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| Error::js("binding connect button click", e))?;
        // The listener lives as long as the page. Leaking the closure keeps
        // the Rust side alive without tracking a handle for removal.
        on_click.forget();

        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::WalletMissing = action {
            dom::alert(MISSING_MESSAGE)?;
        }
        Ok(None)
    }
}
