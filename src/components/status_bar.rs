use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::action::Action;
use crate::components::Component;
use crate::dom;
use crate::errors::{Error, Result};

/// Id of the element wallet messages are written into.
pub const STATUS_ID: &str = "wallet-status";

/// Message shown when a provider was found.
pub const DETECTED_MESSAGE: &str = "Metamask is installed and enabled.";

/// Message shown (and alerted) when no provider is injected.
pub const MISSING_MESSAGE: &str = "Metamask is not installed or enabled.";

/// Accumulates wallet progress messages, one line each. Lines are only ever
/// appended; a second connect attempt extends the history rather than
/// replacing it.
pub struct StatusBar {
    element: Option<Element>,
    lines: Vec<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            element: None,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The rendered text: every line so far, newline-terminated.
    pub fn text(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
        self.render();
    }

    fn render(&self) {
        if let Some(element) = &self.element {
            element.set_text_content(Some(&self.text()));
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn mount(&mut self, document: &Document) -> Result<()> {
        let element = dom::element_by_id(document, STATUS_ID)?;
        let html = element.dyn_ref::<HtmlElement>().ok_or_else(|| {
            Error::Dom(format!("status element #{STATUS_ID} is not an html element"))
        })?;
        // Newline-separated lines only show as lines with pre-wrap.
        html.style()
            .set_property("white-space", "pre-wrap")
            .map_err(|e| Error::js("styling status element", e))?;
        self.element = Some(element);
        self.render();
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::WalletDetected => self.push(String::from(DETECTED_MESSAGE)),
            Action::WalletMissing => self.push(String::from(MISSING_MESSAGE)),
            Action::AccountConnected(address) => {
                self.push(format!("Connected to account: {address}."));
            }
            _ => {}
        }
        Ok(None)
    }
}
