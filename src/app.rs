use futures::channel::mpsc::{self, UnboundedSender};
use futures::StreamExt;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::{
    action::Action,
    components::{Component, ConnectButton, Gallery, StatusBar},
    config::{ChainDescriptor, Config},
    errors::Result,
    ethereum::Provider,
};

pub struct App {
    pub config: Config,
    pub components: Vec<Box<dyn Component>>,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::new()?;
        let gallery = Gallery::new(config.nfts.clone());
        let status_bar = StatusBar::new();
        let connect = ConnectButton::new();
        Ok(Self {
            components: vec![Box::new(gallery), Box::new(status_bar), Box::new(connect)],
            config,
        })
    }

    /// Mounts every component into the page, then parks an action loop on
    /// the browser event loop. Returns once the page is wired up; the loop
    /// itself lives as long as the page does.
    pub fn run(self, document: &Document) -> Result<()> {
        let Self { config, mut components } = self;
        let (action_tx, mut action_rx) = mpsc::unbounded();

        for component in components.iter_mut() {
            component.register_action_handler(action_tx.clone())?;
        }
        for component in components.iter_mut() {
            component.mount(document)?;
        }

        spawn_local(async move {
            while let Some(action) = action_rx.next().await {
                log::debug!("{action:?}");
                match &action {
                    Action::ConnectWallet => {
                        let chain = config.chain.clone();
                        spawn_local(run_connect(Provider::detect(), chain, action_tx.clone()));
                    }
                    Action::Error(message) => log::error!("{message}"),
                    _ => {}
                }
                for component in components.iter_mut() {
                    match component.update(action.clone()) {
                        Ok(Some(follow_up)) => send(&action_tx, follow_up),
                        Ok(None) => {}
                        Err(e) => log::error!("component update failed: {e}"),
                    }
                }
            }
        });

        Ok(())
    }
}

/// One wallet connect round, spawned per click: detect the provider, request
/// accounts, report the first one, then propose the chain without waiting on
/// the outcome.
pub async fn run_connect(
    provider: Option<Provider>,
    chain: ChainDescriptor,
    tx: UnboundedSender<Action>,
) {
    let Some(provider) = provider else {
        send(&tx, Action::WalletMissing);
        return;
    };
    send(&tx, Action::WalletDetected);

    let accounts = match provider.request_accounts().await {
        Ok(accounts) => accounts,
        Err(e) => {
            send(&tx, Action::Error(format!("account request failed: {e}")));
            return;
        }
    };
    let Some(account) = accounts.into_iter().next() else {
        send(&tx, Action::Error(String::from("wallet returned no accounts")));
        return;
    };
    send(&tx, Action::AccountConnected(account));

    if let Err(e) = provider.propose_chain(&chain) {
        log::debug!("chain proposal not issued: {e}");
    }
}

fn send(tx: &UnboundedSender<Action>, action: Action) {
    if let Err(e) = tx.unbounded_send(action) {
        log::error!("action channel closed: {e}");
    }
}
