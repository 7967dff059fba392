use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::chain;
use crate::config::ChainDescriptor;
use crate::errors::{Error, Result};

/// Window property a wallet extension injects its provider under.
const INJECTION_KEY: &str = "ethereum";

const REQUEST_ACCOUNTS_METHOD: &str = "eth_requestAccounts";
const ADD_CHAIN_METHOD: &str = "wallet_addEthereumChain";

/// Handle to an injected EIP-1193 provider.
///
/// The provider exposes a single `request({ method, params })` entry point
/// returning a promise. Requests the caller cares about are awaited through
/// [`JsFuture`]; the add-chain proposal is issued and left to run on its own.
pub struct Provider {
    object: Object,
}

impl Provider {
    /// Looks up `window.ethereum`. `None` means no wallet extension is
    /// installed or the extension is disabled.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str(INJECTION_KEY)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        value.dyn_into::<Object>().ok().map(Self::from_object)
    }

    /// Wraps an already-obtained provider object.
    pub fn from_object(object: Object) -> Self {
        Self { object }
    }

    /// Prompts the user for account access and resolves to the granted
    /// addresses. A dismissed or denied prompt rejects the underlying
    /// promise, which surfaces here as `Err`.
    pub async fn request_accounts(&self) -> Result<Vec<String>> {
        let response = self.request(REQUEST_ACCOUNTS_METHOD, None).await?;
        let accounts: Array = response.dyn_into().map_err(|value| {
            Error::Wallet(format!("accounts response is not an array: {value:?}"))
        })?;

        let mut addresses = Vec::with_capacity(accounts.length() as usize);
        for account in accounts.iter() {
            match account.as_string() {
                Some(address) => addresses.push(address),
                None => {
                    return Err(Error::Wallet(format!(
                        "account entry is not a string: {account:?}"
                    )))
                }
            }
        }

        Ok(addresses)
    }

    /// Asks the wallet to add the given chain. Fire and forget: the returned
    /// promise is dropped without being awaited, so acceptance, rejection and
    /// wallet-side errors all stay inside the wallet UI. Only failing to
    /// issue the call at all is an error.
    pub fn propose_chain(&self, descriptor: &ChainDescriptor) -> Result<()> {
        let params = Array::new();
        params.push(&chain::to_js(descriptor)?);
        let _ = self.issue(ADD_CHAIN_METHOD, Some(&params))?;
        Ok(())
    }

    /// Issues a request and awaits the provider's promise.
    async fn request(&self, method: &str, params: Option<&Array>) -> Result<JsValue> {
        let promise = self.issue(method, params)?;
        JsFuture::from(promise)
            .await
            .map_err(|value| Error::wallet_js(method, value))
    }

    /// Calls `request({ method, params })` on the provider and hands back
    /// the raw promise unawaited.
    fn issue(&self, method: &str, params: Option<&Array>) -> Result<Promise> {
        let args = Object::new();
        Reflect::set(
            &args,
            &JsValue::from_str("method"),
            &JsValue::from_str(method),
        )
        .map_err(|value| Error::wallet_js(method, value))?;
        if let Some(params) = params {
            Reflect::set(&args, &JsValue::from_str("params"), params)
                .map_err(|value| Error::wallet_js(method, value))?;
        }

        let request = Reflect::get(&self.object, &JsValue::from_str("request"))
            .map_err(|value| Error::wallet_js("provider.request lookup", value))?;
        let request: Function = request.dyn_into().map_err(|value| {
            Error::Wallet(format!("provider.request is not a function: {value:?}"))
        })?;

        let value = request
            .call1(&self.object, &args)
            .map_err(|value| Error::wallet_js(method, value))?;
        value.dyn_into().map_err(|value| {
            Error::Wallet(format!("{method} did not return a promise: {value:?}"))
        })
    }
}
