use js_sys::JSON;
use wasm_bindgen::JsValue;

use crate::config::ChainDescriptor;
use crate::errors::{Error, Result};

/// Builds the JS parameter object for an add-chain request by routing the
/// descriptor through its JSON form. Serde owns the wire field names, so
/// the object the wallet sees always matches what the config declares.
pub fn to_js(descriptor: &ChainDescriptor) -> Result<JsValue> {
    let json = serde_json::to_string(descriptor)
        .map_err(|e| Error::Wallet(format!("chain descriptor does not serialize: {e}")))?;
    JSON::parse(&json).map_err(|value| Error::wallet_js("chain descriptor parse", value))
}
