use derive_deref::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

const CONFIG: &str = include_str!("../.config/config.json5");

/// One gallery record: the title and image URL behind a preview card.
/// Records are fixed at load time and never change afterwards.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NftRecord {
    pub title: String,
    pub image: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Deref, DerefMut)]
pub struct NftList(Vec<NftRecord>);

/// The `wallet_addEthereumChain` parameter block, serialized with the
/// camelCase names the provider expects.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    pub chain_id: String,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    pub native_currency: NativeCurrency,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub nfts: NftList,
    #[serde(default)]
    pub chain: ChainDescriptor,
}

impl Config {
    pub fn new() -> Result<Self> {
        let cfg: Self = json5::from_str(CONFIG)
            .map_err(|e| Error::Config(format!("embedded config does not parse: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// An empty gallery is allowed (the page then renders no cards), but a
    /// chain the wallet would reject outright is caught here.
    fn validate(&self) -> Result<()> {
        let id = self.chain.chain_id.as_str();
        let digits = id.strip_prefix("0x").unwrap_or_default();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::Config(format!(
                "chain id must be 0x-prefixed hex, got {id:?}"
            )));
        }
        if self.chain.rpc_urls.is_empty() {
            return Err(Error::Config(String::from("chain has no rpc urls")));
        }
        Ok(())
    }
}
