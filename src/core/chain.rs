use serde::{Deserialize, Serialize};

use crate::core::errors::SessionError;

/// Native currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Static description of a blockchain network.
///
/// Field names serialize to the camelCase keys the provider's
/// `wallet_addEthereumChain` call expects, so a descriptor can be passed
/// through to the wallet verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    /// 0x-prefixed hex chain id (e.g. "0xaa36a7").
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl ChainDescriptor {
    /// The Sepolia testnet, the default target network.
    pub fn sepolia() -> Self {
        Self {
            chain_id: "0xaa36a7".to_string(),
            chain_name: "Sepolia".to_string(),
            native_currency: NativeCurrency {
                name: "Sepolia ETH".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
            rpc_urls: vec!["https://sepolia.infura.io/v3/".to_string()],
            block_explorer_urls: vec!["https://sepolia.etherscan.io".to_string()],
        }
    }

    /// Numeric chain id parsed from the hex string.
    pub fn chain_id_u64(&self) -> Result<u64, SessionError> {
        parse_chain_id(&self.chain_id)
            .ok_or_else(|| SessionError::Config(format!("invalid chain id '{}'", self.chain_id)))
    }

    /// Compares this descriptor's chain id against a provider-reported id.
    /// Comparison is numeric, so "0xAA36A7" and "0xaa36a7" match.
    pub fn matches_id(&self, other: &str) -> bool {
        match (parse_chain_id(&self.chain_id), parse_chain_id(other)) {
            (Some(a), Some(b)) => a == b,
            _ => self.chain_id.eq_ignore_ascii_case(other),
        }
    }
}

/// Parses a hex chain id string ("0x"-prefixed or bare) to its numeric value.
pub fn parse_chain_id(id: &str) -> Option<u64> {
    let hex = id.trim();
    let hex = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")).unwrap_or(hex);
    if hex.is_empty() {
        return None;
    }
    u64::from_str_radix(hex, 16).ok()
}
