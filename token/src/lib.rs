use config::coin::TOKEN_ID_DISPLAY_LEN;
use errors::token::TokenError;
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, TokenError>;

/// A token held on one of the wallet's addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletToken {
    pub token_id: String,
    pub name: Option<String>,
    pub decimals: u8,
    pub amount: u64,
}

impl WalletToken {
    pub fn new(token_id: String, name: Option<String>, decimals: u8, amount: u64) -> Self {
        Self {
            token_id,
            name,
            decimals,
            amount,
        }
    }

    /// Token name when known, otherwise the truncated id.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None if self.token_id.len() > TOKEN_ID_DISPLAY_LEN => {
                format!("{}...", &self.token_id[..TOKEN_ID_DISPLAY_LEN])
            }
            None => self.token_id.clone(),
        }
    }

    pub fn from_bytes(encoded: &[u8]) -> Result<Self> {
        let decoded: Self = bincode::deserialize(encoded)
            .map_err(|e| TokenError::DeserializeError(e.to_string()))?;

        Ok(decoded)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let encoded: Vec<u8> =
            bincode::serialize(&self).map_err(|e| TokenError::SerializeError(e.to_string()))?;

        Ok(encoded)
    }
}
