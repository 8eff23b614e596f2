pub mod wallet_addresses;

use std::collections::HashMap;

use address::WalletAddress;
use config::coin::{COIN_DECIMALS, NANO_PER_COIN};
use errors::wallet::WalletErrors;
use serde::{Deserialize, Serialize};
use token::WalletToken;

pub type Result<T> = std::result::Result<T, WalletErrors>;

/// On-chain state known for one public address.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressState {
    pub balance: u64,
    pub unconfirmed_balance: Option<u64>,
}

/// Wallet snapshot as the list surfaces see it: the ordered address list
/// plus per-address balances and token holdings, keyed by public address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    pub display_name: String,
    pub addresses: Vec<WalletAddress>,
    pub states: HashMap<String, AddressState>,
    pub address_tokens: HashMap<String, Vec<WalletToken>>,
}

/// Nano-units into whole coins, 10^9 scale.
pub fn nanos_to_coins(nanos: u64) -> f64 {
    nanos as f64 / NANO_PER_COIN as f64
}

/// Exact fixed-point display string with the full fractional part.
pub fn format_coins(nanos: u64) -> String {
    let whole = nanos / NANO_PER_COIN;
    let frac = nanos % NANO_PER_COIN;

    format!("{whole}.{frac:0width$}", width = COIN_DECIMALS as usize)
}

impl Wallet {
    pub fn new(display_name: String) -> Self {
        Self {
            display_name,
            ..Default::default()
        }
    }

    pub fn state_for_address(&self, public_address: &str) -> Option<&AddressState> {
        self.states.get(public_address)
    }

    pub fn tokens_for_address(&self, public_address: &str) -> Option<&[WalletToken]> {
        self.address_tokens
            .get(public_address)
            .map(|tokens| tokens.as_slice())
    }

    pub fn set_state(&mut self, public_address: String, state: AddressState) {
        self.states.insert(public_address, state);
    }

    pub fn set_tokens(&mut self, public_address: String, tokens: Vec<WalletToken>) {
        self.address_tokens.insert(public_address, tokens);
    }

    /// Owned copy of the address list, ready to feed a list surface.
    pub fn addresses_snapshot(&self) -> Vec<WalletAddress> {
        self.addresses.clone()
    }

    pub fn from_bytes(encoded: &[u8]) -> Result<Self> {
        let decoded: Self =
            bincode::deserialize(encoded).map_err(|e| WalletErrors::SerdeError(e.to_string()))?;

        Ok(decoded)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let encoded: Vec<u8> =
            bincode::serialize(&self).map_err(|e| WalletErrors::SerdeError(e.to_string()))?;

        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanos_to_coins() {
        assert_eq!(nanos_to_coins(0), 0.0);
        assert_eq!(nanos_to_coins(1_000_000_000), 1.0);
        assert_eq!(nanos_to_coins(2_500_000_000), 2.5);
    }

    #[test]
    fn test_format_coins() {
        assert_eq!(format_coins(0), "0.000000000");
        assert_eq!(format_coins(1_000_000_000), "1.000000000");
        assert_eq!(format_coins(2_500_000_123), "2.500000123");
        assert_eq!(format_coins(42), "0.000000042");
    }

    #[test]
    fn test_state_and_token_lookup() {
        let mut wallet = Wallet::new("Main wallet".to_string());
        wallet.set_state(
            "9f00".to_string(),
            AddressState {
                balance: 1_000_000_000,
                unconfirmed_balance: None,
            },
        );
        wallet.set_tokens(
            "9f00".to_string(),
            vec![WalletToken::new("deadbeef".to_string(), None, 0, 5)],
        );

        let state = wallet.state_for_address("9f00").unwrap();
        assert_eq!(state.balance, 1_000_000_000);
        assert_eq!(wallet.tokens_for_address("9f00").unwrap().len(), 1);

        assert!(wallet.state_for_address("9f01").is_none());
        assert!(wallet.tokens_for_address("9f01").is_none());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut wallet = Wallet::new("Main wallet".to_string());
        wallet.addresses.push(WalletAddress::primary("9f00".to_string()));
        wallet.set_state(
            "9f00".to_string(),
            AddressState {
                balance: 42,
                unconfirmed_balance: Some(7),
            },
        );

        let restored = Wallet::from_bytes(&wallet.to_bytes().unwrap()).unwrap();

        assert_eq!(restored, wallet);
    }
}
