use config::address::PRIMARY_DERIVATION_INDEX;
use diffs::{calculate_diff, DiffCallback, EditScript};
use errors::address::AddressError;
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, AddressError>;

/// One address of a wallet, identified across list snapshots by its
/// derivation index. Index 0 is the wallet's primary address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletAddress {
    pub derivation_index: u32,
    pub label: Option<String>,
    pub public_address: String,
}

impl WalletAddress {
    pub fn primary(public_address: String) -> Self {
        Self {
            derivation_index: PRIMARY_DERIVATION_INDEX,
            label: None,
            public_address,
        }
    }

    pub fn derived(derivation_index: u32, public_address: String) -> Self {
        Self {
            derivation_index,
            label: None,
            public_address,
        }
    }

    pub fn is_derived(&self) -> bool {
        self.derivation_index > PRIMARY_DERIVATION_INDEX
    }

    /// User label when set, otherwise a generated one.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None if self.is_derived() => format!("Derived Address {}", self.derivation_index),
            None => "Main Address".to_string(),
        }
    }

    pub fn from_bytes(encoded: &[u8]) -> Result<Self> {
        let decoded: Self = bincode::deserialize(encoded)
            .map_err(|e| AddressError::DeserializeError(e.to_string()))?;

        Ok(decoded)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let encoded: Vec<u8> =
            bincode::serialize(&self).map_err(|e| AddressError::SerializeError(e.to_string()))?;

        Ok(encoded)
    }
}

/// Diff contract for address lists: identity is the derivation index,
/// content always counts as changed so every surviving row rebinds.
/// Balances arrive from a separate async source, a rebind on every pass
/// keeps them from going stale after a partial update.
///
/// Precondition: derivation indices are unique within each snapshot.
/// Duplicates leave the matching undefined; this callback does not check.
pub struct AddressDiffCallback<'a> {
    pub old: &'a [WalletAddress],
    pub new: &'a [WalletAddress],
}

impl DiffCallback for AddressDiffCallback<'_> {
    fn old_len(&self) -> usize {
        self.old.len()
    }

    fn new_len(&self) -> usize {
        self.new.len()
    }

    fn items_same(&self, old_pos: usize, new_pos: usize) -> bool {
        self.old[old_pos].derivation_index == self.new[new_pos].derivation_index
    }

    fn contents_same(&self, _old_pos: usize, _new_pos: usize) -> bool {
        // always redraw
        false
    }
}

/// Pure reconciliation of two address snapshots into an edit script.
/// Neither input is mutated; the result is deterministic.
pub fn reconcile(old: &[WalletAddress], new: &[WalletAddress]) -> EditScript {
    calculate_diff(&AddressDiffCallback { old, new })
}
