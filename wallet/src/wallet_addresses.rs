use address::WalletAddress;
use config::address::{MAX_ADDRESSES_PER_BATCH, PRIMARY_DERIVATION_INDEX};
use errors::{address::AddressError, wallet::WalletErrors};

use crate::{Result, Wallet};

/// Address-list bookkeeping. Key material comes from the caller; this
/// trait only maintains the ordered, uniquely-indexed list.
pub trait AddressManagement {
    type Error;

    /// Derivation index the next added address will get.
    fn next_derivation_index(&self) -> u32;

    /// Appends an address at the next free derivation index and returns
    /// the index it was assigned.
    fn add_address(
        &mut self,
        label: Option<String>,
        public_address: String,
    ) -> std::result::Result<u32, Self::Error>;

    /// Inserts a restored address, keeping the list ordered by index.
    fn insert_address(&mut self, address: WalletAddress) -> std::result::Result<(), Self::Error>;

    /// Derivation indices a batch of `count` new addresses would occupy.
    fn plan_batch(&self, count: usize) -> std::result::Result<Vec<u32>, Self::Error>;

    fn get_address(
        &self,
        derivation_index: u32,
    ) -> std::result::Result<&WalletAddress, Self::Error>;
}

impl AddressManagement for Wallet {
    type Error = WalletErrors;

    fn next_derivation_index(&self) -> u32 {
        self.addresses
            .iter()
            .map(|address| address.derivation_index + 1)
            .max()
            .unwrap_or(PRIMARY_DERIVATION_INDEX)
    }

    fn add_address(&mut self, label: Option<String>, public_address: String) -> Result<u32> {
        if public_address.is_empty() {
            return Err(WalletErrors::InvalidAddress(
                AddressError::EmptyPublicAddress,
            ));
        }

        let derivation_index = self.next_derivation_index();

        self.addresses.push(WalletAddress {
            derivation_index,
            label,
            public_address,
        });

        Ok(derivation_index)
    }

    fn insert_address(&mut self, address: WalletAddress) -> Result<()> {
        if address.public_address.is_empty() {
            return Err(WalletErrors::InvalidAddress(
                AddressError::EmptyPublicAddress,
            ));
        }

        let exists = self
            .addresses
            .iter()
            .any(|a| a.derivation_index == address.derivation_index);

        if exists {
            return Err(WalletErrors::ExistsAddress(address.derivation_index));
        }

        self.addresses.push(address);
        self.addresses.sort_by_key(|a| a.derivation_index);

        Ok(())
    }

    fn plan_batch(&self, count: usize) -> Result<Vec<u32>> {
        if count == 0 || count > MAX_ADDRESSES_PER_BATCH {
            return Err(WalletErrors::InvalidBatchSize(
                count,
                MAX_ADDRESSES_PER_BATCH,
            ));
        }

        let start = self.next_derivation_index();

        Ok((start..start + count as u32).collect())
    }

    fn get_address(&self, derivation_index: u32) -> Result<&WalletAddress> {
        self.addresses
            .iter()
            .find(|a| a.derivation_index == derivation_index)
            .ok_or(WalletErrors::NotExistsAddress(derivation_index))
    }
}
