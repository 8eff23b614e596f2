use crate::address::AddressError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletErrors {
    #[error("Address with derivation index ({0}) already exists")]
    ExistsAddress(u32),

    #[error("Address with derivation index ({0}) not exists")]
    NotExistsAddress(u32),

    #[error("Invalid batch size {0}. Must be between 1 and {1}")]
    InvalidBatchSize(usize, usize),

    #[error("Invalid address entity: {0}")]
    InvalidAddress(AddressError),

    #[error("fail to serialize wallet data: {0}")]
    SerdeError(String),
}
