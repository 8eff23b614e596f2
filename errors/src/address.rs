use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Public address is empty")]
    EmptyPublicAddress,

    #[error("fail to serialize address: {0}")]
    SerializeError(String),

    #[error("fail to deserialize address: {0}")]
    DeserializeError(String),
}
