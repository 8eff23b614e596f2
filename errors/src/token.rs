use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token id is empty")]
    EmptyTokenId,

    #[error("fail to serialize token: {0}")]
    SerializeError(String),

    #[error("fail to deserialize token: {0}")]
    DeserializeError(String),
}
