use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChooserError {
    #[error("No tokens available to choose from")]
    EmptyTokenList,

    #[error("Token with id ({0}) is not in the chooser list")]
    UnknownTokenId(String),

    #[error("Chooser reply channel is closed")]
    ChannelClosed,
}
