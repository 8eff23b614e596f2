use std::sync::mpsc;

use errors::chooser::ChooserError;
use token::WalletToken;

pub type Result<T> = std::result::Result<T, ChooserError>;

/// Selection sent back to the surface that opened the chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenChoice {
    pub token_id: String,
}

/// Token picker surface. The parent opens it with the selectable tokens
/// and keeps the receiving end of the reply channel; every confirmed
/// choice is delivered there. No state is shared back any other way.
#[derive(Debug)]
pub struct TokenChooser {
    tokens: Vec<WalletToken>,
    reply: mpsc::Sender<TokenChoice>,
}

impl TokenChooser {
    pub fn open(tokens: Vec<WalletToken>) -> Result<(Self, mpsc::Receiver<TokenChoice>)> {
        if tokens.is_empty() {
            return Err(ChooserError::EmptyTokenList);
        }

        let (reply, rx) = mpsc::channel();

        Ok((Self { tokens, reply }, rx))
    }

    pub fn tokens(&self) -> &[WalletToken] {
        &self.tokens
    }

    /// Confirms one token. May be called repeatedly to pick several.
    pub fn choose(&self, token_id: &str) -> Result<()> {
        let known = self.tokens.iter().any(|token| token.token_id == token_id);

        if !known {
            return Err(ChooserError::UnknownTokenId(token_id.to_string()));
        }

        self.reply
            .send(TokenChoice {
                token_id: token_id.to_string(),
            })
            .map_err(|_| ChooserError::ChannelClosed)
    }

    /// Closes the chooser without a selection.
    pub fn dismiss(self) {}
}
