use address::{reconcile, WalletAddress};
use diffs::{EditScript, ListUpdateTarget};

/// Owner of the currently displayed address snapshot.
///
/// `submit` reconciles the held snapshot against the incoming one, swaps
/// them atomically and replays the edits on the rendering target. The view
/// is meant to live on one logical owner thread; it holds no locks.
#[derive(Debug, Default)]
pub struct AddressListView {
    current: Vec<WalletAddress>,
}

impl AddressListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(initial: Vec<WalletAddress>) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> &[WalletAddress] {
        &self.current
    }

    pub fn submit(
        &mut self,
        new: Vec<WalletAddress>,
        target: &mut impl ListUpdateTarget,
    ) -> EditScript {
        let script = reconcile(&self.current, &new);

        self.current = new;
        script.dispatch_to(target);

        script
    }
}
