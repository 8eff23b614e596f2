use address::WalletAddress;
use async_trait::async_trait;
use diffs::ListUpdateTarget;

use crate::AddressListView;

/// Source of address-list snapshots, typically a database change stream.
/// `None` ends the feed.
#[async_trait]
pub trait SnapshotSource {
    async fn next_snapshot(&mut self) -> Option<Vec<WalletAddress>>;
}

/// Drives a view from a snapshot source until the source ends.
/// Returns the number of snapshots applied.
pub async fn run_feed<S, T>(mut source: S, view: &mut AddressListView, target: &mut T) -> usize
where
    S: SnapshotSource + Send,
    T: ListUpdateTarget + Send,
{
    let mut applied = 0;

    while let Some(snapshot) = source.next_snapshot().await {
        view.submit(snapshot, target);
        applied += 1;
    }

    applied
}
