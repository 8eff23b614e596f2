pub mod address_list;
pub mod feed;
pub mod token_chooser;

pub use address_list::AddressListView;
pub use feed::{run_feed, SnapshotSource};
pub use token_chooser::{TokenChoice, TokenChooser};
