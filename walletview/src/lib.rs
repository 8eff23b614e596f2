pub use address;
pub use config;
pub use diffs;
pub use errors;
pub use token;
pub use viewer;
pub use wallet;
