pub mod address;
pub mod chooser;
pub mod token;
pub mod wallet;
