pub mod address;
pub mod coin;
