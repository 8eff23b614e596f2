pub const NANO_PER_COIN: u64 = 1_000_000_000;
pub const COIN_DECIMALS: u8 = 9;
pub const TOKEN_ID_DISPLAY_LEN: usize = 8;
