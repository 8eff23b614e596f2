pub const PRIMARY_DERIVATION_INDEX: u32 = 0;
pub const MAX_ADDRESSES_PER_BATCH: usize = 10;
