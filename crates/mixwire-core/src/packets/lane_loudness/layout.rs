pub const TYPE_TAG: u8 = 0x40;

pub const LANE_ID_OFFSET: usize = 0;
pub const LOUDNESS_OFFSET: usize = 1;
pub const RECORD_WIDTH: usize = 2;
