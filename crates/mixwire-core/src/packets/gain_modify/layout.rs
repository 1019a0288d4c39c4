pub const TYPE_TAG: u8 = 0x20;

pub const LANE_ID_OFFSET: usize = 0;
pub const GAIN_OFFSET: usize = 1;
pub const RECORD_WIDTH: usize = 2;
