/// Cell is known free space.
pub const FREE: u8 = 0;
/// Cell is impassable; a footprint touching it is in collision.
pub const LETHAL: u8 = 254;
/// Cell has never been observed.
pub const UNKNOWN: u8 = 255;
/// Largest cost an ordinary (traversable) cell can carry.
pub const MAX_NON_LETHAL: u8 = 253;
