pub mod bound_math;

/// Two doubles closer than this are treated as equal. Used as the threshold
/// below which an accumulated sum counts as zero.
pub const DEFAULT_DOUBLE_EQUAL: f64 = 0.0000001;
