//! Shared value-mapping helpers.

/// Rescale `value` from a source span into a destination span.
///
/// Pure linear rescale: `value * (dst_max - dst_min) / (src_max - src_min)`.
/// Integer division truncates; the caller decides any rounding the consumer
/// of the result needs.
pub fn map(value: i32, src_min: i32, src_max: i32, dst_min: i32, dst_max: i32) -> i32 {
    debug_assert!(src_max != src_min);
    value * (dst_max - dst_min) / (src_max - src_min)
}
