/// QuantityGuard - client-side bounds for quantity adjustments
///
/// Quantities never go negative: a decrement at zero yields `None`, meaning
/// no request is sent at all.
pub struct QuantityGuard;

impl QuantityGuard {
    /// Next quantity after "+", `None` on overflow
    pub fn increment(current: u32) -> Option<u32> {
        current.checked_add(1)
    }

    /// Next quantity after "-", `None` when already at zero
    pub fn decrement(current: u32) -> Option<u32> {
        current.checked_sub(1)
    }
}
