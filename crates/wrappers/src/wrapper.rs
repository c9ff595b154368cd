/// The read/write capability shared by every wrapper in this crate.
///
/// `value` returns the effective value, `assign` hands a new value to the wrapper, which then
/// applies its own policy (clamp, ignore or normalize).
///
/// ```rust
/// use tether_wrappers::prelude::*;
///
/// fn reset<W: Wrapper>(wrapper: &mut W, value: W::Value) -> W::Value {
///     wrapper.assign(value);
///     wrapper.value()
/// }
///
/// let mut percent = Constrained::score(10);
/// assert_eq!(reset(&mut percent, -5), 0);
/// ```
pub trait Wrapper {
    type Value;

    fn value(&self) -> Self::Value;

    fn assign(&mut self, value: Self::Value);
}
