use std::any::{Any, TypeId, type_name};
use tracing::trace;

/// A closed enumeration whose variants map to canonical string labels.
///
/// Implemented for every type that converts by reference into `&'static str`, which is exactly
/// what `#[derive(IntoStaticStr)]` generates. Use `#[strum(serialize = "...")]` to pick a label
/// that differs from the variant name.
pub trait EnumKey {
    /// Returns the canonical label of this variant.
    fn label(&self) -> &'static str;
}

impl<E> EnumKey for E
where
    for<'a> &'a E: Into<&'static str>,
{
    #[inline]
    fn label(&self) -> &'static str {
        self.into()
    }
}

/// Converts a label into the container's key type.
///
/// Succeeds only when `K` is `String` or `&'static str`; any other key type yields `None`.
pub(crate) fn resolve<K: 'static>(label: &'static str) -> Option<K> {
    let key = if TypeId::of::<K>() == TypeId::of::<String>() {
        downcast_into::<K, String>(label.to_owned())
    } else {
        downcast_into::<K, &'static str>(label)
    };
    if key.is_none() {
        trace!(label, key_type = type_name::<K>(), "key type is not string-valued; ignoring enum key");
    }
    key
}

fn downcast_into<K: 'static, S: 'static>(candidate: S) -> Option<K> {
    let mut slot = Some(candidate);
    (&mut slot as &mut dyn Any).downcast_mut::<Option<K>>().and_then(Option::take)
}
