use crate::container::Associative;
use crate::extensions::EnumKeyedExt;
use crate::key::EnumKey;
use std::fmt;
use std::marker::PhantomData;

/// A borrowed view of a container that only accepts keys of the enumeration `E`.
///
/// The view never copies the container: every call goes straight through the borrow, and
/// dropping the view hands the container back to its owner unchanged apart from the writes
/// made through it.
pub struct EnumKeyedMap<'m, M: ?Sized, E> {
    map: &'m mut M,
    _key: PhantomData<fn(E)>,
}

impl<'m, M, E> EnumKeyedMap<'m, M, E>
where
    M: Associative + ?Sized,
    E: EnumKey,
{
    pub const fn new(map: &'m mut M) -> Self {
        Self { map, _key: PhantomData }
    }

    #[must_use]
    pub fn get(&self, key: E) -> Option<&M::Value> {
        self.map.get_by(key)
    }

    pub fn get_mut(&mut self, key: E) -> Option<&mut M::Value> {
        self.map.get_mut_by(key)
    }

    pub fn set(&mut self, key: E, value: M::Value) -> Option<M::Value> {
        self.map.set_by(key, value)
    }

    pub fn remove(&mut self, key: E) -> Option<M::Value> {
        self.map.remove_by(key)
    }

    #[must_use]
    pub fn contains(&self, key: E) -> bool {
        self.map.contains_by(key)
    }

    /// Gives the underlying borrow back, ending the view.
    pub fn into_inner(self) -> &'m mut M {
        self.map
    }
}

impl<M: fmt::Debug + ?Sized, E> fmt::Debug for EnumKeyedMap<'_, M, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumKeyedMap").field("map", &self.map).finish()
    }
}

/// A shared, read-only view of a container restricted to the enumeration `E`.
///
/// Unlike [`EnumKeyedMap`] it only needs `&M`, so it can be taken from a container that is
/// itself behind a shared borrow.
pub struct EnumKeyedRef<'m, M: ?Sized, E> {
    map: &'m M,
    _key: PhantomData<fn(E)>,
}

impl<'m, M, E> EnumKeyedRef<'m, M, E>
where
    M: Associative + ?Sized,
    E: EnumKey,
{
    pub const fn new(map: &'m M) -> Self {
        Self { map, _key: PhantomData }
    }

    #[must_use]
    pub fn get(&self, key: E) -> Option<&'m M::Value> {
        self.map.get_by(key)
    }

    #[must_use]
    pub fn contains(&self, key: E) -> bool {
        self.map.contains_by(key)
    }

    #[must_use]
    pub const fn into_inner(self) -> &'m M {
        self.map
    }
}

impl<M: ?Sized, E> Clone for EnumKeyedRef<'_, M, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized, E> Copy for EnumKeyedRef<'_, M, E> {}

impl<M: fmt::Debug + ?Sized, E> fmt::Debug for EnumKeyedRef<'_, M, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumKeyedRef").field("map", &self.map).finish()
    }
}
