//! # Enum-keyed Extensions
//!
//! This module provides the [`EnumKeyedExt`] extension trait, which adds enum-keyed variants
//! of the usual map operations to every [`Associative`] container.
//!
//! None of the operations can fail. When the container's key type is not string-valued, reads
//! return `None` and writes leave the container untouched.

use crate::container::Associative;
use crate::key::{EnumKey, resolve};
use crate::view::{EnumKeyedMap, EnumKeyedRef};

/// An extension trait for associative containers to provide enum-keyed access.
///
/// This trait is automatically implemented for every [`Associative`] container.
pub trait EnumKeyedExt: Associative {
    /// Returns the value stored under the label of `key`.
    ///
    /// # Results
    /// `None` if the label is not present or the container is not string-keyed.
    fn get_by<E: EnumKey>(&self, key: E) -> Option<&Self::Value> {
        let key = resolve::<Self::Key>(key.label())?;
        self.lookup(&key)
    }

    /// Returns a mutable reference to the value stored under the label of `key`.
    fn get_mut_by<E: EnumKey>(&mut self, key: E) -> Option<&mut Self::Value> {
        let key = resolve::<Self::Key>(key.label())?;
        self.lookup_mut(&key)
    }

    /// Stores `value` under the label of `key`.
    ///
    /// # Results
    /// The displaced value, if any. On a container that is not string-keyed the write is
    /// dropped and `None` is returned.
    fn set_by<E: EnumKey>(&mut self, key: E, value: Self::Value) -> Option<Self::Value> {
        let key = resolve::<Self::Key>(key.label())?;
        self.store(key, value)
    }

    /// Removes the entry under the label of `key`, returning its value.
    fn remove_by<E: EnumKey>(&mut self, key: E) -> Option<Self::Value> {
        let key = resolve::<Self::Key>(key.label())?;
        self.discard(&key)
    }

    /// Returns `true` if the container holds an entry under the label of `key`.
    fn contains_by<E: EnumKey>(&self, key: E) -> bool {
        self.get_by(key).is_some()
    }

    /// Borrows the container as an [`EnumKeyedMap`] restricted to the enumeration `E`.
    fn keyed<E: EnumKey>(&mut self) -> EnumKeyedMap<'_, Self, E> {
        EnumKeyedMap::new(self)
    }

    /// Borrows the container read-only as an [`EnumKeyedRef`] restricted to the enumeration `E`.
    fn keyed_ref<E: EnumKey>(&self) -> EnumKeyedRef<'_, Self, E> {
        EnumKeyedRef::new(self)
    }
}

impl<M: Associative + ?Sized> EnumKeyedExt for M {}
