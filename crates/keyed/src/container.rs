use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A mapping from unique keys to values that the enum-keyed accessor can operate on.
///
/// The method names deliberately avoid the inherent `get`/`insert` of the std maps so that
/// importing this trait never shadows them.
pub trait Associative {
    type Key: 'static;
    type Value;

    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn lookup_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;

    /// Inserts `value`, returning the value previously stored under `key`.
    fn store(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Removes the entry under `key`, returning its value.
    fn discard(&mut self, key: &Self::Key) -> Option<Self::Value>;
}

impl<K, V, S> Associative for HashMap<K, V, S>
where
    K: Eq + Hash + 'static,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn store(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn discard(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}

impl<K, V> Associative for BTreeMap<K, V>
where
    K: Ord + 'static,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn store(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn discard(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}

#[cfg(feature = "json")]
impl Associative for serde_json::Map<String, serde_json::Value> {
    type Key = String;
    type Value = serde_json::Value;

    fn lookup(&self, key: &String) -> Option<&serde_json::Value> {
        self.get(key.as_str())
    }

    fn lookup_mut(&mut self, key: &String) -> Option<&mut serde_json::Value> {
        self.get_mut(key.as_str())
    }

    fn store(&mut self, key: String, value: serde_json::Value) -> Option<serde_json::Value> {
        self.insert(key, value)
    }

    fn discard(&mut self, key: &String) -> Option<serde_json::Value> {
        self.remove(key.as_str())
    }
}
