//! ChainedHashMap: fixed bucket array with separate chaining and stable handles.
//!
//! Entries live in a generational slot arena; each bucket is an
//! insertion-ordered chain of slot keys. A key's bucket never changes
//! because the bucket count is fixed at construction.

use crate::error::TableError;
use core::num::NonZeroUsize;
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};

/// Bucket index of `key`: the sum of its Unicode scalar values modulo `size`.
///
/// The sum is accumulated in `u64`, which cannot overflow for any string
/// that fits in memory. The empty string maps to bucket 0.
#[inline]
pub fn char_sum_index(key: &str, size: NonZeroUsize) -> usize {
    let sum: u64 = key.chars().map(|c| u64::from(u32::from(c))).sum();
    (sum % size.get() as u64) as usize
}

/// Stable reference to one entry. Updates through `insert` keep it valid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle(DefaultKey);

impl Handle {
    pub(crate) fn new(k: DefaultKey) -> Self {
        Handle(k)
    }
    pub(crate) fn raw_handle(&self) -> DefaultKey {
        self.0
    }

    /// Key of the referenced entry.
    pub fn key<'a, V>(&self, map: &'a ChainedHashMap<V>) -> Option<&'a str> {
        map.handle_key(*self)
    }

    /// Current value of the referenced entry.
    pub fn value<'a, V>(&self, map: &'a ChainedHashMap<V>) -> Option<&'a V> {
        map.handle_value(*self)
    }

    /// Mutable access to the referenced entry's value, in place.
    pub fn value_mut<'a, V>(&self, map: &'a mut ChainedHashMap<V>) -> Option<&'a mut V> {
        map.handle_value_mut(*self)
    }
}

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
}

/// Separately chained map from `String` keys with a fixed bucket count.
#[derive(Debug)]
pub struct ChainedHashMap<V> {
    size: NonZeroUsize,
    buckets: Vec<Vec<DefaultKey>>, // one chain per bucket, insertion order
    slots: SlotMap<DefaultKey, Entry<V>>,
}

/// Iterator over the entries of a single bucket, head to tail.
pub struct Chain<'a, V> {
    keys: core::slice::Iter<'a, DefaultKey>,
    slots: &'a SlotMap<DefaultKey, Entry<V>>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let &k = self.keys.next()?;
        self.slots.get(k).map(|e| (e.key.as_str(), &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

// Every key in a chain refers to a live slot (there is no removal).
impl<'a, V> ExactSizeIterator for Chain<'a, V> {}

/// Iterator over every bucket's chain, in bucket index order.
pub struct Chains<'a, V> {
    buckets: core::slice::Iter<'a, Vec<DefaultKey>>,
    slots: &'a SlotMap<DefaultKey, Entry<V>>,
}

impl<'a, V> Iterator for Chains<'a, V> {
    type Item = Chain<'a, V>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let keys = self.buckets.next()?;
        Some(Chain {
            keys: keys.iter(),
            slots: self.slots,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.buckets.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for Chains<'a, V> {}

/// Iterator over all entries: bucket order, then chain order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Vec<DefaultKey>>,
    current: core::slice::Iter<'a, DefaultKey>,
    slots: &'a SlotMap<DefaultKey, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Handle, &'a str, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&k) = self.current.next() {
                if let Some(e) = self.slots.get(k) {
                    return Some((Handle::new(k), e.key.as_str(), &e.value));
                }
                continue;
            }
            self.current = self.buckets.next()?.iter();
        }
    }
}

impl<V> ChainedHashMap<V> {
    /// Create a map with `size` empty buckets. Zero buckets is rejected.
    pub fn new(size: usize) -> Result<Self, TableError> {
        let size = NonZeroUsize::new(size).ok_or_else(|| {
            TableError::InvalidConfiguration("bucket count must be at least 1".to_string())
        })?;
        Ok(Self::with_size(size))
    }

    /// Infallible constructor for an already-validated bucket count.
    pub fn with_size(size: NonZeroUsize) -> Self {
        debug!("creating chained hash map with {} buckets", size);
        let mut buckets = Vec::with_capacity(size.get());
        buckets.resize_with(size.get(), Vec::new);
        Self {
            size,
            buckets,
            slots: SlotMap::with_key(),
        }
    }

    /// Number of buckets.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Bucket index of `key`; see [`char_sum_index`].
    #[inline]
    pub fn hash(&self, key: &str) -> usize {
        char_sum_index(key, self.size)
    }

    /// Bucket index of `key` together with its slot, if present.
    fn locate(&self, key: &str) -> (usize, Option<DefaultKey>) {
        let index = self.hash(key);
        let found = self.buckets[index].iter().copied().find(|&k| {
            self.slots
                .get(k)
                .map(|e| e.key == key)
                .unwrap_or(false)
        });
        (index, found)
    }

    /// Insert `value` under `key`.
    ///
    /// An existing entry keeps its chain position and has its value
    /// replaced; the previous value is returned. Otherwise the entry is
    /// appended to the tail of its bucket's chain and `None` is returned.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        let (index, found) = self.locate(&key);
        match found {
            Some(k) => {
                trace!("updating {:?} in bucket {}", key, index);
                self.slots
                    .get_mut(k)
                    .map(|e| core::mem::replace(&mut e.value, value))
            }
            None => {
                trace!(
                    "appending {:?} to bucket {} at position {}",
                    key,
                    index,
                    self.buckets[index].len()
                );
                let k = self.slots.insert(Entry { key, value });
                self.buckets[index].push(k);
                None
            }
        }
    }

    /// Handle to the entry stored under `key`, if any.
    pub fn find(&self, key: &str) -> Option<Handle> {
        let (index, found) = self.locate(key);
        trace!("lookup {:?} in bucket {}: hit={}", key, index, found.is_some());
        found.map(Handle::new)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.locate(key).1.is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).and_then(|h| self.handle_value(h))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let h = self.find(key)?;
        self.handle_value_mut(h)
    }

    pub(crate) fn handle_key(&self, h: Handle) -> Option<&str> {
        self.slots.get(h.raw_handle()).map(|e| e.key.as_str())
    }

    pub(crate) fn handle_value(&self, h: Handle) -> Option<&V> {
        self.slots.get(h.raw_handle()).map(|e| &e.value)
    }

    pub(crate) fn handle_value_mut(&mut self, h: Handle) -> Option<&mut V> {
        self.slots.get_mut(h.raw_handle()).map(|e| &mut e.value)
    }

    /// Entries of bucket `index` in chain order; `None` when out of range.
    pub fn chain(&self, index: usize) -> Option<Chain<'_, V>> {
        self.buckets.get(index).map(|keys| Chain {
            keys: keys.iter(),
            slots: &self.slots,
        })
    }

    /// One chain per bucket, `size()` items in total, including empty ones.
    pub fn chains(&self) -> Chains<'_, V> {
        Chains {
            buckets: self.buckets.iter(),
            slots: &self.slots,
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: Default::default(),
            slots: &self.slots,
        }
    }
}
