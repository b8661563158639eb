//! ContactTable: public phone-book surface over `ChainedHashMap<Contact>`.

use crate::chained_hash_map::ChainedHashMap;
use crate::contact::Contact;
use crate::error::TableError;
use core::fmt;
use core::num::NonZeroUsize;
use log::trace;

/// Fixed-size, separately chained table from contact names to contacts.
///
/// The bucket count never changes after construction, so a name's bucket
/// is stable for the table's lifetime. There is no removal.
#[derive(Debug)]
pub struct ContactTable {
    inner: ChainedHashMap<Contact>,
}

impl ContactTable {
    /// Create a table with `size` empty buckets.
    ///
    /// Fails with [`TableError::InvalidConfiguration`] when `size == 0`.
    pub fn new(size: usize) -> Result<Self, TableError> {
        Ok(Self {
            inner: ChainedHashMap::new(size)?,
        })
    }

    pub fn with_size(size: NonZeroUsize) -> Self {
        Self {
            inner: ChainedHashMap::with_size(size),
        }
    }

    /// Number of buckets.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Number of distinct contacts.
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bucket index for `key`: code-point sum modulo `size()`.
    pub fn hash(&self, key: &str) -> usize {
        self.inner.hash(key)
    }

    /// Store `number` under `key`.
    ///
    /// A name already present keeps its bucket and chain position and only
    /// its number changes; a new name is appended to its bucket's chain.
    pub fn insert(&mut self, key: impl Into<String>, number: impl Into<String>) {
        let key = key.into();
        let contact = Contact::new(key.clone(), number);
        if let Some(old) = self.inner.insert(key, contact) {
            trace!("replaced number {:?} for {:?}", old.number, old.name);
        }
    }

    /// Look up a contact by exact name. Absence is `None`, not an error.
    pub fn search(&self, key: &str) -> Option<&Contact> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Contacts stored in bucket `index`, head to tail.
    pub fn bucket(&self, index: usize) -> Option<impl ExactSizeIterator<Item = &Contact> + '_> {
        self.inner.chain(index).map(|chain| chain.map(|(_, c)| c))
    }

    /// All contacts: bucket order, then chain order.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.inner.iter().map(|(_, _, c)| c)
    }

    /// Human-readable dump, one line per bucket. Not a stable format.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContactTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.inner.chains().enumerate() {
            write!(f, "Index {}:", index)?;
            let mut chain = chain.peekable();
            if chain.peek().is_none() {
                f.write_str(" Empty")?;
            }
            for (_, contact) in chain {
                write!(f, " - {}", contact)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
