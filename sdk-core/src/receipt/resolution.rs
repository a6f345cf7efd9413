//! # Alias Resolution Index
//!
//! Answers "what did this alias point to when the transaction at `source`
//! executed?". An alias can be re-bound several times inside one block, so
//! the answer is the last entry whose source is at or before the query
//! source, not the final binding.
//!
//! Entries are grouped by alias, sorted by source once at build time, and
//! searched with `partition_point`. The index is immutable after
//! construction and can be shared across threads; a new block gets a new
//! index.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use super::error::ResolutionError;
use super::statement::{ResolutionEntry, ResolutionStatement};
use super::types::ReceiptSource;
use crate::identity::{Address, MosaicId, UnresolvedAddress, UnresolvedMosaicId};

pub type AddressResolutionIndex = AliasResolutionIndex<UnresolvedAddress, Address>;
pub type MosaicResolutionIndex = AliasResolutionIndex<UnresolvedMosaicId, MosaicId>;

#[derive(Debug, Clone)]
pub struct AliasResolutionIndex<U, R> {
    bindings: HashMap<U, Vec<ResolutionEntry<R>>>,
}

impl<U, R> AliasResolutionIndex<U, R>
where
    U: Eq + Hash + Clone + fmt::Debug,
    R: Clone,
{
    /// Builds the index from one block's resolution statements.
    ///
    /// Statements for the same alias are merged. Input order does not
    /// matter. Two entries with the same source for the same alias are
    /// rejected.
    pub fn build<'a, I>(statements: I) -> Result<Self, ResolutionError>
    where
        I: IntoIterator<Item = &'a ResolutionStatement<U, R>>,
        U: 'a,
        R: 'a,
    {
        let mut bindings: HashMap<U, Vec<ResolutionEntry<R>>> = HashMap::new();
        for statement in statements {
            bindings
                .entry(statement.unresolved.clone())
                .or_default()
                .extend(statement.entries.iter().cloned());
        }

        let mut entry_count = 0;
        for (alias, entries) in bindings.iter_mut() {
            entries.sort_by_key(|entry| entry.source);
            if let Some(pair) = entries.windows(2).find(|w| w[0].source == w[1].source) {
                return Err(ResolutionError::DuplicateSource {
                    alias: format!("{:?}", alias),
                    at: pair[0].source,
                });
            }
            entry_count += entries.len();
        }

        debug!(
            aliases = bindings.len(),
            entries = entry_count,
            "built alias resolution index"
        );
        Ok(Self { bindings })
    }

    /// The value `unresolved` was bound to as of `source`.
    pub fn resolve(&self, unresolved: &U, source: ReceiptSource) -> Result<&R, ResolutionError> {
        let entries =
            self.bindings
                .get(unresolved)
                .ok_or_else(|| ResolutionError::UnresolvedAliasNotFound {
                    alias: format!("{:?}", unresolved),
                })?;

        let after = entries.partition_point(|entry| entry.source <= source);
        match after.checked_sub(1) {
            Some(i) => Ok(&entries[i].resolved),
            None => Err(ResolutionError::NoApplicableBinding {
                alias: format!("{:?}", unresolved),
                at: source,
            }),
        }
    }

    /// Sorted entries for one alias.
    pub fn entries(&self, unresolved: &U) -> Option<&[ResolutionEntry<R>]> {
        self.bindings.get(unresolved).map(Vec::as_slice)
    }

    /// Number of distinct aliases.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
