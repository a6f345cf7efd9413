//! Per-block statements: receipts grouped by source, and alias resolutions.

use super::error::ResolutionError;
use super::receipts::Receipt;
use super::resolution::{AddressResolutionIndex, AliasResolutionIndex, MosaicResolutionIndex};
use super::types::ReceiptSource;
use crate::identity::{Address, MosaicId, UnresolvedAddress, UnresolvedMosaicId};

/// Receipts produced by one transaction (or by the block itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionStatement {
    pub height: u64,
    pub source: ReceiptSource,
    pub receipts: Vec<Receipt>,
}

/// One binding of an alias, effective from `source` onwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionEntry<R> {
    pub resolved: R,
    pub source: ReceiptSource,
}

/// All bindings one alias had within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionStatement<U, R> {
    pub height: u64,
    pub unresolved: U,
    pub entries: Vec<ResolutionEntry<R>>,
}

pub type AddressResolutionStatement = ResolutionStatement<UnresolvedAddress, Address>;
pub type MosaicResolutionStatement = ResolutionStatement<UnresolvedMosaicId, MosaicId>;

/// Everything the chain recorded for a block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statement {
    pub transaction_statements: Vec<TransactionStatement>,
    pub address_resolution_statements: Vec<AddressResolutionStatement>,
    pub mosaic_resolution_statements: Vec<MosaicResolutionStatement>,
}

impl Statement {
    pub fn address_index(&self) -> Result<AddressResolutionIndex, ResolutionError> {
        AliasResolutionIndex::build(&self.address_resolution_statements)
    }

    pub fn mosaic_index(&self) -> Result<MosaicResolutionIndex, ResolutionError> {
        AliasResolutionIndex::build(&self.mosaic_resolution_statements)
    }

    /// Resolves a single address reference. Concrete addresses come back
    /// unchanged. For many lookups build [`Statement::address_index`] once.
    pub fn resolve_address(
        &self,
        unresolved: &UnresolvedAddress,
        source: ReceiptSource,
    ) -> Result<Address, ResolutionError> {
        match unresolved {
            UnresolvedAddress::Address(address) => Ok(*address),
            UnresolvedAddress::Alias(_) => {
                resolve_one(&self.address_resolution_statements, unresolved, source)
            }
        }
    }

    /// Resolves a single mosaic reference. Concrete ids come back unchanged.
    pub fn resolve_mosaic_id(
        &self,
        unresolved: &UnresolvedMosaicId,
        source: ReceiptSource,
    ) -> Result<MosaicId, ResolutionError> {
        match unresolved.mosaic_id() {
            Some(id) => Ok(id),
            None => resolve_one(&self.mosaic_resolution_statements, unresolved, source),
        }
    }
}

fn resolve_one<U, R>(
    statements: &[ResolutionStatement<U, R>],
    unresolved: &U,
    source: ReceiptSource,
) -> Result<R, ResolutionError>
where
    U: Eq + std::hash::Hash + Clone + std::fmt::Debug,
    R: Clone,
{
    let index = AliasResolutionIndex::build(
        statements
            .iter()
            .filter(|statement| &statement.unresolved == unresolved),
    )?;
    index.resolve(unresolved, source).cloned()
}
