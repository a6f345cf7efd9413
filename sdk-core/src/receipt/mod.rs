//! # Receipt Module
//!
//! Block statements as the node reports them, and the alias resolution that
//! turns a transaction's unresolved references back into concrete values.
//!
//! ## Architecture
//!
//! ```text
//! types.rs      — ReceiptType codes, ReceiptVersion, ReceiptSource
//! receipts.rs   — the four receipt shapes and the Receipt enum
//! statement.rs  — transaction and resolution statements, Statement
//! resolution.rs — AliasResolutionIndex (predecessor lookup by source)
//! dto.rs        — serde shapes of the REST JSON
//! mapping.rs    — ReceiptMapper, DTO to model
//! ```
//!
//! ## Resolution
//!
//! A transaction at source `(primary, secondary)` sees the binding recorded
//! by the last resolution entry at or before that source. Sources compare
//! primary first, then secondary. The index is built once per block and is
//! read-only afterwards.

pub mod dto;
pub mod error;
pub mod mapping;
pub mod receipts;
pub mod resolution;
pub mod statement;
pub mod types;

pub use dto::{
    ArtifactExpiryReceiptDto, BalanceChangeReceiptDto, BalanceTransferReceiptDto,
    InflationReceiptDto, ResolutionEntryDto, ResolutionStatementDto, SourceDto, StatementsDto,
    TransactionStatementDto,
};
pub use error::{ReceiptError, ResolutionError};
pub use mapping::ReceiptMapper;
pub use receipts::{
    ArtifactExpiryReceipt, ArtifactId, BalanceChangeReceipt, BalanceTransferReceipt,
    InflationReceipt, Receipt,
};
pub use resolution::{AddressResolutionIndex, AliasResolutionIndex, MosaicResolutionIndex};
pub use statement::{
    AddressResolutionStatement, MosaicResolutionStatement, ResolutionEntry, ResolutionStatement,
    Statement, TransactionStatement,
};
pub use types::{ReceiptSource, ReceiptType, ReceiptVersion};
