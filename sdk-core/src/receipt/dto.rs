//! REST shapes for statements and receipts.
//!
//! Field names are camelCase as the node serves them. 64-bit integers
//! arrive as decimal strings; ids, keys and addresses as hex strings.
//! Receipts inside a transaction statement are kept as raw JSON until their
//! `type` field has been read, since the type selects the shape.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use super::types::ReceiptSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementsDto {
    #[serde(default)]
    pub transaction_statements: Vec<TransactionStatementDto>,
    #[serde(default)]
    pub address_resolution_statements: Vec<ResolutionStatementDto>,
    #[serde(default)]
    pub mosaic_resolution_statements: Vec<ResolutionStatementDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDto {
    pub primary_id: u32,
    pub secondary_id: u32,
}

impl From<SourceDto> for ReceiptSource {
    fn from(dto: SourceDto) -> Self {
        ReceiptSource::new(dto.primary_id, dto.secondary_id)
    }
}

// ---- Transaction statements ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatementDto {
    pub statement: TransactionStatementBodyDto,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatementBodyDto {
    #[serde_as(as = "DisplayFromStr")]
    pub height: u64,
    pub source: SourceDto,
    pub receipts: Vec<serde_json::Value>,
}

// ---- Resolution statements ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionStatementDto {
    pub statement: ResolutionStatementBodyDto,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionStatementBodyDto {
    #[serde_as(as = "DisplayFromStr")]
    pub height: u64,
    /// Hex: a 25-byte unresolved address or a 64-bit unresolved mosaic id.
    pub unresolved: String,
    pub resolution_entries: Vec<ResolutionEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionEntryDto {
    pub source: SourceDto,
    pub resolved: String,
}

// ---- Receipts ----

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChangeReceiptDto {
    pub version: u8,
    #[serde(rename = "type")]
    pub receipt_type: u16,
    pub target_public_key: String,
    pub mosaic_id: String,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: u64,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceTransferReceiptDto {
    pub version: u8,
    #[serde(rename = "type")]
    pub receipt_type: u16,
    pub sender_public_key: String,
    pub recipient_address: String,
    pub mosaic_id: String,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactExpiryReceiptDto {
    pub version: u8,
    #[serde(rename = "type")]
    pub receipt_type: u16,
    pub artifact_id: String,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationReceiptDto {
    pub version: u8,
    #[serde(rename = "type")]
    pub receipt_type: u16,
    pub mosaic_id: String,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: u64,
}
