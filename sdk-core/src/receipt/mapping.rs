//! # Receipt Mapping
//!
//! Turns REST statement DTOs into the typed receipt model.
//!
//! Mapping is all-or-nothing: the first receipt or entry that fails aborts
//! the whole call and no partial [`Statement`] is returned. Receipt types the
//! client has no shape for (levies, transaction groups, the resolution
//! receipt codes) count as unknown.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use super::dto::{
    ArtifactExpiryReceiptDto, BalanceChangeReceiptDto, BalanceTransferReceiptDto,
    InflationReceiptDto, ResolutionStatementDto, StatementsDto, TransactionStatementDto,
};
use super::error::ReceiptError;
use super::receipts::{
    ArtifactExpiryReceipt, ArtifactId, BalanceChangeReceipt, BalanceTransferReceipt,
    InflationReceipt, Receipt,
};
use super::statement::{
    AddressResolutionStatement, MosaicResolutionStatement, ResolutionEntry, ResolutionStatement,
    Statement, TransactionStatement,
};
use super::types::{ReceiptType, ReceiptVersion};
use crate::crypto::keys::PublicKey;
use crate::identity::{Address, MosaicId, NamespaceId, UnresolvedAddress, UnresolvedMosaicId};

fn invalid<E: fmt::Display>(field: &'static str) -> impl FnOnce(E) -> ReceiptError {
    move |err| ReceiptError::InvalidField {
        field,
        reason: err.to_string(),
    }
}

fn check_version(version: u8, expected: u8) -> Result<(), ReceiptError> {
    if version == expected {
        Ok(())
    } else {
        Err(ReceiptError::InvalidField {
            field: "version",
            reason: format!("expected {}, got {}", expected, version),
        })
    }
}

/// Stateless DTO to model conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptMapper;

impl ReceiptMapper {
    // ---- Statements ----

    /// Maps every statement of one block.
    pub fn map_statements(dto: &StatementsDto) -> Result<Statement, ReceiptError> {
        let result = Self::map_statements_inner(dto);
        match &result {
            Ok(statement) => trace!(
                transaction_statements = statement.transaction_statements.len(),
                address_resolutions = statement.address_resolution_statements.len(),
                mosaic_resolutions = statement.mosaic_resolution_statements.len(),
                "mapped statements"
            ),
            Err(err) => debug!(error = %err, "statement mapping failed"),
        }
        result
    }

    fn map_statements_inner(dto: &StatementsDto) -> Result<Statement, ReceiptError> {
        let transaction_statements = dto
            .transaction_statements
            .iter()
            .map(Self::map_transaction_statement)
            .collect::<Result<Vec<_>, _>>()?;
        let address_resolution_statements = dto
            .address_resolution_statements
            .iter()
            .map(Self::map_address_resolution_statement)
            .collect::<Result<Vec<_>, _>>()?;
        let mosaic_resolution_statements = dto
            .mosaic_resolution_statements
            .iter()
            .map(Self::map_mosaic_resolution_statement)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Statement {
            transaction_statements,
            address_resolution_statements,
            mosaic_resolution_statements,
        })
    }

    /// Parses a whole statements document, as served by
    /// `/blocks/{height}/receipts`.
    pub fn map_statements_json(json: &str) -> Result<Statement, ReceiptError> {
        let dto: StatementsDto = serde_json::from_str(json)?;
        Self::map_statements(&dto)
    }

    pub fn map_transaction_statement(
        dto: &TransactionStatementDto,
    ) -> Result<TransactionStatement, ReceiptError> {
        let body = &dto.statement;
        let receipts = body
            .receipts
            .iter()
            .map(Self::map_receipt)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TransactionStatement {
            height: body.height,
            source: body.source.into(),
            receipts,
        })
    }

    pub fn map_address_resolution_statement(
        dto: &ResolutionStatementDto,
    ) -> Result<AddressResolutionStatement, ReceiptError> {
        map_resolution(
            dto,
            |raw| UnresolvedAddress::from_hex(raw).map_err(invalid("unresolved")),
            |raw| Address::from_hex(raw).map_err(invalid("resolved")),
        )
    }

    pub fn map_mosaic_resolution_statement(
        dto: &ResolutionStatementDto,
    ) -> Result<MosaicResolutionStatement, ReceiptError> {
        map_resolution(
            dto,
            |raw| UnresolvedMosaicId::from_hex(raw).map_err(invalid("unresolved")),
            |raw| MosaicId::from_hex(raw).map_err(invalid("resolved")),
        )
    }

    // ---- Receipts ----

    /// Maps one raw receipt, dispatching on its `type` field.
    pub fn map_receipt(value: &Value) -> Result<Receipt, ReceiptError> {
        let code = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| ReceiptError::InvalidField {
                field: "type",
                reason: "missing or not an unsigned integer".to_string(),
            })?;
        let receipt_type = u16::try_from(code)
            .ok()
            .and_then(ReceiptType::from_code)
            .ok_or(ReceiptError::UnknownReceiptType { code })?;

        match receipt_type {
            ReceiptType::HarvestFee
            | ReceiptType::LockHashCreated
            | ReceiptType::LockHashCompleted
            | ReceiptType::LockHashExpired
            | ReceiptType::LockSecretCreated
            | ReceiptType::LockSecretCompleted
            | ReceiptType::LockSecretExpired => {
                let dto = BalanceChangeReceiptDto::deserialize(value)?;
                Self::map_balance_change(&dto).map(Receipt::BalanceChange)
            }
            ReceiptType::MosaicRentalFee | ReceiptType::NamespaceRentalFee => {
                let dto = BalanceTransferReceiptDto::deserialize(value)?;
                Self::map_balance_transfer(&dto).map(Receipt::BalanceTransfer)
            }
            ReceiptType::MosaicExpired
            | ReceiptType::NamespaceExpired
            | ReceiptType::NamespaceDeleted => {
                let dto = ArtifactExpiryReceiptDto::deserialize(value)?;
                Self::map_artifact_expiry(&dto).map(Receipt::ArtifactExpiry)
            }
            ReceiptType::Inflation => {
                let dto = InflationReceiptDto::deserialize(value)?;
                Self::map_inflation(&dto).map(Receipt::Inflation)
            }
            ReceiptType::MosaicLevy
            | ReceiptType::TransactionGroup
            | ReceiptType::AddressAliasResolution
            | ReceiptType::MosaicAliasResolution => Err(ReceiptError::UnknownReceiptType { code }),
        }
    }

    pub fn map_balance_change(
        dto: &BalanceChangeReceiptDto,
    ) -> Result<BalanceChangeReceipt, ReceiptError> {
        check_version(dto.version, ReceiptVersion::BALANCE_CHANGE)?;
        BalanceChangeReceipt::new(
            ReceiptType::try_from(dto.receipt_type)?,
            PublicKey::from_hex(&dto.target_public_key).map_err(invalid("targetPublicKey"))?,
            MosaicId::from_hex(&dto.mosaic_id).map_err(invalid("mosaicId"))?,
            dto.amount,
        )
    }

    pub fn map_balance_transfer(
        dto: &BalanceTransferReceiptDto,
    ) -> Result<BalanceTransferReceipt, ReceiptError> {
        check_version(dto.version, ReceiptVersion::BALANCE_TRANSFER)?;
        BalanceTransferReceipt::new(
            ReceiptType::try_from(dto.receipt_type)?,
            PublicKey::from_hex(&dto.sender_public_key).map_err(invalid("senderPublicKey"))?,
            Address::from_hex(&dto.recipient_address).map_err(invalid("recipientAddress"))?,
            MosaicId::from_hex(&dto.mosaic_id).map_err(invalid("mosaicId"))?,
            dto.amount,
        )
    }

    /// The artifact id is read as a mosaic id for `MosaicExpired` and as a
    /// namespace id for the namespace types.
    pub fn map_artifact_expiry(
        dto: &ArtifactExpiryReceiptDto,
    ) -> Result<ArtifactExpiryReceipt, ReceiptError> {
        check_version(dto.version, ReceiptVersion::ARTIFACT_EXPIRY)?;
        let receipt_type = ReceiptType::try_from(dto.receipt_type)?;
        let artifact_id = match receipt_type {
            ReceiptType::MosaicExpired => ArtifactId::Mosaic(
                MosaicId::from_hex(&dto.artifact_id).map_err(invalid("artifactId"))?,
            ),
            _ => ArtifactId::Namespace(
                NamespaceId::from_hex(&dto.artifact_id).map_err(invalid("artifactId"))?,
            ),
        };
        ArtifactExpiryReceipt::new(receipt_type, artifact_id)
    }

    pub fn map_inflation(dto: &InflationReceiptDto) -> Result<InflationReceipt, ReceiptError> {
        check_version(dto.version, ReceiptVersion::INFLATION)?;
        let receipt_type = ReceiptType::try_from(dto.receipt_type)?;
        if receipt_type != ReceiptType::Inflation {
            return Err(ReceiptError::ShapeMismatch {
                receipt_type,
                shape: "inflation",
            });
        }
        Ok(InflationReceipt {
            mosaic_id: MosaicId::from_hex(&dto.mosaic_id).map_err(invalid("mosaicId"))?,
            amount: dto.amount,
        })
    }
}

fn map_resolution<U, R>(
    dto: &ResolutionStatementDto,
    parse_unresolved: impl Fn(&str) -> Result<U, ReceiptError>,
    parse_resolved: impl Fn(&str) -> Result<R, ReceiptError>,
) -> Result<ResolutionStatement<U, R>, ReceiptError> {
    let body = &dto.statement;
    let entries = body
        .resolution_entries
        .iter()
        .map(|entry| {
            Ok(ResolutionEntry {
                resolved: parse_resolved(&entry.resolved)?,
                source: entry.source.into(),
            })
        })
        .collect::<Result<Vec<_>, ReceiptError>>()?;
    Ok(ResolutionStatement {
        height: body.height,
        unresolved: parse_unresolved(&body.unresolved)?,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::types::ReceiptSource;
    use serde_json::json;

    const KEY: &str = "B4F12E7C9F6946091E2CB8B6D3A12B50D17CCBBF646386EA27CE2946A7423DCF";
    const ADDRESS: &str = "9050B9837EFAB4BBE8A4B9BB32D812F9885C00D8FC1650E142";

    #[test]
    fn maps_harvest_fee() {
        let receipt = ReceiptMapper::map_receipt(&json!({
            "version": 1,
            "type": 0x2143,
            "targetPublicKey": KEY,
            "mosaicId": "5E62990DCAC5BE8A",
            "amount": "1500"
        }))
        .unwrap();
        match receipt {
            Receipt::BalanceChange(r) => {
                assert_eq!(r.receipt_type(), ReceiptType::HarvestFee);
                assert_eq!(r.mosaic_id, MosaicId::new(0x5E62_990D_CAC5_BE8A));
                assert_eq!(r.amount, 1500);
                assert_eq!(r.target_public_key.to_hex(), KEY);
            }
            other => panic!("expected BalanceChange, got {:?}", other),
        }
    }

    #[test]
    fn maps_rental_fee_transfer() {
        let receipt = ReceiptMapper::map_receipt(&json!({
            "version": 1,
            "type": 0x134E,
            "senderPublicKey": KEY,
            "recipientAddress": ADDRESS,
            "mosaicId": "5E62990DCAC5BE8A",
            "amount": "10"
        }))
        .unwrap();
        match receipt {
            Receipt::BalanceTransfer(r) => {
                assert_eq!(r.receipt_type(), ReceiptType::NamespaceRentalFee);
                assert_eq!(r.recipient_address.to_hex(), ADDRESS);
            }
            other => panic!("expected BalanceTransfer, got {:?}", other),
        }
    }

    #[test]
    fn artifact_kind_follows_type() {
        let mosaic = ReceiptMapper::map_receipt(&json!({
            "version": 1, "type": 0x414D, "artifactId": "2A09B7F9097934C2"
        }))
        .unwrap();
        let namespace = ReceiptMapper::map_receipt(&json!({
            "version": 1, "type": 0x414E, "artifactId": "D401054C1965C26E"
        }))
        .unwrap();
        match (mosaic, namespace) {
            (Receipt::ArtifactExpiry(m), Receipt::ArtifactExpiry(n)) => {
                assert_eq!(m.artifact_id, ArtifactId::Mosaic(MosaicId::new(0x2A09_B7F9_0979_34C2)));
                assert_eq!(
                    n.artifact_id,
                    ArtifactId::Namespace(NamespaceId::new(0xD401_054C_1965_C26E))
                );
            }
            other => panic!("expected two ArtifactExpiry receipts, got {:?}", other),
        }
    }

    #[test]
    fn maps_inflation() {
        let receipt = ReceiptMapper::map_receipt(&json!({
            "version": 1, "type": 0x5143, "mosaicId": "5E62990DCAC5BE8A", "amount": "200"
        }))
        .unwrap();
        assert_eq!(
            receipt,
            Receipt::Inflation(InflationReceipt {
                mosaic_id: MosaicId::new(0x5E62_990D_CAC5_BE8A),
                amount: 200
            })
        );
    }

    #[test]
    fn unknown_code_rejected() {
        match ReceiptMapper::map_receipt(&json!({ "version": 1, "type": 0x9999 })) {
            Err(ReceiptError::UnknownReceiptType { code: 0x9999 }) => {}
            other => panic!("expected UnknownReceiptType, got {:?}", other),
        }
    }

    #[test]
    fn code_wider_than_u16_rejected() {
        match ReceiptMapper::map_receipt(&json!({ "version": 1, "type": 0x1_2143u64 })) {
            Err(ReceiptError::UnknownReceiptType { code: 0x1_2143 }) => {}
            other => panic!("expected UnknownReceiptType, got {:?}", other),
        }
    }

    #[test]
    fn non_receipt_codes_rejected() {
        for code in [0x124Du64, 0xE143, 0xF143, 0xF243] {
            match ReceiptMapper::map_receipt(&json!({ "version": 1, "type": code })) {
                Err(ReceiptError::UnknownReceiptType { code: c }) => assert_eq!(c, code),
                other => panic!("expected UnknownReceiptType, got {:?}", other),
            }
        }
    }

    #[test]
    fn missing_type_is_invalid_field() {
        match ReceiptMapper::map_receipt(&json!({ "version": 1 })) {
            Err(ReceiptError::InvalidField { field: "type", .. }) => {}
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn bad_hex_is_invalid_field() {
        match ReceiptMapper::map_receipt(&json!({
            "version": 1, "type": 0x5143, "mosaicId": "not-hex", "amount": "1"
        })) {
            Err(ReceiptError::InvalidField { field: "mosaicId", .. }) => {}
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn missing_field_is_json_error() {
        match ReceiptMapper::map_receipt(&json!({ "version": 1, "type": 0x5143 })) {
            Err(ReceiptError::Json(_)) => {}
            other => panic!("expected Json, got {:?}", other),
        }
    }

    #[test]
    fn unsupported_version_rejected() {
        match ReceiptMapper::map_receipt(&json!({
            "version": 2, "type": 0x5143, "mosaicId": "01", "amount": "1"
        })) {
            Err(ReceiptError::InvalidField { field: "version", .. }) => {}
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn one_bad_receipt_aborts_the_statement() {
        let dto: StatementsDto = serde_json::from_value(json!({
            "transactionStatements": [{
                "statement": {
                    "height": "7",
                    "source": { "primaryId": 0, "secondaryId": 0 },
                    "receipts": [
                        { "version": 1, "type": 0x5143, "mosaicId": "01", "amount": "1" },
                        { "version": 1, "type": 0x0001 }
                    ]
                }
            }]
        }))
        .unwrap();
        match ReceiptMapper::map_statements(&dto) {
            Err(ReceiptError::UnknownReceiptType { code: 1 }) => {}
            other => panic!("expected UnknownReceiptType, got {:?}", other),
        }
    }

    #[test]
    fn maps_mosaic_resolution_statement() {
        let dto: ResolutionStatementDto = serde_json::from_value(json!({
            "statement": {
                "height": "12",
                "unresolved": "85BBEA6CC462B244",
                "resolutionEntries": [
                    { "source": { "primaryId": 1, "secondaryId": 0 }, "resolved": "5E62990DCAC5BE8A" },
                    { "source": { "primaryId": 4, "secondaryId": 2 }, "resolved": "0DC67FBE1CAD29E3" }
                ]
            }
        }))
        .unwrap();
        let statement = ReceiptMapper::map_mosaic_resolution_statement(&dto).unwrap();
        assert_eq!(statement.height, 12);
        assert_eq!(
            statement.unresolved,
            UnresolvedMosaicId::from(NamespaceId::new(0x85BB_EA6C_C462_B244))
        );
        assert_eq!(statement.entries.len(), 2);
        assert_eq!(statement.entries[1].source, ReceiptSource::new(4, 2));
        assert_eq!(statement.entries[1].resolved, MosaicId::new(0x0DC6_7FBE_1CAD_29E3));
    }

    #[test]
    fn short_resolved_address_rejected() {
        let dto: ResolutionStatementDto = serde_json::from_value(json!({
            "statement": {
                "height": "1",
                "unresolved": "91D401054C1965C26E00000000000000000000000000000000",
                "resolutionEntries": [
                    { "source": { "primaryId": 1, "secondaryId": 0 }, "resolved": "9050B9" }
                ]
            }
        }))
        .unwrap();
        match ReceiptMapper::map_address_resolution_statement(&dto) {
            Err(ReceiptError::InvalidField { field: "resolved", .. }) => {}
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }
}
