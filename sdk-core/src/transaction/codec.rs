//! # Transaction Binary Codec
//!
//! Converts between [`Transaction`] values and the byte layout the network
//! accepts. All integers are little-endian.
//!
//! ```text
//! offset  size  field
//! 0       4     size (whole transaction, u32)
//! 4       64    signature      (zero until signed)
//! 68      32    signer key     (zero until signed)
//! 100     1     version
//! 101     1     network type
//! 102     2     transaction type
//! 104     8     max fee
//! 112     8     deadline
//! 120     ..    body
//! ```
//!
//! Inner transactions of an aggregate use a 40-byte header (size, signer,
//! version, network, type) and are zero-padded to a multiple of 8 bytes.
//! Padding is counted by the aggregate's payload size but not by the inner
//! size field.

use thiserror::Error;
use tracing::{debug, trace};

use super::aggregate::{padded_len, padding_len, AggregateBody, Cosignature, EmbeddedTransaction};
use super::body::{
    AddressAliasBody, HashLockBody, MosaicAliasBody, MosaicDefinitionBody, MosaicMetadataBody,
    MosaicSupplyChangeBody, NamespaceRegistration, RegisterNamespaceBody, TransactionBody,
    TransferBody,
};
use super::builder::Transaction;
use super::reader::Reader;
use super::types::{
    AliasAction, Deadline, Message, Mosaic, MosaicFlags, MosaicSupplyDirection, TransactionType,
};
use crate::config::{
    COSIGNATURE_SIZE, EMBEDDED_HEADER_SIZE, SIZE_FIELD_LENGTH, TRANSACTION_HEADER_SIZE,
};
use crate::crypto::keys::{PublicKey, Signature};
use crate::identity::{
    Address, MosaicId, MosaicNonce, NamespaceId, NetworkType, UnresolvedAddress,
    UnresolvedMosaicId,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("{field} is {len} bytes, its length prefix allows at most {max}")]
    FieldTooLarge {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{transaction_type} cannot be embedded in an aggregate")]
    NestedAggregate { transaction_type: TransactionType },
}

impl CodecError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }
}

/// Result of [`decode`]: the logical transaction plus whatever signing
/// material the payload carried. All-zero placeholders decode to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTransaction {
    pub transaction: Transaction,
    pub signer: Option<PublicKey>,
    pub signature: Option<Signature>,
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Serializes `tx` with zero signature and signer placeholders.
pub fn encode(tx: &Transaction) -> Result<Vec<u8>, CodecError> {
    let body = encode_body(&tx.body, tx.network_type)?;
    let size = TRANSACTION_HEADER_SIZE + body.len();
    let size_field: u32 = length_prefix(size, "transaction", u32::MAX as usize)?;

    let mut buf = Vec::with_capacity(size);
    buf.extend_from_slice(&size_field.to_le_bytes());
    buf.extend_from_slice(Signature::ZERO.as_bytes());
    buf.extend_from_slice(PublicKey::ZERO.as_bytes());
    buf.push(tx.version);
    buf.push(tx.network_type.as_byte());
    buf.extend_from_slice(&tx.transaction_type().code().to_le_bytes());
    buf.extend_from_slice(&tx.max_fee.to_le_bytes());
    buf.extend_from_slice(&tx.deadline.network_time().to_le_bytes());
    buf.extend_from_slice(&body);

    trace!(tx_type = %tx.transaction_type(), size, "encoded transaction");
    Ok(buf)
}

/// Serializes one inner transaction, without trailing padding.
pub fn encode_embedded(inner: &EmbeddedTransaction) -> Result<Vec<u8>, CodecError> {
    let transaction_type = inner.body.transaction_type();
    if transaction_type.is_aggregate() {
        return Err(CodecError::NestedAggregate { transaction_type });
    }

    let body = encode_body(&inner.body, inner.network_type)?;
    let size = EMBEDDED_HEADER_SIZE + body.len();
    let size_field: u32 = length_prefix(size, "inner transaction", u32::MAX as usize)?;

    let mut buf = Vec::with_capacity(padded_len(size));
    buf.extend_from_slice(&size_field.to_le_bytes());
    buf.extend_from_slice(inner.signer.as_bytes());
    buf.push(inner.version);
    buf.push(inner.network_type.as_byte());
    buf.extend_from_slice(&transaction_type.code().to_le_bytes());
    buf.extend_from_slice(&body);
    Ok(buf)
}

fn length_prefix<T: TryFrom<usize>>(
    len: usize,
    field: &'static str,
    max: usize,
) -> Result<T, CodecError> {
    T::try_from(len).map_err(|_| CodecError::FieldTooLarge { field, len, max })
}

fn encode_body(body: &TransactionBody, network: NetworkType) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    match body {
        TransactionBody::Transfer(b) => encode_transfer(&mut buf, b, network)?,
        TransactionBody::RegisterNamespace(b) => encode_register_namespace(&mut buf, b)?,
        TransactionBody::AddressAlias(b) => {
            buf.push(b.action as u8);
            buf.extend_from_slice(&b.namespace_id.to_le_bytes());
            buf.extend_from_slice(b.address.as_bytes());
        }
        TransactionBody::MosaicAlias(b) => {
            buf.push(b.action as u8);
            buf.extend_from_slice(&b.namespace_id.to_le_bytes());
            buf.extend_from_slice(&b.mosaic_id.to_le_bytes());
        }
        TransactionBody::MosaicDefinition(b) => {
            buf.extend_from_slice(b.nonce.as_bytes());
            buf.extend_from_slice(&b.mosaic_id.to_le_bytes());
            buf.push(b.flags.to_byte());
            buf.push(b.divisibility);
            buf.extend_from_slice(&b.duration.to_le_bytes());
        }
        TransactionBody::MosaicSupplyChange(b) => {
            buf.extend_from_slice(&b.mosaic_id.to_le_bytes());
            buf.push(b.direction as u8);
            buf.extend_from_slice(&b.delta.to_le_bytes());
        }
        TransactionBody::HashLock(b) => {
            buf.extend_from_slice(&b.mosaic.id.to_le_bytes());
            buf.extend_from_slice(&b.mosaic.amount.to_le_bytes());
            buf.extend_from_slice(&b.duration.to_le_bytes());
            buf.extend_from_slice(&b.hash);
        }
        TransactionBody::MosaicMetadata(b) => {
            let value_size: u16 = length_prefix(b.value.len(), "metadata value", u16::MAX as usize)?;
            buf.extend_from_slice(b.target_public_key.as_bytes());
            buf.extend_from_slice(&b.scoped_metadata_key.to_le_bytes());
            buf.extend_from_slice(&b.target_mosaic_id.to_le_bytes());
            buf.extend_from_slice(&b.value_size_delta.to_le_bytes());
            buf.extend_from_slice(&value_size.to_le_bytes());
            buf.extend_from_slice(&b.value);
        }
        TransactionBody::AggregateComplete(b) | TransactionBody::AggregateBonded(b) => {
            encode_aggregate(&mut buf, b)?
        }
    }
    Ok(buf)
}

fn encode_register_namespace(
    buf: &mut Vec<u8>,
    body: &RegisterNamespaceBody,
) -> Result<(), CodecError> {
    let name_len: u8 = length_prefix(body.name.len(), "namespace name", u8::MAX as usize)?;
    buf.push(body.registration.tag());
    match body.registration {
        NamespaceRegistration::Root { duration } => buf.extend_from_slice(&duration.to_le_bytes()),
        NamespaceRegistration::Sub { parent_id } => {
            buf.extend_from_slice(&parent_id.to_le_bytes())
        }
    }
    buf.extend_from_slice(&body.namespace_id.to_le_bytes());
    buf.push(name_len);
    buf.extend_from_slice(body.name.as_bytes());
    Ok(())
}

fn encode_transfer(
    buf: &mut Vec<u8>,
    body: &TransferBody,
    network: NetworkType,
) -> Result<(), CodecError> {
    let payload = body.message.payload();
    let message_size: u16 = length_prefix(payload.len() + 1, "message", u16::MAX as usize)?;
    let mosaic_count: u8 = length_prefix(body.mosaics.len(), "mosaic list", u8::MAX as usize)?;

    buf.extend_from_slice(&body.recipient.to_bytes(network));
    buf.extend_from_slice(&message_size.to_le_bytes());
    buf.push(mosaic_count);
    buf.push(body.message.type_byte());
    buf.extend_from_slice(payload);
    for mosaic in &body.mosaics {
        buf.extend_from_slice(&mosaic.id.to_le_bytes());
        buf.extend_from_slice(&mosaic.amount.to_le_bytes());
    }
    Ok(())
}

fn encode_aggregate(buf: &mut Vec<u8>, body: &AggregateBody) -> Result<(), CodecError> {
    let mut payload = Vec::new();
    for inner in &body.transactions {
        payload.extend_from_slice(&encode_embedded(inner)?);
        payload.resize(padded_len(payload.len()), 0);
    }
    let payload_size: u32 = length_prefix(payload.len(), "aggregate payload", u32::MAX as usize)?;

    buf.extend_from_slice(&payload_size.to_le_bytes());
    buf.extend_from_slice(&payload);
    for cosignature in &body.cosignatures {
        buf.extend_from_slice(cosignature.signer.as_bytes());
        buf.extend_from_slice(cosignature.signature.as_bytes());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Parses a complete top-level payload.
pub fn decode(payload: &[u8]) -> Result<DecodedTransaction, CodecError> {
    let result = decode_transaction(payload);
    if let Err(ref err) = result {
        debug!(len = payload.len(), error = %err, "transaction decode failed");
    }
    result
}

fn decode_transaction(payload: &[u8]) -> Result<DecodedTransaction, CodecError> {
    let mut r = Reader::new(payload);
    let size = r.u32("size")? as usize;
    if size != payload.len() {
        return Err(CodecError::malformed(format!(
            "size field says {} bytes, payload has {}",
            size,
            payload.len()
        )));
    }

    let signature = Signature::from_bytes(r.array("signature")?);
    let signer = PublicKey::from_bytes(r.array("signer")?);
    let version = r.u8("version")?;
    let network_type = network_type(r.u8("network type")?)?;
    let transaction_type = transaction_type(r.u16("transaction type")?)?;
    let max_fee = r.u64("max fee")?;
    let deadline = Deadline::from_network_time(r.u64("deadline")?);

    let body = decode_body(transaction_type, &mut r)?;
    expect_consumed(&r, "transaction body")?;

    Ok(DecodedTransaction {
        transaction: Transaction {
            network_type,
            version,
            max_fee,
            deadline,
            body,
        },
        signer: (!signer.is_zero()).then_some(signer),
        signature: (!signature.is_zero()).then_some(signature),
    })
}

fn network_type(byte: u8) -> Result<NetworkType, CodecError> {
    NetworkType::from_byte(byte)
        .ok_or_else(|| CodecError::malformed(format!("unknown network type 0x{:02X}", byte)))
}

fn transaction_type(code: u16) -> Result<TransactionType, CodecError> {
    TransactionType::from_code(code)
        .ok_or_else(|| CodecError::malformed(format!("unknown transaction type 0x{:04X}", code)))
}

fn expect_consumed(r: &Reader<'_>, what: &str) -> Result<(), CodecError> {
    if r.is_empty() {
        Ok(())
    } else {
        Err(CodecError::malformed(format!(
            "{} trailing bytes after {}",
            r.remaining(),
            what
        )))
    }
}

fn decode_body(tx_type: TransactionType, r: &mut Reader<'_>) -> Result<TransactionBody, CodecError> {
    let body = match tx_type {
        TransactionType::Transfer => TransactionBody::Transfer(decode_transfer(r)?),
        TransactionType::RegisterNamespace => {
            TransactionBody::RegisterNamespace(decode_register_namespace(r)?)
        }
        TransactionType::AddressAlias => TransactionBody::AddressAlias(AddressAliasBody {
            action: alias_action(r.u8("alias action")?)?,
            namespace_id: NamespaceId::new(r.u64("namespace id")?),
            address: Address::from_bytes(r.array("address")?),
        }),
        TransactionType::MosaicAlias => TransactionBody::MosaicAlias(MosaicAliasBody {
            action: alias_action(r.u8("alias action")?)?,
            namespace_id: NamespaceId::new(r.u64("namespace id")?),
            mosaic_id: MosaicId::new(r.u64("mosaic id")?),
        }),
        TransactionType::MosaicDefinition => {
            let nonce = MosaicNonce::new(r.array("mosaic nonce")?);
            let mosaic_id = MosaicId::new(r.u64("mosaic id")?);
            let flags_byte = r.u8("mosaic flags")?;
            let flags = MosaicFlags::from_byte(flags_byte).ok_or_else(|| {
                CodecError::malformed(format!("unknown mosaic flags 0x{:02X}", flags_byte))
            })?;
            TransactionBody::MosaicDefinition(MosaicDefinitionBody {
                nonce,
                mosaic_id,
                flags,
                divisibility: r.u8("divisibility")?,
                duration: r.u64("duration")?,
            })
        }
        TransactionType::MosaicSupplyChange => {
            let mosaic_id = UnresolvedMosaicId::from_raw(r.u64("mosaic id")?);
            let direction_byte = r.u8("supply direction")?;
            let direction = MosaicSupplyDirection::from_byte(direction_byte).ok_or_else(|| {
                CodecError::malformed(format!("unknown supply direction {}", direction_byte))
            })?;
            TransactionBody::MosaicSupplyChange(MosaicSupplyChangeBody {
                mosaic_id,
                direction,
                delta: r.u64("supply delta")?,
            })
        }
        TransactionType::HashLock => TransactionBody::HashLock(HashLockBody {
            mosaic: decode_mosaic(r)?,
            duration: r.u64("lock duration")?,
            hash: r.array("lock hash")?,
        }),
        TransactionType::MosaicMetadata => {
            let target_public_key = PublicKey::from_bytes(r.array("target key")?);
            let scoped_metadata_key = r.u64("scoped metadata key")?;
            let target_mosaic_id = UnresolvedMosaicId::from_raw(r.u64("target mosaic id")?);
            let value_size_delta = r.i16("value size delta")?;
            let value_size = r.u16("value size")? as usize;
            TransactionBody::MosaicMetadata(MosaicMetadataBody {
                target_public_key,
                scoped_metadata_key,
                target_mosaic_id,
                value_size_delta,
                value: r.take(value_size, "metadata value")?.to_vec(),
            })
        }
        TransactionType::AggregateComplete => TransactionBody::AggregateComplete(decode_aggregate(r)?),
        TransactionType::AggregateBonded => TransactionBody::AggregateBonded(decode_aggregate(r)?),
    };
    Ok(body)
}

fn alias_action(byte: u8) -> Result<AliasAction, CodecError> {
    AliasAction::from_byte(byte)
        .ok_or_else(|| CodecError::malformed(format!("unknown alias action {}", byte)))
}

fn decode_mosaic(r: &mut Reader<'_>) -> Result<Mosaic, CodecError> {
    Ok(Mosaic {
        id: UnresolvedMosaicId::from_raw(r.u64("mosaic id")?),
        amount: r.u64("mosaic amount")?,
    })
}

fn decode_register_namespace(r: &mut Reader<'_>) -> Result<RegisterNamespaceBody, CodecError> {
    let tag = r.u8("namespace type")?;
    let registration = match tag {
        0 => NamespaceRegistration::Root {
            duration: r.u64("duration")?,
        },
        1 => NamespaceRegistration::Sub {
            parent_id: NamespaceId::new(r.u64("parent id")?),
        },
        other => {
            return Err(CodecError::malformed(format!(
                "unknown namespace type {}",
                other
            )))
        }
    };
    let namespace_id = NamespaceId::new(r.u64("namespace id")?);
    let name_len = r.u8("name length")? as usize;
    let name = std::str::from_utf8(r.take(name_len, "namespace name")?)
        .map_err(|_| CodecError::malformed("namespace name is not utf-8"))?
        .to_string();
    Ok(RegisterNamespaceBody {
        registration,
        namespace_id,
        name,
    })
}

fn decode_transfer(r: &mut Reader<'_>) -> Result<TransferBody, CodecError> {
    let recipient = UnresolvedAddress::from_bytes(r.array("recipient")?);
    let message_size = r.u16("message size")? as usize;
    let mosaic_count = r.u8("mosaic count")? as usize;
    if message_size == 0 {
        return Err(CodecError::malformed("message has no type byte"));
    }
    let raw = r.take(message_size, "message")?;
    let message = Message::from_parts(raw[0], raw[1..].to_vec())
        .ok_or_else(|| CodecError::malformed(format!("unknown message type {}", raw[0])))?;

    let mut mosaics = Vec::with_capacity(mosaic_count);
    for _ in 0..mosaic_count {
        mosaics.push(decode_mosaic(r)?);
    }
    Ok(TransferBody {
        recipient,
        mosaics,
        message,
    })
}

fn decode_aggregate(r: &mut Reader<'_>) -> Result<AggregateBody, CodecError> {
    let payload_size = r.u32("aggregate payload size")? as usize;
    let mut payload = Reader::new(r.take(payload_size, "aggregate payload")?);

    let mut transactions = Vec::new();
    while !payload.is_empty() {
        transactions.push(decode_embedded(&mut payload)?);
    }

    if r.remaining() % COSIGNATURE_SIZE != 0 {
        return Err(CodecError::malformed(format!(
            "cosignature section of {} bytes is not a multiple of {}",
            r.remaining(),
            COSIGNATURE_SIZE
        )));
    }
    let mut cosignatures = Vec::with_capacity(r.remaining() / COSIGNATURE_SIZE);
    while !r.is_empty() {
        cosignatures.push(Cosignature {
            signer: PublicKey::from_bytes(r.array("cosigner")?),
            signature: Signature::from_bytes(r.array("cosignature")?),
        });
    }

    Ok(AggregateBody {
        transactions,
        cosignatures,
    })
}

fn decode_embedded(r: &mut Reader<'_>) -> Result<EmbeddedTransaction, CodecError> {
    let size = r.u32("inner size")? as usize;
    if size < EMBEDDED_HEADER_SIZE {
        return Err(CodecError::malformed(format!(
            "inner transaction size {} is below the {}-byte header",
            size, EMBEDDED_HEADER_SIZE
        )));
    }
    let mut inner = Reader::new(r.take(size - SIZE_FIELD_LENGTH, "inner transaction")?);

    let signer = PublicKey::from_bytes(inner.array("inner signer")?);
    let version = inner.u8("inner version")?;
    let network_type = network_type(inner.u8("inner network type")?)?;
    let transaction_type = transaction_type(inner.u16("inner transaction type")?)?;
    if transaction_type.is_aggregate() {
        return Err(CodecError::malformed(format!(
            "{} nested inside an aggregate",
            transaction_type
        )));
    }
    let body = decode_body(transaction_type, &mut inner)?;
    expect_consumed(&inner, "inner transaction body")?;

    // Padding content is not significant.
    r.take(padding_len(size), "inner padding")?;

    Ok(EmbeddedTransaction {
        signer,
        network_type,
        version,
        body,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::builder::TransactionBuilder;

    fn builder() -> TransactionBuilder {
        TransactionBuilder::new(NetworkType::MijinTest)
            .deadline(Deadline::from_network_time(1))
    }

    fn header_hex(size: &str, type_le: &str, max_fee: &str) -> String {
        format!(
            "{}{}0190{}{}0100000000000000",
            size,
            "00".repeat(96),
            type_le,
            max_fee
        )
    }

    #[test]
    fn root_namespace_golden_payload() {
        let tx = builder().register_root_namespace("newnamespace", 10_000).unwrap();
        let bytes = encode(&tx).unwrap();
        let expected = format!(
            "{}{}",
            header_hex("96000000", "4e41", "0000000000000000"),
            "0010270000000000007ee9b3b8afdf53c00c6e65776e616d657370616365"
        );
        assert_eq!(bytes.len(), 150);
        assert_eq!(hex::encode(&bytes), expected);
    }

    #[test]
    fn sub_namespace_golden_payload() {
        let parent = NamespaceId::new(4_635_294_387_305_441_662);
        let tx = builder().register_sub_namespace("subnamespace", parent).unwrap();
        let bytes = encode(&tx).unwrap();
        let expected = format!(
            "{}{}",
            header_hex("96000000", "4e41", "0000000000000000"),
            "017ee9b3b8afdf53400312981b7879a3f10c7375626e616d657370616365"
        );
        assert_eq!(hex::encode(&bytes), expected);
    }

    #[test]
    fn unsigned_payload_decodes_without_signing_material() {
        let tx = builder().register_root_namespace("newnamespace", 10_000).unwrap();
        let decoded = decode(&encode(&tx).unwrap()).unwrap();
        assert_eq!(decoded.transaction, tx);
        assert_eq!(decoded.signer, None);
        assert_eq!(decoded.signature, None);
    }

    #[test]
    fn transfer_with_alias_recipient_roundtrip() {
        let tx = builder().max_fee(5).transfer(
            NamespaceId::new(0xC053_DFAF_B8B3_E97E),
            vec![
                Mosaic::new(NamespaceId::new(0x85BB_EA6C_C462_B244), 10),
                Mosaic::new(MosaicId::new(0x0123), 20),
            ],
            Message::plain("hello"),
        );
        let bytes = encode(&tx).unwrap();
        // recipient 25 + sizes 3 + message 6 + two mosaics 32
        assert_eq!(bytes.len(), TRANSACTION_HEADER_SIZE + 66);
        assert_eq!(decode(&bytes).unwrap().transaction, tx);
    }

    #[test]
    fn remaining_kinds_roundtrip() {
        let owner = PublicKey::from_bytes([5; 32]);
        let address = Address::from_hex("9050B9837EFAB4BBE8A4B9BB32D812F9885C00D8FC1650E142").unwrap();
        let txs = vec![
            builder().address_alias(AliasAction::Link, NamespaceId::new(0x8000_0000_0000_0007), address),
            builder().mosaic_alias(AliasAction::Unlink, NamespaceId::new(0x8000_0000_0000_0007), MosaicId::new(9)),
            builder().mosaic_definition(MosaicNonce::from_u32(3), &owner, MosaicFlags::new(true, true, false), 6, 1000),
            builder().mosaic_supply_change(MosaicId::new(9), MosaicSupplyDirection::Increase, 500),
            builder().hash_lock(Mosaic::new(MosaicId::new(9), 10_000_000), 480, [0xAB; 32]),
            builder().mosaic_metadata(owner, 42, MosaicId::new(9), -3, b"value".to_vec()),
        ];
        for tx in txs {
            let decoded = decode(&encode(&tx).unwrap()).unwrap();
            assert_eq!(decoded.transaction, tx, "{} did not roundtrip", tx.transaction_type());
        }
    }

    fn inner_transfer_97() -> EmbeddedTransaction {
        // 40 header + 25 recipient + 3 sizes + 13 message + 16 mosaic = 97
        let tx = builder().transfer(
            NamespaceId::new(0x8000_0000_0000_0001),
            vec![Mosaic::new(MosaicId::new(1), 1)],
            Message::plain("twelve bytes"),
        );
        tx.to_aggregate(PublicKey::from_bytes([1; 32])).unwrap()
    }

    #[test]
    fn inner_transactions_are_padded() {
        let inner = inner_transfer_97();
        assert_eq!(encode_embedded(&inner).unwrap().len(), 97);

        let aggregate = builder().aggregate_complete(vec![inner.clone(), inner]);
        let bytes = encode(&aggregate).unwrap();
        let payload_size = u32::from_le_bytes(bytes[120..124].try_into().unwrap());
        assert_eq!(payload_size, 208);
        assert_eq!(bytes.len(), 120 + 4 + 208);
        // first inner size field still says 97, padding bytes are zero
        assert_eq!(u32::from_le_bytes(bytes[124..128].try_into().unwrap()), 97);
        assert_eq!(&bytes[124 + 97..124 + 104], &[0u8; 7]);
        assert_eq!(decode(&bytes).unwrap().transaction, aggregate);
    }

    #[test]
    fn non_zero_padding_is_tolerated() {
        let aggregate = builder().aggregate_bonded(vec![inner_transfer_97()]);
        let mut bytes = encode(&aggregate).unwrap();
        bytes[124 + 100] = 0xFF;
        assert_eq!(decode(&bytes).unwrap().transaction, aggregate);
    }

    #[test]
    fn cosignatures_roundtrip() {
        let mut aggregate = builder().aggregate_bonded(vec![inner_transfer_97()]);
        if let TransactionBody::AggregateBonded(body) = &mut aggregate.body {
            body.cosignatures.push(Cosignature {
                signer: PublicKey::from_bytes([2; 32]),
                signature: Signature::from_bytes([3; 64]),
            });
        }
        let bytes = encode(&aggregate).unwrap();
        assert_eq!(bytes.len(), 120 + 4 + 104 + 96);
        assert_eq!(decode(&bytes).unwrap().transaction, aggregate);
    }

    #[test]
    fn nested_aggregate_rejected_on_encode() {
        let inner = EmbeddedTransaction {
            signer: PublicKey::ZERO,
            network_type: NetworkType::MijinTest,
            version: 1,
            body: TransactionBody::AggregateComplete(AggregateBody::default()),
        };
        match encode(&builder().aggregate_complete(vec![inner])) {
            Err(CodecError::NestedAggregate { .. }) => {}
            other => panic!("expected NestedAggregate, got {:?}", other),
        }
    }

    #[test]
    fn nested_aggregate_rejected_on_decode() {
        let aggregate = builder().aggregate_complete(vec![inner_transfer_97()]);
        let mut bytes = encode(&aggregate).unwrap();
        // inner type lives at 124 + 38
        bytes[162..164].copy_from_slice(&TransactionType::AggregateBonded.code().to_le_bytes());
        match decode(&bytes) {
            Err(CodecError::MalformedPayload { reason }) => assert!(reason.contains("nested")),
            other => panic!("expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn oversized_name_is_field_too_large() {
        let mut tx = builder().register_root_namespace("abc", 1).unwrap();
        if let TransactionBody::RegisterNamespace(body) = &mut tx.body {
            body.name = "a".repeat(300);
        }
        match encode(&tx) {
            Err(CodecError::FieldTooLarge { field: "namespace name", len: 300, max: 255 }) => {}
            other => panic!("expected FieldTooLarge, got {:?}", other),
        }
    }

    fn expect_malformed(bytes: &[u8]) {
        match decode(bytes) {
            Err(CodecError::MalformedPayload { .. }) => {}
            other => panic!("expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn truncated_payloads_rejected() {
        expect_malformed(&[]);
        expect_malformed(&[0x96, 0, 0]);
        let bytes = encode(&builder().register_root_namespace("abc", 1).unwrap()).unwrap();
        let mut truncated = bytes[..bytes.len() - 1].to_vec();
        let truncated_len = truncated.len() as u32;
        truncated[..4].copy_from_slice(&truncated_len.to_le_bytes());
        expect_malformed(&truncated);
    }

    #[test]
    fn size_mismatch_rejected() {
        let mut bytes = encode(&builder().register_root_namespace("abc", 1).unwrap()).unwrap();
        bytes.push(0);
        expect_malformed(&bytes);
    }

    #[test]
    fn trailing_bytes_after_body_rejected() {
        let mut bytes = encode(&builder().register_root_namespace("abc", 1).unwrap()).unwrap();
        bytes.push(0);
        let len = bytes.len() as u32;
        bytes[..4].copy_from_slice(&len.to_le_bytes());
        match decode(&bytes) {
            Err(CodecError::MalformedPayload { reason }) => assert!(reason.contains("trailing")),
            other => panic!("expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn unknown_type_and_network_rejected() {
        let bytes = encode(&builder().register_root_namespace("abc", 1).unwrap()).unwrap();

        let mut bad_type = bytes.clone();
        bad_type[102..104].copy_from_slice(&[0xFF, 0xFF]);
        expect_malformed(&bad_type);

        let mut bad_network = bytes;
        bad_network[101] = 0x01;
        expect_malformed(&bad_network);
    }

    #[test]
    fn name_length_past_end_rejected() {
        let mut bytes = encode(&builder().register_root_namespace("abc", 1).unwrap()).unwrap();
        // name length byte sits right before the 3-byte name
        let len_at = bytes.len() - 4;
        bytes[len_at] = 200;
        expect_malformed(&bytes);
    }

    #[test]
    fn misaligned_cosignature_section_rejected() {
        let aggregate = builder().aggregate_bonded(vec![inner_transfer_97()]);
        let mut bytes = encode(&aggregate).unwrap();
        bytes.extend_from_slice(&[0u8; 95]);
        let len = bytes.len() as u32;
        bytes[..4].copy_from_slice(&len.to_le_bytes());
        expect_malformed(&bytes);
    }
}
