//! # Identity Module
//!
//! Deterministic entity identifiers and the reference types that point at
//! them.
//!
//! The layers:
//!
//! 1. **Network type** — the byte that tags every transaction and address
//!    with the network it belongs to.
//! 2. **Ids** — [`NamespaceId`] and [`MosaicId`], 64-bit values derived by
//!    one-way hashing in [`id_generator`].
//! 3. **Addresses** — raw 25-byte account addresses.
//! 4. **Unresolved references** — a transaction may point at a mosaic or an
//!    address through a namespace alias instead of the concrete value. The
//!    alias is written to the wire as-is; turning it back into the concrete
//!    value is the job of [`crate::receipt::resolution`].
//!
//! ## Design Decisions
//!
//! - Ids are opaque 64-bit patterns. They may print as negative numbers
//!   through [`NamespaceId::as_i64`]; nothing in the SDK ever masks or
//!   normalizes them after derivation.
//! - Namespace ids carry the high bit, mosaic ids never do. That single bit
//!   is how an 8-byte unresolved mosaic reference is classified.

pub mod address;
pub mod error;
pub mod id_generator;
pub mod ids;
pub mod network;

pub use address::{Address, UnresolvedAddress};
pub use error::IdError;
pub use id_generator::{
    derive_mosaic_id, derive_namespace_id, derive_namespace_path, validate_namespace_name,
    MosaicNonce,
};
pub use ids::{MosaicId, NamespaceId, UnresolvedMosaicId};
pub use network::NetworkType;
