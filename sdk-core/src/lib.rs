// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # NEM SDK Core
//!
//! The client-side half of talking to a Catapult network: everything that
//! must be computed locally before a transaction is announced, and
//! everything needed to make sense of what the chain reports back.
//!
//! ## Architecture
//!
//! - **crypto** — SHA3-256 and the pluggable signature scheme (Ed25519 by
//!   default).
//! - **identity** — namespace and mosaic id derivation, addresses, and the
//!   unresolved (alias) references transactions may carry.
//! - **transaction** — building, encoding, decoding, signing and verifying
//!   transactions, aggregates and cosignatures.
//! - **receipt** — block statements, receipt mapping from REST JSON, and
//!   the alias resolution index.
//! - **config** — wire constants and network parameters.
//!
//! Dependencies only point downwards: `receipt` knows about `identity`,
//! never about `transaction`.
//!
//! ## Design Philosophy
//!
//! 1. Byte-exact with the network. A payload that differs by one bit is a
//!    rejected transaction.
//! 2. Everything is synchronous and pure. Transport, retries and timeouts
//!    belong to the caller.
//! 3. Key material never appears in logs or `Debug` output.

pub mod config;
pub mod crypto;
pub mod identity;
pub mod receipt;
pub mod transaction;
