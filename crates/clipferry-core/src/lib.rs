//! # Clipferry Core
//!
//! Pure primitives for clipferry: content fingerprints, peer configuration,
//! and byte-size formatting.
//!
//! This crate contains no I/O beyond loading the peer book from disk. The
//! clipboard gateways, the history store, and the sync engine live in their
//! own crates and depend on the types defined here.
//!
//! ## Key Types
//!
//! - [`Fingerprint`] - Fixed-size content digest used as a cheap equality proxy
//! - [`PeerDescriptor`] - One remote endpoint: transport address + remote command
//! - [`PeerBook`] - Named peers and the optional default, loaded from configuration

pub mod bytesize;
pub mod error;
pub mod fingerprint;
pub mod peers;

pub use bytesize::format_bytes;
pub use error::CoreError;
pub use fingerprint::Fingerprint;
pub use peers::{PeerBook, PeerDescriptor};
