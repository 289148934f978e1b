//! Vouch Protocol Buffers
//!
//! Wire messages for the scannable safety-number payload, matching
//! `proto/vouch/v1/fingerprint.proto`.
//!
//! The messages are declared with `prost` derives rather than generated at
//! build time, so the crate builds without `protoc`. Field numbers and
//! `proto2` optional semantics must stay byte-compatible with other
//! implementations of the same payload.

#![allow(clippy::derive_partial_eq_without_eq)]

/// Vouch v1 wire definitions.
pub mod v1 {
    /// One side's truncated fingerprint digest.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct LogicalFingerprint {
        #[prost(bytes = "vec", optional, tag = "1")]
        pub content: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    }

    /// Both truncated digests plus the scannable protocol version.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CombinedFingerprints {
        #[prost(uint32, optional, tag = "1")]
        pub version: ::core::option::Option<u32>,
        #[prost(message, optional, tag = "2")]
        pub local_fingerprint: ::core::option::Option<LogicalFingerprint>,
        #[prost(message, optional, tag = "3")]
        pub remote_fingerprint: ::core::option::Option<LogicalFingerprint>,
    }
}

// Re-export v1 as the default API version for convenience
pub use v1::*;
