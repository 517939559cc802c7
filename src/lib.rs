// SPDX-License-Identifier: MIT OR Apache-2.0

//! UUIDs in the byte order of the SMBIOS System UUID field.
//!
//! The DMTF System Management BIOS Reference Specification (DSP0134) stores
//! UUIDs with their first three fields little endian, unlike RFC 4122 which
//! stores every field big endian. The RFC 4122 encoding of
//! `00112233-4455-6677-8899-aabbccddeeff` is
//!
//! ```text
//! 00 11 22 33 44 55 66 77 88 99 aa bb cc dd ee ff
//! ```
//!
//! whereas DSP0134 lays out the same UUID as
//!
//! ```text
//! 33 22 11 00 55 44 77 66 88 99 aa bb cc dd ee ff
//! ```
//!
//! [`SmbiosUuid`] holds the DSP0134 layout and wraps the [`uuid`] crate for
//! everything else. Text always goes through the RFC 4122 interpretation, so
//! a UUID printed from firmware tables matches what `dmidecode` and friends
//! show. Binary encoding keeps the stored bytes as they are.
//!
//! ```
//! use smbios_uuid::{smbios_uuid, SmbiosUuid};
//!
//! const SAMPLE: SmbiosUuid = smbios_uuid!("00112233-4455-6677-8899-aabbccddeeff");
//!
//! assert_eq!(
//!     SAMPLE.as_bytes()[..8],
//!     [0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66],
//! );
//! assert_eq!(SAMPLE.to_uuid().as_bytes()[..4], [0x00, 0x11, 0x22, 0x33]);
//! ```
//!
//! # Crate organisation
//!
//! - [`order`] contains the byte permutation between the two layouts.
//! - [`SmbiosUuid`] is the identifier type and its text and binary codecs.
//! - [`driver`] adapts both UUID flavours to a generic database value.
//!
//! ## Optional crate features
//!
//! - `alloc` (enabled by default): Enable functionality requiring the
//!   [`alloc`] crate, such as the [`driver`] module and methods returning
//!   a `String`. Also pulls in the `log` facade used by [`driver`].
//! - `serde`: Implement `Serialize` and `Deserialize` for [`SmbiosUuid`].
//!   Human readable formats get the canonical string, other formats get
//!   the 16 stored bytes.
//! - `uguid`: Conversions between [`SmbiosUuid`] and `uguid::Guid`. UEFI
//!   GUIDs share the DSP0134 layout, so no bytes are moved.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]
// Enable some additional warnings and lints.
#![warn(missing_docs, unused)]
#![deny(clippy::all)]
#![deny(clippy::must_use_candidate)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

// allow referring to self as ::smbios_uuid for macros to work universally (from this crate and from others)
extern crate self as smbios_uuid;

pub mod order;

mod data_types;
pub use self::data_types::SmbiosUuid;

mod error;
pub use self::error::{Error, Result};

#[cfg(feature = "alloc")]
pub mod driver;

pub use smbios_uuid_macros::smbios_uuid;

/// Re-export of the RFC 4122 UUID type this crate converts to and from.
pub use uuid::Uuid;
