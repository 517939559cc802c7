// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data type definitions
//!
//! This module defines the identifier type and its serialization surfaces.

mod system_uuid;
pub use self::system_uuid::SmbiosUuid;

#[cfg(feature = "serde")]
mod serialize;
