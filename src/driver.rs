// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between UUIDs and generic database driver values.
//!
//! Database drivers exchange column values as a small set of primitive
//! kinds, modelled here by [`Value`]. A UUID is stored as its canonical text
//! and can be read back from either text or a binary column:
//!
//! |Driver value|Result of [`Scan::scan`]|
//! |--------|--------|
//! |`Null`, empty `Text`, empty `Bytes`|receiver left unchanged|
//! |`Text`|parsed as a textual UUID|
//! |`Bytes` of 16 bytes|copied as RFC 4122 ordered bytes|
//! |other `Bytes`|parsed as a textual UUID|
//! |anything else|[`Error::UnsupportedType`]|
//!
//! [`Uuid`] implements the pair in RFC 4122 order. [`SmbiosUuid`] goes
//! through the [`Uuid`] implementation and reorders around it, so both types
//! read and write the same column contents.
//!
//! ```
//! use smbios_uuid::driver::{Scan, ToValue, Value};
//! use smbios_uuid::SmbiosUuid;
//!
//! let mut id = SmbiosUuid::nil();
//! id.scan(&Value::from("00112233-4455-6677-8899-aabbccddeeff"))?;
//! assert_eq!(id.as_bytes()[..4], [0x33, 0x22, 0x11, 0x00]);
//! assert_eq!(
//!     id.to_value(),
//!     Value::from("00112233-4455-6677-8899-aabbccddeeff"),
//! );
//! # Ok::<(), smbios_uuid::Error>(())
//! ```

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use uuid::Uuid;

use crate::order::UUID_LEN;
use crate::{Error, Result, SmbiosUuid};

/// A value exchanged with a database driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    /// SQL `NULL`.
    Null,
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// Raw bytes, e.g. a `BLOB` or `bytea` column.
    Bytes(Cow<'a, [u8]>),
    /// Text, e.g. a `TEXT` or `varchar` column.
    Text(Cow<'a, str>),
}

impl Value<'_> {
    /// Name of the value's kind, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
        }
    }

    /// Takes ownership of any borrowed data.
    #[must_use]
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Self::Null => Value::Null,
            Self::Int(v) => Value::Int(v),
            Self::Float(v) => Value::Float(v),
            Self::Bool(v) => Value::Bool(v),
            Self::Bytes(v) => Value::Bytes(Cow::Owned(v.into_owned())),
            Self::Text(v) => Value::Text(Cow::Owned(v.into_owned())),
        }
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(Cow::Borrowed(value))
    }
}

impl From<Vec<u8>> for Value<'_> {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(Cow::Owned(value))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A conversion from a driver [`Value`] into an existing value.
pub trait Scan {
    /// Overwrites `self` with the contents of `src`.
    ///
    /// On error `self` is left unchanged.
    fn scan(&mut self, src: &Value<'_>) -> Result;
}

/// A conversion into a driver [`Value`].
pub trait ToValue {
    /// Returns the driver representation of `self`.
    fn to_value(&self) -> Value<'static>;
}

impl Scan for Uuid {
    fn scan(&mut self, src: &Value<'_>) -> Result {
        match src {
            Value::Null => {
                log::trace!("skipping null driver value");
            }
            Value::Text(text) if text.is_empty() => {}
            Value::Text(text) => *self = Uuid::parse_str(text)?,
            Value::Bytes(bytes) if bytes.is_empty() => {}
            Value::Bytes(bytes) => match <[u8; UUID_LEN]>::try_from(&**bytes) {
                Ok(raw) => *self = Uuid::from_bytes(raw),
                // Text columns are sometimes handed over as raw bytes.
                Err(_) => *self = Uuid::try_parse_ascii(bytes)?,
            },
            other => {
                log::debug!("unable to scan a {} driver value into a UUID", other.kind());
                return Err(Error::UnsupportedType(other.kind()));
            }
        }
        Ok(())
    }
}

impl ToValue for Uuid {
    fn to_value(&self) -> Value<'static> {
        Value::Text(Cow::Owned(self.hyphenated().to_string()))
    }
}

impl Scan for SmbiosUuid {
    fn scan(&mut self, src: &Value<'_>) -> Result {
        let mut uuid = self.to_uuid();
        uuid.scan(src)?;
        *self = Self::from_uuid(uuid);
        Ok(())
    }
}

impl ToValue for SmbiosUuid {
    fn to_value(&self) -> Value<'static> {
        self.to_uuid().to_value()
    }
}
