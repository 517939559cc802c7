// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt::{self, Display, Formatter};

use crate::order::UUID_LEN;

/// Return type of the fallible operations in this crate.
pub type Result<T = ()> = core::result::Result<T, Error>;

/// Errors returned when parsing, decoding or scanning a [`SmbiosUuid`].
///
/// [`SmbiosUuid`]: crate::SmbiosUuid
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a valid textual UUID. The wrapped error comes from
    /// the [`uuid`] crate and describes what is wrong with the text.
    Format(uuid::Error),

    /// A binary UUID was expected, but the buffer has the contained length
    /// instead of 16 bytes.
    Length(usize),

    /// A driver value of the named kind can't be interpreted as a UUID.
    UnsupportedType(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => write!(f, "invalid UUID text: {err}"),
            Self::Length(len) => write!(
                f,
                "invalid UUID length: expected {UUID_LEN} bytes, found {len}"
            ),
            Self::UnsupportedType(kind) => {
                write!(f, "unable to scan a {kind} value into a UUID")
            }
        }
    }
}

impl core::error::Error for Error {}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Self::Format(err)
    }
}
