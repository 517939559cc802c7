// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use smbios_uuid_macros::smbios_uuid;
use uuid::fmt::Hyphenated;
use uuid::Uuid;

use crate::order::{reorder, reorder_in_place, UUID_LEN};
use crate::{Error, Result};

/// A 128-bit universally unique identifier in the byte order of DSP0134.
///
/// SMBIOS firmware stores the System UUID with `time_low`, `time_mid` and
/// `time_hi_and_version` little endian. This type keeps those bytes exactly
/// as they appear in the firmware tables, and converts to an RFC 4122
/// [`Uuid`] whenever text is involved.
///
/// Most methods of [`Uuid`] can be reached through [`to_uuid`]:
///
/// ```
/// use smbios_uuid::SmbiosUuid;
///
/// let id: SmbiosUuid = "a8098c1a-f86e-11da-bd1a-00112444be1e".parse()?;
/// assert_eq!(id.to_uuid().get_version_num(), 1);
/// # Ok::<(), smbios_uuid::Error>(())
/// ```
///
/// The `Display` formatter prints the lowercase hyphenated RFC 4122 form:
/// `aabbccdd-eeff-gghh-iijj-kkllmmnnoopp`.
///
/// [`to_uuid`]: SmbiosUuid::to_uuid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SmbiosUuid([u8; UUID_LEN]);

impl SmbiosUuid {
    /// Length of the canonical hyphenated text form.
    pub const TEXT_LEN: usize = Hyphenated::LENGTH;

    /// All bytes `FFh`: firmware has no System UUID yet, but one can be set.
    ///
    /// The all-zero [`nil`] value means the UUID is not present at all.
    ///
    /// [`nil`]: SmbiosUuid::nil
    pub const NOT_SET: Self = smbios_uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

    /// The all-zero UUID.
    #[must_use]
    pub const fn nil() -> Self {
        Self([0; UUID_LEN])
    }

    /// Creates a UUID from bytes already in DSP0134 order.
    ///
    /// No reordering takes place; this is how bytes read from an SMBIOS
    /// structure should be wrapped.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; UUID_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from bytes in RFC 4122 order.
    #[must_use]
    pub const fn from_rfc4122_bytes(bytes: [u8; UUID_LEN]) -> Self {
        Self(reorder(bytes))
    }

    /// Creates a UUID by copying a slice of DSP0134-ordered bytes.
    ///
    /// Returns [`Error::Length`] unless `bytes` is exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        <[u8; UUID_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::Length(bytes.len()))
    }

    /// Converts an RFC 4122 [`Uuid`] into DSP0134 order.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self::from_rfc4122_bytes(uuid.into_bytes())
    }

    /// Converts into an RFC 4122 [`Uuid`].
    #[must_use]
    pub const fn to_uuid(self) -> Uuid {
        Uuid::from_bytes(reorder(self.0))
    }

    /// Parses a textual UUID such as `00112233-4455-6677-8899-aabbccddeeff`.
    ///
    /// Any form accepted by [`Uuid::parse_str`] is accepted; the text is
    /// read as an RFC 4122 UUID and stored in DSP0134 order.
    pub fn parse_str(input: &str) -> Result<Self> {
        Ok(Self::from_uuid(Uuid::parse_str(input)?))
    }

    /// Like [`parse_str`], but takes the text as a byte slice.
    ///
    /// [`parse_str`]: SmbiosUuid::parse_str
    pub fn try_parse_ascii(input: &[u8]) -> Result<Self> {
        Ok(Self::from_uuid(Uuid::try_parse_ascii(input)?))
    }

    /// Returns the stored bytes, in DSP0134 order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.0
    }

    /// Returns the stored bytes by value, in DSP0134 order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; UUID_LEN] {
        self.0
    }

    /// Returns the bytes in RFC 4122 order.
    #[must_use]
    pub const fn to_rfc4122_bytes(self) -> [u8; UUID_LEN] {
        reorder(self.0)
    }

    /// Tests if this is the nil UUID.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        u128::from_ne_bytes(self.0) == 0
    }

    /// Tests if firmware reported an actual System UUID, i.e. neither
    /// [`nil`] nor [`NOT_SET`].
    ///
    /// [`nil`]: SmbiosUuid::nil
    /// [`NOT_SET`]: SmbiosUuid::NOT_SET
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !self.is_nil() && u128::from_ne_bytes(self.0) != u128::MAX
    }

    /// Returns a formatter for the canonical hyphenated text form.
    #[must_use]
    pub const fn hyphenated(self) -> Hyphenated {
        self.to_uuid().hyphenated()
    }

    /// Encodes the canonical lowercase text form as ASCII bytes.
    #[must_use]
    pub fn encode_text(&self) -> [u8; Self::TEXT_LEN] {
        let mut buf = [0; Self::TEXT_LEN];
        self.hyphenated().encode_lower(&mut buf);
        buf
    }

    /// Replaces `self` with the UUID parsed from `text`.
    ///
    /// The text is read as an RFC 4122 UUID, the same as
    /// [`try_parse_ascii`]. On error `self` is left unchanged.
    ///
    /// [`try_parse_ascii`]: SmbiosUuid::try_parse_ascii
    pub fn decode_text(&mut self, text: &[u8]) -> Result {
        let mut bytes = Uuid::try_parse_ascii(text)?.into_bytes();
        reorder_in_place(&mut bytes);
        self.0 = bytes;
        Ok(())
    }

    /// Encodes the stored bytes, without reordering.
    #[must_use]
    pub const fn encode_binary(&self) -> [u8; UUID_LEN] {
        self.0
    }

    /// Replaces `self` with a copy of `bytes`, without reordering.
    ///
    /// Returns [`Error::Length`] unless `bytes` is exactly 16 bytes long, in
    /// which case `self` is left unchanged.
    pub fn decode_binary(&mut self, bytes: &[u8]) -> Result {
        *self = Self::from_slice(bytes)?;
        Ok(())
    }

    /// Returns the canonical text form as a heap-allocated byte vector.
    #[cfg(feature = "alloc")]
    #[must_use]
    pub fn to_text_vec(self) -> alloc::vec::Vec<u8> {
        self.encode_text().to_vec()
    }

    /// Returns the stored bytes as a heap-allocated byte vector.
    #[cfg(feature = "alloc")]
    #[must_use]
    pub fn to_binary_vec(self) -> alloc::vec::Vec<u8> {
        self.0.to_vec()
    }
}

impl Display for SmbiosUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.hyphenated(), f)
    }
}

impl fmt::LowerHex for SmbiosUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.hyphenated(), f)
    }
}

impl fmt::UpperHex for SmbiosUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.hyphenated(), f)
    }
}

impl FromStr for SmbiosUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl From<Uuid> for SmbiosUuid {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<SmbiosUuid> for Uuid {
    fn from(uuid: SmbiosUuid) -> Self {
        uuid.to_uuid()
    }
}

impl From<[u8; UUID_LEN]> for SmbiosUuid {
    fn from(bytes: [u8; UUID_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<SmbiosUuid> for [u8; UUID_LEN] {
    fn from(uuid: SmbiosUuid) -> Self {
        uuid.to_bytes()
    }
}

impl TryFrom<&[u8]> for SmbiosUuid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for SmbiosUuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// UEFI GUIDs use the same mixed-endian layout as DSP0134.
#[cfg(feature = "uguid")]
impl From<uguid::Guid> for SmbiosUuid {
    fn from(guid: uguid::Guid) -> Self {
        Self::from_bytes(guid.to_bytes())
    }
}

#[cfg(feature = "uguid")]
impl From<SmbiosUuid> for uguid::Guid {
    fn from(uuid: SmbiosUuid) -> Self {
        Self::from_bytes(uuid.to_bytes())
    }
}
