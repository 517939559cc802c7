// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`SmbiosUuid`].
//!
//! Human readable formats carry the canonical RFC 4122 string, the same as
//! [`SmbiosUuid::encode_text`]. Binary formats carry the 16 stored bytes
//! without reordering, the same as [`SmbiosUuid::encode_binary`].

use core::fmt::{self, Formatter};

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use super::SmbiosUuid;
use crate::order::UUID_LEN;

impl Serialize for SmbiosUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            let mut buf = [0; SmbiosUuid::TEXT_LEN];
            serializer.serialize_str(self.hyphenated().encode_lower(&mut buf))
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for SmbiosUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(SmbiosUuidVisitor)
        } else {
            deserializer.deserialize_bytes(SmbiosUuidVisitor)
        }
    }
}

struct SmbiosUuidVisitor;

impl<'de> Visitor<'de> for SmbiosUuidVisitor {
    type Value = SmbiosUuid;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a UUID string or 16 bytes")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<SmbiosUuid, E> {
        SmbiosUuid::parse_str(value).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<SmbiosUuid, E> {
        SmbiosUuid::from_slice(value).map_err(|_| E::invalid_length(value.len(), &self))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<SmbiosUuid, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = [0; UUID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            match seq.next_element()? {
                Some(value) => *byte = value,
                None => return Err(de::Error::invalid_length(i, &self)),
            }
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(UUID_LEN + 1, &self));
        }
        Ok(SmbiosUuid::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use serde::de::value::SeqDeserializer;

    const SAMPLE: &str = "00112233-4455-6677-8899-aabbccddeeff";
    const DSP0134: [u8; UUID_LEN] = [
        0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    #[test]
    fn test_json_text() {
        let id = SmbiosUuid::from_bytes(DSP0134);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00112233-4455-6677-8899-aabbccddeeff\"");

        let back: SmbiosUuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_json_rejects_bad_text() {
        assert!(serde_json::from_str::<SmbiosUuid>("\"wrong input\"").is_err());
        assert!(serde_json::from_str::<SmbiosUuid>("42").is_err());
    }

    #[test]
    fn test_visit_seq_keeps_stored_bytes() {
        let seq = SeqDeserializer::<_, serde_json::Error>::new(DSP0134.into_iter());
        let id = SmbiosUuidVisitor.visit_seq(seq).unwrap();
        assert_eq!(id.as_bytes(), &DSP0134);
        assert_eq!(id.to_string(), SAMPLE);

        let short = SeqDeserializer::<_, serde_json::Error>::new(DSP0134[..3].iter().copied());
        assert!(SmbiosUuidVisitor.visit_seq(short).is_err());
    }

    #[test]
    fn test_visit_bytes_keeps_stored_bytes() {
        let id: SmbiosUuid = SmbiosUuidVisitor
            .visit_bytes::<serde_json::Error>(&DSP0134)
            .unwrap();
        assert_eq!(id.as_bytes(), &DSP0134);
        assert!(SmbiosUuidVisitor
            .visit_bytes::<serde_json::Error>(&DSP0134[..15])
            .is_err());
    }
}
