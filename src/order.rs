// SPDX-License-Identifier: MIT OR Apache-2.0

//! Byte order conversion between RFC 4122 and DSP0134 UUID layouts.
//!
//! RFC 4122 stores `time_low`, `time_mid` and `time_hi_and_version` big
//! endian, DSP0134 stores the same three fields little endian. The
//! remaining eight bytes are identical in both layouts.
//!
//! The permutation is its own inverse, so the same functions convert in
//! both directions.

/// Length in bytes of a UUID in either layout.
pub const UUID_LEN: usize = 16;

/// Returns `bytes` converted between RFC 4122 and DSP0134 ordering.
///
/// ```
/// use smbios_uuid::order::reorder;
///
/// let rfc4122 = [
///     0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
///     0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
/// ];
/// let dsp0134 = reorder(rfc4122);
/// assert_eq!(dsp0134[..8], [0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66]);
/// assert_eq!(reorder(dsp0134), rfc4122);
/// ```
#[must_use]
pub const fn reorder(bytes: [u8; UUID_LEN]) -> [u8; UUID_LEN] {
    [
        bytes[3], bytes[2], bytes[1], bytes[0], bytes[5], bytes[4], bytes[7], bytes[6], bytes[8],
        bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
    ]
}

/// Like [`reorder`], but converts `bytes` in place.
pub fn reorder_in_place(bytes: &mut [u8; UUID_LEN]) {
    bytes.swap(0, 3);
    bytes.swap(1, 2);
    bytes.swap(4, 5);
    bytes.swap(6, 7);
}

#[cfg(test)]
mod tests {
    use super::*;

    const DSP0134: [u8; UUID_LEN] = [
        0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const RFC4122: [u8; UUID_LEN] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    /// A small deterministic generator so the properties are checked on
    /// more than the hand-picked samples.
    fn pseudo_random_inputs() -> impl Iterator<Item = [u8; UUID_LEN]> {
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        (0..256).map(move |_| {
            let mut bytes = [0; UUID_LEN];
            for chunk in bytes.chunks_mut(8) {
                // xorshift64
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                chunk.copy_from_slice(&state.to_le_bytes());
            }
            bytes
        })
    }

    #[test]
    fn test_reorder_known_value() {
        assert_eq!(reorder(RFC4122), DSP0134);
        assert_eq!(reorder(DSP0134), RFC4122);
    }

    #[test]
    fn test_reorder_is_involution() {
        for bytes in [[0x00; UUID_LEN], [0xff; UUID_LEN], RFC4122, DSP0134]
            .into_iter()
            .chain(pseudo_random_inputs())
        {
            assert_eq!(reorder(reorder(bytes)), bytes);
        }
    }

    #[test]
    fn test_reorder_moves_asymmetric_input() {
        assert_ne!(reorder(RFC4122), RFC4122);

        // Only the first eight bytes move.
        let mut tail_only = [0; UUID_LEN];
        tail_only[8..].copy_from_slice(&RFC4122[8..]);
        assert_eq!(reorder(tail_only), tail_only);
    }

    #[test]
    fn test_reorder_in_place_matches_reorder() {
        for bytes in [[0x00; UUID_LEN], [0xff; UUID_LEN], RFC4122]
            .into_iter()
            .chain(pseudo_random_inputs())
        {
            let mut in_place = bytes;
            reorder_in_place(&mut in_place);
            assert_eq!(in_place, reorder(bytes));
        }
    }

    #[test]
    fn test_reorder_matches_uuid_le_bytes() {
        for bytes in pseudo_random_inputs() {
            let uuid = uuid::Uuid::from_bytes(bytes);
            assert_eq!(reorder(bytes), uuid.to_bytes_le());
            assert_eq!(uuid::Uuid::from_bytes_le(reorder(bytes)), uuid);
        }
    }
}
