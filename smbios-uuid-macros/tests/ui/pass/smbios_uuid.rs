use smbios_uuid::{smbios_uuid, SmbiosUuid};

// Usable in constant position.
const SAMPLE: SmbiosUuid = smbios_uuid!("00112233-4455-6677-8899-aabbccddeeff");

fn main() {
    assert_eq!(
        SAMPLE.as_bytes(),
        &[
            0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ]
    );
    assert_eq!(
        SAMPLE,
        SmbiosUuid::parse_str("00112233-4455-6677-8899-aabbccddeeff").unwrap()
    );

    // Upper case digits are accepted and render in lower case.
    let upper = smbios_uuid!("00112233-4455-6677-8899-AABBCCDDEEFF");
    assert_eq!(upper, SAMPLE);
    assert_eq!(upper.to_string(), "00112233-4455-6677-8899-aabbccddeeff");
}
