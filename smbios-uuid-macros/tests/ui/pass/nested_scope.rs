// The macro only refers to absolute paths, so it works without any imports
// besides itself.
use smbios_uuid::smbios_uuid;

mod inner {
    pub fn nil() -> smbios_uuid::SmbiosUuid {
        smbios_uuid::smbios_uuid!("00000000-0000-0000-0000-000000000000")
    }
}

fn main() {
    assert!(inner::nil().is_nil());
    assert!(!smbios_uuid!("a8098c1a-f86e-11da-bd1a-00112444be1e").is_nil());
}
