use smbios_uuid::smbios_uuid;

fn main() {
    // Fail because the length is wrong.
    let _ = smbios_uuid!("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaa");
}
