use smbios_uuid::smbios_uuid;

fn main() {
    // Fail because the hyphens split the string into six groups.
    let _ = smbios_uuid!("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaa-aaaa");
}
