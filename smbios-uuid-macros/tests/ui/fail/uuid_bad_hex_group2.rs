use smbios_uuid::smbios_uuid;

fn main() {
    // Fail because the second group is not hexadecimal.
    let _ = smbios_uuid!("aaaaaaaa-Gaaa-aaaa-aaaa-aaaaaaaaaaaa");
}
