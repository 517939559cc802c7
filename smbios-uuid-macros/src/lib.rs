// SPDX-License-Identifier: MIT OR Apache-2.0

//! Procedural macros for the `smbios-uuid` crate.

extern crate proc_macro;

use proc_macro::TokenStream;

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Error, LitStr};

macro_rules! err {
    ($span:expr, $message:expr $(,)?) => {
        Error::new($span, $message).to_compile_error()
    };
    ($span:expr, $message:expr, $($args:expr),*) => {
        Error::new($span, format!($message, $($args),*)).to_compile_error()
    };
}

/// Length in bytes of each hyphen-separated group of a canonical UUID.
const GROUP_LENGTHS: [usize; 5] = [4, 2, 2, 2, 6];

/// Create a `SmbiosUuid` at compile time.
///
/// The argument is a canonical RFC 4122 UUID string. The resulting value
/// stores its bytes in DSP0134 order, exactly as `SmbiosUuid::parse_str`
/// would, but a malformed string is a compile error.
///
/// # Example
///
/// ```
/// use smbios_uuid::{smbios_uuid, SmbiosUuid};
///
/// const SYSTEM_UUID: SmbiosUuid = smbios_uuid!("12345678-9abc-def0-1234-56789abcdef0");
/// assert_eq!(SYSTEM_UUID.as_bytes()[..4], [0x78, 0x56, 0x34, 0x12]);
/// ```
#[proc_macro]
pub fn smbios_uuid(args: TokenStream) -> TokenStream {
    let bytes = match parse_uuid(&parse_macro_input!(args as LitStr)) {
        Ok(bytes) => bytes,
        Err(tokens) => return tokens.into(),
    };
    let bytes = bytes.iter();

    quote!({
        const UUID: ::smbios_uuid::SmbiosUuid =
            ::smbios_uuid::SmbiosUuid::from_rfc4122_bytes([#(#bytes),*]);
        UUID
    })
    .into()
}

/// Parses a canonical UUID literal into its RFC 4122 ordered bytes.
fn parse_uuid(uuid_lit: &LitStr) -> Result<[u8; 16], TokenStream2> {
    let uuid_str = uuid_lit.value();

    // We expect a canonical UUID string, such as "12345678-9abc-def0-fedc-ba9876543210"
    if uuid_str.len() != 36 {
        return Err(err!(
            uuid_lit.span(),
            "\"{}\" is not a canonical UUID string (expected 36 bytes, found {})",
            uuid_str,
            uuid_str.len()
        ));
    }
    let groups: Vec<&str> = uuid_str.split('-').collect();
    if groups.len() != GROUP_LENGTHS.len() {
        return Err(err!(
            uuid_lit.span(),
            "\"{}\" is not a canonical UUID string (expected 5 groups, found {})",
            uuid_str,
            groups.len()
        ));
    }

    let lit = uuid_lit.token();
    let mut bytes = [0; 16];
    let mut filled = 0;
    let mut offset = 1; // 1 is for the starting quote
    for (group, len) in groups.into_iter().zip(GROUP_LENGTHS) {
        // Point at the offending group where the compiler supports it.
        let span = lit
            .subspan(offset..offset + group.len())
            .unwrap_or_else(|| uuid_lit.span());

        if group.len() != len * 2 {
            return Err(err!(
                span,
                "UUID group \"{}\" is not a {}-bit hexadecimal string",
                group,
                len * 8
            ));
        }
        if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err!(
                span,
                "UUID group \"{}\" is not a hexadecimal number",
                group
            ));
        }

        for pair in group.as_bytes().chunks(2) {
            bytes[filled] = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
            filled += 1;
        }
        offset += group.len() + 1; // + 1 for the dash
    }

    Ok(bytes)
}

/// Value of an ASCII hex digit that has already been validated.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}
