// Small shared helpers

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};

/// Serializes `value` as JSON indented with two spaces.
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut writer: Vec<u8> = Vec::new();

    let formatter: PrettyFormatter<'_> = PrettyFormatter::with_indent(b"  ");

    let mut ser: Serializer<&mut Vec<u8>, PrettyFormatter<'_>> =
        Serializer::with_formatter(&mut writer, formatter);

    value.serialize(&mut ser)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&writer).into_owned())
}
