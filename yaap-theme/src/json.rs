//! JSON output in the layout PHP tooling produces

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Pretty-print `value` with four-space indentation.
///
/// `serde_json` never escapes `/`, so paths stay readable.
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
