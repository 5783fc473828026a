use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::model::list::TodoList;

/// Error type for fragment decoding
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("fragment is not valid UTF-8 after percent-decoding")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("fragment does not decode to an item list: {0}")]
    Json(#[from] serde_json::Error),
}

/// The `encodeURIComponent` escape set: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded. Links produced
/// here must stay byte-identical to ones produced by a browser page, so the
/// set is pinned rather than borrowed from a URL crate.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode an arbitrary string with the `encodeURIComponent` set.
/// Used for the fragment payload and for the QR data parameter.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Serialize the list to its URL-fragment form: a JSON array of
/// `{"text":…,"done":…}` records, percent-encoded.
pub fn encode_fragment(list: &TodoList) -> String {
    let json = serde_json::to_string(&list.items).expect("item list serializes infallibly");
    encode_component(&json)
}

/// Decode a URL fragment back into a list. An empty fragment means "no
/// saved state" and yields an empty list. Anything else must be
/// percent-encoded JSON as produced by [`encode_fragment`]; malformed input
/// fails fast with a [`CodecError`].
pub fn decode_fragment(fragment: &str) -> Result<TodoList, CodecError> {
    if fragment.is_empty() {
        return Ok(TodoList::new());
    }
    let json = percent_decode_str(fragment).decode_utf8()?;
    let items = serde_json::from_str(&json)?;
    Ok(TodoList { items })
}
