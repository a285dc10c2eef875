use std::str;

/// Class names and descriptors are short; anything longer only slows the fuzzer down.
pub const MAX_INPUT_SIZE: usize = 4 * 1024;

/// UTF-8 view of `data` capped at `MAX_INPUT_SIZE` bytes.
///
/// The cap may split a multibyte codepoint, so up to 3 trailing bytes are trimmed before giving
/// up on the input.
#[inline]
pub fn truncate_utf8(data: &[u8]) -> Option<&str> {
    let cap = data.len().min(MAX_INPUT_SIZE);
    (0..=3.min(cap)).find_map(|trim| str::from_utf8(&data[..cap - trim]).ok())
}
