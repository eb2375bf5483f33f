//! Incremental UTF-8 decoding across chunk boundaries.

/// Decodes a byte stream chunk by chunk.
///
/// A multi-byte character split across two chunks is held back until the
/// rest of it arrives. Invalid sequences decode to U+FFFD instead of failing.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    /// Create a decoder with nothing buffered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk, returning every complete character so far.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::with_capacity(self.pending.len());
        let mut rest: &[u8] = &self.pending;
        loop {
            match std::str::from_utf8(rest) {
                Ok(s) => {
                    out.push_str(s);
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    // valid_up_to() guarantees this prefix is UTF-8
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match e.error_len() {
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[bad..];
                        }
                        // incomplete sequence at the end: keep for next chunk
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        let consumed = self.pending.len() - rest.len();
        self.pending.drain(..consumed);
        out
    }

    /// Flush the decoder at end of stream.
    ///
    /// A dangling incomplete sequence becomes one U+FFFD.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            char::REPLACEMENT_CHARACTER.to_string()
        }
    }

    #[cfg(test)]
    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        let mut dec = Utf8Decoder::new();
        assert_eq!(dec.decode(b"hello"), "hello");
        assert!(!dec.has_pending());
    }

    #[test]
    fn split_multibyte_char_is_reassembled() {
        let bytes = "grüß".as_bytes();
        // 'ü' is 0xC3 0xBC; split between them
        let split = 3;
        let mut dec = Utf8Decoder::new();
        let first = dec.decode(&bytes[..split]);
        assert_eq!(first, "gr");
        assert!(dec.has_pending());
        let second = dec.decode(&bytes[split..]);
        assert_eq!(second, "üß");
        assert_eq!(dec.finish(), "");
    }

    #[test]
    fn four_byte_char_split_byte_by_byte() {
        let bytes = "🦀".as_bytes();
        let mut dec = Utf8Decoder::new();
        let mut out = String::new();
        for b in bytes {
            out.push_str(&dec.decode(std::slice::from_ref(b)));
        }
        assert_eq!(out, "🦀");
    }

    #[test]
    fn invalid_byte_becomes_replacement() {
        let mut dec = Utf8Decoder::new();
        assert_eq!(dec.decode(b"a\xFFb"), "a\u{FFFD}b");
        assert!(!dec.has_pending());
    }

    #[test]
    fn dangling_sequence_flushes_as_replacement() {
        let mut dec = Utf8Decoder::new();
        assert_eq!(dec.decode(&[b'x', 0xE2, 0x82]), "x");
        assert_eq!(dec.finish(), "\u{FFFD}");
        assert!(!dec.has_pending());
    }
}
