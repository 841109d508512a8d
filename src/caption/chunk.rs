use std::fmt;

/// Number of UTF-16 code units per rotation chunk.
pub const CHUNK_UNITS: usize = 2;

/// A slice of caption text, two UTF-16 code units long (the last chunk may
/// be shorter).
///
/// Chunk boundaries ignore grapheme and surrogate boundaries, so a chunk can
/// hold half of a surrogate pair. The raw units are kept so that joining the
/// chunks always reproduces the source text; `Display` decodes lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    units: Vec<u16>,
}

impl Chunk {
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Splits `text` into consecutive chunks of `CHUNK_UNITS` code units.
pub fn chunk_text(text: &str) -> Vec<Chunk> {
    let units: Vec<u16> = text.encode_utf16().collect();
    units
        .chunks(CHUNK_UNITS)
        .map(|pair| Chunk {
            units: pair.to_vec(),
        })
        .collect()
}

/// Joins chunks back into a string. Lossless whenever the chunks came from
/// `chunk_text`.
pub fn join_chunks(chunks: &[Chunk]) -> String {
    let units: Vec<u16> = chunks
        .iter()
        .flat_map(|chunk| chunk.units.iter().copied())
        .collect();
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunks: &[Chunk]) -> Vec<String> {
        chunks.iter().map(Chunk::to_string_lossy).collect()
    }

    #[test]
    fn test_chunk_odd_length_cjk() {
        let chunks = chunk_text("关闭远光灯");
        assert_eq!(texts(&chunks), vec!["关闭", "远光", "灯"]);
    }

    #[test]
    fn test_chunk_even_length_ascii() {
        let chunks = chunk_text("stop");
        assert_eq!(texts(&chunks), vec!["st", "op"]);
    }

    #[test]
    fn test_chunk_empty_text() {
        assert!(chunk_text("").is_empty());
    }

    #[test]
    fn test_chunk_single_unit() {
        let chunks = chunk_text("停");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 1);
    }

    #[test]
    fn test_chunk_count_is_half_units_rounded_up() {
        for text in ["a", "ab", "abc", "减速慢行注意安全", "hello world"] {
            let units = text.encode_utf16().count();
            assert_eq!(chunk_text(text).len(), units.div_ceil(2), "text {text:?}");
        }
    }

    #[test]
    fn test_chunk_splits_surrogate_pair_blindly() {
        // "a" + U+1F6A8 (two units) -> ["a\u{D83D}", "\u{DEA8}"]
        let text = "a🚨";
        let chunks = chunk_text(text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].units()[0], 'a' as u16);
        assert_eq!(chunks[1].len(), 1);
        assert_eq!(join_chunks(&chunks), text);
    }

    #[test]
    fn test_join_reconstructs_text() {
        let text = "前方施工 请绕行";
        assert_eq!(join_chunks(&chunk_text(text)), text);
    }
}
