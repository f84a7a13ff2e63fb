//! Windows-1252 text handling for Western receipt printers
//!
//! Receipt printers sold with hotel PMS setups run code page 16 (WPC1252).
//! Every character maps to one byte there, so a column is one `char`;
//! anything outside the code page prints as `?`.

use tracing::instrument;

/// ESC t 16: select WPC1252 character table
const SELECT_CP1252: [u8; 3] = [0x1B, 0x74, 16];

/// Printed width of a string in columns
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Cut a string down to `max_width` columns
pub fn truncate(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad (or truncate) a string to exactly `width` columns
pub fn pad(s: &str, width: usize, align_right: bool) -> String {
    let current = text_width(s);
    if current >= width {
        return truncate(s, width);
    }
    let fill = " ".repeat(width - current);
    if align_right {
        format!("{}{}", fill, s)
    } else {
        format!("{}{}", s, fill)
    }
}

/// Encode a UTF-8 ESC/POS stream to Windows-1252
///
/// ASCII bytes pass through untouched so command sequences survive. Runs of
/// non-ASCII bytes are decoded as UTF-8 and re-encoded. The code page is
/// selected up front and again after every ESC @ (init resets it).
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn encode_cp1252(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 8);
    out.extend_from_slice(&SELECT_CP1252);

    let mut pending = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == 0x1B && bytes.get(i + 1) == Some(&0x40) {
            flush(&mut pending, &mut out);
            out.extend_from_slice(&[0x1B, 0x40]);
            out.extend_from_slice(&SELECT_CP1252);
            i += 2;
            continue;
        }
        if b.is_ascii() {
            flush(&mut pending, &mut out);
            out.push(b);
        } else {
            pending.push(b);
        }
        i += 1;
    }
    flush(&mut pending, &mut out);
    out
}

fn flush(pending: &mut Vec<u8>, out: &mut Vec<u8>) {
    if pending.is_empty() {
        return;
    }
    let text = String::from_utf8_lossy(pending);
    for c in text.chars() {
        let mut tmp = [0u8; 4];
        let (bytes, _, unmappable) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut tmp));
        if unmappable {
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    pending.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_counts_chars() {
        assert_eq!(text_width("Tea"), 3);
        assert_eq!(text_width("Crème brûlée"), 12);
    }

    #[test]
    fn test_pad_and_truncate() {
        assert_eq!(pad("x2", 5, false), "x2   ");
        assert_eq!(pad("10.00", 8, true), "   10.00");
        assert_eq!(pad("Club Sandwich", 4, false), "Club");
        assert_eq!(truncate("Café", 3), "Caf");
    }

    #[test]
    fn test_encode_keeps_commands_and_maps_accents() {
        let mut input = vec![0x1B, 0x61, 0x01];
        input.extend_from_slice("Café".as_bytes());
        let out = encode_cp1252(&input);

        assert_eq!(&out[..3], &SELECT_CP1252);
        assert_eq!(&out[3..6], &[0x1B, 0x61, 0x01]);
        assert_eq!(&out[6..], &[b'C', b'a', b'f', 0xE9]);
    }

    #[test]
    fn test_encode_reselects_after_init() {
        let out = encode_cp1252(&[0x1B, 0x40, b'A']);
        assert_eq!(out, vec![0x1B, 0x74, 16, 0x1B, 0x40, 0x1B, 0x74, 16, b'A']);
    }

    #[test]
    fn test_unmappable_becomes_question_mark() {
        let out = encode_cp1252("茶".as_bytes());
        assert_eq!(&out[3..], b"?");
    }
}
