//! ESC/POS command builder

use crate::encoding::{encode_cp1252, text_width, truncate};

/// ESC/POS command builder
///
/// Text is kept as UTF-8 while building and encoded to Windows-1252 by
/// [`EscPosBuilder::build`].
///
/// Common widths: 32 columns on 58mm paper, 48 on 80mm.
pub struct EscPosBuilder {
    buf: Vec<u8>,
    width: usize,
}

impl EscPosBuilder {
    pub fn new(width: usize) -> Self {
        let mut buf = Vec::with_capacity(2048);
        // ESC @
        buf.extend_from_slice(&[0x1B, 0x40]);
        Self { buf, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.push(b'\n');
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push(b'\n');
        self
    }

    /// Print and feed `lines` lines (ESC d n)
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x64, lines]);
        self
    }

    pub fn center(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x01]);
        self
    }

    pub fn left(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x00]);
        self
    }

    pub fn bold(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x01]);
        self
    }

    pub fn bold_off(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x00]);
        self
    }

    /// Double width and height (GS ! 0x11)
    pub fn double_size(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x21, 0x11]);
        self
    }

    pub fn reset_size(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x21, 0x00]);
        self
    }

    pub fn sep_double(&mut self) -> &mut Self {
        self.line(&"=".repeat(self.width))
    }

    pub fn sep_single(&mut self) -> &mut Self {
        self.line(&"-".repeat(self.width))
    }

    /// Left text flush left, right text flush right on one line
    ///
    /// When both do not fit, the left text is shortened so the right text
    /// (usually an amount) is never lost.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let rw = text_width(right);
        let room = self.width.saturating_sub(rw + 1);
        let left = if text_width(left) > room {
            truncate(left, room)
        } else {
            left.to_string()
        };
        let gap = self.width.saturating_sub(text_width(&left) + rw).max(1);
        self.text(&left);
        self.text(&" ".repeat(gap));
        self.line(right)
    }

    /// Feed `lines` then full cut (GS V 66 n)
    pub fn cut(&mut self, lines: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x56, 0x42, lines]);
        self
    }

    /// Encode and return the final byte stream
    pub fn build(self) -> Vec<u8> {
        encode_cp1252(&self.buf)
    }

    /// UTF-8 stream without encoding (previews, tests)
    pub fn build_raw(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new(48)
    }
}
