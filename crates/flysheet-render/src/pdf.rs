//! Minimal single-page PDF emitter.
//!
//! Writes a complete PDF 1.4 document by hand: catalog, page tree, one
//! page, the built-in Helvetica font, a text content stream, and a valid
//! cross-reference table. The input text is placed one line per input
//! line starting at a fixed origin.

use crate::error::{RenderError, RenderResult};
use crate::traits::DocumentRenderer;

/// Page width in points.
const PAGE_WIDTH: u32 = 600;
/// Page height in points.
const PAGE_HEIGHT: u32 = 400;
/// Font size in points.
const FONT_SIZE: u32 = 15;
/// Text leading (baseline-to-baseline distance) in points.
const LEADING: u32 = 18;
/// First baseline position, from the page's bottom-left corner.
const TEXT_ORIGIN: (u32, u32) = (50, 350);

/// Maximum accepted payload size. Large enough for any realistic page of
/// text, small enough that a hostile payload cannot balloon the store.
const MAX_TEXT_BYTES: usize = 64 * 1024;

/// Renders text into a single-page PDF.
///
/// Uses the built-in Helvetica font, so output needs no embedded font
/// data. Characters outside Latin-1 are substituted with `?` — layout and
/// glyph fidelity are non-goals.
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, text: &str) -> RenderResult<Vec<u8>> {
        if text.len() > MAX_TEXT_BYTES {
            return Err(RenderError::Oversize {
                max: MAX_TEXT_BYTES,
                actual: text.len(),
            });
        }

        let content = content_stream(text);

        // Objects are emitted in order; their byte offsets feed the xref
        // table, which PDF readers require to be exact.
        let mut out: Vec<u8> = Vec::with_capacity(content.len() + 512);
        let mut offsets = [0usize; 6];

        out.extend_from_slice(b"%PDF-1.4\n");

        offsets[1] = out.len();
        out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        offsets[2] = out.len();
        out.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

        offsets[3] = out.len();
        out.extend_from_slice(
            format!(
                "3 0 obj\n<< /Type /Page /Parent 2 0 R \
                 /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                 /Resources << /Font << /F1 4 0 R >> >> \
                 /Contents 5 0 R >>\nendobj\n"
            )
            .as_bytes(),
        );

        offsets[4] = out.len();
        out.extend_from_slice(
            b"4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n",
        );

        offsets[5] = out.len();
        out.extend_from_slice(format!("5 0 obj\n<< /Length {} >>\nstream\n", content.len()).as_bytes());
        out.extend_from_slice(&content);
        out.extend_from_slice(b"\nendstream\nendobj\n");

        let xref_offset = out.len();
        out.extend_from_slice(b"xref\n0 6\n0000000000 65535 f \n");
        for offset in &offsets[1..] {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!("trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n")
                .as_bytes(),
        );

        Ok(out)
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }
}

/// Build the page's text content stream, one `Tj` per input line.
fn content_stream(text: &str) -> Vec<u8> {
    let mut stream = Vec::with_capacity(text.len() + 64);
    stream.extend_from_slice(
        format!(
            "BT\n/F1 {FONT_SIZE} Tf\n{LEADING} TL\n{} {} Td\n",
            TEXT_ORIGIN.0, TEXT_ORIGIN.1
        )
        .as_bytes(),
    );
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            stream.extend_from_slice(b"T*\n");
        }
        stream.push(b'(');
        encode_line(line, &mut stream);
        stream.extend_from_slice(b") Tj\n");
    }
    stream.extend_from_slice(b"ET");
    stream
}

/// Append `line` as a PDF literal string body: parentheses and backslashes
/// escaped, control characters flattened to spaces, non-Latin-1 characters
/// substituted.
fn encode_line(line: &str, out: &mut Vec<u8>) {
    for ch in line.chars() {
        match ch {
            '(' => out.extend_from_slice(b"\\("),
            ')' => out.extend_from_slice(b"\\)"),
            '\\' => out.extend_from_slice(b"\\\\"),
            c if (c as u32) < 0x20 => out.push(b' '),
            c if (c as u32) <= 0xFF => out.push(c as u8),
            _ => out.push(b'?'),
        }
    }
}
