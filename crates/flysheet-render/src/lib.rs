//! Document rendering for Flysheet.
//!
//! Turns a text payload into the bytes of a downloadable document. The
//! lifecycle core only consumes the [`DocumentRenderer`] trait; the one
//! shipped implementation is [`PdfRenderer`], a minimal single-page PDF
//! emitter. Layout fidelity is deliberately out of scope — the output is a
//! well-formed PDF with the text placed on one fixed page, nothing more.

pub mod error;
pub mod pdf;
pub mod traits;

pub use error::{RenderError, RenderResult};
pub use pdf::PdfRenderer;
pub use traits::DocumentRenderer;
