//! Printable-tag artifacts for the pawtag registry.
//!
//! Renders scannable QR tag images and packages bulk exports (CSV, or a zip
//! of per-code images plus a manifest). Pure synchronous; no HTTP or
//! database dependencies. Rendering is byte-deterministic for a given
//! `(code, base_url)`, so images are regenerated on demand instead of being
//! stored.

pub mod error;
mod export;
mod render;

pub use error::{Error, Result};
pub use export::{ExportRecord, write_archive, write_csv};
pub use render::{TAG_SIZE, profile_url, render_tag};
