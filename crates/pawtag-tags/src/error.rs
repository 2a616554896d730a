//! Error types for `pawtag-tags`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("QR encoding error: {0}")]
  Qr(#[from] qrcode::types::QrError),

  #[error("image encoding error: {0}")]
  Image(#[from] image::ImageError),

  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),

  #[error("archive error: {0}")]
  Zip(#[from] zip::result::ZipError),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
