//! QR tag rendering.

use std::io::Cursor;

use image::{DynamicImage, Luma};
use qrcode::{EcLevel, QrCode};

use crate::Result;

/// Minimum edge length of a rendered tag, in pixels. The actual edge is the
/// smallest multiple of the module count at or above this, so the output
/// stays square and crisp at print resolution.
pub const TAG_SIZE: u32 = 1024;

/// The canonical profile URL embedded in every printed tag. This exact shape
/// must never change — tags in the field cannot be re-printed.
pub fn profile_url(base_url: &str, code: &str) -> String {
  format!("{}/pet/{code}", base_url.trim_end_matches('/'))
}

/// Render the tag for `code` as PNG bytes.
///
/// High error correction (level H) so the tag survives scratches on a collar,
/// black-on-white, with the standard four-module quiet zone. Pure function:
/// the same `(code, base_url)` always produces byte-identical output.
pub fn render_tag(code: &str, base_url: &str) -> Result<Vec<u8>> {
  let url = profile_url(base_url, code);
  let qr = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::H)?;

  let img = qr
    .render::<Luma<u8>>()
    .quiet_zone(true)
    .min_dimensions(TAG_SIZE, TAG_SIZE)
    .build();

  let mut buf = Cursor::new(Vec::new());
  DynamicImage::ImageLuma8(img).write_to(&mut buf, image::ImageFormat::Png)?;
  Ok(buf.into_inner())
}
