//! Bulk export artifacts: CSV listings and zip archives of tag images.

use std::io::{Cursor, Write as _};

use chrono::{DateTime, Utc};
use pawtag_core::{identifier::TagStatus, store::IdentifierSummary};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::{
  Error, Result,
  render::{profile_url, render_tag},
};

/// One exportable identifier row, with its linked-profile summary if bound.
#[derive(Debug, Clone)]
pub struct ExportRecord {
  pub code:         String,
  pub status:       TagStatus,
  pub created_at:   DateTime<Utc>,
  pub bound_at:     Option<DateTime<Utc>>,
  pub pet_name:     Option<String>,
  pub contact_name: Option<String>,
}

impl From<IdentifierSummary> for ExportRecord {
  fn from(summary: IdentifierSummary) -> Self {
    Self {
      code:         summary.identifier.code,
      status:       summary.identifier.status,
      created_at:   summary.identifier.created_at,
      bound_at:     summary.identifier.bound_at,
      pet_name:     summary.pet_name,
      contact_name: summary.contact_name,
    }
  }
}

fn status_label(status: TagStatus) -> &'static str {
  match status {
    TagStatus::Unbound => "unbound",
    TagStatus::Bound => "bound",
  }
}

fn date_column(dt: DateTime<Utc>) -> String {
  dt.format("%Y-%m-%d").to_string()
}

/// The columns shared by the full CSV and the archive manifest.
fn base_columns(record: &ExportRecord, base_url: &str) -> [String; 5] {
  [
    record.code.clone(),
    status_label(record.status).to_owned(),
    profile_url(base_url, &record.code),
    date_column(record.created_at),
    record.bound_at.map(date_column).unwrap_or_default(),
  ]
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
  writer
    .into_inner()
    .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
}

/// Full tabular export: header plus one row per identifier. Fields containing
/// commas or quotes are quoted by the writer.
pub fn write_csv(records: &[ExportRecord], base_url: &str) -> Result<Vec<u8>> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record([
    "Code", "Status", "URL", "Created At", "Bound At", "Pet Name", "Contact Name",
  ])?;

  for record in records {
    let mut row = base_columns(record, base_url).to_vec();
    row.push(record.pet_name.clone().unwrap_or_default());
    row.push(record.contact_name.clone().unwrap_or_default());
    writer.write_record(&row)?;
  }

  finish_csv(writer)
}

/// The manifest bundled inside the archive: the base columns only.
fn write_manifest(records: &[ExportRecord], base_url: &str) -> Result<Vec<u8>> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(["Code", "Status", "URL", "Created At", "Bound At"])?;

  for record in records {
    writer.write_record(&base_columns(record, base_url))?;
  }

  finish_csv(writer)
}

/// Zip archive with one rendered `{code}.png` per identifier plus a
/// `manifest.csv`. PNGs are rendered on the fly from the canonical URL.
pub fn write_archive(records: &[ExportRecord], base_url: &str) -> Result<Vec<u8>> {
  let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
  let options =
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

  for record in records {
    let png = render_tag(&record.code, base_url)?;
    zip.start_file(format!("{}.png", record.code), options)?;
    zip.write_all(&png)?;
  }

  zip.start_file("manifest.csv", options)?;
  zip.write_all(&write_manifest(records, base_url)?)?;

  Ok(zip.finish()?.into_inner())
}
