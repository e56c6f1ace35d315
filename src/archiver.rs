use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};

use crate::error::{Result, ScrapeError};
use crate::models::{Column, ProductRecord};

/// Creates `path` (and any missing parents). Succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ScrapeError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

pub fn csv_file_name(date: NaiveDate) -> String {
    format!("{}.csv", date.format("%Y-%m-%d"))
}

/// Serializes the records under a `Title,Price,ImageURL,URL,Time` header.
/// Empty fields are always written as `""`.
pub fn encode_csv(records: &[ProductRecord]) -> Result<String> {
    let mut out = String::new();
    push_row(&mut out, Column::ALL.iter().map(|column| column.header()))?;
    for record in records {
        push_row(&mut out, Column::ALL.iter().map(|&column| record.get(column)))?;
    }
    Ok(out)
}

/// Writes `<dir>/<date>.csv`, replacing any file of the same name.
pub fn write_csv(dir: &Path, date: NaiveDate, records: &[ProductRecord]) -> Result<PathBuf> {
    let csv = encode_csv(records)?;
    ensure_dir(dir)?;

    let path = dir.join(csv_file_name(date));
    let mut file = File::create(&path)?;
    file.write_all(csv.as_bytes())?;
    tracing::info!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(path)
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) -> Result<()> {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&encode_field(field)?);
    }
    out.push('\n');
    Ok(())
}

// A lone empty field is the one case the csv writer always quotes, so each
// field goes out as its own single-field record.
fn encode_field(field: &str) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record([field])?;
    let mut bytes = writer.into_inner().map_err(|e| e.into_error())?;
    bytes.pop();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
