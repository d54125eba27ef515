//! Canonical CSV writer.

use std::fs;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use fauna_model::{CANONICAL_HEADERS, CanonicalRow};

use crate::error::{OutputError, Result};

fn write_rows<W: Write>(writer: &mut Writer<W>, rows: &[CanonicalRow]) -> csv::Result<()> {
    writer.write_record(CANONICAL_HEADERS)?;
    for row in rows {
        let speed = row.speed_text();
        writer.write_record([row.name.as_str(), speed.as_str(), row.diet.as_str()])?;
    }
    Ok(())
}

/// Writes rows with the header `name,speed,diet`, preserving order.
///
/// Speed is written with exactly one fractional digit. Missing parent
/// directories are created.
pub fn write_canonical_csv(path: &Path, rows: &[CanonicalRow], delimiter: u8) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .and_then(|mut writer| write_rows(&mut writer, rows).map(|()| writer))
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| OutputError::Flush {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders rows to an in-memory CSV string.
pub fn render_canonical_csv(rows: &[CanonicalRow], delimiter: u8) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    write_rows(&mut writer, rows).map_err(|source| OutputError::Write {
        path: "<memory>".into(),
        source,
    })?;
    let bytes = writer.into_inner().map_err(|err| OutputError::Flush {
        path: "<memory>".into(),
        source: err.into_error(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
