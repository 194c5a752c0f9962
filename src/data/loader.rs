use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use thiserror::Error;

use super::model::{CellValue, Record, SourceInfo, Table};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {} as {encoding}", path.display())]
    Decode { path: PathBuf, encoding: &'static str },

    #[error("Failed to parse CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no header row", path.display())]
    EmptyHeader { path: PathBuf },

    #[error("{} row {row}: expected {expected} fields, saw {found}", path.display())]
    RaggedRow {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every dataset in order and concatenate them into one table.
///
/// The first file that cannot be read, decoded or parsed aborts the load.
pub fn load_datasets(paths: &[PathBuf]) -> Result<Table, LoadError> {
    let mut table = Table::default();
    for path in paths {
        let (columns, records, source) = load_csv(path)?;
        log::info!(
            "Loaded {} ({}): {} rows, {} columns",
            path.display(),
            source.encoding,
            source.rows,
            columns.len()
        );
        table.append(&columns, records, source);
    }
    Ok(table)
}

/// Guess the text encoding of raw file contents.
///
/// A byte-order mark wins; otherwise the whole buffer is fed to a
/// statistical detector that also considers UTF-8.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one track per line.
/// Fields keep their source text; empty fields become [`CellValue::Null`]
/// and short rows are padded with nulls.
fn load_csv(path: &Path) -> Result<(Vec<String>, Vec<Record>, SourceInfo), LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let encoding = detect_encoding(&bytes);
    let (text, actual, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(LoadError::Decode {
            path: path.to_path_buf(),
            encoding: actual.name(),
        });
    }

    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(LoadError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(csv_err)?;

        if row.len() > headers.len() {
            return Err(LoadError::RaggedRow {
                path: path.to_path_buf(),
                row: row_no + 1,
                expected: headers.len(),
                found: row.len(),
            });
        }

        let fields: BTreeMap<String, CellValue> = headers
            .iter()
            .enumerate()
            .map(|(i, col)| (col.clone(), CellValue::from_field(row.get(i).unwrap_or(""))))
            .collect();
        records.push(Record::new(fields));
    }

    let source = SourceInfo {
        path: path.to_path_buf(),
        encoding: actual.name(),
        rows: records.len(),
    };
    Ok((headers, records, source))
}
