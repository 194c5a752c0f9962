use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Well-known columns
// ---------------------------------------------------------------------------

pub const TRACK_NAME: &str = "track_name";
pub const ARTIST_NAME: &str = "artist_name";
pub const GENRE: &str = "genre";
pub const RELEASE_DATE: &str = "release_date";

/// Columns shown in results, in display order. Only those present in the
/// table are projected.
pub const DISPLAY_COLUMNS: [&str; 4] = [TRACK_NAME, ARTIST_NAME, GENRE, RELEASE_DATE];

// ---------------------------------------------------------------------------
// CellValue – a single cell of the merged table
// ---------------------------------------------------------------------------

/// A cell of the merged table, holding the field exactly as it appeared in
/// the source file. Numbers are only parsed where a comparison needs them,
/// so text such as `007` or `+44` survives untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Null,
}

impl CellValue {
    /// Wrap a raw CSV field. Empty fields are missing values.
    pub fn from_field(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        CellValue::text(s)
    }

    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Whether the cell reads as a number equal to `year`, e.g. `2010` or
    /// `2010.0`. Non-numeric and missing cells never compare equal.
    pub fn equals_integer(&self, year: i64) -> bool {
        let CellValue::Text(raw) = self else {
            return false;
        };
        let raw = raw.trim();
        if let Ok(i) = raw.parse::<i64>() {
            return i == year;
        }
        match raw.parse::<f64>() {
            Ok(f) => f.is_finite() && f == year as f64,
            Err(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Null => f.write_str("NaN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the merged table
// ---------------------------------------------------------------------------

/// One row of a source file. Columns the file did not have are simply
/// absent from `fields`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new(fields: BTreeMap<String, CellValue>) -> Self {
        Self { fields }
    }

    /// Cell for `column`, reading absent columns as null.
    pub fn get(&self, column: &str) -> &CellValue {
        self.fields.get(column).unwrap_or(&CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Table – every loaded file concatenated
// ---------------------------------------------------------------------------

/// Where a block of rows in the table came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceInfo {
    pub path: PathBuf,
    /// Name of the detected text encoding, e.g. `UTF-8` or `windows-1252`.
    pub encoding: &'static str,
    pub rows: usize,
}

/// The merged dataset. Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Table {
    records: Vec<Record>,
    /// Union of every file's header, in first-seen order.
    columns: Vec<String>,
    sources: Vec<SourceInfo>,
}

impl Table {
    /// Build a table from records, deriving the column list from them.
    #[cfg(test)]
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut table = Table::default();
        for record in &records {
            table.add_columns(record.fields.keys().map(String::as_str));
        }
        table.records = records;
        table
    }

    /// Append one file's rows. `columns` is that file's header.
    pub fn append(&mut self, columns: &[String], records: Vec<Record>, source: SourceInfo) {
        self.add_columns(columns.iter().map(String::as_str));
        self.records.extend(records);
        self.sources.push(source);
    }

    fn add_columns<'a>(&mut self, columns: impl Iterator<Item = &'a str>) {
        for col in columns {
            if !self.has_column(col) {
                self.columns.push(col.to_string());
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn sources(&self) -> &[SourceInfo] {
        &self.sources
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, CellValue)]) -> Record {
        Record::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn fields_keep_source_text() {
        assert_eq!(CellValue::from_field(""), CellValue::Null);
        for raw in ["007", "+44", "Infinity", "1.50", "The Beatles"] {
            assert_eq!(CellValue::from_field(raw), CellValue::text(raw));
            assert_eq!(CellValue::from_field(raw).to_string(), raw);
        }
        assert_eq!(CellValue::Null.to_string(), "NaN");
    }

    #[test]
    fn integer_equality_parses_on_demand() {
        assert!(CellValue::text("2000").equals_integer(2000));
        assert!(CellValue::text("2000.0").equals_integer(2000));
        assert!(CellValue::text(" 2000 ").equals_integer(2000));
        assert!(!CellValue::text("2000.5").equals_integer(2000));
        assert!(!CellValue::text("2000-01-01").equals_integer(2000));
        assert!(!CellValue::text("inf").equals_integer(i64::MAX));
        assert!(!CellValue::Null.equals_integer(2000));
    }

    #[test]
    fn absent_column_reads_as_null() {
        let r = record(&[(TRACK_NAME, CellValue::text("Song"))]);
        assert_eq!(r.get(GENRE), &CellValue::Null);
    }

    #[test]
    fn append_unions_columns_in_first_seen_order() {
        let mut table = Table::default();
        let first = vec!["track_name".to_string(), "genre".to_string()];
        let second = vec!["artist_name".to_string(), "track_name".to_string()];
        let src = |rows| SourceInfo {
            path: PathBuf::from("x.csv"),
            encoding: "UTF-8",
            rows,
        };

        table.append(&first, vec![Record::default()], src(1));
        table.append(&second, vec![Record::default(), Record::default()], src(2));

        assert_eq!(table.columns(), ["track_name", "genre", "artist_name"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.sources().len(), 2);
        assert!(table.has_column("artist_name"));
        assert!(!table.has_column("release_date"));
    }
}
