use std::fmt;

use thiserror::Error;

use super::model::{CellValue, Record, Table, ARTIST_NAME, DISPLAY_COLUMNS, GENRE, RELEASE_DATE};

/// Upper bound on the number of rows returned by [`recommend`].
pub const MAX_RECOMMENDATIONS: usize = 100;

/// Shown instead of a table when nothing survives the filters.
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations found for the given inputs.";

// ---------------------------------------------------------------------------
// Criteria: the user's filter inputs for one query
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Please enter at least one filter (Release Date, Artist, or Genre).")]
    Empty,
}

/// Optional filter values. Built fresh for each submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Kept as typed; an unparseable value disables the release-date filter.
    pub release_date: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
}

impl Criteria {
    /// Build criteria from raw input text. Inputs are trimmed and blank ones
    /// dropped; all three blank is rejected.
    pub fn from_inputs(release_date: &str, artist: &str, genre: &str) -> Result<Self, CriteriaError> {
        let criteria = Criteria {
            release_date: non_blank(release_date),
            artist: non_blank(artist),
            genre: non_blank(genre),
        };
        if criteria.is_empty() {
            return Err(CriteriaError::Empty);
        }
        Ok(criteria)
    }

    pub fn is_empty(&self) -> bool {
        self.release_date.is_none() && self.artist.is_none() && self.genre.is_none()
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Matching rows projected onto the display columns the table has.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Outcome of a query: some rows, or the "no matches" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Matches(ResultSet),
    NoMatches,
}

impl Recommendation {
    pub fn match_count(&self) -> usize {
        match self {
            Recommendation::Matches(rs) => rs.len(),
            Recommendation::NoMatches => 0,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Matches(rs) => f.write_str(&super::render::render_text(rs)),
            Recommendation::NoMatches => f.write_str(NO_RECOMMENDATIONS_MESSAGE),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Apply every active filter and return the first [`MAX_RECOMMENDATIONS`]
/// matches in table order.
///
/// Filters are conjunctive:
/// * release date: numeric equality on `release_date`; skipped when the
///   column is missing or the input is not an integer
/// * artist / genre: case-insensitive substring on `artist_name` / `genre`;
///   skipped when the column is missing, null cells never match
pub fn recommend(criteria: &Criteria, table: &Table) -> Recommendation {
    let year = criteria
        .release_date
        .as_deref()
        .and_then(|raw| release_year(raw, table));
    let artist = criteria
        .artist
        .as_deref()
        .and_then(|needle| substring_filter(ARTIST_NAME, needle, table));
    let genre = criteria
        .genre
        .as_deref()
        .and_then(|needle| substring_filter(GENRE, needle, table));

    let matches: Vec<&Record> = table
        .records()
        .iter()
        .filter(|r| year.map_or(true, |y| r.get(RELEASE_DATE).equals_integer(y)))
        .filter(|r| artist.as_ref().map_or(true, |(col, needle)| contains_ci(r.get(col), needle)))
        .filter(|r| genre.as_ref().map_or(true, |(col, needle)| contains_ci(r.get(col), needle)))
        .take(MAX_RECOMMENDATIONS)
        .collect();

    if matches.is_empty() {
        return Recommendation::NoMatches;
    }

    let columns: Vec<String> = DISPLAY_COLUMNS
        .iter()
        .filter(|c| table.has_column(c))
        .map(|c| c.to_string())
        .collect();
    let rows = matches
        .into_iter()
        .map(|r| columns.iter().map(|c| r.get(c).clone()).collect())
        .collect();

    Recommendation::Matches(ResultSet { columns, rows })
}

fn release_year(raw: &str, table: &Table) -> Option<i64> {
    if !table.has_column(RELEASE_DATE) {
        log::debug!("No '{RELEASE_DATE}' column; ignoring release date filter");
        return None;
    }
    match raw.trim().parse::<i64>() {
        Ok(year) => Some(year),
        Err(e) => {
            log::debug!("Ignoring release date filter '{raw}': {e}");
            None
        }
    }
}

fn substring_filter<'a>(column: &'a str, needle: &str, table: &Table) -> Option<(&'a str, String)> {
    if !table.has_column(column) {
        log::debug!("No '{column}' column; ignoring filter '{needle}'");
        return None;
    }
    Some((column, needle.to_lowercase()))
}

/// `needle` must already be lowercase.
fn contains_ci(cell: &CellValue, needle: &str) -> bool {
    !cell.is_null() && cell.to_string().to_lowercase().contains(needle)
}
