use crate::data::filter::{recommend, Criteria, Recommendation};
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Message shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Warning(String),
    Error(String),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Merged dataset. Read-only once constructed.
    table: Table,

    /// Why the datasets could not be loaded, if they could not.
    pub load_error: Option<String>,

    pub release_date_input: String,
    pub artist_input: String,
    pub genre_input: String,

    /// Result of the last accepted submission.
    pub outcome: Option<Recommendation>,

    pub status: Option<Status>,
}

impl AppState {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            load_error: None,
            release_date_input: String::new(),
            artist_input: String::new(),
            genre_input: String::new(),
            outcome: None,
            status: None,
        }
    }

    /// Start with an empty table after a failed load.
    pub fn with_load_error(error: impl std::fmt::Display) -> Self {
        let message = format!("Failed to load data: {error}");
        Self {
            load_error: Some(message.clone()),
            status: Some(Status::Error(message)),
            ..Self::new(Table::default())
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Run a query with the current inputs.
    ///
    /// All-blank inputs are rejected with a warning and the previous outcome
    /// is kept.
    pub fn submit(&mut self) {
        let criteria = match Criteria::from_inputs(
            &self.release_date_input,
            &self.artist_input,
            &self.genre_input,
        ) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Rejected query: {e}");
                self.status = Some(Status::Warning(e.to_string()));
                return;
            }
        };

        log::debug!("Query: {criteria:?}");
        let outcome = recommend(&criteria, &self.table);
        log::info!("Query matched {} tracks", outcome.match_count());

        self.outcome = Some(outcome);
        self.status = self.load_error.clone().map(Status::Error);
    }

    /// Empty the form and the output.
    pub fn clear(&mut self) {
        self.release_date_input.clear();
        self.artist_input.clear();
        self.genre_input.clear();
        self.outcome = None;
        self.status = self.load_error.clone().map(Status::Error);
    }

    /// Text for the output area: rendered table, sentinel, or nothing.
    pub fn output_text(&self) -> String {
        self.outcome
            .as_ref()
            .map(|o| o.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::NO_RECOMMENDATIONS_MESSAGE;
    use crate::data::model::{CellValue, Record};

    fn state() -> AppState {
        let records = [("Song1", "Alice"), ("Song2", "Bob")]
            .into_iter()
            .map(|(track, artist)| {
                Record::new(
                    [
                        ("track_name".to_string(), CellValue::text(track)),
                        ("artist_name".to_string(), CellValue::text(artist)),
                    ]
                    .into(),
                )
            })
            .collect();
        AppState::new(Table::from_records(records))
    }

    #[test]
    fn blank_submission_warns_without_filtering() {
        let mut s = state();
        s.artist_input = "   ".into();
        s.submit();

        assert_eq!(s.outcome, None);
        assert_eq!(
            s.status,
            Some(Status::Warning(
                "Please enter at least one filter (Release Date, Artist, or Genre).".into()
            ))
        );
    }

    #[test]
    fn blank_submission_keeps_previous_outcome() {
        let mut s = state();
        s.artist_input = "bob".into();
        s.submit();
        let previous = s.outcome.clone();

        s.artist_input.clear();
        s.submit();

        assert!(previous.is_some());
        assert_eq!(s.outcome, previous);
        assert!(matches!(s.status, Some(Status::Warning(_))));
    }

    #[test]
    fn submission_renders_matches_and_clears_warning() {
        let mut s = state();
        s.submit();
        s.artist_input = "ALI".into();
        s.submit();

        assert_eq!(s.status, None);
        assert_eq!(s.outcome.as_ref().map(|o| o.match_count()), Some(1));
        let text = s.output_text();
        assert!(text.contains("Song1"));
        assert!(!text.contains("Song2"));
    }

    #[test]
    fn no_matches_shows_sentinel() {
        let mut s = state();
        s.genre_input = "jazz".into();
        s.artist_input = "zed".into();
        s.submit();

        assert_eq!(s.output_text(), NO_RECOMMENDATIONS_MESSAGE);
    }

    #[test]
    fn clear_resets_form() {
        let mut s = state();
        s.artist_input = "a".into();
        s.release_date_input = "2000".into();
        s.submit();
        s.clear();

        assert!(s.artist_input.is_empty());
        assert!(s.release_date_input.is_empty());
        assert_eq!(s.outcome, None);
        assert_eq!(s.output_text(), "");
    }

    #[test]
    fn load_error_is_kept_visible() {
        let mut s = AppState::with_load_error("missing.csv not found");
        assert!(s.table().is_empty());
        assert_eq!(
            s.load_error.as_deref(),
            Some("Failed to load data: missing.csv not found")
        );

        s.artist_input = "x".into();
        s.submit();
        assert_eq!(s.outcome, Some(Recommendation::NoMatches));
        assert!(matches!(s.status, Some(Status::Error(_))));
    }
}
