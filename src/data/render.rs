use super::filter::ResultSet;

/// Render a result set as a plain-text table without a row index.
///
/// Every column is right-aligned to its widest cell (header included) and
/// columns are separated by a single space:
///
/// ```text
/// track_name artist_name genre release_date
///      Song1       Alice   Pop         2000
/// ```
pub fn render_text(result: &ResultSet) -> String {
    let cells: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let widths: Vec<usize> = result
        .columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(format_line(result.columns.iter().map(String::as_str), &widths));
    for row in &cells {
        lines.push(format_line(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{Recommendation, NO_RECOMMENDATIONS_MESSAGE};
    use crate::data::model::CellValue;

    fn result_set() -> ResultSet {
        ResultSet {
            columns: vec!["track_name".into(), "artist_name".into(), "release_date".into()],
            rows: vec![
                vec![
                    CellValue::text("Song1"),
                    CellValue::text("Alice"),
                    CellValue::text("2000"),
                ],
                vec![
                    CellValue::text("A Much Longer Title"),
                    CellValue::Null,
                    CellValue::text("2010.0"),
                ],
            ],
        }
    }

    #[test]
    fn columns_are_right_aligned() {
        let text = render_text(&result_set());
        let expected = [
            "         track_name artist_name release_date",
            "              Song1       Alice         2000",
            "A Much Longer Title         NaN       2010.0",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let rs = ResultSet {
            columns: vec!["artist_name".into()],
            rows: vec![
                vec![CellValue::text("Beyoncé")],
                vec![CellValue::text("A. R. Rahman")],
            ],
        };
        let text = render_text(&rs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "     Beyoncé");
        assert!(lines.iter().all(|l| l.chars().count() == 12));
    }

    #[test]
    fn recommendation_display() {
        assert_eq!(Recommendation::NoMatches.to_string(), NO_RECOMMENDATIONS_MESSAGE);
        let rs = result_set();
        assert_eq!(Recommendation::Matches(rs.clone()).to_string(), render_text(&rs));
    }
}
