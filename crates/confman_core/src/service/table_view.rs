//! Tabular projection of records for list views.

use crate::model::Record;

/// Headers plus one row of cells per record, in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn from_records<T: Record>(records: &[T]) -> Self {
        Self {
            headers: T::COLUMNS.to_vec(),
            rows: records.iter().map(Record::cells).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders a plain-text table with columns padded to their widest cell.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, self.headers.iter().copied(), &widths);
        let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
        push_line(&mut out, rule.iter().map(String::as_str), &widths);
        for row in &self.rows {
            push_line(&mut out, row.iter().map(String::as_str), &widths);
        }
        out
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::TableView;
    use crate::model::{Conference, Year};

    #[test]
    fn conference_table_lists_year_as_plain_number() {
        let conference = Conference::new(
            "RustConf",
            "RC",
            Year::new(2024).unwrap(),
            "Montreal",
        )
        .unwrap();

        let view = TableView::from_records(&[conference]);
        assert_eq!(view.headers, ["Name", "Nickname", "Year", "Venue"]);
        assert_eq!(view.rows, [["RustConf", "RC", "2024", "Montreal"]]);
    }

    #[test]
    fn render_pads_columns_to_widest_cell() {
        let view = TableView {
            headers: vec!["Name", "Year"],
            rows: vec![vec!["A much longer name".to_string(), "2024".to_string()]],
        };

        let rendered = view.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name               | Year");
        assert_eq!(lines[1], "------------------ | ----");
        assert_eq!(lines[2], "A much longer name | 2024");
    }
}
