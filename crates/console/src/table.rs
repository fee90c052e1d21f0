//! Plain-text tables for list output.

use chrono::NaiveDate;

const EMPTY: &str = "(no records)";
const GAP: &str = "  ";

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render blank; extra cells are dropped.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_line(
    f: &mut core::fmt::Formatter<'_>,
    cells: impl Iterator<Item = String>,
) -> core::fmt::Result {
    let line = cells.collect::<Vec<_>>().join(GAP);
    writeln!(f, "{}", line.trim_end())
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let widths = self.widths();
        let pad = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!("{c:<w$}"))
                .collect::<Vec<_>>()
                .into_iter()
        };
        write_line(f, pad(self.headers.as_slice()))?;
        write_line(f, widths.iter().map(|w| "-".repeat(*w)))?;
        if self.rows.is_empty() {
            return writeln!(f, "{EMPTY}");
        }
        for row in &self.rows {
            write_line(f, pad(row.as_slice()))?;
        }
        Ok(())
    }
}

/// `label: value` lines with the values aligned.
pub fn details(pairs: &[(&str, String)]) -> String {
    let width = pairs.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0) + 1;
    pairs
        .iter()
        .map(|(label, value)| format!("{:<width$} {value}\n", format!("{label}:")))
        .collect()
}

/// Cell text for optional values.
pub fn opt(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

pub fn date(value: Option<NaiveDate>) -> String {
    value.map_or_else(|| "-".to_string(), |d| d.format("%d/%m/%Y").to_string())
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
