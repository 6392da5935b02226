/// Columns whose cells are colored by value.
const STATUS_COLUMNS: [&str; 5] = ["status", "view", "action", "label", "locked"];

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN: usize = 6;

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// An aligned plain-text table.
#[derive(Debug, Default)]
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

    /// Missing trailing cells render as `-`; extra cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), "-".to_string());
        self.rows.push(cells);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self.natural_widths();
        if let Some(max_width) = options.max_width {
            shrink(&mut widths, max_width);
        }
        let numeric: Vec<bool> = (0..self.headers.len())
            .map(|column| self.is_numeric(column))
            .collect();
        let colored: Vec<bool> = self
            .headers
            .iter()
            .map(|header| options.color && STATUS_COLUMNS.contains(&header.as_str()))
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&fit(header, *width), *width, false))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(header.trim_end().to_string());
        lines.push("-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2));

        for row in &self.rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    let width = widths[column];
                    let padded = pad(&fit(cell, width), width, numeric[column]);
                    if colored[column] {
                        paint(&padded, cell)
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                self.rows
                    .iter()
                    .map(|row| display_width(&row[column]))
                    .fold(display_width(header), usize::max)
            })
            .collect()
    }

    fn is_numeric(&self, column: usize) -> bool {
        let mut cells = self
            .rows
            .iter()
            .map(|row| row[column].as_str())
            .filter(|cell| *cell != "-" && *cell != "null")
            .peekable();
        cells.peek().is_some() && cells.all(|cell| cell.parse::<f64>().is_ok())
    }
}

/// Take one character at a time off the widest column until the row fits
/// or every column is at its floor.
fn shrink(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some((widest, width)) = widths
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, width)| *width > MIN_COLUMN)
            .max_by_key(|(_, width)| *width)
        else {
            return;
        };
        widths[widest] = width - 1;
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn fit(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

/// Wrap an already padded cell in the color for its raw value.
fn paint(padded: &str, raw: &str) -> String {
    match status_color(raw) {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded.to_string(),
    }
}

fn status_color(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "active" | "completed" | "approved" | "published" | "review" | "false" => Some("32"),
        "pending_payment" | "pending" | "in_progress" | "draft" | "continue" | "payment" => {
            Some("33")
        }
        "cancelled" | "rejected" | "archived" | "disabled" | "true" => Some("31"),
        "not_started" | "start" | "not_enrolled" => Some("36"),
        _ => None,
    }
}
