/// Column alignment inside a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A plain-text table for terminal views.
///
/// Widths are counted in characters, so Thai names line up as well as the
/// terminal font allows.
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers, all left aligned
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        let aligns = vec![Align::Left; headers.len()];
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            aligns,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Right-align a column (amounts)
    pub fn align(mut self, col: usize, align: Align) -> Self {
        if col < self.aligns.len() {
            self.aligns[col] = align;
        }
        self
    }

    /// Add a row; cells beyond the header count are dropped, missing cells are blank
    pub fn add_row(&mut self, row: Vec<String>) {
        let mut row: Vec<String> = row.into_iter().take(self.headers.len()).collect();
        row.resize(self.headers.len(), String::new());

        for (i, col) in row.iter().enumerate() {
            self.col_widths[i] = self.col_widths[i].max(col.chars().count());
        }

        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let pad = self.col_widths[i].saturating_sub(col.chars().count());
                match self.aligns[i] {
                    Align::Left => format!("{}{}", col, " ".repeat(pad)),
                    Align::Right => format!("{}{}", " ".repeat(pad), col),
                }
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["ID", "Name", "Amount"]).align(2, Align::Right);
        table.add_row(vec!["TXN001".into(), "Somchai".into(), "-500.00".into()]);
        table.add_row(vec!["TXN002".into(), "Nida".into(), "+1200.00".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].ends_with(" -500.00"));
        assert!(lines[3].ends_with("+1200.00"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["only".into()]);
        assert!(!table.is_empty());
        assert!(table.render().contains("only"));
    }
}
