use crate::{lexer::tokens::Token, symbols::symbol_table::SymbolTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A plain-text table drawn with `+`, `-`, `=` and `|` borders.
#[derive(Debug, Clone)]
pub struct Grid {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(columns: &[(&str, Align)]) -> Self {
        Grid {
            headers: columns.iter().map(|(name, _)| name.to_string()).collect(),
            aligns: columns.iter().map(|(_, align)| *align).collect(),
            rows: vec![],
        }
    }

    /// Appends a row. Missing cells are left blank, extra cells are dropped.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(self.headers[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn border(widths: &[usize], fill: char) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.extend(std::iter::repeat(fill).take(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    }

    fn line(&self, cells: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for ((cell, &width), align) in cells.iter().zip(widths).zip(&self.aligns) {
            match align {
                Align::Left => line.push_str(&format!(" {:<width$} |", cell)),
                Align::Right => line.push_str(&format!(" {:>width$} |", cell)),
            }
        }
        line.push('\n');
        line
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = Grid::border(&widths, '-');
        out.push_str(&self.line(&self.headers, &widths));
        out.push_str(&Grid::border(&widths, '='));

        for row in &self.rows {
            out.push_str(&self.line(row, &widths));
            out.push_str(&Grid::border(&widths, '-'));
        }

        out
    }
}

/// Escapes control characters so a lexeme always fits on one line.
pub fn display_lexeme(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// One row per token: position in the sequence, kind and lexeme.
pub fn render_token_table(tokens: &[Token]) -> String {
    let mut grid = Grid::new(&[("#", Align::Right), ("Type", Align::Left), ("Value", Align::Left)]);

    for (i, token) in tokens.iter().enumerate() {
        grid.push_row(vec![
            (i + 1).to_string(),
            token.kind.to_string(),
            display_lexeme(&token.value),
        ]);
    }

    grid.render()
}

/// One row per identifier, ordered by index.
pub fn render_symbol_table(symbols: &SymbolTable) -> String {
    let mut grid = Grid::new(&[("#", Align::Right), ("Symbol", Align::Left)]);

    for (index, name) in symbols.iter() {
        grid.push_row(vec![index.to_string(), name.to_string()]);
    }

    grid.render()
}
