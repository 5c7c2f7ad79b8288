// crates/ndfield-cli/src/io/points_table.rs

use std::fmt::Write as _;

use anyhow::{Context, Result};

/// A delimited-text table of named numeric columns.
///
/// Layout: one header row of column names, then one row per point. Blank
/// lines and lines starting with `#` are skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct PointTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl PointTable {
    pub fn parse(text: &str, delimiter: char) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(n, l)| (n + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let (_, header) = lines.next().context("table has no header row")?;
        let columns: Vec<String> = header
            .split(delimiter)
            .map(|c| c.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (line_no, line) in lines {
            let cells: Vec<&str> = line.split(delimiter).map(str::trim).collect();
            anyhow::ensure!(
                cells.len() == columns.len(),
                "line {line_no}: {} fields, header has {}",
                cells.len(),
                columns.len()
            );
            let row = cells
                .iter()
                .zip(&columns)
                .map(|(cell, name)| {
                    cell.parse::<f64>()
                        .with_context(|| format!("line {line_no}: column {name}: {cell:?}"))
                })
                .collect::<Result<Vec<f64>>>()?;
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Project rows onto `names`, in that order. Every name must be a column.
    pub fn select(&self, names: &[String]) -> Result<Vec<Vec<f64>>> {
        anyhow::ensure!(!names.is_empty(), "no columns selected");

        let missing: Vec<&str> = names
            .iter()
            .filter(|n| !self.columns.contains(*n))
            .map(String::as_str)
            .collect();
        anyhow::ensure!(
            missing.is_empty(),
            "table must contain columns {names:?}; missing {missing:?}"
        );

        let idx: Vec<usize> = names
            .iter()
            .filter_map(|n| self.columns.iter().position(|c| c == n))
            .collect();
        Ok(self
            .rows
            .iter()
            .map(|r| idx.iter().map(|&i| r[i]).collect())
            .collect())
    }
}

/// Render a header row and one row per point.
pub fn render<'a, I>(columns: &[String], rows: I, delimiter: char) -> String
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let sep = delimiter.to_string();
    let mut s = columns.join(&sep);
    s.push('\n');
    for row in rows {
        for (i, v) in row.iter().enumerate() {
            if i > 0 {
                s.push(delimiter);
            }
            let _ = write!(s, "{v}");
        }
        s.push('\n');
    }
    s
}

pub fn read_table(path: &str, delimiter: char) -> Result<PointTable> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read table {path}"))?;
    PointTable::parse(&text, delimiter).with_context(|| format!("parse table {path}"))
}
