use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use indexmap::IndexMap;
use tracing::debug;

use crate::data::{DataSource, Row};
use crate::error::{ChartError, ChartResult};

/// Reads delimited files with a header row from the local filesystem.
///
/// Paths are resolved against `root` when one is set.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    root: Option<PathBuf>,
    delimiter: u8,
}

impl Default for CsvDataSource {
    fn default() -> Self {
        Self {
            root: None,
            delimiter: b',',
        }
    }
}

impl CsvDataSource {
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => Path::new(path).to_path_buf(),
        }
    }
}

impl DataSource for CsvDataSource {
    fn load(&self, path: &str) -> ChartResult<Vec<Row>> {
        let full_path = self.resolve_path(path);
        let file = File::open(&full_path).map_err(|e| ChartError::DataSource {
            path: full_path.display().to_string(),
            message: e.to_string(),
        })?;
        let rows = parse_rows(file, self.delimiter).map_err(|message| ChartError::DataSource {
            path: full_path.display().to_string(),
            message,
        })?;
        debug!(path = %full_path.display(), rows = rows.len(), "loaded csv rows");
        Ok(rows)
    }
}

/// In-memory source keyed by path; unknown paths fail like a missing file.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    files: IndexMap<String, String>,
}

impl StaticDataSource {
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl DataSource for StaticDataSource {
    fn load(&self, path: &str) -> ChartResult<Vec<Row>> {
        let content = self.files.get(path).ok_or_else(|| ChartError::DataSource {
            path: path.to_owned(),
            message: "no such file".to_owned(),
        })?;
        parse_csv_rows(content)
    }
}

/// Parses comma-delimited text with a header row.
pub fn parse_csv_rows(content: &str) -> ChartResult<Vec<Row>> {
    parse_rows(content.as_bytes(), b',').map_err(|message| ChartError::DataSource {
        path: "<inline>".to_owned(),
        message,
    })
}

fn parse_rows<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Row>, String> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| format!("failed to read header row: {e}"))?
        .clone();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("failed to parse row {}: {e}", index + 1))?;
        rows.push(to_row(&headers, &record));
    }
    Ok(rows)
}

/// Missing trailing cells become empty strings; extra cells are dropped.
fn to_row(headers: &StringRecord, record: &StringRecord) -> Row {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            (
                header.to_owned(),
                record.get(idx).unwrap_or_default().to_owned(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_fill_missing_columns_with_empty_cells() {
        let rows = parse_csv_rows("text,gender,age\n\"Great, strong brew\",Female\n")
            .expect("parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["text"], "Great, strong brew");
        assert_eq!(rows[0]["gender"], "Female");
        assert_eq!(rows[0]["age"], "");
    }
}
