//! CSV table access with up-front header resolution.
//!
//! A table is opened against a fixed set of required column names. The
//! header row is resolved to positions before any record is read, so a
//! missing column fails the whole load instead of failing row by row.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Reader, StringRecord, StringRecordsIntoIter};

use super::errors::{DataSourceError, DataSourceResult};

/// An open CSV file with its required columns resolved to positions.
pub struct CsvTable {
    schema: TableSchema,
    records: StringRecordsIntoIter<File>,
}

/// Resolved column layout of one CSV source.
///
/// Columns are addressed by the ordinal they were requested with in
/// [`CsvTable::open`], not by their position in the file.
#[derive(Debug, Clone)]
pub struct TableSchema {
    path: PathBuf,
    columns: Vec<(String, usize)>,
}

impl CsvTable {
    /// Opens `path` and resolves `columns` against the header row.
    ///
    /// Fails if the file is absent, its header row cannot be read, or
    /// any required column is missing.
    pub fn open(path: &Path, columns: &[&str]) -> DataSourceResult<Self> {
        let mut reader = Reader::from_path(path).map_err(|e| DataSourceError::open(path, e))?;
        let headers = reader
            .headers()
            .map_err(|e| DataSourceError::malformed(path, e))?;

        let mut resolved = Vec::with_capacity(columns.len());
        for &name in columns {
            let position = headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataSourceError::missing_column(path, name))?;
            resolved.push((name.to_string(), position));
        }

        Ok(Self {
            schema: TableSchema {
                path: path.to_path_buf(),
                columns: resolved,
            },
            records: reader.into_records(),
        })
    }

    /// Splits the table into its schema and the raw record stream.
    pub fn into_parts(self) -> (TableSchema, StringRecordsIntoIter<File>) {
        (self.schema, self.records)
    }
}

impl TableSchema {
    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File position of the `index`-th requested column.
    pub fn position(&self, index: usize) -> usize {
        self.columns[index].1
    }

    fn column_name(&self, index: usize) -> &str {
        &self.columns[index].0
    }

    /// Raw field of `record` for the `index`-th requested column.
    pub fn field<'r>(&self, record: &'r StringRecord, index: usize) -> DataSourceResult<&'r str> {
        record.get(self.position(index)).ok_or_else(|| {
            DataSourceError::short_record(&self.path, record_line(record), self.column_name(index))
        })
    }

    /// Integer field of `record` for the `index`-th requested column.
    pub fn u64_field(&self, record: &StringRecord, index: usize) -> DataSourceResult<u64> {
        self.parse_field(record, index)
    }

    /// Float field of `record` for the `index`-th requested column.
    pub fn f64_field(&self, record: &StringRecord, index: usize) -> DataSourceResult<f64> {
        self.parse_field(record, index)
    }

    fn parse_field<T: std::str::FromStr>(
        &self,
        record: &StringRecord,
        index: usize,
    ) -> DataSourceResult<T> {
        let raw = self.field(record, index)?;
        raw.trim().parse().map_err(|_| {
            DataSourceError::bad_number(
                &self.path,
                record_line(record),
                self.column_name(index),
                raw,
            )
        })
    }
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}
