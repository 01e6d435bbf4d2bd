//! CSV loaders for the shipped sample data.
//!
//! Each file has a header row; list columns use `;` as separator and dates
//! are ISO `YYYY-MM-DD`. Empty cells are treated as absent values.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::debug;

use venture_model::{Deal, DealStage, User, UserRole, UserStatus, Venture, VentureStage};

use crate::error::{DataError, Result};

const LIST_SEPARATOR: char = ';';

/// One data row keyed by header name.
struct CsvRow<'p> {
    path: &'p Path,
    line: u64,
    values: BTreeMap<String, String>,
}

impl CsvRow<'_> {
    fn invalid(&self, column: &str, message: impl Into<String>) -> DataError {
        DataError::InvalidValue {
            path: self.path.to_path_buf(),
            line: self.line,
            column: column.to_string(),
            message: message.into(),
        }
    }

    fn optional(&self, column: &str) -> Option<&str> {
        self.values
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    fn required(&self, column: &str) -> Result<&str> {
        self.optional(column)
            .ok_or_else(|| self.invalid(column, "value is required"))
    }

    fn parsed<T>(&self, column: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.required(column)?;
        raw.parse::<T>()
            .map_err(|error| self.invalid(column, error.to_string()))
    }

    fn optional_parsed<T>(&self, column: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(column)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|error| self.invalid(column, error.to_string()))
            })
            .transpose()
    }

    fn list(&self, column: &str) -> Vec<String> {
        self.optional(column)
            .map(|raw| {
                raw.split(LIST_SEPARATOR)
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn read_csv_rows<'p>(path: &'p Path, columns: &[&str]) -> Result<Vec<CsvRow<'p>>> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| DataError::csv(path, error))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();
    for column in columns {
        if !headers.iter().any(|header| header == column) {
            return Err(DataError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| DataError::csv(path, error))?;
        let line = record.position().map_or(0, csv::Position::line);
        let values = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.clone(), value.trim().to_string()))
            .collect();
        rows.push(CsvRow { path, line, values });
    }
    debug!(path = %path.display(), rows = rows.len(), "read sample data");
    Ok(rows)
}

fn parse_date(row: &CsvRow<'_>, raw: &str, column: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| row.invalid(column, format!("{raw:?}: {error}")))
}

pub fn load_users(path: &Path) -> Result<Vec<User>> {
    let rows = read_csv_rows(
        path,
        &["id", "name", "email", "role", "status", "company", "joined"],
    )?;
    rows.iter()
        .map(|row| -> Result<User> {
            Ok(User {
                id: row.required("id")?.to_string(),
                name: row.required("name")?.to_string(),
                email: row.required("email")?.to_string(),
                role: row.parsed::<UserRole>("role")?,
                status: row.parsed::<UserStatus>("status")?,
                company: row.optional("company").map(ToString::to_string),
                joined: parse_date(row, row.required("joined")?, "joined")?,
            })
        })
        .collect()
}

pub fn load_deals(path: &Path) -> Result<Vec<Deal>> {
    let rows = read_csv_rows(
        path,
        &[
            "id",
            "company",
            "sector",
            "stage",
            "amount",
            "valuation",
            "lead_investor",
            "expected_close",
            "tags",
        ],
    )?;
    rows.iter()
        .map(|row| -> Result<Deal> {
            let expected_close = row
                .optional("expected_close")
                .map(|raw| parse_date(row, raw, "expected_close"))
                .transpose()?;
            Ok(Deal {
                id: row.required("id")?.to_string(),
                company: row.required("company")?.to_string(),
                sector: row.required("sector")?.to_string(),
                stage: row.parsed::<DealStage>("stage")?,
                amount: row.parsed::<f64>("amount")?,
                valuation: row.optional_parsed::<f64>("valuation")?,
                lead_investor: row.required("lead_investor")?.to_string(),
                expected_close,
                tags: row.list("tags"),
            })
        })
        .collect()
}

pub fn load_ventures(path: &Path) -> Result<Vec<Venture>> {
    let rows = read_csv_rows(
        path,
        &[
            "id",
            "name",
            "industry",
            "stage",
            "founder",
            "ownership_pct",
            "invested",
            "current_value",
            "founded",
            "tags",
        ],
    )?;
    rows.iter()
        .map(|row| -> Result<Venture> {
            Ok(Venture {
                id: row.required("id")?.to_string(),
                name: row.required("name")?.to_string(),
                industry: row.required("industry")?.to_string(),
                stage: row.parsed::<VentureStage>("stage")?,
                founder: row.required("founder")?.to_string(),
                ownership_pct: row.parsed::<f64>("ownership_pct")?,
                invested: row.parsed::<f64>("invested")?,
                current_value: row.parsed::<f64>("current_value")?,
                founded: parse_date(row, row.required("founded")?, "founded")?,
                tags: row.list("tags"),
            })
        })
        .collect()
}
