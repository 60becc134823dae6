use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::entities::customer::Lookups;
use crate::domain::error::CrmError;
use crate::usecase::ports::lookups::LookupSource;

const FIRST_NAME_COLUMN: &str = "first_name";
const LAST_NAME_COLUMN: &str = "last_name";
const COUNTRY_COLUMN: &str = "country";

/// Lookup tables read from a CSV file with `first_name,last_name,country`
/// headers. Columns may have different lengths; blank cells are skipped.
pub struct CsvLookups {
    pub path: PathBuf,
}

impl LookupSource for CsvLookups {
    fn load(&self) -> Result<Lookups, CrmError> {
        let lookups = read_lookups_csv(&self.path)
            .map_err(|err| CrmError::InvalidConfiguration(format!("{err:#}")))?;
        if let Some(list) = lookups.first_empty_list() {
            return Err(CrmError::InvalidConfiguration(format!(
                "lookup list `{list}` in {} is empty",
                self.path.display()
            )));
        }
        Ok(lookups)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str, csv_path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .with_context(|| format!("missing `{name}` column in {}", csv_path.display()))
}

pub fn read_lookups_csv(csv_path: &Path) -> Result<Lookups> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    let first_idx = column_index(&headers, FIRST_NAME_COLUMN, csv_path)?;
    let last_idx = column_index(&headers, LAST_NAME_COLUMN, csv_path)?;
    let country_idx = column_index(&headers, COUNTRY_COLUMN, csv_path)?;

    let mut lookups = Lookups {
        first_names: Vec::new(),
        last_names: Vec::new(),
        countries: Vec::new(),
    };

    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let columns = [
            (first_idx, &mut lookups.first_names),
            (last_idx, &mut lookups.last_names),
            (country_idx, &mut lookups.countries),
        ];
        for (idx, list) in columns {
            let value = record.get(idx).unwrap_or("").trim();
            if !value.is_empty() {
                list.push(value.to_string());
            }
        }
    }

    Ok(lookups)
}
