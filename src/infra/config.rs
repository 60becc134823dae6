use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::pagination::PagerConfig;
use crate::infra::lookups::builtin::BuiltinLookups;
use crate::infra::lookups::csv::CsvLookups;
use crate::usecase::ports::lookups::LookupSource;

pub const TOTAL_ENTRIES_VAR: &str = "CRM_TOTAL_ENTRIES";
pub const ENTRIES_PER_PAGE_VAR: &str = "CRM_ENTRIES_PER_PAGE";
pub const LOOKUPS_CSV_VAR: &str = "CRM_LOOKUPS_CSV";
const LOOKUPS_FILE_NAME: &str = "lookups.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub pager: PagerConfig,
    /// `None` means the builtin lookup tables.
    pub lookups_csv: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let default_lookups = default_lookups_path()
            .ok()
            .filter(|path| path.is_file());
        Self::from_vars(|key| std::env::var(key).ok(), default_lookups)
    }

    pub fn from_vars(
        var: impl Fn(&str) -> Option<String>,
        default_lookups: Option<PathBuf>,
    ) -> Result<Self> {
        let defaults = PagerConfig::default();
        let pager = PagerConfig {
            total_entries: parse_var(&var, TOTAL_ENTRIES_VAR)?.unwrap_or(defaults.total_entries),
            entries_per_page: parse_var(&var, ENTRIES_PER_PAGE_VAR)?
                .unwrap_or(defaults.entries_per_page),
        };
        pager.validate()?;

        let lookups_csv = var(LOOKUPS_CSV_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or(default_lookups);

        Ok(Self { pager, lookups_csv })
    }

    pub fn lookup_source(&self) -> Arc<dyn LookupSource> {
        match &self.lookups_csv {
            Some(path) => Arc::new(CsvLookups { path: path.clone() }),
            None => Arc::new(BuiltinLookups),
        }
    }
}

fn parse_var(var: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<i64>> {
    let Some(raw) = var(key) else {
        return Ok(None);
    };
    let value = raw
        .trim()
        .parse::<i64>()
        .with_context(|| format!("{key} must be an integer, got `{raw}`"))?;
    Ok(Some(value))
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "crm-table")
        .ok_or_else(|| anyhow!("unable to resolve project directories"))
}

pub fn default_lookups_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(LOOKUPS_FILE_NAME))
}
