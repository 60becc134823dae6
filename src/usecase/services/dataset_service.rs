use std::sync::Arc;

use crate::domain::entities::customer::{CustomerRecord, CustomerStatus, Lookups};
use crate::domain::error::CrmError;
use crate::usecase::ports::lookups::LookupSource;

pub struct DatasetService {
    lookups: Arc<dyn LookupSource>,
}

impl DatasetService {
    pub fn new(lookups: Arc<dyn LookupSource>) -> Self {
        Self { lookups }
    }

    pub fn generate(&self, total_entries: i64) -> Result<Vec<CustomerRecord>, CrmError> {
        let lookups = self.lookups.load()?;
        generate_customers(total_entries, &lookups)
    }
}

pub fn generate_customers(
    total_entries: i64,
    lookups: &Lookups,
) -> Result<Vec<CustomerRecord>, CrmError> {
    if total_entries < 0 {
        return Err(CrmError::InvalidConfiguration(format!(
            "total_entries must not be negative, got {total_entries}"
        )));
    }
    if let Some(list) = lookups.first_empty_list() {
        return Err(CrmError::InvalidConfiguration(format!(
            "lookup list `{list}` is empty"
        )));
    }

    let count = usize::try_from(total_entries).map_err(|_| {
        CrmError::InvalidConfiguration(format!("total_entries {total_entries} is too large"))
    })?;

    Ok((0..count).map(|i| customer_at(i, lookups)).collect())
}

fn customer_at(i: usize, lookups: &Lookups) -> CustomerRecord {
    let first_name = &lookups.first_names[i % lookups.first_names.len()];
    let last_name = &lookups.last_names[i % lookups.last_names.len()];

    // The phone suffix is the raw index; numbers collide across indices.
    CustomerRecord {
        name: format!("{first_name} {last_name}"),
        company: format!("Company {}", i + 1),
        phone: format!("+1234567{i}"),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        country: lookups.countries[i % lookups.countries.len()].clone(),
        status: CustomerStatus::for_index(i),
    }
}
