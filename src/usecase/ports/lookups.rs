use crate::domain::entities::customer::Lookups;
use crate::domain::error::CrmError;

pub trait LookupSource: Send + Sync {
    fn load(&self) -> Result<Lookups, CrmError>;
}
