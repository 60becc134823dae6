use crate::domain::entities::customer::Lookups;
use crate::domain::error::CrmError;
use crate::usecase::ports::lookups::LookupSource;

pub struct BuiltinLookups;

impl LookupSource for BuiltinLookups {
    fn load(&self) -> Result<Lookups, CrmError> {
        Ok(Lookups::builtin())
    }
}
