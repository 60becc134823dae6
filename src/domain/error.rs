#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrmError {
    InvalidConfiguration(String),
    InvalidNavigationTarget { page: i64, last_page: i64 },
}

impl std::fmt::Display for CrmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrmError::InvalidConfiguration(message) => {
                write!(f, "invalid configuration: {message}")
            }
            CrmError::InvalidNavigationTarget { page, last_page } => {
                write!(f, "page {page} is outside 1..={last_page}")
            }
        }
    }
}

impl std::error::Error for CrmError {}
