#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    /// Even generation indices are active, odd ones inactive.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            CustomerStatus::Active
        } else {
            CustomerStatus::Inactive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            CustomerStatus::Active => "customer__status--active",
            CustomerStatus::Inactive => "customer__status--inactive",
        }
    }
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub country: String,
    pub status: CustomerStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookups {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub countries: Vec<String>,
}

const BUILTIN_FIRST_NAMES: [&str; 10] = [
    "John", "Mary", "Alex", "Emma", "Robert", "Olivia", "William", "Sophia", "James", "Lily",
];
const BUILTIN_LAST_NAMES: [&str; 10] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Martinez",
    "Davis",
    "Rodriguez",
    "Martinez",
];
const BUILTIN_COUNTRIES: [&str; 10] = [
    "USA",
    "Canada",
    "UK",
    "Germany",
    "France",
    "Italy",
    "Australia",
    "Spain",
    "Brazil",
    "Japan",
];

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Lookups {
    pub fn builtin() -> Self {
        Self {
            first_names: to_owned_list(&BUILTIN_FIRST_NAMES),
            last_names: to_owned_list(&BUILTIN_LAST_NAMES),
            countries: to_owned_list(&BUILTIN_COUNTRIES),
        }
    }

    /// Name of the first empty list, if any.
    pub fn first_empty_list(&self) -> Option<&'static str> {
        if self.first_names.is_empty() {
            Some("first_names")
        } else if self.last_names.is_empty() {
            Some("last_names")
        } else if self.countries.is_empty() {
            Some("countries")
        } else {
            None
        }
    }
}
