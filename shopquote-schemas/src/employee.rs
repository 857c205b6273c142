use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    Mechanic,
    Receptionist,
    Manager,
    #[serde(other)]
    Other,
}

impl EmployeeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRole::Mechanic => "mechanic",
            EmployeeRole::Receptionist => "receptionist",
            EmployeeRole::Manager => "manager",
            EmployeeRole::Other => "other",
        }
    }
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub role: EmployeeRole,
    /// Monthly gross pay. Missing in the source data for some records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_compensation: Option<f64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    pub fn is_mechanic(&self) -> bool {
        self.role == EmployeeRole::Mechanic
    }
}
