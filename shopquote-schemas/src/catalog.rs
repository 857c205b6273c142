use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} {} ({})", self.make, self.model, year),
            None => write!(f, "{} {}", self.make, self.model),
        }
    }
}

/// Which vehicles a catalog service can be sold for.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServiceScope {
    #[default]
    General,
    Vehicle {
        make: String,
        /// `None` covers every model of the make.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
    },
}

impl ServiceScope {
    pub fn applies_to(&self, vehicle: &Vehicle) -> bool {
        match self {
            ServiceScope::General => true,
            ServiceScope::Vehicle { make, model } => {
                make.eq_ignore_ascii_case(&vehicle.make)
                    && model
                        .as_ref()
                        .map_or(true, |m| m.eq_ignore_ascii_case(&vehicle.model))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogService {
    pub service_id: String,
    pub name: String,
    /// Expected duration in fractional hours (1.5 = 90 minutes).
    pub estimated_hours: f64,
    #[serde(default)]
    pub scope: ServiceScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uno() -> Vehicle {
        Vehicle {
            make: "Fiat".to_string(),
            model: "Uno".to_string(),
            year: Some(2012),
        }
    }

    #[test]
    fn general_scope_applies_everywhere() {
        assert!(ServiceScope::General.applies_to(&uno()));
    }

    #[test]
    fn make_scope_ignores_case_and_any_model() {
        let scope = ServiceScope::Vehicle {
            make: "FIAT".to_string(),
            model: None,
        };
        assert!(scope.applies_to(&uno()));
    }

    #[test]
    fn model_scope_rejects_other_models() {
        let scope = ServiceScope::Vehicle {
            make: "Fiat".to_string(),
            model: Some("Palio".to_string()),
        };
        assert!(!scope.applies_to(&uno()));
    }
}
