use shopquote_schemas::work_order::WorkOrderStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("Catalog service '{0}' not found")]
    ServiceNotFound(String),

    #[error("Employee '{0}' not found")]
    EmployeeNotFound(String),

    #[error("Employee '{0}' is not a mechanic and cannot be assigned labor")]
    NotAMechanic(String),

    #[error("Service '{service_id}' does not apply to {vehicle}")]
    ServiceNotApplicable { service_id: String, vehicle: String },

    #[error("Shop overhead configuration is missing")]
    ConfigNotDefined,

    #[error("Service catalog is empty")]
    CatalogNotDefined,

    #[error("Invalid quantity {quantity} for service '{service_id}'")]
    InvalidQuantity { service_id: String, quantity: f64 },

    #[error("Work order cannot move from '{from}' to '{to}'")]
    InvalidTransition {
        from: WorkOrderStatus,
        to: WorkOrderStatus,
    },

    #[error("Work order '{0}' has no line items")]
    EmptyWorkOrder(String),

    #[error("Invalid unit price {unit_price} for service '{service_id}'")]
    InvalidUnitPrice { service_id: String, unit_price: f64 },

    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred during logging: {0}")]
    LoggingError(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_error_names_the_file() {
        let source = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err = ShopError::YamlParsing("orders/wo-1.yaml".to_string(), source);
        assert!(err.to_string().starts_with("Failed to parse YAML from 'orders/wo-1.yaml'"));
    }
}
