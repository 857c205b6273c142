use crate::{
    catalog::CatalogService, employee::Employee, overhead::OverheadConfiguration,
    work_order::WorkOrder,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EmployeeFile {
    pub schema_version: String,
    pub employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub schema_version: String,
    pub services: Vec<CatalogService>,
}

#[derive(Debug, Deserialize)]
pub struct ShopConfigFile {
    pub schema_version: String,
    pub shop_name: String,
    pub overhead: OverheadConfiguration,
}

#[derive(Debug, Deserialize)]
pub struct WorkOrderFile {
    pub schema_version: String,
    pub work_order: WorkOrderRequest,
}

/// A work order as written by hand, before any pricing.
#[derive(Debug, Deserialize)]
pub struct WorkOrderRequest {
    pub work_order_id: String,
    pub client_name: String,
    #[serde(default)]
    pub vehicle: Option<crate::catalog::Vehicle>,
    #[serde(default)]
    pub assigned_employee_id: Option<String>,
    pub services: Vec<RequestedService>,
}

#[derive(Debug, Deserialize)]
pub struct RequestedService {
    pub service_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub unit_price_override: Option<f64>,
}

fn default_quantity() -> f64 {
    1.0
}
