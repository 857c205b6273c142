use crate::{error::ShopError, pricing};
use shopquote_schemas::{
    catalog::{CatalogService, Vehicle},
    employee::Employee,
    file_formats::{WorkOrderFile, WorkOrderRequest},
    overhead::OverheadConfiguration,
    work_order::{LineItem, WorkOrder, WorkOrderStatus},
};
use std::{collections::HashMap, fs};

/// Reads a hand-written work order request from a YAML file.
pub fn load_request(path: &str) -> Result<WorkOrderRequest, ShopError> {
    let content = fs::read_to_string(path).map_err(|e| ShopError::FileIO(path.to_string(), e))?;
    let file: WorkOrderFile =
        serde_yaml::from_str(&content).map_err(|e| ShopError::YamlParsing(path.to_string(), e))?;
    Ok(file.work_order)
}

/// A fluent builder for assembling a priced `WorkOrder`.
///
/// The estimator itself accepts incomplete inputs and degrades to zero
/// contributions. The builder is where missing prerequisites are caught:
/// an unknown service, a non-mechanic on labor, a service that does not fit
/// the vehicle.
#[derive(Default)]
pub struct WorkOrderBuilder {
    work_order_id: String,
    client_name: String,
    vehicle: Option<Vehicle>,
    config: Option<OverheadConfiguration>,
    catalog: HashMap<String, CatalogService>,
    employee: Option<Employee>,
    services: Vec<(String, f64)>,
    overrides: HashMap<String, f64>,
    warnings: Vec<String>,
}

/// A priced work order plus anything the caller should tell the user.
#[derive(Debug)]
pub struct BuiltWorkOrder {
    pub order: WorkOrder,
    pub warnings: Vec<String>,
}

impl WorkOrderBuilder {
    /// Creates an empty builder for the given work order id.
    pub fn new(work_order_id: &str) -> Self {
        Self {
            work_order_id: work_order_id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_client(mut self, client_name: &str) -> Self {
        self.client_name = client_name.to_string();
        self
    }

    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    /// Sets the shop overhead and margin used for every line.
    pub fn with_config(mut self, config: OverheadConfiguration) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the catalog that `add_service` ids are resolved against.
    pub fn with_catalog(mut self, services: Vec<CatalogService>) -> Self {
        self.catalog = services
            .into_iter()
            .map(|s| (s.service_id.clone(), s))
            .collect();
        self
    }

    /// Assigns the employee whose pay drives the labor rate.
    pub fn assign_employee(mut self, employee: Employee) -> Self {
        self.employee = Some(employee);
        self
    }

    pub fn add_service(mut self, service_id: &str, quantity: f64) -> Self {
        self.services.push((service_id.to_string(), quantity));
        self
    }

    /// Replaces the computed unit price of every line for `service_id`.
    pub fn override_price(mut self, service_id: &str, unit_price: f64) -> Self {
        self.overrides.insert(service_id.to_string(), unit_price);
        self
    }

    /// Consumes the builder and returns an open, fully priced work order.
    ///
    /// # Errors
    ///
    /// Returns a `ShopError` if the configuration or catalog is missing, the
    /// assigned employee is not a mechanic, or a requested service is
    /// unknown, has a bad quantity or manual price, or does not apply to the
    /// vehicle.
    pub fn build(mut self) -> Result<BuiltWorkOrder, ShopError> {
        let config = self.config.take().ok_or(ShopError::ConfigNotDefined)?;
        if self.catalog.is_empty() {
            return Err(ShopError::CatalogNotDefined);
        }

        match &self.employee {
            Some(employee) if !employee.is_mechanic() => {
                return Err(ShopError::NotAMechanic(employee.employee_id.clone()));
            }
            Some(employee) => {
                let unpaid = employee
                    .monthly_compensation
                    .map_or(true, |c| c == 0.0 || c.is_nan());
                if unpaid {
                    self.warnings.push(format!(
                        "Mechanic '{}' has no compensation on file; labor is priced at zero",
                        employee.employee_id
                    ));
                }
                if !employee.active {
                    self.warnings.push(format!(
                        "Mechanic '{}' is marked inactive",
                        employee.employee_id
                    ));
                }
            }
            None => self
                .warnings
                .push("No mechanic assigned; quote covers overhead and margin only".to_string()),
        }

        let mut line_items = Vec::with_capacity(self.services.len());
        for (service_id, quantity) in &self.services {
            let service = self
                .catalog
                .get(service_id)
                .ok_or_else(|| ShopError::ServiceNotFound(service_id.clone()))?;

            if !quantity.is_finite() || *quantity <= 0.0 {
                return Err(ShopError::InvalidQuantity {
                    service_id: service_id.clone(),
                    quantity: *quantity,
                });
            }

            let unit_price_override = self.overrides.get(service_id).copied();
            if let Some(unit_price) = unit_price_override {
                if !unit_price.is_finite() || unit_price < 0.0 {
                    return Err(ShopError::InvalidUnitPrice {
                        service_id: service_id.clone(),
                        unit_price,
                    });
                }
            }

            if let Some(vehicle) = &self.vehicle {
                if !service.scope.applies_to(vehicle) {
                    return Err(ShopError::ServiceNotApplicable {
                        service_id: service_id.clone(),
                        vehicle: vehicle.to_string(),
                    });
                }
            }

            line_items.push(LineItem {
                service_id: service_id.clone(),
                description: service.name.clone(),
                quantity: *quantity,
                unit_price_override,
                estimate: None,
            });
        }

        let mut order = WorkOrder {
            work_order_id: self.work_order_id,
            client_name: self.client_name,
            vehicle: self.vehicle,
            assigned_employee_id: self.employee.as_ref().map(|e| e.employee_id.clone()),
            status: WorkOrderStatus::Open,
            line_items,
        };
        pricing::reprice(&mut order, &self.catalog, self.employee.as_ref(), &config)?;

        Ok(BuiltWorkOrder {
            order,
            warnings: self.warnings,
        })
    }
}
