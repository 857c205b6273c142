use crate::config::ShopData;
use crate::{plotting, report};
use anyhow::{Context, Result};
use shopquote_core::{
    builder::{self, WorkOrderBuilder},
    error::ShopError,
    estimator,
    logger::QuoteLogger,
    pagination::{self, Page},
    pricing,
};
use shopquote_schemas::{
    catalog::{CatalogService, Vehicle},
    employee::Employee,
    work_order::EstimateResult,
};
use std::{fs, path::Path};

fn find_employee<'a>(shop: &'a ShopData, employee_id: &str) -> Result<&'a Employee> {
    shop.employees
        .get(employee_id)
        .ok_or_else(|| ShopError::EmployeeNotFound(employee_id.to_string()).into())
}

/// Prices a single catalog service for an optional mechanic.
pub fn run_quote(
    shop: &ShopData,
    service_id: &str,
    employee_id: Option<&str>,
    as_json: bool,
) -> Result<EstimateResult> {
    let service = shop
        .services
        .get(service_id)
        .ok_or_else(|| ShopError::ServiceNotFound(service_id.to_string()))?;
    let employee = employee_id.map(|id| find_employee(shop, id)).transpose()?;

    if let Some(e) = employee {
        if !e.is_mechanic() {
            println!("Warning: '{}' is a {}, not a mechanic.", e.name, e.role);
        }
    } else {
        println!("Warning: Select a mechanic to include labor in the price.");
    }

    let estimate = estimator::estimate_service_cost(service, employee, &shop.overhead);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&estimator::rounded(&estimate))?);
    } else {
        report::print_quote_breakdown(service, employee, &estimate);
    }
    Ok(estimate)
}

/// Builds, prices and reports a work order described in a YAML file.
///
/// Artefacts land in a fresh directory under `output_root`.
pub fn run_work_order(shop: &ShopData, file_path: &str, output_root: &str) -> Result<()> {
    println!("\n--- [Workflow] Pricing Work Order ---");

    let request = builder::load_request(file_path)?;

    let mut order_builder = WorkOrderBuilder::new(&request.work_order_id)
        .with_client(&request.client_name)
        .with_config(shop.overhead.clone())
        .with_catalog(shop.services.values().cloned().collect());
    if let Some(vehicle) = request.vehicle {
        order_builder = order_builder.with_vehicle(vehicle);
    }
    if let Some(employee_id) = &request.assigned_employee_id {
        order_builder = order_builder.assign_employee(find_employee(shop, employee_id)?.clone());
    }
    for requested in &request.services {
        order_builder = order_builder.add_service(&requested.service_id, requested.quantity);
        if let Some(price) = requested.unit_price_override {
            order_builder = order_builder.override_price(&requested.service_id, price);
        }
    }
    let built = order_builder.build()?;

    let output_dir = format!(
        "{}/WO_{}_{}",
        output_root,
        request.work_order_id,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Keep the request next to its results for traceability
    fs::copy(file_path, Path::new(&output_dir).join("work_order_request.yaml"))?;

    let log_path = Path::new(&output_dir).join("quote_log.csv");
    let log_path_str = log_path
        .to_str()
        .context("Output path is not valid UTF-8")?;
    let mut logger = QuoteLogger::new(log_path_str)
        .map_err(|e| ShopError::FileIO(log_path_str.to_string(), e))?;
    logger
        .log_work_order(&built.order, &shop.services)
        .map_err(ShopError::LoggingError)?;

    fs::write(
        Path::new(&output_dir).join("work_order.json"),
        pricing::to_display_json(&built.order)?,
    )?;

    plotting::plot_quote_breakdown(&output_dir, log_path_str)?;

    report::print_work_order_summary(&built.order, &built.warnings);
    println!("\nWork order priced. Results are in '{}'", output_dir);
    Ok(())
}

pub fn catalog_page(
    shop: &ShopData,
    make: Option<&str>,
    model: Option<&str>,
    search: Option<&str>,
    page: usize,
    per_page: usize,
) -> Result<Page<CatalogService>> {
    let services = shop.sorted_services();
    let matching: Vec<CatalogService> = pagination::filter_by_text(&services, search.unwrap_or(""), |s| {
        format!("{} {}", s.service_id, s.name)
    })
    .into_iter()
    .filter(|s| match make {
        Some(make) => s.scope.applies_to(&Vehicle {
            make: make.to_string(),
            model: model.unwrap_or_default().to_string(),
            year: None,
        }),
        None => true,
    })
    .cloned()
    .collect();

    Ok(pagination::paginate(&matching, page, per_page)?)
}

pub fn employee_page(
    shop: &ShopData,
    role: Option<&str>,
    search: Option<&str>,
    page: usize,
    per_page: usize,
) -> Result<Page<Employee>> {
    let employees = shop.sorted_employees();
    let matching: Vec<Employee> = pagination::filter_by_text(&employees, search.unwrap_or(""), |e| {
        format!("{} {}", e.employee_id, e.name)
    })
    .into_iter()
    .filter(|e| role.map_or(true, |r| e.role.as_str().eq_ignore_ascii_case(r)))
    .cloned()
    .collect();

    Ok(pagination::paginate(&matching, page, per_page)?)
}
