use shopquote_core::{
    estimator::{self, round_to_cents},
    pagination::Page,
};
use shopquote_schemas::{
    catalog::{CatalogService, ServiceScope},
    employee::Employee,
    work_order::{EstimateResult, WorkOrder},
};

pub fn print_quote_breakdown(
    service: &CatalogService,
    employee: Option<&Employee>,
    estimate: &EstimateResult,
) {
    let display = estimator::rounded(estimate);

    println!("\n--- [Quote] {} ---", service.name);
    println!("Estimated duration: {} h", service.estimated_hours);
    match employee {
        Some(e) => println!("Mechanic: {} ({})", e.name, e.employee_id),
        None => println!("Mechanic: none assigned"),
    }
    println!("----------------------------------------");
    println!("  - Hourly Rate:              ${:.2}", display.hourly_rate);
    println!("  - Labor Cost:               ${:.2}", display.labor_cost);
    println!("  - Overhead per Job:         ${:.2}", display.overhead_per_job);
    println!("  - Margin:                   ${:.2}", display.margin_amount);
    println!("  --------------------------------------");
    println!("  - Total:                    ${:.2}", display.total);
}

pub fn print_work_order_summary(order: &WorkOrder, warnings: &[String]) {
    println!("\n\n--- [Work Order Summary] ---");
    println!("========================================");
    println!("Work order: {} ({})", order.work_order_id, order.status);
    println!("Client: {}", order.client_name);
    if let Some(vehicle) = &order.vehicle {
        println!("Vehicle: {}", vehicle);
    }
    println!(
        "Mechanic: {}",
        order.assigned_employee_id.as_deref().unwrap_or("none assigned")
    );
    for warning in warnings {
        println!("Warning: {}", warning);
    }
    println!("----------------------------------------");
    println!("{:<28} {:>6} {:>12} {:>12}", "Service", "Qty", "Unit", "Line");
    for item in &order.line_items {
        let marker = if item.unit_price_override.is_some() { "*" } else { "" };
        println!(
            "{:<28} {:>6} {:>12.2} {:>12.2}{}",
            item.description,
            item.quantity,
            round_to_cents(item.unit_price()),
            round_to_cents(item.line_total()),
            marker
        );
    }
    println!("  --------------------------------------");
    println!("  - Total:                    ${:.2}", round_to_cents(order.total()));
    if order.line_items.iter().any(|i| i.unit_price_override.is_some()) {
        println!("  (* unit price set manually)");
    }
    println!("========================================");
}

pub fn print_catalog_page(page: &Page<CatalogService>) {
    println!("\n--- [Catalog] page {}/{} ({} services) ---", page.page, page.total_pages.max(1), page.total_items);
    for service in &page.items {
        let scope = match &service.scope {
            ServiceScope::General => "general".to_string(),
            ServiceScope::Vehicle { make, model } => match model {
                Some(model) => format!("{} {}", make, model),
                None => format!("{} (all models)", make),
            },
        };
        println!(
            "  {:<14} {:<30} {:>6.2} h   {}",
            service.service_id, service.name, service.estimated_hours, scope
        );
    }
}

pub fn print_employee_page(page: &Page<Employee>) {
    println!("\n--- [Employees] page {}/{} ({} employees) ---", page.page, page.total_pages.max(1), page.total_items);
    for employee in &page.items {
        let rate = estimator::hourly_rate(Some(employee));
        println!(
            "  {:<10} {:<24} {:<13} {:>10.2}/h{}",
            employee.employee_id,
            employee.name,
            employee.role.as_str(),
            round_to_cents(rate),
            if employee.active { "" } else { "  (inactive)" }
        );
    }
}
