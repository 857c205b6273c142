//! End-to-end quoting scenarios for a small repair shop.

use shopquote_core::{
    builder::WorkOrderBuilder,
    estimator::{estimate_service_cost, round_to_cents},
    pricing,
};
use shopquote_schemas::{
    catalog::{CatalogService, ServiceScope},
    employee::{Employee, EmployeeRole},
    overhead::{ExpenseItem, OverheadConfiguration},
    work_order::WorkOrderStatus,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn brake_service() -> CatalogService {
    CatalogService {
        service_id: "SRV-BRAKE".to_string(),
        name: "Front brake pads".to_string(),
        estimated_hours: 1.5,
        scope: ServiceScope::General,
        description: None,
    }
}

fn mechanic() -> Employee {
    Employee {
        employee_id: "EMP-01".to_string(),
        name: "Joao".to_string(),
        role: EmployeeRole::Mechanic,
        monthly_compensation: Some(3500.0),
        active: true,
    }
}

fn shop_config(average_monthly_jobs: i64) -> OverheadConfiguration {
    let items = [
        ("Rent", 500.0),
        ("Payroll rollup", 2000.0),
        ("Electricity", 150.0),
        ("Water", 100.0),
        ("Software", 250.0),
    ];
    OverheadConfiguration {
        expense_items: items
            .iter()
            .map(|(name, amount)| ExpenseItem {
                name: name.to_string(),
                monthly_amount: *amount,
            })
            .collect(),
        average_monthly_jobs,
        profit_margin_percent: 10.0,
    }
}

#[test]
fn reference_quote() {
    let estimate = estimate_service_cost(&brake_service(), Some(&mechanic()), &shop_config(10));

    assert_close(estimate.hourly_rate, 3500.0 / 176.0);
    assert_close(estimate.labor_cost, 1.5 * 3500.0 / 176.0);
    assert_eq!(estimate.overhead_per_job, 300.0);
    assert_close(estimate.margin_amount, (estimate.labor_cost + 300.0) * 0.10);
    assert_eq!(
        estimate.total,
        estimate.overhead_per_job + estimate.labor_cost + estimate.margin_amount
    );
    assert_eq!(round_to_cents(estimate.total), 362.81);
}

#[test]
fn no_jobs_configured_drops_overhead() {
    let estimate = estimate_service_cost(&brake_service(), Some(&mechanic()), &shop_config(0));

    assert_eq!(estimate.overhead_per_job, 0.0);
    assert_close(estimate.total, estimate.labor_cost * 1.10);
}

#[test]
fn no_employee_quotes_overhead_with_margin() {
    let estimate = estimate_service_cost(&brake_service(), None, &shop_config(10));

    assert_eq!(estimate.hourly_rate, 0.0);
    assert_eq!(estimate.labor_cost, 0.0);
    assert_close(estimate.total, 300.0 * 1.10);
}

#[test]
fn work_order_lifecycle() {
    let mut built = WorkOrderBuilder::new("WO-2024-001")
        .with_client("Ana Souza")
        .with_config(shop_config(10))
        .with_catalog(vec![brake_service()])
        .assign_employee(mechanic())
        .add_service("SRV-BRAKE", 3.0)
        .build()
        .unwrap();
    let order = &mut built.order;

    assert_eq!(round_to_cents(order.total()), 1088.44);

    pricing::transition(order, WorkOrderStatus::InProgress).unwrap();
    pricing::transition(order, WorkOrderStatus::Completed).unwrap();
    assert!(pricing::transition(order, WorkOrderStatus::Open).is_err());
    assert!(order.status.is_terminal());
}
