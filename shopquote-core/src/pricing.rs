use crate::{
    error::ShopError,
    estimator::{self, estimate_service_cost},
};
use shopquote_schemas::{
    catalog::CatalogService,
    employee::Employee,
    overhead::OverheadConfiguration,
    work_order::{LineItem, WorkOrder, WorkOrderStatus},
};
use std::collections::HashMap;

/// Attaches a fresh estimate to a line item.
pub fn price_line_item(
    item: &mut LineItem,
    catalog: &HashMap<String, CatalogService>,
    employee: Option<&Employee>,
    config: &OverheadConfiguration,
) -> Result<(), ShopError> {
    let service = catalog
        .get(&item.service_id)
        .ok_or_else(|| ShopError::ServiceNotFound(item.service_id.clone()))?;
    item.estimate = Some(estimate_service_cost(service, employee, config));
    Ok(())
}

/// Recomputes every line of the order. Manual price overrides are kept.
pub fn reprice(
    order: &mut WorkOrder,
    catalog: &HashMap<String, CatalogService>,
    employee: Option<&Employee>,
    config: &OverheadConfiguration,
) -> Result<(), ShopError> {
    for item in &mut order.line_items {
        price_line_item(item, catalog, employee, config)?;
    }
    Ok(())
}

pub fn can_transition(from: WorkOrderStatus, to: WorkOrderStatus) -> bool {
    use WorkOrderStatus::*;

    if from == to {
        return true;
    }
    matches!(
        (from, to),
        (Open, InProgress)
            | (Open, Cancelled)
            | (InProgress, AwaitingParts)
            | (InProgress, Completed)
            | (InProgress, Cancelled)
            | (AwaitingParts, InProgress)
            | (AwaitingParts, Cancelled)
    )
}

/// Moves the order to `to`, enforcing the allowed status graph.
pub fn transition(order: &mut WorkOrder, to: WorkOrderStatus) -> Result<(), ShopError> {
    if order.status == to {
        return Ok(());
    }
    if !can_transition(order.status, to) {
        return Err(ShopError::InvalidTransition {
            from: order.status,
            to,
        });
    }
    if to == WorkOrderStatus::Completed && order.line_items.is_empty() {
        return Err(ShopError::EmptyWorkOrder(order.work_order_id.clone()));
    }
    order.status = to;
    Ok(())
}

/// A copy of the order with every amount rounded to cents, for persisting.
///
/// The source order keeps its unrounded estimates.
pub fn display_copy(order: &WorkOrder) -> WorkOrder {
    let mut copy = order.clone();
    for item in &mut copy.line_items {
        item.estimate = item.estimate.as_ref().map(estimator::rounded);
        item.unit_price_override = item.unit_price_override.map(estimator::round_to_cents);
    }
    copy
}

/// Pretty JSON of the rounded display copy.
pub fn to_display_json(order: &WorkOrder) -> Result<String, ShopError> {
    Ok(serde_json::to_string_pretty(&display_copy(order))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopquote_schemas::{
        catalog::ServiceScope,
        employee::EmployeeRole,
        overhead::ExpenseItem,
    };
    use WorkOrderStatus::*;

    fn catalog() -> HashMap<String, CatalogService> {
        let oil = CatalogService {
            service_id: "SRV-OIL".to_string(),
            name: "Oil change".to_string(),
            estimated_hours: 0.5,
            scope: ServiceScope::General,
            description: None,
        };
        HashMap::from([(oil.service_id.clone(), oil)])
    }

    fn config() -> OverheadConfiguration {
        OverheadConfiguration {
            expense_items: vec![ExpenseItem {
                name: "Rent".to_string(),
                monthly_amount: 2000.0,
            }],
            average_monthly_jobs: 20,
            profit_margin_percent: 0.0,
        }
    }

    fn order(status: WorkOrderStatus, service_ids: &[&str]) -> WorkOrder {
        WorkOrder {
            work_order_id: "WO-1".to_string(),
            client_name: "Ana".to_string(),
            vehicle: None,
            assigned_employee_id: None,
            status,
            line_items: service_ids
                .iter()
                .map(|id| LineItem {
                    service_id: id.to_string(),
                    description: String::new(),
                    quantity: 1.0,
                    unit_price_override: None,
                    estimate: None,
                })
                .collect(),
        }
    }

    #[test]
    fn reprice_fills_estimates() {
        let employee = Employee {
            employee_id: "EMP-01".to_string(),
            name: "Joao".to_string(),
            role: EmployeeRole::Mechanic,
            monthly_compensation: Some(1760.0),
            active: true,
        };
        let mut wo = order(Open, &["SRV-OIL", "SRV-OIL"]);
        wo.line_items[1].unit_price_override = Some(50.0);
        reprice(&mut wo, &catalog(), Some(&employee), &config()).unwrap();

        assert_eq!(wo.line_items[0].unit_price(), 105.0);
        assert_eq!(wo.line_items[1].unit_price(), 50.0);
        assert!(wo.line_items[1].estimate.is_some());
        assert_eq!(wo.total(), 155.0);
    }

    #[test]
    fn unknown_service_is_an_error() {
        let mut wo = order(Open, &["SRV-NOPE"]);
        let err = reprice(&mut wo, &catalog(), None, &config()).unwrap_err();
        assert!(matches!(err, ShopError::ServiceNotFound(id) if id == "SRV-NOPE"));
    }

    #[test]
    fn allowed_transitions() {
        let mut wo = order(Open, &["SRV-OIL"]);
        for next in [InProgress, AwaitingParts, InProgress, Completed] {
            transition(&mut wo, next).unwrap();
        }
        assert_eq!(wo.status, Completed);
    }

    #[test]
    fn terminal_states_do_not_move() {
        for terminal in [Completed, Cancelled] {
            for next in [Open, InProgress, AwaitingParts] {
                assert!(!can_transition(terminal, next));
            }
        }
        assert!(can_transition(Cancelled, Cancelled));
    }

    #[test]
    fn open_cannot_skip_to_completed() {
        let mut wo = order(Open, &["SRV-OIL"]);
        let err = transition(&mut wo, Completed).unwrap_err();
        assert!(matches!(err, ShopError::InvalidTransition { from: Open, to: Completed }));
        assert_eq!(wo.status, Open);
    }

    #[test]
    fn awaiting_parts_cannot_complete_directly() {
        let mut wo = order(AwaitingParts, &["SRV-OIL"]);
        let err = transition(&mut wo, Completed).unwrap_err();
        assert!(matches!(
            err,
            ShopError::InvalidTransition { from: AwaitingParts, to: Completed }
        ));
        assert_eq!(wo.status, AwaitingParts);
    }

    #[test]
    fn same_status_is_a_no_op() {
        let mut wo = order(Completed, &[]);
        transition(&mut wo, Completed).unwrap();
        assert_eq!(wo.status, Completed);
    }

    #[test]
    fn display_copy_rounds_but_keeps_source() {
        let employee = Employee {
            employee_id: "EMP-01".to_string(),
            name: "Joao".to_string(),
            role: EmployeeRole::Mechanic,
            monthly_compensation: Some(3500.0),
            active: true,
        };
        let mut wo = order(Open, &["SRV-OIL"]);
        reprice(&mut wo, &catalog(), Some(&employee), &config()).unwrap();
        let raw_total = wo.line_items[0].estimate.unwrap().total;

        let copy = display_copy(&wo);
        assert_eq!(copy.line_items[0].estimate.unwrap().total, 109.94);
        assert_eq!(wo.line_items[0].estimate.unwrap().total, raw_total);

        let json = to_display_json(&wo).unwrap();
        assert!(json.contains("\"total\": 109.94"));
    }

    #[test]
    fn empty_order_cannot_complete() {
        let mut wo = order(InProgress, &[]);
        assert!(matches!(
            transition(&mut wo, Completed),
            Err(ShopError::EmptyWorkOrder(_))
        ));
        transition(&mut wo, Cancelled).unwrap();
    }
}
