use crate::catalog::Vehicle;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    #[default]
    Open,
    InProgress,
    AwaitingParts,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkOrderStatus::Completed | WorkOrderStatus::Cancelled)
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkOrderStatus::Open => "open",
            WorkOrderStatus::InProgress => "in_progress",
            WorkOrderStatus::AwaitingParts => "awaiting_parts",
            WorkOrderStatus::Completed => "completed",
            WorkOrderStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Cost breakdown for one catalog service. Values are never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimateResult {
    pub hourly_rate: f64,
    pub labor_cost: f64,
    pub overhead_per_job: f64,
    pub margin_amount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub service_id: String,
    pub description: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price_override: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<EstimateResult>,
}

impl LineItem {
    pub fn unit_price(&self) -> f64 {
        self.unit_price_override
            .or(self.estimate.map(|e| e.total))
            .unwrap_or(0.0)
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub work_order_id: String,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Vehicle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_employee_id: Option<String>,
    #[serde(default)]
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl WorkOrder {
    pub fn total(&self) -> f64 {
        self.line_items.iter().map(LineItem::line_total).sum()
    }
}
