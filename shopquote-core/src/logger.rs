use crate::error::ShopError;
use csv::Writer;
use serde::{Deserialize, Serialize};
use shopquote_schemas::{catalog::CatalogService, work_order::WorkOrder};
use std::collections::HashMap;
use std::fs;
use std::io;

/// One priced line as written to the quote log. Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLogEntry {
    pub work_order_id: String,
    pub service_id: String,
    pub employee_id: String,
    pub estimated_hours: f64,
    pub hourly_rate: f64,
    pub labor_cost: f64,
    pub overhead_per_job: f64,
    pub margin_amount: f64,
    pub total: f64,
    pub unit_price: f64,
    pub quantity: f64,
    pub line_total: f64,
}

pub struct QuoteLogger {
    writer: Writer<fs::File>,
}

impl QuoteLogger {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_work_order(
        &mut self,
        order: &WorkOrder,
        catalog: &HashMap<String, CatalogService>,
    ) -> Result<(), anyhow::Error> {
        for item in &order.line_items {
            let estimate = item.estimate.unwrap_or_default();
            let entry = QuoteLogEntry {
                work_order_id: order.work_order_id.clone(),
                service_id: item.service_id.clone(),
                employee_id: order.assigned_employee_id.clone().unwrap_or_default(),
                estimated_hours: catalog
                    .get(&item.service_id)
                    .map_or(0.0, |s| s.estimated_hours),
                hourly_rate: estimate.hourly_rate,
                labor_cost: estimate.labor_cost,
                overhead_per_job: estimate.overhead_per_job,
                margin_amount: estimate.margin_amount,
                total: estimate.total,
                unit_price: item.unit_price(),
                quantity: item.quantity,
                line_total: item.line_total(),
            };
            self.writer.serialize(entry)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Reads a quote log written by `QuoteLogger` back into memory.
pub fn read_quote_log(path: &str) -> Result<Vec<QuoteLogEntry>, ShopError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| ShopError::CsvError(path.to_string(), e))?;
    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let entry: QuoteLogEntry = result.map_err(|e| ShopError::CsvError(path.to_string(), e))?;
        entries.push(entry);
    }
    Ok(entries)
}
