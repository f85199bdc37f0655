//! Inventory command handlers.

use std::fmt::Write as _;
use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use paddock_core::insights::{MONTHLY_BUDGET, inventory as insights};
use paddock_core::stream::InventoryFilter;
use paddock_core::{
    CreateInventoryItemRequest, EntityId, Facility, InventoryCategory, InventoryItem,
    StockStatus, UpdateInventoryItemRequest,
};

use crate::cli::{GlobalOpts, IdArg, InventoryArgs, InventoryCommand};
use crate::error::CliError;
use crate::output::{self, Painter, Tone};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InventoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Reorder At")]
    reorder_level: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl InventoryRow {
    fn new(i: &InventoryItem, painter: Painter) -> Self {
        Self {
            id: i.id.to_string(),
            name: i.name.clone(),
            category: i.category.to_string(),
            quantity: format!("{} {}", i.quantity, i.unit),
            reorder_level: i.reorder_level.to_string(),
            value: format!("${:.2}", i.total_value()),
            status: painter.paint(i.status, status_tone(i.status)),
        }
    }
}

fn status_tone(status: StockStatus) -> Tone {
    match status {
        StockStatus::InStock => Tone::Good,
        StockStatus::LowStock => Tone::Warn,
        StockStatus::OutOfStock => Tone::Bad,
    }
}

fn detail(i: &InventoryItem, painter: Painter) -> String {
    output::detail(
        painter,
        &format!("{} ({})", i.name, i.id),
        &[
            ("Category", i.category.to_string()),
            ("Quantity", format!("{} {}", i.quantity, i.unit)),
            ("Reorder level", i.reorder_level.to_string()),
            ("Cost per unit", format!("${:.2}", i.cost_per_unit)),
            ("Total value", format!("${:.2}", i.total_value())),
            ("Status", painter.paint(i.status, status_tone(i.status))),
        ],
    )
}

fn print_many(items: &[Arc<InventoryItem>], global: &GlobalOpts) -> Result<(), CliError> {
    let painter = Painter::new(global);
    let out = output::render_list(
        &global.output,
        items,
        |i| InventoryRow::new(i, painter),
        |i| i.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_one(item: &Arc<InventoryItem>, global: &GlobalOpts) -> Result<(), CliError> {
    let painter = Painter::new(global);
    let out = output::render_single(
        &global.output,
        item,
        |i| detail(i, painter),
        |i| i.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Summary ─────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InventorySummary {
    total_value: f64,
    monthly_budget: f64,
    budget_utilization: f64,
    value_by_category: Vec<(InventoryCategory, f64)>,
    reorder: Vec<Arc<InventoryItem>>,
}

impl InventorySummary {
    fn from_items(items: &[Arc<InventoryItem>]) -> Self {
        let total_value = insights::total_value(items);
        Self {
            total_value,
            monthly_budget: MONTHLY_BUDGET,
            budget_utilization: insights::budget_utilization(total_value),
            value_by_category: insights::value_by_category(items).into_iter().collect(),
            reorder: insights::reorder_list(items),
        }
    }

    fn render(&self, painter: Painter) -> String {
        let tone = if self.budget_utilization > 100.0 {
            Tone::Bad
        } else {
            Tone::Neutral
        };
        let mut fields = vec![
            ("Total value", format!("${:.2}", self.total_value)),
            (
                "Budget used",
                painter.paint(
                    format!(
                        "{:.1}% of ${:.0}",
                        self.budget_utilization, self.monthly_budget
                    ),
                    tone,
                ),
            ),
        ];
        for (category, value) in &self.value_by_category {
            fields.push((category_label(*category), format!("${value:.2}")));
        }

        let mut out = output::detail(painter, "Inventory", &fields);
        if !self.reorder.is_empty() {
            let _ = write!(out, "\n\n{}", painter.heading("Reorder"));
            for item in &self.reorder {
                let _ = write!(
                    out,
                    "\n  {:<24} {:>8} {:<8} {}",
                    item.name,
                    item.quantity,
                    item.unit,
                    painter.paint(item.status, status_tone(item.status))
                );
            }
        }
        out
    }
}

fn category_label(category: InventoryCategory) -> &'static str {
    match category {
        InventoryCategory::Food => "  Food",
        InventoryCategory::Medicine => "  Medicine",
        InventoryCategory::Equipment => "  Equipment",
        InventoryCategory::Supplies => "  Supplies",
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    facility: &Facility,
    args: InventoryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InventoryCommand::List {
            category,
            status,
            search,
            reorder,
        } => {
            let mut filters = Vec::new();
            if let Some(category) = category {
                filters.push(InventoryFilter::ByCategory(util::parse_enum(
                    "category", &category,
                )?));
            }
            if let Some(status) = status {
                filters.push(InventoryFilter::ByStatus(util::parse_enum(
                    "status", &status,
                )?));
            }
            if let Some(term) = search {
                filters.push(InventoryFilter::Search(term));
            }
            if reorder {
                filters.push(InventoryFilter::NeedsReorder);
            }

            let all = facility.store().inventory_snapshot();
            let shown: Vec<_> = all
                .iter()
                .filter(|i| filters.iter().all(|f| f.matches(i)))
                .cloned()
                .collect();
            print_many(&shown, global)
        }

        InventoryCommand::Summary => {
            let painter = Painter::new(global);
            let summary = InventorySummary::from_items(&facility.store().inventory_snapshot());
            let out = output::render_single(
                &global.output,
                &summary,
                |s| s.render(painter),
                |s| format!("{:.2}", s.total_value),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        InventoryCommand::Get(IdArg { id }) => {
            let item = util::require(
                facility
                    .store()
                    .inventory_item_by_id(&EntityId::from(id.as_str())),
                "Inventory item",
                &id,
                "inventory list",
            )?;
            print_one(&item, global)
        }

        InventoryCommand::Add(payload) => {
            let req: CreateInventoryItemRequest = util::read_payload(&payload.from_file)?;
            let created = facility.add_inventory_item(&req).await?;
            output::notice(
                global,
                &format!("Inventory item {} added ({})", created.id, created.status),
            );
            print_one(&created, global)
        }

        InventoryCommand::Update { id, payload } => {
            let req: UpdateInventoryItemRequest = util::read_payload(&payload.from_file)?;
            let updated = facility
                .update_inventory_item(&EntityId::from(id), &req)
                .await?;
            output::notice(global, &format!("Inventory item {} updated", updated.id));
            print_one(&updated, global)
        }

        InventoryCommand::Restock { id, quantity } => {
            if quantity < 0.0 {
                return Err(CliError::Validation {
                    field: "quantity".into(),
                    reason: "must not be negative".into(),
                });
            }
            let req = UpdateInventoryItemRequest {
                quantity: Some(quantity),
                ..Default::default()
            };
            let updated = facility
                .update_inventory_item(&EntityId::from(id), &req)
                .await?;
            output::notice(
                global,
                &format!(
                    "{} now at {} {} ({})",
                    updated.name, updated.quantity, updated.unit, updated.status
                ),
            );
            Ok(())
        }

        InventoryCommand::Delete(IdArg { id }) => {
            if !util::confirm(
                &format!("Delete inventory item {id}?"),
                "inventory delete",
                global.yes,
            )? {
                return Ok(());
            }
            facility
                .delete_inventory_item(&EntityId::from(id.as_str()))
                .await?;
            output::notice(global, &format!("Inventory item {id} deleted"));
            Ok(())
        }
    }
}
