use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use fleet_core::views::dashboard::dashboard_view;

use crate::{inputs::Inputs, parsers::format_optional};

#[derive(Args)]
pub struct DashboardArgs {
    /// Print the full view, charts included, as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(inputs: &Inputs, args: DashboardArgs) -> Result<(), anyhow::Error> {
    let dataset = inputs.dataset();
    let view = dashboard_view(&dataset);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let kpis = &view.kpis;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Metric", "Value"])
        .add_row(vec![String::from("Total Vehicles"), kpis.total_vehicles.to_string()])
        .add_row(vec![
            String::from("Available Vehicles"),
            kpis.available_vehicles.to_string(),
        ])
        .add_row(vec![String::from("Total Orders"), kpis.total_orders.to_string()])
        .add_row(vec![
            String::from("On-Time Delivery Rate"),
            format_optional(kpis.on_time_rate, "%"),
        ])
        .add_row(vec![
            String::from("Average Delivery Cost (INR)"),
            format_optional(kpis.average_delivery_cost, ""),
        ]);

    println!("{table}");

    if !view.reorder_alerts.is_empty() {
        let mut alerts = Table::new();
        alerts
            .load_preset(UTF8_FULL)
            .set_header(vec!["Warehouse", "Location", "Category", "Stock", "Reorder Level"]);
        for item in &view.reorder_alerts {
            alerts.add_row(vec![
                item.warehouse_id.clone(),
                item.location.clone(),
                item.product_category.clone(),
                format!("{:.0}", item.current_stock_units),
                format!("{:.0}", item.reorder_level),
            ]);
        }
        println!("{alerts}");
    }

    Ok(())
}
