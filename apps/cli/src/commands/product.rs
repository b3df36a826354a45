use std::process::ExitCode;

use anyhow::Context;
use stockroom_inventory::form::{NAME, PRICE, SKU, STOCK};
use stockroom_inventory::{Category, Inventory, InventoryFilter, ProductForm, StockStatus};
use stockroom_validator::form::{InlineMessages, SubmitOutcome, attach};

use crate::cli::{CheckArgs, ListArgs, OutputFormat};
use crate::output;
use crate::settings::Settings;

/// Runs the new-product form over the given values and, when they pass,
/// shows the product that would be saved.
pub fn check(args: &CheckArgs, settings: &Settings) -> anyhow::Result<ExitCode> {
    let category = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;

    let mut form = ProductForm::new()
        .with(SKU, args.sku.as_str())
        .with(NAME, args.name.as_str())
        .with(PRICE, args.price.as_str())
        .with(STOCK, args.stock.as_str());
    form.set_category(category);

    let mut attached = attach(form, InlineMessages::new(), settings.validation);
    let report = match attached.submit() {
        SubmitOutcome::Proceed(report) => report,
        SubmitOutcome::Blocked(report) => {
            match settings.output {
                OutputFormat::Text => print!("{}", output::report_text(&report)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let product = attached
        .form()
        .into_product()
        .context("the form validated but the values could not be stored")?;

    match settings.output {
        OutputFormat::Text => {
            print!("{}", output::report_text(&report));
            println!("{}", output::product_header());
            println!("{}", output::product_row(&product));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&product)?),
    }
    Ok(ExitCode::SUCCESS)
}

/// Lists the demo catalog through the given filters.
pub fn list(args: &ListArgs, settings: &Settings) -> anyhow::Result<ExitCode> {
    let filter = InventoryFilter {
        search: args.search.clone(),
        category: args
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?,
        status: args.status.as_deref().map(StockStatus::from_code),
    };

    let inventory = Inventory::sample();
    let products: Vec<_> = inventory.query(&filter).collect();
    tracing::debug!(matched = products.len(), total = inventory.len(), "catalog queried");

    match settings.output {
        OutputFormat::Text => {
            println!("{}", output::product_header());
            for product in &products {
                println!("{}", output::product_row(product));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&products)?),
    }
    Ok(ExitCode::SUCCESS)
}
