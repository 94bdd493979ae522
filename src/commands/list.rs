//! `list`: shows installed models, or the public catalog with `available`.

use std::collections::BTreeMap;

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::error::Result;
use crate::ollama::{CatalogModel, ModelCatalog, ModelInfo, OllamaClient};
use crate::ui;

/// Lists the models installed on the configured server, grouped by family.
pub async fn run(client: &OllamaClient, colored: bool) -> Result<()> {
    let models = client.list_models().await?;
    if models.is_empty() {
        ui::warning(
            "No models installed. Pull one first, e.g. 'ollama pull llama3.2'",
            colored,
        );
        return Ok(());
    }

    let mut by_family: BTreeMap<String, Vec<ModelInfo>> = BTreeMap::new();
    for model in models {
        by_family
            .entry(model.family().to_string())
            .or_default()
            .push(model);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["FAMILY", "NAME", "SIZE", "MODIFIED"]);

    for (family, models) in &by_family {
        for model in models {
            table.add_row(vec![
                Cell::new(family),
                Cell::new(&model.name),
                Cell::new(model.human_size()),
                Cell::new(model.modified_at.format("%Y-%m-%d").to_string()),
            ]);
        }
    }

    println!("{table}");
    Ok(())
}

/// Lists the models downloadable from the public library.
pub async fn run_available(catalog: &ModelCatalog, colored: bool) -> Result<()> {
    let spinner = ui::Spinner::new("Fetching model catalog...");
    let models = catalog.models().await;
    spinner.finish_and_clear();
    let models = models?;

    print_catalog(&models);
    ui::info(
        &format!("{} models available at https://ollama.com/library", models.len()),
        colored,
    );
    Ok(())
}

fn print_catalog(models: &[CatalogModel]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["NAME", "CAPABILITIES"]);

    for model in models {
        table.add_row(vec![Cell::new(&model.name), Cell::new(&model.tags)]);
    }

    println!("{table}");
}
