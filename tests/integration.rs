//! Integration tests for the pipeline with real files

use catalogpack::config::SegmentFallback;
use catalogpack::core::COLUMNS;
use catalogpack::prelude::*;
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

const STOCK_EXPORT: &str = "[9:41, 7/8/2025] Front Row: K20 Mini Gold Epsom GHW Stamp W
B25 Noir Togo PHW Stamp B (Unused)
[9:45, 7/8/2025] Front Row: Like New – C18 Rouge Casaque Epsom GHW Stamp Z
[9:46, 7/8/2025] Front Row: KP Black Swift GHW - Full set no receipt
[9:50, 7/8/2025] Front Row: Lindy 26 Gris Meyer Clemence PHW";

const PRICED_EXPORT: &str = "[10:02, 7/8/2025] Front Row: B30 Gold Epsom GHW Stamp W
B2B: 2.5k
B2C: 3k
[10:05, 7/8/2025] Front Row: K25 Noir Togo PHW
B2B: $12,400
B2C: 14k
[10:09, 7/8/2025] Front Row: C24 Craie Swift GHW
Price under request";

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 7).unwrap()
}

fn column(row: &OutputRow, name: &str) -> String {
    let i = COLUMNS.iter().position(|c| *c == name).unwrap();
    row.record()[i].to_string()
}

// =============================================================================
// Web preset
// =============================================================================

#[test]
fn test_web_export_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("mensajes.txt");
    fs::write(&input, STOCK_EXPORT).unwrap();

    let config = PipelineConfig::preset(Preset::Web)
        .with_input_path(&input)
        .with_export_folder(dir.path().join("export"));

    let (run, path) = process_file(&config, date()).unwrap();

    assert_eq!(path, dir.path().join("export").join("productos.web.07.08.2025.csv"));
    assert!(path.exists());
    assert_eq!(run.stats.messages, 4);
    assert_eq!(run.rows.len(), 5);

    let models: Vec<_> = run.listings.iter().map(|l| l.model.as_str()).collect();
    assert_eq!(
        models,
        vec!["Kelly 20", "Birkin 25", "Constance 18", "Kelly Pochette", ""]
    );

    let conditions: Vec<_> = run.listings.iter().map(|l| l.condition).collect();
    assert_eq!(
        conditions,
        vec![
            Condition::BrandNew,
            Condition::NewUnused,
            Condition::LikeNew,
            Condition::BrandNew,
            Condition::BrandNew,
        ]
    );

    assert_eq!(run.listings[3].full_set, FullSet::NoReceipt);
    assert_eq!(run.listings[4].model_tag, Some(ModelTag::Lindy));
}

#[test]
fn test_web_rows_columns() {
    let run = run_pipeline(STOCK_EXPORT, &PipelineConfig::default(), date()).unwrap();
    let row = &run.rows[0];

    assert_eq!(column(row, "Type"), "simple");
    assert_eq!(column(row, "Name"), "Hermès");
    assert_eq!(column(row, "Categories"), "Hermès");
    assert_eq!(column(row, "Tags"), "Brand New, Kelly");
    assert_eq!(column(row, "Sale price"), "");
    assert_eq!(
        column(row, "Images"),
        "https://frontrowco.com/wp-content/uploads/2025/08/HermesD1.jpg"
    );
    assert!(
        column(row, "Short description")
            .starts_with("Kelly 20 Mini Gold Epsom Gold Hardware Stamp W<div class=\"oculto\">")
    );
}

#[test]
fn test_lindy_without_size_model() {
    let run = run_pipeline(STOCK_EXPORT, &PipelineConfig::default(), date()).unwrap();
    let lindy = &run.listings[4];
    assert_eq!(lindy.model, "");
    assert_eq!(lindy.details, "Lindy 26 Gris Meyer Clemence");
    assert_eq!(lindy.tags, "Brand New, Lindy");
}

// =============================================================================
// Pricing preset
// =============================================================================

#[test]
fn test_pricing_export() {
    let config = PipelineConfig::preset(Preset::Pricing);
    let run = run_pipeline(PRICED_EXPORT, &config, date()).unwrap();

    assert_eq!(run.rows.len(), 3);

    assert_eq!(run.rows[0].sale_price, "2500");
    assert_eq!(run.rows[0].regular_price, "3000");
    assert!(run.rows[0].short_description.starts_with("Birkin 30 Gold Epsom Gold Hardware Stamp W 2024<div"));

    assert_eq!(run.rows[1].sale_price, "12400");
    assert_eq!(run.rows[1].regular_price, "14000");

    assert!(run.listings[2].price_on_request);
    assert_eq!(run.rows[2].sale_price, "");
    assert!(
        run.rows[2]
            .short_description
            .starts_with("Constance 24 Craie Swift Gold Hardware\n\nPrice Under Request\n\n<div")
    );
    assert!(run.rows[2].images.ends_with("HermesA3.jpg"));
}

#[test]
fn test_prices_ignored_outside_pricing() {
    let config = PipelineConfig::preset(Preset::Web)
        .with_segment_fallback(SegmentFallback::WholeMessage);
    let run = run_pipeline(PRICED_EXPORT, &config, date()).unwrap();

    assert_eq!(run.rows.len(), 3);
    assert!(run.rows.iter().all(|r| r.sale_price.is_empty() && r.regular_price.is_empty()));
    assert!(run.rows.iter().all(|r| !r.short_description.contains("Price Under Request")));
}

#[test]
fn test_pricing_preset_file_name() {
    let config = PipelineConfig::preset(Preset::Pricing);
    assert_eq!(config.output_file_name(date()), "productos.07.08.2025.csv");
}

// =============================================================================
// Miami preset
// =============================================================================

#[test]
fn test_miami_export_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("stock-miami.txt");
    fs::write(&input, "K25 Gold Togo GHW Stamp K\nB30 Etoupe Epsom PHW").unwrap();

    let config = PipelineConfig::preset(Preset::Miami)
        .with_input_path(&input)
        .with_export_folder(dir.path().join("export-miami"));
    let (run, path) = process_file(&config, date()).unwrap();

    assert!(path.ends_with("productos.miami.07.08.2025.csv"));
    assert_eq!(run.rows.len(), 2);
    assert_eq!(run.rows[0].categories, "miami");
    assert!(run.rows[1].images.ends_with("/2025/08/Miami-Stock-Hermes-A2.jpg"));
    assert_eq!(run.listings[0].stamp.unwrap().year, Some(2025));
}

// =============================================================================
// Manual catalog
// =============================================================================

#[test]
fn test_manual_catalog_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("productos.txt");
    fs::write(
        &input,
        "# Miami, August\nBirkin 30 Etoupe Togo Gold Hardware stamp K\n\nKelly 25 Mauve Pale Epsom\nConstance 18 Rouge\n",
    )
    .unwrap();

    let manual = ManualConfig::new()
        .with_image_start_index(21)
        .with_column("Tags", "Brand New")
        .with_column("In stock?", "1")
        .with_override(2, "Tags", "Like New, Constance")
        .with_override(2, "Regular price", "8900");
    let config = PipelineConfig::preset(Preset::Manual)
        .with_manual(manual)
        .with_input_path(&input)
        .with_export_folder(dir.path().join("export"));
    let (run, path) = process_file(&config, date()).unwrap();

    assert!(path.ends_with("productos.manual.07.08.2025.csv"));
    assert_eq!(run.rows.len(), 3);
    assert_eq!(column(&run.rows[0], "Name"), "Birkin 30 Etoupe Togo Gold Hardware stamp K");
    assert_eq!(column(&run.rows[0], "Categories"), "Hermès");
    assert_eq!(column(&run.rows[0], "Tags"), "Brand New");
    assert_eq!(column(&run.rows[2], "Tags"), "Like New, Constance");
    assert_eq!(column(&run.rows[2], "Regular price"), "8900");
    assert_eq!(column(&run.rows[1], "In stock?"), "1");
    assert!(run.rows[2].images.ends_with("/2025/08/Miami-Stock-Hermes-A23.jpg"));

    let content = fs::read_to_string(&path).unwrap();
    let mut reader = csv::Reader::from_reader(content.trim_start_matches('\u{FEFF}').as_bytes());
    let names: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[3].to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "Birkin 30 Etoupe Togo Gold Hardware stamp K",
            "Kelly 25 Mauve Pale Epsom",
            "Constance 18 Rouge"
        ]
    );
}

#[test]
fn test_manual_catalog_from_json() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("manual.json");
    fs::write(
        &config_path,
        r#"{
  "mode": "manual",
  "category": "Hermès",
  "image": { "prefix": "Stock-", "letter": "M" },
  "manual": {
    "image_start_index": 4,
    "name_column": "Short description",
    "overrides": { "1": { "Sale price": "1500" } }
  }
}"#,
    )
    .unwrap();

    let config = PipelineConfig::from_json_file(&config_path).unwrap();
    let run = run_pipeline("Picotin 18 Gold\nEvelyne 29 Etain", &config, date()).unwrap();

    assert_eq!(run.rows.len(), 2);
    assert_eq!(column(&run.rows[0], "Name"), "Hermès");
    assert_eq!(column(&run.rows[0], "Short description"), "Picotin 18 Gold");
    assert_eq!(column(&run.rows[1], "Sale price"), "1500");
    assert!(run.rows[0].images.ends_with("Stock-M4.jpg"));
    assert!(run.rows[1].images.ends_with("Stock-M5.jpg"));
}

#[test]
fn test_manual_unknown_column_rejected_before_reading() {
    let dir = tempdir().unwrap();
    let config = PipelineConfig::preset(Preset::Manual)
        .with_manual(ManualConfig::new().with_override(0, "Colour", "Noir"))
        .with_input_path(dir.path().join("productos.txt"))
        .with_export_folder(dir.path().join("export"));

    let err = process_file(&config, date()).unwrap_err();
    assert!(err.is_config());
    assert!(!dir.path().join("export").exists());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_json_config_overrides() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{
  "mode": "boutique",
  "category": "Boutique",
  "image": { "prefix": "Boutique", "letter": "Z" },
  "extractor": { "stamp_years": { "K": 2016 }, "stamp_year_in_description": true }
}"#,
    )
    .unwrap();

    let config = PipelineConfig::from_json_file(&config_path).unwrap();
    assert_eq!(config.mode, "boutique");
    assert_eq!(config.image.extension, ".jpg");
    assert_eq!(config.output_name_template, "productos.web.{date}.csv");

    let run = run_pipeline("K25 Gold Togo GHW Stamp K\nB30 Noir", &config, date()).unwrap();
    assert_eq!(run.rows[0].categories, "Boutique");
    assert!(run.rows[0].images.ends_with("BoutiqueZ1.jpg"));
    assert!(run.rows[0].short_description.starts_with("Kelly 25 Gold Togo Gold Hardware Stamp K 2016<div"));
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    let config = PipelineConfig::default()
        .with_input_path(dir.path().join("nope.txt"))
        .with_export_folder(dir.path().join("export"));

    let err = process_file(&config, date()).unwrap_err();
    assert!(matches!(err, CatalogError::InputNotFound { .. }));
    assert!(!dir.path().join("export").exists());
}
