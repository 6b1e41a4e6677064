use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use plant_catalog_pdf::cli::{catalog_file_name, sheet_file_name, Args, Command, OutputArgs};
use plant_catalog_pdf::config::{AppConfig, Settings};
use plant_catalog_pdf::model::{ClassificationSet, ImageSource, RecordCollection};
use plant_catalog_pdf::{generate_catalog, generate_single, SourceLoader};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    match args.command {
        Command::Sheet {
            records,
            id,
            output,
        } => {
            let collection = load_records(&records)?;
            let record = collection
                .get(&id)
                .ok_or_else(|| plant_catalog_pdf::RecordError::NotFound(id.clone()))?;
            record
                .validate()
                .with_context(|| format!("Record {} cannot be rendered", id))?;

            let settings = Settings::from_args(&output).with_context(|| "Invalid output options")?;
            let logo = resolve_logo(&output)?;
            let loader = SourceLoader::new(base_dir(&records));

            let pdf_data = generate_single(record, logo.as_ref(), &loader, &settings)
                .await
                .with_context(|| "Failed to generate fact sheet PDF")?;

            let output_path = output.output_path(&sheet_file_name(&record.common_name));
            write_pdf(&output_path, pdf_data)?;
        }
        Command::Catalog {
            records,
            classification,
            output,
        } => {
            let collection = load_records(&records)?;
            let selected = collection.with_classification(&classification);
            for record in &selected {
                record
                    .validate()
                    .with_context(|| format!("Record {} cannot be rendered", record.id))?;
            }
            log::info!(
                "Rendering {} of {} records for classification \"{}\"",
                selected.len(),
                collection.len(),
                classification
            );

            let settings = Settings::from_args(&output).with_context(|| "Invalid output options")?;
            let logo = resolve_logo(&output)?;
            let loader = SourceLoader::new(base_dir(&records));

            let pdf_data = generate_catalog(&selected, &classification, logo.as_ref(), &loader, &settings)
                .await
                .with_context(|| "Failed to generate catalog PDF")?;

            let output_path = output.output_path(&catalog_file_name(&classification));
            write_pdf(&output_path, pdf_data)?;
        }
        Command::Search {
            records,
            query,
            field,
        } => {
            let collection = load_records(&records)?;
            let hits = collection.search(&query, field);
            for record in &hits {
                println!(
                    "{}\t{}\t{}\t{}",
                    record.id, record.common_name, record.scientific_name, record.classification
                );
            }
            log::info!("{} of {} records match", hits.len(), collection.len());
        }
        Command::Classifications { path } => {
            let set = ClassificationSet::from_path(&path)
                .with_context(|| format!("Failed to read classifications: {}", path.display()))?;
            for item in set.iter() {
                if item.description.is_empty() {
                    println!("{}", item.name);
                } else {
                    println!("{}\t{}", item.name, item.description);
                }
            }
        }
    }

    Ok(())
}

fn load_records(path: &Path) -> Result<RecordCollection> {
    let collection = RecordCollection::from_path(path)
        .with_context(|| format!("Failed to read records file: {}", path.display()))?;
    log::info!("Loaded {} records from {}", collection.len(), path.display());
    Ok(collection)
}

/// Relative image paths in records are resolved against the records file
fn base_dir(records: &Path) -> PathBuf {
    records
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `--logo` wins over the config file's logo
fn resolve_logo(output: &OutputArgs) -> Result<Option<ImageSource>> {
    if let Some(path) = &output.logo {
        let absolute = std::path::absolute(path)
            .with_context(|| format!("Invalid logo path: {}", path.display()))?;
        return Ok(Some(ImageSource::Path(absolute)));
    }

    let Some(config_path) = &output.config else {
        return Ok(None);
    };
    let config = AppConfig::from_path(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let logo = match config.get_logo() {
        Some(ImageSource::Path(relative)) => {
            let absolute = std::path::absolute(base_dir(config_path).join(relative))
                .with_context(|| format!("Invalid logo path: {}", relative.display()))?;
            Some(ImageSource::Path(absolute))
        }
        other => other.cloned(),
    };
    Ok(logo)
}

fn write_pdf(output_path: &Path, pdf_data: Vec<u8>) -> Result<()> {
    fs::write(output_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote PDF to {}", output_path.display());
    Ok(())
}
