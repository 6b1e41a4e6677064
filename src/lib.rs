pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod render;

pub use config::Settings;
pub use error::{ConfigError, ImageError, RecordError, RenderError};
pub use model::{ImageSource, PlantRecord, RecordCollection};
pub use render::{CatalogRenderer, FactSheetRenderer, ImageLoader, SourceLoader};

/// Render one record as a fact sheet PDF.
///
/// This is the recommended entry point for library consumers. Images that
/// fail to load are drawn as placeholders; only a failure to produce the PDF
/// itself is an error.
///
/// # Example
///
/// ```no_run
/// use plant_catalog_pdf::{generate_single, RecordCollection, Settings, SourceLoader};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let records = RecordCollection::from_path("plantas.json".as_ref())?;
/// let boldo = records.get("p1").expect("record exists");
///
/// let loader = SourceLoader::new(".");
/// let pdf_bytes = generate_single(boldo, None, &loader, &Settings::default()).await?;
///
/// std::fs::write("Boldo.pdf", pdf_bytes)?;
/// # Ok(())
/// # }
/// ```
pub async fn generate_single<L: ImageLoader>(
    record: &PlantRecord,
    logo: Option<&ImageSource>,
    loader: &L,
    settings: &Settings,
) -> Result<Vec<u8>, RenderError> {
    let renderer = FactSheetRenderer::new(settings.clone(), loader);
    renderer.render(record, logo).await
}

/// Render a catalog of `records` (already filtered by `filter_label`).
///
/// `filter_label` is [`model::ALL_CLASSIFICATIONS`] or a classification
/// name; it only affects the titles. An empty slice yields a cover and an
/// empty summary.
pub async fn generate_catalog<L: ImageLoader>(
    records: &[PlantRecord],
    filter_label: &str,
    logo: Option<&ImageSource>,
    loader: &L,
    settings: &Settings,
) -> Result<Vec<u8>, RenderError> {
    let renderer = CatalogRenderer::new(settings.clone(), loader);
    renderer.render(records, filter_label, logo).await
}
