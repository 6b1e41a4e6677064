use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::model::{SearchField, ALL_CLASSIFICATIONS};

#[derive(Parser, Debug)]
#[command(name = "plant-catalog-pdf")]
#[command(
    author,
    version,
    about = "Render medicinal plant records as PDF fact sheets and catalogs"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a single record as a fact sheet
    Sheet {
        /// Records JSON file (array of plant records)
        records: PathBuf,

        /// Id of the record to render
        #[arg(long)]
        id: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a catalog of records, optionally filtered by classification
    Catalog {
        /// Records JSON file (array of plant records)
        records: PathBuf,

        /// Classification label to include ("all" for every record)
        #[arg(short, long, default_value = ALL_CLASSIFICATIONS)]
        classification: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Search records and print the matches
    Search {
        /// Records JSON file (array of plant records)
        records: PathBuf,

        /// Text to look for (case-insensitive)
        query: String,

        /// Field to search in
        #[arg(short, long, value_enum, default_value_t = SearchField::NomePopular)]
        field: SearchField,
    },

    /// List the known classification labels
    Classifications {
        /// Classifications JSON file
        path: PathBuf,
    },
}

/// Options shared by the PDF-producing subcommands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output PDF file path (defaults to a name derived from the content)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Logo image to stamp on headers and the catalog cover
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// App config JSON (supplies the logo when --logo is not given)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip PDF stream compression
    #[arg(long)]
    pub no_compress: bool,

    /// Generation date printed in the document (dd/mm/yyyy, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

impl OutputArgs {
    /// Get the output path, falling back to `default_name` in the current directory
    pub fn output_path(&self, default_name: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Path::new(default_name).to_path_buf())
    }
}

/// Default file name for a fact sheet: the common name with whitespace runs replaced by `_`
pub fn sheet_file_name(common_name: &str) -> String {
    let mut name = String::with_capacity(common_name.len() + 4);
    let mut in_space = false;
    for c in common_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str(".pdf");
    name
}

/// Default file name for a catalog
pub fn catalog_file_name(classification: &str) -> String {
    format!("catalogo-plantas-{}.pdf", classification.to_lowercase())
}
