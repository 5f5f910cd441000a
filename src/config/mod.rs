pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_OUTPUT_STEM: &str = "stacking_plan";
pub const DEFAULT_PLAN_NAME: &str = "Panel Stacking Plan";
pub const MAX_LINES_PER_PAGE: usize = 10_000;

pub fn default_formats() -> &'static [String] {
    static FORMATS: OnceLock<Vec<String>> = OnceLock::new();
    FORMATS.get_or_init(|| vec!["csv".to_string(), "txt".to_string()])
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pallet-planner")]
#[command(about = "Plan how curved panels are stacked on shipping pallets")]
pub struct CliConfig {
    /// Panel CSV (label,length,width,radius,angleDeg)
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML configuration file; command line values override it
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    /// Number of pallets; omit for a single stack
    #[arg(short, long)]
    pub pallets: Option<usize>,

    /// Output formats (csv, json, txt); default csv,txt
    #[arg(long, value_delimiter = ',')]
    pub formats: Option<Vec<String>>,

    #[arg(long)]
    pub output_stem: Option<String>,

    #[arg(long)]
    pub lines_per_page: Option<usize>,

    /// Bundle every output file into one zip
    #[arg(long)]
    pub archive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Show the plan summary without writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or("")
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn output_stem(&self) -> &str {
        self.output_stem.as_deref().unwrap_or(DEFAULT_OUTPUT_STEM)
    }

    fn plan_name(&self) -> &str {
        DEFAULT_PLAN_NAME
    }

    fn pallet_count(&self) -> Option<usize> {
        self.pallets
    }

    fn output_formats(&self) -> &[String] {
        self.formats.as_deref().unwrap_or(default_formats())
    }

    fn lines_per_page(&self) -> usize {
        self.lines_per_page
            .unwrap_or(crate::adapters::report::DEFAULT_LINES_PER_PAGE)
    }

    fn archive(&self) -> bool {
        self.archive
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validation::validate_required_field("input", &self.input)?;
        validation::validate_path("input", input)?;
        validation::validate_path("output_path", self.output_path())?;
        validation::validate_non_empty_string("output_stem", self.output_stem())?;
        validation::validate_output_formats("formats", self.output_formats())?;
        validation::validate_range(
            "lines_per_page",
            self.lines_per_page(),
            crate::adapters::report::MIN_LINES_PER_PAGE,
            MAX_LINES_PER_PAGE,
        )?;
        if let Some(pallets) = self.pallets {
            validation::validate_positive_number("pallets", pallets, 1)?;
        }
        Ok(())
    }
}
