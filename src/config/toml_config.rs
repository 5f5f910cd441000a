use crate::adapters::report::{DEFAULT_LINES_PER_PAGE, MIN_LINES_PER_PAGE};
use crate::config::{DEFAULT_OUTPUT_STEM, DEFAULT_PLAN_NAME, MAX_LINES_PER_PAGE};
use crate::core::ConfigProvider;
use crate::utils::error::{PlanError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub plan: PlanConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    pub name: Option<String>,
    pub pallet_count: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
    pub stem: Option<String>,
    pub lines_per_page: Option<usize>,
    pub archive: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PANEL_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 命令列指定的值優先於檔案
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(input) = &cli.input {
            tracing::info!("🔧 Input overridden to: {}", input);
            self.input.path = input.clone();
        }
        if let Some(output_path) = &cli.output_path {
            tracing::info!("🔧 Output path overridden to: {}", output_path);
            self.output.path = output_path.clone();
        }
        if let Some(pallets) = cli.pallets {
            tracing::info!("🔧 Pallet count overridden to: {}", pallets);
            self.plan.pallet_count = Some(pallets);
        }
        if let Some(formats) = &cli.formats {
            tracing::info!("🔧 Output formats overridden to: {}", formats.join(", "));
            self.output.formats = formats.clone();
        }
        if let Some(stem) = &cli.output_stem {
            tracing::info!("🔧 Output stem overridden to: {}", stem);
            self.output.stem = Some(stem.clone());
        }
        if let Some(lines) = cli.lines_per_page {
            tracing::info!("🔧 Lines per page overridden to: {}", lines);
            self.output.lines_per_page = Some(lines);
        }
        if cli.archive {
            self.output.archive = Some(true);
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("input.path", &self.input.path)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_output_formats("output.formats", &self.output.formats)?;

        if let Some(name) = &self.plan.name {
            validation::validate_non_empty_string("plan.name", name)?;
        }
        if let Some(stem) = &self.output.stem {
            validation::validate_non_empty_string("output.stem", stem)?;
        }
        if let Some(count) = self.plan.pallet_count {
            validation::validate_positive_number("plan.pallet_count", count, 1)?;
        }
        if let Some(lines) = self.output.lines_per_page {
            validation::validate_range(
                "output.lines_per_page",
                lines,
                MIN_LINES_PER_PAGE,
                MAX_LINES_PER_PAGE,
            )?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_stem(&self) -> &str {
        self.output.stem.as_deref().unwrap_or(DEFAULT_OUTPUT_STEM)
    }

    fn plan_name(&self) -> &str {
        self.plan.name.as_deref().unwrap_or(DEFAULT_PLAN_NAME)
    }

    fn pallet_count(&self) -> Option<usize> {
        self.plan.pallet_count
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn lines_per_page(&self) -> usize {
        self.output.lines_per_page.unwrap_or(DEFAULT_LINES_PER_PAGE)
    }

    fn archive(&self) -> bool {
        self.output.archive.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
