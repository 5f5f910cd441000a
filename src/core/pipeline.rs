use crate::adapters::csv_export::{plan_rows, render_csv};
use crate::adapters::report::{render_report, ReportOptions};
use crate::core::{pallet::partition_into_pallets, stack::sort_for_stack};
use crate::core::{ConfigProvider, Panel, Pipeline, PlanOutput, StackPlan, Storage};
use crate::domain::session::PanelSession;
use crate::utils::error::Result;
use chrono::Utc;
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

/// 讀取板材 CSV、計算疊放計畫、輸出 CSV/JSON/報表
pub struct PlanningPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PlanningPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn wants(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    pub fn build_plan(&self, panels: &[Panel]) -> StackPlan {
        match self.config.pallet_count() {
            None => StackPlan::Single(sort_for_stack(panels)),
            Some(count) => StackPlan::Pallets(partition_into_pallets(panels, count)),
        }
    }
}

/// 依輸出格式產生 (檔名, 內容)
pub fn rendered_files<'a>(output: &'a PlanOutput, stem: &str) -> Vec<(String, &'a str)> {
    let mut files = Vec::new();
    if let Some(csv) = &output.csv_output {
        files.push((format!("{}.csv", stem), csv.as_str()));
    }
    if let Some(json) = &output.json_output {
        files.push((format!("{}.json", stem), json.as_str()));
    }
    if let Some(report) = &output.report_output {
        files.push((format!("{}.txt", stem), report.as_str()));
    }
    files
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PlanningPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Panel>> {
        tracing::debug!("Reading panels from: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;
        let text = String::from_utf8_lossy(&bytes);

        let mut session = PanelSession::new();
        session.import_csv(&text)?;

        if session.is_empty() {
            tracing::warn!("⚠️ No panels found in {}", self.config.input_path());
        }

        Ok(session.panels().to_vec())
    }

    async fn transform(&self, panels: Vec<Panel>) -> Result<PlanOutput> {
        let plan = self.build_plan(&panels);
        let rows = plan_rows(&plan);

        if let Some(requested) = self.config.pallet_count() {
            if plan.pallet_count() < requested {
                tracing::warn!(
                    "⚠️ Only {} of {} pallets used ({} panels)",
                    plan.pallet_count(),
                    requested,
                    panels.len()
                );
            }
        }

        let csv_output = if self.wants("csv") {
            Some(render_csv(&rows, plan.is_palletized())?)
        } else {
            None
        };

        let json_output = if self.wants("json") {
            Some(serde_json::to_string_pretty(&rows)?)
        } else {
            None
        };

        let report_output = if self.wants("txt") {
            let options = ReportOptions {
                title: self.config.plan_name().to_string(),
                lines_per_page: self.config.lines_per_page(),
            };
            Some(render_report(&plan, &options, Utc::now()))
        } else {
            None
        };

        Ok(PlanOutput {
            plan,
            rows,
            csv_output,
            json_output,
            report_output,
        })
    }

    async fn load(&self, output: PlanOutput) -> Result<String> {
        let stem = self.config.output_stem();
        let files = rendered_files(&output, stem);

        if self.config.archive() {
            let archive_name = format!("{}.zip", stem);
            tracing::debug!("Creating ZIP file with {} files", files.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, content) in &files {
                    zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
                    zip.write_all(content.as_bytes())?;
                }
                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            let archive_path = self.output_file(&archive_name);
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(&archive_path, &zip_data).await?;
            return Ok(archive_path);
        }

        for (name, content) in &files {
            let path = self.output_file(name);
            tracing::debug!("Writing {}", path);
            self.storage.write_file(&path, content.as_bytes()).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
