use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct PlanEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PlanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting stacking plan...");

        tracing::info!("📥 Reading panels...");
        let panels = self.pipeline.extract().await?;
        tracing::info!("Read {} panels", panels.len());

        tracing::info!("🧮 Computing plan...");
        let output = self.pipeline.transform(panels).await?;
        tracing::info!(
            "Planned {} panels on {} pallet(s)",
            output.plan.panel_count(),
            output.plan.pallet_count()
        );

        tracing::info!("💾 Writing outputs...");
        let output_path = self.pipeline.load(output).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
