use crate::domain::model::{Panel, PlanOutput};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_stem(&self) -> &str;
    fn plan_name(&self) -> &str;
    /// `None` 表示不分棧板，輸出單一堆疊
    fn pallet_count(&self) -> Option<usize>;
    fn output_formats(&self) -> &[String];
    fn lines_per_page(&self) -> usize;
    fn archive(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Panel>>;
    async fn transform(&self, panels: Vec<Panel>) -> Result<PlanOutput>;
    async fn load(&self, output: PlanOutput) -> Result<String>;
}
