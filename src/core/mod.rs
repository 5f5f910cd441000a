pub mod engine;
pub mod metrics;
pub mod pallet;
pub mod pipeline;
pub mod stack;

pub use crate::domain::model::{Panel, PlanOutput, PlanRow, StackPlan};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
