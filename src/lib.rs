pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{
    engine::PlanEngine,
    metrics::{compute_area, compute_curvature_score, RADIUS_FLOOR},
    pallet::{bucket_sizes, partition_into_pallets},
    pipeline::PlanningPipeline,
    stack::sort_for_stack,
};
pub use domain::model::{Panel, PanelDraft, PanelEdit, PanelField, PlanRow, StackPlan};
pub use domain::session::PanelSession;
pub use utils::error::{PlanError, Result};
