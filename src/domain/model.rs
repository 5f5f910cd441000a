use crate::core::metrics::{compute_area, compute_curvature_score};
use crate::utils::error::{PlanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 一片彎曲板材。進入核心計算後視為不可變。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: u64,
    pub label: String,
    pub length: f64,
    pub width: f64,
    pub radius: f64,
    #[serde(rename = "angleDeg")]
    pub angle_deg: f64,
}

impl Panel {
    pub fn from_draft(id: u64, draft: PanelDraft) -> Self {
        Self {
            id,
            label: draft.label,
            length: draft.length,
            width: draft.width,
            radius: draft.radius,
            angle_deg: draft.angle_deg,
        }
    }

    pub fn area(&self) -> f64 {
        compute_area(self)
    }

    pub fn curvature_score(&self) -> f64 {
        compute_curvature_score(self)
    }
}

/// 尚未分配 id 的板材 (匯入或表單輸入的結果)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelDraft {
    pub label: String,
    pub length: f64,
    pub width: f64,
    pub radius: f64,
    pub angle_deg: f64,
}

impl PanelDraft {
    pub fn new(label: impl Into<String>, length: f64, width: f64, radius: f64, angle_deg: f64) -> Self {
        Self {
            label: label.into(),
            length,
            width,
            radius,
            angle_deg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelField {
    Label,
    Length,
    Width,
    Radius,
    AngleDeg,
}

impl PanelField {
    pub const ALL: [PanelField; 5] = [
        PanelField::Label,
        PanelField::Length,
        PanelField::Width,
        PanelField::Radius,
        PanelField::AngleDeg,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PanelField::Label => "label",
            PanelField::Length => "length",
            PanelField::Width => "width",
            PanelField::Radius => "radius",
            PanelField::AngleDeg => "angleDeg",
        }
    }
}

impl fmt::Display for PanelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelField {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "label" => Ok(PanelField::Label),
            "length" => Ok(PanelField::Length),
            "width" => Ok(PanelField::Width),
            "radius" => Ok(PanelField::Radius),
            "angledeg" | "angle_deg" => Ok(PanelField::AngleDeg),
            _ => Err(PlanError::UnknownField {
                name: s.to_string(),
            }),
        }
    }
}

/// 單一欄位的編輯，取代以欄位名稱動態存取
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEdit {
    Label(String),
    Length(f64),
    Width(f64),
    Radius(f64),
    AngleDeg(f64),
}

impl PanelEdit {
    /// 將表單輸入的原始文字轉成編輯；數值欄位無法解析時視為 0
    pub fn parse(field: PanelField, raw: &str) -> Self {
        use crate::adapters::csv_import::coerce_number;

        match field {
            PanelField::Label => PanelEdit::Label(raw.to_string()),
            PanelField::Length => PanelEdit::Length(coerce_number(raw)),
            PanelField::Width => PanelEdit::Width(coerce_number(raw)),
            PanelField::Radius => PanelEdit::Radius(coerce_number(raw)),
            PanelField::AngleDeg => PanelEdit::AngleDeg(coerce_number(raw)),
        }
    }

    pub fn field(&self) -> PanelField {
        match self {
            PanelEdit::Label(_) => PanelField::Label,
            PanelEdit::Length(_) => PanelField::Length,
            PanelEdit::Width(_) => PanelField::Width,
            PanelEdit::Radius(_) => PanelField::Radius,
            PanelEdit::AngleDeg(_) => PanelField::AngleDeg,
        }
    }

    pub fn apply_to(self, panel: &mut Panel) {
        match self {
            PanelEdit::Label(label) => panel.label = label,
            PanelEdit::Length(v) => panel.length = v,
            PanelEdit::Width(v) => panel.width = v,
            PanelEdit::Radius(v) => panel.radius = v,
            PanelEdit::AngleDeg(v) => panel.angle_deg = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StackPlan {
    Single(Vec<Panel>),
    Pallets(Vec<Vec<Panel>>),
}

impl StackPlan {
    pub fn panel_count(&self) -> usize {
        match self {
            StackPlan::Single(stack) => stack.len(),
            StackPlan::Pallets(pallets) => pallets.iter().map(Vec::len).sum(),
        }
    }

    pub fn pallet_count(&self) -> usize {
        match self {
            StackPlan::Single(stack) => usize::from(!stack.is_empty()),
            StackPlan::Pallets(pallets) => pallets.len(),
        }
    }

    pub fn is_palletized(&self) -> bool {
        matches!(self, StackPlan::Pallets(_))
    }
}

/// 匯出用的一列：位置 1 為最底層
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pallet: Option<usize>,
    #[serde(rename = "stackPosition")]
    pub stack_position: usize,
    pub label: String,
    pub length: f64,
    pub width: f64,
    pub radius: f64,
    #[serde(rename = "angleDeg")]
    pub angle_deg: f64,
    pub area: f64,
    #[serde(rename = "curvatureScore")]
    pub curvature_score: f64,
}

impl PlanRow {
    pub fn new(pallet: Option<usize>, stack_position: usize, panel: &Panel) -> Self {
        Self {
            pallet,
            stack_position,
            label: panel.label.clone(),
            length: panel.length,
            width: panel.width,
            radius: panel.radius,
            angle_deg: panel.angle_deg,
            area: panel.area(),
            curvature_score: panel.curvature_score(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanOutput {
    pub plan: StackPlan,
    pub rows: Vec<PlanRow>,
    pub csv_output: Option<String>,
    pub json_output: Option<String>,
    pub report_output: Option<String>,
}
