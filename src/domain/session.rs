use crate::adapters::csv_import::parse_panels;
use crate::core::{pallet::partition_into_pallets, stack::sort_for_stack};
use crate::domain::model::{Panel, PanelDraft, PanelEdit, StackPlan};
use crate::utils::error::{PlanError, Result};

/// 一次規劃作業中的板材清單與 id 計數器。
///
/// 核心計算不持有狀態；所有變動都經過這個容器。
#[derive(Debug, Clone)]
pub struct PanelSession {
    panels: Vec<Panel>,
    next_id: u64,
}

impl Default for PanelSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSession {
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            next_id: 1,
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn add(&mut self, draft: PanelDraft) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.panels.push(Panel::from_draft(id, draft));
        id
    }

    pub fn extend(&mut self, drafts: impl IntoIterator<Item = PanelDraft>) -> Vec<u64> {
        drafts.into_iter().map(|draft| self.add(draft)).collect()
    }

    /// 移除後 id 不會再被使用
    pub fn remove(&mut self, id: u64) -> Option<Panel> {
        let index = self.panels.iter().position(|p| p.id == id)?;
        Some(self.panels.remove(index))
    }

    pub fn apply(&mut self, id: u64, edit: PanelEdit) -> Result<()> {
        let panel = self
            .panels
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PlanError::PanelNotFound { id })?;

        tracing::debug!("Panel {} {} updated", id, edit.field());
        edit.apply_to(panel);
        Ok(())
    }

    /// 貼上的 CSV 文字附加到清單尾端
    pub fn import_csv(&mut self, text: &str) -> Result<Vec<u64>> {
        let drafts = parse_panels(text)?;
        let ids = self.extend(drafts);
        tracing::debug!("Imported {} panels", ids.len());
        Ok(ids)
    }

    pub fn clear(&mut self) {
        self.panels.clear();
    }

    /// `None` 產生單一堆疊，`Some(n)` 分成 n 個棧板
    pub fn plan(&self, pallet_count: Option<usize>) -> StackPlan {
        match pallet_count {
            None => StackPlan::Single(sort_for_stack(&self.panels)),
            Some(count) => StackPlan::Pallets(partition_into_pallets(&self.panels, count)),
        }
    }
}
