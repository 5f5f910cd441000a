use crate::domain::model::Panel;
use std::cmp::Ordering;

/// 比較兩個 f64；-0.0 與 0.0 視為相同，NaN 落到 total_cmp
pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// 疊放順序：曲率小的在下，其次面積大的在下，最後以 id 決定
pub fn stack_order(a: &Panel, b: &Panel) -> Ordering {
    cmp_f64(a.curvature_score(), b.curvature_score())
        .then_with(|| cmp_f64(b.area(), a.area()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Orders panels bottom-to-top: flattest first, larger area lower on ties, then by id.
///
/// Returns a new vector; the input is left untouched.
pub fn sort_for_stack(panels: &[Panel]) -> Vec<Panel> {
    let mut stack = panels.to_vec();
    stack.sort_by(stack_order);
    stack
}
