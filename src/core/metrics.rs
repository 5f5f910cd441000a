use crate::domain::model::Panel;

/// 半徑為 0 時的下限，避免除以零
pub const RADIUS_FLOOR: f64 = 1e-6;

/// `length * width`，負值與 0 照常計算
pub fn compute_area(panel: &Panel) -> f64 {
    panel.length * panel.width
}

/// Dimensionless "bend per unit radius": `|angle| in radians / max(|radius|, RADIUS_FLOOR)`.
///
/// Larger means more curved. A proxy for ordering, not an engineering quantity.
pub fn compute_curvature_score(panel: &Panel) -> f64 {
    let sweep = panel.angle_deg.abs().to_radians();
    sweep / panel.radius.abs().max(RADIUS_FLOOR)
}
