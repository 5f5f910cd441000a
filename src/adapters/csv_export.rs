use crate::domain::model::{PlanRow, StackPlan};
use crate::utils::error::{PlanError, Result};
use csv::WriterBuilder;

pub const STACK_HEADER: [&str; 8] = [
    "stackPosition",
    "label",
    "length",
    "width",
    "radius",
    "angleDeg",
    "area",
    "curvatureScore",
];

/// 依棧板順序攤平；每個棧板的位置從 1 (最底層) 重新起算
pub fn plan_rows(plan: &StackPlan) -> Vec<PlanRow> {
    match plan {
        StackPlan::Single(stack) => stack
            .iter()
            .enumerate()
            .map(|(i, panel)| PlanRow::new(None, i + 1, panel))
            .collect(),
        StackPlan::Pallets(pallets) => pallets
            .iter()
            .enumerate()
            .flat_map(|(p, pallet)| {
                pallet
                    .iter()
                    .enumerate()
                    .map(move |(i, panel)| PlanRow::new(Some(p + 1), i + 1, panel))
            })
            .collect(),
    }
}

pub fn format_area(area: f64) -> String {
    format!("{:.2}", area)
}

pub fn format_curvature(score: f64) -> String {
    format!("{:.5}", score)
}

fn row_fields(row: &PlanRow) -> Vec<String> {
    let mut fields = Vec::with_capacity(9);
    if let Some(pallet) = row.pallet {
        fields.push(pallet.to_string());
    }
    fields.push(row.stack_position.to_string());
    fields.push(row.label.clone());
    fields.push(row.length.to_string());
    fields.push(row.width.to_string());
    fields.push(row.radius.to_string());
    fields.push(row.angle_deg.to_string());
    fields.push(format_area(row.area));
    fields.push(format_curvature(row.curvature_score));
    fields
}

/// Renders plan rows as CSV. Pallet plans get a leading `pallet` column.
pub fn render_csv(rows: &[PlanRow], palletized: bool) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    if palletized {
        let mut header = vec!["pallet"];
        header.extend_from_slice(&STACK_HEADER);
        writer.write_record(&header)?;
    } else {
        writer.write_record(STACK_HEADER)?;
    }

    for row in rows {
        writer.write_record(row_fields(row))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PlanError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Panel, PanelDraft};

    fn panel(id: u64, label: &str, length: f64, width: f64, angle_deg: f64) -> Panel {
        Panel::from_draft(id, PanelDraft::new(label, length, width, 91.0, angle_deg))
    }

    #[test]
    fn test_single_stack_csv() {
        let plan = StackPlan::Single(vec![
            panel(1, "A", 127.0, 24.0, 30.0),
            panel(2, "B", 127.0, 20.0, 45.0),
        ]);
        let csv = render_csv(&plan_rows(&plan), false).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "stackPosition,label,length,width,radius,angleDeg,area,curvatureScore"
        );
        assert_eq!(lines[1], "1,A,127,24,91,30,3048.00,0.00575");
        assert_eq!(lines[2], "2,B,127,20,91,45,2540.00,0.00863");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_pallet_csv_restarts_positions() {
        let plan = StackPlan::Pallets(vec![
            vec![panel(1, "A", 127.0, 24.0, 30.0), panel(2, "B", 127.0, 20.0, 45.0)],
            vec![panel(3, "C", 96.5, 24.0, 30.0)],
        ]);
        let rows = plan_rows(&plan);
        assert_eq!(rows[2].pallet, Some(2));
        assert_eq!(rows[2].stack_position, 1);

        let csv = render_csv(&rows, true).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[0].starts_with("pallet,stackPosition,label"));
        assert_eq!(lines[3], "2,1,C,96.5,24,91,30,2316.00,0.00575");
    }

    #[test]
    fn test_label_with_comma_is_quoted() {
        let plan = StackPlan::Single(vec![panel(1, "Arch, north", 10.0, 2.0, 0.0)]);
        let csv = render_csv(&plan_rows(&plan), false).unwrap();
        assert!(csv.contains("\"Arch, north\""));
        assert!(csv.contains(",20.00,0.00000"));
    }

    #[test]
    fn test_empty_plan_has_header_only() {
        let csv = render_csv(&plan_rows(&StackPlan::Pallets(vec![])), true).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
