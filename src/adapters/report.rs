use crate::adapters::csv_export::{format_area, format_curvature};
use crate::domain::model::{Panel, PlanRow, StackPlan};
use chrono::{DateTime, SecondsFormat, Utc};

pub const DEFAULT_LINES_PER_PAGE: usize = 50;
pub const MIN_LINES_PER_PAGE: usize = 10;

const LABEL_WIDTH: usize = 20;
const PAGE_BREAK: char = '\x0c';

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub lines_per_page: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Panel Stacking Plan".to_string(),
            lines_per_page: DEFAULT_LINES_PER_PAGE,
        }
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= LABEL_WIDTH {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(LABEL_WIDTH - 1).collect();
        short.push('~');
        short
    }
}

fn table_header() -> [String; 2] {
    let header = format!(
        "{:>4}  {:<20} {:>9} {:>9} {:>9} {:>9} {:>12} {:>10}",
        "Pos", "Label", "Length", "Width", "Radius", "Angle", "Area", "Curvature"
    );
    let rule = "-".repeat(header.len());
    [header, rule]
}

fn table_row(row: &PlanRow) -> String {
    format!(
        "{:>4}  {:<20} {:>9} {:>9} {:>9} {:>9} {:>12} {:>10}",
        row.stack_position,
        truncate_label(&row.label),
        row.length,
        row.width,
        row.radius,
        row.angle_deg,
        format_area(row.area),
        format_curvature(row.curvature_score),
    )
}

fn group_lines(heading: String, pallet: Option<usize>, panels: &[Panel], lines: &mut Vec<String>) {
    lines.push(heading);
    lines.extend(table_header());
    for (i, panel) in panels.iter().enumerate() {
        lines.push(table_row(&PlanRow::new(pallet, i + 1, panel)));
    }
    lines.push(String::new());
}

fn body_lines(plan: &StackPlan, options: &ReportOptions, generated_at: DateTime<Utc>) -> Vec<String> {
    let mut lines = vec![
        options.title.clone(),
        format!(
            "Generated: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        format!(
            "Panels: {}  Pallets: {}",
            plan.panel_count(),
            plan.pallet_count()
        ),
        "Position 1 is the bottom of the stack.".to_string(),
        String::new(),
    ];

    if plan.panel_count() == 0 {
        lines.push("No panels.".to_string());
        return lines;
    }

    match plan {
        StackPlan::Single(stack) => {
            group_lines(format!("Stack ({} panels)", stack.len()), None, stack, &mut lines);
        }
        StackPlan::Pallets(pallets) => {
            for (p, pallet) in pallets.iter().enumerate() {
                group_lines(
                    format!("Pallet {} ({} panels)", p + 1, pallet.len()),
                    Some(p + 1),
                    pallet,
                    &mut lines,
                );
            }
        }
    }

    lines
}

/// Renders a paginated plain-text report.
///
/// Every page holds at most `lines_per_page` lines including its `Page i of n` footer;
/// pages are separated by a form feed.
pub fn render_report(plan: &StackPlan, options: &ReportOptions, generated_at: DateTime<Utc>) -> String {
    let lines_per_page = options.lines_per_page.max(MIN_LINES_PER_PAGE);
    // 頁尾佔兩行：空行與頁碼
    let content_per_page = lines_per_page - 2;

    let lines = body_lines(plan, options, generated_at);
    let chunks: Vec<&[String]> = lines.chunks(content_per_page).collect();
    let total = chunks.len();

    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut page = chunk.join("\n");
            page.push_str(&format!("\n\nPage {} of {}\n", i + 1, total));
            page
        })
        .collect::<Vec<_>>()
        .join(&PAGE_BREAK.to_string())
}
