use crate::domain::model::PanelDraft;
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord, Trim};

/// 數值欄位轉換：空白、無法解析或非有限值一律為 0
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// 試算表貼上的資料通常以 tab 分隔；標籤內可能帶逗號，所以比較兩者數量
fn detect_delimiter(text: &str) -> u8 {
    let first_line = text.lines().find(|line| !line.trim().is_empty());
    match first_line {
        Some(line) if line.matches('\t').count() > line.matches(',').count() => b'\t',
        _ => b',',
    }
}

fn is_header(record: &StringRecord) -> bool {
    record
        .get(0)
        .map(|field| field.trim().eq_ignore_ascii_case("label"))
        .unwrap_or(false)
}

/// Parses pasted or file CSV text into panel drafts.
///
/// Columns are `label,length,width,radius,angleDeg`. A leading header row is skipped,
/// blank rows are ignored, and short rows are padded with zeros. A row without a label
/// is named after its 1-based data row, so blank rows still count toward the number.
/// Fully empty lines are not records and do not count.
pub fn parse_panels(text: &str) -> Result<Vec<PanelDraft>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(detect_delimiter(text))
        .from_reader(text.as_bytes());

    let mut drafts = Vec::new();
    let mut data_row = 0usize;
    for (index, record) in reader.records().enumerate() {
        let record = record?;

        if index == 0 && is_header(&record) {
            tracing::debug!("Skipping CSV header row");
            continue;
        }
        data_row += 1;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let field = |i: usize| record.get(i).unwrap_or("");
        let label = match field(0) {
            "" => format!("Panel {}", data_row),
            label => label.to_string(),
        };

        drafts.push(PanelDraft {
            label,
            length: coerce_number(field(1)),
            width: coerce_number(field(2)),
            radius: coerce_number(field(3)),
            angle_deg: coerce_number(field(4)),
        });
    }

    tracing::debug!("Parsed {} panel rows", drafts.len());
    Ok(drafts)
}
