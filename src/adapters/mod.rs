// Adapters layer: text formats around the pure core (CSV import, CSV export, text report).

pub mod csv_export;
pub mod csv_import;
pub mod report;
