use serde::Serialize;

/// Flat per-entry row for export files.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub time: String,
    pub duty_status: String,
    pub location: String,
    pub remarks: String,
}
