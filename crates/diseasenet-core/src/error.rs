use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown report format: {0} (expected \"pdf\" or \"docx\")")]
    InvalidReportFormat(String),
}
