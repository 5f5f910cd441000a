use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Panel {id} not found")]
    PanelNotFound { id: u64 },

    #[error("Unknown panel field: {name}")]
    UnknownField { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanError::ConfigValidationError { .. }
            | PlanError::InvalidConfigValueError { .. }
            | PlanError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PlanError::CsvError(_) => ErrorCategory::Input,
            PlanError::IoError(_) | PlanError::ZipError(_) | PlanError::SerializationError(_) => {
                ErrorCategory::Output
            }
            PlanError::PanelNotFound { .. } | PlanError::UnknownField { .. } => {
                ErrorCategory::Session
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlanError::PanelNotFound { .. } | PlanError::UnknownField { .. } => {
                ErrorSeverity::Low
            }
            // 檔案可能暫時被鎖定，重試即可
            PlanError::IoError(_) => ErrorSeverity::Medium,
            PlanError::CsvError(_)
            | PlanError::ConfigValidationError { .. }
            | PlanError::InvalidConfigValueError { .. }
            | PlanError::MissingConfigError { .. } => ErrorSeverity::High,
            PlanError::ZipError(_) | PlanError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlanError::CsvError(_) => {
                "Check the panel CSV: columns are label,length,width,radius,angleDeg and quotes must be balanced".to_string()
            }
            PlanError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            PlanError::ZipError(_) => "Disable --archive or free up disk space".to_string(),
            PlanError::SerializationError(_) => "Try exporting without the json format".to_string(),
            PlanError::ConfigValidationError { field, .. }
            | PlanError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in your config file or command line", field)
            }
            PlanError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            PlanError::PanelNotFound { .. } => {
                "Refresh the panel list; the panel may have been removed".to_string()
            }
            PlanError::UnknownField { .. } => {
                "Use one of: label, length, width, radius, angleDeg".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not read panel data: {}", self),
            ErrorCategory::Output => format!("Could not write the stacking plan: {}", self),
            ErrorCategory::Session => format!("Panel edit rejected: {}", self),
        }
    }

    /// 依嚴重程度對應的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
