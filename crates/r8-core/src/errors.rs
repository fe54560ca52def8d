use r8_core_types::RequestId;
use thiserror::Error;

/// Result type alias using R8Error
pub type Result<T> = std::result::Result<T, R8Error>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable `ERR_*` code used by the CLI, by log lines
/// and by callers that branch on failures programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Input collection is unusable as a whole (e.g. empty)
    InvalidInput,
    /// A required argument or reference is absent
    InvalidArgument,
    /// A single element could not be parsed
    ParseError,
    /// A value does not fit the numeric range the operation supports
    NumericOverflow,

    // Integration/IO
    Config,
    Io,
    Serialization,

    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::ParseError => "ERR_PARSE",
            ExErrorKind::NumericOverflow => "ERR_NUMERIC_OVERFLOW",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context the failing operation
/// could attach: the operation name, the offending field or value, and the
/// request it ran under.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field: Option<String>,
    value: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field: None,
            value: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Name the field (config key, record column) the error is about
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach the raw value that was rejected
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(value) = &self.value {
            write!(f, " (value: {:?})", value)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the R8 operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum R8Error {
    // ===== Phone grouping =====
    /// Nothing to group
    #[error("Phone number list is empty")]
    EmptyPhoneList,

    /// Element carries no digit at all
    #[error("Phone number contains no digits: {value:?}")]
    NoDigits { value: String },

    /// Digits do not fit an unsigned 64-bit integer
    #[error("Phone number does not fit in 64 bits: {value:?}")]
    NumberOverflow { value: String },

    // ===== Audit =====
    /// Entry has no row reference to attach an audit record to
    #[error("Entry has no row reference")]
    MissingRowReference,

    // ===== Humanize =====
    /// Amount has more three-digit groups than there are unit words
    #[error("Amount {value} needs {groups} unit groups but only {available} are configured")]
    UnitsExhausted {
        value: u64,
        groups: usize,
        available: usize,
    },

    /// Ceiling does not fit in i32
    #[error("Cannot round {value} into a 32-bit integer")]
    RoundingOverflow { value: f64 },

    // ===== Generic Errors =====
    /// Configuration file is not valid
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Filesystem access failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from R8Error to ExError
impl From<R8Error> for ExError {
    fn from(err: R8Error) -> Self {
        match err {
            R8Error::EmptyPhoneList => ExError::new(ExErrorKind::InvalidInput)
                .with_op("group_phone_numbers")
                .with_message("Phone number list is empty"),

            R8Error::NoDigits { value } => ExError::new(ExErrorKind::ParseError)
                .with_op("group_phone_numbers")
                .with_value(value)
                .with_message("Phone number contains no digits"),

            R8Error::NumberOverflow { value } => ExError::new(ExErrorKind::NumericOverflow)
                .with_op("group_phone_numbers")
                .with_value(value)
                .with_message("Phone number does not fit in 64 bits"),

            R8Error::MissingRowReference => ExError::new(ExErrorKind::InvalidArgument)
                .with_op("generate_audit")
                .with_field("row_id")
                .with_message("Entry has no row reference"),

            R8Error::UnitsExhausted {
                value,
                groups,
                available,
            } => ExError::new(ExErrorKind::NumericOverflow)
                .with_op("currency_words")
                .with_value(value.to_string())
                .with_message(format!(
                    "{} unit groups needed, {} configured",
                    groups, available
                )),

            R8Error::RoundingOverflow { value } => ExError::new(ExErrorKind::NumericOverflow)
                .with_op("round_up")
                .with_value(value.to_string())
                .with_message("Ceiling does not fit in i32"),

            R8Error::InvalidConfig { reason } => ExError::new(ExErrorKind::Config)
                .with_message(format!("Invalid configuration: {}", reason)),

            R8Error::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_value(path)
                .with_message(message),

            R8Error::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            R8Error::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to R8Error
impl From<serde_json::Error> for R8Error {
    fn from(err: serde_json::Error) -> Self {
        R8Error::Serialization {
            message: err.to_string(),
        }
    }
}

/// I/O failures without a known path (e.g. stdout)
impl From<std::io::Error> for R8Error {
    fn from(err: std::io::Error) -> Self {
        R8Error::Io {
            path: String::new(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for R8Error {
    fn from(err: toml::de::Error) -> Self {
        R8Error::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
