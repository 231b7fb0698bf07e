//! Error type shared across the pipeline.
//!
//! Generation is a pure function of caller-supplied parameters and a seed,
//! so every failure is either a bad parameter or an I/O problem. There is no
//! retry logic; errors surface immediately and map to a process exit code.

/// Classification of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad run-level parameters (periods, window, duplicate channels).
    InvalidConfiguration,
    /// One channel's parameters are outside their domain.
    InvalidChannelSpec,
    /// A generated series is unusable (e.g. identically-zero raw spend).
    DegenerateInput,
    /// Filesystem/serialization failure on export.
    Io,
}

impl ErrorKind {
    /// Process exit code for this failure class.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidConfiguration | ErrorKind::InvalidChannelSpec => 2,
            ErrorKind::Io => 3,
            ErrorKind::DegenerateInput => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfiguration, message)
    }

    pub fn invalid_channel_spec(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidChannelSpec, message)
    }

    pub fn degenerate_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DegenerateInput, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
