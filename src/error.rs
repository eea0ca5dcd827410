//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: godeps.json loading, validation and persistence
//! - ScanError: walking the project and parsing import declarations
//! - ResolveError: reading git metadata while resolving origins
//! - SyncError: cloning / pulling vendored packages
//! - ConfigError: environment and package-setting problems
//!
//! Every error maps onto one [`ErrorKind`] so callers can react to the
//! category without matching every variant.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse error category shared by all error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or empty required input
    InvalidParameter,
    /// Referenced file or path is absent
    NotExist,
    /// Uniqueness violation
    AlreadyExists,
    /// Malformed JSON or Go import syntax
    ParseError,
    /// A package could not be mapped to an origin
    ResolutionFailure,
    /// A git command failed
    ExecutionError,
    /// Underlying file system failure
    Io,
}

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Import scanning errors
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Origin resolution errors
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Vendor synchronisation errors
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Returns the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Manifest(e) => e.kind(),
            AppError::Scan(e) => e.kind(),
            AppError::Resolve(e) => e.kind(),
            AppError::Sync(e) => e.kind(),
            AppError::Config(e) => e.kind(),
        }
    }
}

/// Errors related to the dependency manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// A required value was missing or empty
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The path or origin is already recorded
    #[error("the {field} {value} already exists")]
    AlreadyExists { field: &'static str, value: String },

    /// The referenced dependency path is not in the manifest
    #[error("the path {path} does not exist in the manifest")]
    PathNotFound { path: String },

    /// Failed to read the manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest content is not a valid dependency list
    #[error("failed to parse JSON in {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

impl ManifestError {
    /// Creates a new InvalidParameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        ManifestError::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a new AlreadyExists error for a duplicated path
    pub fn path_exists(path: impl Into<String>) -> Self {
        ManifestError::AlreadyExists {
            field: "path",
            value: path.into(),
        }
    }

    /// Creates a new AlreadyExists error for a duplicated origin
    pub fn origin_exists(origin: impl Into<String>) -> Self {
        ManifestError::AlreadyExists {
            field: "origin",
            value: origin.into(),
        }
    }

    /// Creates a new PathNotFound error
    pub fn path_not_found(path: impl Into<String>) -> Self {
        ManifestError::PathNotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ManifestError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            ManifestError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            ManifestError::PathNotFound { .. } => ErrorKind::NotExist,
            ManifestError::ReadError { .. } | ManifestError::WriteError { .. } => ErrorKind::Io,
            ManifestError::ParseError { .. } => ErrorKind::ParseError,
        }
    }
}

/// Errors raised while scanning a project for imports
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scanned directory is not below a `src` directory
    #[error("invalid path {path}: not inside a src folder")]
    OutsideSourceTree { path: PathBuf },

    /// A Go file has malformed import declarations
    #[error("failed to parse {path}:{line}: {message}")]
    ParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Creates a new OutsideSourceTree error
    pub fn outside_source_tree(path: impl Into<PathBuf>) -> Self {
        ScanError::OutsideSourceTree { path: path.into() }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        ScanError::ParseError {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Creates a new IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::OutsideSourceTree { .. } => ErrorKind::InvalidParameter,
            ScanError::ParseError { .. } => ErrorKind::ParseError,
            ScanError::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Errors raised while resolving package origins
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The git config has no `url = ...` line
    #[error("no remote url found in {path}")]
    OriginNotFound { path: PathBuf },

    /// No search root holds git metadata for the package
    #[error("failed to find git path for package: {package}")]
    Unresolved { package: String },

    /// Failed to read a git config file
    #[error("failed to read git config {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// Creates a new OriginNotFound error
    pub fn origin_not_found(path: impl Into<PathBuf>) -> Self {
        ResolveError::OriginNotFound { path: path.into() }
    }

    /// Creates a new Unresolved error
    pub fn unresolved(package: impl Into<String>) -> Self {
        ResolveError::Unresolved {
            package: package.into(),
        }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResolveError::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::OriginNotFound { .. } => ErrorKind::NotExist,
            ResolveError::Unresolved { .. } => ErrorKind::ResolutionFailure,
            ResolveError::ReadError { .. } => ErrorKind::Io,
        }
    }
}

/// Errors raised while syncing vendored packages
#[derive(Error, Debug)]
pub enum SyncError {
    /// The command could not be started
    #[error("failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command exited unsuccessfully
    #[error("`{command}` failed ({status}): {output}")]
    Execution {
        command: String,
        status: String,
        output: String,
    },

    /// Failed to create the vendor parent directory
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        SyncError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new Execution error
    pub fn execution(
        command: impl Into<String>,
        status: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        SyncError::Execution {
            command: command.into(),
            status: status.into(),
            output: output.into(),
        }
    }

    /// Creates a new CreateDir error
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::CreateDir {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::Spawn { .. } | SyncError::Execution { .. } => ErrorKind::ExecutionError,
            SyncError::CreateDir { .. } => ErrorKind::Io,
        }
    }
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// GOROOT is not set
    #[error("the GOROOT env is not specified")]
    MissingGoRoot,

    /// The GOROOT source directory could not be listed
    #[error("failed to list go root {path}: {source}")]
    GoRootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package-setting file does not exist
    #[error("the package setting file {path} does not exist")]
    SettingNotFound { path: PathBuf },

    /// Failed to read the package-setting file
    #[error("failed to read package setting file {path}: {source}")]
    SettingReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package-setting file is not valid JSON
    #[error("failed to parse package setting file {path}: {message}")]
    SettingParseError { path: PathBuf, message: String },

    /// The working directory could not be determined
    #[error("failed to get the working directory: {source}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MissingGoRoot => ErrorKind::InvalidParameter,
            ConfigError::SettingNotFound { .. } => ErrorKind::NotExist,
            ConfigError::SettingParseError { .. } => ErrorKind::ParseError,
            ConfigError::GoRootUnreadable { .. }
            | ConfigError::SettingReadError { .. }
            | ConfigError::WorkingDir { .. } => ErrorKind::Io,
        }
    }
}
