use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a rejected inventory operation
/// from a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the operation completed
    Success = 0,
    /// The backend rejected the operation or could not be reached
    OperationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config file, output file, client setup)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OperationFailed => write!(f, "Operation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for inventory operations.
///
/// `Transport` covers non-2xx statuses and network failures. `UnexpectedResponse`
/// is a successful response whose body has the wrong shape. Every other
/// backend-originated variant is a logical failure reported in a response body.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Request failed: {operation}\nDetails: {details}\n\n💡 Hint: Check that the inventory server is running and the base URL is correct")]
    Transport { operation: String, details: String },

    #[error("Unexpected response to {operation}\nDetails: {details}\n\n💡 Hint: The server answered in an unknown format; check that the base URL points at the inventory API and that client and server versions match")]
    UnexpectedResponse { operation: String, details: String },

    #[error("Server rejected {operation}: {message}")]
    Logical { operation: String, message: String },

    #[error("Could not interpret component description: \"{input}\"\nDetails: {message}\n\n💡 Hint: Try a description like \"10x 1k resistor 0805\"")]
    Parse { input: String, message: String },

    #[error("Failed to merge component {source_id} into {target_id}: {message}\n\n💡 Hint: Run `similar {source_id}` to list valid merge targets")]
    Merge {
        source_id: u64,
        target_id: u64,
        message: String,
    },

    #[error("Component {id} is not in the current view\n\n💡 Hint: Reload the list and check the id")]
    UnknownComponent { id: u64 },

    /// Validation error for client-side input checks
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl InventoryError {
    /// True for failures where no usable response body was received
    pub fn is_transport(&self) -> bool {
        matches!(self, InventoryError::Transport { .. })
    }

    /// True for failures the server reported inside a successful response
    pub fn is_logical(&self) -> bool {
        matches!(
            self,
            InventoryError::Logical { .. }
                | InventoryError::Parse { .. }
                | InventoryError::Merge { .. }
        )
    }
}
