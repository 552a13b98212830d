//! Classification of driver errors into the unified error system.

use eventide_core::error::{AppError, ErrorKind};
use mongodb::error::{ErrorKind as MongoErrorKind, WriteFailure};

/// Server error codes the store raises for malformed filters or sort
/// definitions.
const QUERY_ERROR_CODES: [i32; 5] = [
    2,     // BadValue
    14,    // TypeMismatch
    31,    // InvalidPath
    17287, // FailedToParse
    51091, // invalid regex
];

/// Duplicate-key error codes.
const DUPLICATE_KEY_CODES: [i32; 2] = [11000, 11001];

/// Map a driver error into an [`AppError`], preserving it as the source.
///
/// Errors are propagated to the caller unchanged in meaning: connectivity
/// problems surface as [`ErrorKind::Unavailable`], store-rejected queries
/// as [`ErrorKind::Query`], unique-index violations as
/// [`ErrorKind::Conflict`], and everything else as [`ErrorKind::Database`].
/// No retries happen at this layer.
pub(crate) fn map_store_error(err: mongodb::error::Error, context: &str) -> AppError {
    let kind = classify(&err);
    AppError::with_source(kind, format!("{context}: {err}"), err)
}

fn classify(err: &mongodb::error::Error) -> ErrorKind {
    match &*err.kind {
        MongoErrorKind::ServerSelection { .. }
        | MongoErrorKind::DnsResolve { .. }
        | MongoErrorKind::Io(_)
        | MongoErrorKind::ConnectionPoolCleared { .. } => ErrorKind::Unavailable,
        MongoErrorKind::Write(WriteFailure::WriteError(write_error))
            if DUPLICATE_KEY_CODES.contains(&write_error.code) =>
        {
            ErrorKind::Conflict
        }
        MongoErrorKind::Command(command_error)
            if DUPLICATE_KEY_CODES.contains(&command_error.code) =>
        {
            ErrorKind::Conflict
        }
        MongoErrorKind::Command(command_error)
            if QUERY_ERROR_CODES.contains(&command_error.code) =>
        {
            ErrorKind::Query
        }
        MongoErrorKind::InvalidArgument { .. } => ErrorKind::Query,
        MongoErrorKind::BsonSerialization(_) | MongoErrorKind::BsonDeserialization(_) => {
            ErrorKind::Serialization
        }
        _ => ErrorKind::Database,
    }
}
