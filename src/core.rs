use std::collections::TryReserveError;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, FsError>;

/// Filesystem failure categories.
///
/// Every fallible helper reports one of these. Platform errors are translated
/// at the point of failure; anything without a mapping becomes [`FsError::Unknown`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FsError {
    Io,
    NotFound,
    AlreadyExists,
    NotADirectory,
    IsADirectory,
    NotEmpty,
    BadDescriptor,
    FileTooLarge,
    InvalidArgument,
    NoSpace,
    OutOfMemory,
    Unknown,
}

// POSIX values shared by Linux, the BSDs and macOS.
#[cfg(unix)]
const EIO: i32 = 5;
#[cfg(unix)]
const EBADF: i32 = 9;

impl FsError {
    /// Codes `io::ErrorKind` has no stable variant for.
    #[cfg(unix)]
    fn from_raw(code: i32) -> Option<FsError> {
        match code {
            EIO => Some(FsError::Io),
            EBADF => Some(FsError::BadDescriptor),
            _ => None,
        }
    }

    #[cfg(not(unix))]
    fn from_raw(_code: i32) -> Option<FsError> {
        None
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FsError::Io => "I/O error",
            FsError::NotFound => "no such file or directory",
            FsError::AlreadyExists => "file exists",
            FsError::NotADirectory => "not a directory",
            FsError::IsADirectory => "is a directory",
            FsError::NotEmpty => "directory not empty",
            FsError::BadDescriptor => "bad file descriptor",
            FsError::FileTooLarge => "file too large",
            FsError::InvalidArgument => "invalid argument",
            FsError::NoSpace => "no space left on device",
            FsError::OutOfMemory => "out of memory",
            FsError::Unknown => "unknown error",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for FsError {}

impl From<io::Error> for FsError {
    fn from(err: io::Error) -> Self {
        if let Some(mapped) = err.raw_os_error().and_then(FsError::from_raw) {
            return mapped;
        }
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound,
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists,
            io::ErrorKind::NotADirectory => FsError::NotADirectory,
            io::ErrorKind::IsADirectory => FsError::IsADirectory,
            io::ErrorKind::DirectoryNotEmpty => FsError::NotEmpty,
            io::ErrorKind::FileTooLarge => FsError::FileTooLarge,
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => FsError::InvalidArgument,
            io::ErrorKind::StorageFull => FsError::NoSpace,
            io::ErrorKind::OutOfMemory => FsError::OutOfMemory,
            io::ErrorKind::UnexpectedEof | io::ErrorKind::WriteZero => FsError::Io,
            _ => FsError::Unknown,
        }
    }
}

impl From<TryReserveError> for FsError {
    fn from(_: TryReserveError) -> Self {
        FsError::OutOfMemory
    }
}
