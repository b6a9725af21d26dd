/// Describes catalog specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by the request itself, e.g. a filter combination the backend rejects.
    ClientError,
    /// Requested resource doesn't exist.
    NotFound,
    /// Unknown error.
    Unknown,
}
