use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unsupported page size {0}; expected one of 10, 20, 50")]
    UnsupportedPageSize(u32),
    #[error("page size '{0}' is not a number")]
    MalformedPageSize(String),
    #[error("unknown collation '{0}'; expected 'ordinal' or 'case_insensitive'")]
    UnknownCollation(String),
}
