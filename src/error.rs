use crate::value::ValueKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported comparison: {lhs} vs {rhs}")]
    UnsupportedComparison { lhs: ValueKind, rhs: ValueKind },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn fail<T>(err: Error) -> Result<T> {
    tracing::debug!("{}", err);
    Err(err)
}
