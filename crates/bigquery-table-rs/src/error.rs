#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("'{value}' is not a valid {kind}")]
    InvalidDisposition {
        kind: &'static str,
        value: Box<str>,
    },
    #[error("invalid table reference '{0}', expected 'project.dataset.table' or 'project:dataset.table'")]
    InvalidTableReference(Box<str>),
}
