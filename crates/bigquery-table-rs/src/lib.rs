//! Typed references to BigQuery tables, and the glue that writes them into
//! load, extract and copy job configurations.
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

pub mod disposition;
mod error;
pub mod job;
pub mod role;
pub mod table;
mod util;

pub use disposition::{CreateDisposition, WriteDisposition};
pub use error::Error;
pub use role::{Destination, Source};
pub use table::Table;

/// Type alias to [`core::result::Result<T, Error>`].
pub type Result<T> = core::result::Result<T, Error>;

mod private {
    /// Sealed trait for use throughout the crate
    pub trait Sealed {}
}

/// Identifies a single table by its project, dataset and table ids.
///
/// No validation is done on construction, invalid ids are only rejected by
/// BigQuery once a job referencing them is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReference<S = Box<str>> {
    pub project_id: S,
    pub dataset_id: S,
    pub table_id: S,
}

impl<S> TableReference<S> {
    pub fn new(project_id: impl Into<S>, dataset_id: impl Into<S>, table_id: impl Into<S>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset_id: dataset_id.into(),
            table_id: table_id.into(),
        }
    }

    #[inline]
    pub const fn dataset_reference(&self) -> DatasetReference<&S> {
        DatasetReference {
            project_id: &self.project_id,
            dataset_id: &self.dataset_id,
        }
    }
}

impl<S: fmt::Display> fmt::Display for TableReference<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.project_id, self.dataset_id, self.table_id)
    }
}

impl FromStr for TableReference {
    type Err = Error;

    /// Parses either `project.dataset.table` or the legacy SQL form
    /// `project:dataset.table`. Domain scoped projects (`example.com:project`)
    /// are accepted in both forms.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTableReference(s.into());

        let (project_id, dataset_id, table_id) = match s.rsplit_once(':') {
            Some((project_id, rest)) if rest.matches('.').count() == 1 => {
                let (dataset_id, table_id) = rest.split_once('.').ok_or_else(invalid)?;
                (project_id, dataset_id, table_id)
            }
            _ => {
                let mut parts = s.rsplitn(3, '.');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(table_id), Some(dataset_id), Some(project_id)) => {
                        (project_id, dataset_id, table_id)
                    }
                    _ => return Err(invalid()),
                }
            }
        };

        let bad_id = |id: &str| id.is_empty() || id.contains(':');

        if !is_valid_project_id(project_id) || bad_id(dataset_id) || bad_id(table_id) {
            return Err(invalid());
        }

        Ok(Self::new(project_id, dataset_id, table_id))
    }
}

// a '.' is only allowed in the domain of a domain scoped project
fn is_valid_project_id(project_id: &str) -> bool {
    match project_id.split_once(':') {
        Some((domain, name)) => !domain.is_empty() && !name.is_empty() && !name.contains(['.', ':']),
        None => !project_id.is_empty() && !project_id.contains('.'),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference<S = Box<str>> {
    pub project_id: S,
    pub dataset_id: S,
}

impl<S> DatasetReference<S> {
    #[inline]
    pub fn as_table<'a>(&'a self, table_id: &'a impl Borrow<S>) -> TableReference<&'a S> {
        TableReference {
            project_id: &self.project_id,
            dataset_id: &self.dataset_id,
            table_id: table_id.borrow(),
        }
    }

    #[inline]
    pub fn into_table(self, table_id: S) -> TableReference<S> {
        TableReference {
            project_id: self.project_id,
            dataset_id: self.dataset_id,
            table_id,
        }
    }
}
