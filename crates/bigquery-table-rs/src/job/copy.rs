use crate::disposition::{self, CreateDisposition, WriteDisposition};
use crate::role::{Destination, Source};
use crate::TableReference;

/// Copies a single source table into a destination table.
// TODO: support multiple source tables via `sourceTables`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfigurationTableCopy<S = Box<str>> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_table: Option<TableReference<S>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_table: Option<TableReference<S>>,
    #[serde(default)]
    pub create_disposition: S,
    #[serde(default)]
    pub write_disposition: S,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<OperationType>,
}

impl<S> JobConfigurationTableCopy<S>
where
    S: Default,
{
    pub fn new(source: &impl Source<S>, destination: &impl Destination<S>) -> Self {
        let mut config = Self::default();
        source.customize_copy_src(&mut config);
        destination.customize_copy_dst(&mut config);
        config
    }
}

impl<S> JobConfigurationTableCopy<S> {
    pub fn with_operation_type(mut self, operation_type: OperationType) -> Self {
        self.operation_type = Some(operation_type);
        self
    }
}

impl<S: AsRef<str>> JobConfigurationTableCopy<S> {
    pub fn create_disposition(&self) -> crate::Result<Option<CreateDisposition>> {
        disposition::parse_raw(self.create_disposition.as_ref())
    }

    pub fn write_disposition(&self) -> crate::Result<Option<WriteDisposition>> {
        disposition::parse_raw(self.write_disposition.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Copy,
    Snapshot,
    Restore,
    Clone,
}
