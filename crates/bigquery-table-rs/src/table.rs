use crate::disposition::{self, CreateDisposition, WriteDisposition};
use crate::job::copy::JobConfigurationTableCopy;
use crate::job::extract::JobConfigurationExtract;
use crate::job::load::JobConfigurationLoad;
use crate::TableReference;

/// A reference to a BigQuery table, along with the dispositions to use when the
/// table is the destination of a load or copy job.
///
/// The dispositions are ignored when the table is used as a source. When unset,
/// BigQuery falls back to [`CreateDisposition::SERVICE_DEFAULT`] and
/// [`WriteDisposition::SERVICE_DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table<S = Box<str>> {
    #[serde(flatten)]
    pub reference: TableReference<S>,
    #[serde(
        default,
        deserialize_with = "disposition::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_disposition: Option<CreateDisposition>,
    #[serde(
        default,
        deserialize_with = "disposition::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub write_disposition: Option<WriteDisposition>,
}

impl<S> From<TableReference<S>> for Table<S> {
    #[inline]
    fn from(reference: TableReference<S>) -> Self {
        Self {
            reference,
            create_disposition: None,
            write_disposition: None,
        }
    }
}

impl<S> Table<S> {
    pub fn new(project_id: impl Into<S>, dataset_id: impl Into<S>, table_id: impl Into<S>) -> Self {
        Self::from(TableReference::new(project_id, dataset_id, table_id))
    }

    #[inline]
    pub const fn reference(&self) -> &TableReference<S> {
        &self.reference
    }

    pub fn with_create_disposition(mut self, create_disposition: CreateDisposition) -> Self {
        self.create_disposition = Some(create_disposition);
        self
    }

    pub fn with_write_disposition(mut self, write_disposition: WriteDisposition) -> Self {
        self.write_disposition = Some(write_disposition);
        self
    }

    pub fn create_never(self) -> Self {
        self.with_create_disposition(CreateDisposition::CreateNever)
    }

    pub fn write_truncate(self) -> Self {
        self.with_write_disposition(WriteDisposition::WriteTruncate)
    }
}

impl<S> Table<S>
where
    S: Clone + From<&'static str> + AsRef<str>,
{
    /// Sets `config` to load into this table, with this table's dispositions.
    pub fn as_load_destination(&self, config: &mut JobConfigurationLoad<S>) {
        self.trace_role("load destination");

        config.destination_table = Some(self.reference.clone());
        config.create_disposition = self.raw_create_disposition();
        config.write_disposition = self.raw_write_disposition();
    }

    /// Sets `config` to extract this table. Dispositions are not written.
    pub fn as_extract_source(&self, config: &mut JobConfigurationExtract<S>) {
        self.trace_role("extract source");

        config.source_table = Some(self.reference.clone());
    }

    /// Sets `config` to copy from this table. Dispositions are not written.
    pub fn as_copy_source(&self, config: &mut JobConfigurationTableCopy<S>) {
        self.trace_role("copy source");

        config.source_table = Some(self.reference.clone());
    }

    /// Sets `config` to copy into this table, with this table's dispositions.
    pub fn as_copy_destination(&self, config: &mut JobConfigurationTableCopy<S>) {
        self.trace_role("copy destination");

        config.destination_table = Some(self.reference.clone());
        config.create_disposition = self.raw_create_disposition();
        config.write_disposition = self.raw_write_disposition();
    }

    // unset dispositions are left empty, never filled in with the service default
    fn raw_create_disposition(&self) -> S {
        disposition::raw(self.create_disposition.as_ref().map(CreateDisposition::as_str))
    }

    fn raw_write_disposition(&self) -> S {
        disposition::raw(self.write_disposition.as_ref().map(WriteDisposition::as_str))
    }

    fn trace_role(&self, role: &'static str) {
        tracing::trace!(
            project_id = self.reference.project_id.as_ref(),
            dataset_id = self.reference.dataset_id.as_ref(),
            table_id = self.reference.table_id.as_ref(),
            role,
            "writing table into job configuration"
        );
    }
}
