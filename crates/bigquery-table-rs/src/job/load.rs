use crate::disposition::{self, CreateDisposition, WriteDisposition};
use crate::role::Destination;
use crate::{TableReference, util};

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfigurationLoad<S = Box<str>> {
    #[serde(default = "Vec::new")]
    pub source_uris: Vec<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_format: Option<SourceFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_table: Option<TableReference<S>>,
    /// Raw [`CreateDisposition`] tag, empty when the destination didn't specify one.
    #[serde(default)]
    pub create_disposition: S,
    /// Raw [`WriteDisposition`] tag, empty when the destination didn't specify one.
    #[serde(default)]
    pub write_disposition: S,
    #[serde(default, skip_serializing_if = "util::is_false")]
    pub ignore_unknown_values: bool,
    #[serde(default, skip_serializing_if = "util::is_false")]
    pub autodetect: bool,
}

impl<S> JobConfigurationLoad<S>
where
    S: Default,
{
    pub fn new(
        source_uris: impl Into<Vec<S>>,
        source_format: SourceFormat,
        destination: &impl Destination<S>,
    ) -> Self {
        let mut config = Self {
            source_uris: source_uris.into(),
            source_format: Some(source_format),
            ..Default::default()
        };

        destination.customize_load_dst(&mut config);
        config
    }
}

impl<S: AsRef<str>> JobConfigurationLoad<S> {
    pub fn create_disposition(&self) -> crate::Result<Option<CreateDisposition>> {
        disposition::parse_raw(self.create_disposition.as_ref())
    }

    pub fn write_disposition(&self) -> crate::Result<Option<WriteDisposition>> {
        disposition::parse_raw(self.write_disposition.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceFormat {
    Csv,
    DatastoreBackup,
    NewlineDelimitedJson,
    Avro,
    Parquet,
    Orc,
}
