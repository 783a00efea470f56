use crate::TableReference;
use crate::role::Source;

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfigurationExtract<S = Box<str>> {
    #[serde(default = "Vec::new")]
    pub destination_uris: Vec<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_table: Option<TableReference<S>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<Compression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_format: Option<DestinationFormat>,
    /// Only meaningful for [`DestinationFormat::Csv`], BigQuery defaults to `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_delimiter: Option<S>,
}

impl<S> JobConfigurationExtract<S>
where
    S: Default,
{
    pub fn new(destination_uris: impl Into<Vec<S>>, source: &impl Source<S>) -> Self {
        let mut config = Self {
            destination_uris: destination_uris.into(),
            ..Default::default()
        };

        source.customize_extract_src(&mut config);
        config
    }
}

impl<S> JobConfigurationExtract<S> {
    pub fn with_format(mut self, destination_format: DestinationFormat) -> Self {
        self.destination_format = Some(destination_format);
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = Some(compression);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Compression {
    Deflate,
    Gzip,
    Snappy,
    Zstd,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationFormat {
    Csv,
    NewlineDelimitedJson,
    Parquet,
    Avro,
}
