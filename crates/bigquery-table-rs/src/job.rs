use std::collections::HashMap;

use crate::util;

pub mod copy;
pub mod extract;
pub mod load;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Query,
    Load,
    Extract,
    Copy,
    #[serde(other)]
    Unknown,
}

/// The `configuration` field of a BigQuery job resource, restricted to the job
/// kinds that take a table as a source or destination.
// load and copy configs default their raw disposition strings, hence `S: Default`
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "S: serde::Deserialize<'de> + Default")
)]
pub struct JobConfiguration<S = Box<str>> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "util::is_false")]
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<Box<str>, S>>,
    #[serde(flatten)]
    pub kind: JobConfigurationKind<S>,
}

impl<S, Kind> From<Kind> for JobConfiguration<S>
where
    JobConfigurationKind<S>: From<Kind>,
{
    #[inline]
    fn from(value: Kind) -> Self {
        let kind = JobConfigurationKind::from(value);

        JobConfiguration {
            job_type: Some(kind.job_type()),
            dry_run: false,
            labels: None,
            kind,
        }
    }
}

impl<S> JobConfiguration<S> {
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    pub fn with_label(mut self, key: impl Into<Box<str>>, value: S) -> Self {
        self.labels
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "S: serde::Deserialize<'de> + Default")
)]
pub enum JobConfigurationKind<S = Box<str>> {
    Load(load::JobConfigurationLoad<S>),
    Copy(copy::JobConfigurationTableCopy<S>),
    Extract(extract::JobConfigurationExtract<S>),
}

impl<S> JobConfigurationKind<S> {
    pub fn job_type(&self) -> JobType {
        match self {
            Self::Copy(_) => JobType::Copy,
            Self::Extract(_) => JobType::Extract,
            Self::Load(_) => JobType::Load,
        }
    }
}

macro_rules! impl_from_job_config_kinds {
    ($($module_name:ident :: $name:ident -> $variant:ident),* $(,)?) => {
        $(
            impl<S> From<$module_name::$name<S>> for JobConfigurationKind<S> {
                #[inline]
                fn from(value: $module_name::$name<S>) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_job_config_kinds! {
    load::JobConfigurationLoad -> Load,
    copy::JobConfigurationTableCopy -> Copy,
    extract::JobConfigurationExtract -> Extract,
}

#[cfg(test)]
mod tests {
    use super::copy::*;
    use super::extract::*;
    use super::load::*;
    use super::*;
    use crate::Table;

    fn build_test_config() -> JobConfiguration {
        let source = Table::new("mysticetus-boem", "main", "effort");
        let destination = Table::new("mysticetus-boem", "backups", "effort").write_truncate();

        JobConfiguration::from(JobConfigurationTableCopy::new(&source, &destination))
            .with_label("team", "ops".into())
    }

    #[test]
    fn test_job_type_follows_kind() {
        let table = Table::<Box<str>>::new("p1", "d1", "t1");

        let load = JobConfiguration::from(JobConfigurationLoad::new(
            Vec::new(),
            SourceFormat::Parquet,
            &table,
        ));
        let extract = JobConfiguration::from(JobConfigurationExtract::new(Vec::new(), &table));

        assert_eq!(load.job_type, Some(JobType::Load));
        assert_eq!(extract.job_type, Some(JobType::Extract));
        assert_eq!(build_test_config().job_type, Some(JobType::Copy));
    }

    #[test]
    fn test_job_json_serialize() -> Result<(), Box<dyn std::error::Error>> {
        let config = build_test_config().dry_run();

        let serialized = serde_json::to_value(&config)?;

        assert_eq!(
            serialized,
            serde_json::json!({
                "jobType": "COPY",
                "dryRun": true,
                "labels": { "team": "ops" },
                "copy": {
                    "sourceTable": {
                        "projectId": "mysticetus-boem",
                        "datasetId": "main",
                        "tableId": "effort",
                    },
                    "destinationTable": {
                        "projectId": "mysticetus-boem",
                        "datasetId": "backups",
                        "tableId": "effort",
                    },
                    "createDisposition": "",
                    "writeDisposition": "WRITE_TRUNCATE",
                },
            })
        );

        let deserialized: JobConfiguration = serde_json::from_value(serialized)?;
        assert_eq!(deserialized, config);
        Ok(())
    }

    #[test]
    fn test_deserialize_without_dispositions() -> Result<(), Box<dyn std::error::Error>> {
        let config: JobConfiguration = serde_json::from_str(
            r#"{
                "jobType": "LOAD",
                "load": {
                    "sourceUris": ["gs://boem-backups/effort.csv"],
                    "sourceFormat": "CSV",
                    "destinationTable": {
                        "projectId": "mysticetus-boem",
                        "datasetId": "main",
                        "tableId": "effort"
                    }
                }
            }"#,
        )?;

        let JobConfigurationKind::Load(load) = &config.kind else {
            panic!("expected a load configuration, got {:?}", config.kind);
        };

        assert_eq!(&*load.create_disposition, "");
        assert_eq!(load.write_disposition()?, None);
        assert_eq!(load.source_format, Some(SourceFormat::Csv));
        assert_eq!(config.kind.job_type(), JobType::Load);
        Ok(())
    }

    #[test]
    fn test_unknown_job_type() -> Result<(), Box<dyn std::error::Error>> {
        let job_types: Vec<JobType> =
            serde_json::from_str(r#"["QUERY", "COPY", "SOME_NEW_JOB_TYPE"]"#)?;

        assert_eq!(job_types, [JobType::Query, JobType::Copy, JobType::Unknown]);
        Ok(())
    }
}
