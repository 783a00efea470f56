//! Flags controlling how a job treats the existing state of its destination table.
//!
//! Both enums serialize to the literal tags the BigQuery REST API expects. An unset
//! disposition is modelled as [`None`], and is written into job configurations as an
//! empty string so BigQuery applies its own default.
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Specifies the circumstances under which the destination table will be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreateDisposition {
    /// The table will be created if it does not already exist. Tables are created
    /// atomically on successful completion of a job.
    CreateIfNeeded,
    /// The table must already exist and will not be automatically created.
    CreateNever,
}

/// Specifies how existing data in the destination table is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WriteDisposition {
    /// Data is appended atomically to any existing data on successful completion of a job.
    WriteAppend,
    /// Existing data is overwritten atomically on successful completion of a job.
    WriteTruncate,
    /// The job fails if the destination table already contains data.
    WriteEmpty,
}

macro_rules! impl_disposition {
    (
        $name:ident($kind:literal) {
            default: $default:ident,
            $($variant:ident => $tag:literal),* $(,)?
        }
    ) => {
        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The value BigQuery assumes when a job leaves this disposition empty.
            ///
            /// Never written into a job configuration by this crate.
            pub const SERVICE_DEFAULT: Self = Self::$default;

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(Self::$variant),)*
                    _ => Err(Error::InvalidDisposition {
                        kind: $kind,
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

impl_disposition! {
    CreateDisposition("create disposition") {
        default: CreateIfNeeded,
        CreateIfNeeded => "CREATE_IF_NEEDED",
        CreateNever => "CREATE_NEVER",
    }
}

impl_disposition! {
    WriteDisposition("write disposition") {
        default: WriteAppend,
        WriteAppend => "WRITE_APPEND",
        WriteTruncate => "WRITE_TRUNCATE",
        WriteEmpty => "WRITE_EMPTY",
    }
}

/// The raw string written into a job configuration for an optional disposition.
#[inline]
pub(crate) fn raw<S: From<&'static str>>(disposition: Option<&'static str>) -> S {
    S::from(disposition.unwrap_or(""))
}

/// Inverse of [`raw`], an empty string reads back as [`None`].
pub(crate) fn parse_raw<D>(raw: &str) -> crate::Result<Option<D>>
where
    D: FromStr<Err = Error>,
{
    if raw.is_empty() {
        Ok(None)
    } else {
        raw.parse().map(Some)
    }
}

/// `deserialize_with` helper for optional dispositions, reading `""` the same as a
/// missing or null value.
pub(crate) fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = Error>,
{
    let raw = <Option<Box<str>> as serde::Deserialize>::deserialize(deserializer)?;

    match raw.as_deref() {
        Some(raw) => parse_raw(raw).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
