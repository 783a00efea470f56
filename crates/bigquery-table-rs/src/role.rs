//! Roles a value can play in a job configuration.
//!
//! A [`Source`] is read from (extract and copy jobs), a [`Destination`] is written to
//! (load and copy jobs). Both are sealed, [`Table`] is the only implementor.
use crate::job::copy::JobConfigurationTableCopy;
use crate::job::extract::JobConfigurationExtract;
use crate::job::load::JobConfigurationLoad;
use crate::private::Sealed;
use crate::table::Table;

pub trait Source<S>: Sealed {
    fn customize_extract_src(&self, config: &mut JobConfigurationExtract<S>);

    fn customize_copy_src(&self, config: &mut JobConfigurationTableCopy<S>);
}

pub trait Destination<S>: Sealed {
    fn customize_load_dst(&self, config: &mut JobConfigurationLoad<S>);

    fn customize_copy_dst(&self, config: &mut JobConfigurationTableCopy<S>);
}

impl<S> Sealed for Table<S> {}

impl<S> Source<S> for Table<S>
where
    S: Clone + From<&'static str> + AsRef<str>,
{
    #[inline]
    fn customize_extract_src(&self, config: &mut JobConfigurationExtract<S>) {
        self.as_extract_source(config);
    }

    #[inline]
    fn customize_copy_src(&self, config: &mut JobConfigurationTableCopy<S>) {
        self.as_copy_source(config);
    }
}

impl<S> Destination<S> for Table<S>
where
    S: Clone + From<&'static str> + AsRef<str>,
{
    #[inline]
    fn customize_load_dst(&self, config: &mut JobConfigurationLoad<S>) {
        self.as_load_destination(config);
    }

    #[inline]
    fn customize_copy_dst(&self, config: &mut JobConfigurationTableCopy<S>) {
        self.as_copy_destination(config);
    }
}
