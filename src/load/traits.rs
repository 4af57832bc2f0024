use crate::load::error::LoadError;
use polars::prelude::DataFrame;
use std::fmt::Debug;

pub trait Loadable: Debug {
    /// Persists the merged claims table.
    fn load(&self, table: &mut DataFrame) -> Result<(), LoadError>;
}
