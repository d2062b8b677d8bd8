pub mod writers;

pub use writers::*;

use anyhow::Result;

use crate::pipeline::StageOutput;
use crate::slug::SlugError;

/// Trait for writing CLI results
pub trait OutputWriter {
    /// Write the slug produced for one input
    fn write_slug(&mut self, input: &str, slug: &str) -> Result<()>;

    /// Write the intermediate text of every pipeline stage for one input
    fn write_trace(&mut self, input: &str, stages: &[StageOutput]) -> Result<()>;

    /// Write the outcome of validating a candidate slug
    fn write_check(&mut self, candidate: &str, result: &Result<(), SlugError>) -> Result<()>;
}
