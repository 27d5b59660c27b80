use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::problem::dtlz::variant::Variant;
use crate::problem::dtlz::Dtlz;

/// Problem built when nothing else is asked for.
pub(crate) const DEFAULT_VARIANT: Variant = Variant::Dtlz1;

/// The persisted form of a DTLZ problem.
///
/// Field order is the on-disk layout: `prob_id`, `dim`, `fdim`, `alpha`.
/// A config is not validated until [`DtlzConfig::build`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DtlzConfig
{
    pub prob_id: u32,
    pub dim: usize,
    pub fdim: usize,
    /// Only used by DTLZ4.
    pub alpha: u32,
}

impl Default for DtlzConfig
{
    fn default() -> Self {
        DtlzConfig {
            prob_id: DEFAULT_VARIANT.id(),
            dim: 7,
            fdim: 3,
            alpha: 100,
        }
    }
}

impl DtlzConfig
{
    pub fn new(prob_id: u32, dim: usize, fdim: usize, alpha: u32) -> Self
    {
        DtlzConfig {
            prob_id,
            dim,
            fdim,
            alpha,
        }
    }

    pub fn build(self) -> Result<Dtlz>
    {
        Dtlz::new(self.prob_id, self.dim, self.fdim, self.alpha)
    }

    pub fn to_json(&self) -> Result<String>
    {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self>
    {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()>
    {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;

        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self>
    {
        let reader = BufReader::new(File::open(path)?);

        Ok(serde_json::from_reader(reader)?)
    }
}
