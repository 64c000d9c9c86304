use super::record::Sample;
use crate::error::FlamethrowerError;
use std::path::Path;

/// Samples of one run laid out as `samples / concurrency` rows of `concurrency` columns,
/// one column per concurrent generator.
#[derive(Debug, Clone, PartialEq)]
pub struct RunMatrix {
    samples: Vec<Sample>,
    columns: usize,
}

impl RunMatrix {
    /// Fails with [`FlamethrowerError::ShapeMismatch`] unless `columns` evenly divides the
    /// number of samples. A run without samples yields an empty matrix.
    pub fn reshape(
        samples: Vec<Sample>,
        columns: usize,
        path: &Path,
    ) -> Result<Self, FlamethrowerError> {
        if columns == 0 || samples.len() % columns != 0 {
            return Err(FlamethrowerError::ShapeMismatch {
                path: path.to_path_buf(),
                rows: samples.len(),
                concurrency: columns,
            });
        }
        Ok(Self { samples, columns })
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.samples.len() / self.columns, self.columns)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }
}
