//! Heightmap sampling and PGM output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, ensure};
use rayon::prelude::*;
use terrace_core::{NodeId, NoiseError, NoiseGraph};

use crate::config::Region;

/// Row-major grid of sampled values.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseMap {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl NoiseMap {
    /// Samples `root` over `region` at the centre of each pixel.
    ///
    /// Rows are evaluated in parallel. The first evaluation error aborts the
    /// render.
    pub fn render(
        graph: &NoiseGraph,
        root: NodeId,
        region: &Region,
        width: usize,
        height: usize,
    ) -> Result<Self, NoiseError> {
        let [x0, x1] = region.x;
        let [z0, z1] = region.z;
        let x_step = (x1 - x0) / width as f64;
        let z_step = (z1 - z0) / height as f64;
        let y = region.y;

        let rows = (0..height)
            .into_par_iter()
            .map(|row| {
                let z = z0 + (row as f64 + 0.5) * z_step;
                (0..width)
                    .map(|col| {
                        let x = x0 + (col as f64 + 0.5) * x_step;
                        graph.evaluate(root, x, y, z)
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width,
            height,
            values: rows.concat(),
        })
    }

    /// Width in samples.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in samples.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Smallest and largest sample, or `None` for an empty map.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.values.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Maps the samples linearly onto `0..=255`, darkest at the minimum.
    ///
    /// A flat map becomes mid-grey.
    #[must_use]
    pub fn to_gray8(&self) -> Vec<u8> {
        let Some((lo, hi)) = self.bounds() else {
            return Vec::new();
        };
        let span = hi - lo;
        self.values
            .iter()
            .map(|&v| {
                if span > 0.0 {
                    ((v - lo) / span * 255.0).round().clamp(0.0, 255.0) as u8
                } else {
                    128
                }
            })
            .collect()
    }

    /// Writes the map as a binary greyscale PGM (`P5`) image.
    pub fn write_pgm(&self, writer: &mut impl Write) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "cannot encode an empty {}x{} map",
            self.width,
            self.height
        );
        write!(writer, "P5\n{} {}\n255\n", self.width, self.height)?;
        writer.write_all(&self.to_gray8())?;
        Ok(())
    }

    /// Writes the map to a PGM file at `path`.
    pub fn save_pgm(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_pgm(&mut writer)
            .and_then(|()| writer.flush().map_err(Into::into))
            .with_context(|| format!("failed to write {}", path.display()))
    }
}
