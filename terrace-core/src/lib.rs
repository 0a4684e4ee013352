//! Composable noise modules.
//!
//! A [`NoiseGraph`] owns every module; modules refer to their inputs through
//! [`NodeId`] handles. Build the graph with [`NoiseGraph::add`] and
//! [`NoiseGraph::set_source`], then sample any node with
//! [`NoiseGraph::evaluate`].
//!
//! ```
//! use terrace_core::{NoiseGraph, module::{Perlin, ScaleBias}};
//!
//! let mut graph = NoiseGraph::new();
//! let perlin = graph.add(Perlin::default());
//! let scaled = graph.add(ScaleBias { scale: 2.0, bias: -1.0 });
//! graph.set_source(scaled, 0, perlin)?;
//!
//! let height = graph.evaluate(scaled, 1.25, 0.0, -3.5)?;
//! assert!(height.is_finite());
//! # Ok::<(), terrace_core::NoiseError>(())
//! ```

pub mod error;
pub mod graph;
pub mod module;

pub use error::NoiseError;
pub use graph::{NodeId, NoiseGraph, Sources};
pub use module::{Module, ModuleKind, NoiseModule};
pub use terrace_utils::{LatticeOrientation, NoiseQuality, SimplexQuality};
