//! Render configuration loaded from JSON5.
//!
//! A configuration names every node with a string id, lists each node's
//! sources by id, and picks one node as the root to render.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use terrace_core::module::{
    Add, Blend, Const, Curve, Invert, Max, Module, Perlin, RotatePoint, ScaleBias, ScalePoint,
    Select, Simplex, Voronoi,
};
use terrace_core::{LatticeOrientation, NodeId, NoiseError, NoiseGraph, NoiseQuality, SimplexQuality};

/// Configuration used when no file is given.
pub const DEFAULT_CONFIG: &str = include_str!("default.json5");

/// Top-level configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Id of the node whose output is rendered.
    pub root: String,
    /// Output width in pixels.
    #[serde(default = "default_size")]
    pub width: usize,
    /// Output height in pixels.
    #[serde(default = "default_size")]
    pub height: usize,
    /// Area of the xz-plane to sample.
    #[serde(default)]
    pub region: Region,
    /// Every node of the graph. Order does not matter.
    pub nodes: Vec<NodeConfig>,
}

const fn default_size() -> usize {
    256
}

/// Sampled area: an xz rectangle at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Region {
    /// Start and end on the x axis.
    pub x: [f64; 2],
    /// Start and end on the z axis.
    pub z: [f64; 2],
    /// Height of the slice.
    pub y: f64,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            x: [0.0, 4.0],
            z: [0.0, 4.0],
            y: 0.0,
        }
    }
}

/// One node of the graph.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// Unique name other nodes use to reference this one.
    pub id: String,
    /// Ids of the source nodes, in slot order.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Module kind and its settings.
    #[serde(flatten)]
    pub module: ModuleConfig,
}

/// Module kind, tagged by `type`, with kind-specific settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModuleConfig {
    /// See [`Const`].
    Const {
        /// Output value.
        #[serde(default)]
        value: f64,
    },
    /// See [`Perlin`].
    Perlin(PerlinConfig),
    /// See [`Simplex`].
    Simplex(SimplexConfig),
    /// See [`Voronoi`].
    Voronoi(VoronoiConfig),
    /// See [`ScaleBias`].
    ScaleBias(ScaleBiasConfig),
    /// See [`Curve`].
    Curve {
        /// `[input, output]` pairs.
        control_points: Vec<[f64; 2]>,
    },
    /// See [`Invert`].
    Invert,
    /// See [`RotatePoint`].
    RotatePoint(RotatePointConfig),
    /// See [`ScalePoint`].
    ScalePoint(ScalePointConfig),
    /// See [`Add`].
    Add,
    /// See [`Max`].
    Max,
    /// See [`Blend`].
    Blend,
    /// See [`Select`].
    Select(SelectConfig),
}

/// Octave settings shared by the fractal generators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OctaveConfig {
    /// Frequency of the first octave.
    pub frequency: f64,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Number of octaves.
    pub octave_count: usize,
    /// Seed of the first octave.
    pub seed: i32,
}

impl Default for OctaveConfig {
    fn default() -> Self {
        let perlin = Perlin::default();
        Self {
            frequency: perlin.frequency,
            lacunarity: perlin.lacunarity,
            persistence: perlin.persistence,
            octave_count: perlin.octave_count(),
            seed: perlin.seed,
        }
    }
}

/// Settings of a [`Perlin`] node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PerlinConfig {
    /// Octave settings.
    #[serde(flatten)]
    pub octaves: OctaveConfig,
    /// Interpolation quality.
    pub quality: NoiseQuality,
}

/// Settings of a [`Simplex`] node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimplexConfig {
    /// Octave settings.
    #[serde(flatten)]
    pub octaves: OctaveConfig,
    /// Lattice orientation.
    pub orientation: LatticeOrientation,
    /// Kernel size.
    pub quality: SimplexQuality,
}

/// Settings of a [`Voronoi`] node.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VoronoiConfig {
    /// Cell density.
    pub frequency: f64,
    /// Scale of the per-cell value.
    pub displacement: f64,
    /// Seed.
    pub seed: i32,
    /// Add the distance to the nearest seed point.
    pub enable_distance: bool,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        let voronoi = Voronoi::default();
        Self {
            frequency: voronoi.frequency,
            displacement: voronoi.displacement,
            seed: voronoi.seed,
            enable_distance: voronoi.enable_distance,
        }
    }
}

/// Settings of a [`ScaleBias`] node.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScaleBiasConfig {
    /// Multiplier.
    pub scale: f64,
    /// Offset.
    pub bias: f64,
}

impl Default for ScaleBiasConfig {
    fn default() -> Self {
        let ScaleBias { scale, bias } = ScaleBias::default();
        Self { scale, bias }
    }
}

/// Settings of a [`RotatePoint`] node, in degrees.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RotatePointConfig {
    /// Rotation around x.
    pub x_angle: f64,
    /// Rotation around y.
    pub y_angle: f64,
    /// Rotation around z.
    pub z_angle: f64,
}

/// Settings of a [`ScalePoint`] node.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScalePointConfig {
    /// Multiplier on x.
    pub x_scale: f64,
    /// Multiplier on y.
    pub y_scale: f64,
    /// Multiplier on z.
    pub z_scale: f64,
}

impl Default for ScalePointConfig {
    fn default() -> Self {
        let ScalePoint {
            x_scale,
            y_scale,
            z_scale,
        } = ScalePoint::default();
        Self {
            x_scale,
            y_scale,
            z_scale,
        }
    }
}

/// Settings of a [`Select`] node.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Lower end of the selection range.
    pub lower_bound: f64,
    /// Upper end of the selection range.
    pub upper_bound: f64,
    /// Half-width of the transition band.
    pub edge_falloff: f64,
}

impl Default for SelectConfig {
    fn default() -> Self {
        let select = Select::default();
        Self {
            lower_bound: select.lower_bound(),
            upper_bound: select.upper_bound(),
            edge_falloff: select.edge_falloff(),
        }
    }
}

impl ModuleConfig {
    /// Builds the configured module, running every validating setter.
    pub fn build(&self) -> Result<Module, NoiseError> {
        let module = match self {
            Self::Const { value } => Const { value: *value }.into(),
            Self::Perlin(config) => {
                let octaves = &config.octaves;
                let mut perlin = Perlin::default();
                perlin.frequency = octaves.frequency;
                perlin.lacunarity = octaves.lacunarity;
                perlin.persistence = octaves.persistence;
                perlin.seed = octaves.seed;
                perlin.quality = config.quality;
                perlin.set_octave_count(octaves.octave_count)?;
                perlin.into()
            }
            Self::Simplex(config) => {
                let octaves = &config.octaves;
                let mut simplex = Simplex::default();
                simplex.frequency = octaves.frequency;
                simplex.lacunarity = octaves.lacunarity;
                simplex.persistence = octaves.persistence;
                simplex.seed = octaves.seed;
                simplex.orientation = config.orientation;
                simplex.quality = config.quality;
                simplex.set_octave_count(octaves.octave_count)?;
                simplex.into()
            }
            Self::Voronoi(config) => Voronoi {
                frequency: config.frequency,
                displacement: config.displacement,
                seed: config.seed,
                enable_distance: config.enable_distance,
            }
            .into(),
            Self::ScaleBias(config) => ScaleBias {
                scale: config.scale,
                bias: config.bias,
            }
            .into(),
            Self::Curve { control_points } => {
                let mut curve = Curve::default();
                for &[input, output] in control_points {
                    curve.add_control_point(input, output)?;
                }
                curve.into()
            }
            Self::Invert => Invert.into(),
            Self::RotatePoint(config) => {
                RotatePoint::new(config.x_angle, config.y_angle, config.z_angle).into()
            }
            Self::ScalePoint(config) => ScalePoint {
                x_scale: config.x_scale,
                y_scale: config.y_scale,
                z_scale: config.z_scale,
            }
            .into(),
            Self::Add => Add.into(),
            Self::Max => Max.into(),
            Self::Blend => Blend.into(),
            Self::Select(config) => {
                let mut select = Select::default();
                select.set_bounds(config.lower_bound, config.upper_bound)?;
                select.set_edge_falloff(config.edge_falloff)?;
                select.into()
            }
        };
        Ok(module)
    }
}

impl RenderConfig {
    /// Parses a configuration from JSON5 text.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json5::from_str(text).context("malformed render configuration")
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Builds the graph and returns it with the root node.
    ///
    /// Nodes are added first and wired second, so sources may be listed in any
    /// order. Every slot of every node must be filled.
    pub fn build_graph(&self) -> Result<(NoiseGraph, NodeId)> {
        let mut graph = NoiseGraph::with_capacity(self.nodes.len());
        let mut ids = FxHashMap::default();

        for node in &self.nodes {
            let module = node
                .module
                .build()
                .with_context(|| format!("invalid settings for node `{}`", node.id))?;
            let id = graph.add(module);
            if ids.insert(node.id.as_str(), id).is_some() {
                bail!("node id `{}` is used more than once", node.id);
            }
        }

        for node in &self.nodes {
            let id = ids[node.id.as_str()];
            let arity = graph.arity(id)?;
            if node.sources.len() != arity {
                bail!(
                    "node `{}` takes {arity} sources but lists {}",
                    node.id,
                    node.sources.len()
                );
            }
            for (index, name) in node.sources.iter().enumerate() {
                let source = *ids
                    .get(name.as_str())
                    .with_context(|| format!("node `{}` uses unknown source `{name}`", node.id))?;
                graph
                    .set_source(id, index, source)
                    .with_context(|| format!("cannot wire `{name}` into `{}`", node.id))?;
            }
        }

        let root = *ids
            .get(self.root.as_str())
            .with_context(|| format!("root node `{}` is not defined", self.root))?;
        log::debug!("built graph with {} nodes", graph.len());
        Ok((graph, root))
    }
}
