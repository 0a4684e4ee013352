//! Noise module kinds.
//!
//! Each kind is its own settings struct. The [`Module`] enum wraps them for
//! storage in a [`NoiseGraph`](crate::NoiseGraph) and dispatches
//! [`NoiseModule`] calls to the concrete type.

use enum_dispatch::enum_dispatch;

use crate::error::NoiseError;
use crate::graph::Sources;

mod combiner;
mod generator;
mod modifier;
mod selector;
mod transformer;

pub use combiner::{Add, Max};
pub use generator::{Const, MAX_OCTAVE_COUNT, Perlin, Simplex, Voronoi};
pub use modifier::{ControlPoint, Curve, Invert, ScaleBias};
pub use selector::{Blend, Select};
pub use transformer::{RotatePoint, ScalePoint};

/// Behaviour shared by every module kind.
#[enum_dispatch]
pub trait NoiseModule {
    /// Number of source slots the module reads from.
    fn arity(&self) -> usize;

    /// Produces the module's value at `(x, y, z)`.
    ///
    /// `sources` is only valid for slot indices below [`arity`](Self::arity);
    /// the graph guarantees every such slot is wired before calling this.
    fn sample(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> Result<f64, NoiseError>;
}

/// Any module that can be stored in a graph.
#[enum_dispatch(NoiseModule)]
#[derive(Debug, Clone, PartialEq)]
pub enum Module {
    /// See [`Const`].
    Const,
    /// See [`Perlin`].
    Perlin,
    /// See [`Simplex`].
    Simplex,
    /// See [`Voronoi`].
    Voronoi,
    /// See [`ScaleBias`].
    ScaleBias,
    /// See [`Curve`].
    Curve,
    /// See [`Invert`].
    Invert,
    /// See [`RotatePoint`].
    RotatePoint,
    /// See [`ScalePoint`].
    ScalePoint,
    /// See [`Add`].
    Add,
    /// See [`Max`].
    Max,
    /// See [`Blend`].
    Blend,
    /// See [`Select`].
    Select,
}

/// A concrete module type that typed settings access can recover from a
/// [`Module`].
pub trait ModuleKind: Into<Module> {
    /// Lowercase name used in errors and configuration files.
    const NAME: &'static str;

    /// Borrows the settings if `module` holds this kind.
    fn from_module(module: &Module) -> Option<&Self>;

    /// Mutably borrows the settings if `module` holds this kind.
    fn from_module_mut(module: &mut Module) -> Option<&mut Self>;
}

macro_rules! module_kinds {
    ($($kind:ident => $name:literal),* $(,)?) => {
        $(
            impl ModuleKind for $kind {
                const NAME: &'static str = $name;

                fn from_module(module: &Module) -> Option<&Self> {
                    match module {
                        Module::$kind(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_module_mut(module: &mut Module) -> Option<&mut Self> {
                    match module {
                        Module::$kind(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*

        impl Module {
            /// Lowercase name of the wrapped kind.
            #[must_use]
            pub const fn kind_name(&self) -> &'static str {
                match self {
                    $(Self::$kind(_) => <$kind as ModuleKind>::NAME,)*
                }
            }
        }
    };
}

module_kinds! {
    Const => "const",
    Perlin => "perlin",
    Simplex => "simplex",
    Voronoi => "voronoi",
    ScaleBias => "scale_bias",
    Curve => "curve",
    Invert => "invert",
    RotatePoint => "rotate_point",
    ScalePoint => "scale_point",
    Add => "add",
    Max => "max",
    Blend => "blend",
    Select => "select",
}
