//! Arena-owned module graph.
//!
//! Every module lives in a [`NoiseGraph`] and is addressed by a [`NodeId`].
//! Source slots store ids rather than references, so a module can feed any
//! number of consumers and cycles are rejected when a slot is wired.

use std::{fmt, iter};

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::error::NoiseError;
use crate::module::{Module, ModuleKind, NoiseModule};

/// Handle to a module inside a [`NoiseGraph`].
///
/// Ids are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in its graph's arena.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source slots of one node. No built-in module takes more than three.
type Slots = SmallVec<[Option<NodeId>; 3]>;

#[derive(Debug, Clone)]
struct Node {
    module: Module,
    slots: Slots,
}

/// Owner of a set of noise modules and the wiring between them.
///
/// Evaluation takes `&self`, so a fully wired graph can be shared across
/// threads and sampled concurrently.
#[derive(Debug, Clone, Default)]
pub struct NoiseGraph {
    nodes: Vec<Node>,
}

impl NoiseGraph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` modules.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of modules in the graph.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no modules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a module with all of its source slots empty.
    pub fn add(&mut self, module: impl Into<Module>) -> NodeId {
        let module = module.into();
        let id = NodeId(self.nodes.len() as u32);
        let slots = iter::repeat_n(None, module.arity()).collect();
        log::trace!("added {} module as {id}", module.kind_name());
        self.nodes.push(Node { module, slots });
        id
    }

    /// Adds a module and wires `sources` into its slots in order.
    ///
    /// Fails without adding anything if a source is unknown or there are more
    /// sources than the module has slots. Slots past `sources.len()` stay empty.
    pub fn add_with_sources(
        &mut self,
        module: impl Into<Module>,
        sources: &[NodeId],
    ) -> Result<NodeId, NoiseError> {
        let module = module.into();
        let arity = module.arity();
        if sources.len() > arity {
            return Err(NoiseError::InvalidIndex {
                index: sources.len() - 1,
                arity,
            });
        }
        for &source in sources {
            self.node(source)?;
        }

        let id = self.add(module);
        // A fresh node has no consumers, so none of these can close a cycle.
        for (index, &source) in sources.iter().enumerate() {
            self.nodes[id.index()].slots[index] = Some(source);
        }
        Ok(id)
    }

    fn node(&self, id: NodeId) -> Result<&Node, NoiseError> {
        self.nodes.get(id.index()).ok_or(NoiseError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, NoiseError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(NoiseError::UnknownNode(id))
    }

    /// Number of source slots of `id`.
    pub fn arity(&self, id: NodeId) -> Result<usize, NoiseError> {
        Ok(self.node(id)?.slots.len())
    }

    /// The module stored at `id`.
    pub fn module(&self, id: NodeId) -> Result<&Module, NoiseError> {
        Ok(&self.node(id)?.module)
    }

    /// Connects `source` to slot `index` of `id`, replacing any previous source.
    ///
    /// Modules without source slots ignore the call. Wiring that would make
    /// `id` reachable from its own source is rejected with
    /// [`NoiseError::Cycle`] and leaves the graph unchanged.
    pub fn set_source(
        &mut self,
        id: NodeId,
        index: usize,
        source: NodeId,
    ) -> Result<(), NoiseError> {
        let arity = self.arity(id)?;
        self.node(source)?;
        if arity == 0 {
            log::debug!("ignoring source {source} for {id}, which takes no sources");
            return Ok(());
        }
        if index >= arity {
            return Err(NoiseError::InvalidIndex { index, arity });
        }
        if self.reaches(source, id) {
            log::debug!("rejected wiring {source} into {id}: cycle");
            return Err(NoiseError::Cycle {
                node: id,
                upstream: source,
            });
        }

        self.node_mut(id)?.slots[index] = Some(source);
        log::trace!("wired {source} into slot {index} of {id}");
        Ok(())
    }

    /// The module connected to slot `index` of `id`.
    pub fn source(&self, id: NodeId, index: usize) -> Result<NodeId, NoiseError> {
        self.node(id)?
            .slots
            .get(index)
            .copied()
            .flatten()
            .ok_or(NoiseError::MissingSource { node: id, index })
    }

    /// Whether `target` is `from` or one of its transitive sources.
    fn reaches(&self, from: NodeId, target: NodeId) -> bool {
        let mut visited = FxHashSet::default();
        let mut stack = vec![from];
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(node) = self.nodes.get(current.index()) {
                stack.extend(node.slots.iter().flatten().copied());
            }
        }
        false
    }

    /// Evaluates the module at `id` for the point `(x, y, z)`.
    ///
    /// Fails with [`NoiseError::MissingSource`] if `id` or any module it reads
    /// from has an empty slot, and with [`NoiseError::InvalidConfiguration`] if
    /// a module's settings cannot produce a value.
    pub fn evaluate(&self, id: NodeId, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let node = self.node(id)?;
        if let Some(index) = node.slots.iter().position(Option::is_none) {
            return Err(NoiseError::MissingSource { node: id, index });
        }
        let sources = Sources {
            graph: self,
            node: id,
            slots: &node.slots,
        };
        node.module.sample(&sources, x, y, z)
    }

    /// Typed view of the settings stored at `id`.
    pub fn settings<T: ModuleKind>(&self, id: NodeId) -> Result<&T, NoiseError> {
        let module = &self.node(id)?.module;
        T::from_module(module).ok_or(NoiseError::WrongModuleKind {
            expected: T::NAME,
            found: module.kind_name(),
        })
    }

    /// Mutable typed view of the settings stored at `id`.
    ///
    /// Fails with [`NoiseError::WrongModuleKind`] if the node holds another
    /// kind of module.
    pub fn settings_mut<T: ModuleKind>(&mut self, id: NodeId) -> Result<&mut T, NoiseError> {
        let module = &mut self.node_mut(id)?.module;
        let found = module.kind_name();
        T::from_module_mut(module).ok_or(NoiseError::WrongModuleKind {
            expected: T::NAME,
            found,
        })
    }
}

/// Read access to the sources of the module being evaluated.
pub struct Sources<'a> {
    graph: &'a NoiseGraph,
    node: NodeId,
    slots: &'a [Option<NodeId>],
}

impl Sources<'_> {
    /// Evaluates the source in slot `index` at `(x, y, z)`.
    pub fn sample(&self, index: usize, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let id = self
            .slots
            .get(index)
            .copied()
            .flatten()
            .ok_or(NoiseError::MissingSource {
                node: self.node,
                index,
            })?;
        self.graph.evaluate(id, x, y, z)
    }

    /// Number of slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the module has no slots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
