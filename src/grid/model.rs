use super::definition::{GridDefinition, LinkDefinition, NodeDefinition, NodeId, Role};
use super::parser::parse_grid;
use crate::error::GridError;
use ahash::AHashMap;
use std::fs;
use std::path::Path;

/// Dense, zero-based position of a node in declaration order.
/// All allocation state is keyed by this index rather than by [`NodeId`].
pub type NodeIndex = usize;

/// Largest accepted link capacity. Residual capacity on a link ranges up to
/// twice its capacity, which must still fit in an `i64`.
pub const MAX_LINK_CAPACITY: i64 = i64::MAX / 2;

/// Smallest accepted node power, so that `|power|` fits in an `i64`.
pub const MIN_NODE_POWER: i64 = -i64::MAX;

/// One entry of a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub neighbor: NodeIndex,
    pub capacity: i64,
}

/// A link with both endpoints resolved to dense indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLink {
    pub a: NodeIndex,
    pub b: NodeIndex,
    pub capacity: i64,
}

/// A validated, immutable grid of producers, consumers and links.
///
/// Node ids from the description may be sparse or negative; they are re-keyed
/// to dense [`NodeIndex`] values in declaration order. Adjacency lists keep
/// link declaration order, which makes every traversal over the grid
/// reproducible.
#[derive(Debug, Clone)]
pub struct EnergyGrid {
    nodes: Vec<NodeDefinition>,
    links: Vec<GridLink>,
    index: AHashMap<NodeId, NodeIndex>,
    adjacency: Vec<Vec<Adjacent>>,
    link_lookup: AHashMap<(NodeIndex, NodeIndex), usize>,
}

impl EnergyGrid {
    /// Validates a definition and builds the indexed grid.
    pub fn new(definition: GridDefinition) -> Result<Self, GridError> {
        let GridDefinition { nodes, links } = definition;

        let mut index = AHashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if node.power == 0 {
                return Err(GridError::ZeroPower { id: node.id });
            }
            if node.power < MIN_NODE_POWER {
                return Err(GridError::PowerOutOfRange {
                    id: node.id,
                    power: node.power,
                    min: MIN_NODE_POWER,
                });
            }
            if index.insert(node.id, position).is_some() {
                return Err(GridError::DuplicateNode { id: node.id });
            }
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut link_lookup = AHashMap::with_capacity(links.len());
        let mut resolved = Vec::with_capacity(links.len());

        for link in &links {
            let grid_link = Self::resolve_link(&index, link)?;
            let key = Self::pair_key(grid_link.a, grid_link.b);
            if link_lookup.insert(key, resolved.len()).is_some() {
                return Err(GridError::ParallelLink {
                    a: link.a,
                    b: link.b,
                });
            }

            adjacency[grid_link.a].push(Adjacent {
                neighbor: grid_link.b,
                capacity: grid_link.capacity,
            });
            adjacency[grid_link.b].push(Adjacent {
                neighbor: grid_link.a,
                capacity: grid_link.capacity,
            });
            resolved.push(grid_link);
        }

        Ok(Self {
            nodes,
            links: resolved,
            index,
            adjacency,
            link_lookup,
        })
    }

    /// Parses the textual grid description and validates it.
    pub fn parse(source: &str) -> Result<Self, GridError> {
        Self::new(parse_grid(source)?)
    }

    /// Reads and parses a grid description from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&source)
    }

    fn resolve_link(
        index: &AHashMap<NodeId, NodeIndex>,
        link: &LinkDefinition,
    ) -> Result<GridLink, GridError> {
        let lookup = |id: NodeId| {
            index
                .get(&id)
                .copied()
                .ok_or_else(|| GridError::UnknownEndpoint {
                    a: link.a,
                    b: link.b,
                    missing: id,
                })
        };
        if link.capacity < 0 {
            return Err(GridError::NegativeCapacity {
                a: link.a,
                b: link.b,
                capacity: link.capacity,
            });
        }
        if link.capacity > MAX_LINK_CAPACITY {
            return Err(GridError::CapacityOutOfRange {
                a: link.a,
                b: link.b,
                capacity: link.capacity,
                max: MAX_LINK_CAPACITY,
            });
        }
        Ok(GridLink {
            a: lookup(link.a)?,
            b: lookup(link.b)?,
            capacity: link.capacity,
        })
    }

    fn pair_key(u: NodeIndex, v: NodeIndex) -> (NodeIndex, NodeIndex) {
        if u <= v { (u, v) } else { (v, u) }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Panics if `index` is out of range.
    pub fn node(&self, index: NodeIndex) -> &NodeDefinition {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[NodeDefinition] {
        &self.nodes
    }

    pub fn links(&self) -> &[GridLink] {
        &self.links
    }

    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&NodeDefinition> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    /// All node indices in declaration order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        0..self.nodes.len()
    }

    pub fn producers(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.with_role(Role::Producer)
    }

    pub fn consumers(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.with_role(Role::Consumer)
    }

    fn with_role(&self, role: Role) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.role() == role)
            .map(|(index, _)| index)
    }

    pub fn is_producer(&self, index: NodeIndex) -> bool {
        self.nodes[index].is_producer()
    }

    /// Neighbors of `index` over both link directions, in link declaration order.
    pub fn adjacent(&self, index: NodeIndex) -> &[Adjacent] {
        &self.adjacency[index]
    }

    /// Capacity of the link joining `u` and `v`, in either direction.
    pub fn link_capacity(&self, u: NodeIndex, v: NodeIndex) -> Option<i64> {
        self.link_lookup
            .get(&Self::pair_key(u, v))
            .map(|&position| self.links[position].capacity)
    }
}
