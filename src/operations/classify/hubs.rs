use crate::error::Result;
use crate::math::Point3;
use crate::topology::{EdgeGraph, VertexId};

/// Hub kind, keyed by valence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HubCategory {
    /// Valence 4.
    Low,
    /// Valence 5, the corners of the base icosahedron.
    Pentagonal,
    /// Valence 6, the usual subdivided interior vertex.
    Hexagonal,
    /// Any other valence.
    Unclassified,
}

impl HubCategory {
    /// Maps a valence onto its category.
    #[must_use]
    pub fn from_valence(valence: usize) -> Self {
        match valence {
            4 => Self::Low,
            5 => Self::Pentagonal,
            6 => Self::Hexagonal,
            _ => Self::Unclassified,
        }
    }

    /// Display color as a hex string.
    #[must_use]
    pub fn hex_color(self) -> &'static str {
        match self {
            Self::Low => "#12a306",
            Self::Pentagonal => "#06a2a3",
            Self::Hexagonal => "#a30000",
            Self::Unclassified => "#ff07f2",
        }
    }
}

/// A retained vertex seen as a physical connector.
#[derive(Debug, Clone, PartialEq)]
pub struct Hub {
    /// The vertex this hub sits on.
    pub vertex: VertexId,
    /// Vertex position at classification time.
    pub position: Point3,
    /// Number of retained struts meeting at the hub.
    pub valence: usize,
    /// Category derived from `valence`.
    pub category: HubCategory,
}

/// Turns every retained vertex into a [`Hub`].
///
/// Valence only counts non-deleted edges, so vertices along the cut come out
/// with a reduced valence.
#[derive(Debug, Default)]
pub struct ClassifyHubs;

impl ClassifyHubs {
    /// Creates a new `ClassifyHubs` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the classification, returning hubs in vertex order.
    ///
    /// Valences outside 4..=6 are logged as warnings and classified as
    /// [`HubCategory::Unclassified`].
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex references an edge missing from the graph.
    pub fn execute(&self, graph: &EdgeGraph) -> Result<Vec<Hub>> {
        let mut hubs = Vec::new();
        for (id, vertex) in graph.retained_vertices() {
            let valence = graph.valence(id)?;
            let category = HubCategory::from_valence(valence);
            if category == HubCategory::Unclassified {
                tracing::warn!(vertex = %id, valence, "hub valence outside 4..=6");
            }
            hubs.push(Hub {
                vertex: id,
                position: vertex.position,
                valence,
                category,
            });
        }
        tracing::debug!(hubs = hubs.len(), "classified hubs");
        Ok(hubs)
    }
}
