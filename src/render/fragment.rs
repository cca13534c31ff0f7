//! Rendered nodes and the fragments that carry them into the render region.

use super::template::{Affordance, TemplateNode};

/// Tone of a notice block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Info,
}

/// One top-level element of the render region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A character card built from the card template.
    Card(TemplateNode),
    /// A film or series title built from the episode template.
    Episode(TemplateNode),
    /// The facet buttons shown above a character's detail.
    DetailButtons(Vec<Affordance>),
    /// A message block.
    Notice { tone: Tone, text: String },
}

/// An ordered batch of nodes built off-region and appended in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl FromIterator<Node> for Fragment {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
