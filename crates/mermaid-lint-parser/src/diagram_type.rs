//! Recognized diagram-type keywords.
//!
//! Classification compares the first line of a block against
//! [`DiagramType::ALL`] top to bottom. Several keywords are prefixes of
//! others (`stateDiagram` / `stateDiagram-v2`), so the list is ordered with
//! the more specific keyword first and must stay an ordered slice.

use std::{cmp::Ordering, fmt};

use serde::{Serialize, Serializer};

/// Number of keywords listed in the "valid types" hint.
const HINT_LEN: usize = 8;

/// A declared Mermaid diagram kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramType {
    Graph,
    Flowchart,
    Sequence,
    Class,
    StateV2,
    State,
    EntityRelationship,
    Journey,
    Gantt,
    Pie,
    Quadrant,
    Requirement,
    GitGraph,
    Mindmap,
    Timeline,
    ZenUml,
    Sankey,
    XyChart,
    Block,
}

impl DiagramType {
    /// All diagram types in classification order.
    pub const ALL: [DiagramType; 19] = [
        DiagramType::Graph,
        DiagramType::Flowchart,
        DiagramType::Sequence,
        DiagramType::Class,
        DiagramType::StateV2,
        DiagramType::State,
        DiagramType::EntityRelationship,
        DiagramType::Journey,
        DiagramType::Gantt,
        DiagramType::Pie,
        DiagramType::Quadrant,
        DiagramType::Requirement,
        DiagramType::GitGraph,
        DiagramType::Mindmap,
        DiagramType::Timeline,
        DiagramType::ZenUml,
        DiagramType::Sankey,
        DiagramType::XyChart,
        DiagramType::Block,
    ];

    /// The keyword that declares this diagram type.
    pub fn keyword(&self) -> &'static str {
        match self {
            DiagramType::Graph => "graph",
            DiagramType::Flowchart => "flowchart",
            DiagramType::Sequence => "sequenceDiagram",
            DiagramType::Class => "classDiagram",
            DiagramType::StateV2 => "stateDiagram-v2",
            DiagramType::State => "stateDiagram",
            DiagramType::EntityRelationship => "erDiagram",
            DiagramType::Journey => "journey",
            DiagramType::Gantt => "gantt",
            DiagramType::Pie => "pie",
            DiagramType::Quadrant => "quadrantChart",
            DiagramType::Requirement => "requirementDiagram",
            DiagramType::GitGraph => "gitGraph",
            DiagramType::Mindmap => "mindmap",
            DiagramType::Timeline => "timeline",
            DiagramType::ZenUml => "zenuml",
            DiagramType::Sankey => "sankey-beta",
            DiagramType::XyChart => "xychart-beta",
            DiagramType::Block => "block-beta",
        }
    }

    /// Classify a header line by its leading keyword.
    ///
    /// Matching is a case-sensitive prefix test, so `graph LR` and `graphLR`
    /// both classify as [`DiagramType::Graph`].
    pub fn detect(line: &str) -> Option<DiagramType> {
        Self::ALL
            .into_iter()
            .find(|diagram_type| line.starts_with(diagram_type.keyword()))
    }

    /// Returns `true` for the node-and-edge kinds (`graph`, `flowchart`).
    pub fn is_graph(&self) -> bool {
        matches!(self, DiagramType::Graph | DiagramType::Flowchart)
    }

    /// Comma-separated keywords shown when a block cannot be classified.
    pub fn hint() -> String {
        Self::ALL[..HINT_LEN]
            .iter()
            .map(DiagramType::keyword)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// Reports sort diagram types by keyword, not by classification order.
impl Ord for DiagramType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.keyword().cmp(other.keyword())
    }
}

impl PartialOrd for DiagramType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for DiagramType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.keyword())
    }
}
