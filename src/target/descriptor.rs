//! Target descriptors exchanged with the command parser and the executor
//!
//! Partial descriptors arrive from the parser with fields omitted wherever
//! the utterance left them out. Resolved descriptors leave with every field
//! populated. The wire shape is the parser's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Identifies what a target points at
///
/// Opaque to resolution: the resolver checks presence, never the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    /// The current cursor position
    Cursor,
    /// The target of the previous command
    That,
    /// The source of the previous bring or move
    Source,
    /// An empty selection
    Nothing,
    /// A hat-decorated character on screen ("air", "bat", ...)
    #[serde(rename_all = "camelCase")]
    DecoratedSymbol { symbol_color: String, character: char },
}

/// Transformation applied to a mark to derive the final range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Modifier {
    /// Relative location qualifier; must lead its modifier chain
    Position(PositionModifier),
    /// Expand to the containing scope ("funk", "line", ...)
    #[serde(rename_all = "camelCase")]
    ContainingScope { scope_kind: ScopeKind },
    /// Expand to every matching scope in the surrounding iteration scope
    #[serde(rename_all = "camelCase")]
    EveryScope { scope_kind: ScopeKind },
    /// Collapse the target to a raw selection with no scope semantics
    ToRawSelection,
    /// Interior of the surrounding delimiter pair
    Interior,
    /// Extend through line head and tail
    HeadTail,
}

impl Modifier {
    pub fn is_position(&self) -> bool {
        matches!(self, Modifier::Position(_))
    }
}

/// Positional qualifier on a target ("before", "after", "start of", "end of")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionModifier {
    pub position: TargetPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetPosition {
    Before,
    After,
    Start,
    End,
}

/// Language scope a modifier expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeKind {
    Word,
    Token,
    Line,
    Sentence,
    Paragraph,
    NamedFunction,
}

/// How a range target spans its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeKind {
    /// One contiguous span from anchor to active
    Continuous,
    /// One range per line, anchor column to active column
    Vertical,
}

impl Default for RangeKind {
    fn default() -> Self {
        Self::Continuous
    }
}

/// Partially specified target as produced by the command parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PartialTarget {
    Primitive(PartialPrimitiveTarget),
    Range(PartialRangeTarget),
    List(PartialListTarget),
}

/// List element: anything but another list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PartialEndpoint {
    Primitive(PartialPrimitiveTarget),
    Range(PartialRangeTarget),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialPrimitiveTarget {
    /// True for targets with no spoken content at all (a bare "it")
    #[serde(default)]
    pub is_implicit: bool,
    pub mark: Option<Mark>,
    pub modifiers: Option<Vec<Modifier>>,
}

impl PartialPrimitiveTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// A target with no spoken content; always resolves to the cursor as a
    /// raw selection
    pub fn implicit() -> Self {
        Self {
            is_implicit: true,
            ..Self::default()
        }
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.mark = Some(mark);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = Some(modifiers);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialRangeTarget {
    pub anchor: PartialPrimitiveTarget,
    pub active: PartialPrimitiveTarget,
    pub exclude_anchor: Option<bool>,
    pub exclude_active: Option<bool>,
    pub range_type: Option<RangeKind>,
}

impl PartialRangeTarget {
    pub fn new(anchor: PartialPrimitiveTarget, active: PartialPrimitiveTarget) -> Self {
        Self {
            anchor,
            active,
            exclude_anchor: None,
            exclude_active: None,
            range_type: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialListTarget {
    pub elements: Vec<PartialEndpoint>,
}

/// Fully specified target, ready for the executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Target {
    Primitive(PrimitiveTarget),
    Range(RangeTarget),
    List(ListTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Endpoint {
    Primitive(PrimitiveTarget),
    Range(RangeTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveTarget {
    pub mark: Mark,
    pub modifiers: Vec<Modifier>,
    pub position_modifier: Option<PositionModifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeTarget {
    pub exclude_anchor: bool,
    pub exclude_active: bool,
    pub range_type: RangeKind,
    pub anchor: PrimitiveTarget,
    pub active: PrimitiveTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTarget {
    pub elements: Vec<Endpoint>,
}

/// Deserialize one parsed command's targets from the parser payload
pub fn parse_targets(payload: &str) -> Result<Vec<PartialTarget>> {
    let targets: Vec<PartialTarget> = serde_json::from_str(payload)?;
    tracing::debug!("Parsed {} partial targets from payload", targets.len());
    Ok(targets)
}
