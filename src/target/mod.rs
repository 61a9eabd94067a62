//! Target resolution pipeline
//!
//! Converts parser output into executor input:
//! `Vec<PartialTarget>` -> `resolve_targets` -> `Vec<Target>`

pub mod descriptor;
pub mod resolver;

pub use descriptor::{
    parse_targets, Endpoint, ListTarget, Mark, Modifier, PartialEndpoint, PartialListTarget,
    PartialPrimitiveTarget, PartialRangeTarget, PartialTarget, PositionModifier, PrimitiveTarget,
    RangeKind, RangeTarget, ScopeKind, Target, TargetPosition,
};
pub use resolver::resolve_targets;
