//! Target inference - fills out the attributes an utterance omitted
//!
//! "take funk air and bat" never repeats the modifier on the second target;
//! the resolver infers that "bat" reuses the chain established by "funk
//! air". Each attribute of a primitive falls back independently: own value,
//! then the nearest value in the preceding targets, then a hardcoded
//! default. Modifier chains are inherited whole, never merged element by
//! element.

use crate::core::error::{Result, TargetError};
use crate::target::descriptor::{
    Endpoint, ListTarget, Mark, Modifier, PartialEndpoint, PartialListTarget,
    PartialPrimitiveTarget, PartialRangeTarget, PartialTarget, PositionModifier, PrimitiveTarget,
    RangeTarget, Target,
};

/// Resolve one parsed command's partial targets into fully specified ones
///
/// Context for the target at position `i` is the targets at `0..i`, still
/// in partial form: later targets inherit omitted attributes from earlier
/// ones, never the other way around. Fails on the first structurally
/// invalid modifier chain with no partial output.
pub fn resolve_targets(targets: &[PartialTarget]) -> Result<Vec<Target>> {
    tracing::debug!("Resolving {} partial targets", targets.len());

    let mut context: Vec<ContextEntry> = Vec::with_capacity(targets.len());
    let mut resolved = Vec::with_capacity(targets.len());

    for target in targets {
        resolved.push(resolve_target(target, &context)?);
        context.push(target.into());
    }

    Ok(resolved)
}

/// Borrowed view of one preceding target, uniform across nesting levels
///
/// Context grows by appending copies of references into the original
/// input; the input itself is never cloned or mutated.
#[derive(Clone, Copy)]
enum ContextEntry<'a> {
    Primitive(&'a PartialPrimitiveTarget),
    Range(&'a PartialRangeTarget),
    List(&'a PartialListTarget),
}

impl<'a> From<&'a PartialTarget> for ContextEntry<'a> {
    fn from(target: &'a PartialTarget) -> Self {
        match target {
            PartialTarget::Primitive(primitive) => Self::Primitive(primitive),
            PartialTarget::Range(range) => Self::Range(range),
            PartialTarget::List(list) => Self::List(list),
        }
    }
}

impl<'a> From<&'a PartialEndpoint> for ContextEntry<'a> {
    fn from(endpoint: &'a PartialEndpoint) -> Self {
        match endpoint {
            PartialEndpoint::Primitive(primitive) => Self::Primitive(primitive),
            PartialEndpoint::Range(range) => Self::Range(range),
        }
    }
}

fn resolve_target(target: &PartialTarget, context: &[ContextEntry<'_>]) -> Result<Target> {
    match target {
        PartialTarget::Primitive(primitive) => {
            Ok(Target::Primitive(resolve_primitive(primitive, context)?))
        }
        PartialTarget::Range(range) => Ok(Target::Range(resolve_range(range, context)?)),
        PartialTarget::List(list) => Ok(Target::List(resolve_list(list, context)?)),
    }
}

/// Earlier list elements become context for later ones, exactly like
/// top-level targets
fn resolve_list(list: &PartialListTarget, context: &[ContextEntry<'_>]) -> Result<ListTarget> {
    let mut scope = context.to_vec();
    let mut elements = Vec::with_capacity(list.elements.len());

    for element in &list.elements {
        elements.push(resolve_endpoint(element, &scope)?);
        scope.push(element.into());
    }

    Ok(ListTarget { elements })
}

fn resolve_endpoint(endpoint: &PartialEndpoint, context: &[ContextEntry<'_>]) -> Result<Endpoint> {
    match endpoint {
        PartialEndpoint::Primitive(primitive) => {
            Ok(Endpoint::Primitive(resolve_primitive(primitive, context)?))
        }
        PartialEndpoint::Range(range) => Ok(Endpoint::Range(resolve_range(range, context)?)),
    }
}

fn resolve_range(range: &PartialRangeTarget, context: &[ContextEntry<'_>]) -> Result<RangeTarget> {
    let anchor = resolve_primitive(&range.anchor, context)?;

    // The anchor, once spoken, is context for the active endpoint: in
    // "air past bat" an incomplete "bat" inherits from "air".
    let mut active_context = context.to_vec();
    active_context.push(ContextEntry::Primitive(&range.anchor));
    let active = resolve_primitive(&range.active, &active_context)?;

    Ok(RangeTarget {
        exclude_anchor: range.exclude_anchor.unwrap_or(false),
        exclude_active: range.exclude_active.unwrap_or(false),
        range_type: range.range_type.unwrap_or_default(),
        anchor,
        active,
    })
}

fn resolve_primitive(
    target: &PartialPrimitiveTarget,
    context: &[ContextEntry<'_>],
) -> Result<PrimitiveTarget> {
    if target.is_implicit {
        // No spoken content at all: whatever is currently selected,
        // treated as a plain range.
        return Ok(PrimitiveTarget {
            mark: Mark::Cursor,
            modifiers: vec![Modifier::ToRawSelection],
            position_modifier: None,
        });
    }

    let own_position = own_position_modifier(target)?;
    let own_modifiers = own_non_position_modifiers(target);

    // A primitive that names its own position ("past end of line") is a
    // location, not a reusable referent: it skips mark inheritance and
    // falls straight to the cursor. A position inherited from context does
    // not block inheritance. Known-unsettled upstream; see DESIGN.md.
    let mark = match target.mark.clone() {
        Some(mark) => mark,
        None if own_position.is_none() => {
            previous_attribute(context, &|p: &PartialPrimitiveTarget| Ok(p.mark.clone()))?
                .unwrap_or(Mark::Cursor)
        }
        None => Mark::Cursor,
    };

    let modifiers = match own_modifiers {
        Some(modifiers) => modifiers,
        None => previous_attribute(context, &|p: &PartialPrimitiveTarget| {
            Ok(inheritable_modifiers(p))
        })?
        .unwrap_or_default(),
    };

    let position_modifier = match own_position {
        Some(modifier) => Some(modifier),
        None => previous_attribute(context, &own_position_modifier)?,
    };

    Ok(PrimitiveTarget {
        mark,
        modifiers,
        position_modifier,
    })
}

/// A target's own position modifier, validating that it leads the chain
fn own_position_modifier(target: &PartialPrimitiveTarget) -> Result<Option<PositionModifier>> {
    let Some(modifiers) = &target.modifiers else {
        return Ok(None);
    };

    for (index, modifier) in modifiers.iter().enumerate() {
        if let Modifier::Position(position) = modifier {
            if index > 0 {
                return Err(TargetError::MisplacedPositionModifier);
            }
            return Ok(Some(*position));
        }
    }

    Ok(None)
}

/// Non-position modifiers the target itself supplies
///
/// `None` when the target carries no modifiers at all. A chain holding
/// only a position modifier still counts as supplied, with an empty
/// remainder.
fn own_non_position_modifiers(target: &PartialPrimitiveTarget) -> Option<Vec<Modifier>> {
    let modifiers = target.modifiers.as_deref()?;
    if modifiers.is_empty() {
        return None;
    }

    Some(
        modifiers
            .iter()
            .filter(|modifier| !modifier.is_position())
            .cloned()
            .collect(),
    )
}

/// Chain a context target offers for inheritance: only a chain that still
/// holds something after stripping positions can be inherited
fn inheritable_modifiers(target: &PartialPrimitiveTarget) -> Option<Vec<Modifier>> {
    own_non_position_modifiers(target).filter(|modifiers| !modifiers.is_empty())
}

/// Walk the context from most to least recent, returning the first
/// attribute the extractor yields
///
/// A range is represented by its anchor, the referential head; its active
/// endpoint is never consulted. A list is searched through its elements,
/// last to first. The same walk serves mark, modifier-chain, and position
/// lookup; only the extractor differs.
fn previous_attribute<T>(
    context: &[ContextEntry<'_>],
    extract: &impl Fn(&PartialPrimitiveTarget) -> Result<Option<T>>,
) -> Result<Option<T>> {
    for entry in context.iter().rev() {
        let found = match entry {
            ContextEntry::Primitive(primitive) => extract(primitive)?,
            ContextEntry::Range(range) => extract(&range.anchor)?,
            ContextEntry::List(list) => {
                let elements: Vec<ContextEntry<'_>> =
                    list.elements.iter().map(ContextEntry::from).collect();
                previous_attribute(&elements, extract)?
            }
        };
        if found.is_some() {
            return Ok(found);
        }
    }

    Ok(None)
}
