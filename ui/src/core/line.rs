//! Slot layout for a horizontal line of overlapping avatars.

use serde::{Deserialize, Serialize};

use super::presenter::AvatarSource;
use super::state::{resolve, AvatarState};

/// Configuration for a line of stacked avatars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Maximum circles rendered, overflow slot included. Values below 1 are
    /// treated as 1.
    pub max_circles: usize,
    /// When set, initials-only avatars are filtered out if at least one
    /// image-bearing avatar remains.
    pub prefer_image_avatars: bool,
    /// Horizontal overlap between neighbouring circles, in logical pixels.
    pub overlap: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            max_circles: 3,
            prefer_image_avatars: false,
            overlap: 10.0,
        }
    }
}

/// One rendered position in the line.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub kind: SlotKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotKind {
    /// A regular avatar; `None` is the empty placeholder keeping the line's
    /// silhouette when there are no entities at all.
    Avatar(Option<AvatarSource>),
    /// "+N more" marker covering this position and everything after it.
    Overflow(usize),
}

impl Slot {
    /// Display state for this slot. Overflow renders its count as literal
    /// text, bypassing initials resolution.
    pub fn state(&self) -> AvatarState {
        match &self.kind {
            SlotKind::Avatar(Some(source)) => resolve(source),
            SlotKind::Avatar(None) => AvatarState::Empty,
            SlotKind::Overflow(count) => AvatarState::initials(format!("+{count}")),
        }
    }
}

/// Compute the ordered slot sequence for `sources`.
///
/// Full recompute per call; the input is never mutated and output order
/// follows input order. With more sources than `max_circles`, the last
/// visible position becomes an overflow slot counting itself plus the rest.
pub fn layout(sources: &[AvatarSource], config: &LineConfig) -> Vec<Slot> {
    let max_circles = config.max_circles.max(1);
    let visible = preferred(sources, config);

    if visible.is_empty() {
        return vec![Slot {
            index: 0,
            kind: SlotKind::Avatar(None),
        }];
    }

    let mut slots = Vec::with_capacity(visible.len().min(max_circles));
    for (index, source) in visible.iter().enumerate() {
        if visible.len() > max_circles && index >= max_circles - 1 {
            slots.push(Slot {
                index,
                kind: SlotKind::Overflow(visible.len() - index),
            });
            break;
        }
        slots.push(Slot {
            index,
            kind: SlotKind::Avatar(Some((*source).clone())),
        });
    }
    slots
}

/// Apply `prefer_image_avatars`: drop initials-only sources, but only when
/// an image-bearing source survives.
fn preferred<'a>(sources: &'a [AvatarSource], config: &LineConfig) -> Vec<&'a AvatarSource> {
    if config.prefer_image_avatars {
        let with_images: Vec<&AvatarSource> = sources
            .iter()
            .filter(|source| matches!(resolve(*source), AvatarState::Image(_)))
            .collect();
        if !with_images.is_empty() {
            return with_images;
        }
    }
    sources.iter().collect()
}
