//! Double-avatar badge composition: a primary circle with a smaller
//! secondary circle tucked against one side.

use serde::{Deserialize, Serialize};

use super::presenter::AvatarSource;
use super::state::{resolve, AvatarState};

/// Side the secondary circle is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorSide {
    Left,
    Right,
}

/// Geometry knobs for the badge. Values are logical pixels except the size
/// percentage, which is a fraction of the primary diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeConfig {
    /// Secondary diameter as a fraction of the primary's. Accepted as-is;
    /// the size computation clamps the multiplier to 1.0.
    pub secondary_size_percentage: f64,
    /// How far the circles overlap.
    pub secondary_overlap: f64,
    /// Side the secondary hangs off.
    pub anchor_side: AnchorSide,
    /// Ring of background between the secondary avatar and its border circle.
    pub secondary_padding: f64,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            secondary_size_percentage: 0.66,
            secondary_overlap: 16.0,
            anchor_side: AnchorSide::Right,
            secondary_padding: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeMode {
    /// Exactly one source present; it occupies the primary position and the
    /// secondary element is suppressed entirely.
    Single,
    Double,
}

/// Position and size of one circle inside the badge's container square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFrame {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeGeometry {
    pub primary: CircleFrame,
    /// `None` in single mode.
    pub secondary: Option<CircleFrame>,
}

/// Fully resolved badge: display states plus geometry for the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeLayout {
    pub primary: AvatarState,
    /// Display state of the secondary element; `None` means the element is
    /// hidden (not merely empty).
    pub secondary: Option<AvatarState>,
    pub mode: BadgeMode,
    pub geometry: BadgeGeometry,
}

/// Compose the badge for the given sources inside a `container`-sized
/// square. Recomputed whenever sources or config change; there is no
/// incremental path.
///
/// Presence rules:
/// - both absent: degenerate double badge of two empty states (the caller
///   may hide the whole element);
/// - exactly one present: that source is promoted into the primary display
///   position, whichever slot it arrived in;
/// - both present: regular double layout.
pub fn compose(
    primary: Option<&AvatarSource>,
    secondary: Option<&AvatarSource>,
    config: &BadgeConfig,
    container: f64,
) -> BadgeLayout {
    let container = container.max(0.0);

    match (primary, secondary) {
        (Some(first), None) | (None, Some(first)) => BadgeLayout {
            primary: resolve(first),
            secondary: None,
            mode: BadgeMode::Single,
            geometry: BadgeGeometry {
                primary: CircleFrame {
                    x: 0.0,
                    y: 0.0,
                    diameter: container,
                },
                secondary: None,
            },
        },
        (primary, secondary) => {
            let primary_state = primary.map(resolve).unwrap_or_default();
            let secondary_state = secondary.map(resolve).unwrap_or_default();
            BadgeLayout {
                primary: primary_state,
                secondary: Some(secondary_state),
                mode: BadgeMode::Double,
                geometry: double_geometry(config, container),
            }
        }
    }
}

/// Solve the two-circle layout.
///
/// The primary diameter follows from requiring the pair to span the
/// container once the configured overlap is folded in:
/// `d * (1 + pct) - overlap = container`. The secondary then sits flush
/// against the anchor side, its top edge overlapping the primary's bottom
/// edge by three quarters of the overlap so it nudges toward the center
/// rather than hanging fully below.
fn double_geometry(config: &BadgeConfig, container: f64) -> BadgeGeometry {
    let pct = config.secondary_size_percentage.max(0.0);
    let overlap = config.secondary_overlap;

    let primary_diameter = ((container + overlap) / (1.0 + pct)).clamp(0.0, container);
    let secondary_diameter = primary_diameter * pct.min(1.0);

    let (primary_x, secondary_x) = match config.anchor_side {
        AnchorSide::Right => (0.0, (container - secondary_diameter).max(0.0)),
        AnchorSide::Left => ((container - primary_diameter).max(0.0), 0.0),
    };

    BadgeGeometry {
        primary: CircleFrame {
            x: primary_x,
            y: 0.0,
            diameter: primary_diameter,
        },
        secondary: Some(CircleFrame {
            x: secondary_x,
            y: primary_diameter - overlap * 0.75,
            diameter: secondary_diameter,
        }),
    }
}
