//! Double-avatar badge adapter: absolute positioning over the geometry
//! computed in `core::badge`.

use dioxus::prelude::*;

use crate::components::Avatar;
use crate::core::badge::{compose, BadgeConfig};
use crate::core::presenter::AvatarSource;
use crate::core::style::AvatarStyle;

#[component]
pub fn DoubleAvatar(
    #[props(default)] primary: Option<AvatarSource>,
    #[props(default)] secondary: Option<AvatarSource>,
    #[props(default)] config: BadgeConfig,
    #[props(default)] style: AvatarStyle,
    container: f64,
) -> Element {
    let badge = compose(primary.as_ref(), secondary.as_ref(), &config, container);
    let primary_frame = badge.geometry.primary;
    let primary_style = format!("left:{}px;top:{}px;", primary_frame.x, primary_frame.y);

    // In single mode the secondary element is suppressed entirely, not
    // rendered empty.
    let secondary_slot = match (badge.secondary, badge.geometry.secondary) {
        (Some(state), Some(frame)) => {
            let ring_style = format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;background:{};padding:{}px;",
                frame.x,
                frame.y,
                frame.diameter,
                frame.diameter,
                style.spacing_color.css(),
                config.secondary_padding,
            );
            let inner = (frame.diameter - config.secondary_padding * 2.0).max(0.0);
            rsx! {
                div { class: "avatar-badge__secondary", style: "{ring_style}",
                    Avatar {
                        state,
                        style: style.clone(),
                        diameter: inner,
                    }
                }
            }
        }
        _ => rsx! {},
    };

    rsx! {
        div {
            class: "avatar-badge",
            style: "width:{container}px;height:{container}px;",
            div {
                class: "avatar-badge__primary",
                style: "{primary_style}",
                Avatar {
                    state: badge.primary,
                    style: style.clone(),
                    diameter: primary_frame.diameter,
                }
            }
            {secondary_slot}
        }
    }
}
