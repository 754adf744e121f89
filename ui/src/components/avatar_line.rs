//! Horizontal line of overlapping avatars with an overflow marker.

use dioxus::prelude::*;

use crate::components::Avatar;
use crate::core::line::{layout, LineConfig};
use crate::core::presenter::AvatarSource;
use crate::core::style::AvatarStyle;

#[component]
pub fn AvatarLine(
    sources: Vec<AvatarSource>,
    #[props(default)] config: LineConfig,
    #[props(default)] style: AvatarStyle,
    diameter: f64,
) -> Element {
    let slots = layout(&sources, &config);

    rsx! {
        div { class: "avatar-line",
            for (position, slot) in slots.into_iter().enumerate() {
                div {
                    key: "{slot.index}",
                    class: "avatar-line__slot",
                    style: if position > 0 {
                        format!("margin-left:-{}px;", config.overlap)
                    } else {
                        String::new()
                    },
                    Avatar {
                        state: slot.state(),
                        style: style.clone(),
                        diameter,
                    }
                }
            }
        }
    }
}
