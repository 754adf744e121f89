use dioxus::prelude::*;

use crate::components::{Avatar, AvatarHeader};
use crate::core::presenter::{AvatarSource, Person};
use crate::core::state::{resolve, AvatarState};
use crate::core::style::AvatarStyle;
use crate::snapshot::SnapshotPanel;

use super::{sample_people, SAMPLE_PORTRAIT};

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    let style = AvatarStyle::default();
    let initials_state = resolve(&AvatarSource::with_initials("Jo"));
    let placeholder_state = resolve(&AvatarSource::with_initials("A-1"));
    let image_state = resolve(&AvatarSource::with_image(
        SAMPLE_PORTRAIT.as_bytes().to_vec(),
    ));
    let empty_state = AvatarState::Empty;

    let header_person: Person = sample_people().remove(0);

    rsx! {
        // Hidden marker node ensures reactive dependency on language signal.
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__features",
                li { {crate::t!("home-feature-avatar")} }
                li { {crate::t!("home-feature-line")} }
                li { {crate::t!("home-feature-badge")} }
                li { {crate::t!("home-feature-picker")} }
            }

            div { class: "gallery-row",
                figure { class: "gallery-item",
                    Avatar { state: initials_state.clone(), style: style.clone(), diameter: 64.0 }
                    figcaption { "Initials" }
                }
                figure { class: "gallery-item",
                    Avatar { state: placeholder_state, style: style.clone(), diameter: 64.0 }
                    figcaption { "Undisplayable name" }
                }
                figure { class: "gallery-item",
                    Avatar { state: image_state, style: style.clone(), diameter: 64.0 }
                    figcaption { "Image" }
                }
                figure { class: "gallery-item",
                    Avatar { state: empty_state, style: style.clone(), diameter: 64.0 }
                    figcaption { "Empty" }
                }
            }

            AvatarHeader { person: Some(header_person) }

            SnapshotPanel { state: initials_state, style, diameter: 256.0 }

            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
