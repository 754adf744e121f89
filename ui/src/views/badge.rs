use dioxus::prelude::*;

use crate::components::DoubleAvatar;
use crate::core::badge::{AnchorSide, BadgeConfig};
use crate::core::presenter::{AvatarSource, Person};

use super::sample_people;

#[component]
pub fn Badge() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut show_primary = use_signal(|| true);
    let mut show_secondary = use_signal(|| true);
    let mut on_right = use_signal(|| true);
    let mut size_percentage = use_signal(|| 0.66f64);

    let people = sample_people();
    let primary_person: &Person = &people[0];
    let secondary_person: &Person = &people[2];

    let primary = show_primary().then(|| AvatarSource::from_presenter(primary_person));
    let secondary = show_secondary().then(|| AvatarSource::from_presenter(secondary_person));

    let config = BadgeConfig {
        secondary_size_percentage: size_percentage(),
        anchor_side: if on_right() {
            AnchorSide::Right
        } else {
            AnchorSide::Left
        },
        ..BadgeConfig::default()
    };

    let on_percentage = move |evt: FormEvent| {
        if let Ok(value) = evt.value().parse::<f64>() {
            size_percentage.set(value.max(0.0));
        }
    };

    // Configs serialize; show the live one so the playground doubles as
    // documentation.
    let config_json = serde_json::to_string_pretty(&config).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-badge",
            h1 { {crate::t!("page-badge-title")} }
            p { {crate::t!("page-badge-intro")} }

            div { class: "playground__canvas",
                DoubleAvatar {
                    primary,
                    secondary,
                    config,
                    container: 140.0,
                }
            }

            div { class: "playground__controls",
                label { class: "playground__control",
                    input {
                        r#type: "checkbox",
                        checked: show_primary(),
                        oninput: move |evt: FormEvent| show_primary.set(evt.checked()),
                    }
                    "Primary"
                }
                label { class: "playground__control",
                    input {
                        r#type: "checkbox",
                        checked: show_secondary(),
                        oninput: move |evt: FormEvent| show_secondary.set(evt.checked()),
                    }
                    "Secondary"
                }
                label { class: "playground__control",
                    input {
                        r#type: "checkbox",
                        checked: on_right(),
                        oninput: move |evt: FormEvent| on_right.set(evt.checked()),
                    }
                    "Anchor right"
                }
                label { class: "playground__control",
                    "Secondary size"
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: "{size_percentage()}",
                        oninput: on_percentage,
                    }
                }
            }

            pre { class: "playground__meta", "{config_json}" }
        }
    }
}
