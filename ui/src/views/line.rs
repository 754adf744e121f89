use dioxus::prelude::*;

use crate::components::AvatarLine;
use crate::core::line::LineConfig;
use crate::core::presenter::AvatarSource;

use super::sample_people;

#[component]
pub fn Line() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut people = use_signal(sample_people);
    let mut max_circles = use_signal(|| 3usize);
    let mut prefer_images = use_signal(|| false);

    let sources: Vec<AvatarSource> = people()
        .iter()
        .map(AvatarSource::from_presenter)
        .collect();
    let config = LineConfig {
        max_circles: max_circles(),
        prefer_image_avatars: prefer_images(),
        ..LineConfig::default()
    };

    let add_person = move |_| {
        people.with_mut(|list| {
            // Cycle through the sample pool so the line keeps growing.
            let next = sample_people()[list.len() % sample_people().len()].clone();
            list.push(next);
        });
    };
    let remove_person = move |_| {
        people.with_mut(|list| {
            list.pop();
        });
    };

    let on_max = move |evt: FormEvent| {
        if let Ok(value) = evt.value().parse::<usize>() {
            max_circles.set(value.max(1));
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-line",
            h1 { {crate::t!("page-line-title")} }
            p { {crate::t!("page-line-intro")} }

            div { class: "playground__canvas",
                AvatarLine {
                    sources,
                    config,
                    diameter: 56.0,
                }
            }

            div { class: "playground__controls",
                button { r#type: "button", class: "button", onclick: add_person, "Add person" }
                button { r#type: "button", class: "button button--ghost", onclick: remove_person, "Remove last" }
                label { class: "playground__control",
                    "Max circles"
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{max_circles()}",
                        oninput: on_max,
                    }
                }
                label { class: "playground__control",
                    input {
                        r#type: "checkbox",
                        checked: prefer_images(),
                        oninput: move |evt: FormEvent| prefer_images.set(evt.checked()),
                    }
                    "Prefer image avatars"
                }
            }

            p { class: "playground__meta",
                "{people().len()} people in the line"
            }
        }
    }
}
