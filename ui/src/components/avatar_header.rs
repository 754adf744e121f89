//! Hairline-ruled header row: avatar plus the person's display name.

use dioxus::prelude::*;

use crate::components::Avatar;
use crate::core::presenter::{AvatarSource, NamePresenter, Person};
use crate::core::state::resolve;
use crate::core::style::{AvatarStyle, HeaderStyle};

#[component]
pub fn AvatarHeader(
    #[props(default)] person: Option<Person>,
    #[props(default)] style: HeaderStyle,
    #[props(default)] avatar_style: AvatarStyle,
) -> Element {
    // No person means an empty avatar and a blank label, mirroring reset().
    let (state, name) = match &person {
        Some(person) => (
            resolve(&AvatarSource::from_presenter(person)),
            person.full_name(),
        ),
        None => (resolve(&AvatarSource::empty()), String::new()),
    };

    let rule_style = format!(
        "height:{}px;background:{};",
        style.rule_width,
        style.border_color.css(),
    );
    let row_style = format!("min-height:{}px;gap:{}px;", style.inner_height, style.inner_margin);
    let name_style = format!(
        "color:{};font-size:{}px;",
        style.text_color.css(),
        style.font_size,
    );

    rsx! {
        header { class: "avatar-header",
            div { class: "avatar-header__rule", style: "{rule_style}" }
            div { class: "avatar-header__row", style: "{row_style}",
                Avatar {
                    state,
                    style: avatar_style,
                    diameter: style.inner_height,
                }
                span { class: "avatar-header__name", style: "{name_style}", "{name}" }
            }
            div { class: "avatar-header__rule", style: "{rule_style}" }
        }
    }
}
