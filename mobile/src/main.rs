use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Badge, Home, Line, Picker};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
    #[route("/")]
    Home {},
    #[route("/line")]
    Line {},
    #[route("/badge")]
    Badge {},
    #[route("/picker")]
    Picker {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_line(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Line {}, "{label}" })
}
fn nav_badge(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Badge {}, "{label}" })
}
fn nav_picker(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Picker {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        line: nav_line,
        badge: nav_badge,
        picker: nav_picker,
    });

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> {}
        }
    }
}

#[component]
fn MobileNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
