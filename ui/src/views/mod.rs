mod home;
pub use home::Home;

mod line;
pub use line::Line;

mod badge;
pub use badge::Badge;

mod picker;
pub use picker::Picker;

use crate::core::presenter::Person;

/// Shared sample people for the demo pages.
pub(crate) fn sample_people() -> Vec<Person> {
    vec![
        Person::named("Ada", "Lovelace"),
        Person::named("Grace", "Hopper"),
        Person {
            given_name: Some("Edsger".into()),
            family_name: Some("Dijkstra".into()),
            image: Some(SAMPLE_PORTRAIT.as_bytes().to_vec()),
            image_url: None,
        },
        Person::named("Barbara", "Liskov"),
        Person::named("Niklaus", "Wirth"),
    ]
}

/// Tiny embedded portrait so image avatars work without any network.
pub(crate) const SAMPLE_PORTRAIT: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='96' height='96'>\
<rect width='96' height='96' fill='#4a7b62'/>\
<circle cx='48' cy='38' r='16' fill='#e8eced'/>\
<ellipse cx='48' cy='78' rx='26' ry='18' fill='#e8eced'/>\
</svg>";
