//! Presentation contracts: what an avatar is allowed to know about the
//! entity it displays.
//!
//! Callers hand the library an immutable snapshot (`AvatarSource`) or any
//! type implementing [`AvatarPresenter`]; the library never mutates it and
//! re-derives render state from scratch on every update.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use url::Url;

/// Read-only description of what an avatar should display.
///
/// At most one rendering mode wins per resolution pass (see
/// [`crate::core::state::resolve`]); a presenter is free to report several
/// fields and let the precedence rule sort it out.
pub trait AvatarPresenter {
    /// Raw initials text, untrimmed. `None` when the entity has no name.
    fn initials_text(&self) -> Option<String>;
    /// Already-loaded encoded image bytes (PNG/JPEG/…), if any.
    fn image_bytes(&self) -> Option<&[u8]>;
    /// Reference to a remotely hosted image; resolution is the rendering
    /// host's concern.
    fn image_url(&self) -> Option<&Url>;
}

/// Concrete presenter snapshot. This is the value type the layout and
/// component layers pass around.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarSource {
    pub initials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Url>,
}

impl AvatarSource {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_initials<T: Into<String>>(initials: T) -> Self {
        Self {
            initials: Some(initials.into()),
            ..Self::default()
        }
    }

    pub fn with_image(bytes: Vec<u8>) -> Self {
        Self {
            image: Some(bytes),
            ..Self::default()
        }
    }

    pub fn with_image_url(url: Url) -> Self {
        Self {
            image_url: Some(url),
            ..Self::default()
        }
    }

    /// Capture any presenter into a plain snapshot (useful for component
    /// props, which need owned `PartialEq` values).
    pub fn from_presenter(presenter: &impl AvatarPresenter) -> Self {
        Self {
            initials: presenter.initials_text(),
            image: presenter.image_bytes().map(|b| b.to_vec()),
            image_url: presenter.image_url().cloned(),
        }
    }
}

impl AvatarPresenter for AvatarSource {
    fn initials_text(&self) -> Option<String> {
        self.initials.clone()
    }

    fn image_bytes(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }
}

/// Name contract shared by headers and initials derivation.
pub trait NamePresenter {
    fn given_name(&self) -> Option<&str>;
    fn family_name(&self) -> Option<&str>;

    /// Display name: "Given Family", falling back to whichever part exists.
    fn full_name(&self) -> String {
        let given = self.given_name().map(str::trim).unwrap_or_default();
        let family = self.family_name().map(str::trim).unwrap_or_default();
        match (given.is_empty(), family.is_empty()) {
            (true, true) => String::new(),
            (false, true) => given.to_string(),
            (true, false) => family.to_string(),
            (false, false) => format!("{given} {family}"),
        }
    }

    /// One or two uppercased letters, first of each present name part.
    /// `None` when neither part yields a character.
    fn initials(&self) -> Option<String> {
        let mut initials = String::new();
        for part in [self.given_name(), self.family_name()] {
            if let Some(ch) = part.and_then(|name| name.trim().chars().next()) {
                initials.extend(ch.to_uppercase());
            }
        }
        if initials.is_empty() {
            None
        } else {
            Some(initials)
        }
    }
}

/// Demo-friendly person value implementing both contracts. Initials are
/// derived from the name parts; explicit image data wins over the URL per
/// the standard resolution precedence.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Url>,
}

impl Person {
    pub fn named<T: Into<String>>(given: T, family: T) -> Self {
        Self {
            given_name: Some(given.into()),
            family_name: Some(family.into()),
            ..Self::default()
        }
    }
}

impl NamePresenter for Person {
    fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }
}

impl AvatarPresenter for Person {
    fn initials_text(&self) -> Option<String> {
        NamePresenter::initials(self)
    }

    fn image_bytes(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }
}

/// Sort by display name. Stable: entries whose names tie keep their order.
pub fn sorted_by_name<T: NamePresenter + Clone>(items: &[T], ascending: bool) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| directed(a.full_name().cmp(&b.full_name()), ascending));
    sorted
}

/// Sort by given name; entries missing a given name keep their relative order.
pub fn sorted_by_given_name<T: NamePresenter + Clone>(items: &[T], ascending: bool) -> Vec<T> {
    sorted_by_part(items, ascending, |item| item.given_name())
}

/// Sort by family name; entries missing a family name keep their relative order.
pub fn sorted_by_family_name<T: NamePresenter + Clone>(items: &[T], ascending: bool) -> Vec<T> {
    sorted_by_part(items, ascending, |item| item.family_name())
}

fn sorted_by_part<T, F>(items: &[T], ascending: bool, part: F) -> Vec<T>
where
    T: NamePresenter + Clone,
    F: Fn(&T) -> Option<&str>,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| match (nonempty(part(a)), nonempty(part(b))) {
        (Some(first), Some(second)) => directed(first.cmp(second), ascending),
        _ => Ordering::Equal,
    });
    sorted
}

fn nonempty(part: Option<&str>) -> Option<&str> {
    part.filter(|name| !name.is_empty())
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_part() {
        let person = Person::named("Ada", "Lovelace");
        assert_eq!(person.initials(), Some("AL".to_string()));
    }

    #[test]
    fn initials_from_single_part() {
        let person = Person {
            family_name: Some("Hopper".into()),
            ..Person::default()
        };
        assert_eq!(person.initials(), Some("H".to_string()));
    }

    #[test]
    fn initials_absent_without_names() {
        assert_eq!(Person::default().initials(), None);
    }

    #[test]
    fn full_name_falls_back_to_present_part() {
        let person = Person {
            given_name: Some("Grace".into()),
            ..Person::default()
        };
        assert_eq!(person.full_name(), "Grace");
        assert_eq!(Person::named("Grace", "Hopper").full_name(), "Grace Hopper");
    }

    #[test]
    fn sorted_by_name_orders_both_directions() {
        let people = vec![Person::named("Niklaus", "Wirth"), Person::named("Ada", "Lovelace")];
        let ascending = sorted_by_name(&people, true);
        assert_eq!(ascending[0].given_name.as_deref(), Some("Ada"));
        let descending = sorted_by_name(&people, false);
        assert_eq!(descending[0].given_name.as_deref(), Some("Niklaus"));
    }

    #[test]
    fn sorted_by_given_name_keeps_unnamed_in_place() {
        let people = vec![
            Person::named("Niklaus", "Wirth"),
            Person::default(),
            Person::named("Ada", "Lovelace"),
        ];
        let sorted = sorted_by_given_name(&people, true);
        // The unnamed entry never moves ahead of entries it was behind.
        assert_eq!(sorted[0].given_name.as_deref(), Some("Ada"));
        assert!(sorted.iter().any(|p| p.given_name.is_none()));
    }

    #[test]
    fn snapshot_captures_presenter_fields() {
        let person = Person::named("Ada", "Lovelace");
        let source = AvatarSource::from_presenter(&person);
        assert_eq!(source.initials.as_deref(), Some("AL"));
        assert!(source.image.is_none());
    }
}
