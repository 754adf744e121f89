//! The single circular avatar.
//!
//! Pure rendering: the caller resolves its presenter into an
//! [`AvatarState`] (or lets a composite component do it) and this adapter
//! just draws the circles. Remote image references are handed to the `img`
//! element; the rendering host is the collaborator that fetches them.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use dioxus::prelude::*;

use crate::core::state::{AvatarState, ImageSource};
use crate::core::style::AvatarStyle;

#[component]
pub fn Avatar(
    state: AvatarState,
    #[props(default)] style: AvatarStyle,
    diameter: f64,
) -> Element {
    let inner_diameter = (diameter - style.outer_margin * 2.0).max(0.0);
    let font_size = style.font_size_for(diameter);

    let outer_style = format!(
        "width:{diameter}px;height:{diameter}px;background:{};border:{}px solid {};",
        style.spacing_color.css(),
        style.border_width,
        style.border_color.css(),
    );
    let inner_style = format!(
        "width:{inner_diameter}px;height:{inner_diameter}px;background:{};",
        style.inner_color.css(),
    );

    let content = match &state {
        AvatarState::Initials { text } => {
            let label_style = format!(
                "color:{};font-size:{font_size}px;font-family:{};padding:0 {}px;",
                style.text_color.css(),
                style.font_family_css(),
                style.inner_margin,
            );
            rsx! {
                span { class: "avatar__initials", style: "{label_style}", "{text}" }
            }
        }
        AvatarState::Image(source) => {
            let src = match source {
                ImageSource::Bytes(bytes) => data_uri(bytes),
                ImageSource::Remote(url) => url.to_string(),
            };
            rsx! {
                img { class: "avatar__image", src: "{src}", alt: "" }
            }
        }
        AvatarState::Empty => rsx! {},
    };

    rsx! {
        div { class: "avatar", style: "{outer_style}",
            div { class: "avatar__inner", style: "{inner_style}", {content} }
        }
    }
}

/// Inline already-loaded bytes as a `data:` URI.
fn data_uri(bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        detect_image_mime(bytes),
        BASE64.encode(bytes)
    )
}

/// Sniff the container format from magic bytes. Unknown payloads are served
/// as a generic octet stream and left to the host to reject.
pub(crate) fn detect_image_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else if looks_like_svg(bytes) {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let Ok(text) = std::str::from_utf8(&bytes[..bytes.len().min(256)]) else {
        return false;
    };
    let trimmed = text.trim_start();
    trimmed.starts_with("<svg") || trimmed.starts_with("<?xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_containers() {
        assert_eq!(detect_image_mime(b"\x89PNG\r\n\x1a\nrest"), "image/png");
        assert_eq!(detect_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(detect_image_mime(b"GIF89a..."), "image/gif");
        assert_eq!(detect_image_mime(b"RIFF\0\0\0\0WEBPVP8 "), "image/webp");
        assert_eq!(detect_image_mime(b"<svg xmlns='x'/>"), "image/svg+xml");
    }

    #[test]
    fn unknown_bytes_fall_back_to_octet_stream() {
        assert_eq!(detect_image_mime(&[0, 1, 2, 3]), "application/octet-stream");
    }

    #[test]
    fn data_uri_embeds_base64_payload() {
        let uri = data_uri(b"<svg/>");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }
}
