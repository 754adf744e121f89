//! Render an avatar as an encoded image.
//!
//! This is the library's equivalent of the original view's expensive
//! "draw me as an image" accessor: a deterministic SVG is built for the
//! avatar state, then rasterized — with `resvg` on native targets, or via
//! an offscreen canvas in the browser. Remote image references are *not*
//! fetched here; they rasterize as the empty circle, since resolution
//! belongs to the rendering host.

mod panel;
pub use panel::SnapshotPanel;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

use crate::core::state::{AvatarState, ImageSource};
use crate::core::style::AvatarStyle;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("svg parse failed: {0}")]
    Svg(String),
    #[error("raster target allocation failed")]
    Allocation,
    #[error("png encode failed: {0}")]
    Encode(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("snapshot save failed: {0}")]
    Save(String),
    #[error("browser rendering failed: {0}")]
    Browser(String),
}

/// Build the SVG markup for one avatar circle. Shared by both raster
/// backends and stable for a given `(state, style, diameter)` triple.
pub fn render_svg(state: &AvatarState, style: &AvatarStyle, diameter: f64) -> String {
    let radius = diameter / 2.0;
    let inner_radius = (radius - style.outer_margin).max(0.0);
    let font_size = style.font_size_for(diameter);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{diameter}' height='{diameter}' viewBox='0 0 {diameter} {diameter}'>\n"
    ));
    svg.push_str(&format!(
        "  <defs><clipPath id='rim'><circle cx='{radius}' cy='{radius}' r='{inner_radius}'/></clipPath></defs>\n"
    ));
    // Rim: spacing fill plus the configured border.
    svg.push_str(&format!(
        "  <circle cx='{radius}' cy='{radius}' r='{radius}' fill='{}' stroke='{}' stroke-width='{}'/>\n",
        style.spacing_color.css(),
        style.border_color.css(),
        style.border_width,
    ));
    // Inner circle behind initials or image.
    svg.push_str(&format!(
        "  <circle cx='{radius}' cy='{radius}' r='{inner_radius}' fill='{}'/>\n",
        style.inner_color.css(),
    ));

    match state {
        AvatarState::Initials { text } => {
            svg.push_str(&format!(
                "  <text x='{radius}' y='{radius}' text-anchor='middle' dominant-baseline='central' font-family='{}' font-size='{font_size}' fill='{}'>{}</text>\n",
                style.font_family_css(),
                style.text_color.css(),
                xml_escape(text),
            ));
        }
        AvatarState::Image(ImageSource::Bytes(bytes)) => {
            let mime = crate::components::detect_image_mime(bytes);
            svg.push_str(&format!(
                "  <image href='data:{mime};base64,{}' x='{}' y='{}' width='{}' height='{}' preserveAspectRatio='xMidYMid slice' clip-path='url(#rim)'/>\n",
                BASE64.encode(bytes),
                radius - inner_radius,
                radius - inner_radius,
                inner_radius * 2.0,
                inner_radius * 2.0,
            ));
        }
        // Remote references resolve elsewhere; snapshot what we have.
        AvatarState::Image(ImageSource::Remote(_)) | AvatarState::Empty => {}
    }

    svg.push_str("</svg>");
    svg
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{copy_png_to_clipboard, render_png, save_png};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::sync::Arc;

    use once_cell::sync::Lazy;
    use tracing::debug;

    use super::{render_svg, SnapshotError};
    use crate::core::state::AvatarState;
    use crate::core::style::AvatarStyle;

    /// System fonts are loaded once; initials rendering needs them.
    static FONTDB: Lazy<Arc<usvg::fontdb::Database>> = Lazy::new(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        debug!("snapshot fontdb loaded {} faces", db.len());
        Arc::new(db)
    });

    /// Rasterize the avatar into PNG bytes.
    pub fn render_png(
        state: &AvatarState,
        style: &AvatarStyle,
        diameter: f64,
    ) -> Result<Vec<u8>, SnapshotError> {
        let pixmap = render_pixmap(state, style, diameter)?;
        encode_png(&pixmap)
    }

    /// Place the rasterized avatar on the system clipboard.
    pub fn copy_png_to_clipboard(
        state: &AvatarState,
        style: &AvatarStyle,
        diameter: f64,
    ) -> Result<(), SnapshotError> {
        use arboard::{Clipboard, ImageData};

        let pixmap = render_pixmap(state, style, diameter)?;
        let rgba = demultiplied(&pixmap);
        let image = ImageData {
            width: pixmap.width() as usize,
            height: pixmap.height() as usize,
            bytes: rgba.into(),
        };
        let mut clipboard =
            Clipboard::new().map_err(|err| SnapshotError::Clipboard(err.to_string()))?;
        clipboard
            .set_image(image)
            .map_err(|err| SnapshotError::Clipboard(err.to_string()))
    }

    /// Write PNG bytes under the platform data dir, returning the path.
    pub fn save_png(filename: &str, bytes: &[u8]) -> Result<PathBuf, SnapshotError> {
        use std::fs;

        let dirs = directories::ProjectDirs::from("rs", "Avatarkit", "Avatarkit")
            .ok_or_else(|| SnapshotError::Save("unable to determine data directory".into()))?;
        let dir = dirs.data_dir().join("snapshots");
        fs::create_dir_all(&dir).map_err(|err| SnapshotError::Save(err.to_string()))?;
        let path = dir.join(filename);
        fs::write(&path, bytes).map_err(|err| SnapshotError::Save(err.to_string()))?;
        Ok(path)
    }

    fn render_pixmap(
        state: &AvatarState,
        style: &AvatarStyle,
        diameter: f64,
    ) -> Result<tiny_skia::Pixmap, SnapshotError> {
        let svg = render_svg(state, style, diameter);

        let mut options = usvg::Options::default();
        options.fontdb = FONTDB.clone();
        let tree = usvg::Tree::from_str(&svg, &options)
            .map_err(|err| SnapshotError::Svg(err.to_string()))?;

        let side = diameter.ceil().max(1.0) as u32;
        let mut pixmap =
            tiny_skia::Pixmap::new(side, side).ok_or(SnapshotError::Allocation)?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
        Ok(pixmap)
    }

    fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, SnapshotError> {
        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, pixmap.width(), pixmap.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder
                .write_header()
                .map_err(|err| SnapshotError::Encode(err.to_string()))?
                .write_image_data(&demultiplied(pixmap))
                .map_err(|err| SnapshotError::Encode(err.to_string()))?;
        }
        Ok(buffer)
    }

    fn demultiplied(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
        for pixel in pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        rgba
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::render_png;

#[cfg(target_arch = "wasm32")]
mod web {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    use super::{render_svg, SnapshotError};
    use crate::core::state::AvatarState;
    use crate::core::style::AvatarStyle;

    /// Rasterize the avatar through an offscreen canvas.
    pub async fn render_png(
        state: &AvatarState,
        style: &AvatarStyle,
        diameter: f64,
    ) -> Result<Vec<u8>, SnapshotError> {
        let svg_markup = render_svg(state, style, diameter);
        let side = diameter.ceil().max(1.0) as u32;

        let mut opts = BlobPropertyBag::new();
        opts.type_("image/svg+xml");
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&svg_markup));
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
            .map_err(|_| SnapshotError::Browser("unable to build SVG blob".into()))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| SnapshotError::Browser("unable to create SVG URL".into()))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SnapshotError::Browser("document unavailable".into()))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|_| SnapshotError::Browser("unable to create canvas".into()))?
            .dyn_into()
            .map_err(|_| SnapshotError::Browser("canvas cast failed".into()))?;
        canvas.set_width(side);
        canvas.set_height(side);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|_| SnapshotError::Browser("canvas context unavailable".into()))?
            .ok_or_else(|| SnapshotError::Browser("canvas context missing".into()))?
            .dyn_into()
            .map_err(|_| SnapshotError::Browser("context cast failed".into()))?;

        let image = HtmlImageElement::new()
            .map_err(|_| SnapshotError::Browser("unable to create image".into()))?;
        let decode = image.decode();
        image.set_src(&url);
        JsFuture::from(decode)
            .await
            .map_err(|_| SnapshotError::Browser("image decode failed".into()))?;

        context
            .draw_image_with_html_image_element(&image, 0.0, 0.0)
            .map_err(|_| SnapshotError::Browser("unable to draw image".into()))?;

        let data_url = canvas
            .to_data_url_with_type("image/png")
            .map_err(|_| SnapshotError::Browser("unable to serialise canvas".into()))?;
        Url::revoke_object_url(&url).ok();

        let payload = data_url
            .split(',')
            .nth(1)
            .ok_or_else(|| SnapshotError::Browser("malformed data URL".into()))?;
        BASE64
            .decode(payload)
            .map_err(|_| SnapshotError::Browser("PNG decode failed".into()))
    }
}

/// Deliver PNG bytes to the user: a download on the web, a file under the
/// platform data dir on native. Returns the saved path when there is one.
pub async fn deliver_png(filename: &str, bytes: Vec<u8>) -> Result<Option<String>, SnapshotError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let mut opts = BlobPropertyBag::new();
        opts.type_("image/png");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| SnapshotError::Browser("failed to create blob".into()))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| SnapshotError::Browser("unable to create download".into()))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SnapshotError::Browser("document unavailable".into()))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| SnapshotError::Browser("unable to create anchor".into()))?
            .dyn_into()
            .map_err(|_| SnapshotError::Browser("anchor cast failed".into()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| SnapshotError::Browser("missing body".into()))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        save_png(filename, &bytes).map(|path| Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AvatarState;

    #[test]
    fn initials_svg_contains_escaped_text() {
        let svg = render_svg(
            &AvatarState::initials("A&B"),
            &AvatarStyle::default(),
            64.0,
        );
        assert!(svg.contains("A&amp;B"));
        assert!(svg.contains("font-size='25.6'"));
    }

    #[test]
    fn image_svg_embeds_data_uri() {
        let svg = render_svg(
            &AvatarState::Image(crate::core::state::ImageSource::Bytes(
                b"\x89PNG\r\n\x1a\nxx".to_vec(),
            )),
            &AvatarStyle::default(),
            64.0,
        );
        assert!(svg.contains("data:image/png;base64,"));
    }

    #[test]
    fn empty_svg_is_just_the_circles() {
        let svg = render_svg(&AvatarState::Empty, &AvatarStyle::default(), 64.0);
        assert!(!svg.contains("<text"));
        assert!(!svg.contains("<image"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn render_png_produces_png_magic() {
        let bytes = render_png(
            &AvatarState::initials("Jo"),
            &AvatarStyle::default(),
            32.0,
        )
        .expect("rasterization succeeds");
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }
}
