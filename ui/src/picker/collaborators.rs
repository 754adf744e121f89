//! Narrow interfaces onto the platform capabilities the picker delegates
//! to. The library drives these; it never reimplements them.

use futures::future::LocalBoxFuture;
use futures_channel::mpsc::UnboundedReceiver;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    Camera,
    Library,
}

/// Request handed to the capture UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRequest {
    pub source: CaptureSource,
    pub allows_editing: bool,
}

/// What the capture UI reports back. When the user cropped or otherwise
/// edited the shot, both payloads are present and `edited` wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureResult {
    pub edited: Option<Vec<u8>>,
    pub original: Option<Vec<u8>>,
}

/// A contact chosen in the platform contact picker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSelection {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub image: Option<Vec<u8>>,
    pub thumbnail: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("asset fetch failed: {reason}")]
pub struct AssetError {
    pub reason: String,
}

impl AssetError {
    pub fn new<T: Into<String>>(reason: T) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Progress reports from the asset store. Zero or more `Degraded` events
/// may precede the terminal event; exactly one terminal event arrives per
/// fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetFetchEvent {
    /// Low-quality interim image; informational only, never an outcome.
    Degraded(Vec<u8>),
    /// Final image — terminal.
    Image(Vec<u8>),
    /// The fetch was cancelled on the platform side — terminal.
    Cancelled,
    /// The fetch failed — terminal.
    Failed(AssetError),
}

/// Camera / photo library UI.
pub trait CapturePresenter {
    /// Present the capture UI and resolve with the user's image, or `None`
    /// when the UI was dismissed without one.
    fn capture(&self, request: CaptureRequest) -> LocalBoxFuture<'static, Option<CaptureResult>>;

    /// Persist a freshly captured original into the device photo store.
    /// Fire-and-forget: failures stay on the platform side.
    fn persist_to_photo_store(&self, original: Vec<u8>);
}

/// Platform contact picker UI.
pub trait ContactPresenter {
    fn pick_contact(
        &self,
        photo_required: bool,
    ) -> LocalBoxFuture<'static, Option<ContactSelection>>;
}

/// Read access to the device photo assets.
pub trait AssetLibrary {
    /// Fetch the most recently added image, optionally resized to `target`
    /// (width, height). Events arrive on the returned stream.
    fn most_recent_image(&self, target: Option<(u32, u32)>)
        -> UnboundedReceiver<AssetFetchEvent>;
}
