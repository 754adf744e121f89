//! Image picker orchestration: turn one user interaction into at most one
//! [`PickOutcome`], delegating the actual camera / library / contacts UI to
//! platform collaborators.

pub mod collaborators;

mod engine;
pub use engine::{
    CaptureCompletion, DelegateRequest, FetchDisposition, PickOption, PickerCapabilities,
    PickerConfig, PickerEngine, PickerError, PickerState, Step,
};

mod service;
pub use service::PickerService;

/// Terminal result of a single pick interaction. Produced once and handed
/// to the caller; the orchestrator retains nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// A final image from the camera, library, or most-recent-photo fetch.
    Selected { image: Vec<u8> },
    /// A contact was chosen; either byte payload may be absent when the
    /// contact has no stored photo at that resolution.
    SelectedContactPhoto {
        image: Option<Vec<u8>>,
        thumbnail: Option<Vec<u8>>,
    },
    /// The existing photo should be removed.
    Removed,
    /// The interaction was dismissed without choosing anything.
    Cancelled,
}
