//! Pure state machine behind the image picker.
//!
//! The engine owns no platform handles: `choose` answers with either a
//! finished outcome or a delegate request, and the async shell (the
//! [`super::PickerService`] or a test) feeds collaborator results back in.
//! Every path returns the machine to `Idle`; failures are terminal for the
//! interaction and non-fatal for the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::collaborators::{
    AssetFetchEvent, CaptureRequest, CaptureResult, CaptureSource, ContactSelection,
};
use super::PickOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Idle,
    OptionsPresented,
    CameraActive,
    LibraryActive,
    ContactPickerActive,
    MostRecentFetching,
}

/// Environment capabilities gating which options get offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerCapabilities {
    pub camera_available: bool,
    pub existing_photo: bool,
    pub contacts_enabled: bool,
    pub last_photo_enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Restrict the contact picker to contacts that have a photo.
    pub contact_photo_required: bool,
    /// Resize target (width, height) for the most-recent-photo fetch.
    pub most_recent_target: Option<(u32, u32)>,
}

/// Menu entries, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOption {
    UseLastPhoto,
    TakePhoto,
    ChooseFromLibrary,
    ChooseFromContacts,
    RemovePhoto,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickerError {
    /// A new interaction was requested while one is in flight. Rejected
    /// rather than superseded; see DESIGN.md.
    #[error("an image pick interaction is already in flight")]
    Busy,
    #[error("no option menu is currently presented")]
    NotPresenting,
    #[error("the chosen option is not part of the presented set")]
    UnavailableOption,
}

/// Answer from [`PickerEngine::choose`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Hand off to a collaborator; the engine is now in the matching
    /// active state.
    Delegate(DelegateRequest),
    /// The interaction settled synchronously.
    Finished(PickOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegateRequest {
    Capture(CaptureRequest),
    PickContact { photo_required: bool },
    FetchMostRecent { target: Option<(u32, u32)> },
}

/// Result of feeding a capture completion back into the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureCompletion {
    pub outcome: Option<PickOutcome>,
    /// Original camera bytes to persist to the photo store, when the shot
    /// came from the camera.
    pub persist_original: Option<Vec<u8>>,
}

/// Result of feeding one asset-fetch event into the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchDisposition {
    /// Interim event; keep consuming the stream.
    Pending,
    /// The fetch is over. `None` means no outcome is emitted.
    Settled(Option<PickOutcome>),
}

#[derive(Debug)]
pub struct PickerEngine {
    state: PickerState,
    config: PickerConfig,
    options: Vec<PickOption>,
}

impl PickerEngine {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            state: PickerState::Idle,
            config,
            options: Vec::new(),
        }
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == PickerState::Idle
    }

    /// Open the option menu for a new interaction.
    pub fn present(
        &mut self,
        capabilities: PickerCapabilities,
    ) -> Result<&[PickOption], PickerError> {
        if self.state != PickerState::Idle {
            return Err(PickerError::Busy);
        }
        self.options = options_for(capabilities);
        self.state = PickerState::OptionsPresented;
        Ok(&self.options)
    }

    /// Act on a menu choice.
    pub fn choose(&mut self, option: PickOption) -> Result<Step, PickerError> {
        if self.state != PickerState::OptionsPresented {
            return Err(PickerError::NotPresenting);
        }
        if !self.options.contains(&option) {
            return Err(PickerError::UnavailableOption);
        }

        let step = match option {
            PickOption::UseLastPhoto => {
                self.state = PickerState::MostRecentFetching;
                Step::Delegate(DelegateRequest::FetchMostRecent {
                    target: self.config.most_recent_target,
                })
            }
            PickOption::TakePhoto => {
                self.state = PickerState::CameraActive;
                Step::Delegate(DelegateRequest::Capture(CaptureRequest {
                    source: CaptureSource::Camera,
                    allows_editing: true,
                }))
            }
            PickOption::ChooseFromLibrary => {
                self.state = PickerState::LibraryActive;
                Step::Delegate(DelegateRequest::Capture(CaptureRequest {
                    source: CaptureSource::Library,
                    allows_editing: true,
                }))
            }
            PickOption::ChooseFromContacts => {
                self.state = PickerState::ContactPickerActive;
                Step::Delegate(DelegateRequest::PickContact {
                    photo_required: self.config.contact_photo_required,
                })
            }
            PickOption::RemovePhoto => {
                self.finish();
                Step::Finished(PickOutcome::Removed)
            }
            PickOption::Cancel => {
                self.finish();
                Step::Finished(PickOutcome::Cancelled)
            }
        };
        Ok(step)
    }

    /// Feed back the capture UI's result. Edited bytes win over the
    /// original; camera originals are additionally surfaced for the
    /// photo-store persist side effect. A dismissed capture UI produces no
    /// outcome at all (the camera/library flow never emits `Cancelled`).
    pub fn capture_finished(&mut self, result: Option<CaptureResult>) -> CaptureCompletion {
        let from_camera = match self.state {
            PickerState::CameraActive => true,
            PickerState::LibraryActive => false,
            _ => {
                warn!("capture completion arrived outside an active capture");
                return CaptureCompletion::default();
            }
        };
        self.finish();

        let Some(capture) = result else {
            debug!("capture UI dismissed without an image");
            return CaptureCompletion::default();
        };

        let persist_original = if from_camera {
            capture.original.clone()
        } else {
            None
        };
        let image = capture.edited.or(capture.original);
        CaptureCompletion {
            outcome: image.map(|image| PickOutcome::Selected { image }),
            persist_original,
        }
    }

    /// Feed back the contact picker's result.
    pub fn contact_finished(&mut self, selection: Option<ContactSelection>) -> Option<PickOutcome> {
        if self.state != PickerState::ContactPickerActive {
            warn!("contact selection arrived outside the contact picker");
            return None;
        }
        self.finish();

        match selection {
            Some(contact) => Some(PickOutcome::SelectedContactPhoto {
                image: contact.image,
                thumbnail: contact.thumbnail,
            }),
            None => Some(PickOutcome::Cancelled),
        }
    }

    /// Feed in one event from the most-recent-photo fetch.
    pub fn asset_event(&mut self, event: AssetFetchEvent) -> FetchDisposition {
        if self.state != PickerState::MostRecentFetching {
            debug!("asset event ignored outside an active fetch");
            return FetchDisposition::Settled(None);
        }

        match event {
            AssetFetchEvent::Degraded(_) => {
                debug!("interim degraded asset received; awaiting final image");
                FetchDisposition::Pending
            }
            AssetFetchEvent::Image(image) => {
                self.finish();
                FetchDisposition::Settled(Some(PickOutcome::Selected { image }))
            }
            AssetFetchEvent::Cancelled => {
                debug!("asset fetch cancelled");
                self.finish();
                FetchDisposition::Settled(None)
            }
            AssetFetchEvent::Failed(err) => {
                warn!("asset fetch failed: {err}");
                self.finish();
                FetchDisposition::Settled(None)
            }
        }
    }

    fn finish(&mut self) {
        self.state = PickerState::Idle;
        self.options.clear();
    }
}

fn options_for(capabilities: PickerCapabilities) -> Vec<PickOption> {
    let mut options = Vec::new();
    if capabilities.last_photo_enabled {
        options.push(PickOption::UseLastPhoto);
    }
    if capabilities.camera_available {
        options.push(PickOption::TakePhoto);
    }
    options.push(PickOption::ChooseFromLibrary);
    if capabilities.contacts_enabled {
        options.push(PickOption::ChooseFromContacts);
    }
    if capabilities.existing_photo {
        options.push(PickOption::RemovePhoto);
    }
    options.push(PickOption::Cancel);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::collaborators::AssetError;

    fn all_capabilities() -> PickerCapabilities {
        PickerCapabilities {
            camera_available: true,
            existing_photo: true,
            contacts_enabled: true,
            last_photo_enabled: true,
        }
    }

    fn presented(capabilities: PickerCapabilities) -> PickerEngine {
        let mut engine = PickerEngine::new(PickerConfig::default());
        engine.present(capabilities).expect("engine starts idle");
        engine
    }

    #[test]
    fn option_set_follows_capabilities() {
        let mut engine = PickerEngine::new(PickerConfig::default());
        let options = engine.present(all_capabilities()).unwrap();
        assert_eq!(
            options,
            [
                PickOption::UseLastPhoto,
                PickOption::TakePhoto,
                PickOption::ChooseFromLibrary,
                PickOption::ChooseFromContacts,
                PickOption::RemovePhoto,
                PickOption::Cancel,
            ]
        );
    }

    #[test]
    fn minimal_capabilities_offer_library_and_cancel_only() {
        let mut engine = PickerEngine::new(PickerConfig::default());
        let options = engine.present(PickerCapabilities::default()).unwrap();
        assert_eq!(options, [PickOption::ChooseFromLibrary, PickOption::Cancel]);
    }

    #[test]
    fn remove_photo_requires_existing_photo() {
        let mut engine = PickerEngine::new(PickerConfig::default());
        let options = engine.present(PickerCapabilities::default()).unwrap();
        assert!(!options.contains(&PickOption::RemovePhoto));
    }

    #[test]
    fn present_while_in_flight_is_rejected() {
        let mut engine = presented(all_capabilities());
        assert_eq!(engine.present(all_capabilities()), Err(PickerError::Busy));

        engine.choose(PickOption::TakePhoto).unwrap();
        assert_eq!(engine.present(all_capabilities()), Err(PickerError::Busy));
    }

    #[test]
    fn unoffered_option_is_rejected() {
        let mut engine = presented(PickerCapabilities::default());
        assert_eq!(
            engine.choose(PickOption::RemovePhoto),
            Err(PickerError::UnavailableOption)
        );
        // The menu stays open after a rejected choice.
        assert_eq!(engine.state(), PickerState::OptionsPresented);
    }

    #[test]
    fn remove_photo_settles_synchronously() {
        let mut engine = presented(all_capabilities());
        let step = engine.choose(PickOption::RemovePhoto).unwrap();
        assert_eq!(step, Step::Finished(PickOutcome::Removed));
        assert!(engine.is_idle());
    }

    #[test]
    fn cancel_settles_synchronously() {
        let mut engine = presented(all_capabilities());
        let step = engine.choose(PickOption::Cancel).unwrap();
        assert_eq!(step, Step::Finished(PickOutcome::Cancelled));
        assert!(engine.is_idle());
    }

    #[test]
    fn edited_bytes_win_and_camera_original_is_persisted() {
        let mut engine = presented(all_capabilities());
        engine.choose(PickOption::TakePhoto).unwrap();
        let completion = engine.capture_finished(Some(CaptureResult {
            edited: Some(vec![1]),
            original: Some(vec![2]),
        }));
        assert_eq!(
            completion.outcome,
            Some(PickOutcome::Selected { image: vec![1] })
        );
        assert_eq!(completion.persist_original, Some(vec![2]));
        assert!(engine.is_idle());
    }

    #[test]
    fn library_capture_never_persists() {
        let mut engine = presented(all_capabilities());
        engine.choose(PickOption::ChooseFromLibrary).unwrap();
        let completion = engine.capture_finished(Some(CaptureResult {
            edited: None,
            original: Some(vec![3]),
        }));
        assert_eq!(
            completion.outcome,
            Some(PickOutcome::Selected { image: vec![3] })
        );
        assert_eq!(completion.persist_original, None);
    }

    #[test]
    fn dismissed_capture_produces_no_outcome() {
        let mut engine = presented(all_capabilities());
        engine.choose(PickOption::TakePhoto).unwrap();
        let completion = engine.capture_finished(None);
        assert_eq!(completion, CaptureCompletion::default());
        assert!(engine.is_idle());
    }

    #[test]
    fn contact_selection_and_cancellation() {
        let mut engine = presented(all_capabilities());
        engine.choose(PickOption::ChooseFromContacts).unwrap();
        let outcome = engine.contact_finished(Some(ContactSelection {
            image: Some(vec![5]),
            thumbnail: Some(vec![6]),
            ..ContactSelection::default()
        }));
        assert_eq!(
            outcome,
            Some(PickOutcome::SelectedContactPhoto {
                image: Some(vec![5]),
                thumbnail: Some(vec![6]),
            })
        );

        let mut engine = presented(all_capabilities());
        engine.choose(PickOption::ChooseFromContacts).unwrap();
        assert_eq!(engine.contact_finished(None), Some(PickOutcome::Cancelled));
    }

    #[test]
    fn degraded_events_never_settle_the_fetch() {
        let mut engine = presented(all_capabilities());
        engine.choose(PickOption::UseLastPhoto).unwrap();
        assert_eq!(
            engine.asset_event(AssetFetchEvent::Degraded(vec![0])),
            FetchDisposition::Pending
        );
        assert_eq!(engine.state(), PickerState::MostRecentFetching);
        assert_eq!(
            engine.asset_event(AssetFetchEvent::Image(vec![9])),
            FetchDisposition::Settled(Some(PickOutcome::Selected { image: vec![9] }))
        );
        assert!(engine.is_idle());
    }

    #[test]
    fn failed_and_cancelled_fetches_settle_silently() {
        let mut engine = presented(all_capabilities());
        engine.choose(PickOption::UseLastPhoto).unwrap();
        assert_eq!(
            engine.asset_event(AssetFetchEvent::Failed(AssetError::new("denied"))),
            FetchDisposition::Settled(None)
        );
        assert!(engine.is_idle());

        let mut engine = presented(all_capabilities());
        engine.choose(PickOption::UseLastPhoto).unwrap();
        assert_eq!(
            engine.asset_event(AssetFetchEvent::Cancelled),
            FetchDisposition::Settled(None)
        );
        assert!(engine.is_idle());
    }

    #[test]
    fn asset_events_outside_a_fetch_are_ignored() {
        let mut engine = PickerEngine::new(PickerConfig::default());
        assert_eq!(
            engine.asset_event(AssetFetchEvent::Image(vec![1])),
            FetchDisposition::Settled(None)
        );
        assert!(engine.is_idle());
    }
}
