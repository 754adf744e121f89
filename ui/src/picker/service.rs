//! Async shell around the picker engine: drives collaborators to
//! completion and delivers outcomes on a channel.

use std::rc::Rc;

use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;
use tracing::debug;

use super::collaborators::{AssetFetchEvent, AssetLibrary, CapturePresenter, ContactPresenter};
use super::engine::{
    DelegateRequest, FetchDisposition, PickOption, PickerCapabilities, PickerConfig, PickerEngine,
    PickerError, Step,
};
use super::PickOutcome;

/// One picker per avatar editing surface. Outcomes arrive on the receiver
/// returned from [`PickerService::new`], one per completed interaction.
pub struct PickerService {
    engine: PickerEngine,
    capture: Rc<dyn CapturePresenter>,
    contacts: Rc<dyn ContactPresenter>,
    assets: Rc<dyn AssetLibrary>,
    outcomes: UnboundedSender<PickOutcome>,
}

impl PickerService {
    pub fn new(
        config: PickerConfig,
        capture: Rc<dyn CapturePresenter>,
        contacts: Rc<dyn ContactPresenter>,
        assets: Rc<dyn AssetLibrary>,
    ) -> (Self, UnboundedReceiver<PickOutcome>) {
        let (outcomes, receiver) = mpsc::unbounded();
        (
            Self {
                engine: PickerEngine::new(config),
                capture,
                contacts,
                assets,
                outcomes,
            },
            receiver,
        )
    }

    pub fn is_idle(&self) -> bool {
        self.engine.is_idle()
    }

    /// Open the option menu. Fails with [`PickerError::Busy`] while another
    /// interaction is in flight.
    pub fn present(
        &mut self,
        capabilities: PickerCapabilities,
    ) -> Result<Vec<PickOption>, PickerError> {
        self.engine.present(capabilities).map(<[_]>::to_vec)
    }

    /// Run the chosen option to completion. Resolves once the interaction
    /// has settled; the outcome (if any) is delivered on the channel.
    pub async fn choose(&mut self, option: PickOption) -> Result<(), PickerError> {
        match self.engine.choose(option)? {
            Step::Finished(outcome) => self.emit(outcome),
            Step::Delegate(DelegateRequest::Capture(request)) => {
                let result = self.capture.capture(request).await;
                let completion = self.engine.capture_finished(result);
                if let Some(original) = completion.persist_original {
                    self.capture.persist_to_photo_store(original);
                }
                if let Some(outcome) = completion.outcome {
                    self.emit(outcome);
                }
            }
            Step::Delegate(DelegateRequest::PickContact { photo_required }) => {
                let selection = self.contacts.pick_contact(photo_required).await;
                if let Some(outcome) = self.engine.contact_finished(selection) {
                    self.emit(outcome);
                }
            }
            Step::Delegate(DelegateRequest::FetchMostRecent { target }) => {
                let mut events = self.assets.most_recent_image(target);
                loop {
                    let event = match events.next().await {
                        Some(event) => event,
                        // Stream dropped without a terminal event; treat it
                        // as a platform-side cancellation.
                        None => AssetFetchEvent::Cancelled,
                    };
                    match self.engine.asset_event(event) {
                        FetchDisposition::Pending => continue,
                        FetchDisposition::Settled(outcome) => {
                            if let Some(outcome) = outcome {
                                self.emit(outcome);
                            }
                            break;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn emit(&self, outcome: PickOutcome) {
        if self.outcomes.unbounded_send(outcome).is_err() {
            debug!("pick outcome dropped: receiver went away");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::future::{ready, LocalBoxFuture};
    use futures_channel::mpsc::UnboundedReceiver;
    use futures_util::FutureExt;

    use super::*;
    use crate::picker::collaborators::{
        AssetError, CaptureRequest, CaptureResult, ContactSelection,
    };

    #[derive(Default)]
    struct StubCapture {
        next: RefCell<Option<CaptureResult>>,
        invocations: RefCell<usize>,
        persisted: RefCell<Vec<Vec<u8>>>,
    }

    impl CapturePresenter for StubCapture {
        fn capture(
            &self,
            _request: CaptureRequest,
        ) -> LocalBoxFuture<'static, Option<CaptureResult>> {
            *self.invocations.borrow_mut() += 1;
            ready(self.next.borrow_mut().take()).boxed_local()
        }

        fn persist_to_photo_store(&self, original: Vec<u8>) {
            self.persisted.borrow_mut().push(original);
        }
    }

    #[derive(Default)]
    struct StubContacts {
        next: RefCell<Option<ContactSelection>>,
    }

    impl ContactPresenter for StubContacts {
        fn pick_contact(
            &self,
            _photo_required: bool,
        ) -> LocalBoxFuture<'static, Option<ContactSelection>> {
            ready(self.next.borrow_mut().take()).boxed_local()
        }
    }

    #[derive(Default)]
    struct StubAssets {
        events: RefCell<Vec<AssetFetchEvent>>,
    }

    impl AssetLibrary for StubAssets {
        fn most_recent_image(
            &self,
            _target: Option<(u32, u32)>,
        ) -> UnboundedReceiver<AssetFetchEvent> {
            let (sender, receiver) = mpsc::unbounded();
            for event in self.events.borrow_mut().drain(..) {
                let _ = sender.unbounded_send(event);
            }
            receiver
        }
    }

    struct Harness {
        service: PickerService,
        outcomes: UnboundedReceiver<PickOutcome>,
        capture: Rc<StubCapture>,
        contacts: Rc<StubContacts>,
        assets: Rc<StubAssets>,
    }

    fn harness() -> Harness {
        let capture = Rc::new(StubCapture::default());
        let contacts = Rc::new(StubContacts::default());
        let assets = Rc::new(StubAssets::default());
        let (service, outcomes) = PickerService::new(
            PickerConfig::default(),
            capture.clone(),
            contacts.clone(),
            assets.clone(),
        );
        Harness {
            service,
            outcomes,
            capture,
            contacts,
            assets,
        }
    }

    fn all_capabilities() -> PickerCapabilities {
        PickerCapabilities {
            camera_available: true,
            existing_photo: true,
            contacts_enabled: true,
            last_photo_enabled: true,
        }
    }

    fn drain(outcomes: &mut UnboundedReceiver<PickOutcome>) -> Vec<PickOutcome> {
        let mut collected = Vec::new();
        while let Ok(Some(outcome)) = outcomes.try_next() {
            collected.push(outcome);
        }
        collected
    }

    #[test]
    fn remove_photo_emits_without_collaborators() {
        let mut h = harness();
        h.service.present(all_capabilities()).unwrap();
        futures::executor::block_on(h.service.choose(PickOption::RemovePhoto)).unwrap();

        assert_eq!(drain(&mut h.outcomes), vec![PickOutcome::Removed]);
        assert_eq!(*h.capture.invocations.borrow(), 0);
        assert!(h.service.is_idle());
    }

    #[test]
    fn camera_pick_prefers_edited_and_persists_original() {
        let mut h = harness();
        *h.capture.next.borrow_mut() = Some(CaptureResult {
            edited: Some(vec![1]),
            original: Some(vec![2]),
        });
        h.service.present(all_capabilities()).unwrap();
        futures::executor::block_on(h.service.choose(PickOption::TakePhoto)).unwrap();

        assert_eq!(
            drain(&mut h.outcomes),
            vec![PickOutcome::Selected { image: vec![1] }]
        );
        assert_eq!(h.capture.persisted.borrow().as_slice(), [vec![2]]);
    }

    #[test]
    fn contact_pick_delivers_photos() {
        let mut h = harness();
        *h.contacts.next.borrow_mut() = Some(ContactSelection {
            image: Some(vec![7]),
            thumbnail: None,
            ..ContactSelection::default()
        });
        h.service.present(all_capabilities()).unwrap();
        futures::executor::block_on(h.service.choose(PickOption::ChooseFromContacts)).unwrap();

        assert_eq!(
            drain(&mut h.outcomes),
            vec![PickOutcome::SelectedContactPhoto {
                image: Some(vec![7]),
                thumbnail: None,
            }]
        );
    }

    #[test]
    fn degraded_then_final_yields_exactly_one_selected() {
        let mut h = harness();
        *h.assets.events.borrow_mut() = vec![
            AssetFetchEvent::Degraded(vec![0]),
            AssetFetchEvent::Degraded(vec![0, 0]),
            AssetFetchEvent::Image(vec![9]),
        ];
        h.service.present(all_capabilities()).unwrap();
        futures::executor::block_on(h.service.choose(PickOption::UseLastPhoto)).unwrap();

        assert_eq!(
            drain(&mut h.outcomes),
            vec![PickOutcome::Selected { image: vec![9] }]
        );
        assert!(h.service.is_idle());
    }

    #[test]
    fn failed_fetch_emits_nothing_and_recovers() {
        let mut h = harness();
        *h.assets.events.borrow_mut() =
            vec![AssetFetchEvent::Failed(AssetError::new("unavailable"))];
        h.service.present(all_capabilities()).unwrap();
        futures::executor::block_on(h.service.choose(PickOption::UseLastPhoto)).unwrap();

        assert!(drain(&mut h.outcomes).is_empty());
        // The next interaction starts cleanly.
        assert!(h.service.present(all_capabilities()).is_ok());
    }

    #[test]
    fn dropped_event_stream_counts_as_cancellation() {
        let mut h = harness();
        h.service.present(all_capabilities()).unwrap();
        futures::executor::block_on(h.service.choose(PickOption::UseLastPhoto)).unwrap();

        assert!(drain(&mut h.outcomes).is_empty());
        assert!(h.service.is_idle());
    }

    #[test]
    fn busy_until_interaction_settles() {
        let mut h = harness();
        h.service.present(all_capabilities()).unwrap();
        assert_eq!(
            h.service.present(all_capabilities()),
            Err(PickerError::Busy)
        );
        futures::executor::block_on(h.service.choose(PickOption::Cancel)).unwrap();
        assert!(h.service.present(all_capabilities()).is_ok());
    }
}
