use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::{ready, LocalBoxFuture};
use futures_channel::mpsc::{self, UnboundedReceiver};
use futures_util::{FutureExt, StreamExt};
use tracing::info;

use crate::components::Avatar;
use crate::core::state::{AvatarState, ImageSource};
use crate::picker::collaborators::{
    AssetFetchEvent, AssetLibrary, CapturePresenter, CaptureRequest, CaptureResult, CaptureSource,
    ContactPresenter, ContactSelection,
};
use crate::picker::{PickOption, PickOutcome, PickerCapabilities, PickerConfig, PickerService};

enum PickerEvent {
    Open,
    Choose(PickOption),
}

#[component]
pub fn Picker() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let photo = use_signal(|| Option::<Vec<u8>>::None);
    let menu = use_signal(|| Option::<Vec<PickOption>>::None);
    let status_line = use_signal(|| "No interaction yet.".to_string());

    let coroutine = {
        let photo_ref = photo;
        let menu_ref = menu;
        let status_ref = status_line;

        use_coroutine(move |mut rx: UnboundedReceiver<PickerEvent>| {
            let mut photo_signal = photo_ref;
            let mut menu_signal = menu_ref;
            let mut status_signal = status_ref;

            async move {
                let (mut service, mut outcomes) = PickerService::new(
                    PickerConfig {
                        contact_photo_required: true,
                        most_recent_target: Some((256, 256)),
                    },
                    Rc::new(SimulatedCapture),
                    Rc::new(SimulatedContacts),
                    Rc::new(SimulatedAssets),
                );

                while let Some(event) = rx.next().await {
                    match event {
                        PickerEvent::Open => {
                            let capabilities = PickerCapabilities {
                                camera_available: true,
                                existing_photo: photo_signal().is_some(),
                                contacts_enabled: true,
                                last_photo_enabled: true,
                            };
                            match service.present(capabilities) {
                                Ok(options) => {
                                    menu_signal.set(Some(options));
                                    status_signal.set("Choose an option.".to_string());
                                }
                                Err(err) => status_signal.set(err.to_string()),
                            }
                        }
                        PickerEvent::Choose(option) => {
                            menu_signal.set(None);
                            status_signal.set("Waiting for the collaborator…".to_string());
                            simulated_latency(350).await;

                            if let Err(err) = service.choose(option).await {
                                status_signal.set(err.to_string());
                                continue;
                            }
                            match outcomes.try_next() {
                                Ok(Some(outcome)) => {
                                    apply_outcome(outcome, &mut photo_signal, &mut status_signal)
                                }
                                // No outcome: the fetch was cancelled or failed.
                                _ => status_signal
                                    .set("Interaction ended without a result.".to_string()),
                            }
                        }
                    }
                }
            }
        })
    };

    let avatar_state = match photo() {
        Some(bytes) => AvatarState::Image(ImageSource::Bytes(bytes)),
        None => AvatarState::initials("Jo"),
    };

    let open_handler = move |_| {
        coroutine.send(PickerEvent::Open);
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-picker",
            h1 { {crate::t!("page-picker-title")} }
            p { {crate::t!("page-picker-intro")} }

            div { class: "playground__canvas",
                Avatar { state: avatar_state, diameter: 96.0 }
            }

            div { class: "playground__controls",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: open_handler,
                    "Edit avatar"
                }
            }

            if let Some(options) = menu() {
                div { class: "picker-menu",
                    h2 { {crate::t!("picker-menu-title")} }
                    for option in options.into_iter() {
                        button {
                            key: "{option_label(option)}",
                            r#type: "button",
                            class: if option == PickOption::RemovePhoto {
                                "button button--danger"
                            } else {
                                "button"
                            },
                            onclick: move |_| coroutine.send(PickerEvent::Choose(option)),
                            "{option_label(option)}"
                        }
                    }
                }
            }

            p { class: "playground__meta", "{status_line()}" }
        }
    }
}

fn apply_outcome(
    outcome: PickOutcome,
    photo: &mut Signal<Option<Vec<u8>>>,
    status: &mut Signal<String>,
) {
    match outcome {
        PickOutcome::Selected { image } => {
            photo.set(Some(image));
            status.set("Photo selected.".to_string());
        }
        PickOutcome::SelectedContactPhoto { image, thumbnail } => {
            let payload = image.or(thumbnail);
            let had_photo = payload.is_some();
            photo.set(payload);
            status.set(if had_photo {
                "Contact photo imported.".to_string()
            } else {
                "Contact had no photo.".to_string()
            });
        }
        PickOutcome::Removed => {
            photo.set(None);
            status.set("Photo removed.".to_string());
        }
        PickOutcome::Cancelled => status.set("Cancelled.".to_string()),
    }
}

fn option_label(option: PickOption) -> String {
    match option {
        PickOption::UseLastPhoto => crate::t!("picker-option-last-photo"),
        PickOption::TakePhoto => crate::t!("picker-option-take-photo"),
        PickOption::ChooseFromLibrary => crate::t!("picker-option-library"),
        PickOption::ChooseFromContacts => crate::t!("picker-option-contacts"),
        PickOption::RemovePhoto => crate::t!("picker-option-remove"),
        PickOption::Cancel => crate::t!("picker-option-cancel"),
    }
}

async fn simulated_latency(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

// Demo collaborators. Each one answers immediately with an embedded SVG so
// the flow works offline on every platform.

macro_rules! portrait_svg {
    ($color:literal) => {
        concat!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='96' height='96'>",
            "<rect width='96' height='96' fill='",
            $color,
            "'/><circle cx='48' cy='38' r='16' fill='#ffffff'/>",
            "<ellipse cx='48' cy='78' rx='26' ry='18' fill='#ffffff'/></svg>"
        )
    };
}

const CAMERA_SHOT: &str = portrait_svg!("#b3552e");
const LIBRARY_SHOT: &str = portrait_svg!("#2e6cb3");
const CONTACT_PHOTO: &str = portrait_svg!("#7b4ab0");
const LAST_PHOTO: &str = portrait_svg!("#2e8577");

struct SimulatedCapture;

impl CapturePresenter for SimulatedCapture {
    fn capture(&self, request: CaptureRequest) -> LocalBoxFuture<'static, Option<CaptureResult>> {
        let shot = match request.source {
            CaptureSource::Camera => CAMERA_SHOT,
            CaptureSource::Library => LIBRARY_SHOT,
        };
        ready(Some(CaptureResult {
            edited: None,
            original: Some(shot.as_bytes().to_vec()),
        }))
        .boxed_local()
    }

    fn persist_to_photo_store(&self, original: Vec<u8>) {
        info!("persisting {} byte capture to the photo store", original.len());
    }
}

struct SimulatedContacts;

impl ContactPresenter for SimulatedContacts {
    fn pick_contact(
        &self,
        _photo_required: bool,
    ) -> LocalBoxFuture<'static, Option<ContactSelection>> {
        ready(Some(ContactSelection {
            given_name: Some("Ada".to_string()),
            family_name: Some("Lovelace".to_string()),
            image: Some(CONTACT_PHOTO.as_bytes().to_vec()),
            thumbnail: None,
        }))
        .boxed_local()
    }
}

struct SimulatedAssets;

impl AssetLibrary for SimulatedAssets {
    fn most_recent_image(
        &self,
        _target: Option<(u32, u32)>,
    ) -> UnboundedReceiver<AssetFetchEvent> {
        let (sender, receiver) = mpsc::unbounded();
        // A degraded preview first, exactly like a real asset store.
        let _ = sender.unbounded_send(AssetFetchEvent::Degraded(Vec::new()));
        let _ = sender.unbounded_send(AssetFetchEvent::Image(LAST_PHOTO.as_bytes().to_vec()));
        receiver
    }
}
