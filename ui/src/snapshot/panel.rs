//! Demo panel offering PNG delivery of an avatar snapshot.

use dioxus::prelude::*;

use crate::core::state::AvatarState;
use crate::core::style::AvatarStyle;

#[derive(Clone, Debug, PartialEq)]
enum SnapshotStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[component]
pub fn SnapshotPanel(
    state: AvatarState,
    #[props(default)] style: AvatarStyle,
    diameter: f64,
) -> Element {
    let status = use_signal(|| SnapshotStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        SnapshotStatus::Idle => None,
        SnapshotStatus::Working(label) => {
            Some(("snapshot-panel__meta".to_string(), format!("{label}…")))
        }
        SnapshotStatus::Done(message) => Some((
            "snapshot-panel__meta snapshot-panel__meta--success".to_string(),
            message.clone(),
        )),
        SnapshotStatus::Error(err) => Some((
            "snapshot-panel__meta snapshot-panel__meta--error".to_string(),
            err.clone(),
        )),
    };

    let png_handler = {
        let snapshot_state = state.clone();
        let snapshot_style = style.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(SnapshotStatus::Working("Rendering PNG"));
            let snapshot_state = snapshot_state.clone();
            let snapshot_style = snapshot_style.clone();

            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                let mut busy_signal = busy_signal;
                spawn(async move {
                    let outcome = deliver(&snapshot_state, &snapshot_style, diameter).await;
                    match outcome {
                        Ok(message) => status_signal.set(SnapshotStatus::Done(message)),
                        Err(err) => status_signal.set(SnapshotStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(deliver(
                    &snapshot_state,
                    &snapshot_style,
                    diameter,
                ));
                match outcome {
                    Ok(message) => status_signal.set(SnapshotStatus::Done(message)),
                    Err(err) => status_signal.set(SnapshotStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    let copy_handler = {
        let snapshot_state = state.clone();
        let snapshot_style = style.clone();
        let mut status_signal = status;
        move |_| {
            let outcome =
                super::copy_png_to_clipboard(&snapshot_state, &snapshot_style, diameter);
            match outcome {
                Ok(()) => status_signal.set(SnapshotStatus::Done("Copied to clipboard".into())),
                Err(err) => status_signal.set(SnapshotStatus::Error(err.to_string())),
            }
        }
    };
    // Clipboard images aren't a thing in the browser; the button stays hidden.
    #[cfg(target_arch = "wasm32")]
    let copy_handler = move |_| {};

    rsx! {
        div { class: "snapshot-panel",
            button {
                r#type: "button",
                class: "button button--ghost",
                disabled: busy(),
                onclick: png_handler,
                "Save PNG"
            }
            if cfg!(not(target_arch = "wasm32")) {
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: copy_handler,
                    "Copy PNG"
                }
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

async fn deliver(
    state: &AvatarState,
    style: &AvatarStyle,
    diameter: f64,
) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    let bytes = super::render_png(state, style, diameter)
        .await
        .map_err(|err| err.to_string())?;
    #[cfg(not(target_arch = "wasm32"))]
    let bytes = super::render_png(state, style, diameter).map_err(|err| err.to_string())?;

    let delivery = super::deliver_png("avatar.png", bytes)
        .await
        .map_err(|err| err.to_string())?;
    Ok(match delivery {
        Some(path) => format!("PNG saved to {path}"),
        None => "PNG download started".to_string(),
    })
}
