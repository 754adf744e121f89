//! Pure avatar presentation logic. Everything in here is toolkit-agnostic
//! and synchronous; the Dioxus adapters in `components/` pull render state
//! from these modules and never feed anything back.

pub mod badge;
pub mod line;
pub mod presenter;
pub mod state;
pub mod style;
