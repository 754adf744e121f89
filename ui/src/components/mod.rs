//! Dioxus rendering adapters over the pure layout logic in `core`.

pub mod app_navbar;
pub use app_navbar::{register_nav, AppNavbar, NavBuilder};

mod avatar;
pub use avatar::Avatar;
pub(crate) use avatar::detect_image_mime;

mod avatar_line;
pub use avatar_line::AvatarLine;

mod double_avatar;
pub use double_avatar::DoubleAvatar;

mod avatar_header;
pub use avatar_header::AvatarHeader;
