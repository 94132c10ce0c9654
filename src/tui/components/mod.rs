// Components module - reusable UI building blocks
//
// - Title bar: app name and version
// - Board panel: the grid, the value line and the key hint
// - Status bar: cursor square, population count, base
// - Toast: transient notifications
//
// Each component is a focused, single-responsibility module.

pub mod board_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
