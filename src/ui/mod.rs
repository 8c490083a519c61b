//! Terminal UI for the sysaudit binary.
//!
//! - `theme` - colors, icons and borders (with ASCII fallbacks)
//! - `terminal` / `context` - capability detection and the resolved output mode
//! - `primitives` / `widgets` / `blocks` - composable renderers returning `String`
//! - `views` - per-command layouts
//! - `console` - the colored event sink used by `run`

pub mod blocks;
pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
