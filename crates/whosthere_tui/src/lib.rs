//! whosthere-tui — terminal shell for whosthere.
//!
//! Pages and retained widgets in [pages] and [widgets]; every widget is
//! registered with the [whosthere_theme::ThemeManager] when it is built, so a
//! theme change restyles the whole screen. The theme picker modal lives in
//! [picker_modal]. Background work reaches the UI through [UiHandle].
//! Run with [run_tui].

pub mod handle;
pub mod layouts;
pub mod pages;
pub mod picker_modal;
pub mod run;
pub mod state;
pub mod view;
pub mod widgets;

pub use handle::{ui_channel, UiHandle, UiQueue, UiTask};
pub use pages::schedule_main_page;
pub use picker_modal::SaveTheme;
pub use run::{handle_event, run_tui, TuiOptions};
pub use state::{AppState, Page, Screen};
pub use view::draw as draw_view;
