//! Splash and main pages.
//!
//! A page builds and owns its widgets; they are registered with the theme
//! manager at construction and deregister themselves by being dropped.

use std::time::Duration;

use tokio::task::JoinHandle;
use whosthere_constant::{APP_NAME, LOGO};
use whosthere_theme::ThemeManager;

use crate::handle::UiHandle;
use crate::state::Page;
use crate::widgets::{registered, BoxView, InputField, Shared, TextView};

pub const DEVICES_TITLE: &str = "Devices";
pub const FILTER_LABEL: &str = "Filter: ";
pub const MAIN_HINT: &str = "jK up/down - gG top/bottom";

/// Logo page shown while the app starts.
pub struct SplashPage {
    pub logo: Shared<TextView>,
}

impl SplashPage {
    pub fn new(manager: &ThemeManager) -> Self {
        let text = format!("\n\n{}", LOGO.join("\n"));
        Self {
            logo: registered(manager, TextView::new(text).centered()),
        }
    }
}

/// Title line, devices box with a filter field, hint footer.
pub struct MainPage {
    pub title: Shared<TextView>,
    pub devices: Shared<BoxView>,
    pub filter: Shared<InputField>,
    pub footer: Shared<TextView>,
}

impl MainPage {
    pub fn new(manager: &ThemeManager) -> Self {
        Self {
            title: registered(manager, TextView::new(APP_NAME).centered()),
            devices: registered(manager, BoxView::new(DEVICES_TITLE)),
            filter: registered(manager, InputField::new(FILTER_LABEL)),
            footer: registered(manager, TextView::new(MAIN_HINT).centered()),
        }
    }
}

/// After `delay`, switch to the main page via the UI queue. Must be called
/// inside a tokio runtime.
pub fn schedule_main_page(ui: UiHandle, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        ui.queue_update(|state| state.switch_to(Page::Main));
    })
}
