//! Splash screen content and timing.

use std::time::Duration;

/// How long the splash page stays up before switching to the main page.
pub const SPLASH_DELAY: Duration = Duration::from_secs(1);

/// ASCII logo shown on the splash page.
pub const LOGO: [&str; 6] = [
    r"Knock Knock..                                                     ",
    r"                _               _   _                   ___       ",
    r"      __      _| |__   ___  ___| |_| |__   ___ _ __ ___/ _ \      ",
    r"      \ \ /\ / / '_ \ / _ \/ __| __| '_ \ / _ \ '__/ _ \// /      ",
    r"       \ V  V /| | | | (_) \__ \ |_| | | |  __/ | |  __/ \/       ",
    r"        \_/\_/ |_| |_|\___/|___/\__|_| |_|\___|_|  \___| ()       ",
];
