//! Host services invoked by command handlers.
//!
//! Handlers never talk to the host directly. They go through these traits so
//! the terminal core can be driven by a browser, a desktop terminal, or a
//! test harness with mocks.

mod services;

pub use services::{
    ClipboardService, DesktopPlatform, LinkService, Platform, SystemTime, TimeService,
    osc52_sequence,
};
