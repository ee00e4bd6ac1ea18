//! Error and panic reporting.

use color_eyre::config::{HookBuilder, Theme};
use eyre::Result;
use std::io::IsTerminal;

/// Enables span traces and the environment section in reports.
const DEBUG_ENV: &str = "ENSN_DEBUG";

const PANIC_SECTION: &str = "This is a bug. Consider reporting it at \
                             https://github.com/ens-normalize/ens-normalize-rs/issues";

/// Installs the `color-eyre` report and panic hooks.
///
/// Reports are colored only when stderr is a terminal and `NO_COLOR` is unset.
pub fn install() -> Result<()> {
    let debug = std::env::var_os(DEBUG_ENV).is_some();
    let color = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    builder(debug, color).install()
}

fn builder(debug: bool, color: bool) -> HookBuilder {
    HookBuilder::default()
        .theme(if color { Theme::dark() } else { Theme::new() })
        .panic_section(PANIC_SECTION)
        .capture_span_trace_by_default(debug)
        .display_env_section(debug)
        .display_location_section(debug)
}
