//! Panic reporting
//!
//! The terminal is restored first so the report is readable. The report is
//! always written to the log. Release builds also print a human-panic crash
//! notice; debug builds print a full better-panic backtrace.

use std::panic::{self, PanicHookInfo};
use std::process;

use color_eyre::{config::HookBuilder, eyre::Result};

use crate::infrastructure::tui::real::RealTui;

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |info| {
        if let Err(e) = RealTui::restore() {
            tracing::error!("Unable to restore terminal: {e:?}");
        }

        let report = panic_hook.panic_report(info).to_string();
        log::error!("Error: {}", strip_ansi_escapes::strip_str(&report));

        #[cfg(not(debug_assertions))]
        print_crash_notice(info, &report);
        #[cfg(debug_assertions)]
        print_backtrace(info);

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

#[cfg(not(debug_assertions))]
fn print_crash_notice(info: &PanicHookInfo<'_>, report: &str) {
    use human_panic::{handle_dump, print_msg, Metadata};

    let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
        .homepage(env!("CARGO_PKG_HOMEPAGE"));
    let dump = handle_dump(&meta, info);
    if let Err(e) = print_msg(dump, &meta) {
        log::error!("Unable to print crash notice: {e}");
    }
    eprintln!("{report}");
}

#[cfg(debug_assertions)]
fn print_backtrace(info: &PanicHookInfo<'_>) {
    better_panic::Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .verbosity(better_panic::Verbosity::Full)
        .create_panic_handler()(info);
}
