//! Headless shell entry point.
//!
//! Runs the player core against an in-memory page, reading user input from
//! stdin and printing the address bar and page markup after every event.
//!
//! # Usage
//!
//! ```text
//! ministream [key=value ...]
//! ```
//!
//! Keys: `location`, `theme`, `display_mode`, `script_url`,
//! `script_available`, `trace_level`, `log_file`, `config` (TOML file whose
//! values the other keys override).
//!
//! # Commands
//!
//! One per line on stdin:
//! - `:theme`: Toggle light/dark theme
//! - `:mode`: Toggle minimal/full display mode
//! - `:clear`: Submit empty input
//! - `:quit`: Exit
//! - anything else: Submit it as a link or channel name

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use ministream::infrastructure::PageUrl;
use ministream::player::ScriptLoader;
use ministream::shell::headless::{HeadlessContainer, HeadlessInjector};
use ministream::shell::Shell;
use ministream::{Config, Event, Result};

type HeadlessShell = Shell<PageUrl, HeadlessInjector, HeadlessContainer>;

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1));
    let config = Config::load(&args)?;
    ministream::observability::init_tracing(&config);

    let span = tracing::debug_span!("shell_load");
    let guard = span.entered();
    tracing::debug!(location = %config.location, "parsed configuration");

    let page = PageUrl::parse(&config.location)?;
    let loader = ScriptLoader::new(HeadlessInjector::new(config.script_available), config.script_url.clone());
    let mut shell = Shell::new(ministream::initialize(&config), page, loader, HeadlessContainer::default());

    shell.start()?;
    futures::executor::block_on(shell.settle_pending());
    drop(guard);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_page(&mut out, &shell)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(events) = map_command(&line) else {
            tracing::debug!("quit requested");
            break;
        };

        let mut should_render = false;
        for event in &events {
            let span = tracing::debug_span!("shell_update_event", event_type = ?event);
            let _guard = span.entered();
            match shell.dispatch(event) {
                Ok(render) => should_render |= render,
                Err(e) => tracing::error!(error = %e, "error handling event"),
            }
        }
        if futures::executor::block_on(shell.settle_pending()) > 0 {
            should_render = true;
        }

        if should_render {
            print_page(&mut out, &shell)?;
        }
    }

    Ok(())
}

/// Collects `key=value` arguments. Arguments without `=` are ignored.
fn parse_args(args: impl Iterator<Item = String>) -> BTreeMap<String, String> {
    args.filter_map(|arg| {
        let Some((key, value)) = arg.split_once('=') else {
            tracing::debug!(argument = %arg, "ignoring argument without '='");
            return None;
        };
        Some((key.trim().to_string(), value.to_string()))
    })
    .collect()
}

/// Maps a stdin line to the events it triggers, or `None` to quit.
///
/// Submissions are preceded by an input change, like typing before pressing
/// enter.
fn map_command(line: &str) -> Option<Vec<Event>> {
    Some(match line.trim() {
        ":quit" => return None,
        ":theme" => vec![Event::ToggleTheme],
        ":mode" => vec![Event::ToggleDisplayMode],
        ":clear" => vec![Event::InputChanged, Event::Submit(String::new())],
        _ => vec![Event::InputChanged, Event::Submit(line.to_string())],
    })
}

fn print_page(out: &mut impl Write, shell: &HeadlessShell) -> io::Result<()> {
    writeln!(out, "address: {}", shell.page().href())?;
    if let Some(options) = shell.adapter().container().mounted() {
        writeln!(out, "embed: {}", options.to_json())?;
    }
    writeln!(out, "{}", shell.render())?;
    out.flush()
}
