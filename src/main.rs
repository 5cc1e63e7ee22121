use std::path::PathBuf;

use browser_shell::browser_window::{BrowserShell, ShellEvent};
use browser_shell::{config, logging};
use clap::Parser;
use gpui::{App, Application, AsyncApp};

/// A minimal multi-window web browser shell.
#[derive(Debug, Parser)]
#[command(name = "browser-shell", version, about)]
struct Cli {
    /// Address for the first window (overrides `defaultUrl` from config)
    #[arg(long)]
    url: Option<String>,

    /// Config file to use instead of ~/.browser-shell/config.json
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    let loaded_config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let default_url = cli
        .url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| loaded_config.get_default_url());
    let layout = loaded_config.get_layout();
    logging::log(
        "APP",
        &format!("Loaded config: default_url={}, layout={:?}", default_url, layout),
    );

    Application::new().run(move |cx: &mut App| {
        logging::log("APP", "GPUI Application starting");
        gpui_component::init(cx);

        let (events_tx, events_rx) = async_channel::unbounded::<ShellEvent>();
        let shell = BrowserShell::start(cx, layout, &default_url, events_tx);
        cx.set_global(shell);
        cx.activate(true);

        // Close notifications are processed one at a time on the UI thread
        cx.spawn(async move |cx: &mut AsyncApp| {
            while let Ok(event) = events_rx.recv().await {
                let should_quit = cx.update(|cx: &mut App| {
                    cx.update_global::<BrowserShell, _>(|shell, _| shell.handle_event(event))
                });
                match should_quit {
                    Ok(true) => {
                        let _ = cx.update(|cx: &mut App| cx.quit());
                        break;
                    }
                    Ok(false) => {
                        // Window menus of the remaining windows list the closed one
                        let _ = cx.update(|cx: &mut App| BrowserShell::refresh_windows(None, cx));
                    }
                    // App is already shutting down
                    Err(_) => break,
                }
            }
            logging::log("APP", "Shell event loop finished");
        })
        .detach();
    });
}
