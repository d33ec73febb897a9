use anyhow::{Context, Result};
use dioxus::prelude::*;
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::rc::Rc;

mod ui;

use formatted_comments_config::Config;
use ui::App;
use ui::components::ErrorScreen;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("formatted-comments starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    if env::args().count() > 2 {
        let program_name = env::args()
            .next()
            .unwrap_or_else(|| "formatted-comments".to_string());
        eprintln!("Usage: {} [draft-file]", program_name);
        process::exit(1);
    }

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

/// Config plus the initial comment text, from the draft argument or the
/// configured `draft_path`.
fn load_startup(config_path: &Path, draft: Option<PathBuf>) -> Result<(Config, String)> {
    let config = Config::load_from_path(config_path)?.unwrap_or_default();

    let text = match draft {
        Some(path) => {
            log::info!("Using draft from CLI argument: {}", path.display());
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read draft {}", path.display()))?
        }
        None => config.load_draft()?.unwrap_or_default(),
    };

    Ok((config, text))
}

fn app_root() -> Element {
    let startup = use_hook(|| {
        let startup = load_startup(&Config::config_path(), env::args().nth(1).map(PathBuf::from));
        if let Err(e) = &startup {
            log::error!("Startup failed: {e:#}");
        }
        Rc::new(startup)
    });

    match startup.as_ref() {
        Ok((config, initial_text)) => rsx! {
            App { config: config.clone(), initial_text: initial_text.clone() }
        },
        Err(e) => rsx! {
            ErrorScreen {
                message: e.to_string(),
                causes: e.chain().skip(1).map(|cause| cause.to_string()).collect::<Vec<_>>(),
                config_path: Config::config_path().display().to_string(),
            }
        },
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("formatted-comments")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
