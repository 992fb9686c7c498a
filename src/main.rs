use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use toa_login::config::Config;
use toa_login::logging::init_tracing;
use toa_login::preview::{buffer_to_text, render_preview, PreviewState};
use toa_login::service::ScriptedLoginService;
use toa_login::ui::app::{App, SessionOutcome};
use toa_login::ui::runtime;
use toa_login::ui::theme::ThemeMode;

#[derive(Parser, Debug)]
#[command(name = "toa-login", version, about = "Terminal login screen")]
struct Cli {
    /// Path to config file (default: ~/.config/toa-login/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured color theme
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeMode>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive login screen (default)
    Run,
    /// Print the login screen rendered for canned states
    Preview {
        /// State to render; all states when omitted
        #[arg(long, value_enum)]
        state: Option<PreviewState>,
        #[arg(long, default_value_t = 60)]
        width: u16,
        #[arg(long, default_value_t = 32)]
        height: u16,
    },
}

fn main() -> ExitCode {
    init_tracing();
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(&config),
        Command::Preview {
            state,
            width,
            height,
        } => {
            preview(&config, state, width, height);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run(config: &Config) -> anyhow::Result<ExitCode> {
    let app = App::new(config.strings(), config.ui.screen_settings());
    let service = Arc::new(ScriptedLoginService::new(
        config.login.outcome,
        config.login.delay(),
    ));
    let outcome =
        runtime::run(app, service, config.ui.tick_rate()).context("terminal session failed")?;

    let code = match outcome {
        SessionOutcome::LoggedIn { email } => {
            println!("Logged in as {email}");
            ExitCode::SUCCESS
        }
        SessionOutcome::SignUpRequested => {
            println!("Sign-up requested");
            ExitCode::from(2)
        }
        SessionOutcome::Cancelled => ExitCode::from(130),
    };
    Ok(code)
}

fn preview(config: &Config, state: Option<PreviewState>, width: u16, height: u16) {
    let strings = config.strings();
    let settings = config.ui.screen_settings();
    let states = match state {
        Some(state) => vec![state],
        None => PreviewState::ALL.to_vec(),
    };

    for (idx, state) in states.into_iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("── {} ──", state.name());
        let buf = render_preview(&state.view_state(), settings, &strings, width, height);
        println!("{}", buffer_to_text(&buf));
    }
}
