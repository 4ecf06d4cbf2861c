//! Main app runner: build the requested notifier and send once

use std::env;
use std::process::ExitCode;

use thiserror::Error;

use crate::application::ports::{ConfigStore, NotificationError, Notifier};
use crate::application::{SendCallbacks, SendNotificationUseCase};
use crate::domain::config::{
    AppConfig, BeepConfig, DesktopConfig, TokenConfig, WebhookConfig,
};
use crate::infrastructure::{
    BeepNotifier, DesktopNotifier, DiscordNotifier, LineNotifier, SlackNotifier, XdgConfigStore,
};

use super::args::Commands;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variables read into the config layer
pub const ENV_MESSAGE: &str = "NOTIFICATOR_MESSAGE";
pub const ENV_SLACK_URL: &str = "SLACK_WEBHOOK_URL";
pub const ENV_DISCORD_URL: &str = "DISCORD_WEBHOOK_URL";
pub const ENV_LINE_TOKEN: &str = "LINE_NOTIFY_TOKEN";

/// Errors while turning arguments into a notifier
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl AppError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => EXIT_USAGE_ERROR,
            Self::Notification(_) => EXIT_ERROR,
        }
    }
}

/// Initialise env_logger. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Translate command-line flags into a partial config
pub fn cli_config(command: &Commands) -> AppConfig {
    match command {
        Commands::Beep(args) => AppConfig {
            beep: args.times.map(|times| BeepConfig { times: Some(times) }),
            ..Default::default()
        },
        Commands::Desktop(args) => AppConfig {
            message: args.message.clone(),
            desktop: Some(DesktopConfig {
                title: args.title.clone(),
                subtitle: args.subtitle.clone(),
                icon: args.icon.clone(),
                sound: args.nosound.then_some(false),
            }),
            ..Default::default()
        },
        Commands::Slack(args) => AppConfig {
            message: args.message.clone(),
            slack: Some(WebhookConfig {
                url: args.url.clone(),
            }),
            ..Default::default()
        },
        Commands::Discord(args) => AppConfig {
            message: args.message.clone(),
            discord: Some(WebhookConfig {
                url: args.url.clone(),
            }),
            ..Default::default()
        },
        Commands::Line(args) => AppConfig {
            message: args.message.clone(),
            line: Some(TokenConfig {
                token: args.token.clone(),
            }),
            ..Default::default()
        },
        Commands::Config { .. } => AppConfig::empty(),
    }
}

/// Read the supported environment variables into a partial config
pub fn env_config() -> AppConfig {
    let var = |name: &str| env::var(name).ok().filter(|s| !s.is_empty());

    AppConfig {
        message: var(ENV_MESSAGE),
        slack: var(ENV_SLACK_URL).map(|url| WebhookConfig { url: Some(url) }),
        discord: var(ENV_DISCORD_URL).map(|url| WebhookConfig { url: Some(url) }),
        line: var(ENV_LINE_TOKEN).map(|token| TokenConfig { token: Some(token) }),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring config file {}: {}", store.path().display(), e);
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

fn missing(what: &str, env_name: &str, key: &str) -> AppError {
    AppError::Usage(format!(
        "Missing {}. Pass it as an argument, set {}, or run 'notificator config set {} <value>'",
        what, env_name, key
    ))
}

/// Build the notifier for `command` from the merged config
pub fn build_notifier(
    command: &Commands,
    config: &AppConfig,
) -> Result<Box<dyn Notifier>, AppError> {
    let message = config.message_or_default();

    let notifier: Box<dyn Notifier> = match command {
        Commands::Beep(_) => Box::new(BeepNotifier::new(config.beep_times_or_default())?),
        Commands::Desktop(_) => {
            let mut desktop = DesktopNotifier::new(message)?;
            if let Some(title) = config.desktop_title() {
                desktop.set_title(title)?;
            }
            if let Some(subtitle) = config.desktop_subtitle() {
                desktop.set_subtitle(subtitle)?;
            }
            if let Some(icon) = config.desktop_icon() {
                desktop.set_icon(icon)?;
            }
            desktop.set_sound(config.desktop_sound_or_default())?;
            Box::new(desktop)
        }
        Commands::Slack(_) => {
            let url = config
                .slack_url()
                .ok_or_else(|| missing("Slack webhook URL", ENV_SLACK_URL, "slack.url"))?;
            Box::new(SlackNotifier::new(message, url)?)
        }
        Commands::Discord(_) => {
            let url = config
                .discord_url()
                .ok_or_else(|| missing("Discord webhook URL", ENV_DISCORD_URL, "discord.url"))?;
            Box::new(DiscordNotifier::new(message, url)?)
        }
        Commands::Line(_) => {
            let token = config
                .line_token()
                .ok_or_else(|| missing("LINE Notify token", ENV_LINE_TOKEN, "line.token"))?;
            Box::new(LineNotifier::new(message, token)?)
        }
        Commands::Config { .. } => {
            return Err(AppError::Usage("config is not a notification channel".to_string()))
        }
    };

    Ok(notifier)
}

/// Run a notification subcommand
pub async fn run_notify(command: &Commands) -> ExitCode {
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();
    let config = load_merged_config(&store, cli_config(command)).await;

    let notifier = match build_notifier(command, &config) {
        Ok(notifier) => notifier,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(e.exit_code());
        }
    };

    let channel = command.channel();
    let spinner = presenter.spinner(&format!("Sending {} notification...", channel));
    let on_sent = spinner.clone();
    let on_failed = spinner.clone();

    let callbacks = SendCallbacks {
        on_start: None,
        on_sent: Some(Box::new(move |elapsed| {
            Presenter::spinner_success(
                &on_sent,
                &format!("Sent {} notification ({:.1}s)", channel, elapsed.as_secs_f32()),
            );
        })),
        on_failed: Some(Box::new(move |_| {
            Presenter::spinner_fail(&on_failed, &format!("{} notification failed", channel));
        })),
    };

    let use_case = SendNotificationUseCase::new(notifier);
    match use_case.execute(callbacks).await {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
