//! Box office admin console.
//!
//! Reads one command per line from stdin, sends it to the admin store,
//! waits for the remote calls it triggers, then prints the screen and any
//! alerts. Type `help` for the command list.

use box_office::config::{Config, ReminderMode};
use box_office::console::{self, Command, HELP};
use box_office::view;
use box_office::{
    AdminAction, AdminEnvironment, AdminReducer, AdminState, AdminStore, AdminUser, AlertLevel,
    ConsoleReminderSender, HttpReminderSender, PostgrestBackend, ReminderSender,
};
use marquee_core::environment::SystemClock;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

async fn dispatch(store: &AdminStore, action: AdminAction) -> Result<(), Box<dyn std::error::Error>> {
    store.send_cascading(action).await?.wait().await;
    Ok(())
}

/// Print the screen, then print and dismiss every pending alert
async fn refresh(store: &AdminStore) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}\n", store.state(view::render).await);

    let alerts = store.state(|s| s.alerts.clone()).await;
    for alert in alerts {
        let level = match alert.level {
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Error => "error",
        };
        println!("[{level}] {}", alert.message);
        store.send(AdminAction::DismissAlert).await?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;

    // Logs go to stderr so the screen on stdout stays readable
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("box_office={}", config.log_level))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(backend = %config.backend.url, "Starting box office console");

    let mut backend = PostgrestBackend::new(&config.backend.url, &config.backend.anon_key);
    if let Some(token) = &config.backend.access_token {
        backend = backend.with_access_token(token);
    }

    let reminders: Arc<dyn ReminderSender> = match config.reminders.mode {
        ReminderMode::Http => Arc::new(HttpReminderSender::new(&config.reminders.base_url)),
        ReminderMode::Console => {
            info!("Reminder emails will be logged, not sent");
            Arc::new(ConsoleReminderSender::new())
        },
    };

    let env = AdminEnvironment::new(Arc::new(backend), reminders, Arc::new(SystemClock));
    let store = AdminStore::new(AdminState::default(), AdminReducer::new(), env);

    let user = config.admin_email.clone().map(|email| AdminUser { email });
    dispatch(&store, AdminAction::Mount { user }).await?;
    refresh(&store).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match console::parse(&line) {
            Ok(None) => {},
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Show)) => refresh(&store).await?,
            Ok(Some(Command::Dispatch(action))) => {
                dispatch(&store, action).await?;
                refresh(&store).await?;
            },
            Err(err) => warn!(%err, "Invalid command"),
        }
    }

    info!("Shutting down");
    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
