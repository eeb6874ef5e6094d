use tracing_subscriber::EnvFilter;

use availability_editor::config::AppConfig;
use availability_editor::services::backend::http::HttpBackend;
use availability_editor::services::validation;
use availability_editor::state::EditorSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!("using backend at {}", config.backend_url);
    if config.auth_token.is_none() {
        tracing::warn!("AUTH_TOKEN not set, requests will be unauthenticated");
    }

    let backend = HttpBackend::from_config(&config)?;
    let session = EditorSession::load(&backend).await?;

    for week in session.editor.weeks() {
        let conflicts = session.editor.detect_overlaps(week.id)?;
        for (weekday, day) in week.iter_days() {
            let flagged = conflicts.for_day(weekday);
            if flagged.is_empty() {
                tracing::info!(week = %week.name, day = %weekday, "{}", day.summary());
            } else {
                tracing::warn!(
                    week = %week.name,
                    day = %weekday,
                    slots = ?flagged,
                    "{} (overlapping slots)",
                    day.summary()
                );
            }
        }
    }

    let problems = validation::validate_all(&session.save_form());
    for problem in &problems {
        tracing::warn!("{problem}");
    }

    if config.save_on_exit {
        session.save(&backend).await?;
    } else if problems.is_empty() {
        tracing::info!("settings are valid; set SAVE_ON_EXIT=1 to push them back");
    }

    Ok(())
}
