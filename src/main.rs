//! bila-dkhane: command line front end for the progress ledger and coach.

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bila_dkhane::adapters::ai::{GeminiConfig, GeminiProvider};
use bila_dkhane::adapters::notifications::{NoOpNotifier, TracingNotifier};
use bila_dkhane::adapters::storage::JsonFileProgressStore;
use bila_dkhane::application::{AnatomyVariant, CoachService, ProgressService};
use bila_dkhane::config::AppConfig;
use bila_dkhane::domain::foundation::{Timestamp, ValidationError};
use bila_dkhane::domain::overview::{ProgressOverview, ANONYMOUS_NAME};
use bila_dkhane::domain::progress::{
    craving_trigger, CheckInOutcome, CravingIntensity, MissionOutcome, MoodValue, ProgressError,
    ProgressEvent, ProgressLedger,
};
use bila_dkhane::domain::settings::UserConfig;
use bila_dkhane::ports::Notifier;

use cli::{AnatomyArg, Cli, Command};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reset not confirmed, pass --yes to erase all progress")]
    ResetNotConfirmed,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Err(e) = config.validate() {
        eprintln!("error: invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    init_tracing(&config);

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries command output only.
fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_coach(config: &AppConfig) -> CoachService {
    let key = match &config.ai.gemini_api_key {
        Some(key) if config.ai.has_gemini() => key,
        _ => {
            info!("no Gemini API key configured, coach runs offline");
            return CoachService::offline();
        }
    };

    let gemini = GeminiConfig::new(key.expose_secret().clone())
        .with_base_url(&config.ai.base_url)
        .with_standard_model(&config.ai.standard_model)
        .with_advanced_model(&config.ai.advanced_model)
        .with_image_model(&config.ai.image_model)
        .with_timeout(config.ai.timeout())
        .with_max_retries(config.ai.max_retries);

    match GeminiProvider::new(gemini) {
        Ok(provider) => CoachService::new(Arc::new(provider), config.ai.timeout()),
        Err(e) => {
            warn!(error = %e, "Gemini provider unavailable, coach runs offline");
            CoachService::offline()
        }
    }
}

async fn run(command: Command, config: &AppConfig) -> Result<(), CliError> {
    let store = Arc::new(JsonFileProgressStore::new(&config.storage.data_dir));
    let notifier: Arc<dyn Notifier> = if config.notifications.enabled {
        Arc::new(TracingNotifier::new())
    } else {
        Arc::new(NoOpNotifier)
    };
    let ledger = ProgressLedger::new(config.ledger.streak_policy);
    let progress = ProgressService::open(ledger, store, notifier).await;
    let coach = build_coach(config);

    let at = Timestamp::now();
    let today = at.local_date();

    match command {
        Command::Status { json } => {
            let overview = progress.overview(today).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                print_overview(&overview);
            }
        }

        Command::CheckIn => match progress.check_in(today, at).await {
            CheckInOutcome::Accepted(transition) => {
                let state = &transition.state;
                println!(
                    "Day {} recorded. Streak {} (best {}), {} XP.",
                    state.days, state.streak, state.longest_streak, state.xp
                );
                print_level_ups(&transition.events);
            }
            CheckInOutcome::AlreadyCheckedIn => println!("Already checked in today."),
            CheckInOutcome::OutOfOrder { last_check_in } => println!(
                "Last check-in was {}, which is after today ({}). Nothing recorded.",
                last_check_in, today
            ),
        },

        Command::Mood { value } => {
            let value = MoodValue::try_new(value)?;
            progress.log_mood(value, at).await;
            println!("Mood {} logged.", value);
        }

        Command::Craving { trigger, intensity } => {
            let intensity = CravingIntensity::try_new(intensity)?;
            let trigger = craving_trigger(&trigger)?;
            let language = progress.snapshot().await.config.language;
            let advice = coach.craving_advice(trigger, intensity, language).await;
            progress
                .log_craving(trigger, intensity, advice.text.clone(), at)
                .await?;
            println!("{}", advice.text);
        }

        Command::Mission => match progress.complete_mission(at).await {
            MissionOutcome::Completed(transition) => {
                let mission = &transition.state.current_mission;
                println!("Mission '{}' complete, +{} XP.", mission.task, mission.xp_reward);
                print_level_ups(&transition.events);
            }
            MissionOutcome::AlreadyCompleted => println!("Mission already completed."),
        },

        Command::Profile {
            first_name,
            last_name,
            cigarettes_per_day,
            pack_price,
            wish_name,
            wish_price,
            language,
            target_days,
        } => {
            let current = progress.snapshot().await;
            let defaults = current.config.clone();
            let config = UserConfig {
                cigarettes_per_day: cigarettes_per_day.unwrap_or(defaults.cigarettes_per_day),
                pack_price: pack_price.unwrap_or(defaults.pack_price),
                wish_name: wish_name.unwrap_or(defaults.wish_name),
                wish_price: wish_price.unwrap_or(defaults.wish_price),
                language: language.unwrap_or(defaults.language),
                target_days: target_days.unwrap_or(defaults.target_days),
            };
            let first = first_name.unwrap_or(current.first_name);
            let last = last_name.unwrap_or(current.last_name);

            let updated = progress.update_profile(&first, &last, config).await?;
            println!("Profile saved for {}.", updated.display_name(ANONYMOUS_NAME));
        }

        Command::Wisdom => {
            let state = progress.snapshot().await;
            let reply = coach
                .daily_wisdom(state.days, state.config.target_days, state.config.language)
                .await;
            println!("{}", reply.text);
        }

        Command::Coach { question } => {
            let state = progress.snapshot().await;
            let reply = coach
                .coach_reply(&question.join(" "), state.days, state.config.language)
                .await;
            println!("{}", reply.text);
        }

        Command::WishImage => {
            let wish = progress.snapshot().await.config.wish_name;
            match coach.wish_image(&wish).await {
                Some(url) => {
                    let size = url.len();
                    progress.set_wish_image(url).await;
                    println!("Reward image for '{}' cached ({} bytes).", wish, size);
                }
                None => println!("Image generation unavailable."),
            }
        }

        Command::Anatomy { variant } => {
            let variant = match variant {
                AnatomyArg::Smoker => AnatomyVariant::Smoker,
                AnatomyArg::Recovered => AnatomyVariant::Recovered,
            };
            match coach.anatomy_image(variant).await {
                Some(url) => println!("{}", url),
                None => println!("Image generation unavailable."),
            }
        }

        Command::Reset { yes } => {
            if !yes {
                return Err(CliError::ResetNotConfirmed);
            }
            progress.reset().await;
            println!("All progress erased.");
        }
    }

    progress.flush_notifications().await;
    Ok(())
}

fn print_level_ups(events: &[ProgressEvent]) {
    for event in events {
        if let ProgressEvent::LeveledUp { level, title, .. } = event {
            println!("Level up: {} ({}).", level, title);
        }
    }
}

fn print_overview(overview: &ProgressOverview) {
    println!("{}", overview.display_name);
    println!(
        "  Level {} {} - {} XP ({} of level)",
        overview.level.level, overview.level.title, overview.level.xp, overview.level.progress
    );
    println!(
        "  Days clean: {}/{} ({}), {} to go",
        overview.days, overview.target_days, overview.progress, overview.days_remaining
    );
    println!(
        "  Streak: {} (best {}){}",
        overview.streak,
        overview.longest_streak,
        if overview.checked_in_today {
            ", checked in today"
        } else {
            ""
        }
    );
    println!(
        "  Saved: {:.2} - {} {}",
        overview.savings, overview.wish_name, overview.wish_progress
    );
    println!(
        "  Regeneration: {} - {}",
        overview.regeneration_score, overview.health_message
    );
    if let Some(next) = &overview.next_milestone {
        println!("  Next milestone: {} ({} days)", next.label, next.days_required);
    }
    println!(
        "  Mission: {}{}",
        overview.mission.task,
        if overview.mission.completed { " (done)" } else { "" }
    );
}
