mod config;

use config::AppConfig;
use fairsplit_application::{SessionContext, SettlementService};
use fairsplit_infrastructure::load_snapshot;
use fairsplit_presentation::ReportPresenter;
use std::{borrow::Cow, env, process};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Err("Usage: fairsplit <event.json> [user-id]".into());
    };
    let user = args.next();

    let config = AppConfig::from_env()?;
    tracing::debug!(
        scale = config.context.scale,
        rounding_mode = ?config.context.rounding_mode,
        unknown_participants = ?config.context.unknown_participants,
        currency = %config.currency,
        "Configuration loaded"
    );

    let snapshot = load_snapshot(&path).map_err(|err| err.to_string())?;
    let event_id = snapshot.event.id.clone();
    // Without an explicit user the file owner is assumed.
    let session = SessionContext::new(
        user.as_deref().map_or_else(|| snapshot.event.created_by.clone(), Into::into),
        config.role,
    );
    let store = snapshot.into_store().map_err(|err| err.to_string())?;

    let service =
        SettlementService::new(&store, config.context).map_err(|err| err.to_string())?;
    let report = service
        .report(&session, &event_id)
        .map_err(|err| err.to_string())?;

    print!("{}", ReportPresenter::render(&report, &config.currency));
    Ok(())
}
