//! Command implementations.

use std::thread;
use std::time::Duration;

use anyhow::{Context, bail};
use bazaar_api::{ApiClient, ApiError, SsePushTransport};
use bazaar_session::{PushTransport, SessionManager, SessionUpdate, StatsFeed};
use bazaar_validate::ValidationReport;
use bazaar_validate::forms;
use tracing::info;

use crate::cli::{LoginArgs, RegisterArgs, StatsWatchArgs, WatchArgs};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Exit code the maintenance notice pairs with.
pub const MAINTENANCE_EXIT: i32 = 2;

pub fn run_probe(base_url: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(base_url)?;
    let update = client.probe()?;
    let mut manager = SessionManager::new(Box::new(NullTransport));
    manager.apply(update);
    print_session(&manager);
    Ok(())
}

pub fn run_login(base_url: &str, args: &LoginArgs) -> anyhow::Result<()> {
    reject_invalid(&forms::login(&args.username, &args.password))?;
    let client = ApiClient::new(base_url)?;
    let update = client.login(&args.username, &args.password)?;
    apply_and_print(base_url, update)
}

pub fn run_register(base_url: &str, args: &RegisterArgs) -> anyhow::Result<()> {
    reject_invalid(&forms::registration(
        &args.username,
        &args.email,
        &args.password,
        &args.password,
    ))?;
    let client = ApiClient::new(base_url)?;
    let update = client.register(&args.username, &args.email, &args.password)?;
    apply_and_print(base_url, update)
}

/// Follow the notification stream for a user, printing payloads as they
/// arrive. Runs until the stream closes or the process is interrupted.
pub fn run_watch(base_url: &str, args: &WatchArgs) -> anyhow::Result<()> {
    let transport = SsePushTransport::new(base_url)?;
    let mut connection = transport
        .connect(&args.username)
        .context("opening notification stream")?;
    transport
        .register(&args.username)
        .context("registering on the side channel")?;
    info!(username = %args.username, "notification stream open");
    while connection.is_alive() {
        while let Some(payload) = connection.try_recv() {
            println!("{payload}");
        }
        thread::sleep(POLL_INTERVAL);
    }
    bail!("notification stream closed by the server")
}

pub fn run_stats_watch(base_url: &str, args: &StatsWatchArgs) -> anyhow::Result<()> {
    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        reject_invalid(&forms::date_range(from, to))?;
    }
    let transport = SsePushTransport::new(base_url)?;
    let mut connection = transport.connect_stats()?;
    let mut feed = StatsFeed::new();
    info!("statistics stream open");
    while connection.is_alive() {
        while let Some(record) = connection.try_recv() {
            if in_range(&record.date, args.from.as_deref(), args.to.as_deref()) {
                feed.push(record);
                if let Some(latest) = feed.records().last() {
                    println!("{}", serde_json::to_string(latest)?);
                }
            }
        }
        thread::sleep(POLL_INTERVAL);
    }
    bail!("statistics stream closed by the server")
}

fn in_range(date: &str, from: Option<&str>, to: Option<&str>) -> bool {
    use std::cmp::Ordering;
    let after_from = from.is_none_or(|f| {
        bazaar_validate::dates::compare(f, date) != Some(Ordering::Greater)
    });
    let before_to = to.is_none_or(|t| {
        bazaar_validate::dates::compare(date, t) != Some(Ordering::Greater)
    });
    after_from && before_to
}

/// Print field errors and fail when local validation rejects the form.
fn reject_invalid(report: &ValidationReport) -> anyhow::Result<()> {
    if report.is_valid() {
        return Ok(());
    }
    for (field, message) in report.fields() {
        if !message.is_empty() {
            eprintln!("{field}: {message}");
        }
    }
    bail!("form input is invalid")
}

fn apply_and_print(base_url: &str, update: SessionUpdate) -> anyhow::Result<()> {
    let transport = SsePushTransport::new(base_url)?;
    let mut manager = SessionManager::new(Box::new(transport));
    manager.apply(update);
    print_session(&manager);
    Ok(())
}

fn print_session(manager: &SessionManager) {
    if manager.is_logged_in() {
        println!(
            "logged in as {} (user id {}{})",
            manager.username(),
            manager.user_id(),
            if manager.is_admin() { ", admin" } else { "" }
        );
    } else {
        println!("not logged in (guest)");
    }
}

/// Probe-only sessions never open a push channel.
struct NullTransport;

impl PushTransport for NullTransport {
    fn connect(
        &self,
        _username: &str,
    ) -> Result<Box<dyn bazaar_session::PushConnection>, bazaar_session::SessionError> {
        Err(bazaar_session::SessionError::Unavailable)
    }

    fn register(&self, _username: &str) -> Result<(), bazaar_session::SessionError> {
        Ok(())
    }
}

/// Map an error chain to the process exit code, printing the maintenance
/// notice when the backend is down.
pub fn report_failure(error: &anyhow::Error) -> i32 {
    if matches!(error.downcast_ref::<ApiError>(), Some(ApiError::Unavailable)) {
        eprintln!("The marketplace is down for maintenance. Please try again later.");
        return MAINTENANCE_EXIT;
    }
    eprintln!("error: {error:#}");
    1
}
