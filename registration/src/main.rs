//! register-user
//!
//! Command-line front end for the registration service. Wires the JSON file
//! adapters into `UserService` and registers one user per invocation.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_registration::adapters::{
    JsonClientRepository, JsonCreditScorer, JsonLinesUserRepository, SystemClock,
};
use user_registration::config::Config;
use user_registration::{ClientId, RegistrationDecision, UserService};

const USAGE: &str =
    "usage: register-user <first-name> <last-name> <email> <YYYY-MM-DD> <client-id>";

#[derive(Debug, PartialEq)]
struct RegistrationArgs {
    first_name: String,
    last_name: String,
    email: String,
    date_of_birth: NaiveDate,
    client_id: ClientId,
}

fn parse_args(args: &[String]) -> anyhow::Result<RegistrationArgs> {
    let [first_name, last_name, email, date_of_birth, client_id] = args else {
        bail!(USAGE);
    };

    let date_of_birth = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d")
        .with_context(|| format!("invalid date of birth '{}'", date_of_birth))?;
    let client_id = client_id
        .parse::<i32>()
        .with_context(|| format!("invalid client id '{}'", client_id))?;

    Ok(RegistrationArgs {
        first_name: first_name.clone(),
        last_name: last_name.clone(),
        email: email.clone(),
        date_of_birth,
        client_id: ClientId(client_id),
    })
}

fn run(args: &[String]) -> anyhow::Result<RegistrationDecision> {
    let args = parse_args(args)?;
    let config = Config::from_env()?;

    let clients = JsonClientRepository::load(&config.clients_file).with_context(|| {
        format!(
            "failed to load clients from {}",
            config.clients_file.display()
        )
    })?;
    let credit = JsonCreditScorer::load(&config.credit_file).with_context(|| {
        format!(
            "failed to load credit limits from {}",
            config.credit_file.display()
        )
    })?;
    let users = JsonLinesUserRepository::new(&config.users_file);

    let service = UserService::new(
        Arc::new(clients),
        Arc::new(credit),
        Arc::new(users),
        Arc::new(SystemClock),
    );

    let decision = service.decide(
        &args.first_name,
        &args.last_name,
        &args.email,
        args.date_of_birth,
        args.client_id,
    )?;
    Ok(decision)
}

/// Message and exit code for a finished run
///
/// 0 accepted, 1 rejected, 2 usage, configuration or collaborator error.
fn outcome(result: &anyhow::Result<RegistrationDecision>) -> (String, u8) {
    match result {
        Ok(RegistrationDecision::Accepted { credit_limit }) => {
            (format!("accepted (credit limit: {})", credit_limit), 0)
        }
        Ok(RegistrationDecision::Rejected(reason)) => (format!("rejected: {}", reason), 1),
        Err(e) => (format!("error: {:#}", e), 2),
    }
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,user_registration=debug,register_user=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = run(&args);
    if let Err(e) = &result {
        tracing::error!(error = %e, "Registration failed");
    }

    let (message, code) = outcome(&result);
    if result.is_ok() {
        println!("{}", message);
    } else {
        eprintln!("{}", message);
    }
    ExitCode::from(code)
}
