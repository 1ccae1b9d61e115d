use std::process;
use std::time::Duration;

use clap::Parser;
use tracing::debug;

use check_bareos::api::{ApiClient, ApiError};
use check_bareos::check;
use check_bareos::check::UNKNOWN_EXIT;
use check_bareos::config::PluginConfig;
use check_bareos::logging;

#[derive(Parser)]
#[command(name = "check_bareos")]
#[command(about = "Icinga check plugin for the Bareos backup director REST API", long_about = None)]
struct Cli {
    /// Bareos backup host
    #[arg(short = 'H', long)]
    host: String,

    /// HTTP port of the API
    #[arg(short = 'p', long, default_value_t = 8000)]
    port: u16,

    /// API user
    #[arg(short = 'u', long, default_value = "admin")]
    user: String,

    /// API user password
    #[arg(short = 'P', long, default_value = "admin")]
    password: String,

    /// Check mode: jobs or pools
    #[arg(short = 'm', long, default_value = "Jobs")]
    mode: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    let config = PluginConfig {
        host: cli.host,
        port: cli.port,
        username: cli.user,
        password: cli.password,
        timeout: Duration::from_secs(cli.timeout),
    };

    let client = match ApiClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            debug!(error = %err, "failed to build API client");
            return unknown("API Error");
        }
    };

    let token = match client.fetch_token().await {
        Ok(token) => token,
        Err(err) => return api_failure("Token get failed", err),
    };

    match cli.mode.as_str() {
        "pools" => pools(&client, &token).await,
        // `jobs`, the default `Jobs`, and anything unrecognized all take
        // the jobs path.
        _ => jobs(&client, &token).await,
    }
}

async fn jobs(client: &ApiClient, token: &str) -> i32 {
    let list = match client.recent_jobs(token).await {
        Ok(list) => list,
        Err(err) => return api_failure("API Error", err),
    };

    let report = check::aggregate(&list.jobs);
    println!("{}", report.render());
    report.exit_code()
}

async fn pools(client: &ApiClient, token: &str) -> i32 {
    let totals = match client.job_totals(token).await {
        Ok(value) => value,
        Err(err) => return api_failure("API Error", err),
    };

    match check::render_totals(&totals) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            debug!(error = %err, "failed to render totals");
            unknown("API Error")
        }
    }
}

/// Map an API failure onto the plugin's fixed UNKNOWN line. The typed
/// error only reaches stderr; the stdout line never varies.
fn api_failure(what: &str, err: ApiError) -> i32 {
    debug!(error = %err, "API call failed");
    match err {
        ApiError::NotFound => unknown("Value not found"),
        _ => unknown(what),
    }
}

fn unknown(what: &str) -> i32 {
    println!("[UNKNOWN] {what} - try again later");
    UNKNOWN_EXIT
}
