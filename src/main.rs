use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use xio_collector::{
    collector,
    config::{parse_flag, Config, Overrides},
    error::Result,
    logging,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/Default.toml")]
    config: String,

    /// XtremIO array hostname, optionally host:port
    #[arg(long, env = "XIO_ARRAYNAME")]
    array_name: Option<String>,

    /// XtremIO admin username
    #[arg(long, env = "XIO_USERNAME")]
    username: Option<String>,

    /// XtremIO admin password
    #[arg(long, env = "XIO_PASSWD", hide_env_values = true)]
    password: Option<String>,

    /// Inventory API endpoint receiving the record
    #[arg(long, env = "TARGET_API_URL")]
    target_api_url: Option<String>,

    /// Log verbosity (DEBUG, INFO, WARNING, ERROR, CRITICAL or a tracing directive)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Verify the array's TLS certificate (true/false)
    #[arg(long, env = "XIO_VERIFY_SSL")]
    array_verify_ssl: Option<String>,

    /// Verify the inventory API's TLS certificate (true/false)
    #[arg(long, env = "TARGET_VERIFY_SSL")]
    target_verify_ssl: Option<String>,
}

impl Args {
    /// Flag values are checked here rather than by clap so a bad value exits 1 like any
    /// other configuration error
    fn overrides(&self) -> Result<Overrides> {
        Ok(Overrides {
            array_name: self.array_name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            target_api_url: self.target_api_url.clone(),
            array_verify_ssl: parse_flag(
                self.array_verify_ssl.as_deref(),
                "array TLS verification (XIO_VERIFY_SSL)",
            )?,
            target_verify_ssl: parse_flag(
                self.target_verify_ssl.as_deref(),
                "target TLS verification (TARGET_VERIFY_SSL)",
            )?,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables from .env if present, before clap reads them
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let _log_guard = logging::init(args.log_level.as_deref());

    info!("Starting XtremIO collector v{}", env!("CARGO_PKG_VERSION"));

    let outcome = match args
        .overrides()
        .and_then(|overrides| Config::load(&args.config, &overrides))
    {
        Ok(config) => collector::run(&config).await.map(|_| ()),
        Err(e) => Err(e),
    };

    ExitCode::from(collector::report(&outcome))
}
