use anyhow::Context;
use dnsq_application::ports::NameserverSource;
use dnsq_domain::{CliOverrides, Config, DomainError};
use std::net::IpAddr;
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("loading configuration")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// `RUST_LOG` wins; otherwise the configured level, raised by `-d`.
pub fn init_logging(config: &Config, debug: u8) {
    let directive = log_directive(&config.logging.level, debug);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn log_directive(configured: &str, debug: u8) -> String {
    let floor = match debug {
        0 => return configured.to_string(),
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    match configured.parse::<LevelFilter>() {
        Ok(level) if level > floor => level.to_string().to_lowercase(),
        _ => floor.to_string().to_lowercase(),
    }
}

/// The configured server if there is one, else the first system nameserver.
pub async fn choose_server(
    configured: Option<&str>,
    source: &dyn NameserverSource,
) -> Result<IpAddr, DomainError> {
    if let Some(server) = configured {
        return server.parse().map_err(|_| {
            DomainError::InvalidIpAddress(format!("did not recognize {} as a valid IP", server))
        });
    }

    let servers = match source.nameservers().await {
        Ok(servers) => servers,
        Err(e) => {
            warn!(error = %e, "No system nameservers available");
            Vec::new()
        }
    };
    debug!(count = servers.len(), "System nameservers");
    servers.into_iter().next().ok_or(DomainError::NoNameservers)
}
