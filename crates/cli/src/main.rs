use clap::{ArgAction, Parser};
use dnsq_application::use_cases::{LookupHostUseCase, LookupPolicy, LookupRequest};
use dnsq_domain::{parse_query_type, CliOverrides, Config, DnsProtocol, DomainError};
use dnsq_infrastructure::dns::create_transport;
use dnsq_infrastructure::system::ResolvConfReader;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error};

mod bootstrap;
mod output;

#[derive(Parser)]
#[command(name = "dnsq")]
#[command(version)]
#[command(about = "DNS query utility")]
struct Cli {
    /// Hostname to look up
    hostname: String,

    /// Query type, numeric or mnemonic (A, NS, CNAME, MX, ...)
    #[arg(value_parser = parse_query_type, default_value = "1")]
    query_type: u16,

    /// DNS server to query (IPv4 or IPv6 literal)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Response wait timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Number of request attempts
    #[arg(short = 'r', long)]
    retries: Option<u32>,

    /// Increase output verbosity (repeatable)
    #[arg(short = 'd', long, action = ArgAction::Count)]
    debug: u8,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        port: cli.port,
        timeout_secs: cli.timeout,
        retries: cli.retries,
        log_level: cli.log_level.clone(),
    };

    let config = match bootstrap::load_config(cli.config.as_deref(), cli_overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            return ExitCode::from(2);
        }
    };
    bootstrap::init_logging(&config, cli.debug);

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Lookup failed");
            eprintln!("ERROR: {}", e);
            exit_code(&e)
        }
    }
}

async fn run(cli: &Cli, config: &Config) -> Result<(), DomainError> {
    let resolver = &config.resolver;
    let nameservers = ResolvConfReader::new(&resolver.resolv_conf);
    let server = bootstrap::choose_server(resolver.server.as_deref(), &nameservers).await?;
    let protocol = DnsProtocol::udp(server, resolver.port);
    debug!(server = %protocol, "Server selected");

    let lookup = LookupHostUseCase::new(
        create_transport(&protocol),
        create_transport(&protocol.to_stream()),
        LookupPolicy {
            timeout: Duration::from_secs(resolver.timeout_secs),
            retries: resolver.retries,
        },
    );

    let outcome = lookup
        .execute(&LookupRequest::new(cli.hostname.clone(), cli.query_type))
        .await?;

    if cli.debug >= 3 {
        output::print_header(outcome.query.header());
    }
    if cli.debug >= 2 {
        output::print_raw(&outcome.query_bytes);
    }
    if cli.debug >= 1 {
        output::print_packet("Query", &outcome.query);
    }
    if cli.debug >= 2 {
        output::print_raw(&outcome.response_bytes);
    }
    if cli.debug >= 1 {
        output::print_packet("Reply", &outcome.response);
    }

    println!("{}", outcome.response.render_summary());
    Ok(())
}

fn exit_code(error: &DomainError) -> ExitCode {
    match error {
        DomainError::NoNameservers => ExitCode::from(1),
        DomainError::InvalidIpAddress(_) => ExitCode::from(2),
        DomainError::QueryTimeout { .. } => ExitCode::from(3),
        _ => ExitCode::from(4),
    }
}
