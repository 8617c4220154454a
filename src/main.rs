use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use color_eyre::Result;
use env_logger::Env;
use log::{debug, info};

use randreg::config::{Configuration, Endpoint, ModuleName, DEFAULT_NETWORK_NAME};
use randreg::orchestrator::generate_ned;

/// Generate a random regular network topology as an OMNeT++ NED description
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes
    #[arg(value_name = "N")]
    nodes: usize,

    /// Degree of every node
    #[arg(value_name = "D")]
    degree: usize,

    /// One-way per-edge delay in ms
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    delay: f64,

    /// Name of the network
    #[arg(long, default_value = DEFAULT_NETWORK_NAME)]
    name: String,

    /// Module to instantiate
    #[arg(short, long, value_enum, default_value_t = ModuleName::HbNode)]
    module: ModuleName,

    /// Gate vector the connections attach to
    #[arg(short, long, value_enum, default_value_t = Endpoint::Peer)]
    endpoint: Endpoint,

    /// Omit the comment header that records the invocation
    #[arg(long)]
    no_header: bool,

    /// Seed for the graph generator (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn into_config(self, command: String) -> Configuration {
        Configuration::new(self.nodes, self.degree)
            .with_delay(self.delay)
            .with_network_name(self.name)
            .with_module(self.module)
            .with_endpoint(self.endpoint)
            .with_command((!self.no_header).then_some(command))
            .with_seed(self.seed)
    }
}

/// Join the raw process arguments for the comment header, replacing any
/// bytes that are not valid UTF-8
fn invocation<I: IntoIterator<Item = OsString>>(args: I) -> String {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();
    let command = invocation(std::env::args_os());

    // Logs go to stderr; stdout carries only the generated network
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let config = args.into_config(command);
    debug!("Resolved configuration: {:?}", config);

    // Reject impossible requests as usage errors before any sampling happens
    if let Err(e) = config.validate() {
        Args::command().error(ErrorKind::ValueValidation, e).exit();
    }

    let ned = generate_ned(&config)?;
    print!("{}", ned);

    info!("Wrote network '{}' with {} connections", config.network_name, config.edge_count());
    Ok(())
}
