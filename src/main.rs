// drugchain CLI - invoke ledger operations against a local sled database

use clap::{Parser, Subcommand};
use drugchain::config::{CreatePolicy, LedgerConfig};
use drugchain::dispatch::{Dispatcher, Operation};
use drugchain::ledger::LedgerService;
use drugchain::storage::SledStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "drugchain")]
#[command(about = "Provenance ledger for pharmaceutical batches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database directory
    #[arg(long, env = "DRUGCHAIN_DATA_DIR", default_value = "drugchain-data", global = true)]
    data_dir: PathBuf,

    /// Fail createAsset when the id is already taken instead of overwriting
    #[arg(long, env = "DRUGCHAIN_REJECT_EXISTING", global = true)]
    reject_existing: bool,

    /// Flush the database after every write
    #[arg(long, env = "DRUGCHAIN_FLUSH", global = true)]
    flush: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "DRUGCHAIN_LOG", default_value = "info", global = true)]
    log: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Invoke a ledger operation with positional arguments
    Invoke {
        /// Operation name, e.g. createAsset
        operation: String,

        /// Positional arguments of the operation
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the operations the ledger accepts
    Operations,

    /// Show database statistics
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = LedgerConfig::new()
        .with_data_dir(cli.data_dir)
        .with_create_policy(if cli.reject_existing {
            CreatePolicy::RejectExisting
        } else {
            CreatePolicy::Overwrite
        })
        .with_flush_every_write(cli.flush)
        .with_log_filter(cli.log);

    if let Err(e) = config.validate() {
        eprintln!("error: {}", e);
        return ExitCode::from(2);
    }
    init_tracing(&config);

    if let Commands::Operations = cli.command {
        for op in Operation::ALL {
            println!("{}", op);
        }
        return ExitCode::SUCCESS;
    }

    let store = match SledStore::open(&config.data_dir) {
        Ok(store) => store.with_flush_every_write(config.flush_every_write),
        Err(e) => {
            tracing::error!(path = %config.data_dir.display(), error = %e, "failed to open store");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Invoke { operation, args } => {
            let ledger = LedgerService::new(store).with_create_policy(config.create_policy);
            let dispatcher = Dispatcher::new(ledger);
            let response = dispatcher.invoke(&operation, &args);

            println!("{}", response.to_json());
            if response.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Stats => match store.stats() {
            Ok(stats) => {
                println!("keys:      {}", stats.key_count);
                println!("revisions: {}", stats.revision_count);
                println!("disk size: {} bytes", stats.disk_size_bytes);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read stats");
                ExitCode::FAILURE
            }
        },
        Commands::Operations => ExitCode::SUCCESS,
    }
}

fn init_tracing(config: &LedgerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
