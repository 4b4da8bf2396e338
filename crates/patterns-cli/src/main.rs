//! Command-line runner for the pattern demos.

use anyhow::Result;
use clap::{Parser, Subcommand};
use patterns_cli::handlers::{
    adapter, bridge, chain, checkout, composite, config, decorate, demo, report,
};
use patterns_core::{PatternsConfig, SharedConsole, StdoutConsoleHandler, UnhandledPolicy};
use patterns_structural::Channel;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Runnable design pattern demos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run loan amounts through the approval chain
    Chain {
        /// Loan amounts, in order
        #[arg(allow_negative_numbers = true, default_values_t = chain::DEFAULT_AMOUNTS)]
        amounts: Vec<f64>,

        /// Fail on amounts no officer approves instead of dropping them
        #[arg(long)]
        reject_unhandled: bool,
    },

    /// Print a role's permission tree
    Composite {
        /// Role to display (defaults to composite.root from config)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Send a message through a stack of notifiers
    Decorate {
        /// Message to send
        #[arg(default_value = "Deployment Done!")]
        message: String,

        /// Channels layered over email, innermost first (sms, slack)
        #[arg(short = 'C', long = "channel")]
        channels: Vec<Channel>,
    },

    /// Check out a user's cart through the facade
    Checkout {
        #[arg(default_value = "user123")]
        user_id: String,
    },

    /// Request reports through the caching proxy
    Report {
        /// User ids, in request order; repeats are served from cache
        #[arg(default_values_t = ["user123".to_string(), "user123".to_string()])]
        user_ids: Vec<String>,
    },

    /// Pay through native and adapted payment processors
    Adapter {
        /// Amount in dollars
        #[arg(default_value_t = 100)]
        amount: u32,

        /// Also pay this many rupees through the currency wrapper
        #[arg(long)]
        inr: Option<u32>,
    },

    /// Log through severity loggers bridged to different writers
    Bridge {
        #[arg(long, default_value = "Something went wrong!")]
        error: String,

        #[arg(long, default_value = "Service started successfully.")]
        info: String,
    },

    /// Show the effective configuration
    Config,

    /// Run every demo
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = PatternsConfig::resolve(cli.config.as_deref())?;
    let console: SharedConsole = Arc::new(StdoutConsoleHandler::new());

    match cli.command {
        Commands::Chain {
            amounts,
            reject_unhandled,
        } => {
            if reject_unhandled {
                settings.chain.unhandled = UnhandledPolicy::Reject;
            }
            chain::handle_chain(&console, &settings.chain, &amounts)?;
        }
        Commands::Composite { root } => {
            composite::handle_composite(&console, &settings.composite, root.as_deref())?;
        }
        Commands::Decorate { message, channels } => {
            decorate::handle_decorate(&console, &channels, &message)?;
        }
        Commands::Checkout { user_id } => {
            checkout::handle_checkout(&console, &user_id)?;
        }
        Commands::Report { user_ids } => {
            report::handle_report(&console, &settings.proxy, &user_ids)?;
        }
        Commands::Adapter { amount, inr } => {
            adapter::handle_adapter(&console, &settings.adapter, amount, inr)?;
        }
        Commands::Bridge { error, info } => {
            bridge::handle_bridge(&console, &error, &info)?;
        }
        Commands::Config => {
            config::handle_show_config(&console, &settings)?;
        }
        Commands::All => {
            demo::handle_all(&console, &settings)?;
        }
    }

    Ok(())
}
