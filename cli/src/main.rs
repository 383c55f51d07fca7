mod terminal;

use std::process::ExitCode;

use cart_ui::net::http::HttpTransport;
use cart_ui::net::types::DEFAULT_QUANTITY;
use cart_ui::{CartConfig, CartController, CartError, CartOutcome};
use clap::{Parser, Subcommand};

use crate::terminal::TerminalPage;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] CartError),
    #[error("could not start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "cartctl", about = "Drive the store's cart endpoints from a terminal")]
struct Cli {
    #[arg(long, env = "CART_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Raw `Cookie` header value carrying the logged-in session.
    #[arg(long, env = "CART_SESSION_COOKIE")]
    session_cookie: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current item count.
    Count,
    /// Add a product to the cart.
    Add {
        product_id: String,
        #[arg(long, default_value_t = DEFAULT_QUANTITY)]
        cantidad: u32,
    },
    /// Set the quantity of a product already in the cart.
    Update {
        product_id: String,
        #[arg(long)]
        cantidad: u32,
    },
    /// Remove a product from the cart.
    Remove {
        product_id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "cartctl failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = CartConfig::from_env()?;
    let transport = HttpTransport::new(&cli.base_url, cli.session_cookie.as_deref())?;
    let assume_yes = matches!(cli.command, Command::Remove { yes: true, .. });
    let controller = CartController::new(transport, TerminalPage::new(assume_yes), config);

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let code = runtime.block_on(async {
        match cli.command {
            Command::Count => match controller.refresh_count().await {
                Ok(_) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            },
            Command::Add { product_id, cantidad } => exit_code(controller.add_to_cart(&product_id, cantidad).await),
            Command::Update { product_id, cantidad } => {
                exit_code(controller.update_cart_item(&product_id, cantidad).await)
            }
            Command::Remove { product_id, .. } => exit_code(controller.remove_from_cart(&product_id).await),
        }
    });

    tracing::debug!(reloaded = controller.page().reloaded(), "done");
    Ok(code)
}

fn exit_code(outcome: CartOutcome) -> ExitCode {
    match outcome {
        CartOutcome::Applied(_) | CartOutcome::Declined => ExitCode::SUCCESS,
        CartOutcome::Rejected(_) | CartOutcome::Failed(_) => ExitCode::FAILURE,
    }
}
