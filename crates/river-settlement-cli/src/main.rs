/*
[INPUT]:  CLI arguments and environment-variable configuration
[OUTPUT]: RLS API calls with plain-text output
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or command dispatch
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use river_settlement_adapter::{LN, RiverClient, Withdrawal};
use tracing_subscriber::EnvFilter;

mod config;
mod printers;
mod tls;

#[derive(Parser, Debug)]
#[command(name = "rlscli", version, about = "River Financial's enterprise Lightning settlement API")]
struct Cli {
    /// Extra request headers in key:value,key:value... format
    #[arg(long = "headers", value_name = "HEADERS", global = true)]
    headers: Option<String>,
    /// Load a TLS identity from <PATH>.cert and <PATH>.key
    #[arg(long = "tlspath", value_name = "PATH", global = true)]
    tls_path: Option<PathBuf>,
    /// Log filter, e.g. warn or river_settlement_adapter=debug
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query the account's balances
    #[command(name = "getaccount")]
    GetAccount,
    /// Request a new deposit invoice
    #[command(name = "newinvoice")]
    NewInvoice {
        /// Amount of the intended deposit in sats
        amount: i64,
        /// Label (aka memo) for the deposit invoice
        label: Option<String>,
        /// Network (defaults to LN)
        network: Option<String>,
    },
    /// Query a deposit by deposit id
    #[command(name = "getdeposit")]
    GetDeposit { deposit_id: String },
    /// List deposits
    #[command(name = "listdeposits")]
    ListDeposits {
        /// Page size
        #[arg(long, value_name = "N")]
        limit: Option<i64>,
        /// Pagination cursor from the previous page
        #[arg(long = "next", value_name = "TIMESTAMP")]
        next_timestamp: Option<i64>,
    },
    /// Initiate a withdrawal by paying an invoice
    #[command(name = "newwithdrawal")]
    NewWithdrawal {
        /// BOLT-11 invoice to pay
        invoice: String,
        /// Amount in sats
        amount: i64,
        /// Fee limit in sats (defaults to 300)
        #[arg(long = "fee-limit", value_name = "SATS")]
        fee_limit: Option<i64>,
    },
    /// Query a withdrawal by withdrawal id
    #[command(name = "getwithdrawal")]
    GetWithdrawal { withdrawal_id: String },
    /// List withdrawals
    #[command(name = "listwithdrawals")]
    ListWithdrawals {
        /// Page size
        #[arg(long, value_name = "N")]
        limit: Option<i64>,
        /// Pagination cursor from the previous page
        #[arg(long = "next", value_name = "TIMESTAMP")]
        next_timestamp: Option<i64>,
    },
    /// Subscribe to a webhook callback URL
    #[command(name = "newwebhook")]
    NewWebhook { url: String },
    /// Show the subscribed webhook
    #[command(name = "getwebhook")]
    GetWebhook,
    /// Delete the subscribed webhook
    #[command(name = "rmwebhook")]
    RmWebhook,
    /// Decode a BOLT-11 invoice
    #[command(name = "parseinvoice")]
    ParseInvoice { invoice: String },
    /// Estimate the fee to pay an invoice
    #[command(name = "estimatefee")]
    EstimateFee { invoice: String, amount: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let client = build_client(&args)?;
    run(&client, args.command).await
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn build_client(args: &Cli) -> Result<RiverClient> {
    let mut cfg = config::load_config().context("failed to load config")?;
    if let Some(headers) = &args.headers {
        cfg.extra_headers = config::parse_extra_headers(cfg.extra_headers, headers);
    }
    let client = match tls::load_transport(args.tls_path.as_deref(), &cfg)? {
        Some(http_client) => RiverClient::with_http_client(cfg, http_client),
        None => RiverClient::new(cfg),
    };
    client.context("failed to create RLS client")
}

async fn run(client: &RiverClient, command: Command) -> Result<()> {
    match command {
        Command::GetAccount => {
            let account = client.get_account().await?;
            printers::print_account(&account);
        }
        Command::NewInvoice {
            amount,
            label,
            network,
        } => {
            if amount <= 0 {
                bail!("amount in sats must be positive");
            }
            let invoice = client
                .new_invoice(
                    amount,
                    label.as_deref().unwrap_or(""),
                    network.as_deref().unwrap_or(LN),
                )
                .await?;
            printers::print_deposit_invoice(&invoice);
        }
        Command::GetDeposit { deposit_id } => match client.get_deposit(&deposit_id).await? {
            Some(deposit) => printers::print_deposit(&deposit),
            None => println!("deposit not found"),
        },
        Command::ListDeposits {
            limit,
            next_timestamp,
        } => {
            let page = client.get_deposits(limit, next_timestamp).await?;
            printers::print_deposit_list(&page);
        }
        Command::NewWithdrawal {
            invoice,
            amount,
            fee_limit,
        } => {
            if amount <= 0 {
                bail!("amount in sats must be positive");
            }
            let request = match fee_limit {
                Some(fee_limit) => Withdrawal::with_fee_limit(amount, invoice, fee_limit),
                None => Withdrawal::new(amount, invoice),
            };
            let withdrawal = client.new_withdrawal(request).await?;
            printers::print_withdrawal(&withdrawal);
        }
        Command::GetWithdrawal { withdrawal_id } => {
            let withdrawal = client.get_withdrawal(&withdrawal_id).await?;
            printers::print_withdrawal(&withdrawal);
        }
        Command::ListWithdrawals {
            limit,
            next_timestamp,
        } => {
            let page = client.list_withdrawals(limit, next_timestamp).await?;
            printers::print_withdrawal_list(&page);
        }
        Command::NewWebhook { url } => {
            let webhook = client
                .subscribe_to_webhook(&url)
                .await
                .context("failed to subscribe to webhook")?;
            println!("Subscribed to webhook!");
            printers::print_webhook(&webhook);
        }
        Command::GetWebhook => {
            let webhook = client.get_subscribed_webhook().await?;
            printers::print_webhook(&webhook);
        }
        Command::RmWebhook => {
            client
                .delete_webhook()
                .await
                .context("failed to delete webhook")?;
            println!("successfully deleted webhook");
        }
        Command::ParseInvoice { invoice } => {
            let decoded = client.decode_invoice(&invoice).await?;
            printers::print_decoded_invoice(&decoded);
        }
        Command::EstimateFee { invoice, amount } => {
            let estimate = client.estimate_lightning_fee(&invoice, amount).await?;
            printers::print_fee_estimate(&estimate);
        }
    }
    Ok(())
}
