//! sms-portal command line client

#![allow(missing_docs)]

use anyhow::{Context, anyhow};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sms_portal::core::dashboard::mask_message;
use sms_portal::sdk::types::ServiceKind;
use sms_portal::utils::logging::init_logging;
use sms_portal::{
    Config, HistoryFilter, HistoryView, InvoicesView, PackageCatalog, PackagesView, PortalClient,
    PortalError, SendPipeline, Session, StatisticsView, SupportView, parse_recipient_file,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "sms-portal", version, about = "Send SMS and inspect your messaging account")]
struct Cli {
    /// YAML configuration file; environment variables override its values
    #[arg(short, long, env = "SMS_PORTAL_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    session: SessionArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct SessionArgs {
    #[arg(long, env = "SMS_PORTAL_BEARER_TOKEN", hide_env_values = true, global = true)]
    bearer_token: Option<String>,

    #[arg(long, env = "SMS_PORTAL_AUTH_TOKEN", hide_env_values = true, global = true)]
    auth_token: Option<String>,

    #[arg(long, env = "SMS_PORTAL_CLIENT_ID", global = true)]
    client_id: Option<String>,

    #[arg(long, env = "SMS_PORTAL_USER_NAME", global = true)]
    user_name: Option<String>,
}

impl SessionArgs {
    fn session(&self) -> anyhow::Result<Session> {
        let bearer = self
            .bearer_token
            .clone()
            .context("a bearer token is required (--bearer-token or SMS_PORTAL_BEARER_TOKEN)")?;
        let mut session = Session::new(bearer, self.auth_token.clone().unwrap_or_default());
        if let Some(client_id) = &self.client_id {
            session = session.with_client_id(client_id.clone());
        }
        if let Some(user_name) = &self.user_name {
            session = session.with_user_name(user_name.clone());
        }
        Ok(session)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send one message to one phone number
    Send {
        phone_number: String,
        message: String,
        /// Confirm acceptance of the platform usage policy
        #[arg(long)]
        accept_policy: bool,
    },
    /// Send one message to every number in a spreadsheet
    SendBulk {
        file: PathBuf,
        message: String,
        #[arg(long)]
        accept_policy: bool,
    },
    /// Parse a spreadsheet and show the first recipients
    Preview { file: PathBuf },
    /// Monthly totals for a year, or the daily breakdown of one month
    Stats {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Sent message history
    History {
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Packages purchased by the account
    Packages,
    /// Account invoices
    Invoices,
    /// Support tickets
    Tickets,
    /// Open a support ticket
    Ticket { title: String, description: String },
    /// Public package catalog
    Catalog,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn user_facing(error: PortalError) -> anyhow::Error {
    anyhow!(error.user_message())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // clap reads the `env` args while parsing, before `Config::load` runs
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;
    init_logging(config.logging()).context("failed to initialize logging")?;
    debug!("Loaded configuration for {}", config.api().base_url);

    let client = PortalClient::new(config.api().clone())?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::Send {
            phone_number,
            message,
            accept_policy,
        } => {
            let session = cli.session.session()?;
            let mut pipeline = SendPipeline::new(client, *config.sending());
            pipeline.set_policy_accepted(accept_policy);
            pipeline.set_phone_number(phone_number);
            pipeline.set_message(&message);
            pipeline.submit(&session).await.map_err(user_facing)?;
            if let Some(notification) = pipeline.notification() {
                println!("{}", notification.message);
            }
        }
        Command::SendBulk {
            file,
            message,
            accept_policy,
        } => {
            let session = cli.session.session()?;
            let mut pipeline = SendPipeline::new(client, *config.sending());
            pipeline.set_policy_accepted(accept_policy);
            pipeline.set_bulk_mode(true);
            pipeline.set_message(&message);
            pipeline
                .load_recipient_file(&file)
                .await
                .map_err(user_facing)?;
            pipeline.submit(&session).await.map_err(user_facing)?;
            if let Some(notification) = pipeline.notification() {
                println!("{}", notification.message);
            }
        }
        Command::Preview { file } => {
            let list = parse_recipient_file(&file, config.sending().preview_size)
                .await
                .map_err(user_facing)?;
            println!("{}: {} numbers", list.file_name(), list.len());
            for number in list.preview() {
                println!("  {}", number);
            }
        }
        Command::Stats { year, month } => {
            let session = cli.session.session()?;
            let mut view = StatisticsView::new(year.unwrap_or_else(|| today.year()));
            match month {
                Some(month) => {
                    view.select_month(&client, &session, month)
                        .await
                        .map_err(user_facing)?;
                    print_json(view.daily())?;
                    let (libyana, madar) = view.carrier_totals();
                    println!("Libyana: {}  Madar: {}", libyana, madar);
                }
                None => {
                    view.refresh(&client, &session).await.map_err(user_facing)?;
                    if let Some(info) = view.client_info() {
                        print_json(info)?;
                    }
                    print_json(view.monthly())?;
                    println!("Total: {}", view.year_total());
                }
            }
        }
        Command::History { phone, from, to } => {
            let session = cli.session.session()?;
            let defaults = HistoryFilter::around(today);
            let mut view = HistoryView::with_filter(HistoryFilter {
                phone,
                from_date: from.unwrap_or(defaults.from_date),
                to_date: to.unwrap_or(defaults.to_date),
            });
            view.refresh(&client, &session).await.map_err(user_facing)?;
            for entry in view.visible() {
                println!(
                    "{}  {}  {}  {}",
                    entry.created_at.as_deref().unwrap_or("-"),
                    entry.phone_no.as_deref().unwrap_or("-"),
                    entry.page_count,
                    mask_message(entry.message.as_deref().unwrap_or_default())
                );
            }
            println!("Total pages: {}", view.total_pages());
        }
        Command::Packages => {
            let session = cli.session.session()?;
            let mut view = PackagesView::new();
            print_json(view.refresh(&client, &session).await.map_err(user_facing)?)?;
        }
        Command::Invoices => {
            let session = cli.session.session()?;
            let mut view = InvoicesView::new();
            print_json(view.refresh(&client, &session).await.map_err(user_facing)?)?;
        }
        Command::Tickets => {
            let session = cli.session.session()?;
            let mut view = SupportView::new();
            print_json(view.refresh(&client, &session).await.map_err(user_facing)?)?;
        }
        Command::Ticket { title, description } => {
            let session = cli.session.session()?;
            let mut view = SupportView::new();
            view.submit_ticket(&client, &session, &title, &description)
                .await
                .map_err(user_facing)?;
            println!("Ticket submitted ({} open)", view.open_count());
        }
        Command::Catalog => {
            let catalog = PackageCatalog::load(&client).await.map_err(user_facing)?;
            for kind in [ServiceKind::A2p, ServiceKind::Ads] {
                println!("{}:", kind.label());
                for package in catalog.packages(kind) {
                    let custom = if catalog.is_custom(kind, &package.package_id) {
                        " (custom)"
                    } else {
                        ""
                    };
                    println!(
                        "  [{}] {}: {} messages at {}{}",
                        package.package_id,
                        package.package_name,
                        package.package_qty,
                        package.package_price,
                        custom
                    );
                }
            }
        }
    }

    Ok(())
}
