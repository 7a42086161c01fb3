//! Parcel Desk — Command Line Entry Point
//!
//! One subcommand per desk screen: login, customers, pricing, parcels
//! (create / track / update) and invoices. Results are printed to
//! stdout as pretty JSON; logs go to stderr.
//!
//! Wiring sequence:
//! 1. Parse arguments
//! 2. Load parcel-desk.toml (defaults when absent) + validate
//! 3. Init tracing (text or JSON, RUST_LOG overrides the level)
//! 4. Build the storage adapter selected by config
//! 5. Run the subcommand against the Store

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use parcel_desk::adapters::persistence::{FileStorage, MemoryStorage};
use parcel_desk::config::{self, AppConfig, StorageBackend};
use parcel_desk::domain::{Role, TrackingEventType};
use parcel_desk::ports::KeyValueStorage;
use parcel_desk::{Store, StoreError};

#[derive(Parser)]
#[command(name = "parcel-desk")]
#[command(about = "Parcel desk: customers, shipments, tracking and invoices", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = config::loader::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in (any non-empty credentials are accepted)
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        role: Option<RoleArg>,
    },

    /// Clear the current login
    Logout,

    /// Show the current login
    Whoami,

    /// Customer registry
    #[command(subcommand)]
    Customers(CustomerCommands),

    /// Price a shipment without creating it
    Quote {
        /// Weight in kg
        #[arg(short, long)]
        weight: f64,
        /// Distance in km
        #[arg(short, long)]
        distance: f64,
    },

    /// Parcels and tracking
    #[command(subcommand)]
    Parcels(ParcelCommands),

    /// Invoices
    #[command(subcommand)]
    Invoices(InvoiceCommands),

    /// List the known tracking event types
    EventTypes,

    /// Discard all stored data and return to the seed document
    Reset,
}

#[derive(Subcommand)]
enum CustomerCommands {
    /// List customers, newest first
    List,
    /// Register a customer
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
    },
}

#[derive(Subcommand)]
enum ParcelCommands {
    /// Create a parcel priced by the tariff
    Create {
        #[arg(long)]
        sender: String,
        #[arg(long)]
        receiver: String,
        /// Weight in kg
        #[arg(long)]
        weight: f64,
        /// Distance in km
        #[arg(long)]
        distance: f64,
    },
    /// Show one parcel
    Show { tracking_number: String },
    /// List parcels, newest first
    List {
        /// Only parcels from this sender
        #[arg(long)]
        sender: Option<String>,
    },
    /// Show the tracking log of a parcel
    History { tracking_number: String },
    /// Record a tracking event and update the status
    Event {
        tracking_number: String,
        /// Event type, e.g. PICKUP, SORTING, DELIVERED
        #[arg(short = 't', long = "type")]
        event_type: String,
        #[arg(short, long)]
        remarks: Option<String>,
    },
}

#[derive(Subcommand)]
enum InvoiceCommands {
    /// List invoices, newest first
    List {
        /// Only invoices for this tracking number
        #[arg(long)]
        tracking: Option<String>,
    },
    /// Issue an invoice for a parcel
    Generate { tracking_number: String },
    /// Mark an invoice paid
    Pay { invoice_id: String },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum RoleArg {
    Staff,
    Courier,
    Customer,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Staff => Self::Staff,
            RoleArg::Courier => Self::Courier,
            RoleArg::Customer => Self::Customer,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::loader::load_config(&cli.config).context("Failed to load configuration")?;

    init_tracing(&config, cli.json_logs);

    let storage = build_storage(&config).await?;
    let store = Store::from_config(storage, &config);

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.storage.backend,
        "Parcel desk ready"
    );

    run(&store, cli.command).await
}

/// Install the tracing subscriber. `RUST_LOG` wins over the config level.
fn init_tracing(config: &AppConfig, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn build_storage(config: &AppConfig) -> Result<Arc<dyn KeyValueStorage>> {
    let storage: Arc<dyn KeyValueStorage> = match config.storage.backend {
        StorageBackend::File => Arc::new(
            FileStorage::new(&config.storage.data_dir)
                .await
                .context("Failed to open file storage")?,
        ),
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
    };
    Ok(storage)
}

async fn run<S: KeyValueStorage>(store: &Store<S>, command: Commands) -> Result<()> {
    match command {
        Commands::Login {
            username,
            password,
            role,
        } => print_json(
            &store
                .mock_login(&username, &password, role.map(Role::from))
                .await?,
        ),
        Commands::Logout => {
            store.mock_logout().await?;
            print_json(&serde_json::Value::Null)
        }
        Commands::Whoami => print_json(&store.get_login().await),
        Commands::Customers(CustomerCommands::List) => print_json(&store.list_customers().await?),
        Commands::Customers(CustomerCommands::Add {
            name,
            phone,
            address,
        }) => print_json(&store.create_customer(&name, &phone, &address).await?),
        Commands::Quote { weight, distance } => print_json(&store.quote(weight, distance)?),
        Commands::Parcels(cmd) => run_parcels(store, cmd).await,
        Commands::Invoices(cmd) => run_invoices(store, cmd).await,
        Commands::EventTypes => print_json(&TrackingEventType::ALL),
        Commands::Reset => {
            store.reset().await?;
            print_json(&store.load_document().await?)
        }
    }
}

async fn run_parcels<S: KeyValueStorage>(store: &Store<S>, command: ParcelCommands) -> Result<()> {
    match command {
        ParcelCommands::Create {
            sender,
            receiver,
            weight,
            distance,
        } => print_json(
            &store
                .create_parcel(&sender, &receiver, weight, distance)
                .await?,
        ),
        ParcelCommands::Show { tracking_number } => {
            let parcel = store
                .find_parcel(&tracking_number)
                .await?
                .ok_or_else(|| StoreError::not_found("parcel", tracking_number.trim()))?;
            print_json(&parcel)
        }
        ParcelCommands::List { sender: Some(sender) } => {
            print_json(&store.parcels_by_sender(&sender).await?)
        }
        ParcelCommands::List { sender: None } => print_json(&store.list_parcels().await?),
        ParcelCommands::History { tracking_number } => {
            print_json(&store.tracking_history(&tracking_number).await?)
        }
        ParcelCommands::Event {
            tracking_number,
            event_type,
            remarks,
        } => print_json(
            &store
                .add_tracking_event(&tracking_number, &event_type, remarks.as_deref())
                .await?,
        ),
    }
}

async fn run_invoices<S: KeyValueStorage>(store: &Store<S>, command: InvoiceCommands) -> Result<()> {
    match command {
        InvoiceCommands::List {
            tracking: Some(tracking_number),
        } => print_json(&store.invoices_for(&tracking_number).await?),
        InvoiceCommands::List { tracking: None } => print_json(&store.list_invoices().await?),
        InvoiceCommands::Generate { tracking_number } => {
            print_json(&store.generate_invoice(&tracking_number).await?)
        }
        InvoiceCommands::Pay { invoice_id } => {
            print_json(&store.mark_invoice_paid(&invoice_id).await?)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{out}");
    Ok(())
}
