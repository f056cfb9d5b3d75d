//! Assetboard CLI
//!
//! Command-line front end over the dashboard workflows:
//! - List an account's assets
//! - Submit a new asset, with an optional image
//! - Verify a token id
//! - Mint an asset

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use assetboard::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use assetboard::{
    Asset, AssetBoard, AssetContract, AssetSubmission, HttpAssetApi, ImageAttachment,
    NoopContract, Notification, NotificationKind, NotificationSlot, Notifier, OwnerDashboard,
    SubmissionEncoding,
};

#[derive(Parser)]
#[command(name = "assetboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Register and browse digital assets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Asset backend URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Account to act as (overrides config)
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the account's assets
    List,

    /// Submit a new asset
    Add {
        /// Asset type (Certificate, Product, Land, Vehicle, DigitalStamp, ...)
        #[arg(short = 't', long = "type")]
        asset_type: String,
        /// Asset id
        #[arg(long)]
        id: String,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Extra details in key=value format
        #[arg(short = 'D', long = "detail")]
        details: Vec<String>,
        /// Image to upload (switches to a multipart request)
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Verify an asset by token id
    Verify {
        /// Token id
        token: String,
    },

    /// Mint an asset through the configured contract
    Mint {
        /// Asset type
        #[arg(short = 't', long = "type")]
        asset_type: String,
        /// Asset id
        #[arg(long)]
        id: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };
    let mut config = loaded.config.clone();
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(account) = cli.account {
        config.session.account = account;
    }

    init_logging(&config.logging);
    loaded.log();

    let account = config.session.account();
    if account.is_empty() {
        bail!("No account set. Pass --account or set ASSETBOARD_ACCOUNT");
    }

    let api = Arc::new(
        HttpAssetApi::from_config(&config.api).context("Failed to build HTTP client")?,
    );
    tracing::debug!(base_url = api.base_url(), %account, "Using asset backend");

    let slot = NotificationSlot::new();
    let notifier = {
        let slot = slot.clone();
        move |notification: Notification| {
            print_notification(&notification);
            slot.notify(notification);
        }
    };
    let notifier = Arc::new(notifier);

    match cli.command {
        Commands::List => {
            let dashboard = OwnerDashboard::new(api, notifier, account, None);
            if dashboard.mount().await {
                print_assets(&dashboard.assets());
            }
        }

        Commands::Add {
            asset_type,
            id,
            name,
            description,
            details,
            image,
        } => {
            let mut submission = AssetSubmission::new(asset_type.as_str(), id);
            if let Some(name) = name {
                submission = submission.name(name);
            }
            if let Some(description) = description {
                submission = submission.with_description(description);
            }
            for detail in details {
                match detail.split_once('=') {
                    Some((key, value)) => submission = submission.detail(key, value),
                    None => bail!("Invalid detail {:?}, expected key=value", detail),
                }
            }
            if let Some(path) = image {
                submission = submission.image(read_image(&path).await?);
            }

            let board = AssetBoard::new(
                api,
                notifier,
                account,
                SubmissionEncoding::auto(&submission),
            );
            if board.submit(&submission).await {
                print_assets(&board.assets());
            }
        }

        Commands::Verify { token } => {
            let board = AssetBoard::new(api, notifier, account, SubmissionEncoding::Json);
            if let Some(asset) = board.verify(&token).await {
                print_asset_detail(&asset);
            }
        }

        Commands::Mint { asset_type, id } => {
            let contract: Option<Arc<dyn AssetContract>> = if config.contract.enabled {
                Some(Arc::new(NoopContract::new()))
            } else {
                None
            };
            let dashboard = OwnerDashboard::new(api, notifier, account, contract)
                .with_metadata_uri(config.contract.metadata_uri.clone());

            let asset = Asset::new(asset_type.as_str(), id);
            if dashboard.mint(&asset).await {
                print_assets(&dashboard.assets());
            }
        }

        Commands::Config { output } => write_default_config(output.as_ref())?,
    }

    if slot.current().is_some_and(|n| n.is_error()) {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("assetboard={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}

async fn read_image(path: &Path) -> anyhow::Result<ImageAttachment> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {:?}", path))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    Ok(ImageAttachment::new(file_name, bytes))
}

fn print_notification(notification: &Notification) {
    match notification.kind {
        NotificationKind::Success => println!("{}", notification.message),
        NotificationKind::Error => match &notification.detail {
            Some(detail) => eprintln!("{}: {}", notification.message, detail),
            None => eprintln!("{}", notification.message),
        },
    }
}

fn print_assets(assets: &[Asset]) {
    if assets.is_empty() {
        println!("No assets registered yet.");
        return;
    }

    println!("{:<16} {:<14} {:<24} {}", "ID", "Type", "Name", "Status");
    println!("{}", "-".repeat(66));

    for asset in assets {
        println!(
            "{:<16} {:<14} {:<24} {}",
            asset.asset_id,
            asset.asset_type.as_str(),
            asset.display_name(),
            approval_label(asset.approval_status)
        );
    }
}

fn print_asset_detail(asset: &Asset) {
    println!("Asset ID:    {}", asset.asset_id);
    println!("Type:        {}", asset.asset_type);
    println!("Name:        {}", asset.display_name());
    if let Some(description) = &asset.description {
        println!("Description: {}", description);
    }
    if let Some(url) = &asset.image_url {
        println!("Image:       {}", url);
    }
    println!("Status:      {}", approval_label(asset.approval_status));
}

fn approval_label(status: Option<bool>) -> &'static str {
    match status {
        Some(true) => "Approved",
        Some(false) => "Pending",
        None => "-",
    }
}
