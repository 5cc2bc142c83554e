use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rentdesk_core::{EquipmentRef, ScanItem, page_size_from_env};
use rentdesk_service::{
    PageLoader, PaginationController, PaginationOptions, RenderTarget, ScanSessionService,
    ServiceError,
};
use rentdesk_storage::{KeyValueStore, SessionStore, SqliteStore};
use tracing_subscriber::EnvFilter;

mod loader;
mod output;

use loader::SessionItemsLoader;
use output::{TableTarget, TermNotifier};

#[derive(Parser)]
#[command(name = "rentdesk")]
#[command(about = "Equipment rental admin tools: scan sessions and paged lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage scan sessions
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Add a scanned item to the active session
    Scan(ScanArgs),
    /// Page through a session's items
    Items {
        session_id: String,
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(short = 's', long)]
        page_size: Option<u32>,
        /// Substring filter on name or barcode
        #[arg(short, long)]
        query: Option<String>,
    },
}

#[derive(Subcommand)]
enum SessionCommands {
    /// Create a session; prints its id
    New {
        name: String,
        #[arg(short, long)]
        activate: bool,
    },
    List,
    Show {
        id: String,
    },
    /// Make a session the target for new scans
    Use {
        id: String,
    },
    Delete {
        id: String,
    },
    Active,
}

#[derive(Args)]
struct ScanArgs {
    #[arg(long)]
    equipment_id: i64,
    #[arg(long)]
    name: String,
    #[arg(long)]
    barcode: String,
    #[arg(long)]
    serial: Option<String>,
    #[arg(long)]
    category_id: Option<i64>,
    #[arg(long)]
    category_name: Option<String>,
}

fn data_dir() -> PathBuf {
    std::env::var_os("RENTDESK_DATA_DIR").map(PathBuf::from).unwrap_or_else(|| {
        dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("rentdesk")
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;
    tracing::debug!(dir = %dir.display(), "using data directory");

    let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open(dir.join("rentdesk.db"))?);
    let store = SessionStore::new(kv);
    let service = ScanSessionService::new(store.clone(), Arc::new(TermNotifier));

    match cli.command {
        Commands::Session { command } => match command {
            SessionCommands::New { name, activate } => {
                let session = service.create_session(&name, activate)?;
                println!("{}", session.id);
            },
            SessionCommands::List => {
                let sessions = service.list_sessions()?;
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            },
            SessionCommands::Show { id } => match service.get_session(&id)? {
                Some(session) => println!("{}", serde_json::to_string_pretty(&session)?),
                None => println!("Session not found: {id}"),
            },
            SessionCommands::Use { id } => {
                if !service.activate_session(&id)? {
                    anyhow::bail!("unknown session: {id}");
                }
            },
            SessionCommands::Delete { id } => {
                if !service.delete_session(&id)? {
                    anyhow::bail!("unknown session: {id}");
                }
            },
            SessionCommands::Active => match service.active_session()? {
                Some(session) => println!("{}", serde_json::to_string_pretty(&session)?),
                None => println!("No active session"),
            },
        },
        Commands::Scan(args) => {
            let mut re = EquipmentRef::new(args.equipment_id, args.name, args.barcode);
            if let Some(serial) = args.serial {
                re = re.with_serial(serial);
            }
            if let (Some(id), Some(name)) = (args.category_id, args.category_name) {
                re = re.with_category(id, name);
            }
            match service.add_scan(re) {
                Ok(_) => {},
                Err(ServiceError::NoActiveSession) => {
                    anyhow::bail!("no active scan session; run `rentdesk session use <id>` first")
                },
                Err(err) => return Err(err.into()),
            }
        },
        Commands::Items { session_id, page, page_size, query } => {
            if service.get_session(&session_id)?.is_none() {
                anyhow::bail!("unknown session: {session_id}");
            }
            let size = page_size.unwrap_or_else(|| page_size_from_env("RENTDESK_PAGE_SIZE"));
            let options = PaginationOptions {
                page_size: size,
                auto_load_on_init: false,
                storage_key: "session_items".to_owned(),
                ..PaginationOptions::default()
            };
            let loader: Arc<dyn PageLoader<ScanItem>> =
                Arc::new(SessionItemsLoader::new(store, &session_id));
            let target: Arc<dyn RenderTarget<ScanItem>> = Arc::new(TableTarget);
            let ctrl = PaginationController::new(options, loader, target)
                .with_notifier(Arc::new(TermNotifier));

            match query {
                Some(q) => {
                    let mut filters = BTreeMap::new();
                    filters.insert("q".to_owned(), q);
                    // a filter change always restarts from page 1
                    ctrl.set_filters(filters).await;
                    if page > 1 {
                        ctrl.load_data(Some(page), None).await;
                    }
                },
                None => ctrl.load_data(Some(page), None).await,
            }
        },
    }

    Ok(())
}
