use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use occ_state::{
    shutdown_signal, try_create_state_node, InMemoryKv, NodeRpcServer, OccOptions, StateNodeConfig, StoreLocation,
    StoreRpcServer,
};
use slog::Drain;
use std::error::Error;
use std::fs::OpenOptions;
use std::net::{SocketAddr, SocketAddrV4};
use std::sync::Arc;
use tokio::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write logs to a timestamped file in this directory instead of stdout.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve an in-memory shared store.
    Store(StoreArgs),
    /// Serve the counter, log and commit operations on top of a shared store.
    Node(NodeArgs),
}

#[derive(Args, Debug)]
struct StoreArgs {
    #[arg(long, default_value = "127.0.0.1:7000")]
    listen: SocketAddr,
}

#[derive(Args, Debug)]
struct NodeArgs {
    #[arg(long)]
    node_id: String,

    #[arg(long, default_value = "127.0.0.1:7100")]
    listen: SocketAddr,

    /// Address of a running `store`.
    #[arg(long, default_value = "127.0.0.1:7000")]
    store: SocketAddrV4,

    /// Default per-operation timeout, for requests that don't carry their own.
    #[arg(long)]
    operation_timeout_ms: Option<u64>,

    /// Cap on read-compute-CAS rounds per update. Unbounded if unset.
    #[arg(long)]
    max_attempts: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Store(args) => {
            let logger = create_root_logger(cli.log_dir, "store".to_string())?;
            let server = StoreRpcServer::new(logger, Arc::new(InMemoryKv::new()));
            serve_until_ctrl_c(|signal| server.run(args.listen, signal)).await
        }
        Command::Node(args) => {
            let listen = args.listen;
            let logger = create_root_logger(cli.log_dir, args.node_id.clone())?;
            let config = StateNodeConfig {
                node_id: args.node_id,
                store: StoreLocation::Remote {
                    ip: *args.store.ip(),
                    port: args.store.port(),
                },
                info_logger: logger.clone(),
                options: OccOptions {
                    max_attempts: args.max_attempts,
                    operation_timeout: args.operation_timeout_ms.map(Duration::from_millis),
                    ..OccOptions::default()
                },
            };
            let node = try_create_state_node(config).await?;

            let server = NodeRpcServer::new(logger, Arc::new(node));
            serve_until_ctrl_c(|signal| server.run(listen, signal)).await
        }
    }
}

async fn serve_until_ctrl_c<F, Fut>(run: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(occ_state::RpcServerShutdownSignal) -> Fut,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    let (handle, signal) = shutdown_signal();
    let server_task = tokio::spawn(run(signal));

    tokio::signal::ctrl_c().await?;
    handle.shutdown();
    server_task.await?;

    Ok(())
}

fn create_root_logger(log_dir: Option<String>, name: String) -> Result<slog::Logger, Box<dyn Error>> {
    match log_dir {
        Some(directory) => create_root_logger_for_file(directory, name),
        None => Ok(create_root_logger_for_stdout(name)),
    }
}

fn create_root_logger_for_file(directory: String, name: String) -> Result<slog::Logger, Box<dyn Error>> {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let log_file_name = format!("{}/occ-state-{}-{}.log", directory, name, now);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_name)?;

    let decorator = slog_term::PlainDecorator::new(file);
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Ok(slog::Logger::root(drain, slog::o!()))
}

fn create_root_logger_for_stdout(name: String) -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).use_file_location().build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    slog::Logger::root(drain, slog::o!("Process" => name))
}
