use clap::Parser;
use grpc_browser::logging::{init_logging, LogConfig};
use grpc_browser::plugin;
use tracing::error;

/// protoc plugin generating HTTP client stubs for services annotated with
/// google.api.http rules.
///
/// Invoked by protoc, which pipes a CodeGeneratorRequest on stdin:
///
///   protoc --grpc_browser_out=gen --grpc_browser_opt=runtime=./caller api.proto
#[derive(Parser)]
#[command(name = "protoc-gen-grpc_browser", version, about, long_about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(err) = init_logging(&LogConfig::from_env()) {
        eprintln!("protoc-gen-grpc_browser: {err:#}");
    }

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    if let Err(err) = plugin::run(stdin, stdout) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
