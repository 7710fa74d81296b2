use restful_objects_harness::cli::run_cli;
use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(e) = run_cli().await {
        error!("restful-objects error: {}", e);
        eprintln!("error: {}", e);

        std::process::exit(e.exit_code());
    }
}
