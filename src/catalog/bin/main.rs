use library_catalog::catalog::server::run;
use library_catalog::utils::logs::setup_tracing;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    run(DEV_MODE).await
}
