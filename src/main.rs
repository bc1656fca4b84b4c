use clap::Parser;
use tracing::info;

use edunjema::config::{Args, StaticConfig, init_config};
use edunjema::runtime::modes::run_server;
use edunjema::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if args.generate_config {
        print!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    }

    let config = match init_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // guard 必须存活到进程结束，否则缓冲的日志会丢失
    let _log_guard = init_logging(&config.logging)?;

    info!(
        "Starting edunjema v{} (model {})",
        env!("CARGO_PKG_VERSION"),
        config.generation.model
    );

    run_server(config).await
}
