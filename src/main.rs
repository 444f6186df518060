use ceremic_admin::config::cli::execute;
use ceremic_admin::utils::logger;
use ceremic_admin::{AdminApi, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.load_file_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if file_config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose || file_config.verbose());
    }

    let api_config = cli.api_config(&file_config);
    tracing::info!("Using API base URL: {}", api_config.base_url);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let api = AdminApi::from_config(&api_config)?;

    match execute(&api, &cli.command).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {}", e);
            if let ceremic_admin::AdminError::Api(api_error) = &e {
                if let Some(body) = &api_error.body {
                    tracing::error!("Response body: {}", body);
                }
            }
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
