use clap::Parser;
use snippet_basics::utils::logger;
use snippet_basics::{CliConfig, Snippet};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_json);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load_snippet_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let snippet = Snippet::with_user(config.user());
    let stdout = std::io::stdout();
    let group = snippet.run(&mut stdout.lock())?;
    tracing::debug!("Printed {}", group);

    if cli.exports {
        eprintln!("{}", snippet.exports_json()?);
    }

    Ok(())
}
