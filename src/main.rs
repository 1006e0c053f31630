use anyhow::Result;
use currencist::config::Config;
use currencist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: invalid configuration: {:#}", e);
            if let Ok(path) = Config::get_default_config_path() {
                eprintln!("\n💡 Fix the file or remove it to use defaults.");
                eprintln!("   Default location: {}", path.display());
            }
            std::process::exit(1);
        }
    };

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
