use crate::config::{CONFIG_FILE_NAME, ServerSettings, SignupConfig};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(host: String, port: u16) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    let config = SignupConfig {
        server: ServerSettings {
            host,
            port,
            ..Default::default()
        },
        users: Default::default(),
    };
    config.validate()?;
    config.save(&config_path)?;

    println!("{} signup config in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());
    println!("  Listen: {}", config.server.bind_address());

    Ok(())
}
