use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hashdrop::config::DEFAULT_STORAGE_DIR;
use hashdrop::infrastructure::storage::{FlatFileKeyStore, PathBuilder};

/// Manage the upload keys accepted when public upload is disabled
#[derive(Parser)]
#[command(name = "hashdrop-keys")]
struct Cli {
    /// Storage root holding the `keys` file
    #[arg(long, env = "HASHDROP_STORAGE_DIR", default_value = DEFAULT_STORAGE_DIR)]
    storage_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every key
    List,
    /// Add a key
    Add { key: String },
    /// Remove a key
    Remove { key: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let keys = FlatFileKeyStore::new(PathBuilder::new(cli.storage_dir).keys_path());

    match cli.command {
        Commands::List => {
            for key in keys.list_keys().await? {
                println!("{}", key);
            }
        }
        Commands::Add { key } => {
            if keys.add_key(&key).await? {
                println!("Added key to {}", keys.path().display());
            } else {
                println!("Key already present");
            }
        }
        Commands::Remove { key } => {
            if keys.remove_key(&key).await? {
                println!("Removed key from {}", keys.path().display());
            } else {
                anyhow::bail!("Key not found in {}", keys.path().display());
            }
        }
    }

    Ok(())
}
