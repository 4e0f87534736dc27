use clap::Subcommand;
use serde_json::json;

use crate::auth::password::hash_password;
use crate::cli::{utils::output_success, OutputFormat};
use crate::config::config;

#[derive(Subcommand)]
pub enum PasswordCommands {
    #[command(about = "Print the stored form of a password")]
    Hash {
        #[arg(help = "Plain text password")]
        password: String,
    },
}

pub fn handle(cmd: PasswordCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        PasswordCommands::Hash { password } => {
            let salt = &config().security.password_salt;
            if salt.is_empty() {
                anyhow::bail!("SECURITY_PASSWORD_SALT is not set");
            }

            let hash = hash_password(&password, salt);
            match output_format {
                OutputFormat::Json => output_success(output_format, "Password hashed", Some(json!({ "hash": hash }))),
                OutputFormat::Text => {
                    println!("{}", hash);
                    Ok(())
                }
            }
        }
    }
}
