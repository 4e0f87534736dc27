use clap::Subcommand;
use serde_json::json;

use crate::auth::{password::hash_password, Role};
use crate::cli::{utils::output_success, OutputFormat};
use crate::config::config;
use crate::database::{DatabaseManager, PgRepository, Repository};

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a user with a hashed password")]
    Add {
        #[arg(help = "Login name")]
        name: String,
        #[arg(help = "Plain text password")]
        password: String,
        #[arg(long, default_value = "Minion", help = "Overseer or Minion")]
        role: String,
        #[arg(long, help = "Profile picture reference")]
        picture: Option<String>,
    },
}

pub async fn handle(cmd: UserCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        UserCommands::Add {
            name,
            password,
            role,
            picture,
        } => {
            let role: Role = role.parse().map_err(anyhow::Error::msg)?;
            let salt = &config().security.password_salt;
            if salt.is_empty() {
                anyhow::bail!("SECURITY_PASSWORD_SALT is not set");
            }

            let pool = DatabaseManager::connect(&config().database).await?;
            let repo = PgRepository::new(pool);

            if repo.find_user_by_name(&name).await?.is_some() {
                anyhow::bail!("User '{}' already exists", name);
            }

            let user = repo
                .insert_user(&name, &hash_password(&password, salt), role.as_str(), picture.as_deref())
                .await?;
            tracing::info!("Created user {} '{}' as {}", user.id, user.name, user.role);

            output_success(
                output_format,
                &format!("Created {} '{}'", user.role, user.name),
                Some(json!({ "user": user })),
            )
        }
    }
}
