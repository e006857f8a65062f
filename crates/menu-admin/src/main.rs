mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use menu_shared::{config::AppConfig, telemetry};

use commands::Context;

#[derive(Parser, Debug)]
#[command(name = "menu-admin", version, about = "Menu Admin - manage restaurant menu items")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// REST root of the menu backend
    #[arg(long, env = "MENU_API_URL")]
    api_url: Option<String>,

    /// Prefix joined with each item's image path
    #[arg(long, env = "MENU_ASSETS_URL")]
    assets_url: Option<String>,

    /// Bearer token printed by `login`
    #[arg(long, env = "MENU_ADMIN_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in and print the bearer token
    Login {
        #[arg(long)]
        username: String,

        #[arg(long, env = "MENU_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show whether a token is set
    Status,
    /// List all items
    List {
        /// Print the admin list HTML instead of text rows
        #[arg(long)]
        html: bool,
    },
    /// Render the public menu page to stdout
    Render {
        /// Only the grouped sections, without the page shell
        #[arg(long)]
        fragment: bool,
    },
    /// Create a menu item
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Leave out to create the item without a price
        #[arg(long, default_value = "")]
        price: String,

        #[arg(long, default_value = "")]
        category: String,

        /// Image file to upload with the item
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Change the price of an item
    SetPrice { id: String, price: String },
    /// Replace the image of an item
    SetImage {
        id: String,
        path: PathBuf,

        /// Alt text for the new image
        #[arg(long)]
        alt: Option<String>,
    },
    /// Delete an item
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_cli_telemetry("warn")?;

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let ctx = Context::new(
        config,
        cli.api_url.as_deref(),
        cli.assets_url.as_deref(),
        cli.token.as_deref(),
    )?;

    match cli.command {
        Commands::Login { username, password } => ctx.login(&username, &password).await?,
        Commands::Status => ctx.status(),
        Commands::List { html } => ctx.list(html).await?,
        Commands::Render { fragment } => ctx.render(fragment).await,
        Commands::Create {
            title,
            description,
            price,
            category,
            image,
        } => {
            ctx.create(&title, &description, &price, &category, image)
                .await?
        }
        Commands::SetPrice { id, price } => ctx.set_price(&id, &price).await?,
        Commands::SetImage { id, path, alt } => ctx.set_image(&id, path, alt.as_deref()).await?,
        Commands::Delete { id, yes } => ctx.delete(&id, yes).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_price() {
        let cli = Cli::try_parse_from(["menu-admin", "--token", "t", "set-price", "abc123", "95"])
            .unwrap();
        assert_eq!(cli.token.as_deref(), Some("t"));
        match cli.command {
            Commands::SetPrice { id, price } => {
                assert_eq!(id, "abc123");
                assert_eq!(price, "95");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_create_defaults() {
        let cli = Cli::try_parse_from(["menu-admin", "create", "--title", "Cola"]).unwrap();
        match cli.command {
            Commands::Create {
                title,
                price,
                image,
                ..
            } => {
                assert_eq!(title, "Cola");
                assert_eq!(price, "");
                assert!(image.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_create_requires_title() {
        assert!(Cli::try_parse_from(["menu-admin", "create"]).is_err());
    }
}
