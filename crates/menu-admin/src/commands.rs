//! Admin command handlers

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Duration,
};

use anyhow::{anyhow, bail, Context as _};
use menu_client::{AdminSession, ClientError, ImageUpload, MenuApiClient};
use menu_core::{
    render::{AdminListRenderer, MenuPage, MenuRenderer},
    FormErrors, MenuItem, NewMenuItem,
};
use menu_shared::{config::AppConfig, AdminLabels, MenuLocale};
use tracing::{debug, error};

/// Everything a command needs: the client, the session, and the locale.
pub struct Context {
    client: MenuApiClient,
    session: AdminSession,
    locale: MenuLocale,
    assets_url: String,
}

impl Context {
    pub fn new(
        config: AppConfig,
        api_url: Option<&str>,
        assets_url: Option<&str>,
        token: Option<&str>,
    ) -> anyhow::Result<Self> {
        let api_url = api_url.unwrap_or(&config.backend.api_url);
        debug!(api_url, "Using menu backend");

        let client = MenuApiClient::new(
            api_url,
            Duration::from_secs(config.backend.timeout_seconds),
        )?;

        Ok(Self {
            client,
            session: AdminSession::from_token(token),
            assets_url: assets_url
                .map(str::to_string)
                .unwrap_or(config.backend.assets_url),
            locale: config.locale,
        })
    }

    fn labels(&self) -> &AdminLabels {
        &self.locale.admin
    }

    pub async fn login(&self, username: &str, password: &str) -> anyhow::Result<()> {
        match self.client.login(username, password).await {
            Ok(credential) => {
                println!("{}", credential.token());
                eprintln!("{}", self.labels().signed_in);
                Ok(())
            }
            Err(e) => Err(form_failure(e.form_errors())),
        }
    }

    pub fn status(&self) {
        println!("{}", self.session.status(self.labels()));
    }

    pub async fn list(&self, html: bool) -> anyhow::Result<()> {
        let credential = self.session.credential()?;
        let renderer = AdminListRenderer::new(
            self.labels(),
            &self.locale.currency_suffix,
            &self.assets_url,
        );

        let items = match self.client.fetch_menu(Some(credential)).await {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "Admin list fetch failed");
                if html {
                    println!("{}", renderer.render_failed());
                    return Ok(());
                }
                bail!("{}", self.labels().list_failed);
            }
        };

        if html {
            println!("{}", renderer.render(&items));
        } else if items.is_empty() {
            println!("{}", self.labels().empty_list);
        } else {
            for item in &items {
                println!("{}", self.text_row(item));
            }
        }
        Ok(())
    }

    fn text_row(&self, item: &MenuItem) -> String {
        format!(
            "{}\t{}\t{} {}\t{}",
            item.id(),
            item.title(),
            item.price_text(),
            self.locale.currency_suffix,
            item.category.as_deref().unwrap_or_default()
        )
    }

    /// Public menu page as the server would render it. Fetch failures
    /// render the error placeholder instead of failing the command.
    pub async fn render(&self, fragment: bool) {
        let page = match self.client.fetch_menu(None).await {
            Ok(items) => MenuPage::loaded(items, &self.locale),
            Err(e) => {
                error!(error = %e, "Menu fetch failed");
                MenuPage::failed(&self.locale)
            }
        };

        let renderer = MenuRenderer::new(&self.locale, &self.assets_url);
        if fragment {
            println!("{}", renderer.render_sections(&page.sections));
        } else {
            println!("{}", renderer.render_page(&page));
        }
    }

    pub async fn create(
        &self,
        title: &str,
        description: &str,
        price: &str,
        category: &str,
        image: Option<PathBuf>,
    ) -> anyhow::Result<()> {
        let credential = self.session.credential()?;
        let item = NewMenuItem::new(title, description, price, category)
            .map_err(|e| form_failure(FormErrors::from(&e)))?;

        let image = match image {
            Some(path) => Some(load_image(path).await?),
            None => None,
        };

        self.client
            .create_item(credential, &item, image)
            .await
            .map_err(|e| form_failure(e.form_errors()))?;

        println!("{}", item.title);
        Ok(())
    }

    pub async fn set_price(&self, id: &str, price: &str) -> anyhow::Result<()> {
        let credential = self.session.credential()?;
        let price = parse_price(price)?;

        self.client
            .update_price(credential, id, price)
            .await
            .map_err(|e| self.alert(&e, &self.labels().update_failed))
    }

    pub async fn set_image(
        &self,
        id: &str,
        path: PathBuf,
        alt: Option<&str>,
    ) -> anyhow::Result<()> {
        let credential = self.session.credential()?;
        let image = load_image(path).await?;

        self.client
            .replace_image(credential, id, image, alt)
            .await
            .map_err(|e| self.alert(&e, &self.labels().image_failed))
    }

    pub async fn delete(&self, id: &str, yes: bool) -> anyhow::Result<()> {
        let credential = self.session.credential()?;
        if !yes && !confirm(&self.labels().delete_confirm)? {
            return Ok(());
        }

        self.client
            .delete_item(credential, id)
            .await
            .map_err(|e| self.alert(&e, &self.labels().delete_failed))
    }

    fn alert(&self, e: &ClientError, fallback: &str) -> anyhow::Error {
        error!(error = %e, "Admin action failed");
        if e.status().is_some_and(|s| s.as_u16() == 401) {
            return anyhow!("{}", self.labels().signed_out);
        }
        anyhow!("{}", e.alert_message(fallback))
    }
}

fn form_failure(errors: FormErrors) -> anyhow::Error {
    anyhow!("{errors}")
}

async fn load_image(path: PathBuf) -> anyhow::Result<ImageUpload> {
    let image = ImageUpload::from_path(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    if !image.is_image() {
        bail!("{} is not an image ({})", path.display(), image.mime);
    }
    Ok(image)
}

fn parse_price(raw: &str) -> anyhow::Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| anyhow!("Priset måste vara ett tal: {raw}"))
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    eprint!("{question} [j/N] ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "j" | "ja" | "y" | "yes"
    )
}
