//! HTTP client for the menu backend

use std::time::Duration;

use menu_core::domain::price::format_number;
use menu_core::{ErrorPayload, MenuItem, NewMenuItem};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::credential::Credential;
use crate::error::ClientError;
use crate::upload::ImageUpload;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone)]
pub struct MenuApiClient {
    client: Client,
    base_url: Url,
}

impl MenuApiClient {
    /// `api_url` is the REST root, e.g. `http://127.0.0.1:3000/api`.
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(api_url).map_err(|e| ClientError::InvalidUrl(format!("{api_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(api_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// `GET /menu`. A body that is not a JSON array counts as an empty menu;
    /// array entries that are not item records are skipped.
    pub async fn fetch_menu(
        &self,
        credential: Option<&Credential>,
    ) -> Result<Vec<MenuItem>, ClientError> {
        let url = self.endpoint(&["menu"])?;
        debug!(%url, "Fetching menu");

        let request = authorize(self.client.get(url), credential);
        match self.send(request).await? {
            Some(Value::Array(items)) => {
                let items: Vec<MenuItem> = items
                    .into_iter()
                    .filter_map(|value| match serde_json::from_value(value) {
                        Ok(item) => Some(item),
                        Err(e) => {
                            warn!(error = %e, "Skipping malformed menu item");
                            None
                        }
                    })
                    .collect();
                debug!(count = items.len(), "Menu fetched");
                Ok(items)
            }
            Some(_) => {
                warn!("Menu endpoint returned a non-array body, treating as empty");
                Ok(Vec::new())
            }
            None => Ok(Vec::new()),
        }
    }

    /// `POST /login`. The username is trimmed; the password is sent as given.
    pub async fn login(&self, username: &str, password: &str) -> Result<Credential, ClientError> {
        let username = username.trim();
        let request = self.client.post(self.endpoint(&["login"])?).json(&LoginRequest {
            username,
            password,
        });

        let body = self.send(request).await?;
        let token = body
            .as_ref()
            .and_then(|b| b.get("token"))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Decode("login response has no token".to_string()))?;

        info!(username, "Signed in");
        Ok(Credential::new(token))
    }

    /// `POST /menu` as multipart form data, with an optional image file.
    pub async fn create_item(
        &self,
        credential: &Credential,
        item: &NewMenuItem,
        image: Option<ImageUpload>,
    ) -> Result<(), ClientError> {
        let mut form = Form::new()
            .text("title", item.title.clone())
            .text("description", item.description.clone())
            .text("category", item.category.clone());
        if let Some(price) = item.price {
            form = form.text("price", format_number(price));
        }
        if let Some(image) = image {
            form = form.part("image", image.into_part()?);
        }

        let request = self
            .client
            .post(self.endpoint(&["menu"])?)
            .bearer_auth(credential.token())
            .multipart(form);
        self.send(request).await?;

        info!(title = %item.title, "Menu item created");
        Ok(())
    }

    /// `PUT /menu/{id}` with a JSON `{ price }` body.
    pub async fn update_price(
        &self,
        credential: &Credential,
        id: &str,
        price: f64,
    ) -> Result<(), ClientError> {
        if !price.is_finite() {
            return Err(ClientError::InvalidInput(format!("price {price} is not a number")));
        }

        let request = self
            .client
            .put(self.endpoint(&["menu", id])?)
            .bearer_auth(credential.token())
            .json(&json!({ "price": price }));
        self.send(request).await?;

        info!(id, price, "Menu item price updated");
        Ok(())
    }

    /// `PUT /menu/{id}` as multipart with a new image and optional alt text.
    pub async fn replace_image(
        &self,
        credential: &Credential,
        id: &str,
        image: ImageUpload,
        image_alt: Option<&str>,
    ) -> Result<(), ClientError> {
        let mut form = Form::new().part("image", image.into_part()?);
        if let Some(alt) = image_alt.filter(|a| !a.is_empty()) {
            form = form.text("imageAlt", alt.to_string());
        }

        let request = self
            .client
            .put(self.endpoint(&["menu", id])?)
            .bearer_auth(credential.token())
            .multipart(form);
        self.send(request).await?;

        info!(id, "Menu item image replaced");
        Ok(())
    }

    /// `DELETE /menu/{id}`.
    pub async fn delete_item(&self, credential: &Credential, id: &str) -> Result<(), ClientError> {
        let request = self
            .client
            .delete(self.endpoint(&["menu", id])?)
            .bearer_auth(credential.token());
        self.send(request).await?;

        info!(id, "Menu item deleted");
        Ok(())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Sends the request and parses the body leniently: an empty or non-JSON
    /// body is `None`. Non-2xx statuses become [`ClientError::Http`].
    async fn send(&self, request: RequestBuilder) -> Result<Option<Value>, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<Value>(&text).ok()
        };

        if !status.is_success() {
            warn!(status = status.as_u16(), "Backend request failed");
            return Err(ClientError::Http {
                status,
                body: body.as_ref().and_then(ErrorPayload::from_value),
            });
        }

        Ok(body)
    }
}

fn authorize(request: RequestBuilder, credential: Option<&Credential>) -> RequestBuilder {
    match credential {
        Some(credential) => request.bearer_auth(credential.token()),
        None => request,
    }
}
