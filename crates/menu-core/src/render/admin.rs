//! Admin item list rendering

use std::fmt::{self, Write};

use menu_shared::AdminLabels;

use super::{asset_url, escape_html};
use crate::domain::MenuItem;

/// Renders the flat, ungrouped list the admin page works on. Each row carries
/// its item id and the three action buttons.
pub struct AdminListRenderer<'a> {
    labels: &'a AdminLabels,
    currency_suffix: &'a str,
    assets_url: &'a str,
}

impl<'a> AdminListRenderer<'a> {
    pub fn new(labels: &'a AdminLabels, currency_suffix: &'a str, assets_url: &'a str) -> Self {
        Self {
            labels,
            currency_suffix,
            assets_url,
        }
    }

    pub fn render(&self, items: &[MenuItem]) -> String {
        if items.is_empty() {
            return format!("<li>{}</li>", escape_html(&self.labels.empty_list));
        }
        let mut out = String::new();
        for item in items {
            // Writing into a String cannot fail.
            let _ = self.write_row(&mut out, item);
        }
        out
    }

    pub fn render_failed(&self) -> String {
        format!("<li>{}</li>", escape_html(&self.labels.list_failed))
    }

    fn write_row(&self, out: &mut String, item: &MenuItem) -> fmt::Result {
        write!(
            out,
            "<li data-id=\"{}\"><b>{}</b> — {} {}",
            escape_html(item.id()),
            escape_html(item.title()),
            escape_html(&item.price_text()),
            escape_html(self.currency_suffix)
        )?;
        if let Some(image_url) = item.image_url() {
            write!(
                out,
                "<div class=\"thumb-line\"><img class=\"thumb\" src=\"{}\" alt=\"{}\"></div>",
                escape_html(&asset_url(self.assets_url, image_url)),
                escape_html(item.image_alt())
            )?;
        }
        write!(
            out,
            "<span class=\"right\"><button data-act=\"edit\">{}</button>\
             <button data-act=\"image\">{}</button>\
             <button data-act=\"delete\">{}</button></span></li>",
            escape_html(&self.labels.edit_price),
            escape_html(&self.labels.replace_image),
            escape_html(&self.labels.delete)
        )
    }
}
