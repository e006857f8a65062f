//! Public menu page rendering

use std::fmt::{self, Write};

use menu_shared::MenuLocale;

use super::{asset_url, escape_html};
use crate::domain::{CategoryGroup, MenuItem, MenuSection};
use crate::grouping::build_menu;

/// Everything the public page shows for one fetch outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuPage {
    pub sections: Vec<MenuSection>,
    /// Text for the `#menu-error` element; empty when the fetch succeeded.
    pub notice: Option<String>,
}

impl MenuPage {
    pub fn loaded(items: Vec<MenuItem>, locale: &MenuLocale) -> Self {
        Self {
            sections: build_menu(items, locale),
            notice: None,
        }
    }

    /// Page shown when the menu could not be fetched.
    pub fn failed(locale: &MenuLocale) -> Self {
        Self {
            sections: vec![MenuSection::Placeholder {
                message: locale.fetch_failed.clone(),
            }],
            notice: Some(locale.fetch_failed_notice.clone()),
        }
    }
}

pub struct MenuRenderer<'a> {
    locale: &'a MenuLocale,
    assets_url: &'a str,
}

impl<'a> MenuRenderer<'a> {
    pub fn new(locale: &'a MenuLocale, assets_url: &'a str) -> Self {
        Self { locale, assets_url }
    }

    pub fn render_item(&self, item: &MenuItem) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_item(&mut out, item);
        out
    }

    pub fn render_group(&self, group: &CategoryGroup) -> String {
        let mut out = String::new();
        let _ = self.write_group(&mut out, group);
        out
    }

    /// The contents of `#menu-list`.
    pub fn render_sections(&self, sections: &[MenuSection]) -> String {
        let mut out = String::new();
        for section in sections {
            let _ = self.write_section(&mut out, section);
        }
        out
    }

    /// A complete HTML document for the public menu.
    pub fn render_page(&self, page: &MenuPage) -> String {
        let mut out = String::new();
        let _ = self.write_page(&mut out, page);
        out
    }

    fn write_page(&self, out: &mut String, page: &MenuPage) -> fmt::Result {
        let title = escape_html(&self.locale.site_title);
        write!(
            out,
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n</head>\n<body>\n<main>\n<h1>{}</h1>\n",
            escape_html(&self.locale.language),
            title,
            title
        )?;
        write!(
            out,
            "<p id=\"menu-error\" class=\"error\" role=\"alert\">{}</p>\n",
            escape_html(page.notice.as_deref().unwrap_or_default())
        )?;
        write!(out, "<div id=\"menu-list\">")?;
        for section in &page.sections {
            self.write_section(out, section)?;
        }
        write!(out, "</div>\n</main>\n</body>\n</html>\n")
    }

    fn write_section(&self, out: &mut String, section: &MenuSection) -> fmt::Result {
        match section {
            MenuSection::Category(group) => self.write_group(out, group),
            MenuSection::Placeholder { message } => write!(
                out,
                "<ul class=\"menu-items\"><li><div class=\"description\">{}</div></li></ul>",
                escape_html(message)
            ),
        }
    }

    fn write_group(&self, out: &mut String, group: &CategoryGroup) -> fmt::Result {
        write!(
            out,
            "<section class=\"menu-category\" data-category=\"{}\"><h2 class=\"category-title\">{}</h2><ul class=\"menu-items\">",
            escape_html(&group.key),
            escape_html(&group.label)
        )?;
        for item in &group.items {
            self.write_item(out, item)?;
        }
        write!(out, "</ul></section>")
    }

    fn write_item(&self, out: &mut String, item: &MenuItem) -> fmt::Result {
        write!(out, "<li class=\"menu-item\">")?;
        if let Some(image_url) = item.image_url() {
            write!(
                out,
                "<img class=\"menu-img\" src=\"{}\" alt=\"{}\">",
                escape_html(&asset_url(self.assets_url, image_url)),
                escape_html(item.image_alt())
            )?;
        }
        write!(
            out,
            "<div class=\"meta\"><div class=\"item\"><div class=\"name\">{}</div>\
             <div class=\"menu-line\"><div class=\"line\"></div></div>\
             <div class=\"price\">{}</div></div>",
            escape_html(item.title()),
            escape_html(&item.price_display(&self.locale.currency_suffix))
        )?;
        let description = escape_html(item.description());
        if !description.is_empty() {
            write!(out, "<div class=\"description\">{}</div>", description)?;
        }
        write!(out, "</div></li>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Price;

    const ASSETS: &str = "http://127.0.0.1:3000";

    fn item(category: &str, title: &str, price: Price) -> MenuItem {
        MenuItem {
            id: Some(title.to_lowercase()),
            title: Some(title.to_string()),
            category: Some(category.to_string()),
            price: Some(price),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_item() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let html = renderer.render_item(&MenuItem {
            title: Some("Burgare".into()),
            description: Some("Med ost".into()),
            price: Some(Price::new(25)),
            image_url: Some("/uploads/b.jpg".into()),
            ..Default::default()
        });

        assert!(html.contains(r#"<div class="name">Burgare</div>"#));
        assert!(html.contains(r#"<div class="price">25 kr</div>"#));
        assert!(html.contains(r#"<div class="description">Med ost</div>"#));
        assert!(html.contains(r#"src="http://127.0.0.1:3000/uploads/b.jpg" alt="Burgare""#));
    }

    #[test]
    fn test_non_numeric_price_renders_empty() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let html = renderer.render_item(&item("Mat", "Dagens", Price::new("abc")));

        assert!(html.contains(r#"<div class="price"></div>"#));
        assert!(!html.contains("NaN"));
    }

    #[test]
    fn test_null_and_absent_price() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let null_price: MenuItem =
            serde_json::from_value(serde_json::json!({ "title": "Vatten", "price": null })).unwrap();
        let no_price: MenuItem =
            serde_json::from_value(serde_json::json!({ "title": "Vatten" })).unwrap();

        assert!(renderer
            .render_item(&null_price)
            .contains(r#"<div class="price">0 kr</div>"#));
        assert!(renderer
            .render_item(&no_price)
            .contains(r#"<div class="price"></div>"#));
    }

    #[test]
    fn test_render_group() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let mut group = CategoryGroup::new("Varma <drycker>");
        group.items.push(item("Varma <drycker>", "Kaffe", Price::new(25)));
        group.items.push(item("varma <drycker>", "Te", Price::new("20")));

        let html = renderer.render_group(&group);

        assert!(html.starts_with(
            r#"<section class="menu-category" data-category="varma &lt;drycker&gt;"><h2 class="category-title">Varma &lt;drycker&gt;</h2><ul class="menu-items"><li class="menu-item">"#
        ));
        assert!(html.ends_with("</li></ul></section>"));
        assert!(html.find("Kaffe").unwrap() < html.find(">Te<").unwrap());
        assert_eq!(html.matches(r#"<li class="menu-item">"#).count(), 2);
    }

    #[test]
    fn test_empty_description_and_image_omitted() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let html = renderer.render_item(&item("Mat", "Pasta", Price::new(99)));

        assert!(!html.contains("description"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let hostile = MenuItem {
            title: Some("<script>alert('x')</script>".into()),
            description: Some(r#"Tom & "Jerry""#.into()),
            category: Some("<b>Snacks</b>".into()),
            image_url: Some("/u/a.jpg".into()),
            image_alt: Some(r#"" onerror="x"#.into()),
            ..Default::default()
        };
        let page = MenuPage::loaded(vec![hostile], &locale);
        let html = renderer.render_sections(&page.sections);

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("'x'"));
        assert!(!html.contains(r#""Jerry""#));
        assert!(!html.contains(r#"" onerror=""#));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
        assert!(html.contains("&lt;b&gt;Snacks&lt;/b&gt;"));
    }

    #[test]
    fn test_group_order_in_output() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let page = MenuPage::loaded(
            vec![
                item("dryck", "Cola", Price::new("20")),
                item("Mat", "Burgare", Price::new(25)),
                item("Snacks", "Chips", Price::new(15)),
            ],
            &locale,
        );
        let html = renderer.render_sections(&page.sections);

        let mat = html.find(">Mat</h2>").unwrap();
        let dryck = html.find(">dryck</h2>").unwrap();
        let snacks = html.find(">Snacks</h2>").unwrap();
        assert!(mat < dryck && dryck < snacks);
        assert!(html.contains(r#"<div class="price">20 kr</div>"#));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let items = vec![
            item("Dessert", "Glass", Price::new(30)),
            item("Mat", "Pasta", Price::new("110")),
        ];

        let first = renderer.render_page(&MenuPage::loaded(items.clone(), &locale));
        let second = renderer.render_page(&MenuPage::loaded(items, &locale));

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_menu_placeholder() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let html = renderer.render_sections(&MenuPage::loaded(Vec::new(), &locale).sections);

        assert_eq!(
            html,
            r#"<ul class="menu-items"><li><div class="description">Inget i menyn än.</div></li></ul>"#
        );
        assert!(!html.contains("menu-item\""));
    }

    #[test]
    fn test_failed_page_shows_notice() {
        let locale = MenuLocale::default();
        let renderer = MenuRenderer::new(&locale, ASSETS);
        let html = renderer.render_page(&MenuPage::failed(&locale));

        assert!(html.contains(r#"<p id="menu-error" class="error" role="alert">Fel vid hämtning av menyn</p>"#));
        assert!(html.contains(r#"<div class="description">Fel vid hämtning av menyn.</div>"#));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
