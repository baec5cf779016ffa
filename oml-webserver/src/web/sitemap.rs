use std::fmt::Write as _;

use rocket::{get, http::ContentType, routes, Route, State};
use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

use crate::web::{sqlite, Cfg};
use oml_core::{entities::*, repositories::*};

pub fn routes() -> Vec<Route> {
    routes![get_sitemap]
}

const LASTMOD_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

fn static_entries(cfg: &Cfg) -> Vec<UrlEntry> {
    vec![
        UrlEntry {
            loc: format!("{}/", cfg.base_url),
            lastmod: None,
        },
        UrlEntry {
            loc: format!("{}/maps", cfg.base_url),
            lastmod: None,
        },
    ]
}

fn lastmod(updated_at: Timestamp) -> Option<String> {
    let date_time = OffsetDateTime::from_unix_timestamp(updated_at.as_seconds()).ok()?;
    date_time.format(LASTMOD_FORMAT).ok()
}

fn map_entries(db: &sqlite::Connections, cfg: &Cfg) -> anyhow::Result<Vec<UrlEntry>> {
    let maps = db.shared()?.recent_maps(&Pagination::default())?;
    Ok(maps
        .into_iter()
        .map(|map| UrlEntry {
            loc: format!("{}/maps/{}", cfg.base_url, map.slug),
            lastmod: lastmod(map.updated_at),
        })
        .collect())
}

fn render(entries: &[UrlEntry]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');
    for entry in entries {
        // loc values are built from the configured base URL and
        // slugs, which cannot contain XML special characters.
        let _ = write!(xml, "  <url><loc>{}</loc>", entry.loc);
        if let Some(lastmod) = &entry.lastmod {
            let _ = write!(xml, "<lastmod>{lastmod}</lastmod>");
        }
        xml.push_str("</url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Projection of the map listing for search engines.
///
/// A storage failure degrades to the static entries instead of
/// failing the response.
#[get("/sitemap.xml")]
pub fn get_sitemap(db: sqlite::Connections, cfg: &State<Cfg>) -> (ContentType, String) {
    let mut entries = static_entries(cfg);
    match map_entries(&db, cfg) {
        Ok(mut maps) => entries.append(&mut maps),
        Err(err) => {
            log::warn!("Falling back to static sitemap entries: {err}");
        }
    }
    (ContentType::XML, render(&entries))
}
