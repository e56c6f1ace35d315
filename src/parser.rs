use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{Result, ScrapeError};
use crate::fetcher::Page;
use crate::models::{Column, ProductRecord};

const PRODUCT_LINKS: &str = ".products a";
const TIME_FORMAT: &str = "%I:%M %P";

static PRICE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d+ ").expect("price prefix pattern is valid"));

/// Where a column's value is read from.
#[derive(Debug, Clone, Copy)]
enum Source {
    Text(&'static str),
    Attr(&'static str, &'static str),
    PageUrl,
    ScrapedAt(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct FieldRule {
    column: Column,
    source: Source,
    transform: Option<fn(&str) -> String>,
}

const PRODUCT_FIELDS: [FieldRule; 5] = [
    FieldRule {
        column: Column::Title,
        source: Source::Text(".shirt-details h1"),
        transform: Some(strip_price_prefix as fn(&str) -> String),
    },
    FieldRule {
        column: Column::Price,
        source: Source::Text(".price"),
        transform: None,
    },
    FieldRule {
        column: Column::ImageUrl,
        source: Source::Attr(".shirt-picture img", "src"),
        transform: None,
    },
    FieldRule {
        column: Column::Url,
        source: Source::PageUrl,
        transform: None,
    },
    FieldRule {
        column: Column::Time,
        source: Source::ScrapedAt(TIME_FORMAT),
        transform: None,
    },
];

/// Removes every `$<digits> ` run, e.g. `"$20 Men's Shirt"` -> `"Men's Shirt"`.
pub fn strip_price_prefix(raw: &str) -> String {
    PRICE_PREFIX.replace_all(raw, "").into_owned()
}

/// Returns the href of every `.products a` element in document order,
/// resolved against the page URL. Duplicates are kept, and an anchor without
/// an href yields an empty link, which fails when fetched.
pub fn discover_links(page: &Page) -> Result<Vec<String>> {
    let doc = Html::parse_document(&page.body);
    let selector = parse_selector(PRODUCT_LINKS)?;
    let base = Url::parse(&page.url).ok();

    let links = doc
        .select(&selector)
        .map(|anchor| match anchor.value().attr("href") {
            Some(href) => resolve(base.as_ref(), href),
            None => String::new(),
        })
        .collect();
    Ok(links)
}

/// Builds a [`ProductRecord`] from a detail page. Any selector that matches
/// nothing fails the whole extraction.
pub fn extract_product(page: &Page, scraped_at: DateTime<Local>) -> Result<ProductRecord> {
    let doc = Html::parse_document(&page.body);
    let base = Url::parse(&page.url).ok();
    let mut record = ProductRecord::default();

    for rule in &PRODUCT_FIELDS {
        let raw: String = match rule.source {
            Source::Text(selector) => first_match(&doc, selector, page)?.text().collect(),
            Source::Attr(selector, attribute) => {
                let element = first_match(&doc, selector, page)?;
                let value = element.value().attr(attribute).ok_or_else(|| {
                    ScrapeError::MissingAttribute {
                        selector: selector.to_string(),
                        attribute: attribute.to_string(),
                        url: page.url.clone(),
                    }
                })?;
                resolve(base.as_ref(), value)
            }
            Source::PageUrl => page.url.clone(),
            Source::ScrapedAt(format) => scraped_at.format(format).to_string(),
        };
        let value = match rule.transform {
            Some(transform) => transform(&raw),
            None => raw,
        };
        record.set(rule.column, value);
    }

    Ok(record)
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn first_match<'a>(doc: &'a Html, selector: &str, page: &Page) -> Result<ElementRef<'a>> {
    let parsed = parse_selector(selector)?;
    doc.select(&parsed)
        .next()
        .ok_or_else(|| ScrapeError::MissingElement {
            selector: selector.to_string(),
            url: page.url.clone(),
        })
}

// Mirrors what a DOM's href/src properties report; unresolvable values are
// passed through and fail when fetched.
fn resolve(base: Option<&Url>, raw: &str) -> String {
    base.and_then(|base| base.join(raw).ok())
        .map(String::from)
        .unwrap_or_else(|| raw.to_string())
}
