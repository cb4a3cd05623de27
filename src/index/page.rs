//! Listing page: in-place card refresh or a fresh page.

use super::cards::{AppletEntry, find_applets};
use crate::error::Result;
use crate::fs::{atomic_write_file, read_text};
use chrono::NaiveDate;
use regex::{NoExpand, Regex};
use std::path::Path;
use std::sync::LazyLock;

/// Name of the listing page at the site root.
pub const INDEX_FILE: &str = "index.html";

static CARDS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div\s+class="cards-container">.*?</div>\s*<!--\s*end\s+cards\s*-->"#)
        .expect("invalid cards block regex")
});

static LAST_UPDATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<p\s+class="last-updated">.*?</p>"#).expect("invalid last updated regex")
});

/// What an index update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexUpdate {
    pub applets: usize,
    /// True when the page was written from the built-in layout.
    pub created: bool,
}

/// Regenerate the listing page in `root` for the applets it contains.
///
/// An existing page keeps everything outside its cards block and date
/// stamp. A missing page, or one without a cards block, is replaced by the
/// built-in layout. Running twice with the same applets and date produces
/// the same page.
pub fn update_index(root: &Path, today: NaiveDate) -> Result<IndexUpdate> {
    let applets: Vec<AppletEntry> = find_applets(root)?
        .iter()
        .map(|dir| AppletEntry::from_dir(dir))
        .collect();
    let cards = cards_html(&applets);
    let date = today.format("%Y-%m-%d").to_string();

    let index_path = root.join(INDEX_FILE);
    let existing = if index_path.is_file() {
        Some(read_text(&index_path, "index page")?)
    } else {
        None
    };

    let (html, created) = match existing {
        Some(page) if CARDS_BLOCK.is_match(&page) => (refresh_page(&page, &cards, &date), false),
        Some(_) => {
            log::warn!("no cards container in {}; recreating it", index_path.display());
            (new_page(&cards, &date), true)
        }
        None => (new_page(&cards, &date), true),
    };

    atomic_write_file(&index_path, &html)?;
    Ok(IndexUpdate {
        applets: applets.len(),
        created,
    })
}

fn cards_html(applets: &[AppletEntry]) -> String {
    let mut cards = String::from("\n        <!-- Cards for applets -->\n");
    for applet in applets {
        cards.push_str(&applet.card_html());
    }
    cards
}

/// Replace the cards block and date stamp of an existing page.
pub fn refresh_page(page: &str, cards: &str, date: &str) -> String {
    let block = format!(
        "<div class=\"cards-container\">{}</div><!-- end cards -->",
        cards
    );
    let stamp = format!("<p class=\"last-updated\">Last updated: {}</p>", date);

    let page = CARDS_BLOCK.replace_all(page, NoExpand(&block));
    LAST_UPDATED.replace_all(&page, NoExpand(&stamp)).into_owned()
}

/// The built-in listing page.
pub fn new_page(cards: &str, date: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Interactive Math Applets</title>
    <style>
        body, html {{
            margin: 0;
            padding: 0;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #f5f5f5;
            color: #333;
        }}
        .container {{
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }}
        header {{
            background-color: #4a86e8;
            color: white;
            padding: 20px 0;
            text-align: center;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        h1 {{
            margin: 0;
            font-size: 2rem;
        }}
        .cards-container {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 20px;
            margin-top: 30px;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            overflow: hidden;
            box-shadow: 0 4px 8px rgba(0,0,0,0.1);
            transition: transform 0.3s, box-shadow 0.3s;
            display: flex;
            flex-direction: column;
        }}
        .card:hover {{
            transform: translateY(-5px);
            box-shadow: 0 8px 16px rgba(0,0,0,0.2);
        }}
        .card-content {{
            padding: 20px;
            flex: 1;
        }}
        .card-title {{
            margin-top: 0;
            color: #4a86e8;
            font-size: 1.5rem;
        }}
        .card-description {{
            color: #666;
            line-height: 1.5;
        }}
        .card-button {{
            display: block;
            background-color: #4a86e8;
            color: white;
            text-align: center;
            padding: 12px;
            text-decoration: none;
            font-weight: bold;
            transition: background-color 0.3s;
        }}
        .card-button:hover {{
            background-color: #3a76d8;
        }}
        footer {{
            margin-top: 40px;
            text-align: center;
            padding: 20px;
            color: #777;
            font-size: 0.9rem;
        }}
        @media (max-width: 768px) {{
            .cards-container {{
                grid-template-columns: 1fr;
            }}
        }}
    </style>
</head>
<body>
    <header>
        <h1>Interactive Math Applets</h1>
    </header>

    <div class="container">
        <p>Welcome to our collection of interactive mathematics applets. These visualizations are designed to help students understand mathematical concepts through interactive learning.</p>

        <div class="cards-container">{cards}</div><!-- end cards -->

        <footer>
            <p class="last-updated">Last updated: {date}</p>
            <p>© 2025 Interactive Math Applets</p>
        </footer>
    </div>
</body>
</html>
"#
    )
}
