//! Tests for the site index.

use super::cards::{AppletEntry, describe_page, find_applets, title_from_dir_name};
use super::page::{new_page, refresh_page};
use super::*;
use crate::test_support::write_file;
use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn site_with_applets() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_file(
        &root.join("MetalCubesChallenge/index.html"),
        "<p id=\"questionText\">Five <b>metal</b> cubes</p>",
    );
    write_file(
        &root.join("area_of_circles/index.html"),
        "<meta name=\"description\" content=\"Circles and their areas\">",
    );
    write_file(&root.join("js/zdog.dist.min.js"), "/* lib */");
    write_file(&root.join(".git/index.html"), "hidden");
    fs::create_dir_all(root.join("EmptyDir")).unwrap();
    dir
}

// ============================================================================
// Titles and descriptions
// ============================================================================

#[test]
fn test_title_splits_case_boundaries_and_underscores() {
    assert_eq!(title_from_dir_name("MetalCubesChallenge"), "Metal Cubes Challenge");
    assert_eq!(title_from_dir_name("area_of_circles"), "area of circles");
    assert_eq!(title_from_dir_name("Volume3D"), "Volume3 D");
    assert_eq!(title_from_dir_name("cube2Cube"), "cube2 Cube");
}

#[test]
fn test_description_prefers_meta_tag() {
    let html = "<meta name='description' content='From meta'><p id=\"questionText\">Q</p>";
    assert_eq!(describe_page(html), "From meta");
}

#[test]
fn test_description_uses_question_text_without_tags() {
    let html = "<p id=\"questionText\">Find the <span class=\"x\">volume</span>.</p>";
    assert_eq!(describe_page(html), "Find the volume.");
}

#[test]
fn test_long_question_is_truncated() {
    let question = "q".repeat(151);
    let html = format!("<p id=\"questionText\">{}</p>", question);

    let description = describe_page(&html);

    assert_eq!(description.chars().count(), 150);
    assert!(description.ends_with("..."));
    assert!(description.starts_with(&"q".repeat(147)));
}

#[test]
fn test_question_of_exactly_150_chars_is_kept() {
    let question = "é".repeat(150);
    let html = format!("<p id=\"questionText\">{}</p>", question);
    assert_eq!(describe_page(&html), question);
}

#[test]
fn test_description_defaults_without_question() {
    assert_eq!(
        describe_page("<h1>Nothing here</h1>"),
        "Interactive mathematics visualization applet"
    );
}

#[test]
fn test_card_html_links_to_directory() {
    let entry = AppletEntry {
        name: "MetalCubes".to_string(),
        title: "Metal Cubes".to_string(),
        description: "Cubes".to_string(),
    };
    let html = entry.card_html();

    assert!(html.contains("<h2 class=\"card-title\">Metal Cubes</h2>"));
    assert!(html.contains("<p class=\"card-description\">Cubes</p>"));
    assert!(html.contains("<a href=\"./MetalCubes/\" class=\"card-button\">Open Applet</a>"));
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_find_applets_skips_library_hidden_and_empty_dirs() {
    let site = site_with_applets();
    let names: Vec<String> = find_applets(site.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["MetalCubesChallenge", "area_of_circles"]);
}

#[test]
fn test_entry_without_page_uses_default_description() {
    let dir = TempDir::new().unwrap();
    let entry = AppletEntry::from_dir(&dir.path().join("Missing"));
    assert_eq!(entry.description, "Interactive mathematics visualization applet");
    assert_eq!(entry.name, "Missing");
}

// ============================================================================
// Page updates
// ============================================================================

#[test]
fn test_missing_index_is_created() {
    let site = site_with_applets();

    let update = update_index(site.path(), date(14)).unwrap();

    assert_eq!(
        update,
        IndexUpdate {
            applets: 2,
            created: true
        }
    );
    let html = fs::read_to_string(site.path().join(INDEX_FILE)).unwrap();
    assert!(html.contains("<title>Interactive Math Applets</title>"));
    assert!(html.contains("Last updated: 2025-03-14"));
    assert!(html.contains("<!-- Cards for applets -->"));
    assert!(html.contains("Metal Cubes Challenge"));
    assert!(html.contains("Five metal cubes"));
    assert!(html.contains("Circles and their areas"));
    assert!(!html.contains("EmptyDir"));
}

#[test]
fn test_update_is_idempotent_for_same_date() {
    let site = site_with_applets();

    update_index(site.path(), date(14)).unwrap();
    let first = fs::read_to_string(site.path().join(INDEX_FILE)).unwrap();

    let update = update_index(site.path(), date(14)).unwrap();
    let second = fs::read_to_string(site.path().join(INDEX_FILE)).unwrap();

    assert!(!update.created);
    assert_eq!(first, second);
}

#[test]
fn test_existing_page_keeps_its_layout() {
    let site = site_with_applets();
    let custom = "<html><h1>My Site</h1>\
                  <div class=\"cards-container\"><div class=\"card\">old</div></div>\n<!-- end cards -->\
                  <p class=\"last-updated\">Last updated: 2020-01-01</p></html>";
    write_file(&site.path().join(INDEX_FILE), custom);

    let update = update_index(site.path(), date(15)).unwrap();
    let html = fs::read_to_string(site.path().join(INDEX_FILE)).unwrap();

    assert!(!update.created);
    assert!(html.starts_with("<html><h1>My Site</h1>"));
    assert!(!html.contains(">old<"));
    assert!(html.contains("./area_of_circles/"));
    assert!(html.contains("<p class=\"last-updated\">Last updated: 2025-03-15</p>"));
    assert!(html.ends_with("</html>"));
}

#[test]
fn test_page_without_cards_block_is_recreated() {
    let site = site_with_applets();
    write_file(&site.path().join(INDEX_FILE), "<html>custom</html>");

    let update = update_index(site.path(), date(14)).unwrap();

    assert!(update.created);
    let html = fs::read_to_string(site.path().join(INDEX_FILE)).unwrap();
    assert!(html.contains("Interactive Math Applets"));
}

#[test]
fn test_refresh_keeps_dollar_signs_literal() {
    let page = new_page("", "2025-01-01");
    let refreshed = refresh_page(&page, "<p>costs $1 and $2</p>", "2025-01-02");

    assert!(refreshed.contains("<p>costs $1 and $2</p></div><!-- end cards -->"));
    assert!(refreshed.contains("Last updated: 2025-01-02"));
}

#[test]
fn test_missing_site_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(update_index(&dir.path().join("absent"), date(1)).is_err());
}
