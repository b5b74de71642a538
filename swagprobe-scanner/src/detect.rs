// Swagger UI fingerprinting on parsed HTML

use scraper::{Html, Selector};
use std::sync::LazyLock;

/// `id` of the container div swagger-ui mounts into.
pub const SWAGGER_CONTAINER_ID: &str = "swagger-ui";

/// Page title the stock swagger-ui index.html ships with.
pub const SWAGGER_TITLE: &str = "Swagger UI";

static DIV_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div[id]").unwrap());
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Returns true if the document has a `<div id="swagger-ui">` or a
/// `<title>` whose text is exactly `Swagger UI`.
///
/// Both comparisons are exact and case-sensitive. Unparseable markup is
/// treated the same as markup without the markers.
pub fn is_swagger_ui(html: &str) -> bool {
    let document = Html::parse_document(html);
    has_swagger_container(&document) || has_swagger_title(&document)
}

fn has_swagger_container(document: &Html) -> bool {
    document
        .select(&DIV_SELECTOR)
        .any(|element| element.value().attr("id") == Some(SWAGGER_CONTAINER_ID))
}

fn has_swagger_title(document: &Html) -> bool {
    document
        .select(&TITLE_SELECTOR)
        .any(|element| element.text().collect::<String>() == SWAGGER_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_container_div() {
        let html = r#"<html><body><div id="swagger-ui"></div></body></html>"#;
        assert!(is_swagger_ui(html));
    }

    #[test]
    fn test_detects_title() {
        let html = "<html><head><title>Swagger UI</title></head><body></body></html>";
        assert!(is_swagger_ui(html));
    }

    #[test]
    fn test_title_is_case_sensitive() {
        assert!(!is_swagger_ui("<title>swagger ui</title>"));
        assert!(!is_swagger_ui("<title>SWAGGER UI</title>"));
    }

    #[test]
    fn test_title_requires_exact_text() {
        assert!(!is_swagger_ui("<title>Swagger UI - Petstore</title>"));
        assert!(!is_swagger_ui("<title> Swagger UI </title>"));
    }

    #[test]
    fn test_container_id_must_match_exactly() {
        assert!(!is_swagger_ui(r#"<div id="swagger-ui-wrapper"></div>"#));
        assert!(!is_swagger_ui(r#"<div class="swagger-ui"></div>"#));
    }

    #[test]
    fn test_container_must_be_a_div() {
        assert!(!is_swagger_ui(r#"<section id="swagger-ui"></section>"#));
    }

    #[test]
    fn test_uppercase_tag_names_still_match() {
        // html5ever lowercases element names
        assert!(is_swagger_ui(r#"<DIV id="swagger-ui"></DIV>"#));
    }

    #[test]
    fn test_garbage_is_not_swagger() {
        assert!(!is_swagger_ui("{\"openapi\": \"3.0.0\"}"));
        assert!(!is_swagger_ui("<<<>>> not html at all"));
        assert!(!is_swagger_ui(""));
    }
}
