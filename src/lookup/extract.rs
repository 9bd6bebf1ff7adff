use super::LookupError;
use scraper::{Html, Selector};

/// Knowledge-panel element holding a person's displayed age.
pub const AGE_MARKER_SELECTOR: &str = r#"[data-attrid="kc:/people/person:age"]"#;
const AGE_TEXT_SELECTOR: &str = "div > div";

fn selector(css: &str) -> Result<Selector, LookupError> {
    Selector::parse(css).map_err(|e| LookupError::Selector(format!("{css}: {e}")))
}

/// Read the age from search-result HTML.
///
/// Takes the first non-blank `div > div` text inside the age marker and
/// parses its leading digits, so `"45 anos"` and `"45 years"` both yield 45.
pub fn extract_age(html: &str) -> Result<u32, LookupError> {
    let marker = selector(AGE_MARKER_SELECTOR)?;
    let nested = selector(AGE_TEXT_SELECTOR)?;
    let document = Html::parse_document(html);

    let text = document
        .select(&marker)
        .flat_map(|element| element.select(&nested))
        .map(|element| element.text().collect::<String>())
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .ok_or(LookupError::AgeNotFound)?;

    parse_leading_age(&text)
}

/// Parse the leading base-10 digits of `text`.
pub fn parse_leading_age(text: &str) -> Result<u32, LookupError> {
    let trimmed = text.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end]
        .parse::<u32>()
        .map_err(|_| LookupError::InvalidAge(trimmed.to_string()))
}
