//! Match record extraction from player profile pages
//!
//! This module handles parsing a fetched profile page to produce:
//! - The player's display name (several selector fallbacks)
//! - One [`MatchRecord`] per row of the "All Matches" table
//!
//! Structural problems (no table, no body, no rows) abort the document
//! with a hard [`ExtractError`]. Anything wrong with an individual row is
//! soft: the row is skipped with a typed reason, logged, and extraction
//! continues — one mangled row must not cost the rest of the page.

use crate::scrape::{dates, tokens, MatchRecord};
use crate::ExtractError;
use scraper::{ElementRef, Html, Selector};

/// Result of a successful extraction pass over one document.
#[derive(Debug, Clone)]
pub struct ExtractedStats {
    pub player_name: String,
    /// Records in document row order (no re-sort).
    pub records: Vec<MatchRecord>,
}

/// Why an individual table row produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowSkip {
    /// Fewer than five cells; section dividers and spacer rows look like this.
    TooFewCells,
    /// First cell carries no link element, so this is not a match row.
    NoMatchLink,
    /// A required cell was present but missing its text container.
    MalformedCell(&'static str),
}

/// Extracts the player name and all match records from page markup.
///
/// Re-running on identical markup yields identical output; there is no
/// hidden time- or order-dependence.
pub fn extract_match_stats(html: &str) -> Result<ExtractedStats, ExtractError> {
    let document = Html::parse_document(html);

    let player_name = extract_player_name(&document);
    let table = find_matches_table(&document).ok_or(ExtractError::TableNotFound)?;

    let tbody_selector = selector("tbody");
    let tbody = table
        .select(&tbody_selector)
        .next()
        .ok_or(ExtractError::MissingBody)?;

    let row_selector = selector("tr");
    let rows: Vec<ElementRef> = tbody.select(&row_selector).collect();
    if rows.is_empty() {
        return Err(ExtractError::NoRows);
    }

    let mut records = Vec::new();
    for row in rows {
        match extract_row(&row, &player_name) {
            Ok(record) => records.push(record),
            Err(skip) => {
                tracing::debug!("Skipping row: {:?}", skip);
            }
        }
    }

    Ok(ExtractedStats {
        player_name,
        records,
    })
}

/// Resolves the player's display name from the page.
///
/// Tries a small ordered list of selectors; the page `<title>` gets extra
/// cleanup (text before `|`, trailing "stats..." suffix removed). Falls
/// back to deriving a name from the canonical URL meta tag, and finally
/// to `"Unknown Player"`.
pub fn extract_player_name(document: &Html) -> String {
    const NAME_SELECTORS: [&str; 4] = [
        "h1.player-profile-name",
        ".player-name",
        "h1.font-bold",
        "title",
    ];

    for raw in NAME_SELECTORS {
        let sel = selector(raw);
        if let Some(element) = document.select(&sel).next() {
            let mut name = element_text(&element);
            if name.is_empty() {
                continue;
            }
            if raw == "title" {
                name = clean_title_name(&name);
            }
            return name;
        }
    }

    if let Some(name) = name_from_canonical_url(document) {
        return name;
    }

    "Unknown Player".to_string()
}

/// Turns a page title like `"Virat Kohli Stats & Records | cricket.com"`
/// into a bare player name.
fn clean_title_name(title: &str) -> String {
    let mut name = title.split('|').next().unwrap_or(title).trim().to_string();

    // Drop a trailing "stats..." suffix, case-insensitively. The offset is
    // found against the original string: lowercasing can change byte
    // lengths (e.g. 'İ'), so its indices are unsafe to truncate with.
    if let Some(idx) = find_ascii_case_insensitive(&name, "stats") {
        name.truncate(idx);
        name = name.trim_end().to_string();
    }

    name
}

/// Byte offset of the first case-insensitive occurrence of an ASCII
/// needle, always on a char boundary of the haystack.
fn find_ascii_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack.char_indices().map(|(i, _)| i).find(|&i| {
        haystack.as_bytes()[i..]
            .get(..needle.len())
            .is_some_and(|window| window.eq_ignore_ascii_case(needle))
    })
}

/// Derives a name from the `og:url` meta tag's `/players/<slug>` segment.
///
/// Hyphen-split, keep purely alphabetic words, title-case each. Numeric
/// id suffixes in the slug fall away naturally.
fn name_from_canonical_url(document: &Html) -> Option<String> {
    let sel = selector(r#"meta[property="og:url"]"#);
    let content = document.select(&sel).next()?.value().attr("content")?;

    let rest = content.split("/players/").nth(1)?;
    let slug = rest.split('/').next()?;

    let words: Vec<String> = slug
        .split('-')
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_alphabetic()))
        .map(capitalize)
        .collect();

    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Locates the match statistics table.
///
/// Tried in order until one yields a table:
/// 1. the source's marker class (`table.w-full`)
/// 2. the container around an "All Matches" heading
/// 3. any table whose headers mention both "opposition" and "batting"
fn find_matches_table<'a>(document: &'a Html) -> Option<ElementRef<'a>> {
    let table_selector = selector("table.w-full");
    if let Some(table) = document.select(&table_selector).next() {
        return Some(table);
    }

    let inner_table = selector("table");

    // Heading-anchored search: ascend from the "All Matches" paragraph to
    // the first ancestor that contains a table
    let p_selector = selector("p");
    for paragraph in document.select(&p_selector) {
        if !element_text(&paragraph).contains("All Matches") {
            continue;
        }
        for ancestor in paragraph.ancestors() {
            if let Some(container) = ElementRef::wrap(ancestor) {
                if let Some(table) = container.select(&inner_table).next() {
                    return Some(table);
                }
            }
        }
    }

    // Generic scan: first table with the expected header columns
    let th_selector = selector("th");
    for table in document.select(&inner_table) {
        let headers: Vec<String> = table
            .select(&th_selector)
            .map(|th| element_text(&th).to_lowercase())
            .collect();

        let has_opposition = headers.iter().any(|h| h.contains("opposition"));
        let has_batting = headers.iter().any(|h| h.contains("batting"));
        if has_opposition && has_batting {
            return Some(table);
        }
    }

    None
}

/// Extracts one match record from a table row.
///
/// Column mapping is strictly positional: opponent link, batting token,
/// bowling token, format label, date text.
fn extract_row(row: &ElementRef, player_name: &str) -> Result<MatchRecord, RowSkip> {
    let td_selector = selector("td");
    let cells: Vec<ElementRef> = row.select(&td_selector).collect();
    if cells.len() < 5 {
        return Err(RowSkip::TooFewCells);
    }

    let link_selector = selector("a");
    let link = cells[0]
        .select(&link_selector)
        .next()
        .ok_or(RowSkip::NoMatchLink)?;
    let opponent = element_text(&link);

    let batting_token = cell_token(&cells[1]).ok_or(RowSkip::MalformedCell("batting"))?;
    let bowling_token = cell_token(&cells[2]).ok_or(RowSkip::MalformedCell("bowling"))?;
    let format = cell_token(&cells[3]).ok_or(RowSkip::MalformedCell("format"))?;
    let date_text = cell_token(&cells[4]).ok_or(RowSkip::MalformedCell("date"))?;

    Ok(MatchRecord {
        player_name: player_name.to_string(),
        opponent,
        format,
        date: dates::normalize(&date_text),
        batting: tokens::parse_batting(&batting_token),
        bowling: tokens::parse_bowling(&bowling_token),
    })
}

/// Reads a cell's token text: the nested `div.flex p` variant first, then
/// a direct `p` child.
fn cell_token(cell: &ElementRef) -> Option<String> {
    let nested = selector("div.flex p");
    if let Some(element) = cell.select(&nested).next() {
        return Some(element_text(&element));
    }

    let direct = selector("p");
    cell.select(&direct).next().map(|e| element_text(&e))
}

/// Collects and trims an element's text content.
fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parses a selector that is known valid at compile time.
fn selector(raw: &str) -> Selector {
    Selector::parse(raw).expect("static selector")
}
