//! Natural-language query interpretation.
//!
//! [`parse_query`] pulls authors, subject categories, a date constraint and a
//! result count out of free text with plain pattern matching; whatever is
//! left becomes keyword terms. [`build_arxiv_query`] turns the result into
//! arXiv query syntax.
//!
//! ```
//! use arxiv_search_mcp::query::{build_arxiv_query, parse_query};
//!
//! let intent = parse_query("transformer papers by vaswani");
//! assert_eq!(intent.authors, vec!["vaswani"]);
//! assert_eq!(build_arxiv_query(&intent), r#"all:transformer AND (au:"vaswani")"#);
//! ```

mod vocabulary;

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use chrono::{Local, Months, NaiveDate};
use regex::Regex;

pub use vocabulary::{CATEGORY_KEYWORDS, STOP_WORDS};

use crate::models::{DateRange, SearchIntent};

/// Query expression matching every paper.
pub const MATCH_ALL: &str = "all:*";

const NAME: &str = r"([a-z][a-z\s,'\-]*?)";
const NAME_END: &str = r"(?:\s+(?:on|in|about|paper|papers|research|since|after|before|for|with|during|published|using|from|year|top|first|show|find|get|recent(?:ly)?|latest|newest|new|current|past)\b|\s*[\d.;:!?()]|$)";

static AUTHOR_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(&format!(r"\b(?:by|from|author:?)\s+{NAME}{NAME_END}")).expect("valid regex"),
        Regex::new(&format!(r"\bpapers?\s+by\s+{NAME}{NAME_END}")).expect("valid regex"),
    ]
});

static AUTHOR_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|\s+and\s+").expect("valid regex"));

static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\b(?:from|since|after|in|year)|から|以降|年)\s*(\d{4})|(\d{4})\s*年")
        .expect("valid regex")
});

static RECENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:recent(?:ly)?|latest|newest|new|current|past\s+(?:year|month|week))\b|最新|最近|新しい|現在|今年|去年",
    )
    .expect("valid regex")
});

static LIMIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:top|first|show|find|get)\s+(\d+)").expect("valid regex"));

/// Interpret a natural-language query relative to today's date.
///
/// Never fails: text without recognizable signals yields an intent with
/// only keyword terms (possibly none).
#[must_use]
pub fn parse_query(text: &str) -> SearchIntent {
    parse_query_at(text, Local::now().date_naive())
}

/// Interpret a natural-language query; recency words resolve against `today`.
#[must_use]
pub fn parse_query_at(text: &str, today: NaiveDate) -> SearchIntent {
    let query = text.to_lowercase();
    let mut consumed: Vec<Range<usize>> = Vec::new();

    let authors = extract_authors(&query, &mut consumed);
    let categories = extract_categories(&query, &mut consumed);
    let date_range = extract_date_range(&query, today, &mut consumed);
    let max_results = extract_limit(&query, &mut consumed);
    let search_terms = residual_terms(&query, &consumed);

    SearchIntent { search_terms, authors, categories, date_range, max_results }
}

fn extract_authors(query: &str, consumed: &mut Vec<Range<usize>>) -> Vec<String> {
    let mut authors = Vec::new();
    let mut seen_spans: HashSet<(usize, usize)> = HashSet::new();

    for pattern in AUTHOR_PATTERNS.iter() {
        for caps in pattern.captures_iter(query) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            consumed.push(whole.start()..name.end());

            // "papers by X" re-matches the span already taken by "by X".
            if !seen_spans.insert((name.start(), name.end())) {
                continue;
            }

            authors.extend(
                AUTHOR_SEPARATOR
                    .split(name.as_str())
                    .map(|author| author.trim_matches(|c: char| c.is_whitespace() || c == ','))
                    .filter(|author| !author.is_empty())
                    .map(str::to_string),
            );
        }
    }

    authors
}

fn extract_categories(query: &str, consumed: &mut Vec<Range<usize>>) -> Vec<String> {
    let mut categories = Vec::new();

    for (keyword, code) in CATEGORY_KEYWORDS {
        if query.contains(keyword) {
            categories.push((*code).to_string());
        }
        consumed.extend(keyword_spans(query, keyword));
    }

    categories
}

/// Occurrences of `keyword`; ASCII keywords must stand as whole words.
fn keyword_spans(query: &str, keyword: &str) -> Vec<Range<usize>> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';

    query
        .match_indices(keyword)
        .map(|(start, matched)| start..start + matched.len())
        .filter(|span| {
            if !keyword.is_ascii() {
                return true;
            }
            let before = query[..span.start].chars().next_back();
            let after = query[span.end..].chars().next();
            !before.is_some_and(is_word) && !after.is_some_and(is_word)
        })
        .collect()
}

fn extract_date_range(
    query: &str,
    today: NaiveDate,
    consumed: &mut Vec<Range<usize>>,
) -> Option<DateRange> {
    let mut start = None;

    for caps in YEAR_PATTERN.captures_iter(query) {
        if let Some(whole) = caps.get(0) {
            consumed.push(whole.range());
        }
        if start.is_none() {
            start = caps.get(1).or_else(|| caps.get(2)).map(|y| format!("{}-01-01", y.as_str()));
        }
    }

    let recent: Vec<Range<usize>> = RECENT_PATTERN.find_iter(query).map(|m| m.range()).collect();
    if !recent.is_empty() {
        let year_ago = today.checked_sub_months(Months::new(12)).unwrap_or(today);
        start = Some(year_ago.format("%Y-%m-%d").to_string());
        consumed.extend(recent);
    }

    start.map(|start| DateRange { start: Some(start) })
}

fn extract_limit(query: &str, consumed: &mut Vec<Range<usize>>) -> Option<u32> {
    let mut limit = None;

    for caps in LIMIT_PATTERN.captures_iter(query) {
        if let Some(whole) = caps.get(0) {
            consumed.push(whole.range());
        }
        if limit.is_none() {
            limit = caps.get(1).and_then(|n| n.as_str().parse().ok());
        }
    }

    limit
}

fn residual_terms(query: &str, consumed: &[Range<usize>]) -> Vec<String> {
    let mut remainder: String = query
        .char_indices()
        .map(|(i, c)| if consumed.iter().any(|span| span.contains(&i)) { ' ' } else { c })
        .collect();

    for word in vocabulary::UNSPACED_STOP_WORDS.iter() {
        if remainder.contains(word) {
            remainder = remainder.replace(word, " ");
        }
    }

    let mut seen = HashSet::new();
    remainder
        .split_whitespace()
        .map(|token| token.chars().filter(|c| c.is_alphanumeric() || *c == '_').collect::<String>())
        .filter(|term| term.chars().count() > 2 && !STOP_WORDS.contains(term.as_str()))
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Translate an intent into arXiv query syntax.
///
/// Terms are conjunctive inside one `all:` clause, authors and categories
/// are each a disjunction, and the clauses are joined with `AND`. An intent
/// with nothing to search for yields [`MATCH_ALL`].
#[must_use]
pub fn build_arxiv_query(intent: &SearchIntent) -> String {
    if intent.is_unconstrained() {
        return MATCH_ALL.to_string();
    }

    let mut clauses = Vec::new();

    if !intent.search_terms.is_empty() {
        clauses.push(format!("all:{}", intent.search_terms.join(" AND ")));
    }

    if !intent.authors.is_empty() {
        let authors: Vec<String> =
            intent.authors.iter().map(|author| format!("au:\"{author}\"")).collect();
        clauses.push(format!("({})", authors.join(" OR ")));
    }

    if !intent.categories.is_empty() {
        let categories: Vec<String> =
            intent.categories.iter().map(|category| format!("cat:{category}")).collect();
        clauses.push(format!("({})", categories.join(" OR ")));
    }

    let expression = clauses.join(" AND ");
    if expression.is_empty() { intent.search_terms.join(" ") } else { expression }
}
