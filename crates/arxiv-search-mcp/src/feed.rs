//! Atom feed normalization.
//!
//! The catalog answers with an Atom document carrying OpenSearch paging
//! metadata and arXiv extension elements. [`normalize`] walks it with a
//! streaming reader and flattens every `<entry>` into a [`Paper`]. Missing
//! entry data falls back to fixed defaults; only a document that is not a
//! well-formed `<feed>` is an error.

use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;

use crate::config::api;
use crate::error::ParseError;
use crate::models::{Paper, SearchResponse};

/// Title used when an entry has none.
pub const DEFAULT_TITLE: &str = "No title";

/// Abstract used when an entry has none.
pub const DEFAULT_ABSTRACT: &str = "No abstract available";

static ABS_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"abs/(.+?)(?:v\d+)?$").expect("valid regex"));

static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d+$").expect("valid regex"));

/// Parse a catalog response body into a [`SearchResponse`].
pub fn normalize(body: &str) -> Result<SearchResponse, ParseError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().check_end_names = true;

    let mut response = SearchResponse::default();
    let mut stack: Vec<String> = Vec::new();
    let mut text = String::new();
    let mut entry: Option<EntryAccum> = None;
    let mut saw_feed = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let name = local_name(e);
                if stack.is_empty() {
                    if name != "feed" {
                        return Err(ParseError::MissingFeed);
                    }
                    saw_feed = true;
                }

                match stack.len() {
                    1 if name == "entry" => entry = Some(EntryAccum::default()),
                    2 => {
                        if let Some(acc) = entry.as_mut() {
                            acc.attribute_element(&name, e)?;
                        }
                    }
                    _ => {}
                }

                stack.push(name);
                text.clear();
            }
            Event::Empty(ref e) => {
                let name = local_name(e);
                if stack.is_empty() {
                    if name != "feed" {
                        return Err(ParseError::MissingFeed);
                    }
                    saw_feed = true;
                    continue;
                }

                match stack.len() {
                    1 if name == "entry" => response.papers.push(EntryAccum::default().into_paper()),
                    2 => {
                        if let Some(acc) = entry.as_mut() {
                            acc.attribute_element(&name, e)?;
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref t) => {
                if !stack.is_empty() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::CData(ref c) => {
                if !stack.is_empty() {
                    text.push_str(&String::from_utf8_lossy(c));
                }
            }
            Event::End(_) => {
                let Some(name) = stack.pop() else {
                    continue;
                };
                let value = std::mem::take(&mut text);

                match stack.len() {
                    1 if name == "entry" => {
                        if let Some(acc) = entry.take() {
                            response.papers.push(acc.into_paper());
                        }
                    }
                    1 => match name.as_str() {
                        "totalResults" => response.total_results = parse_count(&value),
                        "startIndex" => response.start_index = parse_count(&value),
                        "itemsPerPage" => response.items_per_page = parse_count(&value),
                        _ => {}
                    },
                    2 => {
                        if let Some(acc) = entry.as_mut() {
                            acc.leaf(&name, value);
                        }
                    }
                    3 if name == "name" && stack.last().is_some_and(|p| p == "author") => {
                        if let Some(acc) = entry.as_mut() {
                            acc.pending_author = Some(value);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_feed {
        return Err(ParseError::MissingFeed);
    }
    if let Some(open) = stack.pop() {
        return Err(ParseError::Truncated(open));
    }

    Ok(response)
}

/// Reduce an entry identifier URI to the bare arXiv ID.
///
/// `http://arxiv.org/abs/2301.07041v2` becomes `2301.07041`;
/// old-style IDs keep their archive prefix (`hep-th/9901001`).
#[must_use]
pub fn extract_arxiv_id(uri: &str) -> String {
    let uri = uri.trim();
    if let Some(id) = ABS_ID.captures(uri).and_then(|caps| caps.get(1)) {
        return id.as_str().to_string();
    }

    let tail = uri.rsplit('/').next().unwrap_or(uri);
    let id = VERSION_SUFFIX.replace(tail, "");
    if id.is_empty() { uri.to_string() } else { id.into_owned() }
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn parse_count(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}

/// Per-entry accumulator.
#[derive(Debug, Default)]
struct EntryAccum {
    id: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    published: Option<String>,
    updated: Option<String>,
    authors: Vec<String>,
    pending_author: Option<String>,
    categories: Vec<String>,
    primary_category: Option<String>,
    pdf_url: Option<String>,
    html_url: Option<String>,
    doi: Option<String>,
    journal_ref: Option<String>,
    comment: Option<String>,
}

impl EntryAccum {
    /// Direct child of `<entry>` whose payload is in attributes.
    fn attribute_element(&mut self, name: &str, e: &BytesStart<'_>) -> Result<(), ParseError> {
        match name {
            "category" => {
                if let Some(term) = attribute(e, "term")?.filter(|t| !t.trim().is_empty()) {
                    self.categories.push(term.trim().to_string());
                }
            }
            "primary_category" => {
                self.primary_category = attribute(e, "term")?.filter(|t| !t.trim().is_empty());
            }
            "link" => {
                let Some(href) = attribute(e, "href")?.filter(|h| !h.is_empty()) else {
                    return Ok(());
                };
                let kind = attribute(e, "type")?;
                let title = attribute(e, "title")?;

                if kind.as_deref() == Some("application/pdf") || title.as_deref() == Some("pdf") {
                    self.pdf_url.get_or_insert(href);
                } else if kind.as_deref() == Some("text/html") {
                    self.html_url.get_or_insert(href);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Direct child of `<entry>` whose payload is text.
    fn leaf(&mut self, name: &str, value: String) {
        let slot = match name {
            "id" => &mut self.id,
            "title" => &mut self.title,
            "summary" => &mut self.summary,
            "published" => &mut self.published,
            "updated" => &mut self.updated,
            "doi" => &mut self.doi,
            "journal_ref" => &mut self.journal_ref,
            "comment" => &mut self.comment,
            "author" => {
                if let Some(author) = self.pending_author.take() {
                    let author = collapse_whitespace(&author);
                    if !author.is_empty() {
                        self.authors.push(author);
                    }
                }
                return;
            }
            _ => return,
        };

        if slot.is_none() {
            *slot = Some(value);
        }
    }

    fn into_paper(self) -> Paper {
        let id = self.id.as_deref().map(extract_arxiv_id).unwrap_or_default();

        let published_date = self.published.map(|p| p.trim().to_string()).unwrap_or_default();
        let updated_date = self
            .updated
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| published_date.clone());

        let pdf_url = self.pdf_url.unwrap_or_else(|| format!("{}/{id}.pdf", api::PDF_BASE_URL));
        let arxiv_url = self.html_url.unwrap_or_else(|| format!("{}/{id}", api::ABS_BASE_URL));

        Paper {
            title: non_empty(self.title.as_deref()).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            authors: self.authors,
            r#abstract: non_empty(self.summary.as_deref())
                .unwrap_or_else(|| DEFAULT_ABSTRACT.to_string()),
            published_date,
            updated_date,
            categories: self.categories,
            pdf_url,
            arxiv_url,
            primary_category: self.primary_category,
            doi: non_empty(self.doi.as_deref()),
            journal_ref: non_empty(self.journal_ref.as_deref()),
            comment: non_empty(self.comment.as_deref()),
            id,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(collapse_whitespace).filter(|v| !v.is_empty())
}

fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == key.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
