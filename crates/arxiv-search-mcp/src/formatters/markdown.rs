//! Markdown output formatting.

use std::borrow::Cow;

use crate::config::api;
use crate::models::{Paper, SearchResponse};

/// Format a page of search results, or the no-results guidance.
#[must_use]
pub fn format_search_results(query: &str, response: &SearchResponse) -> String {
    if response.is_empty() {
        return format_no_results(query);
    }

    let summary = format!(
        "Found {} papers (out of {} total results) for query: \"{}\"",
        response.papers.len(),
        response.total_results,
        query
    );

    let entries: Vec<String> = response
        .papers
        .iter()
        .enumerate()
        .map(|(i, paper)| format_paper_summary(paper, i + 1))
        .collect();

    format!("{summary}\n\n{}", entries.join("\n\n"))
}

/// Format one paper as a numbered list entry with a truncated abstract.
#[must_use]
pub fn format_paper_summary(paper: &Paper, index: usize) -> String {
    format!(
        "{index}. **{title}**\n\
         \x20  - **Authors:** {authors}\n\
         \x20  - **arXiv ID:** {id}\n\
         \x20  - **Published:** {published}\n\
         \x20  - **Categories:** {categories}\n\
         \x20  - **Abstract:** {abstract_text}\n\
         \x20  - **PDF:** {pdf}\n\
         \x20  - **arXiv URL:** {url}",
        title = paper.title,
        authors = paper.author_names(),
        id = paper.id,
        published = paper.published_day(),
        categories = paper.category_list(),
        abstract_text = truncate_abstract(&paper.r#abstract, api::ABSTRACT_PREVIEW_CHARS),
        pdf = paper.pdf_url,
        url = paper.arxiv_url,
    )
}

/// Format one paper in full: untruncated abstract, both dates, links.
#[must_use]
pub fn format_paper_details(paper: &Paper) -> String {
    let mut output = format!("**{}**\n\n", paper.title);

    output.push_str(&format!("**Authors:** {}\n\n", paper.author_names()));
    output.push_str(&format!("**arXiv ID:** {}\n\n", paper.id));
    output.push_str(&format!("**Published:** {}\n", paper.published_day()));
    output.push_str(&format!("**Last Updated:** {}\n\n", paper.updated_day()));

    output.push_str(&format!("**Categories:** {}\n\n", paper.category_list()));
    if let Some(primary) = &paper.primary_category {
        output.push_str(&format!("**Primary Category:** {primary}\n\n"));
    }

    if let Some(journal) = &paper.journal_ref {
        output.push_str(&format!("**Journal Reference:** {journal}\n\n"));
    }
    if let Some(comment) = &paper.comment {
        output.push_str(&format!("**Comment:** {comment}\n\n"));
    }

    output.push_str(&format!("**Abstract:**\n{}\n\n", paper.r#abstract));

    output.push_str("**Links:**\n");
    output.push_str(&format!("- **PDF:** {}\n", paper.pdf_url));
    output.push_str(&format!("- **arXiv Page:** {}", paper.arxiv_url));
    if let Some(doi) = &paper.doi {
        output.push_str(&format!("\n- **DOI:** https://doi.org/{doi}"));
    }

    output
}

/// Guidance shown when a search matches nothing.
#[must_use]
pub fn format_no_results(query: &str) -> String {
    format!(
        "No papers found for query: \"{query}\"\n\n\
         Try:\n\
         - Using different keywords\n\
         - Broadening your search terms\n\
         - Checking spelling\n\
         - Using author names or arXiv categories"
    )
}

/// Message shown when an ID lookup finds nothing.
#[must_use]
pub fn format_not_found(arxiv_id: &str) -> String {
    format!("Paper with arXiv ID \"{arxiv_id}\" not found. Please check the ID and try again.")
}

/// Cut `text` to `max_chars` characters, appending "..." if anything was cut.
#[must_use]
pub fn truncate_abstract(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
