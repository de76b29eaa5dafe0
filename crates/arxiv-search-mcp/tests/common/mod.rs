//! Shared Atom feed fixtures and mock-server setup.

#![allow(dead_code)]

use std::sync::Arc;

use wiremock::MockServer;

use arxiv_search_mcp::client::ArxivClient;
use arxiv_search_mcp::config::Config;
use arxiv_search_mcp::tools::ToolContext;

pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml; charset=utf-8";

pub fn test_client(mock_server: &MockServer) -> ArxivClient {
    ArxivClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

pub fn setup_test_context(mock_server: &MockServer) -> ToolContext {
    ToolContext::new(Arc::new(test_client(mock_server)))
}

/// One `<entry>` in the shape the catalog returns.
pub fn entry(id: &str, title: &str, summary: &str, authors: &[&str], categories: &[&str]) -> String {
    let authors: String =
        authors.iter().map(|a| format!("<author><name>{a}</name></author>")).collect();
    let category_elements: String = categories
        .iter()
        .map(|c| format!(r#"<category term="{c}" scheme="http://arxiv.org/schemas/atom"/>"#))
        .collect();
    let primary = categories.first().map_or_else(String::new, |term| {
        format!(r#"<arxiv:primary_category term="{term}" scheme="http://arxiv.org/schemas/atom"/>"#)
    });

    format!(
        r#"<entry>
    <id>http://arxiv.org/abs/{id}v1</id>
    <updated>2023-02-01T10:00:00Z</updated>
    <published>2023-01-17T18:59:01Z</published>
    <title>{title}</title>
    <summary>{summary}</summary>
    {authors}
    <link href="http://arxiv.org/abs/{id}v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/{id}v1" rel="related" type="application/pdf"/>
    {primary}
    {category_elements}
  </entry>"#
    )
}

/// A full feed wrapping `entries`.
pub fn feed(total: u64, entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/"
      xmlns:arxiv="http://arxiv.org/schemas/atom">
  <link href="http://arxiv.org/api/query" rel="self" type="application/atom+xml"/>
  <title type="html">ArXiv Query</title>
  <id>http://arxiv.org/api/cHxbiOdZaP56ODnBPIenZhzg5f8</id>
  <updated>2023-03-01T00:00:00-05:00</updated>
  <opensearch:totalResults>{total}</opensearch:totalResults>
  <opensearch:startIndex>0</opensearch:startIndex>
  <opensearch:itemsPerPage>{count}</opensearch:itemsPerPage>
  {body}
</feed>"#,
        count = entries.len(),
        body = entries.join("\n  "),
    )
}

pub fn empty_feed() -> String {
    feed(0, &[])
}

pub fn attention_entry() -> String {
    entry(
        "1706.03762",
        "Attention Is All\n      You Need",
        "The dominant sequence transduction models are based on complex recurrent or\n      convolutional neural networks.",
        &["Ashish Vaswani", "Noam Shazeer"],
        &["cs.CL", "cs.LG"],
    )
}
