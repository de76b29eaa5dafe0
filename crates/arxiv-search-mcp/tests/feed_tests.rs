//! Atom feed normalization against catalog-shaped fixtures.

mod common;

use arxiv_search_mcp::error::ParseError;
use arxiv_search_mcp::feed::{DEFAULT_ABSTRACT, DEFAULT_TITLE, normalize};

use common::{attention_entry, empty_feed, entry, feed};

#[test]
fn test_full_entry_normalized() {
    let body = feed(1, &[attention_entry()]);
    let response = normalize(&body).unwrap();

    assert_eq!(response.total_results, 1);
    assert_eq!(response.start_index, 0);
    assert_eq!(response.items_per_page, 1);
    assert_eq!(response.papers.len(), 1);

    let paper = &response.papers[0];
    assert_eq!(paper.id, "1706.03762");
    assert_eq!(paper.title, "Attention Is All You Need");
    assert!(paper.r#abstract.starts_with("The dominant sequence transduction models"));
    assert!(!paper.r#abstract.contains('\n'));
    assert_eq!(paper.authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
    assert_eq!(paper.categories, vec!["cs.CL", "cs.LG"]);
    assert_eq!(paper.primary_category.as_deref(), Some("cs.CL"));
    assert_eq!(paper.published_date, "2023-01-17T18:59:01Z");
    assert_eq!(paper.updated_date, "2023-02-01T10:00:00Z");
    assert_eq!(paper.pdf_url, "http://arxiv.org/pdf/1706.03762v1");
    assert_eq!(paper.arxiv_url, "http://arxiv.org/abs/1706.03762v1");
}

#[test]
fn test_versioned_identifier_stripped() {
    let body = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><id>http://arxiv.org/abs/2301.07041v2</id></entry>
</feed>"#;
    assert_eq!(normalize(body).unwrap().papers[0].id, "2301.07041");
}

#[test]
fn test_missing_title_and_abstract_defaults() {
    let body = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/2105.00001v1</id>
    <published>2021-05-01T00:00:00Z</published>
    <summary>   </summary>
  </entry>
</feed>"#;
    let paper = &normalize(body).unwrap().papers[0];

    assert_eq!(paper.title, DEFAULT_TITLE);
    assert_eq!(paper.r#abstract, DEFAULT_ABSTRACT);
    assert_eq!(paper.updated_date, "2021-05-01T00:00:00Z");
    assert!(paper.authors.is_empty());
    assert!(paper.categories.is_empty());
    assert_eq!(paper.pdf_url, "http://arxiv.org/pdf/2105.00001.pdf");
    assert_eq!(paper.arxiv_url, "http://arxiv.org/abs/2105.00001");
}

#[test]
fn test_missing_identifier_yields_empty_id() {
    let body = r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry><title>Orphan</title></entry></feed>"#;
    let paper = &normalize(body).unwrap().papers[0];
    assert_eq!(paper.id, "");
    assert_eq!(paper.title, "Orphan");
}

#[test]
fn test_empty_authors_and_categories_dropped() {
    let body = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/1111.1111v1</id>
    <author><name>  </name></author>
    <author><name>Ada
       Lovelace</name></author>
    <category term=""/>
    <category term="math.CO"/>
  </entry>
</feed>"#;
    let paper = &normalize(body).unwrap().papers[0];
    assert_eq!(paper.authors, vec!["Ada Lovelace"]);
    assert_eq!(paper.categories, vec!["math.CO"]);
}

#[test]
fn test_arxiv_extension_fields() {
    let body = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <entry>
    <id>http://arxiv.org/abs/hep-th/9901001v1</id>
    <arxiv:doi>10.1000/xyz123</arxiv:doi>
    <arxiv:journal_ref>Phys. Rev. D 60 (1999)</arxiv:journal_ref>
    <arxiv:comment>12 pages,
      3 figures</arxiv:comment>
  </entry>
</feed>"#;
    let paper = &normalize(body).unwrap().papers[0];
    assert_eq!(paper.id, "hep-th/9901001");
    assert_eq!(paper.doi.as_deref(), Some("10.1000/xyz123"));
    assert_eq!(paper.journal_ref.as_deref(), Some("Phys. Rev. D 60 (1999)"));
    assert_eq!(paper.comment.as_deref(), Some("12 pages, 3 figures"));
}

#[test]
fn test_escaped_text_unescaped() {
    let body = feed(1, &[entry("1234.5678", "Q&amp;A &lt;systems&gt;", "S", &[], &[])]);
    assert_eq!(normalize(&body).unwrap().papers[0].title, "Q&A <systems>");
}

#[test]
fn test_empty_feed() {
    let response = normalize(&empty_feed()).unwrap();
    assert!(response.is_empty());
    assert_eq!(response.total_results, 0);
}

#[test]
fn test_non_numeric_metadata_defaults_to_zero() {
    let body = r#"<feed xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <opensearch:totalResults>many</opensearch:totalResults>
  <opensearch:itemsPerPage>25</opensearch:itemsPerPage>
</feed>"#;
    let response = normalize(body).unwrap();
    assert_eq!(response.total_results, 0);
    assert_eq!(response.items_per_page, 25);
}

#[test]
fn test_multiple_entries_keep_order() {
    let body = feed(
        120,
        &[
            entry("2001.00001", "First", "A", &["X"], &["cs.AI"]),
            entry("2001.00002", "Second", "B", &["Y"], &["cs.AI"]),
            entry("2001.00003", "Third", "C", &["Z"], &["cs.AI"]),
        ],
    );
    let response = normalize(&body).unwrap();
    let titles: Vec<&str> = response.papers.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
    assert_eq!(response.total_results, 120);
}

#[test]
fn test_not_a_feed() {
    assert!(matches!(normalize("<error>Rate exceeded</error>"), Err(ParseError::MissingFeed)));
    assert!(matches!(normalize("<html><body>503</body></html>"), Err(ParseError::MissingFeed)));
}

#[test]
fn test_malformed_feed() {
    assert!(normalize("<feed><entry><title>unterminated</entry></feed>").is_err());
    assert!(normalize("<feed><entry>").is_err());
}
