use markdown_html::{markdown_html, markdown_sections};

#[test]
fn test_heading() {
    let html = markdown_html!("## Hello");
    assert!(html.contains("<h2>"));
    assert!(html.contains("Hello"));
    assert!(html.contains("</h2>"));
}

#[test]
fn test_emphasis() {
    let html = markdown_html!("Sort **glass** from *paper*.");
    assert!(html.contains("<strong>glass</strong>"));
    assert!(html.contains("<em>paper</em>"));
}

#[test]
fn test_link() {
    let html = markdown_html!("[Contact us](/contact)");
    assert!(html.contains(r#"<a href="/contact">Contact us</a>"#));
}

#[test]
fn test_list() {
    let html = markdown_html!("- Visa\n- MTN Mobile Money");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>Visa</li>"));
    assert!(html.contains("<li>MTN Mobile Money</li>"));
}

#[test]
fn test_sections_split_at_level_two() {
    let sections = markdown_sections!(
        r#"
## 1. Agreement to Terms

These terms bind you.

## 2. Governing Law

### Jurisdiction

Rwanda.
"#
    );
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].0, "1. Agreement to Terms");
    assert_eq!(sections[0].1, "1-agreement-to-terms");
    assert!(sections[0].2.contains("<p>These terms bind you.</p>"));
    assert_eq!(sections[1].1, "2-governing-law");
    assert!(sections[1].2.contains("<h3>Jurisdiction</h3>"));
}

#[test]
fn test_sections_from_file_keep_preamble() {
    let sections = markdown_sections!(file: "tests/fixtures/policy.md");
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].0, "");
    assert!(sections[0].2.contains("Last updated"));
    assert_eq!(sections[1].1, "1-collection-zones");
    assert!(sections[2].2.contains("<table>"));
}
