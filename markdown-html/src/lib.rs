//! Compile-time markdown to HTML conversion for the site's long-form pages.
//!
//! Two macros share one loader:
//!
//! - `markdown_html!` expands to a single `&'static str` of HTML.
//! - `markdown_sections!` splits the document at its `##` headings and
//!   expands to `&'static [(&'static str, &'static str, &'static str)]`,
//!   one `(heading, anchor, body_html)` entry per section. Text before the
//!   first `##` heading becomes a leading entry with an empty heading and
//!   anchor.
//!
//! ```rust
//! use markdown_html::{markdown_html, markdown_sections};
//!
//! let html = markdown_html!("# Hello\n\nWorld");
//! assert!(html.contains("<h1>"));
//!
//! let sections = markdown_sections!("## Fees\n\nNone.");
//! assert_eq!(sections[0].0, "Fees");
//! assert_eq!(sections[0].1, "fees");
//! ```
//!
//! Either macro accepts `file: "path"` instead of a literal. Paths resolve
//! against the calling crate's manifest directory, then the workspace root:
//!
//! ```rust,ignore
//! let sections = markdown_sections!(file: "content/terms.md");
//! ```

use proc_macro::TokenStream;
use pulldown_cmark::{Options, Parser, html};
use quote::quote;
use std::path::PathBuf;
use syn::parse::{Parse, ParseStream};
use syn::{LitStr, Token, parse_macro_input};

/// Either a string literal or `file: "path"`.
enum MarkdownInput {
    Literal(String),
    File(String),
}

impl Parse for MarkdownInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(syn::Ident) {
            let ident: syn::Ident = input.parse()?;
            if ident != "file" {
                return Err(syn::Error::new(
                    ident.span(),
                    "expected string literal or `file: \"path\"`",
                ));
            }
            input.parse::<Token![:]>()?;
            let path: LitStr = input.parse()?;
            return Ok(MarkdownInput::File(path.value()));
        }

        let lit: LitStr = input.parse()?;
        Ok(MarkdownInput::Literal(lit.value()))
    }
}

impl MarkdownInput {
    fn load(self) -> syn::Result<String> {
        let relative_path = match self {
            MarkdownInput::Literal(s) => return Ok(s),
            MarkdownInput::File(path) => path,
        };

        let error = |message: String| {
            syn::Error::new(proc_macro2::Span::call_site(), message)
        };

        let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
            .map_err(|_| error("CARGO_MANIFEST_DIR not set".into()))?;
        let manifest_path = PathBuf::from(&manifest_dir);
        let direct_path = manifest_path.join(&relative_path);
        let workspace_path = manifest_path.join("..").join(&relative_path);

        let full_path = if direct_path.exists() {
            direct_path
        } else if workspace_path.exists() {
            workspace_path
        } else {
            return Err(error(format!(
                "File not found: {} (tried {} and {})",
                relative_path,
                direct_path.display(),
                workspace_path.display()
            )));
        };

        std::fs::read_to_string(&full_path).map_err(|e| {
            error(format!("Failed to read {}: {}", full_path.display(), e))
        })
    }
}

/// Converts markdown to one HTML string at compile time.
///
/// ```rust
/// use markdown_html::markdown_html;
///
/// let html = markdown_html!("# Hello\n\nWorld");
/// assert!(html.contains("<h1>"));
/// ```
#[proc_macro]
pub fn markdown_html(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as MarkdownInput);
    let markdown = match input.load() {
        Ok(markdown) => markdown,
        Err(e) => return e.to_compile_error().into(),
    };

    let html_output = markdown_to_html(&markdown);
    quote! { #html_output }.into()
}

/// Converts markdown to `(heading, anchor, body_html)` sections at compile
/// time, split at level-two headings.
///
/// ```rust
/// use markdown_html::markdown_sections;
///
/// let sections = markdown_sections!("Intro.\n\n## Governing Law\n\nRwanda.");
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].0, "");
/// assert_eq!(sections[1].1, "governing-law");
/// ```
#[proc_macro]
pub fn markdown_sections(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as MarkdownInput);
    let markdown = match input.load() {
        Ok(markdown) => markdown,
        Err(e) => return e.to_compile_error().into(),
    };

    let entries = split_sections(&markdown).into_iter().map(|section| {
        let heading = section.heading;
        let anchor = slugify(&heading);
        let body = markdown_to_html(&section.body);
        quote! { (#heading, #anchor, #body) }
    });

    quote! {
        {
            const SECTIONS: &[(&str, &str, &str)] = &[#(#entries),*];
            SECTIONS
        }
    }
    .into()
}

fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[derive(Debug, PartialEq)]
struct Section {
    heading: String,
    body: String,
}

/// Splits at `## ` lines outside fenced code. An empty preamble is dropped.
fn split_sections(markdown: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section {
        heading: String::new(),
        body: String::new(),
    };
    let mut in_fence = false;

    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
        }

        if let Some(heading) = trimmed.strip_prefix("## ").filter(|_| !in_fence) {
            let finished = std::mem::replace(
                &mut current,
                Section {
                    heading: heading.trim().trim_end_matches('#').trim().to_string(),
                    body: String::new(),
                },
            );
            if !finished.heading.is_empty() || !finished.body.trim().is_empty() {
                sections.push(finished);
            }
            continue;
        }

        current.body.push_str(line);
        current.body.push('\n');
    }

    if !current.heading.is_empty() || !current.body.trim().is_empty() {
        sections.push(current);
    }
    sections
}

/// Lowercase ASCII anchor: alphanumerics kept, runs of anything else
/// collapse to one hyphen.
fn slugify(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    for c in heading.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_collapse_punctuation() {
        assert_eq!(slugify("1. Agreement to Terms"), "1-agreement-to-terms");
        assert_eq!(slugify("Fees & Payment!"), "fees-payment");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn preamble_is_kept_only_when_it_has_text() {
        let sections = split_sections("\n\n## One\nbody\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "One");

        let sections = split_sections("Last updated: 2024\n## One\nbody\n");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "");
    }

    #[test]
    fn headings_inside_code_fences_do_not_split() {
        let sections = split_sections("## Real\n```\n## not a heading\n```\n");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].body.contains("## not a heading"));
    }

    #[test]
    fn deeper_headings_stay_in_the_body() {
        let sections = split_sections("## Top\n### Sub\ntext\n");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].body.starts_with("### Sub"));
    }
}
