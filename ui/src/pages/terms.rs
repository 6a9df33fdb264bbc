use markdown_html::markdown_sections;
use yew::prelude::*;

use crate::components::LegalDocument;
use crate::components::markdown_content::Section;
use crate::hooks::use_title;

const TERMS: &[Section] = markdown_sections!(file: "content/terms.md");

#[function_component]
pub fn TermsPage() -> Html {
    use_title("Terms and Conditions");

    html! {
        <LegalDocument
            title="Terms and Conditions"
            updated="January 1, 2024"
            sections={TERMS}
        />
    }
}
