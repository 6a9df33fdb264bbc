use markdown_html::markdown_sections;
use yew::prelude::*;

use crate::components::LegalDocument;
use crate::components::markdown_content::Section;
use crate::hooks::use_title;

const PRIVACY: &[Section] = markdown_sections!(file: "content/privacy.md");

#[function_component]
pub fn PrivacyPage() -> Html {
    use_title("Privacy Policy");

    html! {
        <LegalDocument
            title="Privacy Policy"
            updated="January 1, 2024"
            sections={PRIVACY}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_an_anchor() {
        for (heading, anchor, body) in PRIVACY {
            if !heading.is_empty() {
                assert!(!anchor.is_empty(), "{heading}");
            }
            assert!(!body.trim().is_empty(), "{heading}");
        }
    }
}
