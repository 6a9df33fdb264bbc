use yew::prelude::*;

use super::home::{FeatureCards, SmartManagement};
use crate::components::{Cta, PageHero};
use crate::hooks::use_title;

#[function_component]
pub fn FeaturesPage() -> Html {
    use_title("Features");

    html! {
        <>
            <PageHero
                title="Our Features"
                subtitle="Discover the tools that power Kigali's smartest waste management system."
            />
            <FeatureCards />
            <SmartManagement />
            <Cta />
        </>
    }
}
