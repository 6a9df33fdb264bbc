use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::layout::DashboardLayout;
use crate::hooks::{use_initial_loading, use_title};
use crate::panels;

/// How long cards show their skeletons after the dashboard opens.
const INITIAL_LOADING_MS: u32 = 800;

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard");
    let (state, _) = use_store::<State>();
    let loading = use_initial_loading(INITIAL_LOADING_MS);
    let panel = state.session.panel();

    html! {
        <DashboardLayout>
            {panels::render(panel, loading)}
        </DashboardLayout>
    }
}
