use isukuhub_model::map::MapLayers;
use isukuhub_model::{MapCapability, MapKind};
use yew::prelude::*;

use crate::components::map_view::{LiveMapView, MockMapView};
use crate::components::spinner::Spinner;
use crate::hooks::use_map_capability;

#[derive(Properties, PartialEq)]
pub struct MapCardProps {
    pub title: AttrValue,
    pub kind: MapKind,
    #[prop_or_default]
    pub is_loading: bool,
}

/// Dashboard map. Falls back to the preview grid whenever the provider
/// can't be used, and never shows the provider's own error screen.
#[function_component]
pub fn MapCard(props: &MapCardProps) -> Html {
    let capability = use_map_capability();
    let layers = use_memo(props.kind, |kind| MapLayers::for_kind(*kind));

    if props.is_loading {
        return html! {
            <div class="bg-white rounded-2xl border border-slate-100 shadow-sm p-6 h-full">
                <div class="w-40 h-6 bg-slate-100 rounded animate-pulse mb-4"></div>
                <div class="w-full aspect-[3/2] bg-slate-100 rounded-xl animate-pulse"></div>
            </div>
        };
    }

    let body = match capability {
        MapCapability::Available => html! {
            <LiveMapView layers={(*layers).clone()} />
        },
        MapCapability::Probing => html! {
            <div class="relative">
                <MockMapView layers={(*layers).clone()} />
                <div class="absolute inset-0 flex items-center justify-center \
                            bg-white/50 backdrop-blur-[1px] rounded-xl">
                    <span class="flex items-center gap-2 text-sm font-medium text-slate-600">
                        <Spinner class={classes!("w-4", "h-4")} />
                        {"Loading map"}
                    </span>
                </div>
            </div>
        },
        MapCapability::Unavailable(_) => html! {
            <MockMapView layers={(*layers).clone()} />
        },
    };

    html! {
        <div class="bg-white rounded-2xl border border-slate-100 shadow-sm \
                    hover:shadow-md transition-all duration-300 p-6 h-full flex flex-col">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-bold text-slate-900">{&props.title}</h3>
                <span class="flex items-center gap-1.5 text-xs font-semibold text-green-600">
                    <span class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></span>
                    {"Live"}
                </span>
            </div>
            <div class="flex-1">{body}</div>
        </div>
    }
}
