use isukuhub_model::map::{LocationSource, MapLayers};
use isukuhub_model::{LatLng, LocationState, MapCapability};
use yew::prelude::*;

use crate::components::map_view::{LiveMapView, MockMapView};
use crate::components::spinner::Spinner;
use crate::hooks::{LocationHandle, use_map_capability};

#[derive(Properties, PartialEq)]
pub struct LocationPickerProps {
    pub location: LocationHandle,
}

/// Incident location: device position, a click on the map, or a click on
/// the preview grid when the map provider is unavailable.
#[function_component]
pub fn LocationPicker(props: &LocationPickerProps) -> Html {
    let capability = use_map_capability();
    let location = &props.location;
    let (lat, lng) = location.state.fields();
    let pin = location.state.point();
    let locating = location.state == LocationState::Locating;

    let on_locate = {
        let location = location.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            location.locate();
        })
    };

    let map = match capability {
        MapCapability::Available => {
            let location = location.clone();
            let on_pick = Callback::from(move |point: LatLng| {
                location.pick(point, LocationSource::Map)
            });
            html! {
                <div class="h-64">
                    <LiveMapView layers={MapLayers::default()} {pin} {on_pick} />
                </div>
            }
        }
        MapCapability::Probing => html! {
            <div class="w-full aspect-[3/2] bg-slate-100 rounded-xl flex \
                        items-center justify-center text-sm text-slate-500 gap-2">
                <Spinner class={classes!("w-4", "h-4")} />
                {"Loading map"}
            </div>
        },
        MapCapability::Unavailable(_) => {
            let location = location.clone();
            let on_pick = Callback::from(move |point: LatLng| {
                location.pick(point, LocationSource::MockGrid)
            });
            html! {
                <MockMapView layers={MapLayers::default()} {pin} {on_pick} />
            }
        }
    };

    html! {
        <div class="space-y-4">
            <label class="block text-sm font-bold text-slate-700">
                {"Incident Location"}
            </label>
            <div class="rounded-xl overflow-hidden border border-slate-200">
                {map}
            </div>
            <p class="text-xs text-slate-500">
                {"Click the map to drop a pin where the issue is."}
            </p>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-xs font-semibold text-slate-500 mb-1">
                        {"Latitude (Auto)"}
                    </label>
                    <input
                        type="text"
                        readonly=true
                        value={lat}
                        placeholder="0.000000"
                        class="w-full px-3 py-2 bg-slate-50 border border-slate-200 \
                               rounded-lg text-sm font-mono text-slate-700"
                    />
                </div>
                <div>
                    <label class="block text-xs font-semibold text-slate-500 mb-1">
                        {"Longitude (Auto)"}
                    </label>
                    <input
                        type="text"
                        readonly=true
                        value={lng}
                        placeholder="0.000000"
                        class="w-full px-3 py-2 bg-slate-50 border border-slate-200 \
                               rounded-lg text-sm font-mono text-slate-700"
                    />
                </div>
            </div>

            <button
                type="button"
                onclick={on_locate}
                disabled={locating}
                class="w-full flex items-center justify-center gap-2 py-2.5 \
                       border-2 border-brand-600 text-brand-700 font-semibold \
                       rounded-lg hover:bg-brand-50 transition-colors \
                       disabled:opacity-60 disabled:cursor-wait"
            >
                if locating {
                    <Spinner class={classes!("w-4", "h-4")} />
                    {"Locating..."}
                } else {
                    {"📍 Use My Current Location"}
                }
            </button>
        </div>
    }
}
