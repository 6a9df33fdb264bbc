//! The two map renderers: the provider's live map, and a CSS/SVG stand-in
//! on the fixed mock grid for when the provider is unavailable.

use std::cell::RefCell;
use std::rc::Rc;

use isukuhub_model::LatLng;
use isukuhub_model::map::{
    CITY_CENTER, DEFAULT_ZOOM, MOCK_GRID_HEIGHT, MOCK_GRID_SCALE,
    MOCK_GRID_WIDTH, MapLayers, mock_grid_coordinate, mock_grid_position,
};
use yew::prelude::*;

use crate::interop::maps::{LiveMap, heat_color};
use crate::utils::scaled_offset;

const METERS_PER_DEGREE: f64 = 111_320.0;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub layers: MapLayers,
    /// Selected point, drawn as a pin.
    #[prop_or_default]
    pub pin: Option<LatLng>,
    /// Makes the map clickable.
    #[prop_or_default]
    pub on_pick: Option<Callback<LatLng>>,
}

/// Provider map. Only mount this once the capability check says the
/// provider is available.
#[function_component]
pub fn LiveMapView(props: &MapViewProps) -> Html {
    let container = use_node_ref();
    let live: Rc<RefCell<Option<LiveMap>>> = use_mut_ref(|| None);

    {
        let container = container.clone();
        let live = live.clone();
        let layers = props.layers.clone();
        let on_pick = props.on_pick.clone();
        use_effect_with((), move |_| {
            if let Some(element) = container.cast::<web_sys::HtmlElement>() {
                let mounted = LiveMap::mount(&element, CITY_CENTER, DEFAULT_ZOOM)
                    .and_then(|mut map| {
                        map.draw(&layers)?;
                        if let Some(on_pick) = on_pick {
                            map.on_click(move |point| on_pick.emit(point));
                        }
                        Ok(map)
                    });
                match mounted {
                    Ok(map) => *live.borrow_mut() = Some(map),
                    Err(e) => tracing::error!(error = %e, "map mount failed"),
                }
            }
            move || {
                live.borrow_mut().take();
            }
        });
    }

    {
        let live = live.clone();
        use_effect_with(props.pin, move |pin| {
            if let Some(point) = pin
                && let Some(map) = live.borrow_mut().as_mut()
                && let Err(e) = map.set_pin(*point)
            {
                tracing::warn!(error = %e, "could not move map pin");
            }
        });
    }

    html! {
        <div ref={container} class="w-full h-full min-h-[240px] rounded-xl"></div>
    }
}

/// Pixel diameter of a zone on the mock grid, as a percentage of its width.
fn zone_diameter_pct(radius_m: f64) -> f64 {
    let radius_px = radius_m / METERS_PER_DEGREE / MOCK_GRID_SCALE;
    (2.0 * radius_px / MOCK_GRID_WIDTH * 100.0).clamp(4.0, 80.0)
}

fn position_style((x, y): (f64, f64)) -> String {
    format!("left: {x:.2}%; top: {y:.2}%")
}

/// Stand-in map drawn on the fixed mock grid. Clicks map back to
/// coordinates with the same linear projection the pin uses.
#[function_component]
pub fn MockMapView(props: &MapViewProps) -> Html {
    let onclick = props.on_pick.clone().map(|on_pick| {
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e
                .current_target()
                .and_then(|t| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(t).ok())
            else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let x = scaled_offset(
                f64::from(e.client_x()),
                rect.left(),
                rect.width(),
                MOCK_GRID_WIDTH,
            );
            let y = scaled_offset(
                f64::from(e.client_y()),
                rect.top(),
                rect.height(),
                MOCK_GRID_HEIGHT,
            );
            if let (Some(x), Some(y)) = (x, y) {
                on_pick.emit(mock_grid_coordinate(x, y));
            }
        })
    });

    let path_points = props
        .layers
        .path
        .iter()
        .map(|p| {
            let (x, y) = mock_grid_position(*p);
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let cursor = if props.on_pick.is_some() {
        "cursor-crosshair"
    } else {
        "cursor-default"
    };

    html! {
        <div
            {onclick}
            class={classes!(
                "relative", "w-full", "aspect-[3/2]", "bg-slate-100",
                "rounded-xl", "overflow-hidden", "select-none", cursor
            )}
        >
            // Street grid
            <div class="absolute inset-0 opacity-60 \
                        bg-[linear-gradient(to_right,#e2e8f0_1px,transparent_1px),\
                        linear-gradient(to_bottom,#e2e8f0_1px,transparent_1px)] \
                        bg-[size:24px_24px]"></div>

            {for props.layers.zones.iter().map(|zone| {
                let diameter = zone_diameter_pct(zone.radius_m);
                let (x, y) = mock_grid_position(zone.center);
                html! {
                    <div
                        class="absolute rounded-full blur-2xl opacity-40 \
                               -translate-x-1/2 -translate-y-1/2 aspect-square"
                        style={format!(
                            "{}; width: {diameter:.1}%; background: {}",
                            position_style((x, y)),
                            heat_color(zone.intensity)
                        )}
                    ></div>
                }
            })}

            if !path_points.is_empty() {
                <svg
                    class="absolute inset-0 w-full h-full"
                    viewBox="0 0 100 100"
                    preserveAspectRatio="none"
                >
                    <polyline
                        points={path_points}
                        fill="none"
                        stroke="#0d9488"
                        stroke-width="1.2"
                        stroke-dasharray="3 1.5"
                        vector-effect="non-scaling-stroke"
                    />
                </svg>
            }

            {for props.layers.markers.iter().map(|marker| html! {
                <div
                    class="absolute -translate-x-1/2 -translate-y-1/2 w-3 h-3 \
                           bg-blue-600 rounded-full border border-white shadow-md"
                    style={position_style(mock_grid_position(marker.position))}
                    title={marker.label}
                ></div>
            })}

            if let Some(pin) = props.pin {
                <div
                    class="absolute -translate-x-1/2 -translate-y-full text-2xl \
                           drop-shadow pointer-events-none"
                    style={position_style(mock_grid_position(pin))}
                >
                    {"📍"}
                </div>
            }

            <div class="absolute bottom-2 right-2 text-[10px] font-bold uppercase \
                        tracking-wider text-slate-400 bg-white/80 px-2 py-0.5 rounded">
                {"Preview map"}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_sizes_are_clamped() {
        assert_eq!(zone_diameter_pct(0.0), 4.0);
        assert_eq!(zone_diameter_pct(1.0e6), 80.0);
        let mid = zone_diameter_pct(600.0);
        assert!(mid > 4.0 && mid < 80.0);
    }

    #[test]
    fn positions_are_css_percentages() {
        assert_eq!(position_style((12.5, 50.0)), "left: 12.50%; top: 50.00%");
    }
}
