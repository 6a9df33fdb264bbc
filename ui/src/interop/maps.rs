//! Bindings to the Google Maps JavaScript API and its script loader.
//!
//! Only the handful of classes the map cards and the location picker use are
//! bound: `Map`, `Marker`, `Polyline` and `Circle`, plus the click event.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{Context, anyhow};
use isukuhub_model::map::{LatLng, MapLayers};
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlScriptElement};

const SCRIPT_ID: &str = "isukuhub-maps-script";
const SCRIPT_BASE: &str = "https://maps.googleapis.com/maps/api/js";
const AUTH_FAILURE_HOOK: &str = "gm_authFailure";
const BRAND_COLOR: &str = "#0d9488";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Map")]
    fn new(element: &HtmlElement, options: &JsValue) -> Result<GoogleMap, JsValue>;

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(
        this: &GoogleMap,
        event: &str,
        handler: &Closure<dyn FnMut(MapMouseEvent)>,
    ) -> JsValue;

    #[wasm_bindgen(method, js_name = panTo)]
    fn pan_to(this: &GoogleMap, position: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    type Marker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"])]
    fn new(options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &Marker, map: Option<&GoogleMap>);

    #[wasm_bindgen(method, js_name = setPosition)]
    fn set_position(this: &Marker, position: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    type Polyline;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"])]
    fn new(options: &JsValue) -> Result<Polyline, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &Polyline, map: Option<&GoogleMap>);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    type Circle;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"])]
    fn new(options: &JsValue) -> Result<Circle, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &Circle, map: Option<&GoogleMap>);
}

#[wasm_bindgen]
extern "C" {
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter, js_name = latLng)]
    fn lat_lng(this: &MapMouseEvent) -> Option<MapsLatLng>;

    type MapsLatLng;

    #[wasm_bindgen(method)]
    fn lat(this: &MapsLatLng) -> f64;

    #[wasm_bindgen(method)]
    fn lng(this: &MapsLatLng) -> f64;
}

fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{context}: {err:?}")
}

fn to_js(value: serde_json::Value) -> anyhow::Result<JsValue> {
    js_sys::JSON::parse(&value.to_string())
        .map_err(|e| js_error("invalid map options", e))
}

fn literal(point: LatLng) -> serde_json::Value {
    json!({ "lat": point.lat, "lng": point.lng })
}

/// Whether `window.google.maps` exists.
pub fn global_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &"google".into())
        .ok()
        .filter(JsValue::is_object)
        .and_then(|google| js_sys::Reflect::get(&google, &"maps".into()).ok())
        .is_some_and(|maps| maps.is_object())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScriptStatus {
    #[default]
    NotRequested,
    Loading,
    Loaded,
    Failed,
}

/// Told `true` once the script has loaded, `false` if it failed.
type ScriptSubscriber = Box<dyn FnOnce(bool)>;

enum Wait {
    Queued(u32),
    Settled(ScriptSubscriber, bool),
}

/// The page's one map script: how it settled, and which mounts are still
/// waiting to hear.
#[derive(Default)]
struct ScriptGate {
    status: ScriptStatus,
    waiting: Vec<(u32, ScriptSubscriber)>,
    next_id: u32,
}

impl ScriptGate {
    /// Queue `subscriber` until the script settles, or hand it back with
    /// the outcome if it already has.
    fn wait(&mut self, subscriber: ScriptSubscriber) -> Wait {
        match self.status {
            ScriptStatus::Loaded => Wait::Settled(subscriber, true),
            ScriptStatus::Failed => Wait::Settled(subscriber, false),
            ScriptStatus::NotRequested | ScriptStatus::Loading => {
                let id = self.next_id;
                self.next_id = id.wrapping_add(1);
                self.waiting.push((id, subscriber));
                Wait::Queued(id)
            }
        }
    }

    fn leave(&mut self, id: u32) {
        self.waiting.retain(|(waiting, _)| *waiting != id);
    }

    /// Record the outcome and return everyone who was waiting for it.
    fn settle(&mut self, loaded: bool) -> Vec<ScriptSubscriber> {
        self.status = if loaded {
            ScriptStatus::Loaded
        } else {
            ScriptStatus::Failed
        };
        self.waiting.drain(..).map(|(_, subscriber)| subscriber).collect()
    }
}

thread_local! {
    static SCRIPT_GATE: RefCell<ScriptGate> = RefCell::new(ScriptGate::default());
    static AUTH_LISTENERS: RefCell<Vec<(u32, Rc<dyn Fn()>)>> =
        RefCell::new(Vec::new());
    static NEXT_AUTH_LISTENER: Cell<u32> = const { Cell::new(0) };
}

fn settle_script(loaded: bool) {
    tracing::debug!(loaded, "map script settled");
    let waiting = SCRIPT_GATE.with_borrow_mut(|gate| gate.settle(loaded));
    for subscriber in waiting {
        subscriber(loaded);
    }
}

/// A mount waiting for the map script. Dropping it stops the callback but
/// not the script: the page still records how it settles.
pub struct ScriptWatch {
    id: u32,
}

impl Drop for ScriptWatch {
    fn drop(&mut self) {
        SCRIPT_GATE.with_borrow_mut(|gate| gate.leave(self.id));
    }
}

/// Call `on_settled` once the map script has loaded or failed, injecting
/// it on first use.
///
/// Returns `Ok(None)` if the script had already settled, after calling
/// `on_settled` synchronously.
pub fn load_script(
    api_key: &str,
    on_settled: impl FnOnce(bool) + 'static,
) -> anyhow::Result<Option<ScriptWatch>> {
    let queued =
        SCRIPT_GATE.with_borrow_mut(|gate| gate.wait(Box::new(on_settled)));
    let id = match queued {
        Wait::Settled(subscriber, loaded) => {
            subscriber(loaded);
            return Ok(None);
        }
        Wait::Queued(id) => id,
    };
    let watch = ScriptWatch { id };

    let status = SCRIPT_GATE.with_borrow(|gate| gate.status);
    if status == ScriptStatus::NotRequested {
        request_script(api_key)?;
    }
    Ok(Some(watch))
}

/// Find or inject the script element and listen, for the lifetime of the
/// page, for it to settle.
fn request_script(api_key: &str) -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document")?;

    let script: HtmlScriptElement = match document.get_element_by_id(SCRIPT_ID)
    {
        Some(existing) => existing
            .dyn_into()
            .map_err(|_| anyhow!("#{SCRIPT_ID} is not a script element"))?,
        None => {
            let script: HtmlScriptElement = document
                .create_element("script")
                .map_err(|e| js_error("create script", e))?
                .dyn_into()
                .map_err(|_| anyhow!("created element is not a script"))?;
            script.set_id(SCRIPT_ID);
            script.set_async(true);
            script.set_src(&format!("{SCRIPT_BASE}?key={api_key}"));
            document
                .head()
                .context("no document head")?
                .append_child(&script)
                .map_err(|e| js_error("append script", e))?;
            tracing::debug!("requested map script");
            script
        }
    };

    // Exactly one of these fires; the other leaks with the page.
    let on_load = Closure::once_into_js(|| settle_script(true));
    let on_error = Closure::once_into_js(|| settle_script(false));
    script
        .add_event_listener_with_callback("load", on_load.unchecked_ref())
        .map_err(|e| js_error("listen for load", e))?;
    script
        .add_event_listener_with_callback("error", on_error.unchecked_ref())
        .map_err(|e| js_error("listen for error", e))?;
    SCRIPT_GATE.with_borrow_mut(|gate| gate.status = ScriptStatus::Loading);

    // A script someone else injected may have finished already.
    if global_present() {
        settle_script(true);
    }
    Ok(())
}

/// Subscription to the provider's auth-failure hook. Dropping it
/// unsubscribes.
pub struct AuthFailureWatch {
    id: u32,
}

impl Drop for AuthFailureWatch {
    fn drop(&mut self) {
        AUTH_LISTENERS.with_borrow_mut(|listeners| {
            listeners.retain(|(id, _)| *id != self.id)
        });
    }
}

/// Call `listener` if the provider reports an invalid or unauthorised key.
///
/// The provider only knows a single global function; it is installed on
/// first use and fans out to every subscriber.
pub fn watch_auth_failure(
    listener: impl Fn() + 'static,
) -> anyhow::Result<AuthFailureWatch> {
    let window = web_sys::window().context("no window")?;
    let installed = js_sys::Reflect::has(&window, &AUTH_FAILURE_HOOK.into())
        .unwrap_or(false);
    if !installed {
        let hook = Closure::<dyn Fn()>::new(|| {
            tracing::warn!("map provider rejected the credential");
            let listeners: Vec<_> = AUTH_LISTENERS.with_borrow(|listeners| {
                listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
            });
            for listener in listeners {
                listener();
            }
        });
        js_sys::Reflect::set(
            &window,
            &AUTH_FAILURE_HOOK.into(),
            &hook.into_js_value(),
        )
        .map_err(|e| js_error("install auth hook", e))?;
    }

    let id = NEXT_AUTH_LISTENER.get();
    NEXT_AUTH_LISTENER.set(id.wrapping_add(1));
    AUTH_LISTENERS
        .with_borrow_mut(|listeners| listeners.push((id, Rc::new(listener))));
    Ok(AuthFailureWatch { id })
}

/// A live map plus everything drawn on it. Overlays are removed on drop.
pub struct LiveMap {
    map: GoogleMap,
    markers: Vec<Marker>,
    lines: Vec<Polyline>,
    circles: Vec<Circle>,
    pin: Option<Marker>,
    click: Option<Closure<dyn FnMut(MapMouseEvent)>>,
}

impl LiveMap {
    pub fn mount(
        element: &HtmlElement,
        center: LatLng,
        zoom: u8,
    ) -> anyhow::Result<Self> {
        let options = to_js(json!({
            "center": literal(center),
            "zoom": zoom,
            "disableDefaultUI": true,
            "zoomControl": true,
        }))?;
        let map = GoogleMap::new(element, &options)
            .map_err(|e| js_error("create map", e))?;
        Ok(Self {
            map,
            markers: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            pin: None,
            click: None,
        })
    }

    pub fn draw(&mut self, layers: &MapLayers) -> anyhow::Result<()> {
        for marker in &layers.markers {
            let options = to_js(json!({
                "position": literal(marker.position),
                "title": marker.label,
            }))?;
            let created = Marker::new(&options)
                .map_err(|e| js_error("create marker", e))?;
            created.set_map(Some(&self.map));
            self.markers.push(created);
        }

        if !layers.path.is_empty() {
            let path: Vec<_> = layers.path.iter().copied().map(literal).collect();
            let options = to_js(json!({
                "path": path,
                "strokeColor": BRAND_COLOR,
                "strokeOpacity": 0.8,
                "strokeWeight": 4,
            }))?;
            let line = Polyline::new(&options)
                .map_err(|e| js_error("create polyline", e))?;
            line.set_map(Some(&self.map));
            self.lines.push(line);
        }

        for zone in &layers.zones {
            let options = to_js(json!({
                "center": literal(zone.center),
                "radius": zone.radius_m,
                "strokeWeight": 0,
                "fillColor": heat_color(zone.intensity),
                "fillOpacity": 0.35,
            }))?;
            let circle = Circle::new(&options)
                .map_err(|e| js_error("create circle", e))?;
            circle.set_map(Some(&self.map));
            self.circles.push(circle);
        }
        Ok(())
    }

    /// Report every click's coordinates to `on_pick`.
    pub fn on_click(&mut self, mut on_pick: impl FnMut(LatLng) + 'static) {
        let handler =
            Closure::<dyn FnMut(MapMouseEvent)>::new(move |e: MapMouseEvent| {
                if let Some(position) = e.lat_lng() {
                    on_pick(LatLng::new(position.lat(), position.lng()));
                }
            });
        self.map.add_listener("click", &handler);
        self.click = Some(handler);
    }

    /// Move the single selection pin, creating it on first use.
    pub fn set_pin(&mut self, point: LatLng) -> anyhow::Result<()> {
        let position = to_js(literal(point))?;
        match &self.pin {
            Some(pin) => pin.set_position(&position),
            None => {
                let options = to_js(json!({ "position": literal(point) }))?;
                let pin = Marker::new(&options)
                    .map_err(|e| js_error("create pin", e))?;
                pin.set_map(Some(&self.map));
                self.pin = Some(pin);
            }
        }
        self.map.pan_to(&position);
        Ok(())
    }
}

impl Drop for LiveMap {
    fn drop(&mut self) {
        for marker in self.markers.iter().chain(self.pin.iter()) {
            marker.set_map(None);
        }
        for line in &self.lines {
            line.set_map(None);
        }
        for circle in &self.circles {
            circle.set_map(None);
        }
    }
}

/// Red for the hottest zones, through orange, to green.
pub fn heat_color(intensity: f64) -> &'static str {
    match intensity {
        i if i >= 0.7 => "#ef4444",
        i if i >= 0.4 => "#f97316",
        _ => "#22c55e",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_bands() {
        assert_eq!(heat_color(0.9), "#ef4444");
        assert_eq!(heat_color(0.5), "#f97316");
        assert_eq!(heat_color(0.1), "#22c55e");
        assert_eq!(heat_color(f64::NAN), "#22c55e");
    }

    #[test]
    fn literals_use_provider_field_names() {
        assert_eq!(
            literal(LatLng::new(-1.5, 30.25)),
            json!({ "lat": -1.5, "lng": 30.25 })
        );
    }

    fn recorder(log: &Rc<RefCell<Vec<bool>>>) -> ScriptSubscriber {
        let log = log.clone();
        Box::new(move |loaded| log.borrow_mut().push(loaded))
    }

    #[test]
    fn script_settles_after_every_waiter_has_left() {
        let mut gate = ScriptGate::default();
        let first = Rc::new(RefCell::new(Vec::new()));
        let Wait::Queued(id) = gate.wait(recorder(&first)) else {
            panic!("nothing has settled yet");
        };
        gate.leave(id);

        assert!(gate.settle(true).is_empty());
        assert_eq!(gate.status, ScriptStatus::Loaded);
        assert!(first.borrow().is_empty());

        let remount = Rc::new(RefCell::new(Vec::new()));
        match gate.wait(recorder(&remount)) {
            Wait::Settled(subscriber, loaded) => subscriber(loaded),
            Wait::Queued(_) => panic!("a remount must not wait again"),
        }
        assert_eq!(*remount.borrow(), vec![true]);
    }

    #[test]
    fn every_waiter_hears_the_failure_once() {
        let mut gate = ScriptGate::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        assert!(matches!(gate.wait(recorder(&log)), Wait::Queued(0)));
        assert!(matches!(gate.wait(recorder(&log)), Wait::Queued(1)));

        for subscriber in gate.settle(false) {
            subscriber(false);
        }
        assert_eq!(*log.borrow(), vec![false, false]);
        assert!(gate.waiting.is_empty());
        assert!(matches!(gate.wait(recorder(&log)), Wait::Settled(_, false)));
    }
}
