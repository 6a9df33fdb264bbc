use std::rc::Rc;

use isukuhub_model::MapCapability;
use yew::prelude::*;

use crate::app_config;
use crate::interop::maps;

enum CapabilityEvent {
    ScriptLoaded,
    ScriptFailed,
    AuthFailed,
}

#[derive(PartialEq)]
struct CapabilityState(MapCapability);

impl Reducible for CapabilityState {
    type Action = CapabilityEvent;

    fn reduce(self: Rc<Self>, event: Self::Action) -> Rc<Self> {
        let next = match event {
            CapabilityEvent::ScriptLoaded => {
                self.0.script_loaded(maps::global_present())
            }
            CapabilityEvent::ScriptFailed => self.0.script_failed(),
            CapabilityEvent::AuthFailed => self.0.auth_failed(),
        };
        if next != self.0 {
            tracing::info!(from = ?self.0, to = ?next, "map capability");
        }
        Rc::new(CapabilityState(next))
    }
}

/// Decide once, on mount, whether a real map can be drawn.
///
/// Loads the provider script when a key is configured and listens for the
/// provider's auth-failure hook. Once unavailable, the answer stays
/// unavailable until the component remounts.
#[hook]
pub fn use_map_capability() -> MapCapability {
    let state = use_reducer(|| {
        let config = app_config();
        CapabilityState(MapCapability::detect(
            config.has_maps_key(),
            maps::global_present(),
        ))
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let auth = {
                let state = state.clone();
                maps::watch_auth_failure(move || {
                    state.dispatch(CapabilityEvent::AuthFailed)
                })
            };
            let auth = match auth {
                Ok(watch) => Some(watch),
                Err(e) => {
                    tracing::warn!(error = %e, "could not watch map auth");
                    None
                }
            };

            let mut script = None;
            if state.0 == MapCapability::Probing
                && let Some(key) = app_config().maps_api_key
            {
                let settled = state.clone();
                match maps::load_script(&key, move |loaded| {
                    settled.dispatch(if loaded {
                        CapabilityEvent::ScriptLoaded
                    } else {
                        CapabilityEvent::ScriptFailed
                    })
                }) {
                    Ok(watch) => script = watch,
                    Err(e) => {
                        tracing::warn!(error = %e, "map script not injected");
                        state.dispatch(CapabilityEvent::ScriptFailed);
                    }
                }
            }

            move || {
                drop(script);
                drop(auth);
            }
        });
    }

    state.0
}
