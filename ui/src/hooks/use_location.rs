use isukuhub_model::LatLng;
use isukuhub_model::map::{GEOLOCATION_FAILED, LocationSource, LocationState};
use yew::prelude::*;

use super::use_scoped_spawner;
use crate::interop::geolocation;

#[derive(Clone, PartialEq)]
pub struct LocationHandle {
    pub state: LocationState,
    locate: Callback<()>,
    pick: Callback<(LatLng, LocationSource)>,
    clear: Callback<()>,
}

impl LocationHandle {
    /// Ask the browser for the device position.
    pub fn locate(&self) {
        self.locate.emit(());
    }

    /// Use a point picked on a map or on the mock grid.
    pub fn pick(&self, point: LatLng, source: LocationSource) {
        self.pick.emit((point, source));
    }

    pub fn clear(&self) {
        self.clear.emit(());
    }
}

#[hook]
pub fn use_location() -> LocationHandle {
    let state = use_state(LocationState::default);
    let spawner = use_scoped_spawner();

    let locate = {
        let state = state.clone();
        Callback::from(move |()| {
            if *state == LocationState::Locating {
                return;
            }
            state.set(LocationState::Locating);
            let state = state.clone();
            spawner.spawn(async move {
                match geolocation::current_position().await {
                    Ok(point) => state.set(LocationState::Fixed {
                        point,
                        source: LocationSource::Geolocation,
                    }),
                    Err(e) => {
                        tracing::warn!(error = %e, "geolocation failed");
                        state.set(LocationState::Failed(
                            GEOLOCATION_FAILED.to_string(),
                        ));
                    }
                }
            });
        })
    };

    let pick = {
        let state = state.clone();
        Callback::from(move |(point, source): (LatLng, LocationSource)| {
            tracing::debug!(%point, %source, "location picked");
            state.set(LocationState::Fixed { point, source });
        })
    };

    let clear = {
        let state = state.clone();
        Callback::from(move |()| state.set(LocationState::Empty))
    };

    LocationHandle {
        state: (*state).clone(),
        locate,
        pick,
        clear,
    }
}
