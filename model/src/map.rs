//! Map capability detection, the mock-grid projection and location capture.
//!
//! The real map is a third-party script that may be missing, unauthorised
//! or blocked. [`MapCapability`] records what was found when a map first
//! mounted; once it reports `Unavailable` the mock grid is used until the
//! component is mounted again.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Kigali city centre, the reference point for the mock grid.
pub const CITY_CENTER: LatLng = LatLng {
    lat: -1.9441,
    lng: 30.0619,
};

/// Size of the mock grid container in CSS pixels.
pub const MOCK_GRID_WIDTH: f64 = 480.0;
pub const MOCK_GRID_HEIGHT: f64 = 320.0;

/// Degrees per pixel on the mock grid, both axes.
pub const MOCK_GRID_SCALE: f64 = 0.0001;

pub const DEFAULT_ZOOM: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Display)]
#[display("{lat:.6}, {lng:.6}")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// The latitude and longitude strings shown in the report form.
    pub fn to_fields(&self) -> (String, String) {
        (format!("{:.6}", self.lat), format!("{:.6}", self.lng))
    }
}

/// Coordinate for a click at `(x, y)` pixels inside the mock grid.
///
/// The grid centre is [`CITY_CENTER`]; moving right increases longitude and
/// moving down decreases latitude. Offsets outside the container are clamped
/// to its edge.
pub fn mock_grid_coordinate(x: f64, y: f64) -> LatLng {
    let x = x.clamp(0.0, MOCK_GRID_WIDTH);
    let y = y.clamp(0.0, MOCK_GRID_HEIGHT);
    LatLng {
        lat: CITY_CENTER.lat - (y - MOCK_GRID_HEIGHT / 2.0) * MOCK_GRID_SCALE,
        lng: CITY_CENTER.lng + (x - MOCK_GRID_WIDTH / 2.0) * MOCK_GRID_SCALE,
    }
}

/// Where a coordinate lands on the mock grid, as percentages of the
/// container so the grid can be drawn at any size.
pub fn mock_grid_position(point: LatLng) -> (f64, f64) {
    let x = (point.lng - CITY_CENTER.lng) / MOCK_GRID_SCALE
        + MOCK_GRID_WIDTH / 2.0;
    let y = (CITY_CENTER.lat - point.lat) / MOCK_GRID_SCALE
        + MOCK_GRID_HEIGHT / 2.0;
    (
        (x / MOCK_GRID_WIDTH * 100.0).clamp(0.0, 100.0),
        (y / MOCK_GRID_HEIGHT * 100.0).clamp(0.0, 100.0),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    Route,
    Heatmap,
    Points,
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FallbackReason {
    #[display("no map credential configured")]
    MissingCredential,
    #[display("map script did not register its global")]
    GlobalMissing,
    #[display("map script failed to load")]
    ScriptFailed,
    #[display("map provider rejected the credential")]
    AuthFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCapability {
    /// Script requested, waiting for it to load.
    Probing,
    Available,
    Unavailable(FallbackReason),
}

impl MapCapability {
    /// The check performed once when a map first mounts.
    pub fn detect(has_credential: bool, global_present: bool) -> Self {
        match (has_credential, global_present) {
            (false, _) => Self::Unavailable(FallbackReason::MissingCredential),
            (true, true) => Self::Available,
            (true, false) => Self::Probing,
        }
    }

    pub fn script_loaded(self, global_present: bool) -> Self {
        match self {
            Self::Probing if global_present => Self::Available,
            Self::Probing => Self::Unavailable(FallbackReason::GlobalMissing),
            other => other,
        }
    }

    pub fn script_failed(self) -> Self {
        match self {
            Self::Probing => Self::Unavailable(FallbackReason::ScriptFailed),
            other => other,
        }
    }

    /// Provider auth callback. Forces the fallback from any live state.
    pub fn auth_failed(self) -> Self {
        match self {
            Self::Unavailable(reason) => Self::Unavailable(reason),
            _ => Self::Unavailable(FallbackReason::AuthFailure),
        }
    }

    pub fn can_instantiate(&self) -> bool {
        matches!(self, Self::Available)
    }

    pub fn uses_mock(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Overlays drawn on a map card, shared by the real and mock renderers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapLayers {
    pub markers: Vec<MapMarker>,
    pub path: Vec<LatLng>,
    pub zones: Vec<HeatZone>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: LatLng,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatZone {
    pub center: LatLng,
    pub radius_m: f64,
    /// 0.0 (calm) to 1.0 (hotspot).
    pub intensity: f64,
}

impl MapLayers {
    pub fn for_kind(kind: MapKind) -> Self {
        match kind {
            MapKind::Route => Self {
                markers: vec![MapMarker {
                    position: LatLng::new(-1.9402, 30.0553),
                    label: "TRK-01",
                }],
                path: vec![
                    LatLng::new(-1.9362, 30.0484),
                    LatLng::new(-1.9402, 30.0553),
                    LatLng::new(-1.9467, 30.0601),
                    LatLng::new(-1.9431, 30.0688),
                    LatLng::new(-1.9496, 30.0742),
                ],
                zones: Vec::new(),
            },
            MapKind::Heatmap => Self {
                markers: Vec::new(),
                path: Vec::new(),
                zones: vec![
                    HeatZone {
                        center: LatLng::new(-1.9380, 30.0560),
                        radius_m: 600.0,
                        intensity: 0.9,
                    },
                    HeatZone {
                        center: LatLng::new(-1.9500, 30.0700),
                        radius_m: 750.0,
                        intensity: 0.6,
                    },
                    HeatZone {
                        center: LatLng::new(-1.9441, 30.0619),
                        radius_m: 450.0,
                        intensity: 0.3,
                    },
                ],
            },
            MapKind::Points => Self {
                markers: vec![
                    MapMarker {
                        position: LatLng::new(-1.9371, 30.0512),
                        label: "PET drop-off",
                    },
                    MapMarker {
                        position: LatLng::new(-1.9410, 30.0580),
                        label: "Cardboard bale",
                    },
                    MapMarker {
                        position: LatLng::new(-1.9462, 30.0655),
                        label: "HDPE collection",
                    },
                    MapMarker {
                        position: LatLng::new(-1.9508, 30.0723),
                        label: "Glass cullet",
                    },
                ],
                path: Vec::new(),
                zones: Vec::new(),
            },
            MapKind::Basic => Self {
                markers: vec![MapMarker {
                    position: CITY_CENTER,
                    label: "Home",
                }],
                path: Vec::new(),
                zones: Vec::new(),
            },
        }
    }
}

/// How a report's coordinates were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LocationSource {
    #[display("GPS")]
    Geolocation,
    #[display("Map")]
    Map,
    #[display("Grid")]
    MockGrid,
}

/// Shown in place of coordinates when the browser refuses or times out.
pub const GEOLOCATION_FAILED: &str = "Unable to retrieve your location";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationState {
    #[default]
    Empty,
    Locating,
    Fixed {
        point: LatLng,
        source: LocationSource,
    },
    Failed(String),
}

impl LocationState {
    pub fn point(&self) -> Option<LatLng> {
        match self {
            Self::Fixed { point, .. } => Some(*point),
            _ => None,
        }
    }

    /// Values for the read-only latitude and longitude inputs.
    pub fn fields(&self) -> (String, String) {
        match self {
            Self::Fixed { point, .. } => point.to_fields(),
            Self::Failed(message) => (message.clone(), message.clone()),
            Self::Locating => ("Locating...".into(), "Locating...".into()),
            Self::Empty => (String::new(), String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_centre_is_city_centre() {
        let centre =
            mock_grid_coordinate(MOCK_GRID_WIDTH / 2.0, MOCK_GRID_HEIGHT / 2.0);
        assert_eq!(centre, CITY_CENTER);
    }

    #[test]
    fn grid_offsets_scale_linearly() {
        let p = mock_grid_coordinate(
            MOCK_GRID_WIDTH / 2.0 + 100.0,
            MOCK_GRID_HEIGHT / 2.0 + 50.0,
        );
        assert!((p.lng - (CITY_CENTER.lng + 0.01)).abs() < 1e-9);
        assert!((p.lat - (CITY_CENTER.lat - 0.005)).abs() < 1e-9);
    }

    #[test]
    fn grid_clicks_outside_are_clamped() {
        assert_eq!(
            mock_grid_coordinate(-40.0, -40.0),
            mock_grid_coordinate(0.0, 0.0)
        );
    }

    #[test]
    fn grid_position_inverts_grid_coordinate() {
        let p = mock_grid_coordinate(120.0, 80.0);
        let (x, y) = mock_grid_position(p);
        assert!((x - 25.0).abs() < 1e-6);
        assert!((y - 25.0).abs() < 1e-6);
    }

    #[test]
    fn missing_credential_goes_straight_to_mock() {
        let cap = MapCapability::detect(false, true);
        assert!(cap.uses_mock());
        assert!(!cap.can_instantiate());
    }

    #[test]
    fn probing_resolves_once() {
        let cap = MapCapability::detect(true, false);
        assert_eq!(cap, MapCapability::Probing);
        assert!(!cap.can_instantiate());

        let cap = cap.script_loaded(false);
        assert_eq!(
            cap,
            MapCapability::Unavailable(FallbackReason::GlobalMissing)
        );
        // A late load event does not bring the real map back.
        assert!(cap.script_loaded(true).uses_mock());
    }

    #[test]
    fn auth_failure_is_terminal() {
        let cap = MapCapability::detect(true, true);
        assert!(cap.can_instantiate());
        let cap = cap.auth_failed();
        assert_eq!(cap, MapCapability::Unavailable(FallbackReason::AuthFailure));
        assert!(!cap.script_loaded(true).can_instantiate());
    }

    #[test]
    fn failed_location_shows_message_in_both_fields() {
        let state = LocationState::Failed(GEOLOCATION_FAILED.to_string());
        assert_eq!(state.point(), None);
        assert_eq!(state.fields().0, GEOLOCATION_FAILED);
    }

    #[test]
    fn fixed_location_formats_six_decimals() {
        let state = LocationState::Fixed {
            point: LatLng::new(-1.5, 30.25),
            source: LocationSource::Geolocation,
        };
        assert_eq!(state.fields(), ("-1.500000".into(), "30.250000".into()));
    }
}
