//! Browser-independent domain for the IsukuHub site and dashboard mockup.
//!
//! Everything here runs natively so it can be unit tested without a
//! browser; the `isukuhub-ui` crate supplies timers, geolocation and
//! rendering.

pub mod chart;
pub mod config;
pub mod content;
pub mod forms;
pub mod genai;
pub mod map;
pub mod money;
pub mod records;
pub mod report;
pub mod role;
pub mod simulate;
pub mod toast;

pub use chart::{ChartDatum, Trend, TrendDirection};
pub use config::AppConfig;
pub use genai::{GenAiClient, GenAiError, Prompt, TextGenerator};
pub use map::{LatLng, LocationState, MapCapability, MapKind};
pub use money::format_rwf;
pub use report::{ReportDraft, ReportError, ReportId};
pub use role::{DashboardSession, Panel, Role, Tab};
pub use simulate::{ActionPhase, Delay, SimulatedAction};
pub use toast::{Notice, Toast, ToastId, ToastKind, ToastQueue};
