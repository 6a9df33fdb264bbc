pub mod use_ai_answer;
pub mod use_initial_loading;
pub mod use_location;
pub mod use_map_capability;
pub mod use_push_route;
pub mod use_scoped_spawner;
pub mod use_simulated_action;
pub mod use_title;

pub use use_ai_answer::{AiAnswer, use_ai_answer};
pub use use_initial_loading::use_initial_loading;
pub use use_location::{LocationHandle, use_location};
pub use use_map_capability::use_map_capability;
pub use use_push_route::use_push_route;
pub use use_scoped_spawner::{ScopedSpawner, use_scoped_spawner};
pub use use_simulated_action::{SimulatedActionHandle, use_simulated_action};
pub use use_title::use_title;
