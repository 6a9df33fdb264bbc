//! Presentational dashboard cards. Each renders purely from its props and
//! swaps its body for a skeleton while `is_loading`.

pub mod chart_card;
pub mod map_card;
pub mod stat_card;
pub mod table_card;

pub use chart_card::ChartCard;
pub use map_card::MapCard;
pub use stat_card::StatCard;
pub use table_card::TableCard;
