use derive_more::Display;
use rust_decimal::{Decimal, dec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupTask {
    pub id: u32,
    pub address: String,
    pub done: bool,
}

impl PickupTask {
    pub fn seed() -> Vec<Self> {
        [
            (1, "KG 201 St, #45", false),
            (2, "KG 201 St, #47", false),
            (3, "KG 203 St, #12", true),
            (4, "KG 205 St, #3", false),
        ]
        .into_iter()
        .map(|(id, address, done)| Self {
            id,
            address: address.into(),
            done,
        })
        .collect()
    }
}

/// Flip one stop between collected and pending.
pub fn toggle_task(tasks: &mut [PickupTask], id: u32) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.done = !task.done;
    }
}

/// `(collected, total)` for the route header.
pub fn route_progress(tasks: &[PickupTask]) -> (usize, usize) {
    (tasks.iter().filter(|t| t.done).count(), tasks.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: &'static str,
    pub kind: &'static str,
    pub driver: &'static str,
    pub status: VehicleStatus,
    /// Percent; `None` while off the road.
    pub load: Option<u8>,
    pub fuel: Option<u8>,
}

impl Vehicle {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "TRK-01",
                kind: "Compactor",
                driver: "Jean P.",
                status: VehicleStatus::Active,
                load: Some(85),
                fuel: Some(40),
            },
            Self {
                id: "TRK-02",
                kind: "Compactor",
                driver: "Eric M.",
                status: VehicleStatus::Maintenance,
                load: Some(0),
                fuel: None,
            },
            Self {
                id: "TRK-03",
                kind: "Light Truck",
                driver: "Sarah K.",
                status: VehicleStatus::Active,
                load: Some(30),
                fuel: Some(75),
            },
        ]
    }
}

/// `"85%"`, or `"N/A"` when the gauge has no reading.
pub fn gauge_label(value: Option<u8>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v}%"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub time: String,
    pub mine: bool,
}

impl ChatMessage {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                author: "Dispatch".into(),
                text: "TRK-02 is in the workshop, Sector 4 is yours today."
                    .into(),
                time: "07:45".into(),
                mine: false,
            },
            Self {
                author: "You".into(),
                text: "Copy. Starting at KG 201 St.".into(),
                time: "07:52".into(),
                mine: true,
            },
            Self {
                author: "Sarah K.".into(),
                text: "Road works on KG 7 Ave, take the bypass.".into(),
                time: "08:10".into(),
                mine: false,
            },
        ]
    }

    /// A message typed into the chat box. Blank input yields nothing.
    pub fn outgoing(text: &str, time: &str) -> Option<Self> {
        let text = text.trim();
        (!text.is_empty()).then(|| Self {
            author: "You".into(),
            text: text.into(),
            time: time.into(),
            mine: true,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: &'static str,
    pub route: &'static str,
    pub stops: u32,
    pub weight_t: Decimal,
}

impl HistoryEntry {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                date: "Oct 23",
                route: "Sector 4",
                stops: 118,
                weight_t: dec!(2.6),
            },
            Self {
                date: "Oct 22",
                route: "Sector 2",
                stops: 96,
                weight_t: dec!(2.1),
            },
            Self {
                date: "Oct 21",
                route: "Sector 4",
                stops: 121,
                weight_t: dec!(2.8),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsEntry {
    pub week: &'static str,
    pub amount: Decimal,
}

/// Collector payout balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub balance: Decimal,
    pub entries: Vec<EarningsEntry>,
}

impl Wallet {
    pub fn seed() -> Self {
        Self {
            balance: dec!(84500),
            entries: vec![
                EarningsEntry {
                    week: "Week 40",
                    amount: dec!(62000),
                },
                EarningsEntry {
                    week: "Week 41",
                    amount: dec!(71500),
                },
                EarningsEntry {
                    week: "Week 42",
                    amount: dec!(58000),
                },
                EarningsEntry {
                    week: "Week 43",
                    amount: dec!(84500),
                },
            ],
        }
    }

    /// Withdraw the whole balance. Returns the amount withdrawn, or `None`
    /// when there is nothing to withdraw.
    pub fn cash_out(&mut self) -> Option<Decimal> {
        if self.balance <= Decimal::ZERO {
            return None;
        }
        Some(std::mem::take(&mut self.balance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_a_task_updates_progress() {
        let mut tasks = PickupTask::seed();
        assert_eq!(route_progress(&tasks), (1, 4));

        toggle_task(&mut tasks, 1);
        assert_eq!(route_progress(&tasks), (2, 4));
        toggle_task(&mut tasks, 1);
        assert_eq!(route_progress(&tasks), (1, 4));

        toggle_task(&mut tasks, 99);
        assert_eq!(route_progress(&tasks), (1, 4));
    }

    #[test]
    fn gauges_without_reading_show_na() {
        assert_eq!(gauge_label(Some(85)), "85%");
        assert_eq!(gauge_label(None), "N/A");
    }

    #[test]
    fn blank_chat_input_is_ignored() {
        assert_eq!(ChatMessage::outgoing("   ", "09:00"), None);
        let msg = ChatMessage::outgoing(" On my way ", "09:00").unwrap();
        assert_eq!(msg.text, "On my way");
        assert!(msg.mine);
    }

    #[test]
    fn cash_out_empties_the_wallet_once() {
        let mut wallet = Wallet::seed();
        assert_eq!(wallet.cash_out(), Some(dec!(84500)));
        assert_eq!(wallet.balance, Decimal::ZERO);
        assert_eq!(wallet.cash_out(), None);
    }
}
