use derive_more::Display;
use rust_decimal::{Decimal, dec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PickupStatus {
    Scheduled,
    Requested,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledPickup {
    pub day: String,
    pub date: String,
    pub waste_type: String,
    pub window: String,
    pub status: PickupStatus,
}

impl ScheduledPickup {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                day: "Tomorrow".into(),
                date: "Oct 25".into(),
                waste_type: "General Waste".into(),
                window: "09:00 AM - 11:00 AM".into(),
                status: PickupStatus::Scheduled,
            },
            Self {
                day: "Thursday".into(),
                date: "Oct 28".into(),
                waste_type: "Recyclables".into(),
                window: "10:00 AM - 12:00 PM".into(),
                status: PickupStatus::Scheduled,
            },
        ]
    }

    /// Appended to the schedule once an extra pickup request completes.
    pub fn extra_request() -> Self {
        Self {
            day: "On request".into(),
            date: "TBD".into(),
            waste_type: "Bulk Waste".into(),
            window: "Collector will confirm".into(),
            status: PickupStatus::Requested,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub reference: String,
    pub amount: Decimal,
    pub date: String,
    pub method: String,
    pub status: PaymentStatus,
}

impl PaymentRecord {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                reference: "#123".into(),
                amount: dec!(5000),
                date: "Oct 1".into(),
                method: "MTN MoMo".into(),
                status: PaymentStatus::Paid,
            },
            Self {
                reference: "#118".into(),
                amount: dec!(5000),
                date: "Sep 1".into(),
                method: "Airtel Money".into(),
                status: PaymentStatus::Paid,
            },
            Self {
                reference: "#111".into(),
                amount: dec!(5000),
                date: "Aug 1".into(),
                method: "MTN MoMo".into(),
                status: PaymentStatus::Paid,
            },
        ]
    }
}

/// The household's current monthly sanitation bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    pub period: String,
    pub amount: Decimal,
    pub due: String,
    pub paid: bool,
}

impl Bill {
    pub fn current() -> Self {
        Self {
            period: "November 2024".into(),
            amount: dec!(5000),
            due: "Nov 5".into(),
            paid: false,
        }
    }

    /// Settle the bill and record it at the top of the history. Paying an
    /// already settled bill does nothing.
    pub fn pay(
        &mut self,
        history: &mut Vec<PaymentRecord>,
        date: &str,
    ) -> bool {
        if self.paid {
            return false;
        }
        self.paid = true;
        let next_ref = history
            .iter()
            .filter_map(|p| {
                p.reference.trim_start_matches('#').parse::<u32>().ok()
            })
            .max()
            .map_or(1, |max| max + 1);
        history.insert(
            0,
            PaymentRecord {
                reference: format!("#{next_ref}"),
                amount: self.amount,
                date: date.to_string(),
                method: "MTN MoMo".into(),
                status: PaymentStatus::Paid,
            },
        );
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BinColor {
    #[display("Blue Bin")]
    Blue,
    #[display("Green Bin")]
    Green,
    #[display("Black Bin")]
    Black,
    #[display("Hazardous")]
    Hazardous,
}

impl BinColor {
    pub fn stream(self) -> &'static str {
        match self {
            BinColor::Blue => "Recycling",
            BinColor::Green => "Organic",
            BinColor::Black => "General",
            BinColor::Hazardous => "Special drop-off",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideItem {
    pub name: &'static str,
    pub bin: BinColor,
}

pub const GUIDE_ITEMS: &[GuideItem] = &[
    GuideItem {
        name: "Plastic Bottle",
        bin: BinColor::Blue,
    },
    GuideItem {
        name: "Banana Peel",
        bin: BinColor::Green,
    },
    GuideItem {
        name: "Batteries",
        bin: BinColor::Hazardous,
    },
    GuideItem {
        name: "Cardboard Box",
        bin: BinColor::Blue,
    },
    GuideItem {
        name: "Vegetable Scraps",
        bin: BinColor::Green,
    },
    GuideItem {
        name: "Diapers",
        bin: BinColor::Black,
    },
];

/// Items of the standard guide whose name contains `query`, case-folded.
/// An empty query returns the whole guide.
pub fn search_guide(query: &str) -> Vec<&'static GuideItem> {
    let query = query.trim().to_lowercase();
    GUIDE_ITEMS
        .iter()
        .filter(|item| {
            query.is_empty() || item.name.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paying_the_bill_prepends_one_record() {
        let mut bill = Bill::current();
        let mut history = PaymentRecord::seed();
        let before = history.len();

        assert!(bill.pay(&mut history, "Nov 2"));
        assert!(bill.paid);
        assert_eq!(history.len(), before + 1);
        assert_eq!(history[0].reference, "#124");
        assert_eq!(history[0].amount, dec!(5000));

        assert!(!bill.pay(&mut history, "Nov 3"));
        assert_eq!(history.len(), before + 1);
    }

    #[test]
    fn guide_search_is_case_insensitive() {
        let hits = search_guide("BOTTLE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].bin, BinColor::Blue);
        assert_eq!(search_guide("").len(), GUIDE_ITEMS.len());
        assert!(search_guide("piano").is_empty());
    }
}
