use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy, dec, prelude::ToPrimitive};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub material: &'static str,
    /// Tonnes in stock.
    pub quantity: Decimal,
    /// Tonnes the yard can hold for this material.
    pub capacity: Decimal,
}

impl InventoryItem {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                material: "PET Bottles",
                quantity: dec!(4.5),
                capacity: dec!(5.625),
            },
            Self {
                material: "Cardboard",
                quantity: dec!(1.2),
                capacity: dec!(3.0),
            },
            Self {
                material: "HDPE",
                quantity: dec!(0.8),
                capacity: dec!(3.2),
            },
        ]
    }

    /// Share of capacity in use, 0.0 to 1.0.
    pub fn fill_fraction(&self) -> f64 {
        if self.capacity <= Decimal::ZERO {
            return 0.0;
        }
        let ratio = (self.quantity / self.capacity)
            .clamp(Decimal::ZERO, Decimal::ONE);
        ratio.to_f64().unwrap_or(0.0)
    }

    /// Whole percent for the gauge caption.
    pub fn fill_percent(&self) -> u8 {
        (self.fill_fraction() * 100.0).round() as u8
    }

    /// Add (or remove, when negative) stock. The result stays within
    /// `[0, capacity]`, including for deltas too large to add.
    pub fn apply_delta(&mut self, delta: Decimal) {
        self.quantity = match self.quantity.checked_add(delta) {
            Some(sum) => sum.clamp(Decimal::ZERO, self.capacity),
            None if delta.is_sign_negative() => Decimal::ZERO,
            None => self.capacity,
        };
    }

    pub fn quantity_label(&self) -> String {
        format!("{} T", self.quantity.normalize())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupRequest {
    pub id: u32,
    pub requester: &'static str,
    pub material: &'static str,
    pub quantity_kg: u32,
    pub location: &'static str,
    pub status: RequestStatus,
}

impl PickupRequest {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: 1,
                requester: "Kimironko Market",
                material: "Cardboard",
                quantity_kg: 320,
                location: "Kimironko",
                status: RequestStatus::Pending,
            },
            Self {
                id: 2,
                requester: "Green Hills Hotel",
                material: "PET Bottles",
                quantity_kg: 150,
                location: "Kacyiru",
                status: RequestStatus::Pending,
            },
            Self {
                id: 3,
                requester: "Mukamana household",
                material: "Glass",
                quantity_kg: 40,
                location: "Remera",
                status: RequestStatus::Accepted,
            },
        ]
    }

    /// Decide a pending request. Requests that were already decided keep
    /// their status; returns whether anything changed.
    pub fn decide(&mut self, accept: bool) -> bool {
        if self.status != RequestStatus::Pending {
            return false;
        }
        self.status = if accept {
            RequestStatus::Accepted
        } else {
            RequestStatus::Rejected
        };
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketListing {
    pub material: &'static str,
    /// RWF per kilogram.
    pub price: Decimal,
    /// Last movement, in percent.
    pub change: Decimal,
}

/// Largest single price movement, in percent either way.
pub const MAX_PRICE_SWING_PCT: Decimal = dec!(5);

impl MarketListing {
    pub fn seed() -> Vec<Self> {
        [
            ("PET Bottles", dec!(350)),
            ("Cardboard", dec!(120)),
            ("HDPE", dec!(410)),
            ("Aluminium Cans", dec!(900)),
        ]
        .into_iter()
        .map(|(material, price)| Self {
            material,
            price,
            change: Decimal::ZERO,
        })
        .collect()
    }

    /// Move the price by up to [`MAX_PRICE_SWING_PCT`] in either direction.
    /// `roll` is a uniform sample in `[0, 1)`, e.g. from `Math.random()`.
    ///
    /// Prices stay in whole RWF, rounded toward the old price so the move
    /// never exceeds the cap; `change` records the move actually made.
    pub fn jitter(&mut self, roll: f64) {
        let roll = if roll.is_finite() {
            roll.clamp(0.0, 1.0)
        } else {
            0.5
        };
        // Hundredths of a percent, -500..=500.
        let basis = ((roll * 2.0 - 1.0) * 500.0).round() as i64;
        let target = Decimal::new(basis, 2);
        let factor = Decimal::ONE + target / dec!(100);
        let toward_old = if target.is_sign_negative() {
            RoundingStrategy::ToPositiveInfinity
        } else {
            RoundingStrategy::ToNegativeInfinity
        };
        let old = self.price;
        self.price = (old * factor)
            .round_dp_with_strategy(0, toward_old)
            .max(Decimal::ONE);
        self.change = if old.is_zero() {
            Decimal::ZERO
        } else {
            ((self.price - old) / old * dec!(100)).round_dp(2)
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ShipmentStatus {
    Scheduled,
    #[display("In Transit")]
    InTransit,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    pub id: &'static str,
    pub material: &'static str,
    pub destination: &'static str,
    pub eta: &'static str,
    pub status: ShipmentStatus,
}

impl Shipment {
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "SHP-301",
                material: "PET Bottles",
                destination: "Masoro Processing Plant",
                eta: "Today, 14:00",
                status: ShipmentStatus::InTransit,
            },
            Self {
                id: "SHP-302",
                material: "Cardboard",
                destination: "Kigali Paper Mill",
                eta: "Tomorrow, 09:00",
                status: ShipmentStatus::Scheduled,
            },
            Self {
                id: "SHP-297",
                material: "HDPE",
                destination: "Bugesera Pelletiser",
                eta: "Oct 22",
                status: ShipmentStatus::Delivered,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_inventory_matches_dashboard_gauges() {
        let fills: Vec<_> =
            InventoryItem::seed().iter().map(|i| i.fill_percent()).collect();
        assert_eq!(fills, [80, 40, 25]);
    }

    #[test]
    fn stock_updates_stay_within_capacity() {
        let mut item = InventoryItem::seed().remove(1);
        item.apply_delta(dec!(10));
        assert_eq!(item.quantity, item.capacity);
        assert_eq!(item.fill_percent(), 100);

        item.apply_delta(dec!(-50));
        assert_eq!(item.quantity, Decimal::ZERO);
        assert_eq!(item.quantity_label(), "0 T");
    }

    #[test]
    fn zero_capacity_reads_as_empty() {
        let item = InventoryItem {
            material: "Glass",
            quantity: dec!(1),
            capacity: Decimal::ZERO,
        };
        assert_eq!(item.fill_fraction(), 0.0);
    }

    #[test]
    fn only_pending_requests_can_be_decided() {
        let mut requests = PickupRequest::seed();
        assert!(requests[0].decide(false));
        assert_eq!(requests[0].status, RequestStatus::Rejected);
        assert!(!requests[0].decide(true));
        assert_eq!(requests[0].status, RequestStatus::Rejected);
        assert!(!requests[2].decide(false));
    }

    #[test]
    fn oversized_stock_deltas_saturate() {
        let mut item = InventoryItem::seed().remove(0);
        item.apply_delta(Decimal::MAX);
        assert_eq!(item.quantity, item.capacity);

        item.apply_delta(Decimal::MIN);
        assert_eq!(item.quantity, Decimal::ZERO);

        // Overflow from a full yard still lands on capacity.
        let mut full = InventoryItem {
            material: "Glass",
            quantity: Decimal::MAX,
            capacity: Decimal::MAX,
        };
        full.apply_delta(Decimal::MAX);
        assert_eq!(full.quantity, Decimal::MAX);
    }

    #[test]
    fn price_jitter_is_bounded() {
        let mut listing = MarketListing::seed().remove(0);
        listing.jitter(0.0);
        assert_eq!(listing.price, dec!(333));
        assert_eq!(listing.change, dec!(-4.86));

        let mut listing = MarketListing::seed().remove(0);
        listing.jitter(0.999_999);
        assert_eq!(listing.price, dec!(367));
        assert_eq!(listing.change, dec!(4.86));

        let mut listing = MarketListing::seed().remove(0);
        listing.jitter(f64::NAN);
        assert_eq!(listing.change, Decimal::ZERO);
        assert_eq!(listing.price, dec!(350));
    }

    #[test]
    fn rounding_never_pushes_a_cheap_price_past_the_cap() {
        for start in [dec!(1), dec!(7), dec!(10), dec!(19), dec!(21)] {
            for roll in [0.0, 0.25, 0.5, 0.75, 0.999_999] {
                let mut listing = MarketListing {
                    material: "Glass",
                    price: start,
                    change: Decimal::ZERO,
                };
                listing.jitter(roll);
                let moved = (listing.price - start).abs();
                assert!(
                    moved * dec!(100) <= start * MAX_PRICE_SWING_PCT,
                    "{start} moved to {} at roll {roll}",
                    listing.price
                );
                assert!(listing.change.abs() <= MAX_PRICE_SWING_PCT);
            }
        }
    }
}
