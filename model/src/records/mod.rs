//! Seeded in-memory records behind each dashboard panel.
//!
//! Panels take a fresh copy from `seed()` when they mount and mutate it
//! locally; nothing survives navigation.

pub mod collector;
pub mod household;
pub mod official;
pub mod recycler;

use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub time: &'static str,
    pub read: bool,
}

/// The bell menu in the dashboard top bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn for_role(role: Role) -> Self {
        let texts: &[(&str, &str)] = match role {
            Role::Household => &[
                ("Your pickup is scheduled for tomorrow, 9AM.", "2h ago"),
                ("November bill is ready: RWF 5,000.", "1d ago"),
            ],
            Role::Collector => &[
                ("TRK-02 moved to maintenance.", "30m ago"),
                ("3 new alerts on the Sector 4 route.", "1h ago"),
            ],
            Role::Recycler => &[
                ("New pickup request from Kimironko Market.", "15m ago"),
                ("PET price moved 3% since yesterday.", "4h ago"),
            ],
            Role::Official => &[
                ("Report #RPT-2024-089 needs review.", "10m ago"),
                ("Weekly compliance summary is available.", "1d ago"),
            ],
        };

        Self {
            items: texts
                .iter()
                .zip(1..)
                .map(|(&(text, time), id)| Notification {
                    id,
                    text: text.to_string(),
                    time,
                    read: false,
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: u32) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_starts_with_unread_notifications() {
        for role in Role::ALL {
            let center = NotificationCenter::for_role(role);
            assert!(center.unread_count() > 0, "{role}");
        }
    }

    #[test]
    fn marking_read() {
        let mut center = NotificationCenter::for_role(Role::Household);
        let total = center.unread_count();
        center.mark_read(1);
        assert_eq!(center.unread_count(), total - 1);
        center.mark_read(1);
        assert_eq!(center.unread_count(), total - 1);
        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
    }
}
