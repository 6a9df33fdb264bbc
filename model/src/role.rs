//! Dashboard personas, their sidebar menus and panel dispatch.
//!
//! A tab identifier is only meaningful within a role's menu. Anything the
//! menu does not list resolves to that role's overview panel, so dispatch
//! never fails.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::toast::Notice;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Household,
    Collector,
    Recycler,
    Official,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Household,
        Role::Collector,
        Role::Recycler,
        Role::Official,
    ];

    /// Roles offered on the signup form. Official accounts are provisioned
    /// by the city, not self-registered.
    pub const SELF_SERVICE: [Role; 3] =
        [Role::Household, Role::Collector, Role::Recycler];

    pub fn id(self) -> &'static str {
        match self {
            Role::Household => "household",
            Role::Collector => "collector",
            Role::Recycler => "recycler",
            Role::Official => "official",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.id() == id)
    }

    /// Short description shown under the role on the signup form.
    pub fn audience(self) -> &'static str {
        match self {
            Role::Household => "For residents",
            Role::Collector => "For waste companies",
            Role::Recycler => "For buying materials",
            Role::Official => "For city officials",
        }
    }

    pub fn search_placeholder(self) -> String {
        format!("Search {} resources...", self.id())
    }

    pub fn menu(self) -> &'static [MenuItem] {
        match self {
            Role::Household => HOUSEHOLD_MENU,
            Role::Collector => COLLECTOR_MENU,
            Role::Recycler => RECYCLER_MENU,
            Role::Official => OFFICIAL_MENU,
        }
    }

    pub fn offers(self, tab: Tab) -> bool {
        self.menu().iter().any(|item| item.tab == tab)
    }
}

/// Every tab identifier used by any role's sidebar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Settings,
    // household
    Schedule,
    Payments,
    Report,
    Guide,
    Support,
    // collector
    Tasks,
    Map,
    Fleet,
    Chat,
    History,
    Earnings,
    // recycler
    Requests,
    Inventory,
    Market,
    Logistics,
    Impact,
    // official
    Gis,
    Compliance,
    Analytics,
    Users,
    Policy,
    Reports,
}

impl Tab {
    const ALL: [Tab; 24] = [
        Tab::Overview,
        Tab::Settings,
        Tab::Schedule,
        Tab::Payments,
        Tab::Report,
        Tab::Guide,
        Tab::Support,
        Tab::Tasks,
        Tab::Map,
        Tab::Fleet,
        Tab::Chat,
        Tab::History,
        Tab::Earnings,
        Tab::Requests,
        Tab::Inventory,
        Tab::Market,
        Tab::Logistics,
        Tab::Impact,
        Tab::Gis,
        Tab::Compliance,
        Tab::Analytics,
        Tab::Users,
        Tab::Policy,
        Tab::Reports,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Settings => "settings",
            Tab::Schedule => "schedule",
            Tab::Payments => "payments",
            Tab::Report => "report",
            Tab::Guide => "guide",
            Tab::Support => "support",
            Tab::Tasks => "tasks",
            Tab::Map => "map",
            Tab::Fleet => "fleet",
            Tab::Chat => "chat",
            Tab::History => "history",
            Tab::Earnings => "earnings",
            Tab::Requests => "requests",
            Tab::Inventory => "inventory",
            Tab::Market => "market",
            Tab::Logistics => "logistics",
            Tab::Impact => "impact",
            Tab::Gis => "gis",
            Tab::Compliance => "compliance",
            Tab::Analytics => "analytics",
            Tab::Users => "users",
            Tab::Policy => "policy",
            Tab::Reports => "reports",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub tab: Tab,
    pub label: &'static str,
}

const fn item(tab: Tab, label: &'static str) -> MenuItem {
    MenuItem { tab, label }
}

const HOUSEHOLD_MENU: &[MenuItem] = &[
    item(Tab::Overview, "Overview"),
    item(Tab::Schedule, "My Schedule"),
    item(Tab::Payments, "Payments"),
    item(Tab::Report, "Report Issue"),
    item(Tab::Guide, "Waste Guide"),
    item(Tab::Support, "Help & Support"),
    item(Tab::Settings, "Settings"),
];

const COLLECTOR_MENU: &[MenuItem] = &[
    item(Tab::Overview, "Route Dashboard"),
    item(Tab::Tasks, "Daily Pickups"),
    item(Tab::Map, "Live Map"),
    item(Tab::Fleet, "Fleet Mgmt"),
    item(Tab::Chat, "Team Chat"),
    item(Tab::History, "History"),
    item(Tab::Earnings, "Earnings"),
    item(Tab::Settings, "Settings"),
];

const RECYCLER_MENU: &[MenuItem] = &[
    item(Tab::Overview, "Sourcing Hub"),
    item(Tab::Requests, "Pickup Requests"),
    item(Tab::Inventory, "Inventory"),
    item(Tab::Market, "Marketplace"),
    item(Tab::Logistics, "Logistics"),
    item(Tab::Impact, "Impact Report"),
    item(Tab::Settings, "Settings"),
];

const OFFICIAL_MENU: &[MenuItem] = &[
    item(Tab::Overview, "City Operations"),
    item(Tab::Gis, "GIS & Zoning"),
    item(Tab::Compliance, "Enforcement"),
    item(Tab::Analytics, "Analytics"),
    item(Tab::Users, "User Registry"),
    item(Tab::Policy, "Policy Docs"),
    item(Tab::Reports, "Reports"),
    item(Tab::Settings, "Settings"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseholdPanel {
    Overview,
    Schedule,
    Payments,
    Report,
    Guide,
    Support,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorPanel {
    Overview,
    Tasks,
    Map,
    Fleet,
    Chat,
    History,
    Earnings,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecyclerPanel {
    Overview,
    Requests,
    Inventory,
    Market,
    Logistics,
    Impact,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfficialPanel {
    Overview,
    Gis,
    Compliance,
    Analytics,
    Users,
    Policy,
    Reports,
    Settings,
}

/// The single panel a `(role, tab)` pair renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Household(HouseholdPanel),
    Collector(CollectorPanel),
    Recycler(RecyclerPanel),
    Official(OfficialPanel),
}

impl Panel {
    pub fn resolve(role: Role, tab: Tab) -> Self {
        match role {
            Role::Household => Panel::Household(match tab {
                Tab::Schedule => HouseholdPanel::Schedule,
                Tab::Payments => HouseholdPanel::Payments,
                Tab::Report => HouseholdPanel::Report,
                Tab::Guide => HouseholdPanel::Guide,
                Tab::Support => HouseholdPanel::Support,
                Tab::Settings => HouseholdPanel::Settings,
                _ => HouseholdPanel::Overview,
            }),
            Role::Collector => Panel::Collector(match tab {
                Tab::Tasks => CollectorPanel::Tasks,
                Tab::Map => CollectorPanel::Map,
                Tab::Fleet => CollectorPanel::Fleet,
                Tab::Chat => CollectorPanel::Chat,
                Tab::History => CollectorPanel::History,
                Tab::Earnings => CollectorPanel::Earnings,
                Tab::Settings => CollectorPanel::Settings,
                _ => CollectorPanel::Overview,
            }),
            Role::Recycler => Panel::Recycler(match tab {
                Tab::Requests => RecyclerPanel::Requests,
                Tab::Inventory => RecyclerPanel::Inventory,
                Tab::Market => RecyclerPanel::Market,
                Tab::Logistics => RecyclerPanel::Logistics,
                Tab::Impact => RecyclerPanel::Impact,
                Tab::Settings => RecyclerPanel::Settings,
                _ => RecyclerPanel::Overview,
            }),
            Role::Official => Panel::Official(match tab {
                Tab::Gis => OfficialPanel::Gis,
                Tab::Compliance => OfficialPanel::Compliance,
                Tab::Analytics => OfficialPanel::Analytics,
                Tab::Users => OfficialPanel::Users,
                Tab::Policy => OfficialPanel::Policy,
                Tab::Reports => OfficialPanel::Reports,
                Tab::Settings => OfficialPanel::Settings,
                _ => OfficialPanel::Overview,
            }),
        }
    }

    /// Resolve a raw identifier, e.g. one read from a link or a form value.
    pub fn resolve_id(role: Role, tab_id: &str) -> Self {
        Self::resolve(role, Tab::from_id(tab_id).unwrap_or_default())
    }
}

/// The `(role, active_tab)` pair owned by the dashboard controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardSession {
    role: Role,
    active_tab: Tab,
}

impl DashboardSession {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            active_tab: Tab::Overview,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn panel(&self) -> Panel {
        Panel::resolve(self.role, self.active_tab)
    }

    /// Stored as given; a tab the role does not offer renders the overview.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Switch persona. Always lands on the overview and returns the one
    /// notice the caller should show.
    pub fn switch_role(&mut self, role: Role) -> Notice {
        self.role = role;
        self.active_tab = Tab::Overview;
        tracing::debug!(role = %role, "switched dashboard role");
        Notice::info(format!("Switched to {role} view"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    #[test]
    fn every_menu_starts_with_overview_and_ends_with_settings() {
        for role in Role::ALL {
            let menu = role.menu();
            assert_eq!(menu.first().map(|i| i.tab), Some(Tab::Overview));
            assert_eq!(menu.last().map(|i| i.tab), Some(Tab::Settings));
        }
    }

    #[test]
    fn menu_tabs_resolve_to_their_own_panel() {
        for role in Role::ALL {
            for item in role.menu() {
                let panel = Panel::resolve(role, item.tab);
                if item.tab != Tab::Overview {
                    assert_ne!(
                        panel,
                        Panel::resolve(role, Tab::Overview),
                        "{role} {:?}",
                        item.tab
                    );
                }
            }
        }
    }

    #[test]
    fn foreign_and_unknown_tabs_fall_back_to_overview() {
        assert_eq!(
            Panel::resolve(Role::Household, Tab::Fleet),
            Panel::Household(HouseholdPanel::Overview)
        );
        assert_eq!(
            Panel::resolve(Role::Official, Tab::Earnings),
            Panel::Official(OfficialPanel::Overview)
        );
        assert_eq!(
            Panel::resolve_id(Role::Collector, "does-not-exist"),
            Panel::Collector(CollectorPanel::Overview)
        );
        assert_eq!(
            Panel::resolve_id(Role::Recycler, "inventory"),
            Panel::Recycler(RecyclerPanel::Inventory)
        );
    }

    #[test]
    fn switching_role_resets_tab_and_yields_one_info_notice() {
        let mut session = DashboardSession::new(Role::Household);
        session.select_tab(Tab::Payments);
        assert_eq!(session.panel(), Panel::Household(HouseholdPanel::Payments));

        let notice = session.switch_role(Role::Recycler);
        assert_eq!(session.role(), Role::Recycler);
        assert_eq!(session.active_tab(), Tab::Overview);
        assert_eq!(notice.kind, ToastKind::Info);
        assert!(notice.text.contains("Recycler"));
    }

    #[test]
    fn ids_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Role::from_id("mayor"), None);
    }
}
