use futures::executor::block_on;
use isukuhub_model::{
    ActionPhase, DashboardSession, Notice, Panel, ReportDraft, Role,
    SimulatedAction, Tab, ToastKind, ToastQueue,
    map::{CITY_CENTER, MapCapability, mock_grid_coordinate},
    records::household::{Bill, PaymentRecord},
    report::{IssueType, submit_report},
    role::{CollectorPanel, HouseholdPanel},
    simulate::{Immediate, run_action},
};
use jiff::{SignedDuration, Timestamp};

fn t0() -> Timestamp {
    Timestamp::from_second(1_730_000_000).unwrap()
}

#[test]
fn role_switch_lands_on_overview_with_a_single_toast() {
    let mut session = DashboardSession::new(Role::Household);
    let mut toasts = ToastQueue::default();
    session.select_tab(Tab::Payments);

    let notice = session.switch_role(Role::Collector);
    toasts.show(notice, t0());

    assert_eq!(session.panel(), Panel::Collector(CollectorPanel::Overview));
    assert_eq!(toasts.len(), 1);
    let toast = toasts.iter().next().unwrap();
    assert_eq!(toast.kind, ToastKind::Info);
    assert!(toast.text.contains("Collector"));

    // A tab left over from the previous role renders the overview.
    session.select_tab(Tab::Payments);
    assert_eq!(session.panel(), Panel::Collector(CollectorPanel::Overview));
}

#[test]
fn paying_a_bill_shows_one_toast_that_expires() {
    let delay = Immediate::default();
    let mut toasts = ToastQueue::default();
    let mut bill = Bill::current();
    let mut history = PaymentRecord::seed();
    let mut phases = Vec::new();

    let notice = block_on(run_action(
        &delay,
        &SimulatedAction::pay_bill(),
        |phase| phases.push(phase),
    ));
    assert_eq!(phases, [ActionPhase::Pending, ActionPhase::Completed]);
    assert!(bill.pay(&mut history, "Nov 2"));

    let id = toasts.show(notice.unwrap(), t0());
    assert_eq!(toasts.expire(t0() + SignedDuration::from_millis(3999)), 0);
    assert_eq!(toasts.expire(t0() + SignedDuration::from_millis(4000)), 1);
    assert!(!toasts.dismiss(id));
}

#[test]
fn household_report_from_the_mock_grid() {
    let capability = MapCapability::detect(false, false);
    assert!(capability.uses_mock());
    assert!(!capability.can_instantiate());

    let draft = ReportDraft {
        issue: Some(IssueType::MissedPickup),
        location: Some(mock_grid_coordinate(300.0, 100.0)),
        details: String::new(),
        photo: None,
    };
    let delay = Immediate::default();
    let submitted =
        block_on(submit_report(&draft, &delay, t0(), |_| {})).unwrap();

    let location = submitted.report.location;
    assert!(location.lng > CITY_CENTER.lng);
    assert!(location.lat > CITY_CENTER.lat);
    assert!(submitted.id.to_string().starts_with("RPT-2024-"));
    assert_eq!(delay.waits(), 1);
}

#[test]
fn household_menu_covers_every_household_panel() {
    let panels: Vec<_> = Role::Household
        .menu()
        .iter()
        .map(|item| Panel::resolve(Role::Household, item.tab))
        .collect();
    assert!(panels.contains(&Panel::Household(HouseholdPanel::Report)));
    assert!(panels.contains(&Panel::Household(HouseholdPanel::Settings)));
    assert_eq!(panels.len(), 7);
}

#[test]
fn error_notices_are_not_coalesced() {
    let mut toasts = ToastQueue::default();
    toasts.show(Notice::error("Offline"), t0());
    toasts.show(Notice::error("Offline"), t0());
    assert_eq!(toasts.len(), 2);
}
