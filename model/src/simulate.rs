//! Fake latency for actions that would hit a server in a real product.
//!
//! Every simulated action goes `Idle -> Pending -> Completed`. The wait is
//! behind [`Delay`] so the browser can use a real timer and tests can
//! complete instantly.

use std::cell::Cell;

use futures::future::{self, LocalBoxFuture};

use crate::toast::Notice;

/// Something that can sleep for a number of milliseconds.
pub trait Delay {
    fn wait(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Resolves every wait at once and counts how many were requested.
#[derive(Debug, Default)]
pub struct Immediate {
    waits: Cell<usize>,
    total_ms: Cell<u64>,
}

impl Immediate {
    pub fn waits(&self) -> usize {
        self.waits.get()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms.get()
    }
}

impl Delay for Immediate {
    fn wait(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        self.waits.set(self.waits.get() + 1);
        self.total_ms.set(self.total_ms.get() + u64::from(ms));
        Box::pin(future::ready(()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionPhase {
    #[default]
    Idle,
    Pending,
    Completed,
}

impl ActionPhase {
    pub fn is_pending(self) -> bool {
        self == ActionPhase::Pending
    }

    /// Every trigger is disabled while its action is in flight.
    pub fn control_disabled(self) -> bool {
        self.is_pending()
    }
}

pub const PAY_BILL_MS: u32 = 2000;
pub const EXTRA_PICKUP_MS: u32 = 1200;
pub const APPLY_JOB_MS: u32 = 1500;
pub const CASH_OUT_MS: u32 = 2000;
pub const SUBSCRIBE_MS: u32 = 1000;
pub const SUBMIT_REPORT_MS: u32 = 1500;
pub const SAVE_SETTINGS_MS: u32 = 800;
pub const CONTACT_MS: u32 = 1500;
pub const LOGIN_MS: u32 = 1500;
pub const SIGNUP_MS: u32 = 1500;
pub const UPDATE_STOCK_MS: u32 = 1000;
pub const START_CHAT_MS: u32 = 800;

/// A fixed delay followed by an optional completion toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedAction {
    pub name: &'static str,
    pub delay_ms: u32,
    pub completion: Option<Notice>,
}

impl SimulatedAction {
    pub fn new(name: &'static str, delay_ms: u32) -> Self {
        Self {
            name,
            delay_ms,
            completion: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.completion = Some(notice);
        self
    }

    pub fn pay_bill() -> Self {
        Self::new("pay_bill", PAY_BILL_MS).with_notice(Notice::success(
            "Payment successful! Receipt sent via SMS.",
        ))
    }

    pub fn extra_pickup() -> Self {
        Self::new("extra_pickup", EXTRA_PICKUP_MS).with_notice(Notice::success(
            "Extra pickup requested. A collector will confirm shortly.",
        ))
    }

    pub fn apply_job(title: &str) -> Self {
        Self::new("apply_job", APPLY_JOB_MS).with_notice(Notice::success(format!(
            "Application for {title} received! We'll be in touch."
        )))
    }

    pub fn cash_out() -> Self {
        Self::new("cash_out", CASH_OUT_MS).with_notice(Notice::success(
            "Withdrawal initiated. Funds will arrive via Mobile Money.",
        ))
    }

    pub fn subscribe_newsletter() -> Self {
        Self::new("subscribe_newsletter", SUBSCRIBE_MS)
            .with_notice(Notice::success("Subscribed! Check your inbox."))
    }

    pub fn price_alerts() -> Self {
        Self::new("price_alerts", SUBSCRIBE_MS)
            .with_notice(Notice::info("Price alerts enabled for your materials."))
    }

    pub fn submit_report(id: impl std::fmt::Display) -> Self {
        Self::new("submit_report", SUBMIT_REPORT_MS).with_notice(Notice::success(
            format!("Report #{id} submitted. Thank you for keeping Kigali clean!"),
        ))
    }

    pub fn save_settings() -> Self {
        Self::new("save_settings", SAVE_SETTINGS_MS)
            .with_notice(Notice::success("Settings saved."))
    }

    pub fn send_contact() -> Self {
        Self::new("send_contact", CONTACT_MS).with_notice(Notice::success(
            "Message sent! Our team will respond within 24 hours.",
        ))
    }

    /// Login and signup navigate on completion instead of toasting.
    pub fn login() -> Self {
        Self::new("login", LOGIN_MS)
    }

    pub fn signup() -> Self {
        Self::new("signup", SIGNUP_MS)
    }

    pub fn update_stock(material: &str) -> Self {
        Self::new("update_stock", UPDATE_STOCK_MS)
            .with_notice(Notice::success(format!("{material} stock updated.")))
    }

    pub fn start_chat() -> Self {
        Self::new("start_chat", START_CHAT_MS)
            .with_notice(Notice::info("Connecting you to a support agent..."))
    }
}

/// Drive one action to completion, reporting each phase change.
///
/// Returns the completion notice, if any. Dropping the returned future
/// before the delay elapses leaves the phase at `Pending` and produces no
/// notice; the UI relies on that to cancel on unmount.
pub async fn run_action(
    delay: &impl Delay,
    action: &SimulatedAction,
    mut on_phase: impl FnMut(ActionPhase),
) -> Option<Notice> {
    tracing::debug!(
        action = action.name,
        delay_ms = action.delay_ms,
        "simulated action started"
    );
    on_phase(ActionPhase::Pending);
    delay.wait(action.delay_ms).await;
    on_phase(ActionPhase::Completed);
    action.completion.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn action_passes_through_pending_before_completed() {
        let delay = Immediate::default();
        let mut phases = Vec::new();
        let notice = block_on(run_action(
            &delay,
            &SimulatedAction::pay_bill(),
            |phase| phases.push(phase),
        ));

        assert_eq!(phases, [ActionPhase::Pending, ActionPhase::Completed]);
        assert!(ActionPhase::Pending.control_disabled());
        assert!(!ActionPhase::Completed.control_disabled());
        assert_eq!(delay.waits(), 1);
        assert_eq!(delay.total_ms(), u64::from(PAY_BILL_MS));
        assert!(notice.is_some_and(|n| n.text.starts_with("Payment successful")));
    }

    #[test]
    fn silent_actions_complete_without_a_notice() {
        let delay = Immediate::default();
        let notice = block_on(run_action(&delay, &SimulatedAction::login(), |_| {}));
        assert_eq!(notice, None);
    }

    #[test]
    fn delays_stay_in_the_simulated_range() {
        let actions = [
            SimulatedAction::pay_bill(),
            SimulatedAction::extra_pickup(),
            SimulatedAction::apply_job("Driver"),
            SimulatedAction::cash_out(),
            SimulatedAction::subscribe_newsletter(),
            SimulatedAction::price_alerts(),
            SimulatedAction::submit_report("RPT-2024-089"),
            SimulatedAction::save_settings(),
            SimulatedAction::send_contact(),
            SimulatedAction::login(),
            SimulatedAction::signup(),
            SimulatedAction::update_stock("PET"),
            SimulatedAction::start_chat(),
        ];
        for action in actions {
            assert!((800..=2000).contains(&action.delay_ms), "{}", action.name);
        }
    }
}
