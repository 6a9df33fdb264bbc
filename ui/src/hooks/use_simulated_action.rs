use isukuhub_model::simulate::run_action;
use isukuhub_model::{ActionPhase, SimulatedAction};
use yew::prelude::*;

use super::use_scoped_spawner;
use crate::contexts::toast::use_toast;
use crate::utils::TimerDelay;

/// Phase of one fake server call plus a way to start it.
#[derive(Clone, PartialEq)]
pub struct SimulatedActionHandle {
    pub phase: ActionPhase,
    start: Callback<(SimulatedAction, Callback<()>)>,
}

impl SimulatedActionHandle {
    pub fn is_pending(&self) -> bool {
        self.phase.is_pending()
    }

    pub fn is_completed(&self) -> bool {
        self.phase == ActionPhase::Completed
    }

    pub fn run(&self, action: SimulatedAction) {
        self.start.emit((action, Callback::noop()));
    }

    /// Run `action`, then call `on_done` after its notice is shown.
    pub fn run_then(&self, action: SimulatedAction, on_done: Callback<()>) {
        self.start.emit((action, on_done));
    }
}

/// Drive a [`SimulatedAction`] on a real timer.
///
/// A second trigger while pending is ignored. The timer is cancelled if the
/// component unmounts, in which case no toast appears.
#[hook]
pub fn use_simulated_action() -> SimulatedActionHandle {
    let phase = use_state(ActionPhase::default);
    let toasts = use_toast();
    let spawner = use_scoped_spawner();

    let start = {
        let phase = phase.clone();
        Callback::from(
            move |(action, on_done): (SimulatedAction, Callback<()>)| {
                if phase.is_pending() {
                    return;
                }
                let phase = phase.clone();
                let toasts = toasts.clone();
                spawner.spawn(async move {
                    let notice =
                        run_action(&TimerDelay, &action, |p| phase.set(p))
                            .await;
                    if let Some(notice) = notice {
                        toasts.show(notice);
                    }
                    on_done.emit(());
                });
            },
        )
    };

    SimulatedActionHandle {
        phase: *phase,
        start,
    }
}
