use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use super::use_scoped_spawner;

/// `true` for the first `ms` milliseconds after mount, so cards can show
/// their skeletons.
#[hook]
pub fn use_initial_loading(ms: u32) -> bool {
    let loading = use_state(|| true);
    let spawner = use_scoped_spawner();

    {
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawner.spawn(async move {
                TimeoutFuture::new(ms).await;
                loading.set(false);
            });
        });
    }

    *loading
}
