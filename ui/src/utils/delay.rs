use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use isukuhub_model::Delay;

/// Real browser timer. Dropping the future clears the timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn wait(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(TimeoutFuture::new(ms))
    }
}
