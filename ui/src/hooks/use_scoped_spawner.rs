use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use yew::prelude::*;

#[derive(Default)]
struct LiveTasks {
    next_id: u64,
    handles: Vec<(u64, AbortHandle)>,
}

/// Spawns futures that are aborted when the owning component unmounts.
///
/// Aborting drops the future, which clears any pending browser timer and
/// cancels any in-flight fetch inside it. Tasks leave the list as soon as
/// they finish, aborted or not.
#[derive(Clone, Default)]
pub struct ScopedSpawner {
    tasks: Rc<RefCell<LiveTasks>>,
}

impl PartialEq for ScopedSpawner {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl ScopedSpawner {
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        yew::platform::spawn_local(self.scoped(task));
    }

    /// Register `task` and wrap it so it can be aborted and unregisters
    /// itself when done.
    fn scoped(
        &self,
        task: impl Future<Output = ()> + 'static,
    ) -> impl Future<Output = ()> + 'static {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut tasks = self.tasks.borrow_mut();
            let id = tasks.next_id;
            tasks.next_id += 1;
            tasks.handles.push((id, handle));
            id
        };
        let tasks = Rc::downgrade(&self.tasks);
        async move {
            if Abortable::new(task, registration).await.is_err() {
                tracing::debug!("task cancelled on unmount");
            }
            if let Some(tasks) = tasks.upgrade() {
                tasks.borrow_mut().handles.retain(|(live, _)| *live != id);
            }
        }
    }

    fn abort_all(&self) {
        for (_, handle) in self.tasks.borrow_mut().handles.drain(..) {
            handle.abort();
        }
    }

    #[cfg(test)]
    fn live(&self) -> usize {
        self.tasks.borrow().handles.len()
    }
}

#[hook]
pub fn use_scoped_spawner() -> ScopedSpawner {
    let spawner = (*use_state(ScopedSpawner::default)).clone();
    {
        let spawner = spawner.clone();
        use_effect_with((), move |_| move || spawner.abort_all());
    }
    spawner
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;
    use futures::future::pending;

    use super::*;

    #[test]
    fn finished_tasks_are_forgotten() {
        let spawner = ScopedSpawner::default();
        let ran = Rc::new(Cell::new(0));
        let tasks: Vec<_> = (0..3)
            .map(|_| {
                let ran = ran.clone();
                spawner.scoped(async move { ran.set(ran.get() + 1) })
            })
            .collect();
        assert_eq!(spawner.live(), 3);

        for task in tasks {
            block_on(task);
        }
        assert_eq!(ran.get(), 3);
        assert_eq!(spawner.live(), 0);
    }

    #[test]
    fn aborted_tasks_never_run_their_body() {
        let spawner = ScopedSpawner::default();
        let ran = Rc::new(Cell::new(false));
        let task = {
            let ran = ran.clone();
            spawner.scoped(async move {
                pending::<()>().await;
                ran.set(true);
            })
        };

        spawner.abort_all();
        assert_eq!(spawner.live(), 0);
        block_on(task);
        assert!(!ran.get());
    }

    #[test]
    fn only_the_finished_task_leaves() {
        let spawner = ScopedSpawner::default();
        let _waiting = spawner.scoped(pending());
        let quick = spawner.scoped(async {});
        assert_eq!(spawner.live(), 2);

        block_on(quick);
        assert_eq!(spawner.live(), 1);
    }
}
