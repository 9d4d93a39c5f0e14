use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::trace;

/// Gated actions. Each one keeps its own set of users on cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Card,
    Tarot,
    Message,
}

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task once `after` has elapsed, without blocking the caller.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, after: Duration, task: Task);
}

/// Schedules tasks on the current tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, after: Duration, task: Task) {
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            task();
        });
    }
}

type CooldownSets = HashMap<Action, HashSet<u64>>;

///
/// Tracks which users are on cooldown for which action.
///
/// A user is added as soon as a cooldown starts and removed by a task handed
/// to the scheduler. Queries only look at set membership, nothing checks
/// timestamps. Cloning shares the underlying sets.
///
#[derive(Clone)]
pub struct CooldownTracker {
    sets: Arc<Mutex<CooldownSets>>,
    scheduler: Arc<dyn Scheduler>,
}

impl CooldownTracker {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> CooldownTracker {
        CooldownTracker {
            sets: Arc::new(Mutex::new(HashMap::new())),
            scheduler,
        }
    }

    pub fn is_on_cooldown(&self, user_id: u64, action: Action) -> bool {
        lock(&self.sets)
            .get(&action)
            .map_or(false, |users| users.contains(&user_id))
    }

    pub fn start_cooldown(&self, user_id: u64, action: Action, duration: Duration) {
        lock(&self.sets).entry(action).or_default().insert(user_id);
        self.schedule_release(user_id, action, duration);
    }

    ///
    /// Start a cooldown unless one is already running.
    ///
    /// Returns false, and changes nothing, when the user is already on
    /// cooldown for `action`.
    ///
    pub fn try_start_cooldown(&self, user_id: u64, action: Action, duration: Duration) -> bool {
        let inserted = lock(&self.sets).entry(action).or_default().insert(user_id);
        if inserted {
            self.schedule_release(user_id, action, duration);
        }
        inserted
    }

    fn schedule_release(&self, user_id: u64, action: Action, duration: Duration) {
        trace!("User {} on {:?} cooldown for {:?}", user_id, action, duration);
        let sets = Arc::clone(&self.sets);
        self.scheduler.schedule(
            duration,
            Box::new(move || {
                if let Some(users) = lock(&sets).get_mut(&action) {
                    users.remove(&user_id);
                }
                trace!("User {} off {:?} cooldown", user_id, action);
            }),
        );
    }
}

fn lock(sets: &Mutex<CooldownSets>) -> MutexGuard<'_, CooldownSets> {
    // The sets stay consistent even if a holder panicked.
    sets.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keeps tasks until the test moves its clock past their deadline.
    #[derive(Default)]
    struct ManualScheduler {
        state: Mutex<(Duration, Vec<(Duration, Task)>)>,
    }

    impl ManualScheduler {
        fn advance(&self, by: Duration) {
            let due: Vec<Task> = {
                let mut state = self.state.lock().unwrap();
                state.0 += by;
                let now = state.0;
                let (due, pending): (Vec<_>, Vec<_>) =
                    state.1.drain(..).partition(|(at, _)| *at <= now);
                state.1 = pending;
                due.into_iter().map(|(_, task)| task).collect()
            };
            for task in due {
                task();
            }
        }

        fn pending(&self) -> usize {
            self.state.lock().unwrap().1.len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, after: Duration, task: Task) {
            let mut state = self.state.lock().unwrap();
            let at = state.0 + after;
            state.1.push((at, task));
        }
    }

    fn manual() -> (Arc<ManualScheduler>, CooldownTracker) {
        let scheduler = Arc::new(ManualScheduler::default());
        let tracker = CooldownTracker::new(scheduler.clone());
        (scheduler, tracker)
    }

    #[test]
    fn cooldown_expires_after_duration() {
        let (scheduler, tracker) = manual();
        tracker.start_cooldown(1, Action::Card, Duration::from_millis(100));
        assert!(tracker.is_on_cooldown(1, Action::Card));
        scheduler.advance(Duration::from_millis(99));
        assert!(tracker.is_on_cooldown(1, Action::Card));
        scheduler.advance(Duration::from_millis(1));
        assert!(!tracker.is_on_cooldown(1, Action::Card));
    }

    #[test]
    fn actions_are_independent() {
        let (scheduler, tracker) = manual();
        tracker.start_cooldown(1, Action::Card, Duration::from_millis(100));
        assert!(!tracker.is_on_cooldown(1, Action::Tarot));
        assert!(!tracker.is_on_cooldown(2, Action::Card));
        scheduler.advance(Duration::from_millis(100));
        assert!(!tracker.is_on_cooldown(1, Action::Tarot));
    }

    #[test]
    fn repeated_start_is_cleared_by_first_release() {
        let (scheduler, tracker) = manual();
        tracker.start_cooldown(1, Action::Tarot, Duration::from_millis(100));
        scheduler.advance(Duration::from_millis(50));
        tracker.start_cooldown(1, Action::Tarot, Duration::from_millis(100));
        assert_eq!(scheduler.pending(), 2);
        scheduler.advance(Duration::from_millis(50));
        assert!(!tracker.is_on_cooldown(1, Action::Tarot));
        // The stale release is harmless.
        scheduler.advance(Duration::from_millis(50));
        assert!(!tracker.is_on_cooldown(1, Action::Tarot));
    }

    #[test]
    fn try_start_refuses_while_on_cooldown() {
        let (scheduler, tracker) = manual();
        assert!(tracker.try_start_cooldown(1, Action::Message, Duration::from_secs(60)));
        assert!(!tracker.try_start_cooldown(1, Action::Message, Duration::from_secs(60)));
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(Duration::from_secs(60));
        assert!(tracker.try_start_cooldown(1, Action::Message, Duration::from_secs(60)));
    }

    #[test]
    fn clones_share_state() {
        let (_scheduler, tracker) = manual();
        let other = tracker.clone();
        tracker.start_cooldown(3, Action::Card, Duration::from_secs(1));
        assert!(other.is_on_cooldown(3, Action::Card));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_releases_after_sleep() {
        let tracker = CooldownTracker::new(Arc::new(TokioScheduler));
        tracker.start_cooldown(1, Action::Card, Duration::from_millis(100));
        assert!(tracker.is_on_cooldown(1, Action::Card));
        assert!(!tracker.is_on_cooldown(1, Action::Tarot));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(tracker.is_on_cooldown(1, Action::Card));
        tokio::time::sleep(Duration::from_millis(60)).await;
        tokio::task::yield_now().await;
        assert!(!tracker.is_on_cooldown(1, Action::Card));
        assert!(!tracker.is_on_cooldown(1, Action::Tarot));
    }
}
