use derive_more::Display;
use jiff::{SignedDuration, Timestamp};

/// How long a toast stays up before it removes itself.
pub const TOAST_TIMEOUT_MS: u32 = 4000;

/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A request to show a toast, produced by domain code that has no access to
/// the queue itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, text)
    }
}

/// Creation time in milliseconds, with a sequence number to keep toasts
/// created within the same millisecond distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{created_ms}.{seq}")]
pub struct ToastId {
    created_ms: i64,
    seq: u32,
}

/// When a toast shown at `shown_at` is due to go.
///
/// A sweep scheduled for a toast should pass this value to
/// [`ToastQueue::expire`] rather than reading the clock again: timers and
/// the wall clock drift apart, and a sweep that lands a millisecond early
/// would otherwise leave the toast up for good.
pub fn expiry_for(shown_at: Timestamp) -> Timestamp {
    shown_at + SignedDuration::from_millis(i64::from(TOAST_TIMEOUT_MS))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub text: String,
    pub expires_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_seq: u32,
}

impl ToastQueue {
    /// Append a toast and return its id. The caller is responsible for
    /// scheduling `dismiss(id)`, or `expire(expiry_for(now))`, once
    /// [`TOAST_TIMEOUT_MS`] has passed.
    pub fn show(&mut self, notice: Notice, now: Timestamp) -> ToastId {
        let id = ToastId {
            created_ms: now.as_millisecond(),
            seq: self.next_seq,
        };
        self.next_seq = self.next_seq.wrapping_add(1);

        self.toasts.push(Toast {
            id,
            kind: notice.kind,
            text: notice.text,
            expires_at: expiry_for(now),
        });

        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }

        id
    }

    /// Remove a toast. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Remove every toast whose timeout has elapsed at `now`.
    pub fn expire(&mut self, now: Timestamp) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before - self.toasts.len()
    }

    /// Toasts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: i64) -> Timestamp {
        Timestamp::from_millisecond(ms).unwrap()
    }

    #[test]
    fn toast_expires_exactly_at_timeout() {
        let mut queue = ToastQueue::default();
        let t = 1_700_000_000_000;
        queue.show(Notice::success("Paid"), at(t));

        assert_eq!(queue.expire(at(t + 3999)), 0);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.expire(at(t + 4000)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn sweep_at_the_shown_deadline_always_removes_the_toast() {
        let mut queue = ToastQueue::default();
        let shown_at = at(1_700_000_000_000);
        queue.show(Notice::info("Saved"), shown_at);

        // A sweep that reads the clock early finds nothing due...
        assert_eq!(queue.expire(at(1_700_000_003_999)), 0);
        // ...but the deadline captured at show time is exact.
        assert_eq!(queue.expire(expiry_for(shown_at)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn manual_dismiss_makes_scheduled_removal_a_no_op() {
        let mut queue = ToastQueue::default();
        let t = 1_700_000_000_000;
        let first = queue.show(Notice::info("one"), at(t));
        let second = queue.show(Notice::info("two"), at(t + 10));

        assert!(queue.dismiss(first));
        assert_eq!(queue.len(), 1);

        // The timer for `first` still fires later.
        assert!(!queue.dismiss(first));
        assert_eq!(queue.iter().map(|t| t.id).collect::<Vec<_>>(), [second]);
    }

    #[test]
    fn same_millisecond_toasts_keep_insertion_order() {
        let mut queue = ToastQueue::default();
        let now = at(42);
        let ids: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|text| queue.show(Notice::error(text), now))
            .collect();

        assert_eq!(ids.len(), 3);
        assert_ne!(ids[0], ids[1]);
        let texts: Vec<_> = queue.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_text_is_not_coalesced() {
        let mut queue = ToastQueue::default();
        queue.show(Notice::info("same"), at(0));
        queue.show(Notice::info("same"), at(1));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn oldest_toast_is_evicted_past_the_cap() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_VISIBLE_TOASTS as i64 + 2) {
            queue.show(Notice::info(format!("toast {i}")), at(i));
        }
        assert_eq!(queue.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.iter().next().map(|t| t.text.as_str()), Some("toast 2"));
    }
}
