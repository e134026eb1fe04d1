use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A unique identifier for a particular election session, used to tell
/// sessions apart in the logs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SessionId(pub usize);

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "election{}", self.0)
    }
}

impl SessionId {
    /// Atomically get the next ID. This wraps around back to zero if you somehow exceed a usize.
    pub fn next() -> SessionId {
        static SESSION_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);
        SessionId(SESSION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let first = SessionId::next();
        let second = SessionId::next();
        assert_ne!(first, second);
        assert_eq!(first.to_string(), format!("election{}", first.0));
    }
}
