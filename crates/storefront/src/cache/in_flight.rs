use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
};

/// Tracks submissions that have not finished yet.
///
/// A key can be held by one [`InFlightPermit`] at a time; the key is released
/// when the permit drops, whether the submission succeeded or not.
#[derive(Clone, Default)]
pub struct InFlightGuard {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self, key: impl Into<String>) -> Option<InFlightPermit> {
        let key = key.into();
        let mut keys = self.keys.lock().unwrap_or_else(PoisonError::into_inner);

        if !keys.insert(key.clone()) {
            return None;
        }

        Some(InFlightPermit {
            keys: self.keys.clone(),
            key,
        })
    }

    #[cfg(test)]
    fn is_held(&self, key: &str) -> bool {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }
}

pub struct InFlightPermit {
    keys: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_permit_drops() {
        let guard = InFlightGuard::new();

        let permit = guard.try_acquire("7:POST:/api/eater/orders");
        assert!(permit.is_some());
        assert!(guard.try_acquire("7:POST:/api/eater/orders").is_none());
        assert!(guard.try_acquire("8:POST:/api/eater/orders").is_some());

        drop(permit);
        assert!(!guard.is_held("7:POST:/api/eater/orders"));
        assert!(guard.try_acquire("7:POST:/api/eater/orders").is_some());
    }
}
