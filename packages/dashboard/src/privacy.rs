//! Privacy notice shown on the landing page until the visitor opts out

use std::collections::HashMap;

use tracing::debug;

pub const PRIVACY_POLICY_KEY: &str = "show-privacy-policy";

/// Key/value storage that outlives the page, e.g. `localStorage`
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug)]
pub struct PrivacyNotice<S: PreferenceStore> {
    store: S,
    dismissed: bool,
}

impl<S: PreferenceStore> PrivacyNotice<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            dismissed: false,
        }
    }

    pub fn should_show(&self) -> bool {
        !self.dismissed && self.store.get(PRIVACY_POLICY_KEY).as_deref() != Some("false")
    }

    /// Hide for the rest of this page view only
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn suppress_permanently(&mut self) {
        self.dismissed = true;
        self.store.set(PRIVACY_POLICY_KEY, "false");
        debug!(key = PRIVACY_POLICY_KEY, "Privacy notice suppressed");
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_by_default() {
        let notice = PrivacyNotice::new(MemoryStore::new());
        assert!(notice.should_show());
    }

    #[test]
    fn test_dismiss_is_not_persisted() {
        let mut notice = PrivacyNotice::new(MemoryStore::new());
        notice.dismiss();
        assert!(!notice.should_show());

        let notice = PrivacyNotice::new(notice.into_store());
        assert!(notice.should_show());
    }

    #[test]
    fn test_suppress_permanently() {
        let mut notice = PrivacyNotice::new(MemoryStore::new());
        notice.suppress_permanently();
        assert_eq!(notice.store().get(PRIVACY_POLICY_KEY).as_deref(), Some("false"));

        let notice = PrivacyNotice::new(notice.into_store());
        assert!(!notice.should_show());
    }

    #[test]
    fn test_other_values_still_show() {
        let mut store = MemoryStore::new();
        store.set(PRIVACY_POLICY_KEY, "true");
        assert!(PrivacyNotice::new(store).should_show());
    }
}
