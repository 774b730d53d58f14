// src/session/store.rs
//
// Single owner of the session's form state.
//
// - Every mutation goes through `update`, which recomputes the derived
//   view synchronously before returning. There is no window in which
//   `derived()` is stale.
// - Subscribers are called after each recompute, in subscription order.

use std::fmt;

use crate::config::options::EngineConfig;
use super::engine::{ derive, DerivedView };
use super::form::SessionForm;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&DerivedView)>;

pub struct SessionStore {
    config: EngineConfig,
    form: SessionForm,
    derived: DerivedView,
    revision: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_sub: u64,
}

impl SessionStore {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_form(config, SessionForm::default())
    }

    pub fn with_form(config: EngineConfig, form: SessionForm) -> Self {
        let derived = derive(&form, &config);
        Self {
            config,
            form,
            derived,
            revision: 0,
            subscribers: Vec::new(),
            next_sub: 0,
        }
    }

    #[inline] pub fn form(&self) -> &SessionForm { &self.form }
    #[inline] pub fn derived(&self) -> &DerivedView { &self.derived }
    #[inline] pub fn config(&self) -> &EngineConfig { &self.config }

    /// Bumped once per `update`.
    #[inline] pub fn revision(&self) -> u64 { self.revision }

    /// Apply a mutation and recompute. Returns the mutation's own result.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut SessionForm) -> R) -> R {
        let out = f(&mut self.form);
        self.recompute();
        out
    }

    fn recompute(&mut self) {
        self.derived = derive(&self.form, &self.config);
        self.revision += 1;
        let view = self.derived;
        for (_, sub) in self.subscribers.iter_mut() {
            sub(&view);
        }
    }

    pub fn subscribe(&mut self, f: impl FnMut(&DerivedView) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_sub);
        self.next_sub += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("form", &self.form)
            .field("derived", &self.derived)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
