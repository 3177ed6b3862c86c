//! Telemetry Store
//!
//! Bounded in-memory buffer of fired rule events, newest first, plus an
//! enabled flag and a session id. One instance is created at startup and
//! shared; tests build their own.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use ruletap_domain::RuleEvent;
use ruletap_domain::constants::TELEMETRY_BUFFER_CAPACITY;
use uuid::Uuid;

use crate::listeners::{ListenerSet, Subscription};

/// What changed in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryChange {
    /// An event was prepended
    EventAdded { rule_id: String },
    /// The buffer was emptied
    Cleared,
    /// Capture was switched on or off
    EnabledChanged(bool),
    /// Store restored to its constructor state
    Reset,
}

#[derive(Debug)]
struct State {
    events: VecDeque<RuleEvent>,
    enabled: bool,
    session_id: Uuid,
}

/// Process-wide event buffer with subscribe/notify
#[derive(Debug)]
pub struct TelemetryStore {
    capacity: usize,
    initially_enabled: bool,
    state: RwLock<State>,
    listeners: ListenerSet<TelemetryChange>,
}

impl TelemetryStore {
    /// Enabled store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(TELEMETRY_BUFFER_CAPACITY, true)
    }

    /// Store with a fixed capacity; a capacity of 0 is raised to 1
    pub fn with_capacity(capacity: usize, enabled: bool) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            initially_enabled: enabled,
            state: RwLock::new(State {
                events: VecDeque::with_capacity(capacity),
                enabled,
                session_id: Uuid::new_v4(),
            }),
            listeners: ListenerSet::new(),
        }
    }

    /// Prepend an event, evicting the oldest beyond capacity
    ///
    /// Returns `false` (and changes nothing) when capture is disabled.
    pub fn add_event(&self, event: RuleEvent) -> bool {
        let rule_id = event.rule_id.clone();
        {
            let mut state = self.write();
            if !state.enabled {
                return false;
            }
            state.events.push_front(event);
            state.events.truncate(self.capacity);
        }
        self.listeners.notify(&TelemetryChange::EventAdded { rule_id });
        true
    }

    /// Current buffer, newest first
    pub fn events(&self) -> Vec<RuleEvent> {
        self.read().events.iter().cloned().collect()
    }

    pub fn event_count(&self) -> usize {
        self.read().events.len()
    }

    /// Empty the buffer; the enabled flag is left alone
    pub fn clear_events(&self) {
        self.write().events.clear();
        self.listeners.notify(&TelemetryChange::Cleared);
    }

    /// Switch capture on or off without touching captured state
    pub fn set_enabled(&self, enabled: bool) {
        let changed = {
            let mut state = self.write();
            let changed = state.enabled != enabled;
            state.enabled = enabled;
            changed
        };
        if changed {
            tracing::debug!(enabled, "Telemetry capture toggled");
            self.listeners.notify(&TelemetryChange::EnabledChanged(enabled));
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.read().enabled
    }

    pub fn session_id(&self) -> Uuid {
        self.read().session_id
    }

    /// Events, enabled flag and session id read under one lock
    pub fn view_parts(&self) -> (Vec<RuleEvent>, bool, Uuid) {
        let state = self.read();
        (state.events.iter().cloned().collect(), state.enabled, state.session_id)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Restore constructor state with a fresh session id
    pub fn reset(&self) {
        {
            let mut state = self.write();
            state.events.clear();
            state.enabled = self.initially_enabled;
            state.session_id = Uuid::new_v4();
        }
        self.listeners.notify(&TelemetryChange::Reset);
    }

    /// Register a change listener
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&TelemetryChange) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}
