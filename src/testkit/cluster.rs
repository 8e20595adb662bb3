//! In-memory [`ClusterClient`] for testing.
//!
//! [`FakeCluster`] stores workloads by `(namespace, name)` and behaves like an
//! API server for get and create: missing objects are `NotFound`, name
//! collisions are `AlreadyExists`. On top of that, failures can be scripted
//! and created objects can be hidden from a number of subsequent gets to
//! mimic propagation delay.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::WorkloadObject;
use crate::error::ClusterError;
use crate::port::outbound::cluster::ClusterClient;

type Key = (String, String);

struct Stored {
    object: WorkloadObject,
    /// Gets that will still report `NotFound` for this object.
    hidden_for: usize,
}

#[derive(Default)]
struct State {
    objects: HashMap<Key, Stored>,
    propagation_lag: usize,
    next_get_failures: VecDeque<ClusterError>,
    sticky_get_failure: Option<ClusterError>,
    next_create_failures: VecDeque<ClusterError>,
    created: Vec<WorkloadObject>,
    get_calls: usize,
    create_calls: usize,
}

/// A fake cluster holding workloads in memory.
#[derive(Default)]
pub struct FakeCluster {
    state: Mutex<State>,
}

fn key(namespace: &str, name: &str) -> Key {
    (namespace.to_string(), name.to_string())
}

impl FakeCluster {
    /// An empty cluster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cluster with an existing workload.
    #[must_use]
    pub fn with_workload(self, object: WorkloadObject) -> Self {
        self.state.lock().objects.insert(
            key(&object.namespace, &object.name),
            Stored {
                object,
                hidden_for: 0,
            },
        );
        self
    }

    /// Hide each newly created workload from the next `gets` lookups.
    #[must_use]
    pub fn with_propagation_lag(self, gets: usize) -> Self {
        self.state.lock().propagation_lag = gets;
        self
    }

    /// Fail the next get with `err`. Queued failures are used in order.
    pub fn fail_next_get(&self, err: ClusterError) {
        self.state.lock().next_get_failures.push_back(err);
    }

    /// Fail every get with `err` until [`Self::clear_get_failure`].
    pub fn fail_all_gets(&self, err: ClusterError) {
        self.state.lock().sticky_get_failure = Some(err);
    }

    pub fn clear_get_failure(&self) {
        self.state.lock().sticky_get_failure = None;
    }

    /// Fail the next create with `err`. Queued failures are used in order.
    pub fn fail_next_create(&self, err: ClusterError) {
        self.state.lock().next_create_failures.push_back(err);
    }

    /// Remove a workload, as if it crashed or was deleted.
    pub fn delete(&self, namespace: &str, name: &str) -> bool {
        self.state
            .lock()
            .objects
            .remove(&key(namespace, name))
            .is_some()
    }

    /// Whether the workload is stored, visible or not.
    #[must_use]
    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.state.lock().objects.contains_key(&key(namespace, name))
    }

    /// Every object passed to a create call, successful or not.
    #[must_use]
    pub fn create_requests(&self) -> Vec<WorkloadObject> {
        self.state.lock().created.clone()
    }

    #[must_use]
    pub fn get_calls(&self) -> usize {
        self.state.lock().get_calls
    }

    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.state.lock().create_calls
    }
}

#[async_trait]
impl ClusterClient for FakeCluster {
    async fn get_by_name(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<WorkloadObject, ClusterError> {
        let mut state = self.state.lock();
        state.get_calls += 1;

        if let Some(err) = state.next_get_failures.pop_front() {
            return Err(err);
        }
        if let Some(err) = &state.sticky_get_failure {
            return Err(err.clone());
        }

        let not_found = || ClusterError::NotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
            message: format!("pods \"{name}\" not found"),
        };

        match state.objects.get_mut(&key(namespace, name)) {
            Some(stored) if stored.hidden_for > 0 => {
                stored.hidden_for -= 1;
                Err(not_found())
            }
            Some(stored) => Ok(stored.object.clone()),
            None => Err(not_found()),
        }
    }

    async fn create(
        &self,
        namespace: &str,
        workload: &WorkloadObject,
    ) -> Result<WorkloadObject, ClusterError> {
        let mut state = self.state.lock();
        state.create_calls += 1;
        state.created.push(workload.clone());

        if let Some(err) = state.next_create_failures.pop_front() {
            return Err(err);
        }

        let key = key(namespace, &workload.name);
        if state.objects.contains_key(&key) {
            return Err(ClusterError::AlreadyExists {
                namespace: namespace.to_string(),
                name: workload.name.clone(),
            });
        }

        let mut object = workload.clone();
        object.namespace = namespace.to_string();
        let hidden_for = state.propagation_lag;
        state.objects.insert(
            key,
            Stored {
                object: object.clone(),
                hidden_for,
            },
        );
        Ok(object)
    }
}
