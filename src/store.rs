//! EmployeeStore - observable, single-writer, in-memory employee collection.
//!
//! The store owns the collection exclusively; callers only ever receive
//! cloned snapshots. Every successful mutation emits exactly one snapshot to
//! all registered subscribers, synchronously and in mutation order. A new
//! subscriber immediately receives the current snapshot, then every change.
//!
//! ## Example
//!
//! ```
//! use perfdash::{EmployeeStore, EmployeeDraft};
//!
//! let store = EmployeeStore::new();
//! store.subscribe(|employees| println!("{} employees", employees.len()));
//!
//! let created = store.create(EmployeeDraft {
//!     name: "Ada Lovelace".into(),
//!     department: "Engineering".into(),
//!     position: "Analyst".into(),
//!     email: "ada@example.com".into(),
//!     phone: "+1-555-010-1842".into(),
//!     join_date: "2024-01-02".into(),
//!     performance: None,
//! }).unwrap();
//!
//! assert_eq!(store.get(&created.id).unwrap(), created);
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};

use tracing::{debug, warn};

use crate::employee::{seed, Employee, EmployeeDraft, EmployeeUpdate, PerformanceRecord};
use crate::error::StoreError;

/// Handle identifying a registered subscriber, for `unsubscribe`.
pub type SubscriberId = u64;

type Callback = Box<dyn Fn(&[Employee]) + Send + Sync>;

pub struct EmployeeStore {
    employees: RwLock<Vec<Employee>>,
    subscribers: RwLock<Vec<(SubscriberId, Callback)>>,
    // Serializes mutate+notify pairs so subscribers observe mutations in the
    // exact order they were issued. Callbacks must not call back into a
    // mutator; the store is single-writer by contract.
    emit_lock: Mutex<()>,
    next_employee: AtomicU64,
    next_subscriber: AtomicU64,
}

impl EmployeeStore {
    /// Creates a store seeded synchronously with the fixed sample dataset.
    pub fn new() -> Self {
        let employees = seed();
        let next_employee = AtomicU64::new(employees.len() as u64 + 1);
        EmployeeStore {
            employees: RwLock::new(employees),
            subscribers: RwLock::new(Vec::new()),
            emit_lock: Mutex::new(()),
            next_employee,
            next_subscriber: AtomicU64::new(1),
        }
    }

    /// Returns a snapshot of the current collection. Never fails: a poisoned
    /// lock still holds consistent data, so the snapshot is recovered from it.
    pub fn list(&self) -> Vec<Employee> {
        self.employees
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of employees in the collection.
    pub fn len(&self) -> usize {
        self.employees
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up one employee by id.
    pub fn get(&self, id: &str) -> Result<Employee, StoreError> {
        let employees = self
            .employees
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;

        employees
            .iter()
            .find(|employee| employee.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Returns the performance record for one employee. NotFound when the
    /// employee is absent or carries no record.
    pub fn performance(&self, id: &str) -> Result<PerformanceRecord, StoreError> {
        self.get(id)?
            .performance
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Appends a new employee under a freshly assigned unique id and emits
    /// the resulting snapshot. Returns the created record, id included.
    pub fn create(&self, draft: EmployeeDraft) -> Result<Employee, StoreError> {
        let _ordered = self
            .emit_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned("create"))?;

        let id = format!("EMP-{}", self.next_employee.fetch_add(1, Ordering::Relaxed));
        let employee = draft.into_employee(id);

        let snapshot = {
            let mut employees = self
                .employees
                .write()
                .map_err(|_| StoreError::LockPoisoned("create"))?;
            employees.push(employee.clone());
            employees.clone()
        };

        debug!(id = %employee.id, "employee created");
        self.notify(&snapshot);
        Ok(employee)
    }

    /// Merges the supplied fields over the employee with the given id,
    /// replaces it in place, and emits the resulting snapshot. The id is
    /// never altered by the merge. Fails with NotFound (and emits nothing)
    /// when the id is absent.
    pub fn update(&self, id: &str, update: &EmployeeUpdate) -> Result<Employee, StoreError> {
        let _ordered = self
            .emit_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        let (merged, snapshot) = {
            let mut employees = self
                .employees
                .write()
                .map_err(|_| StoreError::LockPoisoned("update"))?;

            let index = employees
                .iter()
                .position(|employee| employee.id == id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

            let merged = employees[index].merged(update);
            employees[index] = merged.clone();
            (merged, employees.clone())
        };

        debug!(id = %merged.id, "employee updated");
        self.notify(&snapshot);
        Ok(merged)
    }

    /// Removes the employee with the given id and emits the resulting
    /// snapshot. Fails with NotFound (and emits nothing) when absent.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _ordered = self
            .emit_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        let snapshot = {
            let mut employees = self
                .employees
                .write()
                .map_err(|_| StoreError::LockPoisoned("delete"))?;

            let index = employees
                .iter()
                .position(|employee| employee.id == id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

            employees.remove(index);
            employees.clone()
        };

        debug!(id, "employee deleted");
        self.notify(&snapshot);
        Ok(true)
    }

    /// Registers a subscriber. The callback is invoked immediately with the
    /// current snapshot, then once per subsequent mutation, in subscription
    /// order relative to other subscribers.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(&[Employee]) + Send + Sync + 'static,
    {
        // Registration and replay happen under the emit lock so the replayed
        // snapshot and the subsequent stream have no gap between them.
        let _ordered = self
            .emit_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let id = self.next_subscriber.fetch_add(1, Ordering::Relaxed);
        let snapshot = self.list();
        deliver(id, &callback, &snapshot);

        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns false when the id was not registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = subscribers.len();
        subscribers.retain(|(subscriber, _)| *subscriber != id);
        subscribers.len() != before
    }

    fn notify(&self, snapshot: &[Employee]) {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for (id, callback) in subscribers.iter() {
            deliver(*id, callback, snapshot);
        }
    }
}

/// Invokes one subscriber, isolating a panic so delivery to the remaining
/// subscribers is not interrupted.
fn deliver<F>(id: SubscriberId, callback: &F, snapshot: &[Employee])
where
    F: Fn(&[Employee]) + ?Sized,
{
    if catch_unwind(AssertUnwindSafe(|| callback(snapshot))).is_err() {
        warn!(subscriber = id, "subscriber panicked during snapshot delivery");
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}
