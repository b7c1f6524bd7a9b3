//! Integration tests for the observable employee store.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use perfdash::{Employee, EmployeeDraft, EmployeeStore, EmployeeUpdate, StoreError};

fn draft(name: &str, department: &str) -> EmployeeDraft {
    EmployeeDraft {
        name: name.to_string(),
        department: department.to_string(),
        position: "Developer".to_string(),
        email: format!(
            "{}@toppersedge.com",
            name.to_lowercase().replace(' ', ".")
        ),
        phone: "+1-234-567-8999".to_string(),
        join_date: "2025-01-10".to_string(),
        performance: None,
    }
}

fn assert_unique_ids(employees: &[Employee]) {
    let ids: HashSet<&str> = employees.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), employees.len());
}

/// Collects every delivered snapshot for later inspection.
fn collector(store: &EmployeeStore) -> Arc<Mutex<Vec<Vec<Employee>>>> {
    let received: Arc<Mutex<Vec<Vec<Employee>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.to_vec()));
    received
}

#[test]
fn create_then_get_returns_the_created_record() {
    let store = EmployeeStore::new();
    let created = store.create(draft("Grace Hopper", "Engineering")).unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(store.get(&created.id).unwrap(), created);
}

#[test]
fn ids_stay_unique_across_mutation_sequences() {
    let store = EmployeeStore::new();

    for i in 0..10 {
        store
            .create(draft(&format!("Hire {}", i), "Engineering"))
            .unwrap();
        assert_unique_ids(&store.list());
    }

    store.delete("EMP-3").unwrap();
    store.delete("EMP-7").unwrap();
    assert_unique_ids(&store.list());

    store.create(draft("Replacement", "Design")).unwrap();
    assert_unique_ids(&store.list());
}

#[test]
fn update_merges_and_preserves_identity() {
    let store = EmployeeStore::new();
    let before = store.get("EMP-2").unwrap();

    let merged = store
        .update(
            "EMP-2",
            &EmployeeUpdate {
                position: Some("Director of Product".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(merged.id, "EMP-2");
    assert_eq!(merged.position, "Director of Product");
    assert_eq!(merged.name, before.name);
    assert_eq!(merged.performance, before.performance);
    assert_eq!(store.get("EMP-2").unwrap(), merged);
}

#[test]
fn created_performance_record_is_stamped_with_the_new_id() {
    let store = EmployeeStore::new();
    let mut input = draft("Alan Turing", "Engineering");
    let mut record = store.get("EMP-1").unwrap().performance.unwrap();
    record.employee_id = "someone-else".to_string();
    input.performance = Some(record);

    let created = store.create(input).unwrap();
    let performance = created.performance.unwrap();
    assert_eq!(performance.employee_id, created.id);
    assert_eq!(store.performance(&created.id).unwrap().employee_id, created.id);
}

#[test]
fn missing_ids_surface_not_found_and_leave_state_untouched() {
    let store = EmployeeStore::new();
    let received = collector(&store);
    let before = store.list();

    let update = EmployeeUpdate {
        name: Some("Nobody".to_string()),
        ..Default::default()
    };
    assert_eq!(
        store.update("EMP-404", &update),
        Err(StoreError::NotFound("EMP-404".to_string()))
    );
    assert_eq!(
        store.delete("EMP-404"),
        Err(StoreError::NotFound("EMP-404".to_string()))
    );
    assert_eq!(
        store.get("EMP-404"),
        Err(StoreError::NotFound("EMP-404".to_string()))
    );

    assert_eq!(store.list(), before);
    // Only the replay snapshot was delivered; failed mutations emit nothing.
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[test]
fn performance_lookup_fails_when_no_record_exists() {
    let store = EmployeeStore::new();
    let created = store.create(draft("No Review Yet", "Product")).unwrap();

    assert_eq!(
        store.performance(&created.id),
        Err(StoreError::NotFound(created.id.clone()))
    );
}

#[test]
fn delete_removes_and_reports_success() {
    let store = EmployeeStore::new();
    assert_eq!(store.delete("EMP-4"), Ok(true));
    assert_eq!(
        store.get("EMP-4"),
        Err(StoreError::NotFound("EMP-4".to_string()))
    );
    assert_eq!(store.len(), 4);
}

#[test]
fn subscriber_immediately_receives_the_current_snapshot() {
    let store = EmployeeStore::new();
    let received = collector(&store);

    let snapshots = received.lock().unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0], store.list());
}

#[test]
fn late_subscriber_sees_all_prior_mutations() {
    let store = EmployeeStore::new();

    let a = store.create(draft("Hire A", "Engineering")).unwrap();
    let b = store.create(draft("Hire B", "Design")).unwrap();
    store.delete("EMP-1").unwrap();

    let received = collector(&store);
    let snapshots = received.lock().unwrap();
    assert_eq!(snapshots.len(), 1);

    let first = &snapshots[0];
    assert_eq!(first.len(), 6);
    assert!(first.iter().all(|e| e.id != "EMP-1"));
    assert!(first.iter().any(|e| e.id == a.id));
    assert!(first.iter().any(|e| e.id == b.id));
}

#[test]
fn emissions_arrive_once_per_mutation_in_issue_order() {
    let store = EmployeeStore::new();
    let received = collector(&store);

    let created = store.create(draft("Hire A", "Engineering")).unwrap();
    store
        .update(
            &created.id,
            &EmployeeUpdate {
                department: Some("Product".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    store.delete(&created.id).unwrap();

    let snapshots = received.lock().unwrap();
    let lens: Vec<usize> = snapshots.iter().map(|s| s.len()).collect();
    assert_eq!(lens, vec![5, 6, 6, 5]);
    assert_eq!(
        snapshots[2].iter().find(|e| e.id == created.id).unwrap().department,
        "Product"
    );
}

#[test]
fn retained_snapshots_never_observe_later_mutations() {
    let store = EmployeeStore::new();
    let retained = store.list();

    store.delete("EMP-1").unwrap();
    store
        .update(
            "EMP-2",
            &EmployeeUpdate {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(retained.len(), 5);
    assert_eq!(retained[1].name, "Jane Smith");
}

#[test]
fn panicking_subscriber_does_not_block_the_others() {
    let store = EmployeeStore::new();

    store.subscribe(|_| panic!("broken subscriber"));
    let received = collector(&store);

    store.create(draft("Hire A", "Engineering")).unwrap();

    // Replay plus one mutation made it through despite the earlier panic.
    assert_eq!(received.lock().unwrap().len(), 2);
}

#[test]
fn unsubscribed_callbacks_stop_receiving() {
    let store = EmployeeStore::new();

    let received: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    let id = store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.len()));

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));

    store.create(draft("Hire A", "Engineering")).unwrap();
    assert_eq!(*received.lock().unwrap(), vec![5]);
}
