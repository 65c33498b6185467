// Rust guideline compliant 2026-10-18

//! Concurrency tests for the fruit registry.

use orchard_core::{FruitRegistry, GenerationOutcome, Status};
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_submits_yield_distinct_ids() {
    let registry = FruitRegistry::new();
    let count = 500;

    let ids: Vec<_> = (0..count)
        .into_par_iter()
        .map(|i| {
            registry
                .submit((i % 7) + 1, &format!("fruit number {i}"))
                .unwrap()
        })
        .collect();

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), count as usize);
    assert_eq!(registry.len(), count as usize);

    for id in &ids {
        let view = registry.get_status(id.as_str()).unwrap();
        assert_eq!(view.status, Status::Growing);
        assert!(!view.rarity.label().is_empty());
    }
}

#[test]
fn test_concurrent_completions_apply_once() {
    let registry = FruitRegistry::new();
    let id = registry.submit(1, "a contested melon").unwrap();
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let registry = registry.clone();
            let barrier = Arc::clone(&barrier);
            let id = id.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.complete_generation(id.as_str())
            })
        })
        .collect();

    let outcomes: Vec<GenerationOutcome> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();
    let applied = outcomes
        .iter()
        .filter(|o| matches!(o, GenerationOutcome::Applied { .. }))
        .count();

    assert_eq!(applied, 1, "Exactly one completion should apply");
    let view = registry.get_status(id.as_str()).unwrap();
    assert_eq!(view.mesh_file, Some(id.mesh_file_name()));
}

#[test]
fn test_concurrent_distinct_assignments_have_one_winner() {
    let registry = FruitRegistry::new();
    let id = registry.submit(1, "a contested melon").unwrap();
    registry.complete_generation(id.as_str());
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let registry = registry.clone();
            let barrier = Arc::clone(&barrier);
            let id = id.clone();
            thread::spawn(move || {
                barrier.wait();
                let mesh_id = format!("mesh-{i}");
                registry
                    .assign_mesh(id.as_str(), &mesh_id)
                    .map(|_| mesh_id)
            })
        })
        .collect();

    let winners: Vec<String> = handles
        .into_iter()
        .filter_map(|h| h.join().unwrap().ok())
        .collect();

    assert_eq!(winners.len(), 1, "Only one distinct mesh ID may be accepted");
    let view = registry.get_status(id.as_str()).unwrap();
    assert_eq!(view.mesh_id.as_ref(), Some(&winners[0]));
}

#[test]
fn test_completion_racing_assignment_is_well_defined() {
    for _ in 0..50 {
        let registry = FruitRegistry::new();
        let id = registry.submit(1, "a racing grape").unwrap();
        let barrier = Arc::new(Barrier::new(2));

        let completer = {
            let registry = registry.clone();
            let barrier = Arc::clone(&barrier);
            let id = id.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.complete_generation(id.as_str());
            })
        };
        let assigner = {
            let registry = registry.clone();
            let barrier = Arc::clone(&barrier);
            let id = id.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.assign_mesh(id.as_str(), "m1").is_ok()
            })
        };

        completer.join().unwrap();
        let assigned = assigner.join().unwrap();

        let fruit = registry.get(id.as_str()).unwrap();
        assert_eq!(fruit.status, Status::Ready);
        assert_eq!(fruit.mesh_file, Some(id.mesh_file_name()));
        if assigned {
            assert_eq!(fruit.mesh_id.as_deref(), Some("m1"));
        } else {
            assert!(fruit.mesh_id.is_none());
        }
    }
}

#[test]
fn test_unrelated_fruits_progress_independently() {
    let registry = FruitRegistry::new();
    let ids: Vec<_> = (0..64)
        .map(|i| registry.submit(1, &format!("batch {i}")).unwrap())
        .collect();

    ids.par_iter().enumerate().for_each(|(i, id)| {
        registry.complete_generation(id.as_str());
        registry
            .assign_mesh(id.as_str(), &format!("m{i}"))
            .unwrap();
    });

    for (i, id) in ids.iter().enumerate() {
        let view = registry.get_status(id.as_str()).unwrap();
        assert_eq!(view.status, Status::Ready);
        assert_eq!(view.mesh_id, Some(format!("m{i}")));
    }
}
