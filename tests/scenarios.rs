use fitness_tracker::models::{Exercise, Meal, ProgressEntry};
use fitness_tracker::repository::MutationError;
use fitness_tracker::stats::{sum_field, workout_minutes};
use fitness_tracker::storage::{read_snapshot, write_snapshot};
use fitness_tracker::{DomainView, KeyValueStore, MemoryStore, Record, Repository};
use std::sync::Arc;

fn memory() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

fn exercise(name: &str, sets: i64, reps: i64, weight: f64) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps,
        weight,
        date: None,
    }
}

#[tokio::test]
async fn empty_meal_store_seeds_1100_calories() {
    let repo = Repository::<Meal>::load(memory()).await;
    assert_eq!(repo.items().len(), 2);
    assert_eq!(sum_field(repo.items(), |meal| meal.calories as f64), 1100.0);
}

#[tokio::test]
async fn adding_row_extends_workout_minutes() {
    let store = memory();
    let mut repo = Repository::<Exercise>::load(store.clone()).await;
    let existing_sets = sum_field(repo.items(), |e| e.sets as f64);

    let row = exercise("Row", 3, 12, 40.0);
    repo.add(row.clone()).await.unwrap();

    assert_eq!(repo.items().len(), 3);
    assert_eq!(repo.items().last(), Some(&row));
    assert_eq!(workout_minutes(repo.items()), (existing_sets + 3.0) * 2.0);

    let persisted: Vec<Exercise> = read_snapshot(store.as_ref(), Exercise::KEY)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(persisted, repo.items());
}

#[tokio::test]
async fn blank_exercise_name_is_rejected_repeatedly() {
    let store = memory();
    let mut repo = Repository::<Exercise>::load(store.clone()).await;
    repo.add(exercise("Dips", 3, 10, 0.0)).await.unwrap();
    let snapshot = store.get(Exercise::KEY).await.unwrap();

    for _ in 0..3 {
        let err = repo.add(exercise("", 1, 1, 0.0)).await.unwrap_err();
        assert!(matches!(err, MutationError::Rejected(_)));
        assert_eq!(repo.items().len(), 3);
        assert_eq!(store.get(Exercise::KEY).await.unwrap(), snapshot);
    }
}

#[tokio::test]
async fn rejected_add_on_fresh_store_writes_nothing() {
    let store = memory();
    let mut view = DomainView::<Exercise>::activate(store.clone()).await;
    view.edit(exercise("", 1, 1, 0.0));
    assert!(view.submit().await.is_err());
    assert_eq!(view.items().len(), 2);
    assert_eq!(store.get(Exercise::KEY).await.unwrap(), None);
}

#[tokio::test]
async fn deleting_first_progress_entry_keeps_second() {
    let mut repo = Repository::<ProgressEntry>::load(memory()).await;
    let second = repo.items()[1].clone();

    let removed = repo.delete(0).await.unwrap();
    assert_eq!(removed.date, "2024-01-01");
    assert_eq!(repo.items(), &[second]);
}

#[tokio::test]
async fn delete_keeps_relative_order() {
    let mut repo = Repository::<Meal>::load(memory()).await;
    for name in ["Snack", "Dinner", "Dessert"] {
        repo.add(Meal {
            name: name.to_string(),
            calories: 100,
            ..Meal::default()
        })
        .await
        .unwrap();
    }

    repo.delete(2).await.unwrap();
    let names: Vec<&str> = repo.items().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Breakfast", "Lunch", "Dinner", "Dessert"]);
}

#[tokio::test]
async fn snapshot_round_trips() {
    let store = memory();
    let entries = vec![
        ProgressEntry {
            date: "2024-03-01".to_string(),
            weight: 73.4,
            body_fat: 18.5,
            notes: "après vacances".to_string(),
        },
        ProgressEntry {
            date: "2024-03-01".to_string(),
            weight: 73.4,
            body_fat: 18.5,
            notes: String::new(),
        },
    ];

    write_snapshot(store.as_ref(), ProgressEntry::KEY, &entries)
        .await
        .unwrap();
    let repo = Repository::<ProgressEntry>::load(store).await;
    assert_eq!(repo.items(), entries.as_slice());
}

#[tokio::test]
async fn replace_overwrites_whole_list() {
    let store = memory();
    let mut repo = Repository::<Meal>::load(store.clone()).await;
    repo.replace(Vec::new()).await.unwrap();

    let reloaded = Repository::<Meal>::load(store).await;
    assert!(reloaded.items().is_empty());
}
