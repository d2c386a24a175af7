use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use vinyl_core::constants::{FRUIT_MAX_SCALE, FRUIT_MIN_SCALE};
use vinyl_core::*;

fn tracks(n: usize) -> Vec<DomainItem> {
    (1..=n).map(|i| DomainItem::track(&format!("Song {i}"), i as u32)).collect()
}

fn run(spawner: &mut FruitSpawner, rng: &mut StdRng, secs: f64) -> (Vec<usize>, Vec<usize>) {
    let mut spawned = Vec::new();
    let mut completed = Vec::new();
    let steps = (secs * 10.0).round() as usize;
    for _ in 0..steps {
        spawner.tick(Duration::from_millis(100), rng, &mut spawned, &mut completed);
    }
    (spawned, completed)
}

#[test]
fn every_fruit_completes_exactly_once_in_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut spawner = FruitSpawner::default();
    spawner.prepare(&tracks(3));
    assert_eq!(spawner.pending(), 3);
    assert_eq!(spawner.start(&mut rng), Some(0));
    assert!(spawner.is_running());
    assert_eq!(spawner.active().len(), 1);

    let (spawned, completed) = run(&mut spawner, &mut rng, 10.0);
    assert_eq!(spawned, vec![1, 2]);
    assert_eq!(completed, vec![0, 1, 2]);
    assert!(!spawner.is_running());
    assert!(spawner.active().is_empty());
    assert_eq!(spawner.pending(), 0);
}

#[test]
fn fruit_spawn_on_the_interval() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut spawner = FruitSpawner::default();
    spawner.prepare(&tracks(4));
    spawner.start(&mut rng);
    let (spawned, _) = run(&mut spawner, &mut rng, 1.9);
    assert!(spawned.is_empty());
    let (spawned, _) = run(&mut spawner, &mut rng, 0.1);
    assert_eq!(spawned, vec![1]);
}

#[test]
fn stop_is_idempotent_and_halts_spawning() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut spawner = FruitSpawner::default();
    spawner.prepare(&tracks(3));
    spawner.start(&mut rng);
    spawner.stop();
    spawner.stop();
    assert!(!spawner.is_running());
    let (spawned, completed) = run(&mut spawner, &mut rng, 10.0);
    assert!(spawned.is_empty());
    // the fruit already on the lane still finishes its run
    assert_eq!(completed, vec![0]);
    assert_eq!(spawner.pending(), 2);
}

#[test]
fn clear_drops_queue_and_active_fruit() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut spawner = FruitSpawner::default();
    spawner.prepare(&tracks(3));
    spawner.start(&mut rng);
    spawner.clear();
    assert!(spawner.active().is_empty());
    assert_eq!(spawner.pending(), 0);
    assert_eq!(spawner.start(&mut rng), None);
}

#[test]
fn queue_is_capped() {
    let mut spawner = FruitSpawner::default();
    spawner.prepare(&tracks(20));
    assert_eq!(spawner.pending(), 15);
}

#[test]
fn single_item_stops_after_first_spawn() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut spawner = FruitSpawner::default();
    spawner.prepare(&tracks(1));
    assert_eq!(spawner.start(&mut rng), Some(0));
    assert!(!spawner.is_running());
    let (_, completed) = run(&mut spawner, &mut rng, 3.0);
    assert_eq!(completed, vec![0]);
}

#[test]
fn fruit_moves_across_the_lane_and_pulses() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut spawner = FruitSpawner::default();
    spawner.prepare(&tracks(2));
    spawner.start(&mut rng);
    let config = spawner.config().clone();
    let fruit = &spawner.active()[0];
    assert_eq!(fruit.position.x, config.start_x());
    assert_eq!(fruit.completion_x, config.completion_x());
    assert!(fruit.velocity.x > 0.0);
    assert!(!fruit.has_reached_completion());
    assert_eq!(fruit.label, "#1 Song 1");

    run(&mut spawner, &mut rng, 0.5);
    let fruit = &spawner.active()[0];
    assert!(fruit.position.x > config.start_x());
    let s = fruit.scale();
    assert!((FRUIT_MIN_SCALE..=FRUIT_MAX_SCALE).contains(&s), "scale {s}");
    assert!(fruit.draw_width() > 0.0);
}

#[test]
fn fruit_tempo_follows_popularity() {
    let mut item = DomainItem::track("x", 1);
    assert_eq!(fruit_tempo(&item), 135.0);
    item.popularity = Some(100.0);
    assert_eq!(fruit_tempo(&item), 180.0);
    item.popularity = Some(10.0);
    assert_eq!(fruit_tempo(&item), 70.0);
    item.popularity = Some(150.0);
    assert_eq!(fruit_tempo(&item), 200.0);
}
