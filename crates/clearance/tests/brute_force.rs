// Compares the grid-accelerated detection against an exhaustive scan of all pairs.

use clearance::pipeline::CollisionDetection;
use clearance::shape::{Manhole, Pipe, PipeId, System};
use clearance::utils::SortedPair;

fn random_range(rng: &mut oorandom::Rand64, min: f64, max: f64) -> f64 {
    min + rng.rand_float() * (max - min)
}

fn random_system(rng: &mut oorandom::Rand64) -> System {
    let manhole = Manhole::new(
        random_range(rng, 1.0, 3.0),
        random_range(rng, 1.0, 4.0),
        random_range(rng, 0.0, 0.3),
    );
    let num_pipes = rng.rand_range(0..40) as usize;
    let pipes = (0..num_pipes)
        .map(|_| {
            Pipe::new(
                random_range(rng, 0.05, 0.6),
                random_range(rng, -360.0, 720.0),
                random_range(rng, -2.0, 3.0),
                random_range(rng, 0.0, 100.0),
            )
        })
        .collect();

    System::new(manhole, pipes)
}

fn brute_force_collisions(detection: &CollisionDetection) -> Vec<SortedPair<PipeId>> {
    let pipes = detection.pipes();
    let mut result = vec![];

    for (i, pipe1) in pipes.iter().enumerate() {
        for pipe2 in &pipes[i + 1..] {
            if detection.is_colliding(pipe1, pipe2) {
                result.push(SortedPair::new(pipe1.id, pipe2.id));
            }
        }
    }

    result.sort_unstable();
    result
}

#[test]
fn grid_has_no_false_negatives() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..500 {
        let detection = CollisionDetection::new(random_system(&mut rng)).unwrap();
        let expected = brute_force_collisions(&detection);

        assert_eq!(detection.unique_collisions(), expected);
        assert_eq!(detection.num_collisions(), expected.len() * 2);
    }
}

#[test]
fn crowded_narrow_manholes() {
    // Few grid columns around the circumference, so neighbors wrap onto each other.
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..200 {
        let manhole = Manhole::new(1.5, random_range(&mut rng, 0.5, 1.5), 0.1);
        let pipes = (0..12)
            .map(|_| {
                Pipe::new(
                    random_range(&mut rng, 0.2, 0.5),
                    random_range(&mut rng, 0.0, 360.0),
                    random_range(&mut rng, 0.0, 4.0),
                    random_range(&mut rng, 0.0, 60.0),
                )
            })
            .collect();
        let detection = CollisionDetection::new(System::new(manhole, pipes)).unwrap();
        let expected = brute_force_collisions(&detection);

        assert_eq!(detection.unique_collisions(), expected);
        assert_eq!(detection.num_collisions(), expected.len() * 2);
    }
}

#[test]
fn distance_is_symmetric() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..50 {
        let detection = CollisionDetection::new(random_system(&mut rng)).unwrap();
        for pipe1 in detection.pipes() {
            for pipe2 in detection.pipes() {
                assert_eq!(
                    detection.distance_between(pipe1, pipe2),
                    detection.distance_between(pipe2, pipe1)
                );
            }
        }
    }
}

#[test]
fn increasing_spacing_only_adds_collisions() {
    let mut rng = oorandom::Rand64::new(99);

    for _ in 0..100 {
        let system = random_system(&mut rng);
        let mut previous = CollisionDetection::new(system.clone())
            .unwrap()
            .unique_collisions();

        for extra_spacing in [0.05, 0.1, 0.5, 1.0] {
            let mut wider = system.clone();
            wider.manhole.min_spacing_meters += extra_spacing;
            let current = CollisionDetection::new(wider).unwrap().unique_collisions();

            assert!(previous.iter().all(|pair| current.contains(pair)));
            previous = current;
        }
    }
}
