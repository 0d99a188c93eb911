//! Integration tests for TransitionQueue driven by a synthetic clock

mod common;
use common::*;

use rgb_fader::{Channel, Color, Jump, QueueError, Tick, TransitionQueue, clamp_channel};

type Queue = TransitionQueue<TestInstant, 8>;

#[test]
fn append_clamps_every_channel() {
    let mut queue = Queue::new(100);
    queue
        .append(Color::new(500, 101, 100), 1, 0, 0, BLACK)
        .unwrap();

    assert_eq!(queue.tail_color(), Some(Color::new(100, 100, 100)));
}

#[test]
fn append_equal_to_tail_never_grows_queue() {
    let mut queue = Queue::new(255);
    queue.append(RED, 10, 100, 0, BLACK).unwrap();

    for steps in [1, 10, 255] {
        queue.append(RED, steps, 100, 0, BLACK).unwrap();
    }
    queue.append(Color::new(300, 0, 0), 1, 0, 0, BLACK).unwrap();

    assert_eq!(queue.len(), 1);
}

#[test]
fn zero_step_append_is_dropped() {
    let mut queue = Queue::new(255);
    queue.append(RED, 0, 1000, 0, BLACK).unwrap();

    assert!(queue.is_empty());
    assert_eq!(queue.tail_color(), None);

    queue.append(GREEN, 10, 100, 0, BLACK).unwrap();
    queue.append(RED, 0, 100, 0, BLACK).unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.tail_color(), Some(GREEN));
}

#[test]
fn capacity_is_the_const_parameter() {
    assert_eq!(Queue::new(255).capacity(), 8);
    assert_eq!(TransitionQueue::<TestInstant, 2>::new(255).capacity(), 2);
}

#[test]
fn clamp_channel_bounds_to_resolution() {
    assert_eq!(clamp_channel(300, 255), 255);
    assert_eq!(clamp_channel(255, 255), 255);
    assert_eq!(clamp_channel(10, 255), 10);
    assert_eq!(clamp_channel(0, 1), 0);
}

#[test]
fn append_to_full_queue_fails_without_side_effects() {
    let mut queue = TransitionQueue::<TestInstant, 2>::new(255);
    queue.append(RED, 1, 0, 0, BLACK).unwrap();
    queue.append(GREEN, 1, 0, 0, BLACK).unwrap();

    assert_eq!(
        queue.append(BLUE, 1, 0, 0, BLACK),
        Err(QueueError::CapacityExceeded { capacity: 2 })
    );
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.tail_color(), Some(GREEN));

    // Dropped requests do not need room.
    assert_eq!(queue.append(GREEN, 1, 0, 0, BLACK), Ok(()));
}

#[test]
fn coefficients_fixed_from_previous_target() {
    let mut queue = Queue::new(255);
    queue.append(Color::new(100, 0, 0), 1, 0, 0, BLACK).unwrap();
    queue
        .append(Color::new(0, 50, 0), 50, 500, 0, Color::new(1, 2, 3))
        .unwrap();

    let command = queue.get(1).unwrap();
    assert_eq!(command.steps(), 50);
    assert_eq!(command.coefficient(Channel::Red), -2.0);
    assert_eq!(command.coefficient(Channel::Green), 1.0);
    assert_eq!(command.coefficient(Channel::Blue), 0.0);
}

#[test]
fn set_pause_targets_last_command() {
    let mut queue = Queue::new(255);
    queue.set_pause(100);
    assert!(queue.is_empty());

    queue.append(RED, 1, 0, 0, BLACK).unwrap();
    queue.append(GREEN, 1, 0, 0, BLACK).unwrap();
    queue.set_pause(250);

    assert_eq!(queue.get(0).unwrap().pause_ms(), 0);
    assert_eq!(queue.get(1).unwrap().pause_ms(), 250);
}

#[test]
fn set_jump_accepts_only_queued_indices() {
    let mut queue = Queue::new(255);
    queue.set_jump(0, 1);
    assert!(queue.is_empty());

    queue.append(RED, 1, 0, 0, BLACK).unwrap();
    queue.set_jump(1, 4);
    assert_eq!(queue.get(0).unwrap().jump(), None);

    queue.set_jump(0, 4);
    assert_eq!(queue.get(0).unwrap().jump(), Some(Jump::new(0, 4)));
}

#[test]
fn exhausted_jump_counter_starts_over() {
    let mut queue = Queue::new(255);
    queue.append(RED, 1, 10, 0, BLACK).unwrap();
    queue.append(GREEN, 1, 10, 0, BLACK).unwrap();
    queue.set_jump(0, 2);

    let mut t = 0;
    let mut completions = 0;
    while completions < 3 {
        if let Tick::Complete { command: 1, .. } = queue.tick(TestInstant(t)) {
            completions += 1;
            let counter = queue.get(1).unwrap().jump().unwrap().counter;
            match completions {
                1 => assert_eq!(counter, 1),
                2 => assert_eq!(counter, 2),
                _ => assert_eq!(counter, 0),
            }
        }
        t += 1;
    }
}

#[test]
fn jump_into_middle_of_sequence_forms_sub_loop() {
    let mut queue = Queue::new(255);
    queue.append(RED, 1, 0, 0, BLACK).unwrap();
    queue.append(GREEN, 1, 0, 0, BLACK).unwrap();
    queue.append(BLUE, 1, 0, 0, BLACK).unwrap();
    queue.set_jump(1, 1);

    let mut order: heapless::Vec<usize, 16> = heapless::Vec::new();
    for t in 0..20 {
        if let Tick::Complete { command, .. } = queue.tick(TestInstant(t)) {
            let _ = order.push(command);
        }
    }

    assert_eq!(&order[..6], &[0, 1, 2, 1, 2, 0]);
}

#[test]
fn step_and_completion_on_same_boundary_completes() {
    let mut queue = Queue::new(255);
    queue.append(Color::new(4, 0, 0), 4, 40, 0, BLACK).unwrap();

    assert_eq!(queue.tick(TestInstant(0)), Tick::Hold);
    for (t, red) in [(11, 1), (21, 2), (31, 3)] {
        assert_eq!(
            queue.tick(TestInstant(t)).color(),
            Some(Color::new(red, 0, 0))
        );
    }
    assert!(matches!(
        queue.tick(TestInstant(41)),
        Tick::Complete { command: 0, .. }
    ));
    assert_eq!(queue.cursor().step_index(), 1);
}

#[test]
fn restarted_command_replays_from_its_reference_color() {
    let mut queue = Queue::new(255);
    queue.append(Color::new(2, 0, 0), 2, 20, 0, BLACK).unwrap();

    let mut emitted: heapless::Vec<Color, 16> = heapless::Vec::new();
    for t in 0..50 {
        if let Some(color) = queue.tick(TestInstant(t)).color() {
            let _ = emitted.push(color);
        }
    }

    assert_eq!(
        &emitted[..4],
        &[
            Color::new(1, 0, 0),
            Color::new(2, 0, 0),
            Color::new(1, 0, 0),
            Color::new(2, 0, 0)
        ]
    );
}
