//! Interactive, demo, and stress runners for the piece inventory.

use std::io::{self, BufWriter};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::InventoryResult;
use crate::game::GameState;
use crate::log_dev;
use crate::session::Session;
use crate::types::{Capacities, Piece};

// Demo capacities are small so the invert precondition is visible.
pub const DEMO_QUEUE_CAPACITY: usize = 5;
pub const DEMO_STACK_CAPACITY: usize = 5;
pub const DEFAULT_STRESS_STEPS: usize = 10_000;
pub const DEFAULT_STRESS_SEED: u64 = 42;

/// Whether stdin is attached to a terminal (Unix only).
#[cfg(unix)]
fn stdin_is_terminal() -> bool {
    let rc = unsafe { libc::isatty(libc::STDIN_FILENO) };
    rc == 1
}

/// Assume a terminal on non-Unix platforms.
#[cfg(not(unix))]
fn stdin_is_terminal() -> bool {
    true
}

/// Run the menu loop on stdin/stdout until exit or end of input.
pub fn run_interactive(capacities: Capacities) -> io::Result<()> {
    let repeat_menu = stdin_is_terminal();
    log_dev!("[SESSION] start repeat_menu={repeat_menu}");
    let mut game = GameState::new(capacities);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), BufWriter::new(stdout.lock()), repeat_menu);
    session.run(&mut game)
}

fn demo_step<T>(label: &str, result: InventoryResult<T>, failures: &mut usize) {
    match result {
        Ok(_) => log_dev!("[DEMO] {label}: ok"),
        Err(err) => {
            *failures += 1;
            log_dev!("[DEMO] {label}: failed ({err})");
        }
    }
}

/// Scripted walkthrough of every operation, including two expected failures.
pub fn run_demo(capacities: Capacities) {
    log_dev!("[DEMO] start");
    let start = Instant::now();
    let mut game = GameState::new(capacities);
    let mut failures = 0;

    for name in ["I", "O", "T", "S", "Z"] {
        demo_step("enqueue", game.enqueue_piece(Piece::new(name)), &mut failures);
    }
    for name in ["L", "J"] {
        demo_step("push", game.push_piece(Piece::new(name)), &mut failures);
    }

    demo_step("play", game.play(), &mut failures);
    demo_step("undo", game.undo(), &mut failures);
    // Nothing left to undo.
    demo_step("undo again", game.undo(), &mut failures);
    demo_step("reserve", game.reserve(), &mut failures);
    // Slot already holds a piece.
    demo_step("reserve again", game.reserve(), &mut failures);
    demo_step("swap", game.swap_top_and_front(), &mut failures);
    demo_step("use reservation", game.use_reservation(), &mut failures);
    demo_step("invert", game.invert_queue_and_stack(), &mut failures);
    demo_step("play", game.play(), &mut failures);

    log_dev!("[DEMO] finished in {}ms", start.elapsed().as_millis());

    let snapshot = game.snapshot();
    println!("{snapshot}");
    println!("DEMO SUMMARY");
    println!("queue={:?}", snapshot.queue_names());
    println!("stack={:?}", snapshot.stack_names());
    println!("stack_top={}", snapshot.stack_top_name().unwrap_or("none"));
    println!(
        "reservation={}",
        snapshot.reserved_name().unwrap_or("none")
    );
    println!(
        "undo_pending={}",
        snapshot.pending_undo_name().unwrap_or("none")
    );
    println!("failures={failures}");
}

const OP_COUNT: usize = 8;

#[derive(Clone, Copy, Debug)]
enum Op {
    Enqueue,
    Push,
    Play,
    Reserve,
    UseReservation,
    Swap,
    Invert,
    Undo,
}

impl Op {
    const ALL: [Op; OP_COUNT] = [
        Op::Enqueue,
        Op::Push,
        Op::Play,
        Op::Reserve,
        Op::UseReservation,
        Op::Swap,
        Op::Invert,
        Op::Undo,
    ];

    fn label(self) -> &'static str {
        match self {
            Op::Enqueue => "enqueue",
            Op::Push => "push",
            Op::Play => "play",
            Op::Reserve => "reserve",
            Op::UseReservation => "use_reservation",
            Op::Swap => "swap",
            Op::Invert => "invert",
            Op::Undo => "undo",
        }
    }
}

/// Owned copy of everything observable, for all-or-nothing checks.
#[derive(Debug, PartialEq, Eq)]
struct Observed {
    queue: Vec<String>,
    stack: Vec<String>,
    reserved: Option<String>,
    pending_undo: Option<String>,
}

impl Observed {
    fn capture(game: &GameState) -> Self {
        let snapshot = game.snapshot();
        Self {
            queue: snapshot.queue_names().into_iter().map(str::to_string).collect(),
            stack: snapshot.stack_names().into_iter().map(str::to_string).collect(),
            reserved: snapshot.reserved_name().map(str::to_string),
            pending_undo: snapshot.pending_undo_name().map(str::to_string),
        }
    }
}

#[derive(Default)]
struct StressCounters {
    ok: [usize; OP_COUNT],
    failed: [usize; OP_COUNT],
    added: usize,
    played: usize,
    undone: usize,
}

/// Result of a stress run; `violations` counts broken invariants.
pub struct StressReport {
    pub steps: usize,
    pub seed: u64,
    pub violations: usize,
    pub queue_len: usize,
    pub stack_len: usize,
}

fn apply(game: &mut GameState, op: Op, serial: usize) -> InventoryResult<()> {
    match op {
        Op::Enqueue => game.enqueue_piece(Piece::new(format!("q{serial}"))),
        Op::Push => game.push_piece(Piece::new(format!("s{serial}"))),
        Op::Play => game.play().map(|_| ()),
        Op::Reserve => game.reserve().map(|_| ()),
        Op::UseReservation => game.use_reservation(),
        Op::Swap => game.swap_top_and_front(),
        Op::Invert => game.invert_queue_and_stack(),
        Op::Undo => game.undo().map(|_| ()),
    }
}

/// Apply `steps` seeded random operations, validating invariants after each.
pub fn stress(steps: usize, seed: u64, capacities: Capacities) -> StressReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::new(capacities);
    let mut counters = StressCounters::default();
    let mut violations = 0;

    for serial in 0..steps {
        let index = rng.gen_range(0..OP_COUNT);
        let op = Op::ALL[index];
        let before = Observed::capture(&game);
        match apply(&mut game, op, serial) {
            Ok(()) => {
                counters.ok[index] += 1;
                match op {
                    Op::Enqueue | Op::Push => counters.added += 1,
                    Op::Play => counters.played += 1,
                    Op::Undo => counters.undone += 1,
                    _ => {}
                }
            }
            Err(err) => {
                counters.failed[index] += 1;
                if Observed::capture(&game) != before {
                    violations += 1;
                    log_dev!("[STRESS] step {serial}: failed {} ({err}) mutated state", op.label());
                }
            }
        }

        let queue = game.queue();
        let stack = game.stack();
        if queue.len() > queue.capacity() || stack.len() > stack.capacity() {
            violations += 1;
            log_dev!("[STRESS] step {serial}: capacity exceeded");
        }
        let live = queue.len() + stack.len() + usize::from(game.reserved().is_some());
        if live + counters.played != counters.added + counters.undone {
            violations += 1;
            log_dev!(
                "[STRESS] step {serial}: piece count drifted live={live} added={} played={} undone={}",
                counters.added,
                counters.played,
                counters.undone
            );
        }
    }

    for (index, op) in Op::ALL.iter().enumerate() {
        log_dev!(
            "[STRESS] {} ok={} failed={}",
            op.label(),
            counters.ok[index],
            counters.failed[index]
        );
    }

    StressReport {
        steps,
        seed,
        violations,
        queue_len: game.queue().len(),
        stack_len: game.stack().len(),
    }
}

/// Run a stress pass and print its summary.
pub fn run_stress(steps: usize, seed: u64, capacities: Capacities) -> StressReport {
    log_dev!(
        "[STRESS] start steps={steps} seed={seed} queue_capacity={} stack_capacity={}",
        capacities.queue,
        capacities.stack
    );
    let start = Instant::now();
    let report = stress(steps, seed, capacities);
    println!("STRESS SUMMARY");
    println!("steps={} seed={}", report.steps, report.seed);
    println!(
        "queue_capacity={} stack_capacity={}",
        capacities.queue, capacities.stack
    );
    println!(
        "final_queue_len={} final_stack_len={}",
        report.queue_len, report.stack_len
    );
    println!("elapsed_ms={}", start.elapsed().as_millis());
    println!("invariant_violation={}", report.violations > 0);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_keeps_invariants_with_defaults() {
        let report = stress(2_000, DEFAULT_STRESS_SEED, Capacities::default());
        assert_eq!(report.violations, 0);
        assert_eq!(report.steps, 2_000);
    }

    #[test]
    fn stress_keeps_invariants_with_tight_uneven_capacities() {
        // Small, unequal capacities make full/empty and invert rejection common.
        for seed in 0..8 {
            let report = stress(1_000, seed, Capacities { queue: 3, stack: 2 });
            assert_eq!(report.violations, 0, "seed {seed}");
            assert!(report.queue_len <= 3);
            assert!(report.stack_len <= 2);
        }
    }

    #[test]
    fn stress_is_deterministic_per_seed() {
        let caps = Capacities { queue: 4, stack: 4 };
        let first = stress(500, 7, caps);
        let second = stress(500, 7, caps);
        assert_eq!(first.queue_len, second.queue_len);
        assert_eq!(first.stack_len, second.stack_len);
    }

    #[test]
    fn stress_with_zero_capacity_never_panics() {
        let report = stress(200, 1, Capacities { queue: 0, stack: 0 });
        assert_eq!(report.violations, 0);
        assert_eq!(report.queue_len, 0);
    }
}
