mod bounded_queue;
mod bounded_stack;
mod display;
mod error;
mod game;
mod logging;
mod reservation;
mod session;
mod sim;
mod types;
mod undo_log;

use types::{Capacities, DEFAULT_QUEUE_CAPACITY, DEFAULT_STACK_CAPACITY};

fn print_usage(program: &str) {
    println!("Piece Inventory CLI");
    println!("Usage:");
    println!("  {program} (interactive session)");
    println!("  {program} play [queue_capacity] [stack_capacity]");
    println!("  {program} demo [queue_capacity] [stack_capacity]");
    println!("  {program} stress [steps] [seed] [queue_capacity] [stack_capacity]");
    println!("  {program} --help");
    println!();
    println!("Omit trailing arguments to keep their defaults; use \"-\" to skip one.");
    println!("Defaults:");
    println!("  play    queue_capacity={DEFAULT_QUEUE_CAPACITY} stack_capacity={DEFAULT_STACK_CAPACITY}");
    println!(
        "  demo    queue_capacity={} stack_capacity={}",
        sim::DEMO_QUEUE_CAPACITY,
        sim::DEMO_STACK_CAPACITY
    );
    println!(
        "  stress  steps={} seed={} queue_capacity={DEFAULT_QUEUE_CAPACITY} stack_capacity={DEFAULT_STACK_CAPACITY}",
        sim::DEFAULT_STRESS_STEPS,
        sim::DEFAULT_STRESS_SEED
    );
    println!("Menu commands: 1 play, 2 reserve, 3 use reservation, 4 swap,");
    println!("  5 undo, 6 invert, 7 enqueue, 8 push, 9 show state, 0 exit");
}

fn exit_with_usage(program: &str, message: &str) -> ! {
    eprintln!("{message}");
    print_usage(program);
    std::process::exit(2);
}

/// Parse an optional positional value; `-` or absence keeps the default.
fn parse_or<T: std::str::FromStr>(
    program: &str,
    command: &str,
    name: &str,
    arg: Option<String>,
    default: T,
) -> T {
    match arg.as_deref() {
        None | Some("-") => default,
        Some(value) => value.parse::<T>().unwrap_or_else(|_| {
            exit_with_usage(program, &format!("{command}: invalid {name} value: {value}"))
        }),
    }
}

fn parse_capacities(
    program: &str,
    command: &str,
    args: &mut impl Iterator<Item = String>,
    defaults: Capacities,
) -> Capacities {
    let queue = parse_or(program, command, "queue_capacity", args.next(), defaults.queue);
    let stack = parse_or(program, command, "stack_capacity", args.next(), defaults.stack);
    if queue == 0 || stack == 0 {
        exit_with_usage(program, &format!("{command}: capacities must be > 0"));
    }
    Capacities { queue, stack }
}

fn reject_extra(program: &str, command: &str, mut args: impl Iterator<Item = String>) {
    if let Some(extra) = args.next() {
        exit_with_usage(program, &format!("{command}: unexpected argument: {extra}"));
    }
}

fn interactive(capacities: Capacities) {
    if let Err(err) = sim::run_interactive(capacities) {
        eprintln!("session error: {err}");
        std::process::exit(1);
    }
}

fn main() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "piece_inventory".to_string());
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("play") => {
            let capacities = parse_capacities(&program, "play", &mut args, Capacities::default());
            reject_extra(&program, "play", args);
            interactive(capacities);
        }
        Some("demo") => {
            let defaults = Capacities {
                queue: sim::DEMO_QUEUE_CAPACITY,
                stack: sim::DEMO_STACK_CAPACITY,
            };
            let capacities = parse_capacities(&program, "demo", &mut args, defaults);
            reject_extra(&program, "demo", args);
            sim::run_demo(capacities);
        }
        Some("stress") => {
            let steps = parse_or(&program, "stress", "steps", args.next(), sim::DEFAULT_STRESS_STEPS);
            let seed = parse_or(&program, "stress", "seed", args.next(), sim::DEFAULT_STRESS_SEED);
            let capacities =
                parse_capacities(&program, "stress", &mut args, Capacities::default());
            reject_extra(&program, "stress", args);
            let report = sim::run_stress(steps, seed, capacities);
            if report.violations > 0 {
                std::process::exit(1);
            }
        }
        Some("--help") | Some("-h") | Some("help") => print_usage(&program),
        Some(other) => {
            exit_with_usage(&program, &format!("unknown command: {other}"));
        }
        None => interactive(Capacities::default()),
    }
}
