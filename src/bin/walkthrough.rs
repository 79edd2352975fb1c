use std::thread;
use std::time::{Duration, Instant};

use dptrace::cs::dynamic::{Timeline, TraceStep};
use dptrace::cs::playback::{PlaybackController, Speed};
use dptrace::cs::session::{CoinChangeSession, FibonacciSession, SessionConfig};

/// Drives a player until it stops, printing each newly revealed step.
fn play<T>(player: &mut PlaybackController<T>, mut show: impl FnMut(&T, usize))
where
    T: Timeline,
    T::Step: TraceStep,
{
    player.set_speed(Speed::VeryFast);
    player.start(Instant::now());
    while player.is_playing() {
        thread::sleep(Duration::from_millis(20));
        if player.poll(Instant::now()) > 0 {
            if let Some(cursor) = player.cursor() {
                show(player.timeline(), cursor);
            }
        }
    }
}

fn main() {
    let config = SessionConfig::default();

    let mut fib = FibonacciSession::new(&config);
    println!("Fibonacci, n = {}", fib.n());
    play(fib.player_mut(), |trace, cursor| {
        println!("  {}", trace.trace()[cursor].explanation());
    });

    let mut coins = match CoinChangeSession::new(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("invalid coin configuration: {e}");
            return;
        }
    };
    println!(
        "\nCoin change, amount = {}, coins = {:?}",
        coins.amount(),
        coins.coins().as_slice()
    );
    play(coins.player_mut(), |trace, cursor| {
        let step = &trace.steps()[cursor];
        println!("  {}", step.explanation());
        for choice in &step.choices {
            println!("    {choice}");
        }
    });

    match (coins.trace().summary(), coins.revealed_solution()) {
        (Some(summary), Some(used)) => println!("\n{summary}, coins used: {used:?}"),
        _ => println!("\nAmount {} cannot be made with these coins", coins.amount()),
    }
}
