use std::env;
use std::process;
use std::time;

use crossbeam_channel as cbc;
use log::{debug, info};
use rand::SeedableRng;

use elevator::dispatch::program::Program;
use elevator::host::sim::Building;
use elevator::util::config::DispatchConfig;
use elevator::util::error::DispatchResult;
use elevator::util::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("saga-dispatch: {}", e);
        process::exit(1);
    }
}

fn run() -> DispatchResult<()> {
    // Config file from the command line, or the defaults
    let args: Vec<String> = env::args().collect();
    let config = if args.len() > 1 {
        DispatchConfig::load(&args[1])?
    } else {
        DispatchConfig::default()
    };
    logging::init(&config.log_level)?;
    config.print();

    let mut rng = match config.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };
    let mut building = Building::new(config.num_floors, config.num_cars);
    let mut program = Program::init(&mut building.cars, &mut building.floors)?;

    let (tick_tx, tick_rx) = cbc::unbounded::<time::Instant>();
    let ticker = timer::Timer::new();
    let _tick_guard = ticker.schedule_repeating(
        chrono::Duration::milliseconds(config.tick_ms as i64),
        move || {
            let _ = tick_tx.send(time::Instant::now());
        },
    );
    let deadline = match config.run_seconds {
        Some(seconds) => cbc::after(time::Duration::from_secs(seconds)),
        None => cbc::never(),
    };

    let mut last_tick = time::Instant::now();
    loop {
        cbc::select! {
            recv(tick_rx) -> a => {
                let now = match a {
                    Ok(now) => now,
                    Err(_) => break,
                };
                let dt = now.saturating_duration_since(last_tick).as_secs_f64();
                last_tick = now;

                building.step(&mut rng, config.call_probability);
                let handled = program.update(dt, &mut building.cars, &building.floors)?;
                if handled > 0 {
                    debug!("{}", serde_json::to_string(&program.dispatcher().snapshot())?);
                }
            },
            recv(deadline) -> _ => {
                info!("run time elapsed");
                break;
            },
        }
    }

    info!("final state: {}", serde_json::to_string(&program.dispatcher().snapshot())?);
    Ok(())
}
