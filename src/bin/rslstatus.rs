//! rslstatus - status line generator.
//!
//! Without flags, sets the X root window name every interval. With `-s`,
//! writes the i3bar protocol to stdout instead.

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use rslstatus::cli::{Args, Settings};
use rslstatus::collector::{RealFs, Sampler};
use rslstatus::config::{self, PROC_PATH, SYS_PATH};
use rslstatus::lifecycle::{self, Lifecycle};
use rslstatus::scheduler::Scheduler;
use rslstatus::{Error, sink};

/// Initializes the tracing subscriber on stderr.
/// Default level is WARN so a bar host sees nothing in steady state.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::new(format!("rslstatus={}", level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(settings: Settings) -> Result<u64, Error> {
    let lifecycle = Lifecycle::global();
    lifecycle::install_handlers(lifecycle).map_err(Error::Signal)?;
    if settings.one_shot {
        lifecycle.terminate();
    }

    let registry = config::default_registry()?;
    let mut sink = sink::open(settings.mode)?;
    info!(
        "rslstatus {} starting: mode={:?}, interval={:?}, modules={}",
        env!("CARGO_PKG_VERSION"),
        settings.mode,
        settings.interval,
        registry.len()
    );

    let sampler = Sampler::new(RealFs::new(), PROC_PATH, SYS_PATH);
    let mut scheduler = Scheduler::new(registry, sampler, settings.interval, lifecycle);
    let cycles = scheduler.run(&mut *sink)?;

    sink.shutdown()?;
    Ok(cycles)
}

fn main() {
    let args = Args::parse();

    if args.print_version {
        println!("rslstatus-{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging(args.verbose, args.quiet);

    match run(args.settings()) {
        Ok(cycles) => info!("shutdown complete after {} cycles", cycles),
        Err(e) => {
            error!("{}", e);
            eprintln!("rslstatus: {}", e);
            std::process::exit(1);
        }
    }
}
