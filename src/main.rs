//! CarShield Dashboard Trainer — Main Entry Point
//!
//! Hexagonal architecture with a fixed-rate control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │   SimShield            LogEventSink       MonotonicClock │
//! │   (Switch+LampPort)    (EventSink)        (time source)  │
//! │                                                          │
//! │   ────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │   ┌──────────────────────────────────────────────────┐   │
//! │   │          LightController (pure logic)            │   │
//! │   │  EdgeDetector · EdgeToggle · Blink · Integrator  │   │
//! │   └──────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys are read line-buffered from stdin (type a key, then Enter), so
//! the trainer runs in any plain terminal without raw-mode support.

#![deny(unused_must_use)]

use std::io::BufRead as _;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use carshield::adapters::{LogEventSink, SimShield};
use carshield::app::events::DashboardEvent;
use carshield::app::ports::{EventSink, SwitchPort};
use carshield::channels::Switch;
use carshield::clock::MonotonicClock;
use carshield::config::ShieldConfig;
use carshield::control::LightController;
use carshield::logger;

/// How long a keyboard tap holds its switch low. Several control ticks,
/// so the edge detectors see a clean press and release.
const TAP_HOLD_MS: u32 = 50;

/// How often the lamp panel line is re-rendered (when it changed).
const RENDER_INTERVAL_MS: u32 = 100;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    logger::init()?;

    info!(
        "CarShield dashboard trainer v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    // ── 2. Load config (or defaults) ──────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => match ShieldConfig::load(Path::new(&path)) {
            Ok(cfg) => {
                info!("Config loaded from {path}");
                cfg
            }
            Err(e) => {
                warn!("Config load failed ({e}), using defaults");
                ShieldConfig::default()
            }
        },
        None => ShieldConfig::default(),
    };

    // ── 3. Construct adapters ─────────────────────────────────
    let clock = MonotonicClock::new();
    let mut shield = SimShield::new();
    let mut sink = LogEventSink::new();

    // ── 4. Construct the controller ───────────────────────────
    let initial = shield.read_all();
    let mut controller = LightController::new(&config, &initial, clock.now_ms());

    // ── 5. Keyboard input thread ──────────────────────────────
    let (tx, rx) = mpsc::channel::<char>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for ch in line.trim().chars() {
                if tx.send(ch.to_ascii_lowercase()).is_err() {
                    return;
                }
            }
        }
    });

    print_help();
    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    let mut last_status_ms = clock.now_ms();
    let mut last_render_ms = clock.now_ms();
    let mut last_panel = String::new();

    'running: loop {
        thread::sleep(Duration::from_millis(u64::from(
            config.control_loop_interval_ms,
        )));
        let now_ms = clock.now_ms();

        // Apply any keys typed since the last tick.
        while let Ok(key) = rx.try_recv() {
            match key {
                'l' => shield.tap(Switch::TurnLeft, now_ms, TAP_HOLD_MS),
                'r' => shield.tap(Switch::TurnRight, now_ms, TAP_HOLD_MS),
                's' => shield.tap(Switch::Stop, now_ms, TAP_HOLD_MS),
                'd' => shield.tap(Switch::DippedBeam, now_ms, TAP_HOLD_MS),
                'h' => shield.tap(Switch::HighBeam, now_ms, TAP_HOLD_MS),
                'a' => {
                    let level = shield.toggle_level(Switch::Accelerate);
                    info!(
                        "KEY | accelerator {}",
                        if level { "released" } else { "pressed" }
                    );
                }
                'b' => {
                    let level = shield.toggle_level(Switch::Decelerate);
                    info!(
                        "KEY | brake pedal {}",
                        if level { "released" } else { "pressed" }
                    );
                }
                '?' => print_help(),
                'q' => break 'running,
                _ => {}
            }
        }

        shield.service(now_ms);
        controller.tick(now_ms, &mut shield, &mut sink);

        if now_ms.wrapping_sub(last_render_ms) >= RENDER_INTERVAL_MS {
            last_render_ms = now_ms;
            let panel = shield.render();
            if panel != last_panel {
                println!("{panel}");
                last_panel = panel;
            }
        }

        if now_ms.wrapping_sub(last_status_ms) >= config.status_interval_ms {
            last_status_ms = now_ms;
            sink.emit(&DashboardEvent::Status(controller.status()));
        }
    }

    info!("Shutting down");
    Ok(())
}

fn print_help() {
    println!("CarShield dashboard trainer — type a key, then Enter:");
    println!("  l  tap left turn stalk        r  tap right turn stalk");
    println!("  s  tap stop switch            d  tap dipped-beam switch");
    println!("  h  tap high-beam switch");
    println!("  a  hold/release accelerator   b  hold/release brake pedal");
    println!("  ?  show this help             q  quit");
}
