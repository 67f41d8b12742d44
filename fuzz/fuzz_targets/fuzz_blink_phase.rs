//! Fuzz target: `BlinkGenerator` phase accounting
//!
//! Interprets the input as a command stream of start/stop/poll against a
//! generator polled at least once per phase, and asserts the output is
//! exactly periodic in elapsed time from the engagement point — the
//! accounting must never drift, including across the `u32` wrap.
//!
//! cargo fuzz run fuzz_blink_phase

#![no_main]

use libfuzzer_sys::fuzz_target;

use carshield::signal::BlinkGenerator;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // Period from the first two bytes (kept >= 2 so both phases exist);
    // start near the u32 wrap when the third byte says so.
    let period = u32::from(u16::from_le_bytes([data[0], data[1]])).max(2);
    let on_ms = period / 2;
    let mut t = if data[2] & 1 == 0 {
        0
    } else {
        u32::MAX - period
    };

    let mut blink = BlinkGenerator::new(period);
    let mut engaged_at: Option<u32> = None;

    for &byte in &data[3..] {
        match byte % 8 {
            0 => {
                blink.stop();
                engaged_at = None;
            }
            1 => {
                if !blink.is_blinking() {
                    blink.set_blinking(true, t);
                    engaged_at = Some(t);
                } else {
                    // Re-requesting keeps the running phase.
                    blink.set_blinking(true, t);
                }
            }
            _ => {
                // Dense poll: the gap never exceeds the shorter phase.
                let gap = u32::from(byte) % on_ms.max(1) + 1;
                t = t.wrapping_add(gap);
                blink.update(t);
            }
        }

        match engaged_at {
            Some(t0) => {
                let expected = t.wrapping_sub(t0) % period < on_ms;
                assert_eq!(
                    blink.state(),
                    expected,
                    "phase drifted at t={t} (engaged at {t0}, period {period})"
                );
            }
            None => assert!(!blink.state(), "stopped generator must stay dark"),
        }
    }
});
