//! Conveyor Pick-and-Place Loop
//!
//! This demo drives a small robot cell from a fixed-rate control loop.
//!
//! Key concepts:
//! - A hand-written `State` with real cleanup in `exit` and `abort`
//! - Closure-backed states via `StateBuilder`
//! - Deferred construction with `append_with`
//! - Emergency stop through `abort_all`
//!
//! Run with: RUST_LOG=staque=debug cargo run --example conveyor

use staque::builder::{repeat, wait_until};
use staque::{HookResult, State, StateBuilder, StateQueue};
use tracing_subscriber::EnvFilter;

/// Moves the belt until a part reaches the pick position.
struct AdvanceBelt {
    position_mm: u32,
    target_mm: u32,
    motor_on: bool,
}

impl AdvanceBelt {
    fn to(target_mm: u32) -> Self {
        Self {
            position_mm: 0,
            target_mm,
            motor_on: false,
        }
    }
}

impl State for AdvanceBelt {
    fn name(&self) -> &str {
        "AdvanceBelt"
    }

    fn enter(&mut self) -> HookResult {
        self.motor_on = true;
        println!("  belt motor on");
        Ok(())
    }

    fn maintain(&mut self) -> HookResult {
        self.position_mm += 40;
        println!("  belt at {} mm", self.position_mm);
        Ok(())
    }

    fn exit(&mut self) -> HookResult {
        self.motor_on = false;
        println!("  belt stopped at pick position");
        Ok(())
    }

    fn abort(&mut self) -> HookResult {
        self.motor_on = false;
        println!("  belt brake engaged");
        Ok(())
    }

    fn exit_condition(&self) -> bool {
        self.position_mm >= self.target_mm
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("staque=info")),
        )
        .init();

    println!("=== Conveyor Pick-and-Place ===\n");

    let mut queue = StateQueue::new();
    queue.append(AdvanceBelt::to(120));
    queue.append(repeat("CloseGripper", 2, || {
        println!("  gripper closing");
        Ok(())
    }));
    queue.append_with(|| {
        StateBuilder::new(0u32)
            .name("LiftPart")
            .on_enter(|_| {
                println!("  lifting");
                Ok(())
            })
            .on_maintain(|height| {
                *height += 50;
                Ok(())
            })
            .on_abort(|_| {
                println!("  lowering part safely");
                Ok(())
            })
            .exit_when(|height| *height >= 150)
            .build()
            .expect("LiftPart is fully specified")
    });
    queue.append(wait_until("Settle", (), |_| true));

    for tick in 1..=12 {
        println!("tick {tick}: {}", queue.current_state().name());
        if let Err(err) = queue.on_loop() {
            println!("  error: {err}");
        }

        if tick == 8 && queue.has_state_available() {
            println!("  emergency stop requested");
            if let Err(err) = queue.abort_all() {
                println!("  abort error: {err}");
            }
        }
    }

    println!("\nEntered, in order: {:?}", queue.history().entered_path());
    println!("Final state: {}", queue.current_state().name());

    println!("\n=== Demo Complete ===");
}
