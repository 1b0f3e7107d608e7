//! # Spanwise CLI Application
//!
//! Terminal front end for the beam statics engine. Stands in for the
//! canvas-based interaction layer: prompts build up the beam model through
//! its mutator surface, then the final snapshot is printed as a formatted
//! results block plus JSON for machine consumption.

use std::io::{self, BufRead, Write};

use span_core::model::{BeamModel, SupportId};
use span_core::{ModelResult, MomentReference};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn set_force_fields(
    model: &mut BeamModel,
    index: usize,
    magnitude_n: f64,
    angle_deg: f64,
    percent: f64,
) -> ModelResult<()> {
    model.set_force_magnitude(index, magnitude_n)?;
    model.set_force_angle(index, angle_deg)?;
    model.set_force_percent(index, percent)?;
    Ok(())
}

fn main() {
    println!("Spanwise CLI - Simply-Supported Beam Statics");
    println!("============================================");
    println!();

    let mut model = BeamModel::new();

    let length_m = prompt_f64("Beam projected length (m) [10.0]: ", 10.0);
    if let Err(e) = model.set_beam_length(length_m) {
        eprintln!("Ignoring beam length: {}", e);
    }
    let angle_deg = prompt_f64("Beam angle (deg) [0.0]: ", 0.0);
    model.set_beam_angle(angle_deg);

    let a_pct = prompt_f64("Support A position (%) [0]: ", 0.0);
    model.set_support_t(SupportId::A, BeamModel::percent_to_t(a_pct));
    let b_pct = prompt_f64("Support B position (%) [100]: ", 100.0);
    model.set_support_t(SupportId::B, BeamModel::percent_to_t(b_pct));

    let weight_n = prompt_f64("Self-weight (N, 0 = none) [0]: ", 0.0);
    model.set_self_weight(weight_n);

    let count = prompt_f64("Number of point forces [1]: ", 1.0).max(0.0) as usize;
    for i in 0..count {
        println!();
        println!("Force {}:", i + 1);
        let mag = prompt_f64("  Magnitude (N) [100]: ", 100.0);
        let ang = prompt_f64("  Angle (deg, 270 = down) [270]: ", 270.0);
        let pct = prompt_f64("  Position (%) [50]: ", 50.0);

        model.add_force();
        if let Err(e) = set_force_fields(&mut model, i, mag, ang, pct) {
            eprintln!("Ignoring force {}: {}", i + 1, e);
        }
    }

    let ref_choice = prompt_f64("Moment reference (0 = A, 1 = B) [0]: ", 0.0);
    let reference = if ref_choice >= 1.0 {
        MomentReference::B
    } else {
        MomentReference::A
    };
    let snapshot = model.set_moment_reference(reference);

    println!();
    println!("═══════════════════════════════════════");
    println!("  BEAM EQUILIBRIUM RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Beam:      {:.2} m projected at {:.1}° ({:.2} m real)",
        model.beam.projected_length_m, model.beam.angle_deg, snapshot.geometry.real_length_m
    );
    println!(
        "  Supports:  A at t = {:.3}, B at t = {:.3} (span A-B = {:.2} m)",
        model.support_a.t, model.support_b.t, snapshot.span_ab_m
    );
    println!(
        "  Loads:     {} force(s), self-weight {:.1} N",
        model.forces.len(),
        model.self_weight_n
    );
    println!();

    match &snapshot.equilibrium {
        Ok(r) => {
            println!("Reactions:");
            println!("  Ax  = {:>10.2} N", r.ax_n);
            println!("  Ay  = {:>10.2} N", r.ay_n);
            println!("  By  = {:>10.2} N", r.by_n);
            println!(
                "  M@{} = {:>10.2} N·m",
                model.moment_reference.code(),
                r.moment_nm
            );
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for machine use):");
            if let Ok(json) = serde_json::to_string_pretty(&snapshot) {
                println!("{}", json);
            }
        }
        Err(e) => {
            println!("Cannot solve: {}", e);
            println!("Move one of the supports to restore a span.");
            if let Ok(json) = serde_json::to_string_pretty(e) {
                println!();
                println!("Error JSON:");
                println!("{}", json);
            }
        }
    }
}
