//! # Carton CLI Application
//!
//! Terminal frontend for the box calculation engine. Collects dimensions,
//! flute grade, and unit mode, runs the input-validation boundary, then
//! prints the flat-pattern layout, the fold schedule, and the structural
//! report, each followed by its JSON form for programmatic consumers.

use std::io::{self, BufRead, Write};

use carton_core::calculations::folding::FOLD_SCHEDULE;
use carton_core::calculations::{analyze, compute_angles, compute_layout, BoxDimensions};
use carton_core::materials::FluteGrade;
use carton_core::units::UnitSystem;

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

fn prompt_str(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() {
    println!("Carton CLI - Corrugated Box Designer");
    println!("====================================");
    println!();

    let metric_answer = prompt_str("Metric units? (y/N): ");
    let units = if metric_answer.eq_ignore_ascii_case("y") {
        UnitSystem::Metric
    } else {
        UnitSystem::Imperial
    };
    let suffix = units.length_suffix();

    let defaults = BoxDimensions::default()
        .converted_to(UnitSystem::Imperial, units);

    let length = prompt_f64(
        &format!("Interior length ({}) [{}]: ", suffix, defaults.length),
        defaults.length,
    );
    let width = prompt_f64(
        &format!("Interior width ({}) [{}]: ", suffix, defaults.width),
        defaults.width,
    );
    let height = prompt_f64(
        &format!("Interior height ({}) [{}]: ", suffix, defaults.height),
        defaults.height,
    );

    let grade_answer = prompt_str("Flute grade (A/B/C/E) [B]: ");
    let flute = if grade_answer.is_empty() {
        FluteGrade::B
    } else {
        match FluteGrade::from_str_flexible(&grade_answer) {
            Ok(grade) => grade,
            Err(e) => {
                eprintln!("Error: {}", e);
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
                std::process::exit(1);
            }
        }
    };

    let dims = BoxDimensions::new(length, width, height, flute);
    if let Err(e) = dims.validate() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }

    let layout = compute_layout(&dims, units);
    let report = analyze(&dims, units);

    println!();
    println!("═══════════════════════════════════════");
    println!("  FLAT-PATTERN LAYOUT");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Box:       {} x {} x {} {} interior",
        dims.length, dims.width, dims.height, suffix
    );
    println!("  Material:  {}", flute);
    println!();
    println!("Panels:");
    println!("  Long panel:   {:.3} {}", layout.panel_width_long, suffix);
    println!("  Short panel:  {:.3} {}", layout.panel_width_short, suffix);
    println!("  Panel height: {:.3} {}", layout.panel_height, suffix);
    println!("  Flap height:  {:.3} {}", layout.flap_height, suffix);
    println!("  Slot width:   {:.4} {}", layout.slot_width, suffix);
    println!("  Glue tab:     {:.3} {}", layout.glue_tab_width, suffix);
    println!();
    println!(
        "Net bounding box: {:.3} x {:.3} {}",
        layout.total_width, layout.total_height, suffix
    );

    println!();
    println!("═══════════════════════════════════════");
    println!("  FOLD SCHEDULE");
    println!("═══════════════════════════════════════");
    println!();
    for event in &FOLD_SCHEDULE {
        println!(
            "  {:<17} starts at {:.0}%, window {:.1}%",
            event.name,
            event.start * 100.0,
            100.0 / event.rate
        );
    }
    println!();
    println!("Angles (degrees) at sample progress values:");
    println!("  progress   A      B      C      tab    flaps");
    for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let angles = compute_angles(p);
        let deg = angles.as_array().map(|a| a.to_degrees());
        println!(
            "  {:>5.2}    {:>5.1}  {:>5.1}  {:>5.1}  {:>5.1}  {:>5.1}",
            p, deg[0], deg[1], deg[2], deg[3], deg[4]
        );
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  STRUCTURAL ANALYSIS");
    println!("═══════════════════════════════════════");
    println!();
    println!("  BCT value:     {:.1} {}", report.bct_value, report.unit_label);
    println!(
        "  Max safe load: {:.2} {} (safety factor {})",
        report.max_safe_load, report.load_label, report.safety_factor
    );
    println!(
        "  Status:        {}",
        if report.is_safe { "[OK]" } else { "[FAIL]" }
    );

    println!();
    println!("JSON Output (for renderer/exporter use):");
    if let Ok(json) = serde_json::to_string_pretty(&layout) {
        println!("{}", json);
    }
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        println!("{}", json);
    }
}
