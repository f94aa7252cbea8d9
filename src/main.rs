use cannet::{BusBuilder, CatalogResult, IdAssigner, IdTables, SignalType, patch};

fn main() {
    if let Err(err) = run() {
        eprintln!("fatal: {}", err);
        std::process::exit(1);
    }
}

fn run() -> CatalogResult<()> {
    println!("═══════════════════════════════════════════════════════");
    println!("  cannet — Canonical Identifier Assignment Demo");
    println!("═══════════════════════════════════════════════════════");
    println!();

    // ── Build the catalog (the shape a DBC import produces) ───
    let mut bus = BusBuilder::new("Main CAN Bus")
        .baudrate(1_000_000)
        .node("DASH")
        .message("DASH__announce")
        .signal("FW_major_version", SignalType::integer("tmp_t", 8, false)?)
        .message("DASH__peripherals")
        .signal("FAN_pwm_duty_cycle", SignalType::integer("tmp_t", 8, false)?)
        .node("BMS")
        .message("BMS__announce")
        .message("BMS__status")
        .node("TELEMETRY")
        .message("TELEMETRY__announce")
        .message("TELEMETRY__gps")
        .node("TPMS")
        .message("TPMS__wheel_pressure")
        .build()?;

    // ── Patch imported signal types ───────────────────────────
    let dash = bus.interface_mut("DASH")?;
    patch::rename_signal_type(dash, "DASH__announce", "FW_major_version", "uint8_t")?;

    let mut pwm = SignalType::integer("fan_pwm_t", 4, false)?;
    pwm.set_max(10);
    patch::replace_signal_type(dash, "DASH__peripherals", "FAN_pwm_duty_cycle", pwm)?;

    // ── Canonical tables ──────────────────────────────────────
    // TPMS has no node entry and keeps its positional default;
    // the announce frames deliberately share one identifier.
    let tables = IdTables::builder()
        .node("DASH", 5)
        .node("BMS", 4)
        .node("TELEMETRY", 7)
        .message("DASH__announce", 70)
        .message("BMS__announce", 70)
        .message("TELEMETRY__announce", 70)
        .message("DASH__peripherals", 79)
        .message("BMS__status", 76)
        .message("TELEMETRY__gps", 73)
        .build()?;

    // ── Assign, twice, to demonstrate idempotence ─────────────
    let assigner = IdAssigner::new(&tables);
    let report = assigner.apply(&mut bus)?;
    let snapshot = bus.clone();
    assigner.apply(&mut bus)?;

    println!("  Final assignment for \"{}\":", bus.name());
    for interface in bus.interfaces() {
        println!("    {:<12} → {}", interface.name(), interface.id());
        for message in interface.messages() {
            println!("      {:<24} → {}", message.name(), message.id());
        }
    }
    println!();

    println!("  Nodes from table: {}", report.assigned_nodes);
    println!("  Messages from table: {}", report.assigned_messages);
    for name in &report.unmatched_messages {
        println!("  ⚠ no canonical id for message \"{}\"", name);
    }
    if report.is_clean() {
        println!("  ✓ every message matched a table entry.");
    }

    if bus == snapshot {
        println!("  ✓ second pass changed nothing — assignment is idempotent.");
    } else {
        println!("  ✗ MISMATCH — second pass diverged!");
    }

    Ok(())
}
