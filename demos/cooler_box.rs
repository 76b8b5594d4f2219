//! Runs the reference cooler box in both topologies and sizes a Peltier
//! current for a fixed-COP design.
//!
//! ```sh
//! cargo run --example cooler_box
//! ```

use std::error::Error;

use peltier_box::models::thermal::cooler::{
    Configuration, CoolerBox, CopModel, Results, RunParameters, SizingConfig, Topology,
    size_peltier_current,
};
use twine_core::Model;
use uom::si::{
    electric_current::ampere, energy::watt_hour, thermodynamic_temperature::degree_celsius,
    f64::ThermodynamicTemperature,
};

fn main() -> Result<(), Box<dyn Error>> {
    let base = Configuration::default().with_run(RunParameters::default().with_horizon(240));

    for topology in [Topology::air_first(), Topology::water_first()] {
        let results = CoolerBox.call(&base.clone().with_topology(topology))?;
        report(&format!("{:?}", topology.variant()), &results);
    }

    let fixed = base
        .clone()
        .with_peltier(base.peltier.with_cop(CopModel::Fixed { cop: 0.8 }))
        .with_topology(Topology::water_first());
    let goal = ThermodynamicTemperature::new::<degree_celsius>(12.0);
    let sized = size_peltier_current(&fixed, goal, SizingConfig::default())?;

    println!(
        "\nSized current for {:.1} °C after {} min: {:.3} A",
        goal.get::<degree_celsius>(),
        fixed.run.horizon_minutes,
        sized.current.get::<ampere>()
    );
    report("Sized", &sized.results);

    Ok(())
}

fn report(label: &str, results: &Results) {
    println!("\n{label}");
    println!("  minute  air °C  water °C  hot °C    COP  battery Wh");
    for row in results.series.iter().step_by(30) {
        println!(
            "  {:>6}  {:>6.2}  {:>8.2}  {:>6.2}  {:>5.2}  {:>10.1}",
            row.minute,
            row.cold_air.get::<degree_celsius>(),
            row.cold_water.get::<degree_celsius>(),
            row.hot_water.get::<degree_celsius>(),
            row.cop,
            row.battery_remaining.get::<watt_hour>(),
        );
    }

    let summary = &results.summary;
    println!(
        "  consumed {:.1} Wh, heat loss {:.1} Wh, active {} min",
        summary.energy.total.get::<watt_hour>(),
        summary.energy.heat_loss.get::<watt_hour>(),
        summary.active_minutes,
    );
    if let Some(minute) = summary.depleted_at {
        println!("  battery depleted at minute {minute}");
    }
}
