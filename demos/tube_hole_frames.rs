use hole_heat::domain::*;
use hole_heat::output::*;
use hole_heat::solver::Model;
use hole_heat::util::*;

fn main() -> hole_heat::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tube_hole_frames".to_string());

    let mut model = Model::new(6.0, 4.0, 0.3, 0.1)?;
    model.set_initial_condition(20.0);
    model.set_hole_geometry(
        Point::new(2.0, 1.0),
        Point::new(5.0, 1.0),
        Point::new(5.0, 3.0),
    );
    model.set_outer_restrictions(
        Restriction::Fixed(20.0),
        Restriction::Flux(40.0),
        Restriction::Flux(40.0),
        Restriction::Flux(40.0),
    );
    model.set_inner_restriction(Restriction::Convective);

    // Fixed range so frames are comparable.
    let mut frames = FrameSink::create(&output_dir)?.with_range(-60.0, 20.0);
    model.time_integrate(25.0, &mut frames)?;
    log::info!("Frames written to {output_dir}");
    Ok(())
}
