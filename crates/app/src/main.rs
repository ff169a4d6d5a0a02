//! Entry point for the spline extruder.
//! Loads a point list, runs a full rebuild and logs the emitted sections.

use anyhow::{Context, Result};
use asset::LoaderConfig;
use extrude_core::{ExtrudeConfig, ExtrudeGenerator, MaterialRef, SectionStore};

#[derive(Debug)]
struct Args {
    points: Option<String>,
    material: Option<String>,
    extrude: ExtrudeConfig,
    loader: LoaderConfig,
}

fn parse_value<T: std::str::FromStr>(flag: &str, val: &str, fallback: T) -> T {
    match val.parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            log::warn!("Invalid value '{}' for --{}, keeping default.", val, flag);
            fallback
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args {
        points: None,
        material: None,
        extrude: ExtrudeConfig::default(),
        loader: LoaderConfig::default(),
    };

    // Accept: --name=value, or a bare path for the point list
    for arg in std::env::args().skip(1) {
        if let Some(v) = arg.strip_prefix("--points=") {
            args.points = Some(v.to_owned());
        } else if let Some(v) = arg.strip_prefix("--material=") {
            args.material = Some(v.to_owned());
        } else if let Some(v) = arg.strip_prefix("--width=") {
            args.extrude.width = parse_value("width", v, args.extrude.width);
        } else if let Some(v) = arg.strip_prefix("--sides=") {
            args.extrude.sides_per_segment =
                parse_value("sides", v, args.extrude.sides_per_segment);
        } else if let Some(v) = arg.strip_prefix("--segments=") {
            args.extrude.segments_per_point =
                parse_value("segments", v, args.extrude.segments_per_point);
        } else if let Some(v) = arg.strip_prefix("--scale=") {
            args.loader.xy_scale = parse_value("scale", v, args.loader.xy_scale);
        } else if let Some(v) = arg.strip_prefix("--default-z=") {
            args.loader.default_z = parse_value("default-z", v, args.loader.default_z);
        } else if arg.starts_with("--") {
            log::warn!("Unknown flag '{}', ignoring.", arg);
        } else if args.points.is_none() {
            args.points = Some(arg);
        }
    }
    args
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    let points_path = args
        .points
        .context("No point file given (use --points=<path>)")?;

    log::info!(
        "Extruding {}: width={}, sides={}, segments_per_point={}",
        points_path,
        args.extrude.width,
        args.extrude.sides_per_segment,
        args.extrude.segments_per_point
    );

    let points = asset::load_points_from_path(&points_path, &args.loader)?;

    let mut generator = ExtrudeGenerator::new(args.extrude)?;
    generator.set_material(args.material.map(MaterialRef::new));

    let mut store = SectionStore::new();
    let summary = generator.update_control_points(points, &mut store);

    if store.is_empty() {
        log::warn!(
            "No geometry produced from {} control points.",
            summary.control_points
        );
        return Ok(());
    }

    for (key, stored) in store.iter() {
        log::debug!(
            "section {:>5}: {} vertices, {} triangles",
            key.0,
            stored.section.vertex_count(),
            stored.section.triangle_count()
        );
    }
    log::info!(
        "Built {} sections from {} samples: {} vertices, {} triangles",
        summary.sections,
        summary.samples,
        store.vertex_count(),
        store.triangle_count()
    );

    Ok(())
}
