use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use nalgebra::SVector;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vecgeom::plot::plot_vectors;
use vecgeom::vec::{
    angle_between, cartesian_to_polar, decompose, get_bisector, get_magnitude,
    is_vector_endpoint_above_vector_slope, polar_to_cartesian, try_angle_between, try_decompose,
    try_is_vector_endpoint_above_vector_slope, try_unit_vector, unit_vector,
};

mod config;
mod provenance;
mod vectors;

use config::CliConfig;
use provenance::Provenance;
use vectors::{pair, parse_components, AnyPair, AnyVec, Components, DEFAULT_COLOR};

#[derive(Parser)]
#[command(name = "vecgeom", version)]
#[command(about = "2D/3D vector geometry helpers; prints JSON")]
struct Cmd {
    /// Fail on zero vectors and vertical slopes instead of returning sentinel/NaN values
    #[arg(long, global = true)]
    strict: bool,

    /// TOML file with tolerances and plot settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cartesian (x, y) to polar (r, phi)
    Polar {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Polar (r, phi) to Cartesian (x, y)
    Cartesian {
        #[arg(long, allow_hyphen_values = true)]
        r: f64,
        #[arg(long, allow_hyphen_values = true)]
        phi: f64,
    },
    /// Unit vector of `v` (zero stays zero unless --strict)
    Unit {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        v: Components,
    },
    /// Angle between `a` and `b` in [0, pi]
    Angle {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        a: Components,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        b: Components,
    },
    /// Euclidean norm of `v`
    Magnitude {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        v: Components,
        /// Use sqrt(v·v) instead of the general norm routine
        #[arg(long)]
        fast: bool,
    },
    /// Split `a` into parts parallel and perpendicular to `b`
    Decompose {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        a: Components,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        b: Components,
    },
    /// Angle bisector |a| b + |b| a
    Bisector {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        a: Components,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        b: Components,
    },
    /// Is the endpoint of `a` strictly above the line along `b`? (2D)
    Above {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        a: Components,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_components)]
        b: Components,
    },
    /// Draw 2D vectors as arrows from the origin into an image
    Plot {
        /// Vector `x,y`; repeat for several
        #[arg(long = "vec", allow_hyphen_values = true, value_parser = parse_components)]
        vecs: Vec<Components>,
        /// Color per `--vec` (default `k` for all)
        #[arg(long = "color")]
        colors: Vec<String>,
        /// CSV with columns x, y and optional color
        #[arg(long, conflicts_with_all = ["vecs", "colors"])]
        input: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version and code revision
    Report,
}

/// Settings shared by all commands.
struct Ctx {
    strict: bool,
    cfg: CliConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let cmd = Cmd::parse();
    let ctx = Ctx {
        strict: cmd.strict,
        cfg: CliConfig::load(cmd.config.as_deref())?,
    };
    let out = match cmd.action {
        Action::Polar { x, y } => polar(x, y),
        Action::Cartesian { r, phi } => cartesian(r, phi),
        Action::Unit { v } => match v.any("v")? {
            AnyVec::D2(v) => unit(v, &ctx),
            AnyVec::D3(v) => unit(v, &ctx),
        },
        Action::Angle { a, b } => match pair(&a, &b)? {
            AnyPair::D2(a, b) => angle(a, b, &ctx),
            AnyPair::D3(a, b) => angle(a, b, &ctx),
        },
        Action::Magnitude { v, fast } => match v.any("v")? {
            AnyVec::D2(v) => Ok(magnitude_json(v, fast)),
            AnyVec::D3(v) => Ok(magnitude_json(v, fast)),
        },
        Action::Decompose { a, b } => match pair(&a, &b)? {
            AnyPair::D2(a, b) => split(a, b, &ctx),
            AnyPair::D3(a, b) => split(a, b, &ctx),
        },
        Action::Bisector { a, b } => match pair(&a, &b)? {
            AnyPair::D2(a, b) => Ok(bisector(a, b)),
            AnyPair::D3(a, b) => Ok(bisector(a, b)),
        },
        Action::Above { a, b } => above(&a, &b, &ctx),
        Action::Plot {
            vecs,
            colors,
            input,
            out,
        } => plot(vecs, colors, input, out, &ctx),
        Action::Report => Ok(report()),
    }?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn polar(x: f64, y: f64) -> Result<Value> {
    tracing::info!(x, y, "polar");
    let p = cartesian_to_polar(x, y);
    Ok(json!({ "r": p.r, "phi": p.phi }))
}

fn cartesian(r: f64, phi: f64) -> Result<Value> {
    tracing::info!(r, phi, "cartesian");
    let xy = polar_to_cartesian(r, phi);
    Ok(json!({ "x": xy.x, "y": xy.y }))
}

fn unit<const D: usize>(v: SVector<f64, D>, ctx: &Ctx) -> Result<Value> {
    tracing::info!(dim = D, strict = ctx.strict, "unit");
    let u = if ctx.strict {
        try_unit_vector(v, ctx.cfg.vec_cfg())?
    } else {
        unit_vector(v)
    };
    Ok(json!({ "unit": u.as_slice() }))
}

fn angle<const D: usize>(a: SVector<f64, D>, b: SVector<f64, D>, ctx: &Ctx) -> Result<Value> {
    tracing::info!(dim = D, strict = ctx.strict, "angle");
    let rad = if ctx.strict {
        try_angle_between(a, b, ctx.cfg.vec_cfg())?
    } else {
        angle_between(a, b)
    };
    Ok(json!({ "radians": rad, "degrees": rad.to_degrees() }))
}

fn magnitude_json<const D: usize>(v: SVector<f64, D>, fast: bool) -> Value {
    tracing::info!(dim = D, fast, "magnitude");
    json!({ "magnitude": get_magnitude(v, fast), "fast": fast })
}

fn split<const D: usize>(a: SVector<f64, D>, b: SVector<f64, D>, ctx: &Ctx) -> Result<Value> {
    tracing::info!(dim = D, strict = ctx.strict, "decompose");
    let d = if ctx.strict {
        try_decompose(a, b, ctx.cfg.vec_cfg())?
    } else {
        decompose(a, b)
    };
    Ok(json!({
        "parallel": d.parallel.as_slice(),
        "perpendicular": d.perpendicular.as_slice()
    }))
}

fn bisector<const D: usize>(a: SVector<f64, D>, b: SVector<f64, D>) -> Value {
    tracing::info!(dim = D, "bisector");
    json!({ "bisector": get_bisector(a, b).as_slice() })
}

fn above(a: &Components, b: &Components, ctx: &Ctx) -> Result<Value> {
    let (a, b) = (a.planar("a")?, b.planar("b")?);
    tracing::info!(strict = ctx.strict, "above");
    let above = if ctx.strict {
        try_is_vector_endpoint_above_vector_slope(a, b, ctx.cfg.vec_cfg())?
    } else {
        is_vector_endpoint_above_vector_slope(a, b)
    };
    Ok(json!({ "above": above }))
}

fn plot(
    vecs: Vec<Components>,
    colors: Vec<String>,
    input: Option<PathBuf>,
    out: PathBuf,
    ctx: &Ctx,
) -> Result<Value> {
    let (vectors, colors) = match &input {
        Some(path) => {
            let rows = vectors::load_csv(path)?;
            (rows.vectors, rows.colors)
        }
        None => {
            let vectors = vecs
                .iter()
                .enumerate()
                .map(|(i, c)| c.planar(&format!("vec[{i}]")))
                .collect::<Result<Vec<_>>>()?;
            let colors = if colors.is_empty() {
                vec![DEFAULT_COLOR.to_string(); vectors.len()]
            } else {
                colors
            };
            (vectors, colors)
        }
    };
    if vectors.is_empty() {
        bail!("nothing to plot: pass --vec or --input");
    }
    tracing::info!(n = vectors.len(), out = %out.display(), "plot");

    let plot_cfg = ctx.cfg.plot_cfg();
    plot_vectors(&vectors, &colors, &out, &plot_cfg)?;

    let mut prov = Provenance::new(json!({
        "vectors": vectors.iter().map(|v| [v.x, v.y]).collect::<Vec<_>>(),
        "colors": colors,
        "x_range": [plot_cfg.x_range.0, plot_cfg.x_range.1],
        "y_range": [plot_cfg.y_range.0, plot_cfg.y_range.1],
        "size": [plot_cfg.width, plot_cfg.height]
    }));
    if let Some(path) = &input {
        prov = prov.with_input(path);
    }
    let prov_path = prov.write_next_to(&out)?;
    Ok(json!({
        "output": out.to_string_lossy(),
        "provenance": prov_path.to_string_lossy(),
        "vectors": vectors.len()
    }))
}

fn report() -> Value {
    json!({
        "tool": "vecgeom",
        "version": vecgeom::VERSION,
        "code_rev": provenance::current_git_rev()
    })
}
