use anyhow::{Context, Result};
use chull::prelude::*;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull front end: sample points, hull them, emit JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(clap::Args)]
struct ReplayArgs {
    /// Replay seed for reproducible point draws
    #[arg(long, default_value_t = 2025)]
    seed: u64,

    /// Replay index (distinct draws under one seed)
    #[arg(long, default_value_t = 0)]
    index: u64,
}

impl ReplayArgs {
    fn token(&self) -> ReplayToken {
        ReplayToken {
            seed: self.seed,
            index: self.index,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Draw random points in a margined region and write them as JSON
    Sample {
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[command(flatten)]
        replay: ReplayArgs,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// Read a JSON point array, compute its hull, write points + hull
    Hull {
        #[arg(long)]
        input: String,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// Sample then hull; log counts, verify containment and turn direction
    Demo {
        #[arg(long, default_value_t = 25)]
        count: usize,
        #[command(flatten)]
        replay: ReplayArgs,
    },
}

/// JSON-facing point record; the core stays nalgebra-only.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
struct PointRec {
    x: f64,
    y: f64,
}

impl From<Vec2<f64>> for PointRec {
    fn from(p: Vec2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointRec> for Vec2<f64> {
    fn from(r: PointRec) -> Self {
        Vec2::new(r.x, r.y)
    }
}

/// Points plus their hull, the shape the `hull` subcommand emits.
#[derive(Serialize, Deserialize)]
struct HullDoc {
    points: Vec<PointRec>,
    hull: Vec<PointRec>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            count,
            width,
            height,
            replay,
            out,
        } => sample(count, width, height, replay.token(), out),
        Action::Hull { input, out } => hull(input, out),
        Action::Demo { count, replay } => demo(count, replay.token()),
    }
}

fn sample(count: usize, width: f64, height: f64, tok: ReplayToken, out: Option<String>) -> Result<()> {
    tracing::info!(count, width, height, seed = tok.seed, index = tok.index, "sample");
    let cfg = RectCfg {
        count,
        width,
        height,
        ..RectCfg::default()
    };
    let recs: Vec<PointRec> = draw_points_rect(cfg, tok).into_iter().map(Into::into).collect();
    emit(&recs, out.as_deref())
}

fn hull(input: String, out: Option<String>) -> Result<()> {
    let points = load_points(&input)?;
    let hull = convex_hull(&points);
    tracing::info!(input, n = points.len(), hull = hull.len(), "hull");
    let doc = HullDoc {
        points: points.into_iter().map(Into::into).collect(),
        hull: hull.into_iter().map(Into::into).collect(),
    };
    emit(&doc, out.as_deref())
}

fn demo(count: usize, tok: ReplayToken) -> Result<()> {
    let cfg = RectCfg {
        count,
        ..RectCfg::default()
    };
    let points = draw_points_rect(cfg, tok);
    let hull = convex_hull(&points);
    let all_inside = points.iter().all(|&p| contains(&hull, p));
    let all_ccw = turns_strictly_left(&hull);
    tracing::info!(n = points.len(), hull = hull.len(), all_inside, all_ccw, "demo");
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "n": points.len(),
            "hull": hull.len(),
            "all_inside": all_inside,
            "all_ccw": all_ccw,
        }))?
    );
    Ok(())
}

/// Every consecutive triple (wraparound included) makes a left turn.
/// Degenerate hulls (point, segment) pass vacuously.
fn turns_strictly_left(hull: &[Vec2<f64>]) -> bool {
    let n = hull.len();
    n < 3
        || (0..n).all(|i| {
            orientation(hull[i], hull[(i + 1) % n], hull[(i + 2) % n])
                == Orientation::CounterClockwise
        })
}

/// Read a JSON array of `{x, y}` records.
fn load_points(path: &str) -> Result<Vec<Vec2<f64>>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading points from {path}"))?;
    let recs: Vec<PointRec> =
        serde_json::from_str(&raw).with_context(|| format!("parsing point records in {path}"))?;
    Ok(recs.into_iter().map(Into::into).collect())
}

/// Pretty-printed JSON to a file (creating parent dirs) or stdout.
fn emit<T: Serialize>(value: &T, out: Option<&str>) -> Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    match out {
        Some(out) => {
            let out_path = Path::new(out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            std::fs::write(out_path, body).with_context(|| format!("writing {out}"))?;
        }
        None => println!("{body}"),
    }
    Ok(())
}
