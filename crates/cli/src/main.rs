use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use uigeom::prelude::*;
use uigeom::space::bounds_for_transformed_points;

mod provenance;

#[derive(Parser)]
#[command(name = "uigeom-cli")]
#[command(about = "Inspect easing curves, rotations and projected bounds")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Parse an easing function and sample the curve
    Bezier {
        /// Keyword or `cubic-bezier(x1, y1, x2, y2)`
        text: String,
        #[arg(long, default_value_t = 10)]
        samples: usize,
        /// Write the JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Decompose a rotation matrix into Euler angles
    Euler {
        /// `matrix(...)`, `matrix3d(...)` or `none`
        #[arg(long)]
        matrix: String,
        #[arg(long, value_enum, default_value_t = DecoderArg::GimbalSafe)]
        decoder: DecoderArg,
    },
    /// Bounds of x,y,z triples projected through a matrix
    Bounds {
        #[arg(long)]
        matrix: String,
        /// Comma-separated flat list: x0,y0,z0,x1,y1,z1,...
        #[arg(long, allow_hyphen_values = true)]
        points: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum DecoderArg {
    Simple,
    GimbalSafe,
    ClampedAsin,
}

impl From<DecoderArg> for RotationDecoder {
    fn from(arg: DecoderArg) -> Self {
        match arg {
            DecoderArg::Simple => RotationDecoder::Simple,
            DecoderArg::GimbalSafe => RotationDecoder::GimbalSafe,
            DecoderArg::ClampedAsin => RotationDecoder::ClampedAsin,
        }
    }
}

#[derive(Serialize)]
struct Sample {
    t: f64,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct BezierReport {
    input: String,
    css_text: String,
    control_points: [[f64; 2]; 2],
    samples: Vec<Sample>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Bezier { text, samples, out } => bezier(text, samples, out),
        Action::Euler { matrix, decoder } => euler(matrix, decoder.into()),
        Action::Bounds { matrix, points } => bounds(matrix, points),
        Action::Report => report(),
    }
}

fn bezier_report(text: &str, samples: usize) -> Result<BezierReport> {
    let curve =
        CubicBezier::parse(text).ok_or_else(|| anyhow!("not an easing function: {text:?}"))?;
    let steps = samples.max(1);
    let samples = (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let p = curve.evaluate_at(t);
            Sample { t, x: p.x, y: p.y }
        })
        .collect();
    let [p1, p2] = curve.control_points;
    Ok(BezierReport {
        input: text.to_string(),
        css_text: curve.as_css_text(),
        control_points: [[p1.x, p1.y], [p2.x, p2.y]],
        samples,
    })
}

fn bezier(text: String, samples: usize, out: Option<String>) -> Result<()> {
    tracing::info!(text, samples, out = ?out, "bezier");
    let report = bezier_report(&text, samples)?;
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    };

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    let payload = provenance::Payload::new(
        "bezier",
        serde_json::json!({ "text": text, "samples": samples }),
    )
    .with_summary(serde_json::json!({
        "css_text": report.css_text,
        "control_points": report.control_points,
        "sample_count": report.samples.len(),
    }));
    let sidecar = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(sidecar = %sidecar.display(), "wrote provenance");
    Ok(())
}

fn euler(matrix: String, decoder: RotationDecoder) -> Result<()> {
    tracing::info!(matrix, decoder = decoder.name(), "euler");
    let m: CssMatrix = matrix.parse()?;
    let angles = decoder.decode(&m).context("decoding rotation")?;
    let obj = serde_json::json!({
        "decoder": decoder.name(),
        "alpha": angles.alpha,
        "beta": angles.beta,
        "gamma": angles.gamma,
        "css": angles.to_css_rotation_string(),
        "rebuilds_input": decoder.compose(&angles).approx_eq(&m, 1e-4),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn parse_points(points: &str) -> Result<Vec<f64>> {
    points
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .with_context(|| format!("bad coordinate {p:?}"))
        })
        .collect()
}

fn bounds(matrix: String, points: String) -> Result<()> {
    tracing::info!(matrix, "bounds");
    let m: CssMatrix = matrix.parse()?;
    let coords = parse_points(&points)?;
    let b = bounds_for_transformed_points(&m, &coords, None);
    let obj = serde_json::json!({
        "minX": b.min_x,
        "maxX": b.max_x,
        "minY": b.min_y,
        "maxY": b.max_y,
        "empty": b.is_empty(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": uigeom::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezier_report_samples_include_endpoints() {
        let report = bezier_report("EASE", 4).unwrap();
        assert_eq!(report.css_text, "ease");
        assert_eq!(report.samples.len(), 5);
        assert_eq!(report.samples[0].t, 0.0);
        assert!((report.samples[4].y - 1.0).abs() < 1e-12);
        assert_eq!(report.control_points, [[0.25, 0.1], [0.25, 1.0]]);
    }

    #[test]
    fn bezier_out_writes_sidecar_with_css_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("curves").join("ease-in.json");
        bezier(
            "ease-in".to_string(),
            2,
            Some(out.to_string_lossy().into_owned()),
        )
        .unwrap();
        assert!(out.exists());
        let sidecar = dir.path().join("curves").join("ease-in.provenance.json");
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["command"], "bezier");
        assert_eq!(parsed["summary"]["css_text"], "ease-in");
        assert_eq!(parsed["summary"]["sample_count"], 3);
    }

    #[test]
    fn bezier_report_rejects_unknown_text() {
        assert!(bezier_report("steps(3)", 4).is_err());
    }

    #[test]
    fn points_parse_or_fail() {
        assert_eq!(
            parse_points("0, 0,0,1,-1.5,0").unwrap(),
            vec![0.0, 0.0, 0.0, 1.0, -1.5, 0.0]
        );
        assert!(parse_points("1,x,3").is_err());
    }

    #[test]
    fn decoder_args_map_one_to_one() {
        let args = [
            DecoderArg::Simple,
            DecoderArg::GimbalSafe,
            DecoderArg::ClampedAsin,
        ];
        let mapped: Vec<RotationDecoder> = args.into_iter().map(RotationDecoder::from).collect();
        assert_eq!(mapped, RotationDecoder::ALL.to_vec());
    }
}
