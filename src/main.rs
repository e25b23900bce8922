//! `test-points`: emit noisy samples of a line, circle or ellipse.
//!
//! Shape parameters are read from stdin, in the order listed for each type:
//!
//! ```text
//! 0  line     slope intercept
//! 1  circle   center_x center_y radius
//! 2  ellipse  center_x center_y semi_major semi_minor rotation
//! ```
//!
//! Usage:
//! ```text
//! echo "3 4 10" | test-points -t 1 -c 100 -e 0.5 -d 3
//! RUST_LOG=test_points=debug test-points -t 0 --range1 -5 --range2 5 < line.txt
//! ```

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use test_points::shape::{DEFAULT_RANGE_HIGH, DEFAULT_RANGE_LOW};
use test_points::{ParamReader, PointGenerator, Seed, ShapeFactory};

/// Generate noisy points on a line, circle or ellipse.
#[derive(Debug, Parser)]
#[command(
    name = "test-points",
    version,
    about = "Generate noisy test points for shape fitting",
    disable_help_flag = true
)]
struct Args {
    /// Type of equation (line=0, circle=1, ellipse=2).
    #[arg(short = 't', long = "type")]
    shape_type: Option<i32>,

    /// Number of points to generate.
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Max. error to apply to y-values.
    #[arg(short, long, allow_negative_numbers = true)]
    error: Option<f64>,

    /// Start limit of x-values.
    #[arg(long, allow_negative_numbers = true)]
    range1: Option<f64>,

    /// Stop limit of x-values.
    #[arg(long, allow_negative_numbers = true)]
    range2: Option<f64>,

    /// Decimal places for output.
    #[arg(short, long, default_value_t = 6)]
    decimals: usize,

    /// Fixed random seed (defaults to the current time in seconds).
    #[arg(long)]
    seed: Option<u64>,

    /// Produce this message.
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
}

fn main() -> ExitCode {
    // Default: WARN for everything. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let Some(code) = args.shape_type.filter(|_| !args.help) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match try_main(code, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(code: i32, args: &Args) -> test_points::Result<()> {
    let mut params = ParamReader::new(io::stdin().lock());
    let mut shape = ShapeFactory::try_create(code, &mut params)?;

    if args.range1.is_some() || args.range2.is_some() {
        shape.set_range(
            args.range1.unwrap_or(DEFAULT_RANGE_LOW),
            args.range2.unwrap_or(DEFAULT_RANGE_HIGH),
        );
    }
    if let Some(error) = args.error {
        shape.set_tolerance(error);
    }

    let generator = PointGenerator::with_seed(args.seed.map_or(Seed::WallClock, Seed::Fixed));
    let mut out = BufWriter::new(io::stdout().lock());
    generator.write_text(&shape, args.count, args.decimals, &mut out)
}

fn print_usage() {
    println!("Usage: test-points [options]");
    println!("{}", Args::command().render_help());
}
