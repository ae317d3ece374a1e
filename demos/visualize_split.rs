use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser};

use rectsweeper::{debug_svg::dump_svg, generators, Rect, Splitter};

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Example {
    Checkerboard,
    Nested,
    Random,
}

#[derive(Parser)]
struct Cli {
    #[arg(long)]
    output: PathBuf,

    #[command(flatten)]
    input: Input,

    /// Send pieces behind the sweep-line back through the sweep instead of
    /// emitting them immediately.
    #[arg(long)]
    requeue_trailing: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// A file with one rectangle per line, as `x y width height`.
    input: Option<PathBuf>,

    #[arg(long)]
    example: Option<Example>,
}

fn read_rects(path: &Path) -> anyhow::Result<Vec<Rect<i64>>> {
    let input = std::fs::read_to_string(path)?;
    let mut ret = Vec::new();
    for (line_no, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let nums = line
            .split_whitespace()
            .map(str::parse::<i64>)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("line {}", line_no + 1))?;
        let [x, y, w, h] = nums[..] else {
            anyhow::bail!("line {}: expected 4 numbers, got {}", line_no + 1, nums.len());
        };
        ret.push(Rect::new(x, y, w, h));
    }
    Ok(ret)
}

fn get_rects(input: &Input) -> anyhow::Result<Vec<Rect<i64>>> {
    let widen = |rects: Vec<Rect<i32>>| -> Vec<Rect<i64>> {
        rects
            .into_iter()
            .map(|r| Rect::new(r.x.into(), r.y.into(), r.width.into(), r.height.into()))
            .collect()
    };

    match (&input.input, &input.example) {
        (Some(path), None) => read_rects(path),
        (None, Some(example)) => Ok(match example {
            Example::Checkerboard => widen(generators::checkerboard(5)),
            Example::Nested => widen(generators::nested(6)),
            Example::Random => widen(generators::random_rects(13607, 100, 1..=100)),
        }),
        _ => unreachable!(),
    }
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    let input = get_rects(&args.input)?;

    let mut output = Vec::new();
    let stats = Splitter::new()
        .emit_trailing_fragments(!args.requeue_trailing)
        .split_into(input.iter().copied(), |r| output.push(r))?;
    tracing::info!(
        inputs = input.len(),
        outputs = output.len(),
        splits = stats.splits,
        events = stats.events,
        "split"
    );

    let document = dump_svg(&input, &output);
    svg::save(&args.output, &document)?;

    Ok(())
}
