use libtest_mimic::{Arguments, Failed, Trial};
use rectsweeper::{measure, Rect, Splitter, SweepStats};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug)]
enum Assertion {
    /// The output is a valid decomposition of the input.
    Valid,
    /// The output is exactly this, in this order.
    Exact { rects: Vec<[i64; 4]> },
    /// The input is rejected, blaming the rectangle at this index.
    NegativeSize { index: usize },
}

#[derive(Serialize, Deserialize, Debug)]
struct RegressionCaseDeclaration {
    rects: Vec<[i64; 4]>,
    #[serde(default)]
    requeue_trailing: bool,
    assert: Option<Assertion>,
    stats: Option<[usize; 3]>,
}

impl RegressionCaseDeclaration {
    fn input(&self) -> Vec<Rect<i64>> {
        self.rects.iter().copied().map(to_rect).collect()
    }

    fn splitter(&self) -> Splitter {
        Splitter::new().emit_trailing_fragments(!self.requeue_trailing)
    }
}

fn to_rect([x, y, w, h]: [i64; 4]) -> Rect<i64> {
    Rect::new(x, y, w, h)
}

fn main() {
    let args = Arguments::from_args();
    let tests = regression_tests();

    libtest_mimic::run(&args, tests).exit();
}

fn regression_tests() -> Vec<Trial> {
    let ws = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let file_paths = glob::glob(&format!("{ws}/tests/regression/**/*.yml")).unwrap();

    file_paths
        .into_iter()
        .map(|p| {
            let p = p.unwrap();
            let name = input_path_base(&p).display().to_string();
            Trial::test(name, || generate_regression_test(p))
        })
        .collect()
}

fn input_path_base(input_path: &Path) -> &Path {
    let ws = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let base = format!("{ws}/tests/regression");
    input_path.strip_prefix(base).unwrap()
}

fn generate_regression_test(path: PathBuf) -> Result<(), Failed> {
    let input = std::fs::read_to_string(&path).unwrap();
    let case: RegressionCaseDeclaration = serde_yaml::from_str(&input).unwrap();
    let rects = case.input();

    let mut output = Vec::new();
    let result = case.splitter().split_into(rects.iter().copied(), |r| output.push(r));

    if let Some(Assertion::NegativeSize { index }) = case.assert {
        return match result {
            Err(rectsweeper::Error::NegativeSize { index: i }) if i == index && output.is_empty() => {
                Ok(())
            }
            other => Err(format!("expected rejection of rect {index}, got {other:?}").into()),
        };
    }

    let stats = result.map_err(|e| Failed::from(e.to_string()))?;
    check_valid(&rects, &output)?;

    if let Some(Assertion::Exact { rects: expected }) = case.assert {
        let expected = expected.into_iter().map(to_rect).collect::<Vec<_>>();
        if output != expected {
            return Err(format!("expected {expected:?}, got {output:?}").into());
        }
    }

    if let Some([events, splits, emitted]) = case.stats {
        let expected = SweepStats {
            events,
            splits,
            emitted,
        };
        if stats != expected {
            return Err(format!("expected {expected:?}, got {stats:?}").into());
        }
    }

    Ok(())
}

fn check_valid(input: &[Rect<i64>], output: &[Rect<i64>]) -> Result<(), Failed> {
    if let Some((i, j)) = measure::find_intersection(output) {
        return Err(format!("{:?} and {:?} intersect", output[i], output[j]).into());
    }
    if output.iter().any(Rect::is_empty) {
        return Err(format!("empty rect in output {output:?}").into());
    }

    let covered = measure::union_area(input);
    let total = measure::sum_areas(output);
    if covered != total {
        return Err(format!("input covers {covered}, output covers {total}").into());
    }

    let in_bbox = measure::bounding_box(input.iter().filter(|r| !r.is_empty()));
    let out_bbox = measure::bounding_box(output);
    if in_bbox != out_bbox {
        return Err(format!("input bbox {in_bbox:?}, output bbox {out_bbox:?}").into());
    }
    Ok(())
}
