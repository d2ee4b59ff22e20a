//! relief — end-to-end run of the reliefgrid engine.
//!
//! Matches sender stock to receiver needs on an obstacle grid, routes every
//! match, and writes the results.
//!
//! ```text
//! relief                     built-in 6×6 scenario
//! relief <DIR>               DIR/locations.json + DIR/resources.json
//!                            (+ DIR/plan.json if present)
//! relief --synthetic [SEED]  generated 32×32 scenario
//! ```
//!
//! Output lands in `output/relief/`: `deliveries.csv`, `deliveries.json`, and
//! the post-matching `resources.json`.  Set `RUST_LOG=debug` for per-route
//! logs and `RELIEF_SOLVER=dijkstra` to override the configured solver.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rg_core::{PlanConfig, SolverKind};
use rg_grid::GridGraph;
use rg_inventory::{InventoryStore, MemoryStore, Scenario, SynthParams, load_scenario, load_scenario_reader, save_resources};
use rg_match::MatchReport;
use rg_output::{CsvWriter, JsonWriter, PlanOutputObserver};
use rg_plan::{BatchSummary, Delivery, PlanObserver, run_batch};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:   &str = "output/relief";
const DEFAULT_SEED: u64  = 42;

// A river (column 3) with a single crossing at row 4, and a walled-in
// warehouse in the top-right corner.
const LOCATIONS_JSON: &str = r#"{
    "n": 6,
    "obstacles": [[0, 3], [1, 3], [2, 3], [3, 3], [5, 3],
                  [0, 4], [1, 4], [1, 5]],
    "senders": [
        { "name": "depot-west",  "x": 0, "y": 0 },
        { "name": "depot-south", "x": 5, "y": 1 },
        { "name": "warehouse",   "x": 0, "y": 5 }
    ],
    "receivers": [
        { "name": "camp-east",   "x": 3, "y": 5 },
        { "name": "camp-north",  "x": 0, "y": 1 },
        { "name": "clinic",      "x": 5, "y": 5 }
    ]
}"#;

const RESOURCES_JSON: &str = r#"{
    "senders": [
        { "name": "depot-west",  "resources": { "food": 30, "water": 10 } },
        { "name": "depot-south", "resources": { "food": 5, "medicine": 4 } },
        { "name": "warehouse",   "resources": { "water": 40 } }
    ],
    "receivers": [
        { "name": "camp-east",   "needs": { "food": 20, "water": 15 } },
        { "name": "camp-north",  "needs": { "food": 10 } },
        { "name": "clinic",      "needs": { "medicine": 6, "water": 5 } }
    ]
}"#;

// ── Command line ──────────────────────────────────────────────────────────────

enum Source {
    Builtin,
    Dir(PathBuf),
    Synthetic(u64),
}

fn parse_args() -> Result<Source> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => Ok(Source::Builtin),
        Some("--synthetic") => {
            let seed = match args.next() {
                Some(s) => s.parse().with_context(|| format!("invalid seed {s:?}"))?,
                None    => DEFAULT_SEED,
            };
            Ok(Source::Synthetic(seed))
        }
        Some(dir) => Ok(Source::Dir(PathBuf::from(dir))),
    }
}

/// `plan.json` from `dir` if present, else defaults; then the
/// `RELIEF_SOLVER` override.
fn load_config(dir: Option<&Path>) -> Result<PlanConfig> {
    let mut config: PlanConfig = match dir.map(|d| d.join("plan.json")) {
        Some(path) if path.exists() => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        _ => PlanConfig::default(),
    };
    if let Ok(name) = std::env::var("RELIEF_SOLVER") {
        config.solver = name.parse::<SolverKind>()?;
    }
    config.validate()?;
    Ok(config)
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Feeds both writers and keeps a few counters for the console summary.
struct ReliefObserver {
    csv:        PlanOutputObserver<CsvWriter>,
    json:       PlanOutputObserver<JsonWriter>,
    free_cells: usize,
    notices:    usize,
}

impl PlanObserver for ReliefObserver {
    fn on_graph_built(&mut self, graph: &GridGraph) {
        self.free_cells = graph.node_count();
    }

    fn on_matched(&mut self, report: &MatchReport) {
        self.notices = report.notices.len();
    }

    fn on_delivery(&mut self, delivery: &Delivery) {
        self.csv.on_delivery(delivery);
        self.json.on_delivery(delivery);
    }

    fn on_batch_end(&mut self, summary: &BatchSummary) {
        self.csv.on_batch_end(summary);
        self.json.on_batch_end(summary);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Scenario and config.
    let source = parse_args()?;
    let (scenario, config): (Scenario, PlanConfig) = match &source {
        Source::Builtin => (
            load_scenario_reader(Cursor::new(LOCATIONS_JSON), Cursor::new(RESOURCES_JSON))?,
            load_config(None)?,
        ),
        Source::Dir(dir) => (
            load_scenario(&dir.join("locations.json"), &dir.join("resources.json"))?,
            load_config(Some(dir))?,
        ),
        Source::Synthetic(seed) => (
            rg_inventory::generate(&SynthParams::default(), *seed)?,
            load_config(None)?,
        ),
    };

    println!("=== relief: reliefgrid delivery planner ===");
    println!(
        "Grid: {0}×{0}  |  Obstacles: {1}  |  Senders: {2}  |  Receivers: {3}  |  Solver: {4}",
        scenario.size,
        scenario.obstacles.len(),
        scenario.senders.len(),
        scenario.receivers.len(),
        config.solver,
    );
    println!();

    // 2. The store owns the rosters; the batch works on a snapshot.
    let mut store = MemoryStore::from_scenario(scenario)?;

    // 3. Output.
    let out_dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out_dir)?;
    let mut obs = ReliefObserver {
        csv:        PlanOutputObserver::new(CsvWriter::new(out_dir)?),
        json:       PlanOutputObserver::new(JsonWriter::new(out_dir)?),
        free_cells: 0,
        notices:    0,
    };

    // 4. Run.
    let t0 = Instant::now();
    let outcome = run_batch(store.snapshot(), &config, &mut obs)?;
    let elapsed = t0.elapsed();

    for err in [obs.csv.take_error(), obs.json.take_error()].into_iter().flatten() {
        eprintln!("output error: {err}");
    }

    // 5. Commit the new quantities and persist them.
    store.commit(&outcome.scenario.senders, &outcome.scenario.receivers)?;
    let after = store.snapshot();
    save_resources(&out_dir.join("resources.json"), &after.senders, &after.receivers)?;
    info!(dir = OUTPUT_DIR, "results written");

    // 6. Summary.
    println!("Batch complete in {:.3} s ({} free cells)", elapsed.as_secs_f64(), obs.free_cells);
    println!(
        "  deliveries          : {} ({} unreachable)",
        outcome.summary.matches, outcome.summary.unreachable
    );
    println!("  notices             : {}", obs.notices);
    println!("  deliveries.csv      : {} rows", obs.csv.written());
    println!();

    println!("{:<14} {:<14} {:<10} {:>8} {:>8}", "Sender", "Receiver", "Resource", "Qty", "Time");
    println!("{}", "-".repeat(58));
    for d in &outcome.deliveries {
        let r = &d.record;
        let time = r.time.map(|t| format!("{t:.2}")).unwrap_or_else(|| "n/a".into());
        println!(
            "{:<14} {:<14} {:<10} {:>8} {:>8}",
            r.sender_name, r.receiver_name, r.resource, r.quantity, time
        );
    }

    if !outcome.report.notices.is_empty() {
        println!();
        println!("Notices:");
        let (senders, receivers) = (&outcome.scenario.senders, &outcome.scenario.receivers);
        for notice in &outcome.report.notices {
            println!("  {}", notice.named(senders, receivers));
        }
    }

    Ok(())
}
