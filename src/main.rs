/*!
 * Scheduling Simulator - Command Line Entry Point
 *
 * Runs SRTF and Round Robin over the same scenario and prints:
 * - Gantt chart per policy
 * - Per-process completion, turnaround and waiting times
 * - Average metrics and a side-by-side performance summary
 */

use miette::IntoDiagnostic;
use sched_sim::{
    init_tracing, scenarios, simulate, Process, SchedulingPolicy, SimConfig, SimulationReport,
    TimeQuantum,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

// ============================================================================
// Argument Parsing
// ============================================================================

#[derive(Debug)]
enum Source {
    Builtin(String),
    File(PathBuf),
}

#[derive(Debug)]
struct Args {
    source: Source,
    quantum: Option<TimeQuantum>,
    json: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut source = None;
    let mut quantum = None;
    let mut json = false;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                let path = argv.next().ok_or("--file needs a path")?;
                source = Some(Source::File(PathBuf::from(path)));
            }
            "--quantum" | "-q" => {
                let raw = argv.next().ok_or("--quantum needs a value")?;
                quantum = Some(raw.parse::<TimeQuantum>().map_err(|e| e.to_string())?);
            }
            "--json" => json = true,
            "--help" | "-h" => return Err(String::new()),
            other if other.starts_with('-') => return Err(format!("unknown flag '{}'", other)),
            name => {
                if source.is_some() {
                    return Err("only one scenario may be given".to_string());
                }
                source = Some(Source::Builtin(name.to_string()));
            }
        }
    }

    let source = source.ok_or("missing scenario name")?;
    Ok(Args {
        source,
        quantum,
        json,
    })
}

fn usage(problem: &str) -> ExitCode {
    if !problem.is_empty() {
        eprintln!("error: {}", problem);
    }
    eprintln!("Usage: sched-sim <scenario_name> [--quantum N] [--json]");
    eprintln!("       sched-sim --file <scenario.json> [--quantum N] [--json]");
    eprintln!("Available scenarios: {}", scenarios::names().join(", "));
    ExitCode::FAILURE
}

// ============================================================================
// Rendering
// ============================================================================

fn print_report(report: &SimulationReport) {
    println!();
    println!("{} Simulation", report.policy);

    let chart: Vec<String> = report.trace.iter().map(ToString::to_string).collect();
    println!("Gantt Chart (PID, Start, End): [{}]", chart.join(", "));

    println!("Process Metrics:");
    for p in &report.processes {
        println!(
            "  P{}: Completion={}, TAT={}, WT={}",
            p.pid,
            p.completion_time.unwrap_or_default(),
            p.turnaround_time.unwrap_or_default(),
            p.waiting_time.unwrap_or_default()
        );
    }
    println!("Average Metrics: {}", report.metrics);
}

fn print_summary(reports: &[SimulationReport]) {
    println!();
    println!("Performance Summary");
    for report in reports {
        let m = report.metrics.rounded();
        println!();
        println!("Algorithm: {}", report.policy);
        println!("AWT: {:.2}", m.average_waiting_time);
        println!("ATT: {:.2}", m.average_turnaround_time);
        println!("CPU Util (%): {:.2}", m.cpu_utilization_percent);
        println!("Throughput: {:.4}", m.throughput);
        println!(
            "Context switches: {}, Preemptions: {}",
            report.stats.context_switches, report.stats.preemptions
        );
    }
}

fn describe(processes: &[Process]) -> String {
    let items: Vec<String> = processes.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

// ============================================================================
// Main
// ============================================================================

fn main() -> miette::Result<ExitCode> {
    init_tracing();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(problem) => return Ok(usage(&problem)),
    };

    let mut config = SimConfig::from_env()?;
    if let Some(quantum) = args.quantum {
        config.rr_quantum = quantum;
    }
    config.json_output |= args.json;

    let processes = match &args.source {
        Source::Builtin(name) => match scenarios::require(name) {
            Ok(processes) => {
                println!("Selected scenario via command line: {}", name);
                processes
            }
            Err(err) => return Ok(usage(&err.to_string())),
        },
        Source::File(path) => scenarios::load_file(path)?,
    };

    info!(
        processes = processes.len(),
        quantum = config.rr_quantum.ticks(),
        "running scenario"
    );

    let policies = [
        SchedulingPolicy::Srtf,
        SchedulingPolicy::round_robin(config.rr_quantum),
    ];
    let reports = policies
        .iter()
        .map(|&policy| simulate(&processes, policy))
        .collect::<Result<Vec<_>, _>>()?;

    if config.json_output {
        let json = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Simulating scenario: {}", describe(&processes));
    for report in &reports {
        print_report(report);
    }
    print_summary(&reports);

    Ok(ExitCode::SUCCESS)
}
