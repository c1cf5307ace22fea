/*!
 * Scheduler Tests
 * End-to-end runs of both dispatch policies against hand-traced schedules
 */

use pretty_assertions::assert_eq;
use sched_sim::{
    scenarios, simulate, Engine, MetricsRecord, Process, RoundRobin, SchedulingPolicy, SimError,
    SimulationReport, TimeQuantum, TraceInterval, TraceLabel, ValidationError,
};

fn rr(quantum: i64) -> SchedulingPolicy {
    SchedulingPolicy::round_robin(TimeQuantum::new(quantum).unwrap())
}

fn run(name: &str, policy: SchedulingPolicy) -> SimulationReport {
    simulate(&scenarios::builtin(name).unwrap(), policy).unwrap()
}

fn chart(report: &SimulationReport) -> Vec<(String, u64, u64)> {
    report
        .trace
        .iter()
        .map(|i| (i.label.to_string(), i.start, i.end))
        .collect()
}

fn spans(items: &[(&str, u64, u64)]) -> Vec<(String, u64, u64)> {
    items
        .iter()
        .map(|&(label, start, end)| (label.to_string(), start, end))
        .collect()
}

fn completions(report: &SimulationReport) -> Vec<(u32, u64)> {
    report
        .processes
        .iter()
        .map(|p| (p.pid, p.completion_time.unwrap()))
        .collect()
}

#[test]
fn test_srtf_small_preempts_for_shorter_arrival() {
    let report = run("small", SchedulingPolicy::Srtf);

    // P2 arrives at tick 1 with 4 remaining against P1's 7
    assert_eq!(
        chart(&report),
        spans(&[
            ("P1", 0, 1),
            ("P2", 1, 5),
            ("P4", 5, 10),
            ("P1", 10, 17),
            ("P3", 17, 26),
        ])
    );
    assert_eq!(completions(&report), vec![(1, 17), (2, 5), (3, 26), (4, 10)]);

    let starts: Vec<_> = report.processes.iter().map(|p| p.start_time.unwrap()).collect();
    assert_eq!(starts, vec![0, 1, 17, 5]);

    let waits: Vec<_> = report.processes.iter().map(|p| p.waiting_time.unwrap()).collect();
    assert_eq!(waits, vec![9, 0, 15, 2]);

    assert_eq!(report.metrics.average_waiting_time, 6.5);
    assert_eq!(report.metrics.average_turnaround_time, 13.0);
    assert_eq!(report.metrics.cpu_utilization_percent, 100.0);
    assert_eq!(report.metrics.rounded().throughput, 0.1538);
}

#[test]
fn test_round_robin_small_caps_each_slice() {
    let report = run("small", rr(4));

    assert_eq!(
        chart(&report),
        spans(&[
            ("P1", 0, 4),
            ("P2", 4, 8),
            ("P3", 8, 12),
            ("P4", 12, 16),
            ("P1", 16, 20),
            ("P3", 20, 24),
            ("P4", 24, 25),
            ("P3", 25, 26),
        ])
    );
    assert_eq!(completions(&report), vec![(1, 20), (2, 8), (3, 26), (4, 25)]);
    assert_eq!(report.metrics.average_waiting_time, 11.75);
    assert_eq!(report.metrics.average_turnaround_time, 18.25);

    assert_eq!(report.stats.dispatches, 8);
    assert_eq!(report.stats.preemptions, 4);
    assert_eq!(report.stats.context_switches, 7);
    assert_eq!(report.stats.busy_ticks, 26);
    assert_eq!(report.stats.idle_ticks, 0);
}

#[test]
fn test_large_quantum_degenerates_to_fcfs() {
    let report = run("small", rr(100));
    assert_eq!(
        chart(&report),
        spans(&[("P1", 0, 8), ("P2", 8, 12), ("P3", 12, 21), ("P4", 21, 26)])
    );
    assert_eq!(report.stats.preemptions, 0);
}

#[test]
fn test_srtf_large_equal_bursts_run_in_arrival_order() {
    let report = run("large", SchedulingPolicy::Srtf);

    let expected: Vec<(u32, u64)> = (1..=10).map(|pid| (pid, 5 * pid as u64)).collect();
    assert_eq!(completions(&report), expected);
    assert_eq!(report.metrics.average_waiting_time, 15.3);
    assert_eq!(report.metrics.average_turnaround_time, 20.3);
    assert_eq!(report.metrics.cpu_utilization_percent, 100.0);
    assert_eq!(report.metrics.throughput, 0.2);
}

#[test]
fn test_edge1_all_arrive_at_zero() {
    let srtf = run("edge1", SchedulingPolicy::Srtf);
    assert_eq!(
        chart(&srtf),
        spans(&[
            ("P2", 0, 1),
            ("P4", 1, 2),
            ("P3", 2, 4),
            ("P5", 4, 9),
            ("P1", 9, 19),
        ])
    );

    let round_robin = run("edge1", rr(4));
    assert_eq!(
        chart(&round_robin),
        spans(&[
            ("P1", 0, 4),
            ("P2", 4, 5),
            ("P3", 5, 7),
            ("P4", 7, 8),
            ("P5", 8, 12),
            ("P1", 12, 16),
            ("P5", 16, 17),
            ("P1", 17, 19),
        ])
    );
}

#[test]
fn test_edge2_idle_gap_before_late_arrival() {
    let srtf = run("edge2", SchedulingPolicy::Srtf);
    assert_eq!(
        chart(&srtf),
        spans(&[
            ("P1", 0, 1),
            ("P2", 1, 3),
            ("P4", 3, 4),
            ("P3", 4, 7),
            ("P1", 7, 26),
            ("Idle", 26, 30),
            ("P5", 30, 32),
        ])
    );
    assert_eq!(srtf.stats.idle_ticks, 4);
    assert_eq!(srtf.metrics.cpu_utilization_percent, 87.5);

    let round_robin = run("edge2", rr(4));
    assert_eq!(
        chart(&round_robin),
        spans(&[
            ("P1", 0, 4),
            ("P2", 4, 6),
            ("P3", 6, 9),
            ("P4", 9, 10),
            ("P1", 10, 26),
            ("Idle", 26, 30),
            ("P5", 30, 32),
        ])
    );
    assert_eq!(round_robin.processes[4].start_time, Some(30));
    assert_eq!(round_robin.processes[4].waiting_time, Some(0));
}

#[test]
fn test_leading_idle_interval() {
    let report = simulate(&[Process::new(1, 3, 2)], SchedulingPolicy::Srtf).unwrap();
    assert_eq!(
        report.trace,
        vec![
            TraceInterval::new(TraceLabel::Idle, 0, 3),
            TraceInterval::new(TraceLabel::Process(1), 3, 5),
        ]
    );
    // Utilization is measured from the first arrival
    assert_eq!(report.metrics.cpu_utilization_percent, 100.0);
    assert_eq!(report.metrics.throughput, 0.2);
}

#[test]
fn test_single_process_under_both_policies() {
    for policy in [SchedulingPolicy::Srtf, rr(4)] {
        let report = simulate(&[Process::new(1, 0, 5)], policy).unwrap();
        let p = &report.processes[0];

        assert_eq!(p.start_time, Some(0));
        assert_eq!(p.completion_time, Some(5));
        assert_eq!(p.waiting_time, Some(0));
        assert_eq!(p.turnaround_time, Some(5));
        assert_eq!(report.metrics.cpu_utilization_percent, 100.0);
        assert_eq!(
            report.trace,
            vec![TraceInterval::new(TraceLabel::Process(1), 0, 5)]
        );
    }
}

#[test]
fn test_empty_input() {
    for policy in [SchedulingPolicy::Srtf, rr(2)] {
        let report = simulate(&[], policy).unwrap();
        assert_eq!(report.metrics, MetricsRecord::default());
        assert!(report.trace.is_empty());
        assert!(report.processes.is_empty());
    }
}

#[test]
fn test_unsorted_input_is_sorted_by_arrival_then_pid() {
    let processes = [
        Process::new(3, 2, 1),
        Process::new(2, 0, 2),
        Process::new(1, 0, 2),
    ];
    let report = simulate(&processes, rr(1)).unwrap();
    assert_eq!(
        report.trace,
        vec![
            TraceInterval::new(TraceLabel::Process(1), 0, 1),
            TraceInterval::new(TraceLabel::Process(2), 1, 2),
            TraceInterval::new(TraceLabel::Process(1), 2, 3),
            TraceInterval::new(TraceLabel::Process(3), 3, 4),
            TraceInterval::new(TraceLabel::Process(2), 4, 5),
        ]
    );
    let pids: Vec<_> = report.processes.iter().map(|p| p.pid).collect();
    assert_eq!(pids, vec![1, 2, 3]);
}

#[test]
fn test_invalid_input_is_rejected_up_front() {
    let cases = [
        (
            vec![Process::new(1, 0, 0)],
            ValidationError::NonPositiveBurst { pid: 1, burst: 0 },
        ),
        (
            vec![Process::new(1, -2, 3)],
            ValidationError::NegativeArrival { pid: 1, arrival: -2 },
        ),
        (
            vec![Process::new(4, 0, 3), Process::new(4, 1, 1)],
            ValidationError::DuplicatePid(4),
        ),
        (
            vec![
                Process::new(1, 0, i64::MAX),
                Process::new(2, 0, i64::MAX),
                Process::new(3, 0, 2),
            ],
            ValidationError::HorizonOverflow { pid: 3 },
        ),
    ];

    for (processes, expected) in cases {
        for policy in [SchedulingPolicy::Srtf, rr(4), rr(i64::MAX)] {
            match simulate(&processes, policy) {
                Err(SimError::Validation(err)) => assert_eq!(err, expected),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }
}

#[test]
fn test_replay_is_identical_and_input_untouched() {
    let processes = scenarios::builtin("edge2").unwrap();
    let snapshot = processes.clone();

    let first_rr = simulate(&processes, rr(4)).unwrap();
    let srtf = simulate(&processes, SchedulingPolicy::Srtf).unwrap();
    let second_rr = simulate(&processes, rr(4)).unwrap();

    assert_eq!(first_rr, second_rr);
    assert_ne!(first_rr.trace, srtf.trace);
    assert_eq!(processes, snapshot);
}

#[test]
fn test_round_robin_steps_never_exceed_quantum() {
    let processes = scenarios::builtin("small").unwrap();
    let quantum = TimeQuantum::new(3).unwrap();
    let mut engine = Engine::new(&processes, RoundRobin::new(quantum)).unwrap();

    let mut executed = 0;
    while let Some(span) = engine.step() {
        if !span.label.is_idle() {
            assert!(span.duration() <= quantum.ticks(), "{} exceeds quantum", span);
            executed += span.duration();
        }
    }
    assert_eq!(executed, 26);
}

#[test]
fn test_report_serializes_to_json() {
    let report = run("small", SchedulingPolicy::Srtf);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["policy"], "srtf");
    assert_eq!(json["trace"][0]["label"]["kind"], "process");
    assert_eq!(json["trace"][0]["label"]["pid"], 1);
    assert_eq!(json["processes"][1]["completion_time"], 5);
}
