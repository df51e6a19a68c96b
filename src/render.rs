//! Plain-text rendering of simulation reports.

use std::fmt::{self, Write};

use cpu_schedule::scheduler::SimulationReport;

pub fn table(report: &SimulationReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Policy: {}", report.policy)?;
    writeln!(
        out,
        "{:<10} {:>8} {:>6} {:>8} {:>6} {:>10} {:>6} {:>10}",
        "ID", "Arrival", "Burst", "Priority", "Start", "Completion", "Wait", "Turnaround"
    )?;
    for p in &report.schedule.processes {
        writeln!(
            out,
            "{:<10} {:>8} {:>6} {:>8} {:>6} {:>10} {:>6} {:>10}",
            p.process.id,
            p.process.arrival_time,
            p.process.burst_time,
            p.process.priority,
            p.start_time,
            p.completion_time,
            p.wait_time,
            p.turnaround_time
        )?;
    }

    let gantt: Vec<String> = report
        .schedule
        .timeline
        .iter()
        .map(|s| format!("[{} {}-{}]", s.process_id, s.start, s.end))
        .collect();
    writeln!(out, "\nTimeline: {}", gantt.join(" "))?;

    let s = &report.summary;
    writeln!(out, "\nTotal processes:     {}", s.count)?;
    writeln!(out, "Avg wait time:       {:.1}", s.avg_wait_time)?;
    writeln!(out, "Avg turnaround time: {:.1}", s.avg_turnaround_time)?;
    writeln!(out, "Avg response time:   {:.1}", s.avg_response_time)?;
    writeln!(out, "CPU utilization:     {}%", s.cpu_utilization)?;
    Ok(out)
}
