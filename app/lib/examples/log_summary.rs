//! Example demonstrating wrk log scraping and statistics.
//!
//! Run with: cargo run --example log_summary

use benchsum::{MetricPattern, SummaryStats, WrkSamples};

const WRK_LOG: &str = "\
Running 30s test @ https://192.168.64.2:4433/
  4 threads and 100 connections
  Thread Stats   Avg      Stdev     Max   +/- Stdev
    Latency    10.85ms    3.42ms   98.21ms   91.23%
  276612 requests in 30.02s, 135.21MB read
Requests/sec:   9214.43
Transfer/sec:      4.50MB
Running 30s test @ https://192.168.64.2:4433/
  4 threads and 100 connections
  Thread Stats   Avg      Stdev     Max   +/- Stdev
    Latency    11.02ms    3.61ms  101.44ms   90.87%
  273155 requests in 30.03s, 133.52MB read
Requests/sec:   9098.77
Transfer/sec:      4.44MB
Running 30s test @ https://192.168.64.2:4433/
  4 threads and 100 connections
  Thread Stats   Avg      Stdev     Max   +/- Stdev
    Latency    10.64ms    3.17ms   88.90ms   92.01%
  280934 requests in 30.02s, 137.32MB read
Requests/sec:   9358.25
Transfer/sec:      4.57MB
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== wrk Log Summary ===\n");
    println!("Log size: {} bytes", WRK_LOG.len());

    // Built-in metrics
    let samples = WrkSamples::parse(WRK_LOG);
    println!("Runs found: {}", samples.req_sec.len());

    println!("\n--- Requests/sec ---");
    print_stats(&samples.req_stats()?);

    println!("\n--- Transfer/sec (MB) ---");
    print_stats(&samples.transfer_stats()?);

    // A caller-defined metric over the same log
    let latency = MetricPattern::new("latency_ms", r"Latency\s+(\d+\.\d+)ms")?;
    let values = latency.extract_values(WRK_LOG);
    println!("\n--- Latency (ms, custom pattern) ---");
    print_stats(&SummaryStats::from_samples(&values)?);

    Ok(())
}

fn print_stats(stats: &SummaryStats) {
    println!("  Mean:    {:>10.2}", stats.mean);
    println!("  Median:  {:>10.2}", stats.median);
    println!("  Stdev:   {:>10.2}", stats.stdev);
    println!("  Min:     {:>10.2}", stats.min);
    println!("  Max:     {:>10.2}", stats.max);
}
