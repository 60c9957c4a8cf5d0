use clap::Parser;
use seo_scan::{Analyzer, Report, report};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting analysis for URL: {}", args.url);

    let analyzer = match build_analyzer(&args) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };

    let start_time = std::time::Instant::now();
    let report = match analyzer.run().await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Analysis failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    ::log::info!(
        "Analysis complete in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    print_report(&report, &args);
}

fn build_analyzer(args: &Args) -> Result<Analyzer, Box<dyn std::error::Error>> {
    let mut analyzer = Analyzer::new(&args.url);

    if let Some(path) = &args.config {
        analyzer = analyzer.with_config_file(path)?;
    }
    if let Some(keyword) = &args.keyword {
        analyzer = analyzer.with_keyword(keyword);
    }
    if let Some(timeout) = args.timeout {
        analyzer = analyzer.with_page_timeout(timeout);
    }
    if args.no_pagespeed {
        analyzer = analyzer.without_pagespeed();
    }

    Ok(analyzer)
}

fn print_report(report: &Report, args: &Args) {
    if args.json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => ::log::error!("Failed to serialize report: {}", e),
        }
        return;
    }

    print!("{}", report::TextReport(report));
    if args.roadmap {
        print!("{}", report::RoadmapList(&report.roadmap));
    }
}
