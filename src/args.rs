use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-scan")]
#[command(about = "Analyze the on-page and technical SEO of a single web page")]
#[command(version)]
pub struct Args {
    /// URL of the page to analyze (https:// is assumed when no scheme is given)
    pub url: String,

    /// Keyword for the semantic density score
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Timeout for the page request in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Do not query the page-speed service or time the page
    #[arg(long)]
    pub no_pagespeed: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the prioritized improvement roadmap
    #[arg(long)]
    pub roadmap: bool,
}
