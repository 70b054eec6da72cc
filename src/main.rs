//! sg-attachments: report which resources are attached to each security group
//!
//! Scans one AWS region's security groups and prints a table of every
//! resource that references each group.

use anyhow::Result;
use clap::Parser;
use sg_attachments::attachments::AttachmentIndex;
use sg_attachments::report;
use sg_attachments::scanner::AttachmentScanner;

#[derive(Parser, Debug)]
#[command(name = "sg-attachments")]
#[command(about = "List the resources attached to each security group in a region")]
#[command(version)]
struct Args {
    /// AWS region to scan (e.g. us-east-2)
    region: String,
}

impl Args {
    /// Region argument with surrounding whitespace stripped
    fn trimmed_region(&self) -> &str {
        self.region.trim()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr) // Log to stderr, the report owns stdout
        .init();

    // A failed scan reports on stdout and still exits 0; only argument
    // errors from clap produce a nonzero exit
    match run(args.trimmed_region()).await {
        Ok(index) => report::print(&index),
        Err(e) => println!("{}", report::error_line(&e)),
    }
}

async fn run(region: &str) -> Result<AttachmentIndex> {
    let scanner = AttachmentScanner::new(region).await?;
    scanner.scan().await
}
