//! DBox Sizer
//!
//! Command-line front end for the capacity calculator. Results go to stdout
//! (text or JSON); logs go to stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dbox_sizer::{
    list_models, CapacityEngine, CapacityRequest, CapacityResult, ClusterPerformance,
    SizerConfig, TopologyMode,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// DBox Sizer - usable and effective capacity for DBox clusters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config file
    #[arg(long, env = "DBOX_SIZER_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the maximum chassis count
    #[arg(long, env = "DBOX_MAX_CHASSIS", global = true)]
    max_chassis: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported DBox models
    Models {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute cluster capacity
    Calc {
        /// Model key (see `models`)
        #[arg(long)]
        model: String,

        /// QLC drive size in TB
        #[arg(long = "disk-tb")]
        disk_tb: f64,

        /// Number of DBox chassis
        #[arg(long)]
        chassis: u32,

        /// Topology mode (standard, dbox-ha)
        #[arg(long, default_value = "standard")]
        topology: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate advisory cluster performance
    Perf {
        /// Model key (see `models`)
        #[arg(long)]
        model: String,

        /// Number of DBox chassis
        #[arg(long)]
        chassis: u32,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON schema of request and result
    Schema,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&args)?;

    let config = load_config(&args)?;
    info!(
        max_chassis = config.max_chassis,
        drr = config.data_reduction_ratio,
        "DBox sizer {} starting",
        dbox_sizer::VERSION
    );

    let engine = CapacityEngine::with_config(config);

    match args.command {
        Command::Models { json } => print_models(json)?,
        Command::Calc {
            model,
            disk_tb,
            chassis,
            topology,
            json,
        } => {
            let topology: TopologyMode = topology.parse()?;
            let request = CapacityRequest::new(model, disk_tb, chassis, topology);
            let result = engine.compute_capacity(&request)?;
            print_capacity(&request, &result, json)?;
        }
        Command::Perf {
            model,
            chassis,
            json,
        } => {
            let perf = engine.estimate_performance(&model, chassis)?;
            print_performance(&perf, json)?;
        }
        Command::Schema => print_schema()?,
    }

    Ok(())
}

// =============================================================================
// Setup
// =============================================================================

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<SizerConfig> {
    let mut config = match &args.config {
        Some(path) => SizerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SizerConfig::default(),
    };

    if let Some(max_chassis) = args.max_chassis {
        debug!(max_chassis, "Overriding maximum chassis count");
        config.max_chassis = max_chassis;
    }

    config.validate()?;
    Ok(config)
}

// =============================================================================
// Output
// =============================================================================

fn print_models(json: bool) -> anyhow::Result<()> {
    if json {
        let models: serde_json::Map<String, serde_json::Value> = list_models()
            .map(|(key, model)| -> serde_json::Result<(String, serde_json::Value)> {
                Ok((key.to_string(), serde_json::to_value(model)?))
            })
            .collect::<serde_json::Result<_>>()?;
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    for (key, model) in list_models() {
        let capacities: Vec<String> = model
            .allowed_disk_capacities_tb
            .iter()
            .map(|c| format!("{:.2}", c))
            .collect();
        println!("{:<10} {}", key, model);
        println!(
            "{:<10} drives: {} ({} SCM + {} QLC), QLC sizes (TB): {}",
            "",
            model.total_drives,
            model.scm_drive_count,
            model.qlc_drive_count,
            capacities.join(", ")
        );
    }
    Ok(())
}

fn print_capacity(
    request: &CapacityRequest,
    result: &CapacityResult,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!(
        "{} x {} @ {:.2} TB ({})",
        request.chassis_count, request.model_key, request.disk_capacity_tb, request.topology
    );
    println!("  Stripe layout:    {}", result.stripe_layout());
    println!(
        "  Overhead:         {:.2}% (EC {:.2}% + FS {:.2}%)",
        result.overhead.total_pct,
        result.overhead.erasure_coding_pct,
        result.overhead.additional_pct
    );
    println!("  Raw capacity:     {:.2} TB", result.raw_capacity_tb);
    println!("  Usable capacity:  {:.2} TB", result.usable_capacity_tb);
    println!(
        "  Effective (DRR {:.2}x): {:.2} TB",
        result.data_reduction_ratio, result.effective_capacity_tb
    );
    Ok(())
}

fn print_performance(perf: &ClusterPerformance, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(perf)?);
        return Ok(());
    }

    println!("{} x {} (advisory)", perf.chassis_count, perf.model_key);
    println!("  Sequential read:  {:.1} GB/s", perf.sequential_read_bw_gbs);
    println!("  Sequential write: {:.1} GB/s", perf.sequential_write_bw_gbs);
    println!("  Random read:      {} IOPS", perf.random_read_iops);
    println!("  Random write:     {} IOPS", perf.random_write_iops);
    Ok(())
}

fn print_schema() -> anyhow::Result<()> {
    let schemas = serde_json::json!({
        "request": schemars::schema_for!(CapacityRequest),
        "result": schemars::schema_for!(CapacityResult),
        "performance": schemars::schema_for!(ClusterPerformance),
    });
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}
