use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use county_clusters::clusterer::DEFAULT_SEED;
use county_clusters::county::{DATASET_SIZES, DEFAULT_DATA_DIR};
use county_clusters::{
    ClosestPairStrategy, Cluster, County, DEFAULT_KMEANS_ITERATIONS, DistortionSweep,
    ExperimentReport, ExperimentResults, compute_distortion, dataset_file, hierarchical_with,
    kmeans, load_county_table, sequential, time_closest_pair,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Cluster US counties by population-weighted position
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cluster a county table and print each cluster
    Cluster {
        #[command(flatten)]
        data: DataArgs,

        #[arg(short, long, value_enum, default_value_t = Algorithm::Kmeans)]
        algorithm: Algorithm,

        /// Number of clusters to produce
        #[arg(short = 'k', long, default_value_t = 9)]
        clusters: usize,

        /// K-means rounds
        #[arg(short, long, default_value_t = DEFAULT_KMEANS_ITERATIONS)]
        iterations: usize,

        /// Use divide-and-conquer closest pair search for hierarchical merges
        #[arg(long)]
        fast_pairs: bool,

        /// Write a JSON report to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Compare k-means and hierarchical distortion over a range of cluster counts
    Sweep {
        #[command(flatten)]
        data: DataArgs,

        #[arg(long, default_value_t = 6)]
        min: usize,

        #[arg(long, default_value_t = 20)]
        max: usize,

        /// K-means rounds
        #[arg(short, long, default_value_t = DEFAULT_KMEANS_ITERATIONS)]
        iterations: usize,

        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Time slow and fast closest pair search on random clusters
    Pairs {
        #[arg(long, default_value_t = 2)]
        min: usize,

        #[arg(long, default_value_t = 200)]
        max: usize,

        #[arg(long, default_value_t = 10)]
        step: usize,

        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Path to a county table (fips,x,y,population,risk per line)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Load the bundled table with this many counties (111, 290, 896 or 3108)
    #[arg(short = 'n', long, default_value_t = 111)]
    counties: usize,

    /// Directory holding the bundled tables
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
}

impl DataArgs {
    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.data {
            return Ok(path.clone());
        }

        let file = dataset_file(self.counties).ok_or_else(|| {
            anyhow!(
                "No bundled table with {} counties (available: {:?})",
                self.counties,
                DATASET_SIZES
            )
        })?;
        Ok(self.data_dir.join(file))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Kmeans,
    Hierarchical,
    Sequential,
}

impl Algorithm {
    fn name(self) -> &'static str {
        match self {
            Algorithm::Kmeans => "kmeans",
            Algorithm::Hierarchical => "hierarchical",
            Algorithm::Sequential => "sequential",
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("county_clusters=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Cluster {
            data,
            algorithm,
            clusters,
            iterations,
            fast_pairs,
            json,
        } => run_cluster(&data, algorithm, clusters, iterations, fast_pairs, json),
        Command::Sweep {
            data,
            min,
            max,
            iterations,
            json,
        } => run_sweep(&data, min, max, iterations, json),
        Command::Pairs {
            min,
            max,
            step,
            seed,
            json,
        } => run_pairs(min, max, step, seed, json),
    }
}

fn load(data: &DataArgs) -> Result<(PathBuf, Vec<County>)> {
    let path = data.path()?;
    let start = Instant::now();
    let counties = load_county_table(&path)?;
    println!(
        "✓ Loaded {} counties from {} [{:.2}s]\n",
        counties.len(),
        path.display(),
        start.elapsed().as_secs_f64()
    );
    Ok((path, counties))
}

fn run_cluster(
    data: &DataArgs,
    algorithm: Algorithm,
    num_clusters: usize,
    iterations: usize,
    fast_pairs: bool,
    json: Option<PathBuf>,
) -> Result<()> {
    let (path, counties) = load(data)?;

    let start = Instant::now();
    let clusters = match algorithm {
        Algorithm::Kmeans => kmeans(&counties, num_clusters, iterations)?,
        Algorithm::Hierarchical => {
            let strategy = if fast_pairs {
                ClosestPairStrategy::DivideAndConquer
            } else {
                ClosestPairStrategy::BruteForce
            };
            hierarchical_with(&counties, num_clusters, strategy)?
        }
        Algorithm::Sequential => sequential(&counties, num_clusters)?,
    };
    let distortion = compute_distortion(&clusters, &counties)?;

    println!(
        "✓ {} produced {} clusters [{:.2}s]\n",
        algorithm.name(),
        clusters.len(),
        start.elapsed().as_secs_f64()
    );
    print_clusters(&clusters);
    println!("\nDistortion:           {:.4e}", distortion);

    if let Some(out) = json {
        let report = ExperimentReport::new(
            Some(path.display().to_string()),
            ExperimentResults::Clustering {
                algorithm: algorithm.name().to_string(),
                num_clusters,
                iterations: (algorithm == Algorithm::Kmeans).then_some(iterations),
                distortion,
                clusters,
            },
        );
        report.write_json(&out)?;
    }

    Ok(())
}

fn print_clusters(clusters: &[Cluster]) {
    println!(
        "  {:>3}  {:>8}  {:>12}  {:>9}  {:>9}  {:>10}",
        "#", "counties", "population", "x", "y", "risk"
    );
    for (idx, cluster) in clusters.iter().enumerate() {
        println!(
            "  {:>3}  {:>8}  {:>12}  {:>9.2}  {:>9.2}  {:>10.3e}",
            idx,
            cluster.len(),
            cluster.total_population(),
            cluster.horiz_center(),
            cluster.vert_center(),
            cluster.averaged_risk()
        );
    }
}

fn run_sweep(
    data: &DataArgs,
    min: usize,
    max: usize,
    iterations: usize,
    json: Option<PathBuf>,
) -> Result<()> {
    let (path, counties) = load(data)?;

    let start = Instant::now();
    let points = DistortionSweep::new(min, max)
        .iterations(iterations)
        .run(&counties)?;
    println!(
        "✓ Swept {} cluster counts [{:.2}s]\n",
        points.len(),
        start.elapsed().as_secs_f64()
    );

    println!("  {:>8}  {:>14}  {:>14}", "clusters", "k-means", "hierarchical");
    for point in &points {
        println!(
            "  {:>8}  {:>14.4e}  {:>14.4e}",
            point.num_clusters, point.kmeans, point.hierarchical
        );
    }

    if let Some(out) = json {
        let report = ExperimentReport::new(
            Some(path.display().to_string()),
            ExperimentResults::Sweep { points },
        );
        report.write_json(&out)?;
    }

    Ok(())
}

fn run_pairs(min: usize, max: usize, step: usize, seed: u64, json: Option<PathBuf>) -> Result<()> {
    let start = Instant::now();
    let timings = time_closest_pair(min, max, step, seed)?;
    println!(
        "✓ Timed {} cluster sets [{:.2}s]\n",
        timings.len(),
        start.elapsed().as_secs_f64()
    );

    println!("  {:>8}  {:>12}  {:>12}", "clusters", "slow (s)", "fast (s)");
    for timing in &timings {
        println!(
            "  {:>8}  {:>12.6}  {:>12.6}",
            timing.num_clusters, timing.slow_secs, timing.fast_secs
        );
    }

    if let Some(out) = json {
        let report = ExperimentReport::new(None, ExperimentResults::PairTiming { timings });
        report.write_json(&out)?;
    }

    Ok(())
}
