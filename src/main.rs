use std::io::Write as _;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser as _;
use rand::SeedableRng;

use sortlab::stats::{OnlineStats, pearson};

mod cli;

/// Program entry point
fn main() -> ExitCode {
    env_logger::init();

    let cli::Args {
        algorithm,
        data,
        variant,
        runs,
        size,
        seed,
        output,
    } = cli::Args::parse();

    let Some(variant) = cli::AlgorithmVariants::validate(algorithm, variant) else {
        println!("Available variants for {algorithm}:");
        for (index, name) in cli::AlgorithmVariants::variants(algorithm).enumerate() {
            println!("{index}: {name}");
        }
        return if variant == -1 {
            ExitCode::SUCCESS
        } else {
            eprintln!("Invalid variant {variant}");
            ExitCode::FAILURE
        };
    };

    let variant_name = cli::AlgorithmVariants::variants(algorithm)
        .nth(variant)
        .unwrap_or_default();
    let stable = cli::AlgorithmVariants::is_stable(algorithm, variant).unwrap_or(false);

    println!(
        "Running measurements for the following algorithm:\n{algorithm} {variant_name} (stable: {stable})"
    );
    println!("Runs: {runs}, Slice size: {size}, Data type: {data}");

    // Create rng
    let mut rng = match seed {
        Some(partial_seed) => rand::rngs::StdRng::seed_from_u64(partial_seed),
        None => {
            log::info!("No seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    };

    let Some((samples, stats)) = data.visit(Experiment {
        algorithm,
        variant,
        runs,
        size,
        rng: &mut rng,
    }) else {
        eprintln!("No sorter for {algorithm} variant {variant}");
        return ExitCode::FAILURE;
    };

    println!("Stats (ms): {stats:?}");
    report(&samples);

    if let Some(path) = output {
        if let Err(error) = write_samples(&path, &samples) {
            log::error!("Failed to write samples to {}: {error}", path.display());
            return ExitCode::FAILURE;
        }
        log::info!("Wrote {} samples to {}", samples.len(), path.display());
    }

    ExitCode::SUCCESS
}

/// The parameters of one experiment, run for the element type picked by [`cli::DataType`]
struct Experiment<'a> {
    algorithm: cli::Algorithm,
    variant: usize,
    runs: usize,
    size: usize,
    rng: &'a mut rand::rngs::StdRng,
}

impl cli::DataVisitor for Experiment<'_> {
    type Output = Option<(Vec<Duration>, rolling_stats::Stats<f64>)>;

    fn visit<T, D>(self) -> Self::Output
    where
        T: Ord + Clone + std::fmt::Debug,
        D: sortlab::data::Data<T>,
    {
        let sorter = cli::AlgorithmVariants::sorter::<T>(self.algorithm, self.variant)?;
        Some(perform_experiment::<T, D>(
            sorter, self.runs, self.size, self.rng,
        ))
    }
}

/// Perform a time sampling experiment on the given sorting algorithm
///
/// - runs: The number of samples to measure
/// - size: The size of the slices to sort
/// - rng: The rng used for sampling the data
fn perform_experiment<T: Ord + std::fmt::Debug, D: sortlab::data::Data<T>>(
    sorter: fn(&mut [T]),
    runs: usize,
    size: usize,
    rng: &mut rand::rngs::StdRng,
) -> (Vec<Duration>, rolling_stats::Stats<f64>) {
    let mut samples = Vec::with_capacity(runs);

    let mut stats: rolling_stats::Stats<f64> = rolling_stats::Stats::new();

    let bar = indicatif::ProgressBar::new(runs as u64);

    for run in 0..=runs {
        let mut data = D::initialize(size, rng);

        let now = std::time::Instant::now();
        sorter(std::hint::black_box(&mut data));
        let elapsed = now.elapsed();

        debug_assert!(
            data.is_sorted(),
            "{data:?} is not sorted after algorithm run"
        );

        // NOTE: Skip first sample, it warms up caches and the allocator
        if run != 0 {
            samples.push(elapsed);
            stats.update(elapsed.as_secs_f64() * 1_000.0);

            bar.inc(1);
        }
    }

    bar.finish();
    log::debug!("collected {} samples", samples.len());

    (samples, stats)
}

/// Print median and mode of the samples and how strongly the duration drifts over the runs
fn report(samples: &[Duration]) {
    let micros: OnlineStats<u128> = samples.iter().map(Duration::as_micros).collect();

    if let Some(summary) = micros.summary() {
        println!(
            "Median: {median:.1}µs, Mode: {mode}µs ({occurrences}x), Mean: {mean:.1}µs",
            median = summary.median,
            mode = summary.mode.0,
            occurrences = summary.mode.1,
            mean = summary.mean,
        );
    }

    let drift = pearson(
        0..samples.len(),
        samples,
        |&run| run as f64,
        |sample| sample.as_secs_f64(),
    );
    println!(
        "Correlation of run index and duration: {:.3}",
        drift.correlation
    );
}

/// Write one duration in nanoseconds per line
fn write_samples(path: &std::path::Path, samples: &[Duration]) -> std::io::Result<()> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
    for sample in samples {
        writeln!(writer, "{}", sample.as_nanos())?;
    }
    writer.flush()
}
