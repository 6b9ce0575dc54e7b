use colored::Colorize;
use serde::Serialize;

use crate::{
    Sample,
    Booster,
    WeakLearner,
    Regressor,
};
use super::objective::LoggingObjective;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

const DEFAULT_PRINT_EVERY: usize = 100;
const WIDTH: usize = 9;
const PREC: usize = 5;
const FULL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 24;


/// A booster that exposes its state between two rounds.
pub trait CurrentHypothesis {
    /// The type of the intermediate model.
    type Output;

    /// Returns the model built so far.
    fn current_hypothesis(&self) -> Self::Output;

    /// Returns the distribution the next weak hypothesis is fit on.
    fn distribution(&self) -> &[f64];

    /// Returns the weighted squared error of the latest weak hypothesis
    /// on the distribution it was fit on.
    /// `None` before the first round.
    fn last_weighted_error(&self) -> Option<f64>;
}


/// What [`Logger`] measures after one round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundRecord {
    /// 1-based round.
    pub round: usize,
    /// Objective value of the additive model on the training sample.
    pub objective: f64,
    /// Weighted squared error of the weak hypothesis of this round.
    pub weighted_error: f64,
    /// Largest example weight after the update.
    pub max_weight: f64,
    /// `1 / sum_i w_i^2` after the update.
    /// Equals the number of examples for the uniform distribution
    /// and drops as the weight concentrates on hard examples.
    pub effective_size: f64,
    /// Loss on the training sample.
    pub train_loss: f64,
    /// Loss on the test sample.
    pub test_loss: f64,
    /// Time spent in the booster so far, in milliseconds.
    pub millis: u128,
}


impl RoundRecord {
    /// The first line of the CSV file [`Logger::run`] writes.
    pub const CSV_HEADER: &'static str =
        "Round,Objective,WeightedError,MaxWeight,EffectiveSize,TrainLoss,TestLoss,Time";


    fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            self.round,
            self.objective,
            self.weighted_error,
            self.max_weight,
            self.effective_size,
            self.train_loss,
            self.test_loss,
            self.millis,
        )
    }
}


/// Runs one binary Gentle AdaBoost problem and records,
/// round by round, the exponential criterion,
/// the weighted error of the new weak hypothesis,
/// how concentrated the distribution has become,
/// the train/test losses and the running time.
///
/// # Example
/// ```no_run
/// use gentleboost::prelude::*;
/// use gentleboost::research::{Logger, ExponentialObjective, zero_one_loss};
///
/// let train = SampleReader::new()
///     .file("/path/to/train.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// let test = SampleReader::new()
///     .file("/path/to/test.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let booster = GentleBoost::init(&train).rounds(300);
/// let weak_learner = DecisionStump::init(&train);
///
/// let mut logger = Logger::new(
///     booster, weak_learner, ExponentialObjective, zero_one_loss,
///     &train, &test,
/// )
///     .print_every(10)
///     .time_limit_as_secs(60);
/// let f = logger.run("gentleboost.csv").unwrap();
/// let last = logger.history().last().unwrap();
/// println!("effective size after {} rounds: {}", last.round, last.effective_size);
/// ```
pub struct Logger<'a, B, W, F, G> {
    booster: B,
    weak_learner: W,
    objective_func: F,
    loss_func: G,
    train: &'a Sample,
    test: &'a Sample,
    time_limit: Option<Duration>,
    print_every: Option<usize>,
    history: Vec<RoundRecord>,
}


impl<'a, B, W, F, G> Logger<'a, B, W, F, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        booster: B,
        weak_learner: W,
        objective_func: F,
        loss_func: G,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self {
            booster,
            weak_learner,
            objective_func,
            loss_func,
            train,
            test,
            time_limit: None,
            print_every: Some(DEFAULT_PRINT_EVERY),
            history: Vec::new(),
        }
    }


    /// Stop after the first round that pushes the time spent
    /// in the booster past `millis` milliseconds.
    pub fn time_limit_as_millis(mut self, millis: u64) -> Self {
        self.time_limit = Some(Duration::from_millis(millis));
        self
    }


    /// Same as [`Logger::time_limit_as_millis`] in seconds.
    pub fn time_limit_as_secs(mut self, secs: u64) -> Self {
        self.time_limit = Some(Duration::from_secs(secs));
        self
    }


    /// Print a line every `round` rounds. Default is `100`.
    /// `0` or `usize::MAX` turns the console output off.
    pub fn print_every(mut self, round: usize) -> Self {
        self.print_every = (round != 0 && round != usize::MAX)
            .then_some(round);
        self
    }


    /// The records of the last call to [`Logger::run`].
    pub fn history(&self) -> &[RoundRecord] {
        &self.history[..]
    }
}


impl<H, B, W, F, G, O, S> Logger<'_, B, W, F, G>
    where B: Booster<H, Output=O> + CurrentHypothesis<Output=S>,
          S: Regressor,
          W: WeakLearner<Hypothesis = H>,
          F: LoggingObjective,
          G: Fn(&Sample, &S) -> f64,
{
    /// Boost until the booster stops or the time limit is hit,
    /// writing one CSV line per round to `filename`.
    /// Returns what [`Booster::postprocess`] returns.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P) -> io::Result<O> {
        let mut file = BufWriter::new(File::create(filename)?);
        writeln!(file, "{}", RoundRecord::CSV_HEADER)?;

        self.history.clear();
        self.booster.preprocess();
        if self.print_every.is_some() {
            self.print_stats();
            print_header();
        }

        let mut elapsed = Duration::ZERO;
        for round in 1.. {
            let now = Instant::now();
            let flow = self.booster.boost(&self.weak_learner, round);
            elapsed += now.elapsed();

            // The round that hits the round limit fits nothing.
            if flow.is_break() { break; }

            let record = self.record(round, elapsed);
            writeln!(file, "{}", record.csv_line())?;
            self.history.push(record);

            if self.time_limit.is_some_and(|limit| elapsed > limit) {
                print_row("[TLE]".bold().bright_red(), &record);
                break;
            }
            if self.print_every.is_some_and(|k| round % k == 0) {
                print_row("[LOG]".bold().magenta(), &record);
            }
        }
        file.flush()?;

        if self.print_every.is_some() {
            println!("{}\n", "[FIN]".bold().bright_green());
        }
        Ok(self.booster.postprocess())
    }


    fn record(&self, round: usize, elapsed: Duration) -> RoundRecord {
        let f = self.booster.current_hypothesis();
        let (max_weight, effective_size) = weight_stats(
            self.booster.distribution()
        );
        RoundRecord {
            round,
            objective: self.objective_func.objective_value(self.train, &f),
            weighted_error: self.booster.last_weighted_error()
                .unwrap_or(f64::NAN),
            max_weight,
            effective_size,
            train_loss: (self.loss_func)(self.train, &f),
            test_loss: (self.loss_func)(self.test, &f),
            millis: elapsed.as_millis(),
        }
    }


    fn print_stats(&self) {
        let limit = self.time_limit
            .map(|limit| time_format(limit.as_millis()))
            .unwrap_or_else(|| "none".to_string());

        println!("\n{:=>FULL_WIDTH$}", "");
        println!("{:^FULL_WIDTH$}", "SETTINGS".bold());
        println!("{:->FULL_WIDTH$}", "");
        print_entry("Booster", self.booster.name());
        print_info(self.booster.info());
        print_entry("Weak learner", self.weak_learner.name());
        print_info(self.weak_learner.info());
        print_entry("Objective", &self.objective_func.name());
        print_entry("Time limit", &limit);
        println!("{:=>FULL_WIDTH$}\n", "");
    }
}


/// The largest weight and the effective sample size `1 / sum w^2`.
fn weight_stats(dist: &[f64]) -> (f64, f64) {
    let max = dist.iter().copied().fold(0.0, f64::max);
    let sum_sq = dist.iter().map(|w| w * w).sum::<f64>();
    let effective = if sum_sq > 0.0 { 1.0 / sum_sq } else { 0.0 };
    (max, effective)
}


fn print_entry(key: &str, value: &str) {
    let width = FULL_WIDTH - KEY_WIDTH - 2;
    println!("+ {:<KEY_WIDTH$}{:>width$}", key.bold(), value.bold().green());
}


fn print_info(info: Option<Vec<(&str, String)>>) {
    let width = FULL_WIDTH - KEY_WIDTH - 6;
    for (key, val) in info.into_iter().flatten() {
        println!("    - {:<KEY_WIDTH$}{:>width$}", key, val.yellow());
    }
}


fn print_header() {
    println!(
        "      {:>WIDTH$} {:>WIDTH$} {:>WIDTH$} {:>WIDTH$} {:>WIDTH$} {:>WIDTH$}",
        "ROUND".bold().red(),
        "EXP.LOSS".bold().blue(),
        "W.ERROR".bold().purple(),
        "TRAIN".bold().green(),
        "TEST".bold().yellow(),
        "TIME".bold().cyan(),
    );
}


fn print_row(tag: colored::ColoredString, r: &RoundRecord) {
    println!(
        "{tag} {} {} {} {} {} {}",
        format!("{:>WIDTH$}", r.round).red(),
        format!("{:>WIDTH$.PREC$}", r.objective).blue(),
        format!("{:>WIDTH$.PREC$}", r.weighted_error).purple(),
        format!("{:>WIDTH$.PREC$}", r.train_loss).green(),
        format!("{:>WIDTH$.PREC$}", r.test_loss).yellow(),
        format!("{:>WIDTH$}", time_format(r.millis)).cyan(),
    );
}


fn time_format(millis: u128) -> String {
    let (sec, ms) = (millis / 1_000, millis % 1_000);
    let (min, sec) = (sec / 60, sec % 60);
    let (hours, min) = (min / 60, min % 60);
    match (hours, min) {
        (0, 0) => format!("{sec}.{ms:0>3}s"),
        (0, _) => format!("{min}m{sec:0>2}s"),
        _ => format!("{hours}h{min:0>2}m"),
    }
}
