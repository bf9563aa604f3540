#[macro_use]
extern crate log;

use std::{fs::File, io::BufReader, path::PathBuf};

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use fittrack_algos::summarize;
use fittrack_codec::SensorRecord;

#[derive(Parser)]
pub struct FitTrackCli {
    #[clap(subcommand)]
    pub subcommand: FitTrackCommand,
}

#[derive(Subcommand)]
pub enum FitTrackCommand {
    ///
    /// Print summaries for the built-in demo sensor feed
    ///
    Demo,
    ///
    /// Compute metrics for a single sensor record, e.g. `compute RUN 15000 1 75`
    ///
    Compute {
        /// Workout code (RUN, WLK or SWM)
        code: String,
        /// Positional values for the record, in feed order
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    ///
    /// Process a JSON feed file holding an array of [code, values] records
    ///
    Batch {
        #[arg(long, env)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = FitTrackCli::parse();
    match cli.subcommand {
        FitTrackCommand::Demo => {
            process_feed(&demo_feed());
            Ok(())
        }
        FitTrackCommand::Compute { code, values } => {
            let summary = summarize(&SensorRecord::new(code, values).decode()?)?;
            println!("{}", summary);
            Ok(())
        }
        FitTrackCommand::Batch { input } => {
            let file = File::open(&input)?;
            let records: Vec<SensorRecord> = serde_json::from_reader(BufReader::new(file))?;
            info!("processing {} records from {}", records.len(), input.display());
            process_feed(&records);
            Ok(())
        }
    }
}

/// Fixture feed used by `demo`: one swim, one run, one walk.
fn demo_feed() -> Vec<SensorRecord> {
    vec![
        SensorRecord::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorRecord::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorRecord::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Print one summary line per record, in feed order. A record that fails
/// to decode or validate is logged and skipped; the rest of the feed still
/// runs.
fn process_feed(records: &[SensorRecord]) {
    for record in records {
        match process_record(record) {
            Ok(line) => println!("{}", line),
            Err(error) => error!("skipping `{}` record: {}", record.code(), error),
        }
    }
}

fn process_record(record: &SensorRecord) -> anyhow::Result<String> {
    let summary = summarize(&record.decode()?)?;
    Ok(summary.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_feed_renders_canonical_lines() {
        let lines = demo_feed()
            .iter()
            .map(|record| process_record(record).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(
            lines,
            vec![
                "Type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                 Avg speed: 1.000 km/h; Calories: 336.000.",
                "Type: Running; Duration: 1.000 h; Distance: 9.750 km; \
                 Avg speed: 9.750 km/h; Calories: 699.750.",
                "Type: Walking; Duration: 1.000 h; Distance: 5.850 km; \
                 Avg speed: 5.850 km/h; Calories: 157.500.",
            ]
        );
    }

    #[test]
    fn bad_record_does_not_panic_the_feed() {
        let record = SensorRecord::new("XYZ", vec![1.0]);
        assert!(process_record(&record).is_err());
        process_feed(&[record]);
    }
}
