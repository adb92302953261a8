//! `heatmap` CLI — load availability records, toggle slots, and compute
//! pairwise or group overlap from the command line.
//!
//! Availability records are the store wire shape: a JSON object with a
//! `participant_id` and an `availability` field mapping day names to lists
//! of time labels from the reference vocabulary (9:00 AM–9:00 PM hourly).
//!
//! ## Usage
//!
//! ```sh
//! # Pairwise overlap between two records (summary JSON on stdout)
//! heatmap overlap --reference me.json --comparison peer.json
//!
//! # Group overlap across several records, quorum defaulting to "all"
//! heatmap group me.json alice.json bob.json --quorum 2
//!
//! # Flip one slot and write the updated record
//! heatmap toggle --input me.json --slot "Monday 10:00 AM" -o me.json
//!
//! # Render an ASCII week grid, optionally against a second record
//! heatmap show --input me.json --compare peer.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use heatmap_core::{
    compute_group, compute_pairwise, labels::day_name, AvailabilityRecord, AvailabilitySet,
    OverlapSummary, TimeLabels, DAYS,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "heatmap",
    version,
    about = "Weekly availability overlap engine CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pairwise overlap between a reference and a comparison record
    Overlap {
        /// Reference record ("my" availability; the percentage denominator)
        #[arg(short, long)]
        reference: String,
        /// Comparison record
        #[arg(short, long)]
        comparison: String,
        /// Human-readable text instead of summary JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Group overlap across two or more records
    Group {
        /// Record files (at least one)
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Minimum number of participants that must share a slot
        /// (defaults to all of them)
        #[arg(short, long)]
        quorum: Option<usize>,
        /// Human-readable text instead of summary JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Flip one slot in a record and write the updated record
    Toggle {
        /// Input record (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Slot to flip, as "<Day> <Time>" (e.g. "Monday 10:00 AM")
        #[arg(short, long)]
        slot: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Render a record as an ASCII week grid
    Show {
        /// Input record (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Second record; cells show the pairwise heatmap instead
        #[arg(long)]
        compare: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let labels = TimeLabels::reference();

    match cli.command {
        Commands::Overlap {
            reference,
            comparison,
            pretty,
        } => {
            let (ref_record, ref_set) = load_record(&labels, Some(&reference))?;
            let (cmp_record, cmp_set) = load_record(&labels, Some(&comparison))?;

            let result = compute_pairwise(&ref_set, &cmp_set)?;
            let summary = labels.summarize(&result)?;

            if pretty {
                println!(
                    "{} vs {}: {:.0}% of {}'s availability overlaps",
                    ref_record.participant_id,
                    cmp_record.participant_id,
                    summary.overlap_percentage * 100.0,
                    ref_record.participant_id,
                );
                print_common_times(&summary);
            } else {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Commands::Group {
            inputs,
            quorum,
            pretty,
        } => {
            let mut ids = Vec::new();
            let mut sets = Vec::new();
            for path in &inputs {
                let (record, set) = load_record(&labels, Some(path))?;
                ids.push(record.participant_id);
                sets.push(set);
            }

            let quorum = quorum.unwrap_or(sets.len());
            let result = compute_group(&sets, quorum)?;
            let summary = labels.summarize(&result)?;

            if pretty {
                println!(
                    "{} participants, quorum {}: {:.0}% of marked slots work",
                    ids.len(),
                    quorum,
                    summary.overlap_percentage * 100.0,
                );
                print_common_times(&summary);
            } else {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Commands::Toggle {
            input,
            slot,
            output,
        } => {
            let (mut record, mut set) = load_record(&labels, input.as_deref())?;
            let slot = labels
                .parse_slot(&slot)
                .with_context(|| format!("Invalid slot: {slot:?}"))?;

            set.toggle(slot)?;
            record.availability = labels.encode_availability(&set)?;

            let json = serde_json::to_string_pretty(&record)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Show { input, compare } => {
            let (record, set) = load_record(&labels, input.as_deref())?;
            match compare {
                Some(path) => {
                    let (other_record, other_set) = load_record(&labels, Some(&path))?;
                    let result = compute_pairwise(&set, &other_set)?;
                    println!(
                        "{} vs {} ({:.0}% overlap)",
                        record.participant_id,
                        other_record.participant_id,
                        result.overlap_percentage * 100.0,
                    );
                    print_grid(&labels, |slot| {
                        match (set.contains(slot), other_set.contains(slot)) {
                            (true, true) => '#',
                            (true, false) => 'x',
                            (false, true) => 'o',
                            (false, false) => '.',
                        }
                    });
                    println!("# both  x {} only  o {} only", record.participant_id, other_record.participant_id);
                }
                None => {
                    println!("{}", record.participant_id);
                    print_grid(&labels, |slot| if set.contains(slot) { 'x' } else { '.' });
                }
            }
        }
    }

    Ok(())
}

/// Load an availability record and decode it against the vocabulary.
/// Unknown labels reject the whole record rather than dropping slots.
fn load_record(
    labels: &TimeLabels,
    path: Option<&str>,
) -> Result<(AvailabilityRecord, AvailabilitySet)> {
    let json = read_input(path)?;
    let record: AvailabilityRecord = serde_json::from_str(&json)
        .with_context(|| format!("Invalid availability record: {}", path.unwrap_or("stdin")))?;
    let set = labels.decode_availability(&record.availability).with_context(|| {
        format!(
            "Rejecting availability of {:?}: unconvertible labels",
            record.participant_id
        )
    })?;
    Ok((record, set))
}

fn print_common_times(summary: &OverlapSummary) {
    if summary.common_times.is_empty() {
        println!("No common slots");
        return;
    }
    println!("{} common slot(s):", summary.common_times.len());
    for time in &summary.common_times {
        println!("  {time}");
    }
}

/// Print the 7-row week grid, one character per cell, with day names on the
/// left and time indices across the top.
fn print_grid(labels: &TimeLabels, cell: impl Fn(heatmap_core::DaySlot) -> char) {
    let slots_per_day = labels.grid().slots_per_day();

    let header: String = (0..slots_per_day)
        .map(|i| {
            char::from_digit(u32::from(i) % 10, 10).unwrap_or('?')
        })
        .collect();
    println!("{:<10}{}", "", header);

    for day in DAYS {
        let row: String = (0..slots_per_day)
            .map(|time_index| cell(heatmap_core::DaySlot { day, time_index }))
            .collect();
        println!("{:<10}{}", day_name(day), row);
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
