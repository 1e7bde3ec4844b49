//! Interactive question-and-answer loop.
//!
//! Prompts for a city and filters, prints the four statistics reports, offers
//! raw rows five at a time and asks whether to start over. Input and output
//! are generic so the whole session can be scripted in tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Result;
use bikeshare_core::formatting::format_count;
use bikeshare_core::models::{City, FilterSpec, MonthFilter, TripTable, WeekdayFilter};
use bikeshare_data::aggregator::TripAggregator;
use bikeshare_data::{filter, pager, reader};
use bikeshare_ui::{report, table_view};
use tracing::{debug, info};

const FAREWELL: &str = "Thank you for looking at this project. Have a nice day!";

/// Filters supplied on the command line for the first session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preset {
    pub city: Option<City>,
    pub month: Option<MonthFilter>,
    pub weekday: Option<WeekdayFilter>,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, data_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            data_dir,
        }
    }

    /// Consume the shell and hand back its output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run sessions until the user declines to restart or input ends.
    pub fn run(&mut self, preset: Preset) -> Result<()> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let mut preset = Some(preset);
        loop {
            let Some(spec) = self.get_filters(preset.take().unwrap_or_default())? else {
                break;
            };

            let table = self.load(&spec)?;
            self.print_reports(&table)?;

            if !self.raw_data(&table)? {
                break;
            }

            let Some(answer) =
                self.prompt("Would you like to restart? Enter yes or no.")?
            else {
                break;
            };
            if !answer.eq_ignore_ascii_case("yes") {
                break;
            }
        }
        Ok(())
    }

    // ── Filter selection ──────────────────────────────────────────────────────

    /// Ask for any selection not already preset. `None` when input ends.
    fn get_filters(&mut self, preset: Preset) -> Result<Option<FilterSpec>> {
        let city = match preset.city {
            Some(c) => c,
            None => match self.prompt_parsed::<City>(
                "What city data would you like to see? (chicago, new york city, washington)",
                "city",
            )? {
                Some(c) => c,
                None => return Ok(None),
            },
        };

        let month = match preset.month {
            Some(m) => m,
            None => match self.prompt_parsed::<MonthFilter>(
                "What month would you like to analyze? (all, january, february, ... december)",
                "month",
            )? {
                Some(m) => m,
                None => return Ok(None),
            },
        };

        let weekday = match preset.weekday {
            Some(d) => d,
            None => match self.prompt_parsed::<WeekdayFilter>(
                "What weekday would you like to analyze? (all, monday, tuesday, ... sunday)",
                "weekday",
            )? {
                Some(d) => d,
                None => return Ok(None),
            },
        };

        writeln!(self.output, "{}", report::separator())?;
        Ok(Some(FilterSpec {
            city,
            month,
            weekday,
        }))
    }

    fn load(&mut self, spec: &FilterSpec) -> Result<TripTable> {
        let loaded = reader::load_city(&self.data_dir, spec.city)?;
        let table = filter::apply(&loaded, spec);
        info!(
            "{}: {} of {} trips match month={} weekday={}",
            spec.city,
            table.len(),
            loaded.len(),
            spec.month,
            spec.weekday
        );

        writeln!(
            self.output,
            "{}: {} of {} trips match month = {}, day = {}.",
            spec.city,
            format_count(table.len() as u64),
            format_count(loaded.len() as u64),
            spec.month,
            spec.weekday
        )?;
        Ok(table)
    }

    // ── Reports ───────────────────────────────────────────────────────────────

    fn print_reports(&mut self, table: &TripTable) -> Result<()> {
        self.section("Calculating The Most Frequent Times of Travel...", || {
            report::render_time_stats(&TripAggregator::time_stats(table))
        })?;
        self.section("Calculating The Most Popular Stations and Trip...", || {
            report::render_station_stats(&TripAggregator::station_stats(table))
        })?;
        self.section("Calculating Trip Duration...", || {
            report::render_duration_stats(&TripAggregator::duration_stats(table))
        })?;
        self.section("Calculating User Stats...", || {
            report::render_user_stats(&TripAggregator::user_stats(table))
        })
    }

    fn section(&mut self, title: &str, body: impl FnOnce() -> Vec<String>) -> Result<()> {
        writeln!(self.output, "\n{}\n", title)?;
        let started = Instant::now();
        let lines = body();
        let elapsed = started.elapsed();

        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(
            self.output,
            "\nThis took {:.6} seconds.",
            elapsed.as_secs_f64()
        )?;
        writeln!(self.output, "{}", report::separator())?;
        Ok(())
    }

    // ── Raw rows ──────────────────────────────────────────────────────────────

    /// Offer raw rows until the data runs out or the user declines.
    /// Returns `false` when input ended.
    fn raw_data(&mut self, table: &TripTable) -> Result<bool> {
        let mut question = "Would you like to see 5 rows of raw data? Enter yes or no.";
        let mut cursor = 0;

        loop {
            match self.ask_yes_no(question)? {
                None => return Ok(false),
                Some(false) => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    return Ok(true);
                }
                Some(true) => {}
            }

            let page = pager::page(table, cursor);
            debug!("Showing rows {}..{}", page.start, page.start + page.rows.len());
            if let Some(rendered) = table_view::render_page(&page, table.schema()) {
                writeln!(self.output, "{}", rendered)?;
            }

            if !page.has_more {
                writeln!(self.output, "You reached the end of the data.\n")?;
                writeln!(self.output, "{}", report::separator())?;
                return Ok(true);
            }

            cursor = page.next_start();
            question = "Would you like to see 5 more rows of raw data? Enter yes or no.";
        }
    }

    // ── Prompt helpers ────────────────────────────────────────────────────────

    /// Print `question` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "\n{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompt until the answer parses as `T`.
    fn prompt_parsed<T: FromStr>(&mut self, question: &str, kind: &str) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    debug!("Rejected {} selection \"{}\"", kind, answer);
                    writeln!(self.output, "\nPlease enter a valid {}.", kind)?;
                }
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.prompt(question)? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "yes" | "y" => return Ok(Some(true)),
                "no" | "n" => return Ok(Some(false)),
                _ => writeln!(self.output, "Invalid answer. Please enter yes or no.")?,
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
