//! Investor Assistant CLI
//!
//! Projections, category comparisons, and educational Q&A from the command line

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use investor_assistant::advisor::{
    catalog, Advisor, GeminiClient, InvestmentGoal, InvestorProfile, RiskTolerance,
};
use investor_assistant::narrative::{format_money, format_percent, growth_narrative, horizon_narrative};
use investor_assistant::projection::{GrowthParams, GrowthResult, HorizonParams};
use investor_assistant::rates::{RateChoice, RateTable};
use investor_assistant::speech::{MutedSpeaker, PacedSpeaker, Speaker};
use investor_assistant::ScenarioRunner;

#[derive(Parser)]
#[command(
    name = "investor-assistant",
    version,
    about = "Educational investing assistant with financial projections",
    long_about = "Estimate how long it takes to reach financial independence, project \
                  compound growth across investment categories, and ask beginner \
                  questions about investing."
)]
struct Cli {
    /// Rate table CSV (category,label,annual_rate); built-in estimates when omitted
    #[arg(long, global = true)]
    rates_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Read the summary aloud (to stderr)
    #[arg(long, global = true)]
    speak: bool,

    /// Narration pace in words per minute
    #[arg(long, global = true, default_value_t = 180)]
    speech_wpm: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct RateArgs {
    /// Investment category (savings, cdi, reits, stocks, custom)
    #[arg(short, long, default_value = "cdi")]
    category: String,

    /// Annual rate for the custom category, as a fraction (0.07 = 7%)
    #[arg(long)]
    custom_rate: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Time until capital covers 25 years of inflation-adjusted expenses
    Horizon {
        /// Target annual expenses in today's money
        #[arg(short, long)]
        target_expenses: f64,
        /// Monthly contribution
        #[arg(short, long, default_value_t = 0.0)]
        monthly: f64,
        /// Initial capital
        #[arg(short, long, default_value_t = 0.0)]
        initial: f64,
        /// Annual inflation as a fraction
        #[arg(long, default_value_t = 0.04)]
        inflation: f64,
        #[command(flatten)]
        rate: RateArgs,
    },

    /// Compound growth over a number of years
    Grow {
        /// Initial capital
        #[arg(short, long, default_value_t = 0.0)]
        initial: f64,
        /// Monthly contribution
        #[arg(short, long, default_value_t = 0.0)]
        monthly: f64,
        /// Duration in whole years
        #[arg(short, long, default_value_t = 10)]
        years: u32,
        /// Write yearly snapshots to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        #[command(flatten)]
        rate: RateArgs,
    },

    /// Run the same inputs under every rate category
    #[command(subcommand)]
    Compare(CompareCommands),

    /// List the rate table
    Rates,

    /// Ask an educational question about investing
    Ask {
        /// Free-form question
        question: Option<String>,
        /// Pick one of the suggested topics instead (see `topics`)
        #[arg(short, long, conflicts_with = "question")]
        topic: Option<usize>,
    },

    /// General strategy for a risk tolerance and goal
    Strategy {
        /// low, medium or high
        #[arg(short, long, default_value = "medium")]
        risk: RiskTolerance,
        /// long-term-growth, passive-income, capital-preservation, buy-home, children-education
        #[arg(short, long, default_value = "long-term-growth")]
        goal: InvestmentGoal,
    },

    /// Suggested starting questions
    Topics,

    /// Beginner glossary, optionally filtered by term
    Glossary {
        term: Option<String>,
    },

    /// Safety tips for new investors
    Tips,
}

#[derive(Subcommand)]
enum CompareCommands {
    /// Independence horizon per category
    Horizon {
        #[arg(short, long)]
        target_expenses: f64,
        #[arg(short, long, default_value_t = 0.0)]
        monthly: f64,
        #[arg(short, long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.04)]
        inflation: f64,
        /// Also run a custom annual rate
        #[arg(long)]
        custom_rate: Option<f64>,
    },
    /// Growth per category
    Growth {
        #[arg(short, long, default_value_t = 0.0)]
        initial: f64,
        #[arg(short, long, default_value_t = 0.0)]
        monthly: f64,
        #[arg(short, long, default_value_t = 10)]
        years: u32,
        #[arg(long)]
        custom_rate: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let rates = match &cli.rates_file {
        Some(path) => RateTable::from_csv_path(path)
            .with_context(|| format!("Failed to load rate table from {}", path.display()))?,
        None => RateTable::default_estimates(),
    };
    let runner = ScenarioRunner::with_rates(rates);

    let speaker: Box<dyn Speaker> = if cli.speak {
        Box::new(PacedSpeaker::with_sink(io::stderr(), cli.speech_wpm))
    } else {
        Box::new(MutedSpeaker)
    };

    let narration = match &cli.command {
        Commands::Horizon {
            target_expenses,
            monthly,
            initial,
            inflation,
            rate,
        } => {
            let choice = rate_choice(rate)?;
            let result = runner.run_horizon(&choice, *initial, *monthly, *inflation, *target_expenses)?;
            let text = horizon_narrative(&result, &runner.rates().label(&choice));

            let summary = result.summary();
            if cli.json {
                print_json(&summary)?;
            } else {
                println!("{}\n", text);
                println!("  Annual rate:        {}", format_percent(summary.annual_rate_used));
                println!("  Effective rate:     {}", format_percent(summary.effective_annual_rate));
                println!("  Real rate:          {}", format_percent(summary.real_annual_rate));
                println!("  Months:             {}", result.months);
                println!("  Reached:            {}", if result.converged_within_horizon { "yes" } else { "no" });
                println!("  Ending capital:     {}", format_money(result.ending_capital));
                println!("  Required capital:   {}", format_money(result.required_capital));
                println!("  Expenses then:      {}", format_money(result.target_annual_expenses));
                println!("  Surplus:            {}", format_money(result.surplus()));
            }
            Some(text)
        }

        Commands::Grow {
            initial,
            monthly,
            years,
            csv,
            rate,
        } => {
            let choice = rate_choice(rate)?;
            let result = runner.run_growth(&choice, *initial, *monthly, *years)?;
            let text = growth_narrative(&result, &runner.rates().label(&choice));

            if cli.json {
                print_json(&result)?;
            } else {
                print_growth(&result, &text);
            }
            if let Some(path) = csv {
                write_snapshots(&result, path)?;
                if !cli.json {
                    println!("\nYearly snapshots written to: {}", path.display());
                }
            }
            Some(text)
        }

        Commands::Compare(CompareCommands::Horizon {
            target_expenses,
            monthly,
            initial,
            inflation,
            custom_rate,
        }) => {
            let base = HorizonParams::new(*initial, *monthly, 0.0, *inflation, *target_expenses);
            let outcomes = runner.compare_horizons(&base, *custom_rate)?;

            if cli.json {
                print_json(&outcomes)?;
            } else {
                println!("{:<20} {:>8} {:>8} {:>20} {:>8}", "Category", "Rate", "Years", "Ending capital", "Reached");
                println!("{}", "-".repeat(68));
                for outcome in &outcomes {
                    println!(
                        "{:<20} {:>8} {:>8.1} {:>20} {:>8}",
                        outcome.label,
                        format_percent(outcome.annual_rate),
                        outcome.result.years(),
                        format_money(outcome.result.ending_capital),
                        if outcome.result.converged_within_horizon { "yes" } else { "no" },
                    );
                }
            }
            None
        }

        Commands::Compare(CompareCommands::Growth {
            initial,
            monthly,
            years,
            custom_rate,
        }) => {
            let base = GrowthParams::new(*initial, *monthly, 0.0, *years);
            let outcomes = runner.compare_growth(&base, *custom_rate)?;

            if cli.json {
                print_json(&outcomes)?;
            } else {
                println!("{:<20} {:>8} {:>20} {:>20}", "Category", "Rate", "Ending capital", "Growth");
                println!("{}", "-".repeat(71));
                for outcome in &outcomes {
                    println!(
                        "{:<20} {:>8} {:>20} {:>20}",
                        outcome.label,
                        format_percent(outcome.annual_rate),
                        format_money(outcome.result.ending_capital),
                        format_money(outcome.result.total_growth()),
                    );
                }
            }
            None
        }

        Commands::Rates => {
            if cli.json {
                print_json(&runner.rates().entries())?;
            } else {
                println!("{:<12} {:<24} {:>8}", "Category", "Label", "Rate");
                println!("{}", "-".repeat(46));
                for entry in runner.rates().entries() {
                    println!("{:<12} {:<24} {:>8}", entry.category, entry.label, format_percent(entry.annual_rate));
                }
                println!("{:<12} {:<24} {:>8}", "custom", "Custom rate", "--custom-rate");
            }
            None
        }

        Commands::Ask { question, topic } => {
            let question = match (question, topic) {
                (Some(question), _) => question.clone(),
                (None, Some(index)) => match catalog::COMMON_TOPICS.get(index.wrapping_sub(1)) {
                    Some(topic) => topic.to_string(),
                    None => bail!("Topic must be between 1 and {}", catalog::COMMON_TOPICS.len()),
                },
                (None, None) => bail!("Provide a question or --topic"),
            };

            let advisor = Advisor::new(GeminiClient::from_env()?);
            let answer = advisor.ask(&question).await?;
            print_answer(cli.json, &question, &answer)?;
            Some(answer)
        }

        Commands::Strategy { risk, goal } => {
            let profile = InvestorProfile {
                risk_tolerance: *risk,
                goal: *goal,
            };
            let advisor = Advisor::new(GeminiClient::from_env()?);
            let answer = advisor.strategy(&profile).await?;
            let heading = format!("Strategy for risk tolerance {}, goal: {}", risk.description(), goal.description());
            print_answer(cli.json, &heading, &answer)?;
            Some(answer)
        }

        Commands::Topics => {
            if cli.json {
                print_json(&catalog::COMMON_TOPICS)?;
            } else {
                for (i, topic) in catalog::COMMON_TOPICS.iter().enumerate() {
                    println!("{:>2}. {}", i + 1, topic);
                }
            }
            None
        }

        Commands::Glossary { term } => {
            let entries: Vec<_> = match term {
                Some(term) => catalog::lookup(term).into_iter().collect(),
                None => catalog::GLOSSARY.iter().collect(),
            };
            if entries.is_empty() {
                bail!("No glossary entry matches {:?}", term.as_deref().unwrap_or_default());
            }

            if cli.json {
                print_json(&entries)?;
            } else {
                for entry in entries {
                    println!("{}\n  {}\n", entry.term, entry.definition);
                }
            }
            None
        }

        Commands::Tips => {
            if cli.json {
                print_json(&catalog::SAFETY_TIPS)?;
            } else {
                for (i, (headline, advice)) in catalog::SAFETY_TIPS.iter().enumerate() {
                    println!("{}. {}\n   {}", i + 1, headline, advice);
                }
            }
            None
        }
    };

    if let Some(text) = narration {
        speaker.speak(&text).wait();
    }

    Ok(())
}

fn rate_choice(args: &RateArgs) -> Result<RateChoice> {
    Ok(RateChoice::from_label(&args.category, args.custom_rate)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_growth(result: &GrowthResult, text: &str) {
    println!("{}\n", text);
    println!("{:>5} {:>20}", "Year", "Capital");
    println!("{}", "-".repeat(26));
    for snapshot in result.with_initial_year() {
        println!("{:>5} {:>20}", snapshot.year, format_money(snapshot.capital));
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total contributed:  {}", format_money(summary.total_contributed));
    println!("  Total growth:       {}", format_money(summary.total_growth));
    println!("  Ending capital:     {}", format_money(summary.ending_capital));
    println!("  Effective return:   {} p.a.", format_percent(summary.effective_annual_rate));
}

fn write_snapshots(result: &GrowthResult, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    for snapshot in result.with_initial_year() {
        writer.serialize(snapshot)?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct Answer<'a> {
    question: &'a str,
    answer: &'a str,
}

fn print_answer(json: bool, question: &str, answer: &str) -> Result<()> {
    if json {
        print_json(&Answer { question, answer })
    } else {
        println!("{}\n\n{}", question, answer);
        Ok(())
    }
}
