mod config;
mod telemetry;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;

use saju_base::{ALL_PHASES, ALL_ROLE_GROUPS, ALL_TEN_ROLES, BranchInteraction, CYCLE, Detection};
use saju_rs::{
    FortuneCategory, FortuneReport, FullCompatibility, Gender, PeriodFortune, SajuConfig,
    SajuDate, chart, compatibility, day_master, fortune, fortune_all, init, interactions,
    interactions_within, phase_balance, role_profile,
};

use crate::config::{AppConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillars chart, compatibility and fortune calculator")]
struct Cli {
    /// Output format (overrides SAJU_OUTPUT)
    #[arg(long, global = true)]
    output: Option<OutputFormat>,
    /// Log filter (overrides SAJU_LOG_LEVEL; RUST_LOG wins over both)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    #[value(alias = "m")]
    Male,
    #[value(alias = "f")]
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars of a birth moment
    Chart {
        /// Local date-time (YYYY-MM-DD hh:mm)
        date: SajuDate,
    },
    /// Five-phase balance and day-master strength
    Balance {
        date: SajuDate,
    },
    /// Ten-role counts relative to the day master
    Roles {
        date: SajuDate,
    },
    /// Branch interactions inside one chart, or between two
    Interactions {
        date: SajuDate,
        /// Second chart for cross-chart detection
        #[arg(long)]
        with: Option<SajuDate>,
    },
    /// Compatibility reports for two birth moments
    Compat {
        a: SajuDate,
        b: SajuDate,
        #[arg(long)]
        a_gender: Option<GenderArg>,
        #[arg(long)]
        b_gender: Option<GenderArg>,
    },
    /// Yearly, monthly and daily fortune on a target date
    Fortune {
        /// Birth date-time
        birth: SajuDate,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        on: SajuDate,
        /// overall, wealth, love, career, health or study; all when omitted
        #[arg(long)]
        category: Option<FortuneCategory>,
    },
    /// List the sexagenary cycle
    Cycle {
        /// Only show the year term of this calendar year
        #[arg(long)]
        year: Option<i64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut app = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(level) = cli.log_level.clone() {
        app.telemetry.log_level = level;
    }
    let output = cli.output.unwrap_or(app.output);

    if let Err(e) = telemetry::init(&app.telemetry) {
        eprintln!("Failed to start logging: {e}");
        std::process::exit(1);
    }
    if let Err(e) = init(SajuConfig::default()) {
        eprintln!("Failed to initialize: {e}");
        std::process::exit(1);
    }
    debug!(?output, "configuration loaded");

    if let Err(e) = run(cli.command, output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, output: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Chart { date } => {
            let c = chart(date);
            emit(output, &c, || {
                println!("{}  ({})", c, c.romanized());
                println!("{}", c.hangul());
                println!("Day master: {} ({})", c.day_master().hanja(), c.day_master().name());
                for p in c.pillars() {
                    let hidden: Vec<String> = p
                        .term
                        .branch()
                        .hidden_stems()
                        .iter()
                        .map(|s| s.hanja().to_string())
                        .collect();
                    println!(
                        "  {:<5} {} {}  hidden: {}",
                        p.role.name(),
                        p.term.hanja(),
                        p.term.name(),
                        hidden.join(" ")
                    );
                }
            })?;
        }

        Commands::Balance { date } => {
            let balance = phase_balance(date);
            let dm = day_master(date);
            #[derive(Serialize)]
            struct Out<'a> {
                balance: &'a saju_rs::PhaseBalance,
                day_master: &'a saju_rs::DayMasterProfile,
            }
            emit(output, &Out { balance: &balance, day_master: &dm }, || {
                for p in ALL_PHASES {
                    println!("  {:<6} {:>3}", p.name(), balance.weight(p));
                }
                println!("Dominant: {}  Weakest: {}", balance.dominant(), balance.weakest());
                let missing: Vec<&str> = balance.missing().iter().map(|p| p.name()).collect();
                if !missing.is_empty() {
                    println!("Missing: {}", missing.join(", "));
                }
                let favorable: Vec<&str> = dm.favorable.iter().map(|p| p.name()).collect();
                println!(
                    "Day master {} is {} (support {}); favorable: {}",
                    dm.day_master.hanja(),
                    dm.strength.name(),
                    dm.support,
                    favorable.join(", ")
                );
            })?;
        }

        Commands::Roles { date } => {
            let profile = role_profile(date);
            emit(output, &profile, || {
                println!("Day master: {}", profile.day_master().hanja());
                for role in ALL_TEN_ROLES {
                    let (v, h) = (profile.visible(role), profile.hidden(role));
                    if v + h > 0 {
                        println!("  {:<18} visible {}  hidden {}", role.name(), v, h);
                    }
                }
                for group in ALL_ROLE_GROUPS {
                    println!("  [{}] {}", group.name(), profile.group_total(group));
                }
            })?;
        }

        Commands::Interactions { date, with } => {
            let found = match with {
                Some(other) => interactions(date, other),
                None => interactions_within(date),
            };
            emit(output, &found, || print_detections(&found))?;
        }

        Commands::Compat {
            a,
            b,
            a_gender,
            b_gender,
        } => {
            let full = compatibility(a, a_gender.map(Gender::from), b, b_gender.map(Gender::from));
            emit(output, &full, || print_compatibility(&full))?;
        }

        Commands::Fortune { birth, on, category } => {
            let reports: Vec<FortuneReport> = match category {
                Some(c) => vec![fortune(birth, on, c)?],
                None => fortune_all(birth, on)?,
            };
            emit(output, &reports, || {
                for r in &reports {
                    println!("{} (base {})", r.category.name(), r.base);
                    for p in [&r.yearly, &r.monthly, &r.daily] {
                        print_period(p);
                    }
                }
            })?;
        }

        Commands::Cycle { year } => match year {
            Some(y) => {
                let term = chart(SajuDate::new(y, 6, 1, 12, 0)).year();
                emit(output, &term, || {
                    println!("{y}: {} {} {}", term.hanja(), term.name(), term.hangul());
                })?;
            }
            None => {
                emit(output, &CYCLE[..], || {
                    for t in CYCLE {
                        println!("{:>2}  {}  {:<10} {}", t.index(), t.hanja(), t.name(), t.hangul());
                    }
                })?;
            }
        },
    }
    Ok(())
}

fn emit<T: Serialize + ?Sized>(
    output: OutputFormat,
    value: &T,
    text: impl FnOnce(),
) -> Result<(), serde_json::Error> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(),
    }
    Ok(())
}

fn describe(m: &BranchInteraction) -> String {
    match m {
        BranchInteraction::Clash { pair } => format!("{}-{}", pair.first(), pair.second()),
        BranchInteraction::SixCombine { pair, phase } => {
            format!("{}{} -> {}", pair.first(), pair.second(), phase)
        }
        BranchInteraction::TriadHarmony { phase, members, full } => {
            let joined: String = members.iter().map(|b| b.hanja()).collect();
            format!("{joined} -> {phase}{}", if *full { "" } else { " (partial)" })
        }
        BranchInteraction::Punishment { pair }
        | BranchInteraction::Destruction { pair }
        | BranchInteraction::Harm { pair } => format!("{}-{}", pair.first(), pair.second()),
        BranchInteraction::Void { key, branch } => format!("{branch} void for {}", key.hanja()),
        BranchInteraction::Nobleman { stem, branch, virtue } => {
            if *virtue {
                format!("virtue {stem} for month {branch}")
            } else {
                format!("{branch} for day stem {stem}")
            }
        }
    }
}

fn print_detections(found: &[Detection]) {
    for d in found.iter().filter(|d| !d.is_empty()) {
        let items: Vec<String> = d.matches().iter().map(describe).collect();
        println!(
            "{} {} x{}: {}",
            d.kind().name(),
            d.kind().hanja(),
            d.count(),
            items.join(", ")
        );
    }
}

fn print_compatibility(full: &FullCompatibility) {
    println!("Overall: {} ({})", full.overall, full.overall_tier.name());
    for r in &full.reports {
        println!();
        println!("[{}] {} - {}", r.kind.name(), r.average, r.summary);
        for d in &r.dimensions {
            println!("  {:<20} {:>3}  {}", d.dimension.label(), d.score, d.tier.name());
        }
    }
}

fn print_period(p: &PeriodFortune) {
    println!(
        "  {:<6} {}  score {:>2}  bonus {:+} carried {:+}",
        format!("{:?}", p.period).to_lowercase(),
        p.term.hanja(),
        p.score,
        p.bonus,
        p.carried
    );
    for f in &p.factors {
        println!("      {f}");
    }
}
