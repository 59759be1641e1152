use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use swoldier_core::*;

#[derive(Parser)]
#[command(name = "swoldier")]
#[command(about = "Workout generator for split, muscle group and goal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List split types, their groups and the goal schemes (default)
    Catalog {
        /// Only show this split type
        #[arg(long)]
        split: Option<String>,
    },

    /// Generate a workout
    Generate {
        /// Split type (individual, bro_split, bodybuilder_split, upper_lower)
        #[arg(long)]
        split: Option<String>,

        /// Muscle group or bucket; repeat for up to three groups
        #[arg(long = "group", short = 'g')]
        groups: Vec<String>,

        /// Goal (strength_power, growth_hypertrophy, cardiovascular_endurance)
        #[arg(long)]
        goal: Option<String>,

        /// Exercises drawn per group
        #[arg(long)]
        count: Option<usize>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Print the workout as JSON
        #[arg(long)]
        json: bool,

        /// Log the workout to history and update the profile
        #[arg(long)]
        complete: bool,
    },

    /// Show workout history
    History {
        /// Match against groups, split type and goal
        #[arg(long)]
        search: Option<String>,

        /// Only show workouts for this goal
        #[arg(long)]
        goal: Option<String>,

        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export workout history to CSV
    Export {
        /// Output file (defaults to history.csv in the data directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show or update the user profile
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        level: Option<String>,
    },
}

fn main() -> ExitCode {
    swoldier_core::logging::init_with_level("warn");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }

    match cli.command {
        Some(Commands::Catalog { split }) => cmd_catalog(&config, split),
        Some(Commands::Generate {
            split,
            groups,
            goal,
            count,
            seed,
            json,
            complete,
        }) => {
            let request = WorkoutRequest::new(
                split.unwrap_or_else(|| config.defaults.split.to_string()),
                groups,
                goal.unwrap_or_else(|| config.defaults.goal.to_string()),
            );
            cmd_generate(&config, request, count, seed, json, complete)
        }
        Some(Commands::History { search, goal, json }) => cmd_history(&config, search, goal, json),
        Some(Commands::Export { output }) => cmd_export(&config, output),
        Some(Commands::Profile { name, level }) => cmd_profile(&config, name, level),
        None => cmd_catalog(&config, None),
    }
}

fn cmd_catalog(config: &Config, split: Option<String>) -> Result<()> {
    let catalog = config.catalog()?;

    let splits = match split {
        Some(s) => vec![s.parse::<SplitType>()?],
        None => SplitType::ALL.to_vec(),
    };

    println!("SPLIT TYPES");
    for split in splits {
        println!();
        println!("  {} - {}", split.label(), split.description());
        println!("    groups: {}", catalog.groups_for(split)?.join(", "));
    }

    println!();
    println!("GOALS");
    for goal in Goal::ALL {
        let scheme = catalog.scheme_for(goal)?;
        println!(
            "  {:<26} {} sets x {} reps, rest {}s, tempo {}",
            goal.as_str(),
            scheme.sets,
            scheme.reps,
            scheme.rest_seconds,
            scheme.tempo
        );
    }

    Ok(())
}

fn cmd_generate(
    config: &Config,
    request: WorkoutRequest,
    count: Option<usize>,
    seed: Option<u64>,
    json: bool,
    complete: bool,
) -> Result<()> {
    let catalog = config.catalog()?;

    let options = match count {
        Some(n) => GenerateOptions::with_exercises_per_group(n),
        None => config.generate_options(),
    };

    if let Ok(split) = request.split.parse::<SplitType>() {
        check_arity(split, &request.groups)?;
    }

    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let workout = generate(&catalog, &request, &options, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&workout)?);
    } else {
        display_workout(&request, &workout);
    }

    if complete {
        let now = Utc::now();
        let record = complete_workout(&request, &workout, now)?;

        let mut store = JsonlHistoryStore::new(config.history_path());
        store.append(&record)?;

        let profile = UserProfile::update(&config.profile_path(), |profile| {
            profile.record_completion(now);
            Ok(())
        })?;

        tracing::debug!("Logged workout {}", record.id);
        if !json {
            println!("\n✓ Workout logged! ({} completed)", profile.workouts_completed);
        }
    }

    Ok(())
}

fn display_workout(request: &WorkoutRequest, workout: &Workout) {
    println!("\n╭─────────────────────────────────────────╮");
    println!(
        "│  {} WORKOUT",
        request.goal.replace('_', " ").to_uppercase()
    );
    println!("╰─────────────────────────────────────────╯");

    let mut current_group: Option<&str> = None;
    for (i, exercise) in workout.iter().enumerate() {
        if current_group != Some(exercise.source_group.as_str()) {
            current_group = Some(exercise.source_group.as_str());
            println!();
            println!("  [{}]", exercise.source_group.replace('_', " "));
        }

        let muscles: Vec<_> = exercise.muscles.iter().map(|m| m.as_str()).collect();
        println!("  {:>2}. {} ({})", i + 1, exercise.name, muscles.join(" & "));
        println!(
            "      → {} sets x {} reps, rest {}s, tempo {}",
            exercise.sets, exercise.reps, exercise.rest_seconds, exercise.tempo
        );
    }

    println!();
}

fn cmd_history(
    config: &Config,
    search: Option<String>,
    goal: Option<String>,
    json: bool,
) -> Result<()> {
    let query = HistoryQuery {
        search,
        goal: goal.map(|g| g.parse::<Goal>()).transpose()?,
    };

    let store = JsonlHistoryStore::new(config.history_path());
    let records = query.apply(&store.load_all()?);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No workouts found.");
        return Ok(());
    }

    let stats = HistoryStats::compute(&records);
    println!("Total workouts: {}", stats.total_workouts);
    println!("Time spent:     {} mins", stats.estimated_minutes);
    if let Some(goal) = stats.favorite_goal {
        println!("Favorite goal:  {}", goal.label());
    }
    println!("Top muscles:    {}", stats.top_groups.join(", "));

    for (month, month_records) in group_by_month(&records) {
        println!();
        println!("{}", month);
        for record in month_records {
            println!(
                "  {}  {:<18} {:<26} {} ({} exercises)",
                record.date.format("%b %d %H:%M"),
                record.split.as_str(),
                record.goal.as_str(),
                record.groups.join(", "),
                record.exercises.len()
            );
        }
    }

    Ok(())
}

fn cmd_export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let store = JsonlHistoryStore::new(config.history_path());
    let records = store.load_all()?;

    if records.is_empty() {
        println!("No workout history found - nothing to export.");
        return Ok(());
    }

    let output = output.unwrap_or_else(|| config.data.data_dir.join("history.csv"));
    let rows = export_csv(&records, &output)?;

    println!("✓ Exported {} exercises from {} workouts", rows, records.len());
    println!("  CSV: {}", output.display());
    Ok(())
}

fn cmd_profile(config: &Config, name: Option<String>, level: Option<String>) -> Result<()> {
    let path = config.profile_path();

    let profile = if name.is_some() || level.is_some() {
        UserProfile::update(&path, |profile| {
            if let Some(name) = name {
                profile.name = name;
            }
            if let Some(level) = level {
                profile.level = level;
            }
            Ok(())
        })?
    } else {
        UserProfile::load(&path)?
    };

    println!("Name:               {}", profile.name);
    println!("Level:              {}", profile.level);
    println!("Workouts completed: {}", profile.workouts_completed);
    println!("Streak:             {}", profile.streak);
    match profile.last_workout {
        Some(date) => println!("Last workout:       {}", date.format("%Y-%m-%d %H:%M")),
        None => println!("Last workout:       never"),
    }

    Ok(())
}
