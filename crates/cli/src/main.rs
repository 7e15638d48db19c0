#![warn(clippy::pedantic)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use fittutto_domain::{
    self as domain, Catalog, Category, Equipment, ExerciseFilter, FitnessGoal, FitnessLevel,
    MuscleGroup, PlanGenerationParams, PlanGenerator, PlanID, TrainingLocation,
    TrainingPlanService, UserID,
};
use fittutto_storage::json_file::JsonFile;
use log::{LevelFilter, debug, info};
use uuid::Uuid;

use crate::config::Settings;

mod config;
mod output;

#[derive(Parser, Debug)]
#[command(version, about = "FitTutto - Trainingspläne erstellen und verwalten", long_about = None)]
struct Args {
    /// Settings file (JSON)
    #[arg(short, long, env = "FITTUTTO_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Directory of the plan store
    #[arg(long, env = "FITTUTTO_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,
    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a plan and store it as the active plan of the user
    Generate(PlanArgs),
    /// Generate a plan without storing it
    Preview {
        #[command(flatten)]
        plan: PlanArgs,
        /// Show only the given week
        #[arg(long)]
        week: Option<u32>,
    },
    /// List the plans of a user
    List {
        #[arg(long)]
        user: Uuid,
    },
    /// Show a stored plan
    Show {
        plan: Uuid,
        /// Show only the given week
        #[arg(long)]
        week: Option<u32>,
    },
    /// Show the active plan of a user
    Active {
        #[arg(long)]
        user: Uuid,
        /// Show only the given week
        #[arg(long)]
        week: Option<u32>,
    },
    /// Make a plan the active plan of its user
    Activate { plan: Uuid },
    /// Recompute the volume of a plan for another fitness level
    Adjust {
        plan: Uuid,
        #[arg(long)]
        level: FitnessLevel,
    },
    /// Delete a plan
    Delete { plan: Uuid },
    /// Browse the exercise catalog
    Exercises {
        /// Part of the exercise name
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, value_delimiter = ',')]
        muscle: Vec<MuscleGroup>,
        #[arg(long, value_delimiter = ',')]
        location: Vec<TrainingLocation>,
        /// Only exercises doable with this equipment
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        equipment: Option<Vec<Equipment>>,
        /// Maximum difficulty
        #[arg(long)]
        level: Option<FitnessLevel>,
        #[arg(long, value_delimiter = ',')]
        category: Vec<Category>,
    },
}

#[derive(clap::Args, Debug)]
struct PlanArgs {
    #[arg(long)]
    user: Uuid,
    #[arg(long)]
    goal: FitnessGoal,
    #[arg(long)]
    level: FitnessLevel,
    #[arg(long)]
    location: Option<TrainingLocation>,
    /// Available equipment, comma separated
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    equipment: Option<Vec<Equipment>>,
    /// Training days per week (2-6)
    #[arg(long)]
    days: Option<u32>,
    /// Minutes per session (30-90)
    #[arg(long)]
    minutes: Option<u32>,
    /// Muscle groups to prioritize, comma separated
    #[arg(long, value_delimiter = ',')]
    focus: Vec<MuscleGroup>,
}

impl PlanArgs {
    fn params(&self, settings: &Settings) -> Result<PlanGenerationParams> {
        Ok(PlanGenerationParams {
            user_id: UserID::from(self.user),
            goal: self.goal,
            level: self.level,
            location: match self.location {
                Some(location) => location,
                None => settings.location()?,
            },
            available_equipment: match &self.equipment {
                Some(equipment) => equipment.iter().copied().collect(),
                None => settings.equipment()?,
            },
            days_per_week: self.days.unwrap_or(settings.days_per_week),
            minutes_per_session: self.minutes.unwrap_or(settings.minutes_per_session),
            focus_areas: self.focus.clone(),
        })
    }
}

fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if builder.try_init().is_err() {
        debug!("logger already initialized");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    init_logger(if args.verbose {
        LevelFilter::Debug
    } else {
        settings.log_level()?
    });

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| settings.data_dir.clone());
    debug!("using plan store in {}", data_dir.display());
    let service = domain::Service::new(JsonFile::new(data_dir), domain::catalog::builtin());

    run(args.command, &settings, &service).await
}

async fn run(
    command: Commands,
    settings: &Settings,
    service: &domain::Service<JsonFile, &'static Catalog>,
) -> Result<()> {
    match command {
        Commands::Generate(plan) => {
            let plan = service
                .create_training_plan(&plan.params(settings)?)
                .await
                .context("failed to create training plan")?;
            info!("created training plan {}", plan.id);
            println!("{}", output::plan_summary(&plan));
        }
        Commands::Preview { plan, week } => {
            let plan = PlanGenerator::new(service.catalog())
                .generate_training_plan(&plan.params(settings)?);
            println!("{}", output::plan_details(&plan, service.catalog(), week));
        }
        Commands::List { user } => {
            let plans = service
                .get_training_plans(UserID::from(user))
                .await
                .context("failed to read training plans")?;
            if plans.is_empty() {
                println!("Keine Trainingspläne vorhanden");
            }
            for plan in plans {
                println!("{}", output::plan_summary(&plan));
            }
        }
        Commands::Show { plan, week } => {
            let plan = service
                .get_training_plan(PlanID::from(plan))
                .await
                .with_context(|| format!("failed to read training plan {plan}"))?;
            println!("{}", output::plan_details(&plan, service.catalog(), week));
        }
        Commands::Active { user, week } => {
            let plan = service
                .get_active_training_plan(UserID::from(user))
                .await
                .with_context(|| format!("no active training plan for user {user}"))?;
            println!("{}", output::plan_details(&plan, service.catalog(), week));
        }
        Commands::Activate { plan } => {
            let plan = service
                .activate_training_plan(PlanID::from(plan))
                .await
                .with_context(|| format!("failed to activate training plan {plan}"))?;
            println!("{}", output::plan_summary(&plan));
        }
        Commands::Adjust { plan, level } => {
            let plan = service
                .adjust_training_plan(PlanID::from(plan), level)
                .await
                .with_context(|| format!("failed to adjust training plan {plan}"))?;
            println!("{}", output::plan_summary(&plan));
        }
        Commands::Delete { plan } => {
            let id = service
                .delete_training_plan(PlanID::from(plan))
                .await
                .with_context(|| format!("failed to delete training plan {plan}"))?;
            info!("deleted training plan {id}");
        }
        Commands::Exercises {
            name,
            muscle,
            location,
            equipment,
            level,
            category,
        } => {
            let filter = ExerciseFilter {
                name,
                muscles: muscle.into_iter().collect(),
                locations: location.into_iter().collect(),
                equipment: equipment.map(|e| e.into_iter().collect()),
                level,
                category: category.into_iter().collect(),
            };
            for exercise in filter.exercises(service.catalog()) {
                println!("{}", output::catalog_exercise(exercise));
            }
        }
    }

    Ok(())
}
