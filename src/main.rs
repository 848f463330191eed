// Copyright 2023 Remi Bernotavicius

use clap::Parser;
use clap::Subcommand;

mod config;
mod image_data;
mod inventory;
mod meal_plan;
mod ui;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
type Result<T> = std::result::Result<T, Error>;

#[derive(Parser, Debug)]
#[command(version, about = "Keep track of what's in the fridge")]
struct Args {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open the fridge window.
    Run {
        #[command(flatten)]
        config: config::Config,
    },
    /// Print a meal plan and its shopping list for a freshly stocked fridge.
    Plan {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn run(config: config::Config) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("My Fridge")
            .with_inner_size([1100.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "My Fridge",
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ui::FridgeApp::new(config)))
        }),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}

fn plan(seed: Option<u64>) -> Result<()> {
    let config = config::Config {
        seed,
        ..Default::default()
    };
    let mut rng = config.rng();
    let today = inventory::now().date();
    let fridge = inventory::Inventory::from_items(inventory::seed::initial_items(&mut rng, today));
    log::info!("stocked the fridge with {} items", fridge.len());
    let plan = meal_plan::MealPlan::generate(&meal_plan::Catalog::canned(), &mut rng);

    for (slot, menu) in plan.menus() {
        println!("{slot}: {}", menu.name);
        for recipe in &menu.recipes {
            println!("    {}", recipe.name);
        }
    }
    println!();
    println!("Shopping list:");
    for shortfall in meal_plan::shortfall::shortfalls(&plan, fridge.iter()) {
        println!("    {shortfall}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .env()
        .init()?;

    match args.commands {
        Commands::Run { config } => run(config)?,
        Commands::Plan { seed } => plan(seed)?,
    }
    Ok(())
}
