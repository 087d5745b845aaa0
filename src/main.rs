#[cfg(not(target_arch = "wasm32"))]
use anyhow::Result;
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use glyphlife_lib::app::{headless, App};
#[cfg(not(target_arch = "wasm32"))]
use glyphlife_lib::engine::{init_logging, EngineConfig, LifeRule, Universe};
#[cfg(not(target_arch = "wasm32"))]
use glyphlife_lib::ui::tui::Tui;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where to run the simulation
    #[arg(short, long, value_enum, default_value = "terminal")]
    mode: Mode,

    /// Config file path; a missing file means defaults
    #[arg(short, long, default_value = "glyphlife.toml")]
    config: String,

    /// Board width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Board height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Size the board to the terminal window (terminal mode)
    #[arg(long)]
    fit: bool,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Rule in B/S notation (e.g. B3/S23) or a preset name
    #[arg(long)]
    rule: Option<LifeRule>,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Print statistics as JSON instead of the board (headless mode)
    #[arg(long)]
    json: bool,

    /// Log to stderr in terminal mode too
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Terminal,
    Headless,
}

#[cfg(not(target_arch = "wasm32"))]
impl Args {
    fn apply_overrides(&self, config: &mut EngineConfig) {
        if let Some(width) = self.width {
            config.world.width = width;
        }
        if let Some(height) = self.height {
            config.world.height = height;
        }
        if self.seed.is_some() {
            config.world.seed = self.seed;
        }
        if let Some(rule) = self.rule {
            config.rules.rule = rule;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = EngineConfig::load_from(&args.config)?;
    args.apply_overrides(&mut config);

    match args.mode {
        Mode::Headless => {
            init_logging("info");
            let mut universe = Universe::from_config(&config)?;
            let report = if args.json {
                headless::Report::Json
            } else {
                headless::Report::Board
            };
            print!("{}", headless::run(&mut universe, args.ticks, report)?);
            if args.json {
                println!();
            }
        }
        Mode::Terminal => {
            if args.verbose {
                init_logging("debug");
            }
            if args.fit {
                let (width, height) = Tui::board_size()?;
                config.world.width = width;
                config.world.height = height;
            }

            let mut app = App::new(config)?;
            let mut tui = Tui::new()?;
            tui.init()?;

            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
