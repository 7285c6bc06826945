//! Tile Quote Form - Interactive TUI
//!
//! Terminal form for pricing a tiled floor: enter the area, pick a tile
//! size, and press calculate to see boxes, adhesive and the discounted price.
//!
//! ## Usage
//!
//! ```bash
//! # Empty form with stock prices
//! quote-form
//!
//! # Pre-filled area and a different price per m²
//! quote-form --area 20 --price-per-sqm 49.5
//! ```

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;

use tile_quote::quote::QuoteConfigBuilder;
use tile_quote::tui::{App, Event, EventHandler};

#[derive(Parser, Debug)]
#[command(
    name = "quote-form",
    author,
    version = env!("TILE_QUOTE_VERSION"),
    about = "Interactive tile quote form"
)]
struct Cli {
    /// Initial floor area in m²
    #[clap(short, long, value_name = "M2")]
    area: Option<String>,

    /// Price per m² of floor area
    #[clap(long, value_name = "PRICE")]
    price_per_sqm: Option<f64>,

    /// Extra area fraction bought for cutting loss
    #[clap(long, value_name = "FRACTION")]
    waste: Option<f64>,

    /// Adhesive consumption in kg per m²
    #[clap(long, value_name = "KG")]
    glue_rate: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Validate before touching the terminal so errors print normally
    let mut builder = QuoteConfigBuilder::default();
    if let Some(price) = cli.price_per_sqm {
        builder.price_per_sqm(price);
    }
    if let Some(waste) = cli.waste {
        builder.waste_fraction(waste);
    }
    if let Some(rate) = cli.glue_rate {
        builder.glue_kg_per_sqm(rate);
    }
    let config = builder.build()?;

    let mut app = match cli.area {
        Some(area) => App::with_area(config, area),
        None => App::new(config),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event handler (100ms tick rate)
    let mut event_handler = EventHandler::new(100);

    // Main loop
    loop {
        terminal.draw(|frame| {
            tile_quote::tui::ui::draw(frame, &mut app);
        })?;

        match event_handler.next().await? {
            Event::Tick => {
                app.on_tick();
            }
            Event::Key(key) => {
                app.on_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Resize(_, _) => {
                // Terminal will redraw automatically
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print the last quote so it survives leaving the alternate screen
    if app.form.last_result().is_some() {
        println!("\nLast quote:");
        for (label, value) in app.form.output_rows() {
            println!("  {:<12} {}", label, value);
        }
    }

    Ok(())
}
