mod picker;

use std::path::PathBuf;

use clap::Parser;
use nyxfall::{render_card, FrameStyle};
use scryfall::{ClientConfig, ScryfallClient};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Look up Magic: The Gathering cards on Scryfall and draw them in the terminal
#[derive(Parser)]
#[command(name = "nyxfall", version)]
struct Args {
    /// Query to run against Scryfall
    query: Option<String>,

    /// Try and match the query with an exact card name
    #[arg(short, long, default_value_t = false)]
    exact: bool,

    /// Fetch a random card
    #[arg(short, long, default_value_t = false)]
    random: bool,

    /// Render the card frame using only basic ASCII characters
    #[arg(short, long, default_value_t = false)]
    ascii: bool,

    /// Path to a JSON file with client settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Debug, PartialEq, Eq)]
enum Mode<'a> {
    Random,
    Exact(&'a str),
    Search(&'a str),
}

impl Args {
    /// What to fetch. `None` if there is neither a query nor `--random`.
    fn mode(&self) -> Option<Mode<'_>> {
        if self.random {
            return Some(Mode::Random);
        }
        let query = self.query.as_deref().filter(|query| !query.is_empty())?;
        if self.exact {
            Some(Mode::Exact(query))
        } else {
            Some(Mode::Search(query))
        }
    }

    fn frame_style(&self) -> FrameStyle {
        if self.ascii {
            FrameStyle::Ascii
        } else {
            FrameStyle::Unicode
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let Some(mode) = args.mode() else {
        println!("You must either supply a query or use the --random flag");
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    info!(base_uri = config.base_uri.as_str(), "Using Scryfall endpoint");
    let client = ScryfallClient::new(&config)?;
    let style = args.frame_style();

    match mode {
        Mode::Random => {
            let card = client.search_random()?;
            println!("{}", render_card(&card, style));
        }
        Mode::Exact(name) => match client.search_exact(name)? {
            Some(card) => println!("{}", render_card(&card, style)),
            None => println!("Card with name '{}' not found", name),
        },
        Mode::Search(query) => {
            let page = picker::with_spinner("Searching Scryfall...", || client.search_query(query))?;
            if page.data.is_empty() {
                println!("No cards found matching '{}'", query);
                return Ok(());
            }
            match picker::pick_card(&client, page)? {
                Some(card) => println!("{}", render_card(&card, style)),
                None => debug!("Selection cancelled"),
            }
        }
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
