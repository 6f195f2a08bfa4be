use std::time::Duration;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use nyxfall::Card;
use scryfall::{PagedResponse, ScryfallClient};
use tracing::debug;

/// Rows of the selection list shown at once.
const PAGE_SIZE: usize = 7;
const LOAD_MORE: &str = "Load more results...";

/// Runs `f` while a spinner with `message` is shown on stderr.
pub fn with_spinner<T>(message: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = f();
    spinner.finish_and_clear();
    result
}

/// Lets the user choose one of the search results by name.
///
/// While Scryfall has more pages, the list ends with an entry that fetches
/// the next one. Returns `None` if the user cancels.
pub fn pick_card(client: &ScryfallClient, first_page: PagedResponse) -> anyhow::Result<Option<Card>> {
    let theme = ColorfulTheme::default();
    let mut page = first_page;
    let mut cards = std::mem::take(&mut page.data);
    let mut default = 0;

    loop {
        let mut items: Vec<String> = cards.iter().map(Card::to_string).collect();
        if page.has_more {
            items.push(String::from(LOAD_MORE));
        }

        let selection = Select::with_theme(&theme)
            .with_prompt(format!("{} of {} cards", cards.len(), page.total_cards))
            .items(&items)
            .default(default)
            .max_length(PAGE_SIZE)
            .interact_opt()?;

        match selection {
            None => return Ok(None),
            Some(idx) if idx < cards.len() => return Ok(Some(cards.swap_remove(idx))),
            Some(_) => match with_spinner("Loading more results...", || client.next_page(&page))? {
                Some(mut next_page) => {
                    debug!(num_cards = next_page.data.len(), "Loaded next page");
                    default = cards.len();
                    cards.append(&mut next_page.data);
                    page = next_page;
                }
                None => page.has_more = false,
            },
        }
    }
}
