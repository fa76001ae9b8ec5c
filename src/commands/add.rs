//! The `add` command: extract bookmark metadata for a URL and save it.

use crate::bookmark::BookmarkRecord;
use crate::cli::AddArgs;
use crate::config::Config;
use crate::error::{PinpostError, Result};
use crate::events::{Event, EventAction, log_best_effort};
use crate::extract::Extractor;
use crate::model::AnthropicBackend;
use crate::publish::{PinboardClient, PublishOptions};
use serde_json::json;

/// Run the extract -> print -> publish pipeline for one URL.
pub fn cmd_add(args: AddArgs) -> Result<()> {
    let config = Config::load()?;

    // Extraction needs the model key; the Pinboard token is only required
    // once we actually save, so --dry-run works with just the key.
    let backend = AnthropicBackend::from_config(&config)?;
    let extractor = Extractor::new(Box::new(backend));

    println!("Analyzing {} ...", args.url);
    let record = extractor.extract(&args.url)?;

    log_best_effort(
        Event::new(EventAction::Extract, &record.url).with_details(json!({
            "title": record.title,
            "tags": record.tags,
            "model": config.model,
        })),
    );

    if args.json {
        let rendered = serde_json::to_string_pretty(&record)
            .map_err(|e| PinpostError::User(format!("failed to render record: {}", e)))?;
        println!("{}", rendered);
    } else {
        print_record(&record);
    }

    if args.dry_run {
        println!();
        println!("Dry run - bookmark not saved.");
        return Ok(());
    }

    let token = config.require_pinboard_token()?;
    let client = PinboardClient::new(token, &config.pinboard_base_url)?;
    let options = PublishOptions {
        private: args.private,
        toread: args.toread,
    };

    client.add(&record, &options)?;

    log_best_effort(
        Event::new(EventAction::Publish, &record.url).with_details(json!({
            "private": options.private,
            "toread": options.toread,
        })),
    );

    println!();
    println!("Bookmark saved to Pinboard.");
    Ok(())
}

/// Print the extracted record as a readable summary.
fn print_record(record: &BookmarkRecord) {
    println!();
    println!("  Title:       {}", record.title);
    println!("  URL:         {}", record.url);
    if record.description.is_empty() {
        println!("  Description: (none)");
    } else {
        println!("  Description: {}", record.description);
    }
    if record.tags.is_empty() {
        println!("  Tags:        (none)");
    } else {
        println!("  Tags:        {}", record.tags.join(", "));
    }
}
