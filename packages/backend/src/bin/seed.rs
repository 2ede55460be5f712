//! Administrative seeding tool. Clears the word collection and repopulates
//! it with the canonical A-Z word list. This is the only write path; the
//! HTTP service itself is read-only.

use tracing_subscriber::EnvFilter;

use alphabet_backend::config::Config;
use alphabet_backend::db::WordStore;
use alphabet_core::Letter;

const ASSET_BASE_URL: &str = "https://alphabetgame.s3.amazonaws.com";

const SEED_WORDS: [(&str, &str); 26] = [
    ("A", "Apple"),
    ("B", "Ball"),
    ("C", "Cat"),
    ("D", "Dog"),
    ("E", "Egg"),
    ("F", "Fish"),
    ("G", "Goat"),
    ("H", "Hat"),
    ("I", "Ice"),
    ("J", "Jam"),
    ("K", "Kite"),
    ("L", "Lion"),
    ("M", "Moon"),
    ("N", "Nest"),
    ("O", "Orange"),
    ("P", "Pig"),
    ("Q", "Queen"),
    ("R", "Rainbow"),
    ("S", "Sun"),
    ("T", "Tree"),
    ("U", "Umbrella"),
    ("V", "Van"),
    ("W", "Water"),
    ("X", "X-ray"),
    ("Y", "Yellow"),
    ("Z", "Zebra"),
];

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = match WordStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "could not open word store");
            std::process::exit(1);
        }
    };

    let words: Vec<(Letter, String, String)> = SEED_WORDS
        .iter()
        .filter_map(|(letter, word)| {
            let letter = Letter::parse(letter).ok()?;
            let image_url = format!("{ASSET_BASE_URL}/{}.png", word.to_lowercase());
            Some((letter, word.to_string(), image_url))
        })
        .collect();

    match store.replace_all(&words).await {
        Ok(count) => tracing::info!(count, "word collection reseeded"),
        Err(err) => {
            tracing::error!(error = %err, "seeding failed");
            std::process::exit(1);
        }
    }
}
