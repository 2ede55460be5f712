//! Terminal runner for the alphabet egg game.
//!
//! One cooperative single-threaded loop drives the scenes: the menu hands
//! off to the game board or the practice quiz, and each scene is dropped on
//! the way back to the menu, which discards its session image cache. The
//! shell cache is cleared once before the first screen appears.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

use alphabet_core::layout::{GRID_COLS, GRID_ROWS};
use alphabet_core::{Letter, Milestone, NEW_ROUND_DELAY_MS, TARGET_COUNT};
use alphabet_app::client::WordClient;
use alphabet_app::platform::{CacheShell, Fullscreen, NoopFullscreen, NullSpeech};
use alphabet_app::scenes::{EggTap, GameScene, MenuChoice, PracticeScene};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The shell clears its cached storage before the first screen shows.
    let shell = CacheShell::new();
    if let Err(err) = shell.clear_cache() {
        tracing::warn!(error = %err, "could not clear shell cache");
    }
    NoopFullscreen.set_fullscreen(true);

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!();
        println!("=== Alphabet Egg Game ===");
        println!("  1) Play");
        println!("  2) Practice");
        println!("  3) Clear cache");
        println!("  4) Quit");

        let Some(line) = read_line(&mut input).await else {
            break;
        };
        match MenuChoice::parse(&line) {
            Some(MenuChoice::Play) => run_game(&mut input).await,
            Some(MenuChoice::Practice) => run_practice(&mut input).await,
            Some(MenuChoice::ClearCache) => match shell.clear_cache() {
                Ok(()) => println!("Cache cleared."),
                Err(err) => println!("Could not clear cache: {err}"),
            },
            Some(MenuChoice::Quit) => break,
            None => println!("Please pick 1-4."),
        }
    }
}

/// Main game mode: break the eggs in order, A through Z.
async fn run_game(input: &mut Lines<BufReader<Stdin>>) {
    let mut scene = GameScene::new(WordClient::from_env(), NullSpeech);

    loop {
        print_board(&scene);
        println!("Tap an egg (1-{TARGET_COUNT}), or 'back' for the menu:");

        let Some(line) = read_line(input).await else {
            return;
        };
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("back") {
            return;
        }
        let Some(index) = parse_egg_number(trimmed) else {
            println!("Please enter a number between 1 and {TARGET_COUNT}.");
            continue;
        };

        match scene.tap_egg(index) {
            EggTap::Revealed {
                letter,
                milestone,
                sequence_complete,
            } => {
                println!("Crack! The letter {letter} appears.");

                let popup = scene
                    .show_word_example_with_retry(letter, |message| println!("{message}"))
                    .await;
                println!(
                    "{letter} is for {} ({}x{} image). Press Enter to continue.",
                    popup.record.word, popup.image.width, popup.image.height
                );
                read_line(input).await;
                scene.dismiss_popup(popup);

                if let Some(milestone) = milestone {
                    println!("{}", milestone_message(milestone));
                }
                if sequence_complete {
                    println!("You broke every egg, A to Z. Amazing!");
                    scene.reset();
                    return;
                }
            }
            EggTap::AlreadyBroken { letter } => {
                println!("That egg already showed you {letter}.");
            }
            EggTap::Locked { notice } => {
                println!("{}", notice.message);
                // The warning dismisses itself after the fixed delay.
                sleep(notice.dismiss_after).await;
            }
        }
    }
}

/// Practice mode: guess the first letter of a random word.
async fn run_practice(input: &mut Lines<BufReader<Stdin>>) {
    let mut scene = PracticeScene::new(WordClient::from_env(), NullSpeech, rand::thread_rng());

    loop {
        let (word, width, height) = {
            let round = scene
                .start_round_with_retry(|message| println!("{message}"))
                .await;
            (round.record.word.clone(), round.image.width, round.image.height)
        };
        println!();
        println!("Which letter does \"{word}\" start with? ({width}x{height} image)");

        loop {
            println!("Your guess (A-Z), or 'back' for the menu. Score: {}", scene.score());
            let Some(line) = read_line(input).await else {
                return;
            };
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("back") {
                return;
            }
            let Ok(letter) = Letter::parse(trimmed) else {
                println!("One letter, A to Z.");
                continue;
            };

            match scene.guess(letter) {
                alphabet_core::GuessOutcome::Correct { score } => {
                    println!("Correct! Score: {score}");
                    sleep(Duration::from_millis(NEW_ROUND_DELAY_MS)).await;
                    scene.finish_round();
                    break;
                }
                alphabet_core::GuessOutcome::Incorrect => {
                    println!("Not quite, try again!");
                }
                alphabet_core::GuessOutcome::NotAccepting => {}
            }
        }
    }
}

fn print_board<S: alphabet_app::platform::Speech>(scene: &GameScene<S>) {
    println!();
    for row in 0..GRID_ROWS {
        let mut line = String::new();
        for col in 0..GRID_COLS {
            let index = row * GRID_COLS + col;
            if index >= TARGET_COUNT {
                break;
            }
            match scene.revealed_letter(index) {
                Some(letter) => line.push_str(&format!("[{letter}] ")),
                None if index == scene.cursor() => line.push_str("(o) "),
                None => line.push_str(" o  "),
            }
        }
        println!("{line}");
    }
}

fn parse_egg_number(input: &str) -> Option<usize> {
    let number: usize = input.parse().ok()?;
    if (1..=TARGET_COUNT).contains(&number) {
        Some(number - 1)
    } else {
        None
    }
}

fn milestone_message(milestone: Milestone) -> &'static str {
    match milestone {
        Milestone::Quarter => "A quarter of the way there!",
        Milestone::Half => "Halfway there, keep going!",
        Milestone::ThreeQuarters => "Almost done, three quarters!",
    }
}

async fn read_line(input: &mut Lines<BufReader<Stdin>>) -> Option<String> {
    match input.next_line().await {
        Ok(line) => line,
        Err(err) => {
            tracing::error!(error = %err, "stdin read failed");
            None
        }
    }
}
