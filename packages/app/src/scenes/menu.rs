//! Main menu scene: four actions and the input parsing for them.

/// What the player picked on the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start the sequential egg game.
    Play,
    /// Start the practice quiz.
    Practice,
    /// Clear the shell cache and stay on the menu.
    ClearCache,
    Quit,
}

impl MenuChoice {
    /// Parses one line of player input. Accepts the menu number or a word,
    /// case-insensitively; anything else re-prompts.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "p" | "play" => Some(Self::Play),
            "2" | "practice" => Some(Self::Practice),
            "3" | "clear" | "clear-cache" => Some(Self::ClearCache),
            "4" | "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}
