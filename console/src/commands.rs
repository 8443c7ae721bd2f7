use tictactoe_common::tictactoe::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index; the player types 1-9.
    Play(usize),
    NewGame,
    SetDifficulty(Difficulty),
    ResetScores,
    ShowScores,
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_whitespace();
        let head = parts.next()?.to_ascii_lowercase();

        let command = match head.as_str() {
            "n" | "new" => Command::NewGame,
            "r" | "reset" => Command::ResetScores,
            "s" | "scores" => Command::ShowScores,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            "d" | "difficulty" => match parts.next() {
                Some(name) => match name.parse::<Difficulty>() {
                    Ok(difficulty) => Command::SetDifficulty(difficulty),
                    Err(e) => Command::Invalid(e),
                },
                None => Command::Invalid("Usage: d <easy|harder|expert>".to_string()),
            },
            cell => match cell.parse::<usize>() {
                Ok(number @ 1..=9) => Command::Play(number - 1),
                _ => Command::Invalid(format!("Unknown command '{}', type 'h' for help", cell)),
            },
        };

        Some(command)
    }
}
