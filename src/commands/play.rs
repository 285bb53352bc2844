//! Interactive play mode
//!
//! Text-based word-chain game in the terminal

use crate::game::{GameHistory, HintSelector, Hints, MoveEvaluator, pick_start_word};
use crate::output::{print_game_over, print_hints, print_move_result, print_turn};
use crate::validity::WordCheck;
use crate::wordlists::WordList;
use std::io::{self, Write};

/// A single game in progress
#[derive(Debug, Clone)]
pub struct Session {
    pub current: String,
    pub used: GameHistory,
    pub score: u32,
    /// Every word of the chain, start word included
    pub chain: Vec<String>,
    /// Hints shown since the last accepted move
    pub last_hints: Option<Hints>,
}

/// What happened to a line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Accepted { points: u32, game_over: bool },
    Rejected(String),
}

impl Session {
    #[must_use]
    pub fn new(start: &str) -> Self {
        Self {
            current: start.to_string(),
            used: GameHistory::new(),
            score: 0,
            chain: vec![start.to_string()],
            last_hints: None,
        }
    }

    /// Play `word`; words from the last shown hints earn half points
    pub fn play<V: WordCheck + ?Sized>(
        &mut self,
        evaluator: &MoveEvaluator<'_, V>,
        word: &str,
    ) -> TurnOutcome {
        let word = word.trim().to_lowercase();

        if word == self.current || self.used.contains(&word) {
            return TurnOutcome::Rejected("You already used this word".to_string());
        }

        let from_hint = self.last_hints.as_ref().is_some_and(|h| h.contains(&word));
        let result = evaluator.evaluate(&self.current, &word, &self.used, from_hint);
        print_move_result(&word, &result);

        if !result.accepted {
            return TurnOutcome::Rejected(result.message);
        }

        self.used.push(&self.current);
        self.current = word.clone();
        self.score += result.points;
        self.chain.push(word);
        self.last_hints = None;

        TurnOutcome::Accepted {
            points: result.points,
            game_over: result.game_over,
        }
    }
}

/// Run the interactive play mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the dictionary
/// has no usable start word.
pub fn run_play<V: WordCheck + ?Sized>(words: &WordList, checker: &V) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Chain - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make new words from the letters of the current word:\n");
    println!("  - Anagram of the current word:      15 points per letter");
    println!("  - Only letters of the current word: 10 points per letter");
    println!("  - Shares at least 2 letters:         5 points per letter");
    println!("  - Words taken from a hint earn half points\n");
    println!("Commands: 'hint' for suggestions, 'new' for a new game, 'quit' to exit\n");

    let evaluator = MoveEvaluator::new(words, checker);
    let hint_selector = HintSelector::new(words);
    let mut session = new_session(words)?;

    loop {
        print_turn(&session.current, session.score, session.used.len());

        let input = get_user_input("Your word")?.to_lowercase();

        match input.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing! Final score: {}\n", session.score);
                return Ok(());
            }
            "new" | "n" => {
                session = new_session(words)?;
                println!("\n🔄 New game started!\n");
            }
            "hint" | "h" | "?" => {
                let hints = hint_selector.hints(&session.current, &session.used);
                print_hints(&hints);
                let game_over = hints.game_over;
                session.last_hints = Some(hints);

                if game_over {
                    if !finish_game(&session)? {
                        return Ok(());
                    }
                    session = new_session(words)?;
                }
            }
            word => {
                if let TurnOutcome::Accepted {
                    game_over: true, ..
                } = session.play(&evaluator, word)
                {
                    if !finish_game(&session)? {
                        return Ok(());
                    }
                    session = new_session(words)?;
                }
            }
        }
        println!();
    }
}

fn new_session(words: &WordList) -> Result<Session, String> {
    let start = pick_start_word(words, &mut rand::rng()).map_err(|e| e.to_string())?;
    Ok(Session::new(start.text()))
}

/// Show the final banner; returns whether the player wants another game
fn finish_game(session: &Session) -> Result<bool, String> {
    let chain: Vec<&str> = session.chain.iter().map(String::as_str).collect();
    print_game_over(session.score, &chain);

    match get_user_input("Play again? (yes/no)")?
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => {
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DictionaryOnly<'a>(&'a WordList);

    impl WordCheck for DictionaryOnly<'_> {
        fn is_valid(&self, word: &str) -> bool {
            self.0.contains(word)
        }
    }

    fn dictionary() -> WordList {
        WordList::from_strs(&["listen", "silent", "line", "lines", "tile", "dog"])
    }

    #[test]
    fn accepted_move_advances_the_chain() {
        let words = dictionary();
        let checker = DictionaryOnly(&words);
        let evaluator = MoveEvaluator::new(&words, &checker);
        let mut session = Session::new("listen");

        let outcome = session.play(&evaluator, "Silent");
        assert_eq!(
            outcome,
            TurnOutcome::Accepted {
                points: 90,
                game_over: false
            }
        );
        assert_eq!(session.current, "silent");
        assert!(session.used.contains("listen"));
        assert_eq!(session.score, 90);
        assert_eq!(session.chain, vec!["listen", "silent"]);
    }

    #[test]
    fn replaying_a_word_is_refused() {
        let words = dictionary();
        let checker = DictionaryOnly(&words);
        let evaluator = MoveEvaluator::new(&words, &checker);
        let mut session = Session::new("listen");

        assert_eq!(
            session.play(&evaluator, "listen"),
            TurnOutcome::Rejected("You already used this word".to_string())
        );

        session.play(&evaluator, "silent");
        assert!(matches!(
            session.play(&evaluator, "listen"),
            TurnOutcome::Rejected(_)
        ));
        assert_eq!(session.score, 90);
    }

    #[test]
    fn hinted_words_score_half() {
        let words = dictionary();
        let checker = DictionaryOnly(&words);
        let evaluator = MoveEvaluator::new(&words, &checker);
        let mut session = Session::new("listen");

        session.last_hints = Some(HintSelector::new(&words).hints("listen", &session.used));
        let outcome = session.play(&evaluator, "line");

        assert_eq!(
            outcome,
            TurnOutcome::Accepted {
                points: 20,
                game_over: false
            }
        );
        assert!(session.last_hints.is_none());
    }

    #[test]
    fn rejected_move_keeps_state() {
        let words = dictionary();
        let checker = DictionaryOnly(&words);
        let evaluator = MoveEvaluator::new(&words, &checker);
        let mut session = Session::new("listen");

        let outcome = session.play(&evaluator, "dog");
        assert!(matches!(outcome, TurnOutcome::Rejected(_)));
        assert_eq!(session.current, "listen");
        assert_eq!(session.score, 0);
    }
}
