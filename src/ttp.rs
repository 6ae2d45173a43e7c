//! Tic-Tac-Toe Text Protocol (TTP) implementation.
//!
//! TTP is a line-oriented request/response protocol modelled on GTP. It lets
//! a terminal, a script or a game front-end drive the engine over
//! stdin/stdout.
//!
//! Each request is an optional numeric id followed by a command and its
//! arguments. Replies start with `=` on success or `?` on failure, echo the
//! id, and end with a blank line. Blank lines and `#` comments are ignored.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return TTP protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `players <a> <b>` - Register the two players (`a` moves first) and clear the board
//! - `clear_board` - Reset the board to empty, first player to move
//! - `play <player> <coord>` - Play a move, e.g. `play x b2`
//! - `genmove <player>` - Let the engine move for a player; replies `none` when no move is left
//! - `showboard` - Print the board
//! - `turn` - Return the player to move
//! - `result` - Return `ongoing`, `draw` or `<player> wins`
//!
//! Coordinates are a column letter `a`..`c` and a row digit `1`..`3`, with
//! `a1` the top-left cell.
//!
//! ## Example
//!
//! ```ignore
//! use tictactoe_ai::ttp::TtpEngine;
//! let mut engine = TtpEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::{Coord, Grid};
use crate::game::{Game, decide};
use crate::playout::{Outcome, outcome};
use crate::position::{parse_coord, str_coord, try_apply_move};

/// The list of known TTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "players",
    "protocol_version",
    "quit",
    "result",
    "showboard",
    "turn",
    "version",
];

/// TTP engine state.
pub struct TtpEngine {
    /// Current game: registered players, player to move, board
    game: Game<String>,
}

impl Default for TtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TtpEngine {
    /// Create an engine with players `x` and `o`, `x` to move.
    pub fn new() -> Self {
        Self::with_players("x", "o")
    }

    pub fn with_players(first: &str, second: &str) -> Self {
        Self {
            game: Game::new(
                [first.to_string(), second.to_string()],
                first.to_string(),
                Grid::new(),
            ),
        }
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            debug!(%command, ?args, "ttp command");
            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "ttp command rejected");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn outcome(&self) -> Option<Outcome<&String>> {
        let board = self.game.board.each_ref().flatten();
        let [first, second] = &self.game.players;
        outcome(&board, [first, second])
    }

    fn check_player(&self, player: &str) -> Result<(), String> {
        if !self.game.players.iter().any(|p| p == player) {
            return Err(format!("unknown player: {player}"));
        }
        if self.game.turn != player {
            return Err(format!("not your turn, {} to move", self.game.turn));
        }
        Ok(())
    }

    fn place(&mut self, at: Coord) {
        let player = self.game.turn.clone();
        self.game.turn = self.game.other_player().clone();
        self.game.board.set(at, Some(player));
    }

    fn clear_board(&mut self) {
        self.game.board = Grid::new();
        self.game.turn = self.game.players[0].clone();
    }

    /// Execute a TTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "tictactoe-ai".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "players" => {
                let [first, second] = args else {
                    return (false, "expected two player names".to_string());
                };
                if first == second {
                    return (false, "players must differ".to_string());
                }
                *self = Self::with_players(first, second);
                (true, String::new())
            }

            "clear_board" => {
                self.clear_board();
                (true, String::new())
            }

            "play" => {
                let [player, vertex] = args else {
                    return (false, "missing arguments".to_string());
                };
                if self.outcome().is_some() {
                    return (false, "game is over".to_string());
                }
                if let Err(message) = self.check_player(player) {
                    return (false, message);
                }
                let Some(index) = parse_coord(vertex) else {
                    return (false, format!("invalid coordinate: {vertex}"));
                };

                let board = self.game.board.each_ref().flatten();
                if let Err(e) = try_apply_move(&board, index, &self.game.turn) {
                    return (false, e.to_string());
                }
                self.place(Coord::from_index(index));
                (true, String::new())
            }

            "genmove" => {
                let Some(player) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                if let Err(message) = self.check_player(player) {
                    return (false, message);
                }

                match decide(&self.game) {
                    Some(at) => {
                        self.place(at);
                        (true, str_coord(at.index()))
                    }
                    None => (true, "none".to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board).trim_end().to_string()),

            "turn" => (true, self.game.turn.clone()),

            "result" => {
                let result = match self.outcome() {
                    None => "ongoing".to_string(),
                    Some(Outcome::Draw) => "draw".to_string(),
                    Some(Outcome::Won(player)) => format!("{player} wins"),
                };
                (true, result)
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(engine: &mut TtpEngine, moves: &[(&str, &str)]) {
        for (player, vertex) in moves {
            let (success, response) = engine.execute("play", &[player, vertex]);
            assert!(success, "play {player} {vertex}: {response}");
        }
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = TtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = TtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut engine = TtpEngine::new();
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "tictactoe-ai");
    }

    #[test]
    fn test_known_command() {
        let mut engine = TtpEngine::new();

        let (success, response) = engine.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["boardsize"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_play_alternates_turns() {
        let mut engine = TtpEngine::new();
        play_all(&mut engine, &[("x", "b2")]);
        assert_eq!(engine.execute("turn", &[]), (true, "o".to_string()));

        let (success, response) = engine.execute("play", &["x", "a1"]);
        assert!(!success);
        assert!(response.starts_with("not your turn"));
    }

    #[test]
    fn test_play_rejects_bad_moves() {
        let mut engine = TtpEngine::new();
        play_all(&mut engine, &[("x", "b2")]);

        let (success, response) = engine.execute("play", &["o", "b2"]);
        assert!(!success);
        assert_eq!(response, "cell index 4 is already occupied");

        let (success, _) = engine.execute("play", &["o", "z9"]);
        assert!(!success);

        let (success, _) = engine.execute("play", &["bob", "a1"]);
        assert!(!success);
    }

    #[test]
    fn test_play_after_game_over() {
        let mut engine = TtpEngine::new();
        play_all(
            &mut engine,
            &[("x", "a1"), ("o", "a2"), ("x", "b1"), ("o", "b2"), ("x", "c1")],
        );
        assert_eq!(engine.execute("result", &[]), (true, "x wins".to_string()));

        let (success, response) = engine.execute("play", &["o", "c3"]);
        assert!(!success);
        assert_eq!(response, "game is over");

        assert_eq!(engine.execute("genmove", &["o"]), (true, "none".to_string()));
    }

    #[test]
    fn test_genmove() {
        let mut engine = TtpEngine::new();
        play_all(&mut engine, &[("x", "a1")]);
        assert_eq!(engine.execute("genmove", &["o"]), (true, "b2".to_string()));
        assert_eq!(engine.execute("turn", &[]), (true, "x".to_string()));
    }

    #[test]
    fn test_players_and_clear_board() {
        let mut engine = TtpEngine::new();
        assert!(engine.execute("players", &["alice", "bob"]).0);
        assert!(!engine.execute("players", &["alice", "alice"]).0);

        play_all(&mut engine, &[("alice", "c3")]);
        assert_eq!(engine.execute("showboard", &[]).1, "\n. . .\n. . .\n. . alice");

        assert!(engine.execute("clear_board", &[]).0);
        assert_eq!(engine.execute("turn", &[]), (true, "alice".to_string()));
        assert_eq!(engine.execute("result", &[]), (true, "ongoing".to_string()));
    }

    #[test]
    fn test_serve_session() {
        let input = "1 name\n# comment\n\nplay x b2\n2 genmove o\nfoo\nquit\nname\n";
        let mut output = Vec::new();

        TtpEngine::new().serve(input.as_bytes(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "=1 tictactoe-ai\n\n= \n\n=2 a1\n\n? unknown command: foo\n\n= \n\n"
        );
    }
}
