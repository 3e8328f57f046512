//! Text commands over one roster and one dice roller.
//!
//! This is the surface a chat front end talks to: it hands over a line such
//! as `!add Alice 1d20+4` and posts the reply it gets back.
//!
//! # Commands
//!
//! - `r <dice>` / `r <count>#<dice>` - roll dice
//! - `initiative` - start a new round
//! - `add <name> <dice>` - roll initiative and join the round
//! - `list` - show the turn order
//! - `remove <name>` - leave the round

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::parse::Request;
use crate::roll::{MarkdownStringifier, RollContext, Roller, Stringify};
use crate::roster::Roster;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{instrument, warn};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command<'a> {
    Roll(&'a str),
    Initiative,
    Add { name: &'a str, notation: &'a str },
    List,
    Remove(&'a str),
}

impl<'a> Command<'a> {
    /// Parses a command line with its prefix already stripped.
    pub fn parse(line: &'a str) -> Result<Self> {
        let (command, rest) = split_word(line);
        Ok(match command {
            "r" => Self::Roll(required(rest, "dice")?),
            "initiative" => Self::Initiative,
            "add" => {
                let (name, notation) = split_word(rest);
                Self::Add {
                    name: required(name, "name")?,
                    notation: required(notation, "dice")?,
                }
            }
            "list" => Self::List,
            "remove" => Self::Remove(required(rest, "name")?),
            other => return Err(Error::UnknownCommand(other.to_string())),
        })
    }
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn required<'a>(arg: &'a str, name: &'static str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(Error::MissingArgument(name))
    } else {
        Ok(arg)
    }
}

pub struct Session<R = StdRng> {
    config: SessionConfig,
    ctx: RollContext<R>,
    roster: Roster,
}

impl Session<StdRng> {
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_roller(config, rng)
    }
}

impl<R: Roller> Session<R> {
    pub fn with_roller(config: SessionConfig, roller: R) -> Self {
        Self {
            ctx: RollContext::new(config.max_rolls, roller),
            roster: Roster::new(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Runs `line` if it starts with the command prefix.
    #[instrument(skip(self))]
    pub fn handle(&mut self, line: &str) -> Option<String> {
        let line = line.trim_start().strip_prefix(self.config.prefix.as_str())?;
        Some(match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(why) => {
                warn!(%why, "rejected command");
                format!("Error: {}", why)
            }
        })
    }

    pub fn execute(&mut self, command: Command<'_>) -> String {
        match command {
            Command::Roll(dice) => self.roll(dice).unwrap_or_else(|why| {
                warn!(dice, %why, "roll failed");
                format!("Error rolling dice: {}", why)
            }),
            Command::Initiative => {
                self.roster.reset();
                format!(
                    "Initiative started! Use {}add <name> <dice> to add players.",
                    self.config.prefix
                )
            }
            Command::Add { name, notation } => match self.ctx.eval_initiative(notation) {
                Ok(outcome) => {
                    self.roster.add(name, outcome);
                    format!("{} joined with an initiative of {}.", name, outcome.total)
                }
                Err(why) => {
                    warn!(name, notation, %why, "initiative roll failed");
                    format!("Error adding player: {}", why)
                }
            },
            Command::List => {
                if self.roster.is_empty() {
                    "The initiative list is empty.".to_string()
                } else {
                    format!("**Initiative Order:**\n{}", self.roster)
                }
            }
            Command::Remove(name) => match self.roster.remove(name) {
                Ok(_) => format!("{} was removed from initiative.", name),
                Err(_) => format!("Player '{}' not found in initiative.", name),
            },
        }
    }

    fn roll(&mut self, dice: &str) -> Result<String> {
        let request = Request::parse(dice)?;
        let results = self.ctx.eval_request(&request)?;
        Ok(results
            .iter()
            .map(|r| MarkdownStringifier.str_roll(r, request.notation))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::StepRoller;

    fn session() -> Session<StepRoller> {
        Session::with_roller(SessionConfig::default(), StepRoller::new(10, 1))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("r 1d20 + 4"), Ok(Command::Roll("1d20 + 4")));
        assert_eq!(Command::parse("initiative"), Ok(Command::Initiative));
        assert_eq!(
            Command::parse("add  Alice   1d20+4"),
            Ok(Command::Add {
                name: "Alice",
                notation: "1d20+4"
            })
        );
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("remove Bob"), Ok(Command::Remove("Bob")));
    }

    #[test]
    fn test_parse_command_errors() {
        assert_eq!(Command::parse("r"), Err(Error::MissingArgument("dice")));
        assert_eq!(Command::parse("add Alice"), Err(Error::MissingArgument("dice")));
        assert_eq!(Command::parse("add"), Err(Error::MissingArgument("name")));
        assert_eq!(Command::parse("remove "), Err(Error::MissingArgument("name")));
        assert_eq!(
            Command::parse("fireball 8d6"),
            Err(Error::UnknownCommand("fireball".to_string()))
        );
    }

    #[test]
    fn test_ignores_lines_without_prefix() {
        assert_eq!(session().handle("r 1d20"), None);
        assert_eq!(session().handle("hello there"), None);
    }

    #[test]
    fn test_roll() {
        let mut s = session();
        assert_eq!(
            s.handle("!r 1d20+3").as_deref(),
            Some("13 <- [+10, +3] 1d20+3")
        );
        assert_eq!(
            s.handle("!r 2d6").as_deref(),
            Some("11 <- [+5, **+6**] 2d6")
        );
    }

    #[test]
    fn test_roll_many() {
        let mut s = session();
        assert_eq!(
            s.handle("!r 3#1d20").as_deref(),
            Some("10 <- [+10] 1d20\n11 <- [+11] 1d20\n12 <- [+12] 1d20")
        );
    }

    #[test]
    fn test_roll_errors() {
        let mut s = session();
        let reply = s.handle("!r 1d0").unwrap();
        assert!(reply.starts_with("Error rolling dice: malformed expression"), "{}", reply);
        let reply = s.handle("!r x#1d6").unwrap();
        assert!(reply.starts_with("Error rolling dice: malformed expression"), "{}", reply);
        let reply = s.handle("!r 2000d6").unwrap();
        assert_eq!(reply, "Error rolling dice: too many dice rolled (limit is 1000)");
        let reply = s.handle("!dance").unwrap();
        assert_eq!(reply, "Error: unknown command: dance");
    }

    #[test]
    fn test_initiative_round() {
        let mut s = session();
        assert_eq!(
            s.handle("!initiative").as_deref(),
            Some("Initiative started! Use !add <name> <dice> to add players.")
        );
        assert_eq!(
            s.handle("!list").as_deref(),
            Some("The initiative list is empty.")
        );
        assert_eq!(
            s.handle("!add Alice 1d20+2").as_deref(),
            Some("Alice joined with an initiative of 12.")
        );
        assert_eq!(
            s.handle("!add Bob 1d20+5").as_deref(),
            Some("Bob joined with an initiative of 16.")
        );
        assert_eq!(
            s.handle("!list").as_deref(),
            Some("**Initiative Order:**\n1. Bob (16)\n2. Alice (12)")
        );
        assert_eq!(
            s.handle("!remove alice").as_deref(),
            Some("alice was removed from initiative.")
        );
        assert_eq!(
            s.handle("!remove alice").as_deref(),
            Some("Player 'alice' not found in initiative.")
        );
        assert_eq!(s.roster().len(), 1);
        s.handle("!initiative");
        assert!(s.roster().is_empty());
    }

    #[test]
    fn test_failed_add_leaves_roster() {
        let mut s = session();
        s.handle("!add Alice 1d20");
        let reply = s.handle("!add Bob 0d20").unwrap();
        assert!(reply.starts_with("Error adding player: "), "{}", reply);
        assert_eq!(s.roster().len(), 1);
    }

    #[test]
    fn test_custom_prefix() {
        let config = SessionConfig::default().with_prefix("/");
        let mut s = Session::with_roller(config, StepRoller::new(10, 1));
        assert_eq!(s.handle("!list"), None);
        assert_eq!(
            s.handle("/initiative").as_deref(),
            Some("Initiative started! Use /add <name> <dice> to add players.")
        );
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let config = SessionConfig::default().with_seed(99);
        let mut a = Session::new(config.clone());
        let mut b = Session::new(config);
        for _ in 0..5 {
            assert_eq!(a.handle("!r 4d20+1"), b.handle("!r 4d20+1"));
        }
    }
}
