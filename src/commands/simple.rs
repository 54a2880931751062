//! Simple interactive CLI mode
//!
//! Line-based query loop without the TUI. Each line is either a hint command
//! (see [`crate::constraints::hint`]) or one of the session commands below.

use crate::constraints::apply_line;
use crate::filter::FilterEngine;
use crate::index::Dictionary;
use crate::output::{print_constraints, print_distribution, print_ranking};
use crate::scoring::{FrequencyTable, RankStrategy, Scorer};
use crate::session::Sessions;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Re-run the active query and print it
    Show,
    /// Print a message without re-running the query
    Message(String),
    /// Print an error
    Error(String),
    Quit,
}

/// Query state behind the line-based mode
pub struct SimpleSession<'d> {
    dictionary: &'d Dictionary,
    frequencies: &'d FrequencyTable,
    scorer: Scorer,
    sessions: Sessions,
    strategy: RankStrategy,
    limit: usize,
}

impl<'d> SimpleSession<'d> {
    #[must_use]
    pub fn new(
        dictionary: &'d Dictionary,
        frequencies: &'d FrequencyTable,
        scorer: Scorer,
        size: usize,
        strategy: RankStrategy,
        limit: usize,
    ) -> Self {
        Self {
            dictionary,
            frequencies,
            scorer,
            sessions: Sessions::new(size),
            strategy,
            limit,
        }
    }

    #[must_use]
    pub const fn sessions(&self) -> &Sessions {
        &self.sessions
    }

    #[must_use]
    pub const fn strategy(&self) -> RankStrategy {
        self.strategy
    }

    /// Handle one input line
    pub fn handle(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Reply::Show;
        };

        match command.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Reply::Quit,
            "show" | "ls" => Reply::Show,
            "help" | "?" => Reply::Message(HELP.to_string()),
            "sort" => match words.next().map(str::parse::<RankStrategy>) {
                Some(Ok(strategy)) => {
                    self.strategy = strategy;
                    Reply::Show
                }
                Some(Err(e)) => Reply::Error(e),
                None => {
                    self.strategy = self.strategy.next();
                    Reply::Show
                }
            },
            "tab" => self.handle_tab(words.next(), words.next()),
            _ => match apply_line(line, &mut self.sessions.active_mut().constraints) {
                Ok(_) => Reply::Show,
                Err(e) => Reply::Error(e.to_string()),
            },
        }
    }

    fn handle_tab(&mut self, action: Option<&str>, arg: Option<&str>) -> Reply {
        match action {
            Some("new") => {
                let size = self.sessions.active().constraints.size();
                self.sessions.open(size);
            }
            Some("dup") => {
                self.sessions.duplicate_active();
            }
            Some("close") => {
                if !self.sessions.close_active() {
                    return Reply::Error("cannot close the last tab".to_string());
                }
            }
            Some("next") => self.sessions.focus_next(),
            Some("prev") => self.sessions.focus_previous(),
            Some("go") => match arg.and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if (1..=self.sessions.len()).contains(&n) => self.sessions.select(n - 1),
                _ => {
                    return Reply::Error(format!(
                        "'tab go' expects a tab number in 1..={}",
                        self.sessions.len()
                    ));
                }
            },
            _ => return Reply::Error("usage: tab new|dup|close|next|prev|go <n>".to_string()),
        }
        Reply::Show
    }

    /// Filter, rank and print the active tab
    pub fn show(&self) {
        let tab = self.sessions.active();
        let words = FilterEngine::new(self.dictionary).apply(&tab.constraints);
        let ranking = self.scorer.rank(&words, self.frequencies, self.strategy);

        println!("{}", "─".repeat(60).cyan());
        println!(
            "{} ({}/{})  {} candidates  sort: {}",
            tab.name.bright_white().bold(),
            self.sessions.active_index() + 1,
            self.sessions.len(),
            ranking.len().to_string().bright_yellow().bold(),
            self.strategy.name().cyan()
        );
        println!("{}", "─".repeat(60).cyan());
        print_constraints(&tab.constraints);
        println!();
        print_ranking(&ranking, self.limit);
        print_distribution(&ranking.distribution);
        println!();
    }
}

const HELP: &str = "\
Hints:
  c <letter> <pos>...   letter is at these positions (- clears)
  i <letter> <pos>...   letter is in the word, not at these positions (- clears)
  x <letters>           toggle excluded letters
  s <text> <pos>        text starts at pos
  f <guess> <pattern>   feedback, e.g. f crane G-Y--
  u <letters> <n>       at least n of letters appear anywhere
  clear [c|i|x|u|all]   clear constraints
  size <n>              restart at word length n
  join several with ';'
Session:
  tab new|dup|close|next|prev|go <n>
  sort [alpha|score|freq]
  show, help, quit";

/// Run the line-based mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple(session: &mut SimpleSession<'_>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Sieve - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type hints to narrow the word list, 'help' for commands.\n");

    session.show();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match session.handle(&line) {
            Reply::Show => session.show(),
            Reply::Message(text) => println!("{text}\n"),
            Reply::Error(text) => println!("{} {text}\n", "❌".red()),
            Reply::Quit => break,
        }
    }

    println!("\n👋 Bye!\n");
    Ok(())
}
