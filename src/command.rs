use crate::context::TerminalContext;
use serde::Serialize;
use std::collections::HashMap;

pub type CommandResult = Result<Output, String>;

/// An action the interpreter asks the caller to perform. The interpreter
/// never downloads, opens, clears or navigates by itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    ClearScreen,
    EnterGui,
    OpenUrl { url: String },
    Download { url: String, filename: String },
}

/// One row of a directory listing, kept structured so the UI can style
/// directories differently from files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

impl ListingEntry {
    fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// What a command hands back: rendered text, an optional structured
/// listing behind it, and an optional effect for the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Output {
    pub text: String,
    pub listing: Option<Vec<ListingEntry>>,
    pub effect: Option<Effect>,
}

impl Output {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn listing(entries: Vec<ListingEntry>) -> Self {
        let text = entries
            .iter()
            .map(ListingEntry::display_name)
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            text,
            listing: Some(entries),
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult;
}

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.insert(name.to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn default_commands() -> Self {
        use crate::commands::*;

        let mut reg = Self::new();
        reg.register("help", Box::new(help::HelpCommand));
        reg.register("ls", Box::new(ls::LsCommand));
        reg.register("cd", Box::new(cd::CdCommand));
        reg.register("cat", Box::new(cat::CatCommand));
        reg.register("open", Box::new(open::OpenCommand));
        reg.register("echo", Box::new(echo::EchoCommand));
        reg.register("whoami", Box::new(whoami::WhoamiCommand));
        reg.register("date", Box::new(date::DateCommand));
        reg.register("export", Box::new(export::ExportCommand));
        reg.register("clear", Box::new(clear::ClearCommand));
        reg.register("gui", Box::new(gui::GuiCommand));

        // shortcuts that print the matching root file
        reg.register("about_me", Box::new(show::ShowCommand::new("about_me.txt")));
        reg.register("education", Box::new(show::ShowCommand::new("education.txt")));
        reg.register("skills", Box::new(show::ShowCommand::new("skills.txt")));
        reg.register(
            "experience",
            Box::new(show::ShowCommand::new("experience.txt")),
        );
        reg.register(
            "achievements",
            Box::new(show::ShowCommand::new("achievements.txt")),
        );
        reg.register("contacts", Box::new(show::ShowCommand::new("contacts.txt")));
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

/// Tokenize one input line and dispatch it. The first token is the verb,
/// matched case-insensitively; the rest are positional arguments.
pub fn run_command(
    input: &str,
    ctx: &mut TerminalContext,
    registry: &CommandRegistry,
) -> CommandResult {
    let mut parts = input.trim().split_whitespace();
    let verb = match parts.next() {
        Some(v) => v.to_lowercase(),
        None => return Ok(Output::empty()), // empty input is a no-op
    };
    let args: Vec<String> = parts.map(|s| s.to_string()).collect();

    match registry.get(&verb) {
        Some(command) => command.execute(&args, ctx),
        None => Err(format!("Command not found: {}", verb)),
    }
}
