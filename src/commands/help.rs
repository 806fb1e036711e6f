use crate::command::{Command, CommandResult, Output};
use crate::context::TerminalContext;

/// help
pub struct HelpCommand;

const HELP: &str = "\
Available commands:
  about_me        Display information about me
  education       Display my educational background
  skills          List my technical skills
  experience      Display my work experience
  achievements    Display my achievements
  contacts        Show contact information
  ls [dir]        List directory contents (e.g., ls projects)
  cd [dir]        Change directory
  cat [file]      Display file content
  open [file]     Open a file (e.g., open resume.pdf)
  export          Download resume.pdf
  gui             Switch to GUI mode
  whoami          Display current user
  date            Display current date
  echo [text]     Display text
  clear           Clear the terminal screen
  help            Show this message";

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Output::text(HELP))
    }
}
