use std::io::{self, Write};

use termfolio::command::{run_command, CommandRegistry, Effect};
use termfolio::context::TerminalContext;
use termfolio::vfs::FsNode;

fn main() {
    let mut ctx = TerminalContext::new();
    let registry = CommandRegistry::default_commands();

    if let Some(FsNode::File {
        content: Some(welcome),
        ..
    }) = ctx.vfs.resolve("~/README.md")
    {
        println!("{}\n", welcome);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} ", ctx.prompt());
        stdout.flush().unwrap();

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }
        let input = input.trim();
        if input == "exit" {
            break;
        }

        match run_command(input, &mut ctx, &registry) {
            Ok(output) => {
                if !output.text.is_empty() {
                    println!("{}", output.text);
                }
                // the web build hands these to the page; here we act or hint
                match &output.effect {
                    Some(Effect::ClearScreen) => print!("\x1b[2J\x1b[1;1H"),
                    Some(Effect::OpenUrl { url }) => println!("(open {} in a browser)", url),
                    Some(Effect::Download { url, .. }) => println!("(download {})", url),
                    Some(Effect::EnterGui) => println!("(the web build switches views here)"),
                    None => {}
                }
            }
            Err(message) => println!("{}", message),
        }
    }
}
