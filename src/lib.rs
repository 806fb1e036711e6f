//! Core of a terminal-style portfolio site: an immutable virtual file
//! tree, a path resolver and a command interpreter. The same engine backs
//! the browser terminal (through wasm-bindgen) and the native REPL binary.

pub mod command;
pub mod commands;
pub mod context;
pub mod path;
pub mod portfolio;
pub mod vfs;

#[cfg(target_arch = "wasm32")]
mod events;

use command::{run_command, CommandRegistry, Effect, ListingEntry};
use context::TerminalContext;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// readable panics in the browser console
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// One terminal session, kept alive between calls from the UI: the tree,
/// the working directory and the verb registry.
#[wasm_bindgen]
pub struct Terminal {
    ctx: TerminalContext,
    registry: CommandRegistry,
}

/// Response wrapper handed to the JS side.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<Vec<ListingEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
    pub cwd: String,
}

#[wasm_bindgen]
impl Terminal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        Terminal {
            ctx: TerminalContext::new(),
            registry: CommandRegistry::default_commands(),
        }
    }

    /// Run one input line and return the response for rendering. Effects
    /// are also mirrored to the page as events, see `events`.
    pub fn execute_command(&mut self, input: &str) -> JsValue {
        let response = match run_command(input, &mut self.ctx, &self.registry) {
            Ok(output) => {
                #[cfg(target_arch = "wasm32")]
                if let Some(effect) = &output.effect {
                    events::emit_effect(effect);
                }
                CommandResponse {
                    success: true,
                    output: output.text,
                    listing: output.listing,
                    effect: output.effect,
                    cwd: self.ctx.cwd.clone(),
                }
            }
            Err(message) => CommandResponse {
                success: false,
                output: message,
                listing: None,
                effect: None,
                cwd: self.ctx.cwd.clone(),
            },
        };
        serde_wasm_bindgen::to_value(&response).unwrap_or(JsValue::NULL)
    }

    pub fn current_directory(&self) -> String {
        self.ctx.cwd.clone()
    }

    pub fn prompt(&self) -> String {
        self.ctx.prompt()
    }

    /// The README body the UI types out when the session starts.
    pub fn welcome_message(&self) -> String {
        match self.ctx.vfs.resolve("~/README.md") {
            Some(vfs::FsNode::File {
                content: Some(text),
                ..
            }) => text.clone(),
            _ => String::new(),
        }
    }

    /// Sorted verb list, used by the UI for completion.
    pub fn command_list(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.registry.command_names()).unwrap_or(JsValue::NULL)
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
