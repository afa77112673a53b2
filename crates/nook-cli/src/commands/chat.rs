use std::io::{self, BufRead};

use colored::Colorize;
use tracing::debug;

use nook_bot::{MessageContext, ServerId, UserId};

use super::Context;

pub fn run(
    ctx: &Context,
    server: Option<u64>,
    server_owner: u64,
    author: u64,
) -> Result<(), String> {
    let mut bot = ctx.bot()?;
    let message_ctx = match server {
        Some(id) => MessageContext::in_server(UserId(author), ServerId(id), UserId(server_owner)),
        None => MessageContext::direct(UserId(author)),
    };
    debug!(?message_ctx, prefix = bot.prefix(), "chat started");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        if let Some(reply) = bot.respond(&message_ctx, input) {
            match reply.as_text() {
                Some(text) => println!("{text}"),
                None => println!("{}", reply.to_string().cyan()),
            }
        }
    }

    Ok(())
}
