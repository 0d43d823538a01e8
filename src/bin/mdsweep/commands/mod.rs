mod generate;
mod post;
mod submit;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Gen(args) => generate::run(args, ctx),
        Command::Submit(args) => submit::run(args, ctx),
        Command::Post(args) => post::run(args, ctx),
    }
}
