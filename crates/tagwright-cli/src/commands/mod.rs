//! CLI command implementations.

mod call;
mod eval;
mod input;
mod modifiers;
mod tags;

pub use call::{run_call, CallArgs};
pub use eval::{run_eval, EvalArgs};
pub use modifiers::{run_modifiers, run_resolve, ResolveArgs};
pub use tags::run_tags;

/// Arguments shared by the listing commands.
#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
