mod generate;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "qraftgen")]
pub(crate) enum CommandEnum {
    #[command(alias = "gen")]
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli),
        }
    }
}
