use clap::Parser;

use crate::config::ConfigOverrides;

/// Arguments for the run command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Bootstrap and launch:\n    tumorboot run\n\n\
                  Launch on another port:\n    tumorboot run --port 8600\n\n\
                  Create the environment with a specific interpreter:\n    tumorboot run --python python3.11")]
pub struct RunArgs {
    /// Interpreter used to create the virtual environment
    #[arg(long, env = "TUMORBOOT_PYTHON")]
    pub python: Option<String>,

    /// Port the application binds to
    #[arg(long, env = "TUMORBOOT_PORT")]
    pub port: Option<u16>,
}

impl From<&RunArgs> for ConfigOverrides {
    fn from(args: &RunArgs) -> Self {
        Self {
            python: args.python.clone(),
            port: args.port,
        }
    }
}

/// Arguments for the setup command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Bootstrap without launching:\n    tumorboot setup\n\n\
                  Bootstrap another project:\n    tumorboot setup -p ../detector")]
pub struct SetupArgs {
    /// Interpreter used to create the virtual environment
    #[arg(long, env = "TUMORBOOT_PYTHON")]
    pub python: Option<String>,
}

impl From<&SetupArgs> for ConfigOverrides {
    fn from(args: &SetupArgs) -> Self {
        Self {
            python: args.python.clone(),
            port: None,
        }
    }
}
