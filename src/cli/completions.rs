use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    tumorboot completions bash > ~/.bash_completion.d/tumorboot\n\n\
                  Generate zsh completions:\n    tumorboot completions zsh > ~/.zfunc/_tumorboot\n\n\
                  Generate fish completions:\n    tumorboot completions fish > ~/.config/fish/completions/tumorboot.fish\n\n\
                  Generate PowerShell completions:\n    tumorboot completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
