use std::io::Write;

use clap::{Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use tracing::Level;

const AFTER_HELP: &str = "\
Use in .bashrc as follows:
  PS1=\"\"
  PROMPT_COMMAND=\"promptline --host MYHOST --alwayscolor\"

Use in config.fish as follows:
  function fish_prompt
    promptline --host MYHOST --alwayscolor
  end";

#[derive(Parser)]
#[command(name = "promptline")]
#[command(about = "Output a nicely readable prompt to stdout")]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Hostname to show (default: don't include)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    host: String,

    /// Include date/time
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    date: bool,

    /// Include git clean/unclean
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    git: bool,

    /// Include last part of the current working directory
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    cwd: bool,

    /// Include g4 client id
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    g4client: bool,

    /// Closer for the prompt, use \n for newlines
    #[arg(long, default_value = promptline::DEFAULT_FRAME, allow_hyphen_values = true)]
    append: String,

    /// Opener for the prompt, use \n for newlines
    #[arg(long, default_value = promptline::DEFAULT_FRAME, allow_hyphen_values = true)]
    prepend: String,

    /// Colorize even if stdout is a pipe
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    alwayscolor: bool,

    /// Log diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Boolean flags that also accept `--flag=false` and a bare `--flag`.
const OPTIONAL_BOOLS: [&str; 5] = ["date", "git", "cwd", "g4client", "alwayscolor"];

fn optional_bool(arg: Arg) -> Arg {
    arg.value_name("BOOL")
        .num_args(0..=1)
        .require_equals(true)
        .default_missing_value("true")
}

fn command() -> Command {
    OPTIONAL_BOOLS
        .iter()
        .fold(Cli::command(), |cmd, id| cmd.mut_arg(*id, optional_bool))
}

impl Cli {
    fn parse_args() -> Self {
        Self::from_arg_matches(&command().get_matches()).unwrap_or_else(|e| e.exit())
    }

    fn config(&self) -> promptline::PromptConfig {
        promptline::PromptConfig {
            host: self.host.clone(),
            date: self.date,
            git: self.git,
            cwd: self.cwd,
            g4client: self.g4client,
            prepend: self.prepend.clone(),
            append: self.append.clone(),
            always_color: self.alwayscolor,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let config = cli.config();
    let palette = promptline::Palette::detect(config.always_color);
    tracing::debug!(color = palette.is_enabled(), "palette");

    let env = promptline::Env::system(palette);
    let prompt = promptline::compose(&config, &env);

    // A prompt that cannot be written is dropped; the exit status stays 0.
    if let Err(e) = emit(&mut std::io::stdout().lock(), &prompt) {
        tracing::debug!(error = %e, "failed to write prompt");
    }

    Ok(())
}

fn emit(out: &mut impl Write, prompt: &str) -> std::io::Result<()> {
    out.write_all(prompt.as_bytes())?;
    out.flush()
}
