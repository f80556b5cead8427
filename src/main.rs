use anyhow::Result;
use clap::Parser;

use strings_tl::cli::commands::{
    configure, languages, open_session, report_load_status, translate,
};
use strings_tl::cli::{Args, Command, exit_code};
use strings_tl::output::{self, OutputConfig};
use strings_tl::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    output::init_tracing(args.verbose);

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    let (mut session, status) = open_session(args.config)?;

    // `configure --show` prints the status itself.
    if !matches!(args.command, Some(Command::Configure { show: true, .. })) {
        report_load_status(&session, &status);
    }

    match args.command {
        Some(Command::Languages) => {
            languages::run_languages(&session);
        }
        Some(Command::Configure {
            show,
            appid,
            appkey,
            languages,
        }) => {
            let options = configure::ConfigureOptions {
                show,
                appid,
                appkey,
                languages,
            };
            configure::run_configure(&mut session, &status, options)?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
                write: args.write,
            };
            translate::run_translate(&session, options).await?;
        }
    }

    Ok(())
}
