// SPDX-License-Identifier: MPL-2.0
use iced_flash::app::{self, paths, Flags};
use iced_flash::ui::notifications::Flash;
use iced_flash::ui::theming::ThemeMode;

const HELP: &str = "\
iced_flash - toast notifications and row menus demo

USAGE:
  iced_flash [OPTIONS]

OPTIONS:
  --config-dir <DIR>           Directory holding settings.toml
  --theme <light|dark|system>  Override the configured theme
  --flash <CATEGORY:MESSAGE>   Message shown at startup (repeatable),
                               e.g. --flash \"success:Saved\"
  -h, --help                   Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
        flashes: args
            .values_from_str::<_, String>("--flash")?
            .iter()
            .map(|raw| Flash::parse(raw))
            .collect(),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .with_colors(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            log::error!("{err}");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
