// SPDX-License-Identifier: MPL-2.0
use keepsake::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
keepsake: commemorative photo gallery with background music

USAGE:
  keepsake [OPTIONS] [CONTENT_DIR]

ARGS:
  CONTENT_DIR          Directory holding photos/ and music/ (default: ./public)

OPTIONS:
  --lang LANG          Interface language (ru, en-US)
  --config-dir DIR     Directory containing settings.toml
  --i18n-dir DIR       Directory with .ftl translation overrides
  --manage             Show the content management panel
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keepsake=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --lang");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        }),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --i18n-dir");
            None
        }),
        manage: args.contains("--manage"),
        content_dir: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
