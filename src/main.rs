// SPDX-License-Identifier: MPL-2.0
use iced_hud::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let config_path = match args.opt_value_from_str::<_, PathBuf>("--config") {
        Ok(path) => path,
        Err(err) => {
            tracing::error!(%err, "invalid command line");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(Flags { config_path })
}
