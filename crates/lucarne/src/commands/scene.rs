//! `lucarne scene` - dump the credential form scene tree as JSON.

use clap::Args;
use lucarne_atelier::{Component, FormMode, LoginPrompt};

use crate::config::load_config;

#[derive(Args, Debug, Default)]
pub struct SceneArgs {
    /// Form mode to preview (`login` or `signup`)
    #[arg(long)]
    pub mode: Option<FormMode>,
}

pub fn run(args: SceneArgs) {
    let config = load_config(None);
    let mode = args.mode.or(config.preview.mode).unwrap_or_default();

    let form = LoginPrompt::new();
    if mode == FormMode::Signup {
        form.switch_form();
    }

    match serde_json::to_string_pretty(&form.render()) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!(%err, "failed to encode scene tree"),
    }
}
