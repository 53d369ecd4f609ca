//! `lucarne render` - render the credential form to HTML.

use clap::Args;
use lucarne_atelier::{Component, FormMode, LoginPrompt};
use lucarne_vitrine::{render_with_options, RenderOptions};

use crate::config::load_config;

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Form mode to preview (`login` or `signup`)
    #[arg(long)]
    pub mode: Option<FormMode>,

    /// Indented multi-line output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: RenderArgs) {
    let config = load_config(None);
    let mode = args.mode.or(config.preview.mode).unwrap_or_default();
    let pretty = args.pretty || config.preview.pretty.unwrap_or(false);

    let form = LoginPrompt::new();
    if mode == FormMode::Signup {
        form.switch_form();
    }

    let options = RenderOptions {
        pretty,
        ..RenderOptions::default()
    };
    println!("{}", render_with_options(&form.render(), &options));
}
