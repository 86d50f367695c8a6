use anyhow::Result;
use env_logger::{Builder, Env};
use log::error;

mod cli;
mod util;
mod cmd_get;
mod cmd_set;
mod cmd_has;
mod cmd_del;
mod cmd_union;
mod cmd_keys;
mod cmd_show;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug pkgstore get name
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        // Логируем ошибку и выходим с кодом 1.
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    match cli.cmd {
        cli::Cmd::Get { loc, key, json } =>
            cmd_get::exec(loc, key, json),

        cli::Cmd::Set { loc, key, value } =>
            cmd_set::exec(loc, key, value),

        cli::Cmd::Has { loc, key, own } =>
            cmd_has::exec(loc, key, own),

        cli::Cmd::Del { loc, keys, force } =>
            cmd_del::exec(loc, keys, force),

        cli::Cmd::Union { loc, key, values } =>
            cmd_union::exec(loc, key, values),

        cli::Cmd::Keys { loc } =>
            cmd_keys::exec(loc),

        cli::Cmd::Show { loc } =>
            cmd_show::exec(loc),
    }
}
