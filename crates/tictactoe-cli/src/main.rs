mod command;
mod logging;
mod record;
mod schema;
mod tui;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
