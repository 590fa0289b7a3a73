use hello_responder::Config;

fn main() -> anyhow::Result<()> {
    hello_responder::init_logging();
    let config = Config::from_env()?;
    hello_responder::start(&config)?;
    Ok(())
}
