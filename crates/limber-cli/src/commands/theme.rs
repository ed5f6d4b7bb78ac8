use clap::Subcommand;
use limber_core::Store;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Switch to light mode
    Light,
    /// Switch to dark mode
    Dark,
    /// Flip the current mode
    Toggle,
    /// Print the current mode
    Show,
}

pub async fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    let light = match action {
        ThemeAction::Light => true,
        ThemeAction::Dark => false,
        ThemeAction::Toggle => !store.light_mode().await?,
        ThemeAction::Show => {
            let light = store.light_mode().await?;
            println!("{}", if light { "light" } else { "dark" });
            return Ok(());
        }
    };

    store.set_light_mode(light).await?;
    println!("{}", if light { "light" } else { "dark" });
    Ok(())
}
