use clap::Args;
use limber_core::duration;

/// Duration fields for `limber set`. Out-of-range minutes or seconds reset
/// to zero (the product's long-standing validation policy), and the total
/// clamps up to 1 second.
#[derive(Args)]
pub struct SetArgs {
    #[arg(long, default_value = "0")]
    pub hours: u64,
    #[arg(long, default_value = "0")]
    pub minutes: u64,
    #[arg(long, default_value = "0")]
    pub seconds: u64,
}

pub async fn start() -> Result<(), Box<dyn std::error::Error>> {
    let ctl = super::controller().await?;
    match ctl.start().await? {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{}", serde_json::to_string_pretty(&ctl.snapshot().await?)?),
    }
    Ok(())
}

pub async fn pause() -> Result<(), Box<dyn std::error::Error>> {
    let ctl = super::controller().await?;
    match ctl.pause().await? {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{}", serde_json::to_string_pretty(&ctl.snapshot().await?)?),
    }
    Ok(())
}

pub async fn reset() -> Result<(), Box<dyn std::error::Error>> {
    let ctl = super::controller().await?;
    let event = ctl.reset().await?;
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

pub async fn set(args: SetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (h, m, s) = duration::validate_time(args.hours, args.minutes, args.seconds);
    let total = duration::clamp_duration(duration::to_seconds(h, m, s));

    let ctl = super::controller().await?;
    let event = ctl.set_duration(total).await?;
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}

pub async fn status() -> Result<(), Box<dyn std::error::Error>> {
    let ctl = super::controller().await?;
    let snapshot = ctl.snapshot().await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
