// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    run_ui_mode()
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    use intune_split::ROOMMATE_ID;

    println!("🏠 InTune Split v{}", intune_split::VERSION);
    println!("   Splitting expenses with {}", ROOMMATE_ID);
    println!("   Session only - nothing is saved on exit.\n");
    println!("Starting UI... (Press Esc to quit)\n");

    let mut app = ui::App::new();
    ui::run_ui(&mut app)?;

    println!("\n✅ Session closed - in-memory expenses discarded");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
