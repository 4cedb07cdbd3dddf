//! Renders each tutorial view and logs its render tree.
//!
//! Run with `RUST_LOG=debug` to also see registration and re-render logs.

mod views;

use trellis::{install_global, render, Component, ModifierRegistry, Session, StyleSheet};

const STYLE_SHEET: &str = include_str!("../assets/styles.toml");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut registry = ModifierRegistry::with_builtins()?;
    StyleSheet::from_toml_str(STYLE_SHEET)?.register_into(&mut registry)?;
    let registry = install_global(registry)?;
    log::info!("modifiers: {}", registry.names().join(", "));

    for (name, view) in views::all() {
        let tree = render(&view.element(registry)?);
        log::info!("{} ({} nodes):\n{:#?}", name, tree.node_count(), tree);
    }

    let mut session = Session::new(registry, views::ColorToggle::default())?;
    for _ in 0..2 {
        let changed = session.update(views::ColorToggle::toggle)?;
        log::info!(
            "toggled use_red_text={} changed={} foreground={:?}",
            session.component().use_red_text,
            changed,
            session.render_tree().style.foreground
        );
    }

    Ok(())
}
