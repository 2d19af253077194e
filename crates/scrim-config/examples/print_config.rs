/// Example program to print the loaded configuration
///
/// Run with: cargo run -p scrim-config --example print_config

fn main() {
    // Load configuration from scrim.toml
    let config = scrim_config::ScrimConfig::load();

    println!("=== Scrim Configuration ===\n");

    println!("Demo Settings:");
    println!("  Scene: {:?}", config.demo.scene);
    println!("  Frame Step (ms): {:?}", config.demo.frame_step_ms);
    println!();

    println!("Fade Settings:");
    println!("  Fade Out (ms): {}", config.fade.fade_out_ms);
    println!("  Fade In (ms): {}", config.fade.fade_in_ms);
    println!("  Fade In Delay (ms): {}", config.fade.fade_in_delay_ms);
    println!("  Offset: {}", config.fade.offset);
    println!("  Direct Driver: {}", config.fade.direct_driver);
    println!();

    println!("Color Settings:");
    println!("  Duration (ms): {}", config.color.duration_ms);
    println!();

    println!("Splash Settings:");
    println!("  Min: {}", config.splash.min);
    println!("  Max: {}", config.splash.max);
    println!("  Half Period (ms): {}", config.splash.half_period_ms);
    println!();

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
