#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing, binding and rendering a menu definition should never panic
        if let Ok(config) = toml::from_str::<adminbar::Config>(content) {
            let bar = adminbar::AdminBar::from_config(&config);
            let _ = bar.render(&config.render_context());
        }
    }
});
