#![no_main]

use adminbar::markup::escaping::{escape_attr, escape_js, escape_url};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = escape_attr(s);
        let _ = escape_js(s);
        let _ = escape_url(s);
        let _ = adminbar::domain::value_objects::slugify(s);
    }
});
