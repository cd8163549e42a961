#![no_main]

use breedplan::Species;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let species = match Species::builtin("Roses") {
        Ok(species) => species,
        Err(_) => return,
    };
    let format = species.format();

    // Parsing never panics; anything it accepts renders and parses back.
    if let Ok(d) = format.parse_distribution(text) {
        let rendered = format.render_distribution(&d);
        let reparsed = format.parse_distribution(&rendered).expect("rendered distribution parses");
        assert_eq!(reparsed, d);
        assert_eq!(d.common_divisor(), 1);
    }
});
