//! Built-in phenotype tables.

/// A species table: `(genotype, phenotype)` for every genotype.
pub(crate) type Table = &'static [(&'static str, &'static str)];

const COSMOS: Table = &[
    ("rryyss", "White"),
    ("rryySs", "White"),
    ("rryySS", "White"),
    ("rrYyss", "Yellow"),
    ("rrYySs", "Yellow"),
    ("rrYySS", "White"),
    ("rrYYss", "Yellow"),
    ("rrYYSs", "Yellow"),
    ("rrYYSS", "Yellow"),
    ("Rryyss", "Pink"),
    ("RryySs", "Pink"),
    ("RryySS", "Pink"),
    ("RrYyss", "Orange"),
    ("RrYySs", "Orange"),
    ("RrYySS", "Pink"),
    ("RrYYss", "Orange"),
    ("RrYYSs", "Orange"),
    ("RrYYSS", "Orange"),
    ("RRyyss", "Red"),
    ("RRyySs", "Red"),
    ("RRyySS", "Red"),
    ("RRYyss", "Orange"),
    ("RRYySs", "Orange"),
    ("RRYySS", "Red"),
    ("RRYYss", "Black"),
    ("RRYYSs", "Black"),
    ("RRYYSS", "Red"),
];

const HYACINTHS: Table = &[
    ("rryyWW", "White"),
    ("rryyWw", "White"),
    ("rryyww", "Blue"),
    ("rrYyWW", "Yellow"),
    ("rrYyWw", "Yellow"),
    ("rrYyww", "White"),
    ("rrYYWW", "Yellow"),
    ("rrYYWw", "Yellow"),
    ("rrYYww", "Yellow"),
    ("RryyWW", "Red"),
    ("RryyWw", "Pink"),
    ("Rryyww", "White"),
    ("RrYyWW", "Orange"),
    ("RrYyWw", "Yellow"),
    ("RrYyww", "Yellow"),
    ("RrYYWW", "Orange"),
    ("RrYYWw", "Yellow"),
    ("RrYYww", "Yellow"),
    ("RRyyWW", "Red"),
    ("RRyyWw", "Red"),
    ("RRyyww", "Red"),
    ("RRYyWW", "Blue"),
    ("RRYyWw", "Red"),
    ("RRYyww", "Red"),
    ("RRYYWW", "Purple"),
    ("RRYYWw", "Purple"),
    ("RRYYww", "Purple"),
];

const LILIES: Table = &[
    ("rryyss", "White"),
    ("rryySs", "White"),
    ("rryySS", "White"),
    ("rrYyss", "Yellow"),
    ("rrYySs", "White"),
    ("rrYySS", "White"),
    ("rrYYss", "Yellow"),
    ("rrYYSs", "Yellow"),
    ("rrYYSS", "White"),
    ("Rryyss", "Red"),
    ("RryySs", "Pink"),
    ("RryySS", "White"),
    ("RrYyss", "Orange"),
    ("RrYySs", "Yellow"),
    ("RrYySS", "Yellow"),
    ("RrYYss", "Orange"),
    ("RrYYSs", "Yellow"),
    ("RrYYSS", "Yellow"),
    ("RRyyss", "Black"),
    ("RRyySs", "Red"),
    ("RRyySS", "Pink"),
    ("RRYyss", "Black"),
    ("RRYySs", "Red"),
    ("RRYySS", "Pink"),
    ("RRYYss", "Orange"),
    ("RRYYSs", "Orange"),
    ("RRYYSS", "White"),
];

const MUMS: Table = &[
    ("rryyWW", "White"),
    ("rryyWw", "White"),
    ("rryyww", "Purple"),
    ("rrYyWW", "Yellow"),
    ("rrYyWw", "Yellow"),
    ("rrYyww", "White"),
    ("rrYYWW", "Yellow"),
    ("rrYYWw", "Yellow"),
    ("rrYYww", "Yellow"),
    ("RryyWW", "Pink"),
    ("RryyWw", "Pink"),
    ("Rryyww", "Pink"),
    ("RrYyWW", "Yellow"),
    ("RrYyWw", "Red"),
    ("RrYyww", "Pink"),
    ("RrYYWW", "Purple"),
    ("RrYYWw", "Purple"),
    ("RrYYww", "Purple"),
    ("RRyyWW", "Red"),
    ("RRyyWw", "Red"),
    ("RRyyww", "Red"),
    ("RRYyWW", "Purple"),
    ("RRYyWw", "Purple"),
    ("RRYyww", "Red"),
    ("RRYYWW", "Green"),
    ("RRYYWw", "Green"),
    ("RRYYww", "Red"),
];

const PANSIES: Table = &[
    ("rryyWW", "White"),
    ("rryyWw", "White"),
    ("rryyww", "Blue"),
    ("rrYyWW", "Yellow"),
    ("rrYyWw", "Yellow"),
    ("rrYyww", "Blue"),
    ("rrYYWW", "Yellow"),
    ("rrYYWw", "Yellow"),
    ("rrYYww", "Yellow"),
    ("RryyWW", "Red"),
    ("RryyWw", "Red"),
    ("Rryyww", "Blue"),
    ("RrYyWW", "Orange"),
    ("RrYyWw", "Orange"),
    ("RrYyww", "Orange"),
    ("RrYYWW", "Yellow"),
    ("RrYYWw", "Yellow"),
    ("RrYYww", "Yellow"),
    ("RRyyWW", "Red"),
    ("RRyyWw", "Red"),
    ("RRyyww", "Purple"),
    ("RRYyWW", "Red"),
    ("RRYyWw", "Red"),
    ("RRYyww", "Purple"),
    ("RRYYWW", "Orange"),
    ("RRYYWw", "Orange"),
    ("RRYYww", "Purple"),
];

const ROSES: Table = &[
    ("rryyWWss", "White"),
    ("rryyWWSs", "White"),
    ("rryyWWSS", "White"),
    ("rryyWwss", "White"),
    ("rryyWwSs", "White"),
    ("rryyWwSS", "White"),
    ("rryywwss", "Purple"),
    ("rryywwSs", "Purple"),
    ("rryywwSS", "Purple"),
    ("rrYyWWss", "Yellow"),
    ("rrYyWWSs", "Yellow"),
    ("rrYyWWSS", "Yellow"),
    ("rrYyWwss", "White"),
    ("rrYyWwSs", "White"),
    ("rrYyWwSS", "White"),
    ("rrYywwss", "Purple"),
    ("rrYywwSs", "Purple"),
    ("rrYywwSS", "Purple"),
    ("rrYYWWss", "Yellow"),
    ("rrYYWWSs", "Yellow"),
    ("rrYYWWSS", "Yellow"),
    ("rrYYWwss", "Yellow"),
    ("rrYYWwSs", "Yellow"),
    ("rrYYWwSS", "Yellow"),
    ("rrYYwwss", "White"),
    ("rrYYwwSs", "White"),
    ("rrYYwwSS", "White"),
    ("RryyWWss", "Red"),
    ("RryyWWSs", "Pink"),
    ("RryyWWSS", "White"),
    ("RryyWwss", "Red"),
    ("RryyWwSs", "Pink"),
    ("RryyWwSS", "White"),
    ("Rryywwss", "Red"),
    ("RryywwSs", "Pink"),
    ("RryywwSS", "Purple"),
    ("RrYyWWss", "Orange"),
    ("RrYyWWSs", "Yellow"),
    ("RrYyWWSS", "Yellow"),
    ("RrYyWwss", "Red"),
    ("RrYyWwSs", "Pink"),
    ("RrYyWwSS", "White"),
    ("RrYywwss", "Red"),
    ("RrYywwSs", "Pink"),
    ("RrYywwSS", "Purple"),
    ("RrYYWWss", "Orange"),
    ("RrYYWWSs", "Yellow"),
    ("RrYYWWSS", "Yellow"),
    ("RrYYWwss", "Orange"),
    ("RrYYWwSs", "Yellow"),
    ("RrYYWwSS", "Yellow"),
    ("RrYYwwss", "Red"),
    ("RrYYwwSs", "Pink"),
    ("RrYYwwSS", "White"),
    ("RRyyWWss", "Black"),
    ("RRyyWWSs", "Red"),
    ("RRyyWWSS", "Pink"),
    ("RRyyWwss", "Black"),
    ("RRyyWwSs", "Red"),
    ("RRyyWwSS", "Pink"),
    ("RRyywwss", "Black"),
    ("RRyywwSs", "Red"),
    ("RRyywwSS", "Pink"),
    ("RRYyWWss", "Orange"),
    ("RRYyWWSs", "Orange"),
    ("RRYyWWSS", "Yellow"),
    ("RRYyWwss", "Red"),
    ("RRYyWwSs", "Red"),
    ("RRYyWwSS", "White"),
    ("RRYywwss", "Black"),
    ("RRYywwSs", "Red"),
    ("RRYywwSS", "Purple"),
    ("RRYYWWss", "Orange"),
    ("RRYYWWSs", "Orange"),
    ("RRYYWWSS", "Yellow"),
    ("RRYYWwss", "Orange"),
    ("RRYYWwSs", "Orange"),
    ("RRYYWwSS", "Yellow"),
    ("RRYYwwss", "Blue"),
    ("RRYYwwSs", "Red"),
    ("RRYYwwSS", "White"),
];

const TULIPS: Table = &[
    ("rryyss", "White"),
    ("rryySs", "White"),
    ("rryySS", "White"),
    ("rrYyss", "Yellow"),
    ("rrYySs", "Yellow"),
    ("rrYySS", "White"),
    ("rrYYss", "Yellow"),
    ("rrYYSs", "Yellow"),
    ("rrYYSS", "Yellow"),
    ("Rryyss", "Red"),
    ("RryySs", "Pink"),
    ("RryySS", "White"),
    ("RrYyss", "Orange"),
    ("RrYySs", "Yellow"),
    ("RrYySS", "Yellow"),
    ("RrYYss", "Orange"),
    ("RrYYSs", "Yellow"),
    ("RrYYSS", "Yellow"),
    ("RRyyss", "Black"),
    ("RRyySs", "Red"),
    ("RRyySS", "Red"),
    ("RRYyss", "Black"),
    ("RRYySs", "Red"),
    ("RRYySS", "Red"),
    ("RRYYss", "Purple"),
    ("RRYYSs", "Purple"),
    ("RRYYSS", "Purple"),
];

const WINDFLOWERS: Table = &[
    ("rrooWW", "White"),
    ("rrooWw", "White"),
    ("rrooww", "Blue"),
    ("rrOoWW", "Orange"),
    ("rrOoWw", "Orange"),
    ("rrOoww", "Blue"),
    ("rrOOWW", "Orange"),
    ("rrOOWw", "Orange"),
    ("rrOOww", "Orange"),
    ("RrooWW", "Red"),
    ("RrooWw", "Red"),
    ("Rrooww", "Blue"),
    ("RrOoWW", "Pink"),
    ("RrOoWw", "Pink"),
    ("RrOoww", "Pink"),
    ("RrOOWW", "Orange"),
    ("RrOOWw", "Orange"),
    ("RrOOww", "Orange"),
    ("RRooWW", "Red"),
    ("RRooWw", "Red"),
    ("RRooww", "Purple"),
    ("RROoWW", "Red"),
    ("RROoWw", "Red"),
    ("RROoww", "Purple"),
    ("RROOWW", "Pink"),
    ("RROOWw", "Pink"),
    ("RROOww", "Purple"),
];

/// Every built-in species, by display name.
pub(crate) const BUILTIN: &[(&str, Table)] = &[
    ("Cosmos", COSMOS),
    ("Hyacinths", HYACINTHS),
    ("Lilies", LILIES),
    ("Mums", MUMS),
    ("Pansies", PANSIES),
    ("Roses", ROSES),
    ("Tulips", TULIPS),
    ("Windflowers", WINDFLOWERS),
];
