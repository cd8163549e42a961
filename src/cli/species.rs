//! Species command implementation.

use super::CliError;
use breedplan::Species;

/// Execute the species command.
///
/// Without a name, lists the built-in species. With one, prints every
/// genotype of that species with its phenotype.
///
/// # Errors
///
/// Returns an error if the species is unknown.
pub(crate) fn execute(name: Option<&str>) -> Result<(), CliError> {
    let Some(name) = name else {
        for name in Species::builtin_names() {
            println!("{name}");
        }
        return Ok(());
    };

    let species = Species::builtin(name)?;
    println!(
        "{} ({} genes, {} phenotypes)",
        species.name(),
        species.gene_count(),
        species.phenotypes().len()
    );
    for genotype in species.genotypes() {
        let phenotype = species.phenotype(genotype).unwrap_or("?");
        println!("  {}  {phenotype}", species.format().render_genotype(genotype));
    }
    Ok(())
}
