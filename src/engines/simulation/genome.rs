use super::random::RandomSource;

/// Number of positions in every pathogen genome.
pub const GENOME_LENGTH: usize = 10;

/// Genome representation for the pathogen
///
/// A genome is a fixed-length sequence of binary genes (each `0` or `1`).
/// The length never changes for the lifetime of a pathogen, so a plain array
/// is used instead of a `Vec`:
/// - **Mutation**: flipping a gene is `1 - gene`
/// - **Memory**: the immune system stores a copy, never a reference
/// - **Comparison**: element-wise equality is array equality
///
/// # Example
///
/// ```
/// use virusevolve::engines::simulation::genome::{flip, Genome};
///
/// let mut genome: Genome = [0; 10];
/// flip(&mut genome, 3);
/// assert_eq!(genome[3], 1);
/// ```
pub type Genome = [u8; GENOME_LENGTH];

/// Generate a random genome, one uniform draw per position.
pub fn random_genome(rng: &mut dyn RandomSource) -> Genome {
    let mut genome = [0u8; GENOME_LENGTH];
    for gene in genome.iter_mut() {
        *gene = if rng.next_uniform() >= 0.5 { 1 } else { 0 };
    }
    genome
}

/// Flip the gene at `position` between 0 and 1.
pub fn flip(genome: &mut Genome, position: usize) {
    genome[position] = 1 - genome[position];
}

/// Number of positions where both genomes carry the same gene.
pub fn matching_positions(a: &Genome, b: &Genome) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x == y).count()
}

/// Render a genome as a compact bit string, e.g. `0110100011`.
pub fn to_bit_string(genome: &Genome) -> String {
    genome.iter().map(|g| if *g == 0 { '0' } else { '1' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::simulation::random::ScriptedRandom;

    #[test]
    fn test_random_genome_threshold() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.49, 0.5, 0.99]);
        let genome = random_genome(&mut rng);

        assert_eq!(genome, [0, 0, 1, 1, 0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_flip_twice_restores() {
        let mut genome: Genome = [1, 0, 1, 0, 1, 0, 1, 0, 1, 0];
        let original = genome;

        flip(&mut genome, 0);
        assert_eq!(genome[0], 0);
        flip(&mut genome, 0);
        assert_eq!(genome, original);
    }

    #[test]
    fn test_matching_positions() {
        let a: Genome = [0; GENOME_LENGTH];
        let mut b: Genome = [0; GENOME_LENGTH];
        assert_eq!(matching_positions(&a, &b), GENOME_LENGTH);

        b[2] = 1;
        b[7] = 1;
        assert_eq!(matching_positions(&a, &b), 8);
    }

    #[test]
    fn test_bit_string() {
        let genome: Genome = [0, 1, 1, 0, 1, 0, 0, 0, 1, 1];
        assert_eq!(to_bit_string(&genome), "0110100011");
    }
}
