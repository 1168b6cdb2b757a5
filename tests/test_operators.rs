use std::sync::Arc;

use permga::{
    chromosome::{Chromosome, FitnessFunction, IntegerGene, PermutationValidator},
    cost::CostMatrix,
    crossover::{
        CrossoverStrategy, CycleCrossover, EdgeRecombination, GatedCrossover,
        OnePointCrossover, Pmx, SecondChild,
    },
    decision::{Always, FixedRate, Never},
    mutation::{
        Exchange, GatedMutation, GreedyReorder, MultiGeneMove, MutationStrategy,
        SingleGeneMove,
    },
    rng::RandomNumberGenerator,
};

// A sparse alphabet, so operators cannot rely on values being positions.
const ALPHABET: [usize; 9] = [3, 7, 10, 15, 21, 22, 40, 41, 99];

fn template(values: Vec<usize>) -> Chromosome<IntegerGene> {
    let fitness: Arc<dyn FitnessFunction<IntegerGene>> =
        Arc::new(|c: &Chromosome<IntegerGene>| c.values()[0] as f64);
    let validator = Arc::new(PermutationValidator::new(values.iter().copied()).unwrap());
    Chromosome::new_validated(
        values.into_iter().map(IntegerGene).collect(),
        fitness,
        validator,
    )
    .unwrap()
}

fn shuffled(
    template: &Chromosome<IntegerGene>,
    rng: &mut RandomNumberGenerator,
) -> Chromosome<IntegerGene> {
    let mut values = template.values();
    rng.shuffle(&mut values);
    template.with_values(values).unwrap()
}

fn check_crossover_closure<C>(mut crossover: C)
where
    C: CrossoverStrategy<IntegerGene>,
{
    let base = template(ALPHABET.to_vec());
    let mut rng = RandomNumberGenerator::from_seed(11);

    for _ in 0..200 {
        let parents = vec![shuffled(&base, &mut rng), shuffled(&base, &mut rng)];
        let children = crossover.crossover(&parents, &mut rng).unwrap();

        assert_eq!(children.len(), 2);
        for child in &children {
            assert!(child.is_valid(), "{:?} from {:?}", child.values(), parents);
            assert_eq!(child.gene_count(), ALPHABET.len());
        }
    }
}

fn check_mutation_closure<M>(mut mutation: M, alphabet: Vec<usize>)
where
    M: MutationStrategy<IntegerGene>,
{
    let base = template(alphabet);
    let mut rng = RandomNumberGenerator::from_seed(23);

    for _ in 0..200 {
        let chromosome = shuffled(&base, &mut rng);
        let mutated = mutation.mutate(&chromosome, &mut rng).unwrap();
        assert!(mutated.is_valid(), "{:?}", mutated.values());
    }
}

#[test]
fn test_crossovers_produce_permutations() {
    check_crossover_closure(GatedCrossover::new(Pmx::new(), Always));
    check_crossover_closure(GatedCrossover::new(CycleCrossover, Always));
    check_crossover_closure(GatedCrossover::new(OnePointCrossover::new(), Always));
    check_crossover_closure(GatedCrossover::new(
        EdgeRecombination::new(SecondChild::Duplicate),
        Always,
    ));
    check_crossover_closure(GatedCrossover::new(
        EdgeRecombination::new(SecondChild::FromOtherParent),
        Always,
    ));
}

#[test]
fn test_mutations_produce_permutations() {
    check_mutation_closure(GatedMutation::new(SingleGeneMove, Always), ALPHABET.to_vec());
    check_mutation_closure(GatedMutation::new(MultiGeneMove, Always), ALPHABET.to_vec());
    check_mutation_closure(GatedMutation::new(Exchange, Always), ALPHABET.to_vec());

    let points: Vec<(f64, f64)> = (0..9).map(|i| (i as f64, (i * i % 7) as f64)).collect();
    let costs = Arc::new(CostMatrix::from_points(&points).unwrap());
    check_mutation_closure(
        GatedMutation::new(GreedyReorder::new(costs), Always),
        (0..9).collect(),
    );
}

#[test]
fn test_cycle_crossover_worked_example() {
    let first = template(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    let second = first.with_values(vec![8, 5, 2, 1, 3, 6, 4, 7]).unwrap();
    let mut crossover = GatedCrossover::new(CycleCrossover, Always);
    let mut rng = RandomNumberGenerator::from_seed(0);

    let children = crossover.crossover(&[first, second], &mut rng).unwrap();

    assert_eq!(children[0].values(), vec![1, 5, 2, 4, 3, 6, 7, 8]);
    assert_eq!(children[1].values(), vec![8, 2, 3, 1, 5, 6, 4, 7]);
}

#[test]
fn test_pmx_with_fixed_cut() {
    let first = template(vec![1, 2, 4, 6, 0, 5, 3]);
    let second = first.with_values(vec![3, 4, 5, 2, 1, 6, 0]).unwrap();
    let mut crossover = GatedCrossover::new(Pmx::with_cut(3, 6).unwrap(), Always);
    let mut rng = RandomNumberGenerator::from_seed(0);

    let children = crossover.crossover(&[first, second], &mut rng).unwrap();

    assert_eq!(children[0].values(), vec![0, 5, 4, 2, 1, 6, 3]);
    assert_eq!(children[1].values(), vec![3, 4, 1, 6, 0, 5, 2]);
}

#[test]
fn test_declined_operators_pass_through() {
    let base = template(ALPHABET.to_vec());
    let mut rng = RandomNumberGenerator::from_seed(5);
    let parents = vec![shuffled(&base, &mut rng), shuffled(&base, &mut rng)];

    let mut crossover = GatedCrossover::new(Pmx::new(), Never);
    let children = crossover.crossover(&parents, &mut rng).unwrap();
    assert!(children[0].ptr_eq(&parents[0]));
    assert!(children[1].ptr_eq(&parents[1]));
    assert_eq!(crossover.stats().tries, 1);
    assert_eq!(crossover.stats().executions, 0);

    let mut mutation = GatedMutation::new(Exchange, Never);
    let mutated = mutation.mutate(&parents[0], &mut rng).unwrap();
    assert!(mutated.ptr_eq(&parents[0]));
}

#[test]
fn test_fixed_rate_gates_every_other_mutation() {
    let base = template(ALPHABET.to_vec());
    let mut rng = RandomNumberGenerator::from_seed(8);
    let mut mutation = GatedMutation::new(Exchange, FixedRate::new(1, 2).unwrap());

    for _ in 0..10 {
        mutation.mutate(&base, &mut rng).unwrap();
    }

    assert_eq!(mutation.stats().tries, 10);
    assert_eq!(mutation.stats().executions, 5);
}

#[test]
fn test_short_chromosomes_are_rejected() {
    let pair = template(vec![4, 9]);
    let mut rng = RandomNumberGenerator::from_seed(1);

    let mut multi = GatedMutation::new(MultiGeneMove, Always);
    assert!(multi.mutate(&pair, &mut rng).is_err());

    let mut exchange = GatedMutation::new(Exchange, Always);
    let swapped = exchange.mutate(&pair, &mut rng).unwrap();
    assert_eq!(swapped.values(), vec![9, 4]);
}
