use std::f64::consts::PI;
use std::sync::Arc;
use std::time::Duration;

use permga::{
    chromosome::{Chromosome, FitnessFunction, IntegerGene, PermutationValidator},
    continuation::{ContinuationChain, GenerationCap, KnownOptimum, TimeBudget},
    cost::CostMatrix,
    crossover::{EdgeRecombination, GatedCrossover, Pmx, SecondChild},
    decision::{Always, ConstantPercentage, DriftingPercentage},
    error::{GeneticError, Result},
    evolution::{EvolutionEngine, EvolutionOptions, EvolutionTracker, LogLevel},
    mutation::{Exchange, GatedMutation, GreedyReorder, SingleGeneMove},
    population::{Population, PopulationCreator, RandomPermutationCreator},
    rng::RandomNumberGenerator,
    selection::{
        AlternatingSelection, RouletteWheelSelection, TopRandomSelection, TournamentSelection,
    },
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Cities evenly spaced on the unit circle, listed in a scrambled order.
fn circle_costs(cities: usize) -> Arc<CostMatrix> {
    let points: Vec<(f64, f64)> = (0..cities)
        .map(|i| {
            let angle = 2.0 * PI * ((i * 3) % cities) as f64 / cities as f64;
            (angle.cos(), angle.sin())
        })
        .collect();
    Arc::new(CostMatrix::from_points(&points).unwrap())
}

fn shortest_tour(costs: &Arc<CostMatrix>) -> Arc<dyn FitnessFunction<IntegerGene>> {
    let costs = Arc::clone(costs);
    Arc::new(move |c: &Chromosome<IntegerGene>| -costs.tour_length(&c.values()))
}

fn tsp_engine(costs: &Arc<CostMatrix>, cap: usize) -> EvolutionEngine<IntegerGene> {
    EvolutionEngine::builder()
        .with_selection(TournamentSelection::new(3).unwrap())
        .with_crossover(GatedCrossover::new(Pmx::new(), Always))
        .with_mutation(GatedMutation::new(
            GreedyReorder::new(Arc::clone(costs)),
            ConstantPercentage::new(30.0).unwrap(),
        ))
        .with_continuation(GenerationCap::new(cap))
        .build()
        .unwrap()
}

#[test]
fn test_tsp_improves_and_keeps_the_best() {
    init_tracing();

    let costs = circle_costs(10);
    let options = EvolutionOptions::new(30, LogLevel::Minimal);
    let mut creator =
        RandomPermutationCreator::new(0..10, shortest_tour(&costs), &options).unwrap();
    let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::new(&options);
    let mut rng = RandomNumberGenerator::from_seed(2024);

    let result = tsp_engine(&costs, 60)
        .run(&mut creator, &mut tracker, &mut rng)
        .unwrap();

    assert_eq!(result.generations, 60);
    assert!(result.best.is_valid());

    let history = tracker.best_fitness_history();
    assert_eq!(history.len(), 61);
    assert!(history.windows(2).all(|w| w[0] <= w[1]));
    assert!(result.fitness >= history[0]);
    assert_eq!(result.fitness, *history.last().unwrap());
}

#[test]
fn test_same_seed_same_result() {
    let costs = circle_costs(9);
    let options = EvolutionOptions::new(20, LogLevel::None);

    let run = |seed: u64| {
        let mut creator =
            RandomPermutationCreator::new(0..9, shortest_tour(&costs), &options).unwrap();
        let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::new(&options);
        let mut rng = RandomNumberGenerator::from_seed(seed);
        tsp_engine(&costs, 25)
            .run(&mut creator, &mut tracker, &mut rng)
            .unwrap()
    };

    let first = run(77);
    let second = run(77);

    assert_eq!(first.best.values(), second.best.values());
    assert_eq!(first.fitness, second.fitness);
}

#[test]
fn test_known_optimum_and_cap_both_have_to_stop() {
    init_tracing();

    // Counts genes sitting at their own index.
    let fitness: Arc<dyn FitnessFunction<IntegerGene>> =
        Arc::new(|c: &Chromosome<IntegerGene>| {
            c.values()
                .iter()
                .enumerate()
                .filter(|(i, value)| *i == **value)
                .count() as f64
        });
    let options = EvolutionOptions::new(24, LogLevel::None);
    let mut creator = RandomPermutationCreator::new(0..6, fitness, &options).unwrap();
    let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::new(&options);
    let mut rng = RandomNumberGenerator::from_seed(5);

    let selection = AlternatingSelection::new(
        RouletteWheelSelection::new(),
        TopRandomSelection::new(4).unwrap(),
        2,
    )
    .unwrap();

    let mut engine = EvolutionEngine::new(
        selection,
        GatedCrossover::new(EdgeRecombination::new(SecondChild::FromOtherParent), Always),
        GatedMutation::new(
            SingleGeneMove,
            DriftingPercentage::decreasing(80.0, 5.0, 10.0, 2).unwrap(),
        ),
        ContinuationChain::new()
            .with(KnownOptimum::new(2.0))
            .with(GenerationCap::new(3)),
    );

    let result = engine.run(&mut creator, &mut tracker, &mut rng).unwrap();

    assert!(result.generations >= 3);
    assert!(result.fitness >= 2.0);
    assert!(result.best.is_valid());
}

#[test]
fn test_time_budget_ends_an_otherwise_endless_run() {
    let costs = circle_costs(8);
    let options = EvolutionOptions::new(10, LogLevel::None);
    let mut creator =
        RandomPermutationCreator::new(0..8, shortest_tour(&costs), &options).unwrap();
    let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::new(&options);
    let mut rng = RandomNumberGenerator::from_seed(3);

    let mut engine = EvolutionEngine::builder()
        .with_selection(TournamentSelection::new(2).unwrap())
        .with_crossover(GatedCrossover::new(Pmx::new(), Always))
        .with_mutation(GatedMutation::new(Exchange, Always))
        .with_continuation(TimeBudget::new(Duration::from_millis(50)))
        .build()
        .unwrap();

    let result = engine.run(&mut creator, &mut tracker, &mut rng).unwrap();
    assert!(result.generations >= 1);
}

/// Hands out a fixed initial population and then follows the generation numbering
/// it was told to use.
struct ScriptedCreator {
    initial: Vec<Chromosome<IntegerGene>>,
    next_generation: usize,
    step: usize,
}

impl PopulationCreator<IntegerGene> for ScriptedCreator {
    fn create_initial_population(
        &mut self,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Population<IntegerGene>> {
        Ok(Population::with_chromosomes(0, self.initial.clone()))
    }

    fn create_empty_population(&mut self) -> Result<Population<IntegerGene>> {
        self.next_generation += self.step;
        Ok(Population::new(self.next_generation))
    }
}

fn scripted(values: Vec<Vec<usize>>, step: usize) -> ScriptedCreator {
    let fitness: Arc<dyn FitnessFunction<IntegerGene>> =
        Arc::new(|c: &Chromosome<IntegerGene>| c.values()[0] as f64);
    let validator = Arc::new(PermutationValidator::of_size(4).unwrap());
    let initial = values
        .into_iter()
        .map(|values| {
            Chromosome::new_validated(
                values.into_iter().map(IntegerGene).collect(),
                Arc::clone(&fitness),
                validator.clone(),
            )
            .unwrap()
        })
        .collect();

    ScriptedCreator {
        initial,
        next_generation: 0,
        step,
    }
}

fn simple_engine() -> EvolutionEngine<IntegerGene> {
    EvolutionEngine::builder()
        .with_selection(TournamentSelection::new(2).unwrap())
        .with_crossover(GatedCrossover::new(Pmx::new(), Always))
        .with_mutation(GatedMutation::new(Exchange, Always))
        .with_continuation(GenerationCap::new(3))
        .build()
        .unwrap()
}

#[test]
fn test_invalid_initial_population_fails_fast() {
    let mut creator = scripted(vec![vec![0, 1, 2, 3], vec![0, 0, 2, 3]], 1);
    let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::default();
    let mut rng = RandomNumberGenerator::from_seed(1);

    let result = simple_engine().run(&mut creator, &mut tracker, &mut rng);

    assert!(matches!(result, Err(GeneticError::InvalidChromosome(_))));
    assert!(tracker.best_fitness_history().is_empty());
}

#[test]
fn test_empty_initial_population_is_rejected() {
    let mut creator = scripted(Vec::new(), 1);
    let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::default();
    let mut rng = RandomNumberGenerator::from_seed(1);

    let result = simple_engine().run(&mut creator, &mut tracker, &mut rng);
    assert_eq!(result.unwrap_err(), GeneticError::EmptyPopulation);
}

#[test]
fn test_generation_gap_is_a_consistency_error() {
    let mut creator = scripted(vec![vec![0, 1, 2, 3], vec![3, 2, 1, 0]], 2);
    let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::default();
    let mut rng = RandomNumberGenerator::from_seed(1);

    let result = simple_engine().run(&mut creator, &mut tracker, &mut rng);
    assert!(matches!(result, Err(GeneticError::Consistency(_))));
}

#[test]
fn test_missing_strategy_fails_to_build() {
    let result = EvolutionEngine::<IntegerGene>::builder()
        .with_selection(TournamentSelection::new(2).unwrap())
        .with_mutation(GatedMutation::new(Exchange, Always))
        .build();

    assert!(matches!(result, Err(GeneticError::InvalidArgument(_))));
}
