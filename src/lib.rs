//! # permga
//!
//! A genetic algorithm engine for combinatorial problems whose solutions are
//! permutations, such as the travelling salesman problem.
//!
//! A run is assembled from interchangeable strategies: a
//! [`SelectionStrategy`](selection::SelectionStrategy) picks the breeding pool, a
//! [`CrossoverStrategy`](crossover::CrossoverStrategy) recombines it, a
//! [`MutationStrategy`](mutation::MutationStrategy) perturbs every child, and a
//! [`ContinuationChain`](continuation::ContinuationChain) decides when to stop.
//! Crossover and mutation operators are gated by a
//! [`DecisionMaker`](decision::DecisionMaker) that decides per invocation whether
//! the operator fires.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use permga::chromosome::{Chromosome, FitnessFunction, IntegerGene};
//! use permga::continuation::GenerationCap;
//! use permga::cost::CostMatrix;
//! use permga::crossover::{GatedCrossover, Pmx};
//! use permga::decision::{Always, ConstantPercentage};
//! use permga::evolution::{EvolutionEngine, EvolutionOptions, EvolutionTracker};
//! use permga::mutation::{Exchange, GatedMutation};
//! use permga::population::RandomPermutationCreator;
//! use permga::rng::RandomNumberGenerator;
//! use permga::selection::TournamentSelection;
//!
//! let points = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 2.0)];
//! let costs = Arc::new(CostMatrix::from_points(&points).unwrap());
//!
//! let tour_costs = Arc::clone(&costs);
//! let fitness: Arc<dyn FitnessFunction<IntegerGene>> =
//!     Arc::new(move |c: &Chromosome<IntegerGene>| -tour_costs.tour_length(&c.values()));
//!
//! let options = EvolutionOptions::builder().population_size(20).build();
//! let mut creator = RandomPermutationCreator::new(0..points.len(), fitness, &options).unwrap();
//!
//! let mut engine = EvolutionEngine::builder()
//!     .with_selection(TournamentSelection::new(3).unwrap())
//!     .with_crossover(GatedCrossover::new(Pmx::new(), Always))
//!     .with_mutation(GatedMutation::new(
//!         Exchange,
//!         ConstantPercentage::new(20.0).unwrap(),
//!     ))
//!     .with_continuation(GenerationCap::new(50))
//!     .build()
//!     .unwrap();
//!
//! let mut tracker: EvolutionTracker<IntegerGene> = EvolutionTracker::new(&options);
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let result = engine.run(&mut creator, &mut tracker, &mut rng).unwrap();
//!
//! assert_eq!(result.generations, 50);
//! assert_eq!(result.best.gene_count(), points.len());
//! ```

pub mod chromosome;
pub mod continuation;
pub mod cost;
pub mod crossover;
pub mod decision;
pub mod error;
pub mod evolution;
pub mod mutation;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use chromosome::{Chromosome, FitnessFunction, Gene, IntegerGene, RealGene};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionEngine, EvolutionOptions, EvolutionResult, EvolutionTracker};
pub use population::{Population, PopulationCreator};
pub use rng::RandomNumberGenerator;
