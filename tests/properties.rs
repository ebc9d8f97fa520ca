use proptest::prelude::*;
use virusevolve::config::SimulationConfig;
use virusevolve::data::{coerce, coerce_override, PresetCatalog, GENERIC_FALLBACK};
use virusevolve::engines::simulation::{
    ImmuneSystem, Metric, Pathogen, PathogenParams, ScriptedRandom, SilentProgressCallback,
    SimulationEngine, GENOME_LENGTH,
};
use virusevolve::types::RawValue;

fn params(mutation_rate: f64, resistance_level: f64) -> PathogenParams {
    PathogenParams {
        mutation_rate,
        resistance_level,
        infectiousness: 0.5,
        virulence: 0.5,
    }
}

proptest! {
    #[test]
    fn resistance_never_decreases(
        rate in 0.0f64..1.0,
        resistance in 0.0f64..1.0,
        seed in any::<u64>(),
        generations in 1usize..150,
    ) {
        let config = SimulationConfig { generations, seed: Some(seed), ..SimulationConfig::default() };
        let mut engine = SimulationEngine::new(config).unwrap();
        let record = engine.simulate("Prop", &params(rate, resistance), SilentProgressCallback).unwrap();

        let series = record.series(Metric::Resistance);
        prop_assert_eq!(series.len(), generations);
        prop_assert!(series.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn rates_outside_unit_interval_are_rejected(
        rate in prop_oneof![-10.0f64..-1e-9, 1.0f64 + 1e-9..10.0],
        seed in any::<u64>(),
    ) {
        let config = SimulationConfig { generations: 5, seed: Some(seed), ..SimulationConfig::default() };
        let mut engine = SimulationEngine::new(config).unwrap();
        prop_assert!(engine.simulate("Prop", &params(rate, 0.3), SilentProgressCallback).is_err());
    }

    #[test]
    fn effectiveness_is_never_negative(
        rate in 0.0f64..1.0,
        resistance in 0.0f64..5.0,
        seed in any::<u64>(),
    ) {
        let config = SimulationConfig { generations: 60, seed: Some(seed), ..SimulationConfig::default() };
        let mut engine = SimulationEngine::new(config).unwrap();
        let record = engine.simulate("Prop", &params(rate, resistance), SilentProgressCallback).unwrap();

        prop_assert!(record.series(Metric::Effectiveness).iter().all(|e| *e >= 0.0));
    }

    #[test]
    fn adaptive_response_only_grows(
        genomes in prop::collection::vec(prop::array::uniform10(0u8..2), 1..40),
        resistance in 0.0f64..2.0,
    ) {
        let mut immune = ImmuneSystem::default();
        let mut previous = immune.adaptive_response;

        for genome in genomes {
            let pathogen = Pathogen::with_genome("Prop", &params(0.1, resistance), genome);
            let adapted = immune.respond_to_virus(&pathogen) < 0.5;
            prop_assert!(immune.adaptive_response >= previous);
            if adapted {
                prop_assert_eq!(immune.memory_cells, Some(genome));
            }
            previous = immune.adaptive_response;
        }
    }

    #[test]
    fn mutation_consumes_one_draw_per_gene(
        draws in prop::collection::vec(0.0f64..1.0, 1..30),
        rate in 0.0f64..1.0,
    ) {
        let mut source = ScriptedRandom::new(draws);
        let mut pathogen = Pathogen::with_genome("Prop", &params(rate, 0.3), [0; GENOME_LENGTH]);

        pathogen.mutate(&mut source);

        prop_assert_eq!(source.consumed(), GENOME_LENGTH);
        prop_assert!(pathogen.genome.iter().all(|g| *g <= 1));
    }

    #[test]
    fn numeric_strings_parse_exactly(value in -1.0e6f64..1.0e6) {
        let text = RawValue::Text(value.to_string());
        prop_assert_eq!(coerce(&text, &RawValue::Missing), value);
    }

    #[test]
    fn words_fall_back_on_numeric_default(word in "[a-z]{1,12}", default in 0.0f64..1.0) {
        prop_assume!(!word.contains("inf") && !word.contains("nan"));
        prop_assert_eq!(coerce_override(&word, &RawValue::Number(default)), default);
        prop_assert_eq!(coerce(&RawValue::Text(word), &RawValue::Missing), GENERIC_FALLBACK);
    }

    #[test]
    fn menu_selection_matches_position(choice in 1usize..=6) {
        let catalog = PresetCatalog::builtin();
        let selected = catalog.select(&choice.to_string()).unwrap();
        let by_position = catalog.iter().nth(choice - 1).unwrap();
        prop_assert_eq!(&selected.name, &by_position.name);
    }

    #[test]
    fn out_of_range_selection_is_rejected(choice in 7usize..10_000) {
        let catalog = PresetCatalog::builtin();
        prop_assert!(catalog.select(&choice.to_string()).is_err());
    }
}
