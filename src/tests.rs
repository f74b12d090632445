#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::SplitMix64;
    use strum::VariantArray;

    use crate::builder::NetworkBuilder;
    use crate::level::{Difficulty, GeneratorLimits, Level, LevelGenerator};
    use crate::madrid;
    use crate::network::{Neighbor, Network};
    use crate::outage::Outage;
    use crate::rarity::RarityTable;
    use crate::router::{PathStep, StepKind};
    use crate::score::{analyze, score, ScoreMode};

    // two crossing metro lines, a parallel line sharing the a1-x segment, a
    // detached circular line, and a commuter express between a1 and a3
    fn fixture() -> Network {
        let mut builder = NetworkBuilder::new();
        builder
            .line("A", ["a1", "x", "a2", "a3"])
            .line("B", ["b1", "x", "b2"])
            .line("E", ["a1", "x", "e1"])
            .line("O", ["o1", "o2", "o3", "o4"])
            .line("C-9", ["a1", "a3"])
            .circular("O")
            .commuter("C-9");
        builder.build().unwrap()
    }

    fn step(kind: StepKind, station: &str, line: Option<&str>, seq: usize) -> PathStep {
        PathStep {
            station: station.to_owned(),
            line: line.map(str::to_owned),
            kind,
            seq,
        }
    }

    #[test]
    fn sol_neighbors_on_line_2() {
        let network = madrid::network();
        assert_eq!(
            network.neighbors("2", "Sol"),
            vec![
                Neighbor {
                    station: "Sevilla".to_owned(),
                    direction: "Las Rosas".to_owned(),
                },
                Neighbor {
                    station: "Ópera".to_owned(),
                    direction: "Cuatro Caminos".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn neighbor_symmetry_and_terminus_degree() {
        let network = madrid::network();
        for line in network.lines() {
            let stations = line.stations();
            let last = stations.len() - 1;
            for (index, station) in stations.iter().enumerate() {
                let neighbors = network.neighbors(line.id(), station);
                let expected = if line.is_circular() || (index > 0 && index < last) {
                    2
                } else {
                    1
                };
                assert_eq!(neighbors.len(), expected, "line {} at {station}", line.id());
                for neighbor in &neighbors {
                    assert!(
                        network
                            .neighbors(line.id(), &neighbor.station)
                            .iter()
                            .any(|back| back.station == *station),
                        "line {}: {station} -> {} is one-way",
                        line.id(),
                        neighbor.station,
                    );
                }
            }
        }
    }

    #[test]
    fn circular_line_wraps_at_both_ends() {
        let network = fixture();
        assert_eq!(
            network.neighbors("O", "o1"),
            vec![
                Neighbor { station: "o4".to_owned(), direction: "o4".to_owned() },
                Neighbor { station: "o2".to_owned(), direction: "o4".to_owned() },
            ]
        );
        assert_eq!(
            network.neighbors("O", "o4"),
            vec![
                Neighbor { station: "o3".to_owned(), direction: "o1".to_owned() },
                Neighbor { station: "o1".to_owned(), direction: "o1".to_owned() },
            ]
        );
    }

    #[test]
    fn direction_labels_default_to_termini() {
        let network = madrid::network();
        let line = network.line("8").unwrap();
        assert_eq!(line.start_label(), "Nuevos Ministerios");
        assert_eq!(line.end_label(), "Aeropuerto T4");
        assert_eq!(
            network.line("6").unwrap().start_label(),
            "Circular (Laguna/Lucero)"
        );
    }

    #[test]
    fn lines_at_follows_declaration_order() {
        let network = madrid::network();
        assert_eq!(network.lines_at("Sol"), vec!["1", "2", "3", "C-3", "C-4"]);
        assert!(network.lines_at("Narnia").is_empty());
        assert!(network.neighbors("2", "Narnia").is_empty());
        assert!(network.neighbors("99", "Sol").is_empty());
    }

    #[test]
    fn station_listing_is_sorted_and_unique() {
        let network = madrid::network();
        let stations = network.stations();
        assert!(stations.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(stations.contains(&"Sol"));
    }

    #[test]
    fn queries_are_pure() {
        let network = madrid::network();
        assert_eq!(network.neighbors("2", "Sol"), network.neighbors("2", "Sol"));
        assert_eq!(network.lines_at("Sol"), network.lines_at("Sol"));
        assert_eq!(network.stations(), network.stations());
    }

    #[test]
    fn route_along_a_single_line() {
        let network = fixture();
        let route = network.route().between("b1", "b2").unwrap();
        assert_eq!((route.hops, route.transfers), (2, 0));
        assert_eq!(
            route.steps,
            vec![
                step(StepKind::Origin, "b1", None, 0),
                step(StepKind::Start, "b1", Some("B"), 1),
                step(StepKind::Travel, "x", Some("B"), 2),
                step(StepKind::Travel, "b2", Some("B"), 3),
            ]
        );
    }

    #[test]
    fn route_with_a_transfer() {
        let network = fixture();
        let route = network.route().metro_only().between("b1", "a3").unwrap();
        assert_eq!((route.hops, route.transfers), (3, 1));
        assert_eq!(
            route.segments(),
            vec![
                Outage::new("b1", "x", "B"),
                Outage::new("x", "a2", "A"),
                Outage::new("a2", "a3", "A"),
            ]
        );
    }

    #[test]
    fn commuter_lines_are_excluded_on_demand() {
        let network = fixture();

        let express = network.route().between("a1", "a3").unwrap();
        assert_eq!((express.hops, express.transfers), (1, 0));
        assert_eq!(express.steps.last().unwrap().line.as_deref(), Some("C-9"));

        let metro = network.route().metro_only().between("a1", "a3").unwrap();
        assert_eq!((metro.hops, metro.transfers), (3, 0));
        assert_eq!(metro.steps[1].line.as_deref(), Some("A"));
    }

    #[test]
    fn route_not_found_is_a_value() {
        let network = fixture();
        assert!(network.route().between("a1", "o1").is_none());
        assert!(network.route().between("a1", "nowhere").is_none());
        assert!(network.route().between("nowhere", "a1").is_none());
    }

    #[test]
    fn route_to_itself_is_just_the_origin() {
        let network = fixture();
        let route = network.route().between("x", "x").unwrap();
        assert_eq!((route.hops, route.transfers), (0, 0));
        assert_eq!(route.steps, vec![step(StepKind::Origin, "x", None, 0)]);
    }

    #[test]
    fn outages_block_a_single_line_only() {
        let network = fixture();
        let on_a = [Outage::new("a1", "x", "A")];
        let detour = network.route().metro_only().avoiding(&on_a).between("a1", "x").unwrap();
        assert_eq!((detour.hops, detour.transfers), (1, 0));
        assert_eq!(detour.steps.last().unwrap().line.as_deref(), Some("E"));

        let both = [Outage::new("a1", "x", "A"), Outage::new("a1", "x", "E")];
        assert!(network.route().metro_only().avoiding(&both).between("a1", "x").is_none());

        // with commuter rail allowed there is still a way around
        let around = network.route().avoiding(&both).between("a1", "x").unwrap();
        assert_eq!((around.hops, around.transfers), (3, 1));
    }

    #[test]
    fn added_outages_never_create_connectivity() {
        let network = fixture();
        let baseline = network.route().metro_only().between("b1", "a3").unwrap();

        let unrelated = [Outage::new("o1", "o2", "O")];
        let same = network.route().metro_only().avoiding(&unrelated).between("b1", "a3").unwrap();
        assert_eq!(same, baseline);

        let cut = [Outage::new("x", "a2", "A")];
        match network.route().metro_only().avoiding(&cut).between("b1", "a3") {
            Some(route) => assert!(route.hops >= baseline.hops),
            None => {}
        }
    }

    #[test]
    fn prefers_fewer_transfers_at_equal_hops() {
        let mut builder = NetworkBuilder::new();
        builder
            .line("T1", ["s", "m"])
            .line("T2", ["m", "t"])
            .line("T3", ["s", "n", "t"]);
        let network = builder.build().unwrap();

        let route = network.route().between("s", "t").unwrap();
        assert_eq!((route.hops, route.transfers), (2, 0));
        assert_eq!(route.steps.last().unwrap().line.as_deref(), Some("T3"));
    }

    #[test]
    fn sol_to_opera_detour_under_outage() {
        let network = madrid::network();
        let direct = network.route().metro_only().between("Sol", "Ópera").unwrap();
        assert_eq!((direct.hops, direct.transfers), (1, 0));

        let closed = [Outage::new("Sol", "Ópera", "2")];
        let detour = network.route().metro_only().avoiding(&closed).between("Sol", "Ópera").unwrap();
        assert_eq!((detour.hops, detour.transfers), (2, 1));
        assert_eq!(detour.steps[2].station, "Callao");
    }

    #[test]
    fn builder_rejects_bad_declarations() {
        let mut short = NetworkBuilder::new();
        short.line("A", ["lonely"]);
        assert!(short.is_valid().is_some());
        assert!(short.build().is_err());

        let mut duplicate = NetworkBuilder::new();
        duplicate.line("A", ["a", "b"]).line("A", ["c", "d"]);
        assert!(duplicate.build().is_err());

        let mut unknown = NetworkBuilder::new();
        unknown.line("A", ["a", "b"]).circular("Z");
        assert!(unknown.build().is_err());
    }

    #[test]
    fn generated_levels_are_always_solvable() {
        let network = madrid::network();
        let rarity = madrid::rarity();
        let generator = LevelGenerator::new(&network, &rarity);

        for (salt, &difficulty) in Difficulty::VARIANTS.iter().enumerate() {
            let mut rng = SplitMix64::seed_from_u64(0xFA7E + salt as u64);
            for _ in 0..8 {
                let level = generator.generate(difficulty, &mut rng);
                assert_ne!(level.start, level.end);
                assert!(level.outages.len() >= difficulty.minimum_outages());
                assert!(
                    network
                        .route()
                        .metro_only()
                        .avoiding(&level.outages)
                        .between(&level.start, &level.end)
                        .is_some(),
                    "{difficulty:?} level {level:?} is unsolvable",
                );
            }
        }
    }

    #[test]
    fn easy_levels_start_at_hubs_with_no_outages() {
        let network = madrid::network();
        let rarity = madrid::rarity();
        let generator = LevelGenerator::new(&network, &rarity);

        let mut rng = SplitMix64::seed_from_u64(7);
        for _ in 0..5 {
            let level = generator.generate(Difficulty::Easy, &mut rng);
            assert_eq!(rarity.tier(&level.start), 1);
            assert!(level.outages.is_empty());
        }
    }

    #[test]
    fn generation_is_reproducible_from_a_seed() {
        let network = madrid::network();
        let rarity = madrid::rarity();
        let generator = LevelGenerator::new(&network, &rarity);

        let mut first = SplitMix64::seed_from_u64(99);
        let mut second = SplitMix64::seed_from_u64(99);
        assert_eq!(
            generator.generate(Difficulty::Medium, &mut first),
            generator.generate(Difficulty::Medium, &mut second),
        );
    }

    #[test]
    fn generation_falls_back_to_a_trivial_level() {
        // every segment of a three-station line touches start or end, so hard
        // difficulty can never place its minimum outages
        let mut builder = NetworkBuilder::new();
        builder.line("F", ["f1", "f2", "f3"]);
        let network = builder.build().unwrap();
        let rarity = RarityTable::default();
        let generator = LevelGenerator::new(&network, &rarity).with_limits(GeneratorLimits {
            attempts: 5,
            edge_tries: 3,
        });

        let mut rng = SplitMix64::seed_from_u64(3);
        let level = generator.generate(Difficulty::Hard, &mut rng);
        assert_eq!(
            level,
            Level {
                start: "f1".to_owned(),
                end: "f2".to_owned(),
                outages: Vec::new(),
            }
        );
    }

    fn sample_path() -> (Vec<PathStep>, RarityTable) {
        let rarity: RarityTable =
            [("quiet", 3u8), ("rare", 4u8), ("legend", 5u8)].into_iter().collect();
        let path = vec![
            step(StepKind::Origin, "base", None, 0),
            step(StepKind::Start, "base", Some("A"), 1),
            step(StepKind::Travel, "rare", Some("A"), 2),
            step(StepKind::Travel, "quiet", Some("A"), 3),
            step(StepKind::Transfer, "quiet", Some("B"), 4),
            step(StepKind::Travel, "rare", Some("B"), 5),
            step(StepKind::Interruption, "rare", Some("B"), 6),
            step(StepKind::Travel, "legend", Some("B"), 7),
        ];
        (path, rarity)
    }

    #[test]
    fn free_mode_pays_rarity_once_and_transfers_always() {
        let (path, rarity) = sample_path();
        // 10 origin + 50 rare + 25 quiet + 20 transfer + 0 revisit + 10 tier-5
        assert_eq!(score(&path, ScoreMode::Free, &rarity), 115);
    }

    #[test]
    fn free_mode_scores_add_up_step_by_step() {
        let (path, rarity) = sample_path();
        let mut previous = 0;
        for index in 0..=path.len() {
            let partial = score(&path[..index], ScoreMode::Free, &rarity);
            assert!(partial >= previous);
            previous = partial;
        }
        assert_eq!(previous, 115);
    }

    #[test]
    fn work_mode_counts_travel_and_transfers_only() {
        let (path, rarity) = sample_path();
        // 4 travel steps, 1 transfer, interruptions ignored
        assert_eq!(score(&path, ScoreMode::Work, &rarity), 9);
        assert_eq!(score(&path, ScoreMode::Work, &RarityTable::default()), 9);
    }

    #[test]
    fn analysis_ranks_follow_thresholds() {
        let (path, rarity) = sample_path();

        let maze = analyze(&path, 3, ScoreMode::Work, &rarity);
        assert_eq!(maze.rank, "Corredor del Laberinto");

        let long_path: Vec<PathStep> = (0..11)
            .map(|index| step(StepKind::Travel, &format!("s{index}"), Some("A"), index))
            .collect();
        let marathon = analyze(&long_path, 0, ScoreMode::Free, &rarity);
        assert_eq!(marathon.stops, 11);
        assert_eq!(marathon.rank, "Viajero de Largo Recorrido");

        let deep: Vec<PathStep> = (0..3)
            .map(|index| step(StepKind::Travel, "quiet", Some("A"), index))
            .collect();
        let explorer = analyze(&deep, 0, ScoreMode::Free, &rarity);
        // the bonus counts steps, not unique stations
        assert_eq!(explorer.stops, 1);
        assert_eq!(explorer.rarity_bonus, 75);
        assert_eq!(explorer.rank, "Explorador");
    }

    #[test]
    fn analysis_default_rank_depends_on_mode() {
        let (_, rarity) = sample_path();
        let stroll = vec![
            step(StepKind::Origin, "base", None, 0),
            step(StepKind::Start, "base", Some("A"), 1),
            step(StepKind::Travel, "quiet", Some("A"), 2),
            step(StepKind::Travel, "quiet", Some("A"), 3),
        ];

        let free = analyze(&stroll, 0, ScoreMode::Free, &rarity);
        assert_eq!(free.rarity_bonus, 50);
        assert_eq!((free.rank, free.summary), ("El Turista", "Corto y dulce."));

        let work = analyze(&stroll, 0, ScoreMode::Work, &rarity);
        assert_eq!(work.rank, "Oficinista Puntual");
    }

    #[test]
    fn outages_are_direction_and_order_insensitive() {
        let outage = Outage::new("Sol", "Ópera", "2");
        assert_eq!(outage, Outage::new("Ópera", "Sol", "2"));
        assert!(outage.blocks("Ópera", "Sol", "2"));
        assert!(!outage.blocks("Sol", "Ópera", "1"));
        assert!(outage.touches("Sol"));
        assert!(!outage.touches("Gran Vía"));
    }
}
