// src/game/session.rs
use super::catalog::{Region, RegionCatalog};
use super::difficulty::DifficultyProfile;
use super::error::{QuizError, QuizResult};
use crate::math::geometry::sphere::chord_distance;
use crate::math::types::Point3D;
use rand::Rng;
use std::collections::HashSet;

/// Darstellungszustand eines Markers, parallel zu den aktiven Regionen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerState {
    /// Punkt auf der Einheitskugel
    pub position: Point3D,
    pub visited: bool,
    /// Erst sichtbar, wenn gefunden
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub discovered: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.discovered as f32 / self.total as f32
    }

    pub fn percent(&self) -> f32 {
        self.fraction() * 100.0
    }
}

/// Name und Beschreibung für die Infokarte
#[derive(Debug, Clone, PartialEq)]
pub struct RegionInfo {
    pub name: String,
    pub description: String,
}

impl From<&Region> for RegionInfo {
    fn from(region: &Region) -> Self {
        Self {
            name: region.name.clone(),
            description: region.description.clone(),
        }
    }
}

/// Ergebnis eines Tipps auf die Globusoberfläche
#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    /// Ziel gefunden, es geht mit dem nächsten Hinweis weiter
    Hit {
        found: RegionInfo,
        next_clue: String,
        progress: Progress,
    },
    /// Letztes Ziel gefunden, die Runde ist vorbei
    Completed { found: RegionInfo, progress: Progress },
    /// Daneben, `distance` ist die Schnurlänge zum Ziel
    Miss { distance: f32 },
}

/// Eine Spielrunde: gemischte Auswahl aus dem Katalog plus Fortschritt.
///
/// `current_index` ist gleichzeitig die Anzahl gefundener Regionen,
/// die Runde ist beendet sobald er `active_regions.len()` erreicht.
#[derive(Debug, Clone)]
pub struct Session {
    active_regions: Vec<Region>,
    markers: Vec<MarkerState>,
    current_index: usize,
    profile: DifficultyProfile,
}

impl Session {
    /// Mischt die spielbaren Regionen (Fisher-Yates) und nimmt die ersten `region_count`.
    pub fn start_with_rng<R: Rng>(
        catalog: &RegionCatalog,
        profile: DifficultyProfile,
        rng: &mut R,
    ) -> QuizResult<Self> {
        let mut pool: Vec<Region> = catalog.playable().cloned().collect();
        if profile.region_count > pool.len() {
            return Err(QuizError::config(format!(
                "difficulty needs {} regions, catalog only has {} playable",
                profile.region_count,
                pool.len()
            )));
        }

        for i in (1..pool.len()).rev() {
            let j = rng.random_range(0..=i);
            pool.swap(i, j);
        }
        pool.truncate(profile.region_count);

        Self::with_order(pool, profile)
    }

    /// Runde mit fester Reihenfolge
    fn with_order(regions: Vec<Region>, profile: DifficultyProfile) -> QuizResult<Self> {
        profile.validate()?;
        if regions.len() != profile.region_count {
            return Err(QuizError::config(format!(
                "session expects {} regions, got {}",
                profile.region_count,
                regions.len()
            )));
        }
        {
            let mut names = HashSet::with_capacity(regions.len());
            if let Some(region) = regions.iter().find(|r| !names.insert(r.name.as_str())) {
                return Err(QuizError::config(format!(
                    "region '{}' appears twice in one session",
                    region.name
                )));
            }
        }
        if let Some(region) = regions.iter().find(|r| r.clue.is_none()) {
            return Err(QuizError::config(format!(
                "region '{}' has no clue and cannot be played",
                region.name
            )));
        }

        let markers = regions
            .iter()
            .map(|region| MarkerState {
                position: region.surface_point(),
                visited: false,
                visible: false,
            })
            .collect();

        Ok(Self {
            active_regions: regions,
            markers,
            current_index: 0,
            profile,
        })
    }

    pub fn is_active(&self) -> bool {
        self.current_index < self.active_regions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Gleich `current_index`, siehe Typdoku
    pub fn discovered_count(&self) -> usize {
        self.current_index()
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }

    pub fn active_regions(&self) -> &[Region] {
        &self.active_regions
    }

    pub fn markers(&self) -> &[MarkerState] {
        &self.markers
    }

    pub fn current_target(&self) -> Option<&Region> {
        self.active_regions.get(self.current_index)
    }

    pub fn current_clue(&self) -> QuizResult<&str> {
        self.current_target()
            .and_then(|region| region.clue.as_deref())
            .ok_or(QuizError::RoundComplete)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            discovered: self.discovered_count(),
            total: self.active_regions.len(),
        }
    }

    /// Wertet einen Tipp gegen das aktuelle Ziel aus.
    ///
    /// Nur das aktuelle Ziel zählt, spätere Ziele werden nie vorgezogen.
    /// Auf einer beendeten Runde passiert nichts (`None`).
    pub fn submit_guess(&mut self, point: Point3D) -> Option<GuessOutcome> {
        let target = self.current_target()?;
        let distance = chord_distance(point, target.surface_point());

        // NaN zählt nie als Treffer
        if distance.is_nan() || distance >= self.profile.acceptance_radius {
            return Some(GuessOutcome::Miss { distance });
        }

        let found = RegionInfo::from(target);
        let marker = &mut self.markers[self.current_index];
        marker.visited = true;
        marker.visible = true;
        self.current_index += 1;

        let progress = self.progress();
        let outcome = match self.current_clue() {
            Ok(clue) => GuessOutcome::Hit {
                found,
                next_clue: clue.to_string(),
                progress,
            },
            Err(_) => GuessOutcome::Completed { found, progress },
        };
        Some(outcome)
    }

    /// Öffnet die Infokarte eines bereits gefundenen Markers
    pub fn inspect_discovered_marker(&self, index: usize) -> QuizResult<RegionInfo> {
        match (self.markers.get(index), self.active_regions.get(index)) {
            (Some(marker), Some(region)) if marker.visited => Ok(RegionInfo::from(region)),
            _ => Err(QuizError::NotDiscovered { index }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::difficulty::Difficulty;
    use crate::math::geometry::sphere::to_surface_point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn clued(name: &str, lat: f32, lon: f32) -> Region {
        Region::new(name, lat, lon)
            .with_description(format!("About {}", name))
            .with_clue(format!("Find {}", name))
    }

    fn profile(acceptance_radius: f32, region_count: usize) -> DifficultyProfile {
        DifficultyProfile {
            acceptance_radius,
            region_count,
        }
    }

    fn start(catalog: &RegionCatalog, profile: DifficultyProfile) -> QuizResult<Session> {
        Session::start_with_rng(catalog, profile, &mut rand::rng())
    }

    fn test_catalog() -> RegionCatalog {
        RegionCatalog::from_regions(vec![
            clued("A", 0.0, 0.0),
            clued("B", 90.0, 0.0),
            clued("C", -45.0, 120.0),
            clued("D", 30.0, -60.0),
            clued("E", 10.0, 170.0),
            Region::new("NoClue", 50.0, 50.0),
        ])
        .unwrap()
    }

    fn scenario_session() -> Session {
        let profile = profile(0.1, 2);
        Session::with_order(vec![clued("A", 0.0, 0.0), clued("B", 90.0, 0.0)], profile).unwrap()
    }

    #[test]
    fn test_start_selects_distinct_playable_regions() {
        let catalog = test_catalog();
        let profile = profile(0.2, 4);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let session = Session::start_with_rng(&catalog, profile, &mut rng).unwrap();
            assert_eq!(session.active_regions().len(), 4);
            assert_eq!(session.markers().len(), 4);

            let names: HashSet<_> = session.active_regions().iter().map(|r| &r.name).collect();
            assert_eq!(names.len(), 4);
            for region in session.active_regions() {
                assert!(catalog.all().contains(region));
                assert!(region.is_playable());
            }
        }
    }

    #[test]
    fn test_start_resets_progress() {
        let session = start(&test_catalog(), profile(0.2, 3)).unwrap();
        assert!(session.is_active());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.discovered_count(), 0);
        assert!(session.markers().iter().all(|m| !m.visited && !m.visible));
    }

    #[test]
    fn test_shuffle_is_not_catalog_order() {
        // Über viele Seeds muss eine andere Reihenfolge als die Katalogreihenfolge entstehen
        let catalog = test_catalog();
        let profile = profile(0.2, 5);
        let catalog_order: Vec<_> = catalog.playable().map(|r| r.name.clone()).collect();
        let shuffled = (0..50).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let session = Session::start_with_rng(&catalog, profile, &mut rng).unwrap();
            let order: Vec<_> = session.active_regions().iter().map(|r| r.name.clone()).collect();
            order != catalog_order
        });
        assert!(shuffled);
    }

    #[test]
    fn test_shuffle_yields_uniform_permutations() {
        let catalog = RegionCatalog::from_regions(vec![
            clued("A", 0.0, 0.0),
            clued("B", 40.0, 80.0),
            clued("C", -40.0, -80.0),
        ])
        .unwrap();
        let runs = 6000;
        let mut permutations: HashMap<Vec<String>, usize> = HashMap::new();
        let mut first: HashMap<String, usize> = HashMap::new();
        for seed in 0..runs {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            let session = Session::start_with_rng(&catalog, profile(0.2, 3), &mut rng).unwrap();
            let order: Vec<String> = session
                .active_regions()
                .iter()
                .map(|r| r.name.clone())
                .collect();
            *first.entry(order[0].clone()).or_default() += 1;
            *permutations.entry(order).or_default() += 1;
        }

        // Alle 3! Reihenfolgen, jede etwa gleich oft
        assert_eq!(permutations.len(), 6);
        for count in permutations.values() {
            let share = *count as f64 / runs as f64;
            assert!((share - 1.0 / 6.0).abs() < 0.03, "permutation share {}", share);
        }
        for name in ["A", "B", "C"] {
            let share = first.get(name).copied().unwrap_or(0) as f64 / runs as f64;
            assert!((share - 1.0 / 3.0).abs() < 0.04, "{} first with share {}", name, share);
        }
    }

    #[test]
    fn test_nan_guess_is_miss() {
        let mut session = scenario_session();
        match session.submit_guess(Point3D::new(f32::NAN, 0.0, 0.0)) {
            Some(GuessOutcome::Miss { distance }) => assert!(distance.is_nan()),
            other => panic!("expected miss, got {:?}", other),
        }
        assert_eq!(session.current_index(), 0);
        assert!(session.markers().iter().all(|m| !m.visited && !m.visible));
    }

    #[test]
    fn test_fixed_order_checks_session_invariants() {
        let twice = Session::with_order(
            vec![clued("A", 0.0, 0.0), clued("A", 0.0, 0.0)],
            profile(0.1, 2),
        );
        assert!(matches!(twice, Err(QuizError::Config { .. })));

        let short = Session::with_order(vec![clued("A", 0.0, 0.0)], profile(0.1, 2));
        assert!(matches!(short, Err(QuizError::Config { .. })));
    }

    #[test]
    fn test_region_count_larger_than_playable_is_config_error() {
        // 5 spielbare Regionen, "NoClue" zählt nicht
        let err = start(&test_catalog(), profile(0.2, 6)).unwrap_err();
        assert!(matches!(err, QuizError::Config { .. }));
    }

    #[test]
    fn test_exact_guess_is_hit_for_every_difficulty() {
        let catalog = RegionCatalog::builtin().unwrap();
        for difficulty in Difficulty::ALL {
            let mut session = start(&catalog, difficulty.profile()).unwrap();
            let target = session.current_target().unwrap().surface_point();
            assert!(matches!(session.submit_guess(target), Some(GuessOutcome::Hit { .. })));
        }
    }

    #[test]
    fn test_antipodal_guess_is_miss_for_every_difficulty() {
        let catalog = RegionCatalog::builtin().unwrap();
        for difficulty in Difficulty::ALL {
            let mut session = start(&catalog, difficulty.profile()).unwrap();
            let target = session.current_target().unwrap().surface_point();
            match session.submit_guess(-target) {
                Some(GuessOutcome::Miss { distance }) => assert!((distance - 2.0).abs() < 1e-4),
                other => panic!("expected miss, got {:?}", other),
            }
            assert_eq!(session.current_index(), 0);
        }
    }

    #[test]
    fn test_hits_advance_sequentially() {
        let catalog = test_catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = Session::start_with_rng(&catalog, profile(0.05, 5), &mut rng).unwrap();
        let order: Vec<Region> = session.active_regions().to_vec();

        for (step, region) in order.iter().enumerate() {
            assert_eq!(session.current_index(), step);
            assert_eq!(session.current_clue().unwrap(), region.clue.as_deref().unwrap());
            let outcome = session.submit_guess(region.surface_point()).unwrap();
            assert_eq!(session.current_index(), step + 1);
            if step + 1 < order.len() {
                assert!(matches!(outcome, GuessOutcome::Hit { .. }));
            } else {
                assert!(matches!(outcome, GuessOutcome::Completed { .. }));
            }
        }
        assert!(!session.is_active());
        assert_eq!(session.discovered_count(), 5);
    }

    #[test]
    fn test_only_current_target_is_scored() {
        let mut session = scenario_session();
        // B ist noch nicht dran, ein Tipp genau auf B ist ein Fehlschlag
        let outcome = session.submit_guess(to_surface_point(90.0, 0.0)).unwrap();
        assert!(matches!(outcome, GuessOutcome::Miss { .. }));
        assert_eq!(session.current_index(), 0);
        assert!(!session.markers()[1].visited);
    }

    #[test]
    fn test_guess_after_completion_is_ignored() {
        let mut session = scenario_session();
        session.submit_guess(to_surface_point(0.0, 0.0));
        session.submit_guess(to_surface_point(90.0, 0.0));
        assert!(!session.is_active());

        assert_eq!(session.submit_guess(to_surface_point(0.0, 0.0)), None);
        assert_eq!(session.discovered_count(), 2);
        assert_eq!(session.current_clue(), Err(QuizError::RoundComplete));
    }

    #[test]
    fn test_inspect_requires_discovery() {
        let mut session = scenario_session();
        assert_eq!(
            session.inspect_discovered_marker(0),
            Err(QuizError::NotDiscovered { index: 0 })
        );
        assert_eq!(
            session.inspect_discovered_marker(9),
            Err(QuizError::NotDiscovered { index: 9 })
        );

        session.submit_guess(to_surface_point(0.0, 0.0));
        let info = session.inspect_discovered_marker(0).unwrap();
        assert_eq!(info.name, "A");
        assert_eq!(info.description, "About A");
        assert!(session.markers()[0].visible);
        assert!(session.inspect_discovered_marker(1).is_err());
    }

    #[test]
    fn test_two_region_scenario() {
        let mut session = scenario_session();
        assert_eq!(session.current_clue().unwrap(), "Find A");

        match session.submit_guess(to_surface_point(0.0, 0.0)).unwrap() {
            GuessOutcome::Hit {
                found,
                next_clue,
                progress,
            } => {
                assert_eq!(found.name, "A");
                assert_eq!(next_clue, "Find B");
                assert_eq!(progress, Progress { discovered: 1, total: 2 });
            }
            other => panic!("expected hit, got {:?}", other),
        }
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_clue().unwrap(), "Find B");

        match session.submit_guess(to_surface_point(90.0, 0.0)).unwrap() {
            GuessOutcome::Completed { found, progress } => {
                assert_eq!(found.name, "B");
                assert_eq!(progress.discovered, 2);
                assert!((progress.percent() - 100.0).abs() < 1e-4);
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert_eq!(session.discovered_count(), 2);
        assert!(!session.is_active());
    }
}
