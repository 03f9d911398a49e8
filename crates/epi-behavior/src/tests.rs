//! Unit tests for the built-in strategies.

#[cfg(test)]
mod helpers {
    use epi_core::{AgentId, Coordinates, DiseaseParams, Direction, TransmissionMode};
    use epi_world::{Agent, Behavior, Body, Gender, Grid, Lifestyle, RiskProfile};

    pub struct Idle;

    impl Behavior for Idle {
        fn decide_and_act(&mut self, _body: &mut Body<'_>) {}
        fn label(&self) -> &'static str { "idle" }
    }

    /// Runs an arbitrary closure as the agent's turn.
    pub struct Spy<F>(F);

    impl<F> Behavior for Spy<F>
    where
        F: FnMut(&mut Body<'_>) + Send + 'static,
    {
        fn decide_and_act(&mut self, body: &mut Body<'_>) {
            (self.0)(body)
        }
        fn label(&self) -> &'static str { "spy" }
    }

    pub fn spy<F>(f: F) -> Box<dyn Behavior>
    where
        F: FnMut(&mut Body<'_>) + Send + 'static,
    {
        Box::new(Spy(f))
    }

    /// Nobody catches anything, nobody dies, sickness lasts.
    pub fn inert() -> DiseaseParams {
        DiseaseParams {
            mode:                    TransmissionMode::Contact,
            infection_probability:   0.0,
            death_probability:       1.0,
            incubation_turns:        100,
            recovery_turns:          100,
            vaccine_efficacy_factor: 1.0,
        }
    }

    pub fn person() -> RiskProfile {
        RiskProfile::new(40, Gender::Female, false, false, Lifestyle::Moderate)
    }

    pub fn put(grid: &mut Grid, x: i32, y: i32, brain: Box<dyn Behavior>) -> AgentId {
        grid.place(Agent::new("", person(), inert()), brain, Coordinates::new(x, y), Direction::East)
            .unwrap()
    }

    pub fn at(grid: &Grid, id: AgentId) -> Option<Coordinates> {
        grid.agent(id).unwrap().location()
    }
}

#[cfg(test)]
mod util {
    use std::sync::{Arc, Mutex};

    use epi_core::{AgentId, Coordinates, Direction};
    use epi_world::{Agent, Grid};

    use super::helpers::{at, spy, put, Idle};
    use crate::util::{closest_agent, greedy_step, neighbors_where, random_move};

    const O: Coordinates = Coordinates::ORIGIN;

    #[test]
    fn greedy_step_threshold_one_stops_adjacent() {
        assert_eq!(greedy_step(O, Coordinates::new(1, 0), 1), None);
        assert_eq!(greedy_step(O, Coordinates::new(0, -1), 1), None);
        assert_eq!(greedy_step(O, Coordinates::new(1, 1), 1), None);
        assert_eq!(greedy_step(O, Coordinates::new(2, 0), 1), Some(Direction::East));
        assert_eq!(greedy_step(O, Coordinates::new(0, 2), 1), Some(Direction::South));
    }

    #[test]
    fn greedy_step_threshold_zero_moves_on_any_offset() {
        assert_eq!(greedy_step(O, Coordinates::new(1, 0), 0), Some(Direction::East));
        assert_eq!(greedy_step(O, Coordinates::new(-1, 0), 0), Some(Direction::West));
        assert_eq!(greedy_step(O, Coordinates::new(0, -1), 0), Some(Direction::North));
        assert_eq!(greedy_step(O, O, 0), None);
    }

    #[test]
    fn greedy_step_prefers_the_larger_axis_and_x_on_ties() {
        assert_eq!(greedy_step(O, Coordinates::new(3, 1), 1), Some(Direction::East));
        assert_eq!(greedy_step(O, Coordinates::new(1, -3), 1), Some(Direction::North));
        assert_eq!(greedy_step(O, Coordinates::new(-2, 2), 1), Some(Direction::West));
        // y dominates but is within threshold: no move even though x is not.
        assert_eq!(greedy_step(O, Coordinates::new(0, 1), 1), None);
    }

    #[test]
    fn closest_agent_breaks_ties_by_registration() {
        let found = Arc::new(Mutex::new(None));
        let sink = found.clone();
        let mut grid = Grid::new(5, 5, 1).unwrap();
        let me = put(&mut grid, 0, 0, spy(move |body| {
            *sink.lock().unwrap() = closest_agent(body, |_| true);
        }));
        let first = put(&mut grid, 2, 0, Box::new(Idle));
        put(&mut grid, 0, 2, Box::new(Idle));
        grid.take_turn(me);
        assert_eq!(*found.lock().unwrap(), Some((first, Coordinates::new(2, 0))));
    }

    #[test]
    fn closest_agent_applies_the_predicate_and_skips_the_dead() {
        let found = Arc::new(Mutex::new(None));
        let sink = found.clone();
        let mut grid = Grid::new(6, 1, 1).unwrap();
        let me = put(&mut grid, 0, 0, spy(move |body| {
            *sink.lock().unwrap() = closest_agent(body, Agent::is_sick);
        }));
        put(&mut grid, 1, 0, Box::new(Idle));
        let far = put(&mut grid, 5, 0, Box::new(Idle));
        grid.make_sick(far);
        grid.take_turn(me);
        assert_eq!(*found.lock().unwrap(), Some((far, Coordinates::new(5, 0))));
    }

    #[test]
    fn closest_agent_is_none_when_alone() {
        let found = Arc::new(Mutex::new(Some((AgentId(0), O))));
        let sink = found.clone();
        let mut grid = Grid::new(3, 3, 1).unwrap();
        let me = put(&mut grid, 1, 1, spy(move |body| {
            *sink.lock().unwrap() = closest_agent(body, |_| true);
        }));
        grid.take_turn(me);
        assert_eq!(*found.lock().unwrap(), None);
    }

    #[test]
    fn random_move_turns_clockwise_from_the_old_heading() {
        let moved = Arc::new(Mutex::new(false));
        let sink = moved.clone();
        let mut grid = Grid::new(3, 3, 5).unwrap();
        let me = put(&mut grid, 1, 1, spy(move |body| {
            body.spin(Direction::North);
            *sink.lock().unwrap() = random_move(body);
        }));
        grid.take_turn(me);
        assert!(*moved.lock().unwrap(), "every neighbor of the centre is open");
        assert_eq!(grid.agent(me).unwrap().facing(), Direction::East);
        assert_eq!(at(&grid, me).unwrap().manhattan(Coordinates::new(1, 1)), 1);
    }

    #[test]
    fn neighbors_where_scans_the_eight_cells() {
        let found = Arc::new(Mutex::new(Vec::new()));
        let sink = found.clone();
        let mut grid = Grid::new(5, 5, 1).unwrap();
        let me = put(&mut grid, 2, 2, spy(move |body| {
            *sink.lock().unwrap() = neighbors_where(body, |_| true);
        }));
        let diag = put(&mut grid, 1, 1, Box::new(Idle));
        let side = put(&mut grid, 3, 2, Box::new(Idle));
        put(&mut grid, 4, 4, Box::new(Idle));
        grid.take_turn(me);
        assert_eq!(*found.lock().unwrap(), vec![diag, side]);
    }
}

#[cfg(test)]
mod baseline {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use epi_core::{AgentId, Coordinates};
    use epi_world::{Behavior, Grid};

    use super::helpers::{at, spy, put, Idle};
    use crate::Baseline;

    #[test]
    fn sick_agent_walks_to_the_origin_and_stays() {
        let mut grid = Grid::new(6, 6, 1).unwrap();
        let me = put(&mut grid, 3, 1, Box::new(Baseline::new()));
        grid.make_sick(me);
        grid.take_turn(me);
        assert_eq!(at(&grid, me), Some(Coordinates::new(2, 1)));
        for _ in 0..10 {
            grid.take_turn(me);
        }
        assert_eq!(at(&grid, me), Some(Coordinates::ORIGIN));
    }

    #[test]
    fn healthy_agent_stops_next_to_its_company() {
        let mut grid = Grid::new(10, 1, 1).unwrap();
        let me = put(&mut grid, 0, 0, Box::new(Baseline::new()));
        put(&mut grid, 5, 0, Box::new(Idle));
        for _ in 0..10 {
            grid.take_turn(me);
        }
        assert_eq!(at(&grid, me), Some(Coordinates::new(4, 0)));
    }

    /// Wraps a `Baseline` so every turn logs where the agent started and
    /// which target it holds afterwards.
    fn watched(log: Log) -> Box<dyn Behavior> {
        let mut inner = Baseline::new();
        spy(move |body| {
            let start = body.location().unwrap();
            inner.decide_and_act(body);
            log.lock().unwrap().push((start, inner.target()));
        })
    }

    type Log = Arc<Mutex<Vec<(Coordinates, Option<AgentId>)>>>;

    #[test]
    fn vaccinated_or_sick_agents_are_not_company() {
        // A 1-row corridor with the only other agents ruled out: no target is
        // ever held and every turn is a random move along the row.
        let mut grid = Grid::new(12, 1, 3).unwrap();
        let log = Log::default();
        let me = put(&mut grid, 5, 0, watched(log.clone()));
        let jabbed = put(&mut grid, 0, 0, Box::new(Idle));
        let ill = put(&mut grid, 11, 0, Box::new(Idle));
        grid.vaccinate(jabbed);
        grid.make_sick(ill);
        for _ in 0..60 {
            grid.take_turn(me);
        }
        let log = log.lock().unwrap();
        assert_eq!(log.len(), 60);
        assert!(log.iter().all(|&(_, target)| target.is_none()), "{log:?}");
        let visited: HashSet<Coordinates> = log.iter().map(|&(start, _)| start).collect();
        assert!(visited.len() > 1, "random walk should visit several cells");
    }

    #[test]
    fn target_is_kept_until_adjacent_then_redrawn() {
        let mut grid = Grid::new(10, 1, 5).unwrap();
        let log = Log::default();
        let me = put(&mut grid, 1, 0, watched(log.clone()));
        let west = put(&mut grid, 0, 0, Box::new(Idle));
        let east = put(&mut grid, 9, 0, Box::new(Idle));
        for _ in 0..60 {
            grid.take_turn(me);
        }

        let log = log.lock().unwrap();
        let targets: HashSet<Option<AgentId>> = log.iter().map(|&(_, t)| t).collect();
        assert!(targets.contains(&Some(west)) && targets.contains(&Some(east)), "{log:?}");

        let home = |id: AgentId| if id == west { Coordinates::new(0, 0) } else { Coordinates::new(9, 0) };
        for pair in log.windows(2) {
            let (_, held) = pair[0];
            let (start, next) = pair[1];
            let held = held.unwrap();
            if start.chebyshev(home(held)) > 1 {
                assert_eq!(next, Some(held), "target dropped while still distant: {pair:?}");
            }
            if next != Some(held) {
                assert!(start.chebyshev(home(held)) <= 1, "switched before reaching {held}: {pair:?}");
            }
        }
    }
}

#[cfg(test)]
mod avoider {
    use epi_core::{Coordinates, Direction};
    use epi_world::Grid;

    use super::helpers::{at, put, Idle};
    use crate::Avoider;

    fn c(x: i32, y: i32) -> Coordinates {
        Coordinates::new(x, y)
    }

    #[test]
    fn single_axis_escape() {
        assert_eq!(Avoider::escape_directions(c(5, 5), c(7, 5), 30, 30), vec![Direction::West]);
        assert_eq!(Avoider::escape_directions(c(5, 5), c(5, 2), 30, 30), vec![Direction::South]);
    }

    #[test]
    fn two_axes_prefer_the_centre() {
        // From the north-west quadrant, East and South both lead inwards.
        assert_eq!(
            Avoider::escape_directions(c(5, 5), c(4, 4), 30, 30),
            vec![Direction::East, Direction::South],
        );
        // From the south-east quadrant only West leads inwards.
        assert_eq!(
            Avoider::escape_directions(c(20, 20), c(21, 19), 30, 30),
            vec![Direction::West],
        );
    }

    #[test]
    fn two_axes_without_a_centre_ward_option_keep_both() {
        assert_eq!(
            Avoider::escape_directions(c(5, 5), c(6, 6), 30, 30),
            vec![Direction::West, Direction::North],
        );
    }

    #[test]
    fn steps_away_from_a_close_agent() {
        let mut grid = Grid::new(30, 30, 1).unwrap();
        let me = put(&mut grid, 5, 5, Box::new(Avoider::new()));
        put(&mut grid, 7, 5, Box::new(Idle));
        grid.take_turn(me);
        assert_eq!(at(&grid, me), Some(c(4, 5)));
        assert_eq!(grid.agent(me).unwrap().facing(), Direction::West);
    }

    #[test]
    fn distant_agents_are_ignored() {
        let mut grid = Grid::new(30, 30, 1).unwrap();
        let me = put(&mut grid, 10, 10, Box::new(Avoider::new()));
        put(&mut grid, 29, 29, Box::new(Idle));
        let before = at(&grid, me).unwrap();
        grid.take_turn(me);
        let after = at(&grid, me).unwrap();
        assert_eq!(before.manhattan(after), 1, "open cell on every side, random move succeeds");
    }
}

#[cfg(test)]
mod curer {
    use epi_core::Coordinates;
    use epi_world::{Compartment, Grid};

    use super::helpers::{at, put, Idle};
    use crate::Curer;

    #[test]
    fn walks_four_cells_and_cures_once() {
        let mut grid = Grid::new(10, 5, 1).unwrap();
        let doctor = put(&mut grid, 0, 2, Box::new(Curer::new()));
        let patient = put(&mut grid, 4, 2, Box::new(Idle));
        grid.make_sick(patient);

        for _ in 0..3 {
            grid.advance_full_round();
        }
        assert_eq!(at(&grid, doctor), Some(Coordinates::new(3, 2)));
        assert_eq!(grid.agent(patient).unwrap().compartment(), Compartment::Recovered);

        for _ in 0..5 {
            grid.advance_full_round();
        }
        let s = grid.stats();
        assert_eq!(s.cured, 1);
        assert_eq!(s.dead, 0);
        assert_eq!(s.recovered, 0);
        assert!(grid.take_removed().is_empty());
    }

    #[test]
    fn cures_without_moving_when_already_adjacent() {
        let mut grid = Grid::new(5, 5, 1).unwrap();
        let doctor = put(&mut grid, 1, 1, Box::new(Curer::new()));
        let patient = put(&mut grid, 2, 2, Box::new(Idle));
        grid.make_sick(patient);
        grid.take_turn(doctor);
        assert_eq!(at(&grid, doctor), Some(Coordinates::new(1, 1)));
        assert!(grid.agent(patient).unwrap().is_recovered());
        assert_eq!(grid.stats().cured, 1);
    }

    #[test]
    fn cures_every_sick_neighbor() {
        let mut grid = Grid::new(5, 5, 1).unwrap();
        let doctor = put(&mut grid, 2, 2, Box::new(Curer::new()));
        let a = put(&mut grid, 1, 1, Box::new(Idle));
        let b = put(&mut grid, 3, 3, Box::new(Idle));
        let healthy = put(&mut grid, 2, 1, Box::new(Idle));
        grid.make_sick(a);
        grid.make_sick(b);
        grid.take_turn(doctor);
        assert_eq!(grid.stats().cured, 2);
        assert!(grid.agent(healthy).unwrap().is_susceptible());
    }
}

#[cfg(test)]
mod immunizer {
    use epi_world::Grid;

    use super::helpers::{put, Idle};
    use crate::Immunizer;

    #[test]
    fn vaccinates_the_neighborhood_on_arrival() {
        let mut grid = Grid::new(8, 3, 1).unwrap();
        let nurse = put(&mut grid, 0, 0, Box::new(Immunizer::new()));
        let a = put(&mut grid, 4, 0, Box::new(Idle));
        let b = put(&mut grid, 4, 1, Box::new(Idle));
        for _ in 0..3 {
            grid.take_turn(nurse);
        }
        assert!(grid.agent(a).unwrap().is_vaccinated());
        assert!(grid.agent(b).unwrap().is_vaccinated());
        assert!(!grid.agent(nurse).unwrap().is_vaccinated());
        assert_eq!(grid.stats().vaccinated, 2);

        for _ in 0..5 {
            grid.take_turn(nurse);
        }
        assert_eq!(grid.stats().vaccinated, 2, "nobody is vaccinated twice");
    }

    #[test]
    fn skips_the_sick() {
        let mut grid = Grid::new(3, 3, 1).unwrap();
        let nurse = put(&mut grid, 1, 1, Box::new(Immunizer::new()));
        let ill = put(&mut grid, 0, 0, Box::new(Idle));
        let well = put(&mut grid, 2, 2, Box::new(Idle));
        grid.make_sick(ill);
        grid.take_turn(nurse);
        assert!(!grid.agent(ill).unwrap().is_vaccinated());
        assert!(grid.agent(well).unwrap().is_vaccinated());
    }
}

#[cfg(test)]
mod partitioner {
    use epi_core::Coordinates;
    use epi_world::{Cell, Grid};

    use super::helpers::{at, put, Idle};
    use crate::Partitioner;

    #[test]
    fn walls_off_the_whole_row_within_a_thousand_turns() {
        let mut grid = Grid::new(30, 30, 2024).unwrap();
        put(&mut grid, 3, 3, Box::new(Partitioner::new(30, 15)));
        for _ in 0..1_000 {
            grid.advance_one_agent();
        }
        for x in 0..30 {
            assert_eq!(grid.cell_at(Coordinates::new(x, 15)), Cell::Wall, "x = {x}");
        }
        assert_eq!(grid.wall_count(), 30);
    }

    #[test]
    fn an_occupied_target_is_abandoned() {
        let mut grid = Grid::new(3, 3, 7).unwrap();
        put(&mut grid, 0, 0, Box::new(Partitioner::new(3, 1)));
        let squatter = put(&mut grid, 1, 1, Box::new(Idle));
        for _ in 0..100 {
            grid.advance_full_round();
        }
        assert_eq!(grid.cell_at(Coordinates::new(0, 1)), Cell::Wall);
        assert_eq!(grid.cell_at(Coordinates::new(2, 1)), Cell::Wall);
        assert_eq!(grid.cell_at(Coordinates::new(1, 1)), Cell::Occupied(squatter));
        assert_eq!(grid.wall_count(), 2);
    }

    #[test]
    fn starting_on_the_row_never_finishes_it() {
        let mut grid = Grid::new(5, 3, 11).unwrap();
        let me = put(&mut grid, 2, 1, Box::new(Partitioner::new(5, 1)));
        for _ in 0..1_000 {
            grid.advance_one_agent();
            assert_eq!(at(&grid, me).unwrap().y, 1);
        }
        assert!(grid.wall_count() >= 1);
        assert!(grid.wall_count() < 5);
        assert!(!grid.cell_at(at(&grid, me).unwrap()).is_wall());
    }

    #[test]
    fn targets_span_the_row() {
        let p = Partitioner::new(4, 2);
        assert_eq!(p.row(), 2);
        assert_eq!(p.remaining().len(), 4);
        assert!(p.remaining().contains(&Coordinates::new(3, 2)));
        assert_eq!(p.current(), None);
    }
}

#[cfg(test)]
mod kind {
    use crate::{BehaviorError, BehaviorKind};

    #[test]
    fn labels_match_built_strategies() {
        for kind in BehaviorKind::ALL {
            assert_eq!(kind.build(30, 15).label(), kind.label());
        }
    }

    #[test]
    fn parse_by_label() {
        assert_eq!("curer".parse::<BehaviorKind>().unwrap(), BehaviorKind::Curer);
        assert_eq!(BehaviorKind::Partitioner.to_string(), "partitioner");
        assert!(matches!("doctor".parse::<BehaviorKind>(), Err(BehaviorError::UnknownKind(s)) if s == "doctor"));
    }
}
