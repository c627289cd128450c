//! Unit tests for ink-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ProducerId, TravelerId};

    #[test]
    fn index_roundtrip() {
        let id = TravelerId(5);
        assert_eq!(id.index(), 5);
        assert_eq!(TravelerId::try_from(5usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(TravelerId::default(), TravelerId::INVALID);
        assert_eq!(ProducerId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(TravelerId(3).to_string(), "TravelerId(3)");
        assert_eq!(ProducerId(0).to_string(), "ProducerId(0)");
    }
}

#[cfg(test)]
mod color {
    use crate::{Argb, InkColor};

    #[test]
    fn blank_is_opaque_black() {
        assert_eq!(Argb::BLANK.0, 0xFF00_0000);
        assert_eq!(Argb::BLANK.alpha(), 255);
        assert_eq!((Argb::BLANK.red(), Argb::BLANK.green(), Argb::BLANK.blue()), (0, 0, 0));
    }

    #[test]
    fn channel_layout_matches_packed_value() {
        let c = Argb(0xFF30_2010);
        assert_eq!(c.red(), 0x10);
        assert_eq!(c.green(), 0x20);
        assert_eq!(c.blue(), 0x30);
        assert_eq!(Argb::from_channels(0x10, 0x20, 0x30), c);
    }

    #[test]
    fn saturating_add_changes_exactly_one_channel() {
        let start = Argb::from_channels(10, 20, 30);
        for color in InkColor::ALL {
            let painted = start.saturating_add(color, 64);
            for other in InkColor::ALL {
                if other == color {
                    assert_eq!(painted.channel(other), start.channel(other) + 64);
                } else {
                    assert_eq!(painted.channel(other), start.channel(other));
                }
            }
            assert_eq!(painted.alpha(), 255);
        }
    }

    #[test]
    fn saturating_add_clamps_at_255() {
        let start = Argb::from_channels(250, 0, 0);
        let painted = start.saturating_add(InkColor::Red, 64);
        assert_eq!(painted.red(), 255, "250 + 64 must clamp, not wrap to 58");
        assert_eq!(painted.saturating_add(InkColor::Red, 64).red(), 255);
    }

    #[test]
    fn saturating_add_forces_alpha() {
        let transparent = Argb(0x0000_0000);
        assert_eq!(transparent.saturating_add(InkColor::Blue, 1).alpha(), 255);
    }

    #[test]
    fn round_robin_assignment() {
        let colors: Vec<_> = (0..6).map(InkColor::from_index).collect();
        assert_eq!(
            colors,
            [
                InkColor::Red,
                InkColor::Green,
                InkColor::Blue,
                InkColor::Red,
                InkColor::Green,
                InkColor::Blue
            ]
        );
    }
}

#[cfg(test)]
mod heading {
    use crate::{Heading, Position};

    #[test]
    fn perpendicular_pairs() {
        assert_eq!(Heading::North.perpendicular(), [Heading::East, Heading::West]);
        assert_eq!(Heading::South.perpendicular(), [Heading::East, Heading::West]);
        assert_eq!(Heading::East.perpendicular(), [Heading::North, Heading::South]);
        assert_eq!(Heading::West.perpendicular(), [Heading::North, Heading::South]);
    }

    #[test]
    fn turns() {
        assert_eq!(Heading::North.opposite(), Heading::South);
        assert_eq!(Heading::West.opposite(), Heading::East);
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::East.left(), Heading::North);
        assert_eq!(Heading::South.quarter_turns(), 2);
    }

    #[test]
    fn step_moves_one_cell_and_respects_edges() {
        let p = Position::new(1, 1);
        assert_eq!(p.step(Heading::North, 4, 4), Some(Position::new(2, 1)));
        assert_eq!(p.step(Heading::South, 4, 4), Some(Position::new(0, 1)));
        assert_eq!(p.step(Heading::East, 4, 4), Some(Position::new(1, 2)));
        assert_eq!(p.step(Heading::West, 4, 4), Some(Position::new(1, 0)));
        assert_eq!(Position::new(0, 0).step(Heading::South, 4, 4), None);
        assert_eq!(Position::new(3, 3).step(Heading::East, 4, 4), None);
    }

    #[test]
    fn span_counts_current_cell() {
        let p = Position::new(1, 2);
        assert_eq!(p.span(Heading::North, 4, 4), 3);
        assert_eq!(p.span(Heading::South, 4, 4), 2);
        assert_eq!(p.span(Heading::East, 4, 4), 2);
        assert_eq!(p.span(Heading::West, 4, 4), 3);
    }

    #[test]
    fn span_never_walks_off_grid() {
        for row in 0..5 {
            for col in 0..6 {
                let p = Position::new(row, col);
                for h in Heading::ALL {
                    let mut cur = p;
                    for _ in 1..p.span(h, 5, 6) {
                        cur = cur.step(h, 5, 6).expect("span must stay on the grid");
                    }
                    assert_eq!(cur.step(h, 5, 6), None, "span must reach the edge");
                }
            }
        }
    }

    #[test]
    fn corners() {
        assert!(Position::new(0, 0).is_corner(4, 5));
        assert!(Position::new(0, 4).is_corner(4, 5));
        assert!(Position::new(3, 0).is_corner(4, 5));
        assert!(Position::new(3, 4).is_corner(4, 5));
        assert!(!Position::new(0, 1).is_corner(4, 5));
        assert!(!Position::new(1, 1).is_corner(4, 5));
    }

    #[test]
    fn interior() {
        assert!(Position::new(1, 1).is_interior(3, 3));
        assert!(!Position::new(0, 1).is_interior(3, 3));
        assert!(!Position::new(1, 2).is_interior(3, 3));
    }
}

#[cfg(test)]
mod config {
    use crate::{InkColor, InkError, SimConfig};

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn default_catalog() {
        let cfg = SimConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (32, 30));
        assert_eq!(cfg.traveler_count, 8);
        assert_eq!(cfg.producer_count, 6);
        assert_eq!(cfg.initial_levels, [20, 10, 40]);
        assert_eq!(cfg.capacity(InkColor::Green), 50);
        assert_eq!(cfg.producer_sleep().as_micros(), 100_000);
    }

    #[test]
    fn producer_count_must_split_evenly() {
        let cfg = SimConfig { producer_count: 7, ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(InkError::ProducerCount(7)));
        let cfg = SimConfig { producer_count: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn grid_too_small() {
        let cfg = SimConfig { rows: 2, traveler_count: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(InkError::GridTooSmall { .. })));
    }

    #[test]
    fn too_many_travelers() {
        let cfg = SimConfig::new(4, 4, 5, 3, [10; 3]);
        assert_eq!(
            cfg.validate(),
            Err(InkError::TooManyTravelers { travelers: 5, interior: 4 })
        );
    }

    #[test]
    fn level_above_capacity() {
        let cfg = SimConfig::new(4, 4, 1, 3, [10; 3]);
        // default initial red level is 20
        assert!(matches!(
            cfg.validate(),
            Err(InkError::LevelAboveCapacity { color: InkColor::Red, .. })
        ));
    }

    #[test]
    fn factor_bounds() {
        let cfg = SimConfig { speed_up_factor: 1.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { slow_down_factor: 0.9, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, TravelerId, TravelerRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TravelerRng::new(12345, TravelerId(0));
        let mut r2 = TravelerRng::new(12345, TravelerId(0));
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0..1_000u32), r2.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn different_travelers_differ() {
        let mut r0 = TravelerRng::new(1, TravelerId(0));
        let mut r1 = TravelerRng::new(1, TravelerId(1));
        let a: Vec<u64> = (0..8).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..8).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent travelers should diverge");
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = TravelerRng::new(0, TravelerId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        let mut child = rng.child(3);
        assert!(child.gen_bool(1.0));
    }
}
