use crate::model::board::GameBoard;
use crate::model::door::Door;
use rand::seq::SliceRandom;

/// Open a goat-hiding door that is not the contestant's pick.
///
/// When the pick hides the car both goat doors are eligible and the host
/// chooses uniformly between them; when the pick hides a goat the reveal is
/// forced to the single remaining goat door.
pub fn open_goat_door<R: rand::Rng + ?Sized>(
    board: &GameBoard,
    pick: Door,
    rng: &mut R,
) -> Door {
    let car = board.car_door();
    let goats = board.goat_doors();
    let opened = if pick == car {
        *goats.choose(rng).unwrap_or(&goats[0])
    } else {
        // pick != car, so the third door exists and hides the other goat.
        Door::remaining(pick, car).unwrap_or(car)
    };

    debug_assert_ne!(opened, pick);
    debug_assert!(!board.prize(opened).is_car());
    opened
}

#[cfg(test)]
mod tests {
    use super::open_goat_door;
    use crate::model::board::GameBoard;
    use crate::model::door::Door;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn goat_pick_forces_the_other_goat_door() {
        let board = GameBoard::with_car(Door::One);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(open_goat_door(&board, Door::Two, &mut rng), Door::Three);
            assert_eq!(open_goat_door(&board, Door::Three, &mut rng), Door::Two);
        }
    }

    #[test]
    fn car_pick_reveals_either_goat_door() {
        let board = GameBoard::with_car(Door::One);
        let mut rng = SmallRng::seed_from_u64(9);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let opened = open_goat_door(&board, Door::One, &mut rng);
            assert_ne!(opened, Door::One);
            assert!(!board.prize(opened).is_car());
            seen[opened.index()] = true;
        }
        // Both goat doors must show up over repeated reveals.
        assert!(seen[Door::Two.index()]);
        assert!(seen[Door::Three.index()]);
        assert!(!seen[Door::One.index()]);
    }

    #[test]
    fn reveal_never_touches_pick_or_car() {
        let mut rng = SmallRng::seed_from_u64(27);
        for car in Door::ALL {
            let board = GameBoard::with_car(car);
            for pick in Door::ALL {
                for _ in 0..50 {
                    let opened = open_goat_door(&board, pick, &mut rng);
                    assert_ne!(opened, pick);
                    assert_ne!(opened, car);
                }
            }
        }
    }
}
