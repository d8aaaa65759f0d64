use crate::model::door::Door;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    /// Resolve the contestant's final pick after the host reveal. Pure: Stay keeps
    /// the initial pick, Switch takes the one door that is neither the initial
    /// pick nor the opened door.
    pub fn final_pick(self, initial: Door, opened: Door) -> Door {
        match self {
            Strategy::Stay => initial,
            // The host never opens the contestant's door, so the third door exists.
            Strategy::Switch => Door::remaining(initial, opened).unwrap_or(initial),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::Strategy;
    use crate::model::door::Door;

    #[test]
    fn stay_keeps_the_initial_pick() {
        assert_eq!(
            Strategy::Stay.final_pick(Door::One, Door::Two),
            Door::One
        );
        assert_eq!(
            Strategy::Stay.final_pick(Door::One, Door::Three),
            Door::One
        );
    }

    #[test]
    fn switch_takes_the_third_door() {
        assert_eq!(
            Strategy::Switch.final_pick(Door::One, Door::Two),
            Door::Three
        );
        assert_eq!(
            Strategy::Switch.final_pick(Door::Three, Door::One),
            Door::Two
        );
    }
}
